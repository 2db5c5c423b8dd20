//! DBR lead records and webhook reconciliation primitives.
//!
//! A lead's identity is derived deterministically from its phone number:
//! strip every non-digit character and prefix the campaign namespace. There
//! is no surrogate key — two phone strings that collapse to the same digit
//! sequence are the same lead.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const LEAD_ID_PREFIX: &str = "dbr-";

/// Document `_type` for lead records in the store.
pub const LEAD_DOC_TYPE: &str = "dbrLead";

/// Derive the stable lead id from a phone number.
pub fn lead_id(phone_number: &str) -> String {
    let digits: String = phone_number.chars().filter(char::is_ascii_digit).collect();
    format!("{LEAD_ID_PREFIX}{digits}")
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LeadValidationError {
    #[error("phoneNumber is required")]
    MissingPhoneNumber,
}

/// Contact status — the DBR campaign state machine. Closed set; the wire
/// spellings are fixed by the spreadsheet automation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactStatus {
    #[serde(rename = "HOT")]
    Hot,
    #[serde(rename = "POSITIVE")]
    Positive,
    #[serde(rename = "NEGATIVE")]
    Negative,
    #[serde(rename = "REMOVED")]
    Removed,
    #[serde(rename = "Sent_1")]
    Sent1,
    #[serde(rename = "Sent_2")]
    Sent2,
    #[serde(rename = "Sent_3")]
    Sent3,
    #[serde(rename = "PAUSED")]
    Paused,
    #[serde(rename = "SCHEDULED")]
    Scheduled,
    #[serde(rename = "CONVERTED")]
    Converted,
}

impl ContactStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hot => "HOT",
            Self::Positive => "POSITIVE",
            Self::Negative => "NEGATIVE",
            Self::Removed => "REMOVED",
            Self::Sent1 => "Sent_1",
            Self::Sent2 => "Sent_2",
            Self::Sent3 => "Sent_3",
            Self::Paused => "PAUSED",
            Self::Scheduled => "SCHEDULED",
            Self::Converted => "CONVERTED",
        }
    }
}

/// Lead sentiment, recorded separately from contact status. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadSentiment {
    Positive,
    Neutral,
    Negative,
    Opportunity,
}

impl LeadSentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
            Self::Opportunity => "opportunity",
        }
    }
}

/// A stored lead record. Created on the first webhook update for a phone
/// number, merge-patched in place on every subsequent one; never deleted
/// (opt-out is the `REMOVED` status, not removal).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_type", default = "lead_doc_type")]
    pub doc_type: String,
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_name: Option<String>,
    pub contact_status: ContactStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_sentiment: Option<LeadSentiment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m1_sent: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m2_sent: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m3_sent: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_received: Option<DateTime<Utc>>,
    #[serde(default)]
    pub conversation_history: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_date: Option<NaiveDate>,
}

fn lead_doc_type() -> String {
    LEAD_DOC_TYPE.to_string()
}

/// A partial lead-state update as delivered by the spreadsheet automation.
/// `phoneNumber` is the only required field; datetime fields arrive as
/// strings and are parsed leniently.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadUpdate {
    pub phone_number: Option<String>,
    pub first_name: Option<String>,
    pub second_name: Option<String>,
    pub contact_status: Option<ContactStatus>,
    pub lead_sentiment: Option<LeadSentiment>,
    pub conversation_history: Option<String>,
    pub m1_sent: Option<String>,
    pub m2_sent: Option<String>,
    pub m3_sent: Option<String>,
    pub reply_received: Option<String>,
    pub install_date: Option<String>,
}

impl LeadUpdate {
    /// The phone number, or a validation error when absent or blank.
    pub fn phone(&self) -> Result<&str, LeadValidationError> {
        match self.phone_number.as_deref().map(str::trim) {
            Some(phone) if !phone.is_empty() => Ok(phone),
            _ => Err(LeadValidationError::MissingPhoneNumber),
        }
    }

    /// The merge-patch `set` object for this update: only provided fields,
    /// with datetimes normalized to ISO-8601. Empty and unparseable date
    /// strings are skipped — absent from the patch, stored value untouched.
    pub fn to_set_patch(&self) -> serde_json::Map<String, serde_json::Value> {
        let mut set = serde_json::Map::new();
        if let Ok(phone) = self.phone() {
            set.insert("phoneNumber".to_string(), phone.into());
        }
        if let Some(first_name) = &self.first_name {
            set.insert("firstName".to_string(), first_name.clone().into());
        }
        if let Some(second_name) = &self.second_name {
            set.insert("secondName".to_string(), second_name.clone().into());
        }
        if let Some(status) = self.contact_status {
            set.insert("contactStatus".to_string(), status.as_str().into());
        }
        if let Some(sentiment) = self.lead_sentiment {
            set.insert("leadSentiment".to_string(), sentiment.as_str().into());
        }
        if let Some(history) = &self.conversation_history {
            set.insert("conversationHistory".to_string(), history.clone().into());
        }
        for (field, raw) in [
            ("m1Sent", &self.m1_sent),
            ("m2Sent", &self.m2_sent),
            ("m3Sent", &self.m3_sent),
            ("replyReceived", &self.reply_received),
        ] {
            let Some(raw) = raw.as_deref() else { continue };
            if raw.trim().is_empty() {
                continue;
            }
            match parse_datetime(raw) {
                Some(datetime) => {
                    set.insert(
                        field.to_string(),
                        datetime.to_rfc3339_opts(SecondsFormat::Secs, true).into(),
                    );
                }
                None => {
                    tracing::warn!(field, value = raw, "unparseable datetime in lead update, leaving field untouched");
                }
            }
        }
        if let Some(raw) = self.install_date.as_deref() {
            match parse_date(raw) {
                Some(date) => {
                    set.insert("installDate".to_string(), date.to_string().into());
                }
                None if raw.trim().is_empty() => {}
                None => {
                    tracing::warn!(field = "installDate", value = raw, "unparseable date in lead update, leaving field untouched");
                }
            }
        }
        set
    }
}

impl LeadRecord {
    /// Build a fresh record from the first update seen for a phone number.
    /// `contactStatus` defaults to the initial sequence value (`Sent_1`).
    pub fn from_update(update: &LeadUpdate) -> Result<Self, LeadValidationError> {
        let phone = update.phone()?;
        let mut record = Self {
            id: lead_id(phone),
            doc_type: LEAD_DOC_TYPE.to_string(),
            phone_number: phone.to_string(),
            first_name: None,
            second_name: None,
            contact_status: ContactStatus::Sent1,
            lead_sentiment: None,
            m1_sent: None,
            m2_sent: None,
            m3_sent: None,
            reply_received: None,
            conversation_history: String::new(),
            install_date: None,
        };
        record.apply(update);
        Ok(record)
    }

    /// Merge-patch: overwrite only the fields present in the update. Absent
    /// fields keep their stored values. Present-but-unparseable datetimes
    /// are treated as not provided, with a warning.
    pub fn apply(&mut self, update: &LeadUpdate) {
        if let Ok(phone) = update.phone() {
            self.phone_number = phone.to_string();
        }
        if let Some(first_name) = &update.first_name {
            self.first_name = Some(first_name.clone());
        }
        if let Some(second_name) = &update.second_name {
            self.second_name = Some(second_name.clone());
        }
        if let Some(status) = update.contact_status {
            self.contact_status = status;
        }
        if let Some(sentiment) = update.lead_sentiment {
            self.lead_sentiment = Some(sentiment);
        }
        if let Some(history) = &update.conversation_history {
            self.conversation_history = history.clone();
        }
        apply_datetime(&mut self.m1_sent, "m1Sent", update.m1_sent.as_deref());
        apply_datetime(&mut self.m2_sent, "m2Sent", update.m2_sent.as_deref());
        apply_datetime(&mut self.m3_sent, "m3Sent", update.m3_sent.as_deref());
        apply_datetime(
            &mut self.reply_received,
            "replyReceived",
            update.reply_received.as_deref(),
        );
        if let Some(raw) = update.install_date.as_deref() {
            match parse_date(raw) {
                Some(date) => self.install_date = Some(date),
                None if raw.trim().is_empty() => {}
                None => {
                    tracing::warn!(field = "installDate", value = raw, "unparseable date in lead update, leaving field untouched");
                }
            }
        }
    }
}

fn apply_datetime(slot: &mut Option<DateTime<Utc>>, field: &str, raw: Option<&str>) {
    let Some(raw) = raw else { return };
    if raw.trim().is_empty() {
        return;
    }
    match parse_datetime(raw) {
        Some(datetime) => *slot = Some(datetime),
        None => {
            tracing::warn!(field, value = raw, "unparseable datetime in lead update, leaving field untouched");
        }
    }
}

/// Lenient datetime parser for automation payloads. Accepts RFC 3339,
/// ISO-8601 without an offset, `DD/MM/YYYY HH:MM`, and bare ISO dates
/// (midnight UTC). Anything else is `None` — "not provided".
pub fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%d/%m/%Y %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

/// Lenient date parser: ISO or `DD/MM/YYYY`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%d/%m/%Y"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(phone: &str) -> LeadUpdate {
        LeadUpdate {
            phone_number: Some(phone.to_string()),
            ..LeadUpdate::default()
        }
    }

    #[test]
    fn id_collapses_equivalent_phone_formats() {
        // Same digit sequence after stripping separators.
        assert_eq!(lead_id("07911 123456"), lead_id("(0791) 112-3456"));
        assert_eq!(lead_id("07911 123456"), "dbr-07911123456");
    }

    #[test]
    fn id_does_not_collapse_distinct_digit_sequences() {
        // International prefix yields different digits, so a different lead.
        assert_ne!(lead_id("+447911123456"), lead_id("07911123456"));
        assert_eq!(lead_id("+44 7911 123456"), "dbr-447911123456");
    }

    #[test]
    fn missing_phone_number_is_a_validation_error() {
        assert_eq!(
            LeadUpdate::default().phone(),
            Err(LeadValidationError::MissingPhoneNumber)
        );
        assert_eq!(
            update("   ").phone(),
            Err(LeadValidationError::MissingPhoneNumber)
        );
    }

    #[test]
    fn new_record_defaults_to_initial_sequence_status() {
        let record = LeadRecord::from_update(&update("07911 000000")).unwrap();
        assert_eq!(record.id, "dbr-07911000000");
        assert_eq!(record.contact_status, ContactStatus::Sent1);
        assert!(record.m1_sent.is_none());
    }

    #[test]
    fn merge_patch_overwrites_only_provided_fields() {
        let mut record = LeadRecord::from_update(&LeadUpdate {
            phone_number: Some("07911 000000".into()),
            first_name: Some("Jo".into()),
            contact_status: Some(ContactStatus::Sent1),
            ..LeadUpdate::default()
        })
        .unwrap();

        record.apply(&LeadUpdate {
            phone_number: Some("07911 000000".into()),
            contact_status: Some(ContactStatus::Positive),
            ..LeadUpdate::default()
        });

        assert_eq!(record.contact_status, ContactStatus::Positive);
        assert_eq!(record.first_name.as_deref(), Some("Jo"));
    }

    #[test]
    fn datetime_parser_accepts_both_wire_formats() {
        let iso = parse_datetime("2024-03-01T09:30:00Z").unwrap();
        let locale = parse_datetime("01/03/2024 09:30").unwrap();
        assert_eq!(iso, locale);
        assert!(parse_datetime("2024-03-01").is_some());
    }

    #[test]
    fn unparseable_datetime_leaves_field_untouched() {
        let mut record = LeadRecord::from_update(&update("07911 000000")).unwrap();
        record.apply(&LeadUpdate {
            phone_number: Some("07911 000000".into()),
            m1_sent: Some("2024-03-01T09:30:00Z".into()),
            ..LeadUpdate::default()
        });
        let before = record.m1_sent;

        record.apply(&LeadUpdate {
            phone_number: Some("07911 000000".into()),
            m1_sent: Some("next tuesday".into()),
            m2_sent: Some("".into()),
            ..LeadUpdate::default()
        });

        assert_eq!(record.m1_sent, before);
        assert!(record.m2_sent.is_none());
    }

    #[test]
    fn set_patch_contains_only_provided_fields() {
        let set = LeadUpdate {
            phone_number: Some("07911 000000".into()),
            contact_status: Some(ContactStatus::Converted),
            m1_sent: Some("01/03/2024 09:30".into()),
            m2_sent: Some("garbled".into()),
            ..LeadUpdate::default()
        }
        .to_set_patch();

        assert_eq!(set.get("contactStatus").unwrap(), "CONVERTED");
        // Locale format normalized to ISO-8601.
        assert_eq!(set.get("m1Sent").unwrap(), "2024-03-01T09:30:00Z");
        // Unparseable dates and unprovided fields stay out of the patch.
        assert!(!set.contains_key("m2Sent"));
        assert!(!set.contains_key("firstName"));
    }

    #[test]
    fn contact_status_wire_spellings_round_trip() {
        let status: ContactStatus = serde_json::from_str("\"Sent_2\"").unwrap();
        assert_eq!(status, ContactStatus::Sent2);
        assert_eq!(serde_json::to_string(&ContactStatus::Hot).unwrap(), "\"HOT\"");
    }
}

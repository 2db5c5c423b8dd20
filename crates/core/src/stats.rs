//! Dashboard aggregation over an already-filtered lead list.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::lead::LeadRecord;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    pub total_leads: usize,
    pub messages_sent: MessagesSent,
    pub sentiment: BTreeMap<String, usize>,
    pub status_breakdown: BTreeMap<String, usize>,
    /// Percentage of leads with a recorded reply, one decimal place.
    pub reply_rate: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MessagesSent {
    pub m1: usize,
    pub m2: usize,
    pub m3: usize,
    pub total: usize,
}

/// Pure aggregation. `reply_rate` is 0 for an empty input — never a
/// division by zero.
pub fn compute_stats(leads: &[LeadRecord]) -> StatsSummary {
    let mut sentiment: BTreeMap<String, usize> = BTreeMap::new();
    let mut status_breakdown: BTreeMap<String, usize> = BTreeMap::new();
    let (mut m1, mut m2, mut m3, mut replies) = (0, 0, 0, 0);

    for lead in leads {
        *status_breakdown
            .entry(lead.contact_status.as_str().to_string())
            .or_default() += 1;
        if let Some(tone) = lead.lead_sentiment {
            *sentiment.entry(tone.as_str().to_string()).or_default() += 1;
        }
        m1 += usize::from(lead.m1_sent.is_some());
        m2 += usize::from(lead.m2_sent.is_some());
        m3 += usize::from(lead.m3_sent.is_some());
        replies += usize::from(lead.reply_received.is_some());
    }

    let total = leads.len();
    let reply_rate = if total == 0 {
        0.0
    } else {
        (replies as f64 / total as f64 * 1000.0).round() / 10.0
    };

    StatsSummary {
        total_leads: total,
        messages_sent: MessagesSent {
            m1,
            m2,
            m3,
            total: m1 + m2 + m3,
        },
        sentiment,
        status_breakdown,
        reply_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::{lead_id, parse_datetime, ContactStatus, LeadSentiment, LEAD_DOC_TYPE};

    fn lead(phone: &str, status: ContactStatus) -> LeadRecord {
        LeadRecord {
            id: lead_id(phone),
            doc_type: LEAD_DOC_TYPE.to_string(),
            phone_number: phone.to_string(),
            first_name: None,
            second_name: None,
            contact_status: status,
            lead_sentiment: None,
            m1_sent: None,
            m2_sent: None,
            m3_sent: None,
            reply_received: None,
            conversation_history: String::new(),
            install_date: None,
        }
    }

    #[test]
    fn empty_input_has_zero_reply_rate() {
        let stats = compute_stats(&[]);
        assert_eq!(stats.total_leads, 0);
        assert_eq!(stats.reply_rate, 0.0);
        assert_eq!(stats.messages_sent.total, 0);
    }

    #[test]
    fn reply_rate_is_a_percentage() {
        let mut replied = lead("07911000001", ContactStatus::Positive);
        replied.reply_received = parse_datetime("2024-01-01T00:00:00Z");
        let silent = lead("07911000002", ContactStatus::Sent1);

        let stats = compute_stats(&[silent, replied]);
        assert_eq!(stats.reply_rate, 50.0);
    }

    #[test]
    fn messages_sent_counts_non_null_timestamps() {
        let mut lead_a = lead("07911000001", ContactStatus::Sent3);
        lead_a.m1_sent = parse_datetime("2024-01-01");
        lead_a.m2_sent = parse_datetime("2024-01-08");
        lead_a.m3_sent = parse_datetime("2024-01-15");
        let mut lead_b = lead("07911000002", ContactStatus::Sent1);
        lead_b.m1_sent = parse_datetime("2024-02-01");

        let stats = compute_stats(&[lead_a, lead_b]);
        assert_eq!(stats.messages_sent.m1, 2);
        assert_eq!(stats.messages_sent.m2, 1);
        assert_eq!(stats.messages_sent.m3, 1);
        assert_eq!(stats.messages_sent.total, 4);
    }

    #[test]
    fn breakdowns_count_per_wire_spelling() {
        let mut keen = lead("07911000001", ContactStatus::Hot);
        keen.lead_sentiment = Some(LeadSentiment::Positive);
        let stats = compute_stats(&[
            keen,
            lead("07911000002", ContactStatus::Hot),
            lead("07911000003", ContactStatus::Sent2),
        ]);

        assert_eq!(stats.status_breakdown.get("HOT"), Some(&2));
        assert_eq!(stats.status_breakdown.get("Sent_2"), Some(&1));
        assert_eq!(stats.sentiment.get("positive"), Some(&1));
    }
}

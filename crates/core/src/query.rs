//! Dashboard lead filtering and ordering.

use std::cmp::Ordering;

use chrono::{DateTime, Duration, Utc};

use crate::lead::LeadRecord;

/// Time window applied against `m1Sent` with a half-open lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    Today,
    Week,
    Month,
    #[default]
    All,
}

impl TimeRange {
    /// Parse a query-string value. Unknown and absent both mean `All`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("today") => Self::Today,
            Some("week") => Self::Week,
            Some("month") => Self::Month,
            _ => Self::All,
        }
    }

    fn lower_bound(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Self::Today => Some(now - Duration::days(1)),
            Self::Week => Some(now - Duration::days(7)),
            Self::Month => Some(now - Duration::days(30)),
            Self::All => None,
        }
    }
}

/// Dashboard filter: a time window plus an optional exact-match tag against
/// either `contactStatus` or `leadSentiment` (the two sets are disjoint, so
/// a single tag selects its dimension).
#[derive(Debug, Clone, Default)]
pub struct LeadFilter {
    pub time_range: TimeRange,
    pub tag: Option<String>,
}

/// Apply the filter. Records without an `m1Sent` are excluded by any bounded
/// time range and included by `All`.
pub fn filter_leads(
    leads: Vec<LeadRecord>,
    filter: &LeadFilter,
    now: DateTime<Utc>,
) -> Vec<LeadRecord> {
    leads
        .into_iter()
        .filter(|lead| match filter.time_range.lower_bound(now) {
            Some(bound) => lead.m1_sent.is_some_and(|sent| bound <= sent),
            None => true,
        })
        .filter(|lead| match filter.tag.as_deref() {
            Some(tag) => matches_tag(lead, tag),
            None => true,
        })
        .collect()
}

fn matches_tag(lead: &LeadRecord, tag: &str) -> bool {
    lead.contact_status.as_str() == tag
        || lead
            .lead_sentiment
            .is_some_and(|sentiment| sentiment.as_str() == tag)
}

/// Two-tier ordering: leads that have replied sort first (descending by
/// `replyReceived`), the rest descending by `m1Sent`. A lead who replied is
/// more actionable than one who has only been messaged, regardless of
/// recency.
pub fn sort_leads(leads: &mut [LeadRecord]) {
    leads.sort_by(|a, b| match (a.reply_received, b.reply_received) {
        (Some(a_reply), Some(b_reply)) => b_reply.cmp(&a_reply),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        // Option ordering puts None first, so a reversed compare sorts
        // records lacking m1Sent last.
        (None, None) => b.m1_sent.cmp(&a.m1_sent),
    });
}

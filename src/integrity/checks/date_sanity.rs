//! Date sanity for timeline events and voting records.
//!
//! Dates must be present, parseable, and not strictly after the reference
//! time in the [`CheckContext`]. Accepted formats:
//!
//! - RFC 3339 (`2024-03-01T10:00:00Z`, `2024-03-01T10:00:00+02:00`)
//! - naive date-time, read as UTC, optionally with fractional seconds
//!   (`2024-03-01 10:00:00`, `2024-03-01T10:00:00.250`)
//! - calendar date (`2024-03-01`), compared by day

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::integrity::{Category, CheckContext, CheckId, IntegrityCheck, Severity, Violation};
use crate::model::{describe_id, Bundle, CollectionKind, EntityId};

// `%.f` also matches an absent fraction.
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// A successfully parsed date value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedDate {
    /// A point in time.
    Instant(DateTime<Utc>),
    /// A whole calendar day.
    Day(NaiveDate),
}

impl ParsedDate {
    /// Whether this date lies strictly after `now`.
    ///
    /// Calendar days compare against `now`'s UTC date, so today is never
    /// in the future.
    pub fn is_after(&self, now: DateTime<Utc>) -> bool {
        match self {
            ParsedDate::Instant(instant) => *instant > now,
            ParsedDate::Day(day) => *day > now.date_naive(),
        }
    }
}

/// Parse a date string in any accepted format.
pub fn parse_date(raw: &str) -> Option<ParsedDate> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(ParsedDate::Instant(dt.with_timezone(&Utc)));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(ParsedDate::Instant(naive.and_utc()));
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(ParsedDate::Day)
}

/// Flags missing, unparseable and future dates.
pub struct DateSanityCheck;

impl DateSanityCheck {
    fn check_date(
        &self,
        kind: CollectionKind,
        id: Option<&EntityId>,
        date: Option<&str>,
        ctx: &CheckContext,
    ) -> Option<Violation> {
        let label = describe_id(id);
        let raw = match date.map(str::trim) {
            Some(raw) if !raw.is_empty() => raw,
            _ => {
                return Some(
                    self.violation(format!("{} '{}' has no date", kind.entity_name(), label))
                        .with_entity(id),
                );
            }
        };

        let message = match parse_date(raw) {
            None => format!(
                "{} '{}' has an invalid date '{}'",
                kind.entity_name(),
                label,
                raw
            ),
            Some(parsed) if parsed.is_after(ctx.now) => format!(
                "{} '{}' is dated in the future ({})",
                kind.entity_name(),
                label,
                raw
            ),
            Some(_) => return None,
        };

        Some(self.violation(message).with_entity(id))
    }
}

impl IntegrityCheck for DateSanityCheck {
    fn id(&self) -> CheckId {
        CheckId::new("date-sanity")
    }

    fn name(&self) -> &str {
        "Date Sanity"
    }

    fn description(&self) -> &str {
        "Ensures timeline events and votes carry valid, non-future dates"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn category(&self) -> Category {
        Category::InvalidDate
    }

    fn check(&self, bundle: &Bundle, ctx: &CheckContext) -> Vec<Violation> {
        let events = bundle.timeline_events.iter().filter_map(|e| {
            self.check_date(
                CollectionKind::TimelineEvents,
                e.id.as_ref(),
                e.date.as_deref(),
                ctx,
            )
        });
        let votes = bundle.voting_records.iter().filter_map(|v| {
            self.check_date(
                CollectionKind::VotingRecords,
                v.id.as_ref(),
                v.date.as_deref(),
                ctx,
            )
        });

        events.chain(votes).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrity::checks::fixtures::ctx;
    use crate::model::{TimelineEvent, VotingRecord};
    use chrono::TimeZone;

    fn event(id: u64, date: Option<&str>) -> TimelineEvent {
        TimelineEvent {
            id: Some(EntityId::from(id)),
            politician_id: Some(EntityId::from(1)),
            date: date.map(String::from),
            description: None,
        }
    }

    #[test]
    fn parses_supported_formats() {
        assert!(matches!(
            parse_date("2024-03-01T10:00:00Z"),
            Some(ParsedDate::Instant(_))
        ));
        assert!(matches!(
            parse_date("2024-03-01T10:00:00+02:00"),
            Some(ParsedDate::Instant(_))
        ));
        assert!(matches!(
            parse_date("2024-03-01 10:00:00"),
            Some(ParsedDate::Instant(_))
        ));
        assert_eq!(
            parse_date(" 2024-03-01 "),
            Some(ParsedDate::Day(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()))
        );
    }

    #[test]
    fn accepts_fractional_seconds_without_offset() {
        let expected = Utc
            .with_ymd_and_hms(2024, 3, 1, 10, 0, 0)
            .unwrap()
            .checked_add_signed(chrono::Duration::milliseconds(250))
            .unwrap();

        assert_eq!(
            parse_date("2024-03-01T10:00:00.250"),
            Some(ParsedDate::Instant(expected))
        );
        assert_eq!(
            parse_date("2024-03-01 10:00:00.250"),
            Some(ParsedDate::Instant(expected))
        );
        assert_eq!(
            parse_date("2024-03-01T10:00:00.000"),
            Some(ParsedDate::Instant(
                Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap()
            ))
        );
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(parse_date("2024-02-30").is_none());
        assert!(parse_date("yesterday").is_none());
        assert!(parse_date("01/03/2024").is_none());
    }

    #[test]
    fn offset_is_normalized_to_utc() {
        let parsed = parse_date("2024-06-15T14:00:00+02:00").unwrap();
        assert_eq!(
            parsed,
            ParsedDate::Instant(Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap())
        );
    }

    #[test]
    fn flags_future_and_invalid_dates() {
        let bundle = Bundle {
            timeline_events: vec![
                event(1, Some("2020-01-01")),
                event(2, Some("2030-01-01")),
                event(3, Some("not a date")),
                event(4, None),
            ],
            ..Default::default()
        };

        let violations = DateSanityCheck.check(&bundle, &ctx());

        assert_eq!(violations.len(), 3);
        assert_eq!(
            violations[0].message,
            "Timeline event '2' is dated in the future (2030-01-01)"
        );
        assert_eq!(
            violations[1].message,
            "Timeline event '3' has an invalid date 'not a date'"
        );
        assert_eq!(violations[2].message, "Timeline event '4' has no date");
    }

    #[test]
    fn same_day_is_not_future() {
        // ctx() is 2024-06-15T12:00:00Z
        let bundle = Bundle {
            timeline_events: vec![event(1, Some("2024-06-15"))],
            voting_records: vec![VotingRecord {
                id: Some(EntityId::from(9)),
                date: Some("2024-06-15T12:00:00Z".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        };

        assert!(DateSanityCheck.check(&bundle, &ctx()).is_empty());
    }

    #[test]
    fn one_second_past_now_is_future() {
        let bundle = Bundle {
            voting_records: vec![VotingRecord {
                id: Some(EntityId::from(9)),
                date: Some("2024-06-15T12:00:01Z".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        };

        let violations = DateSanityCheck.check(&bundle, &ctx());

        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.starts_with("Voting record '9'"));
    }

    #[test]
    fn result_depends_on_injected_now() {
        let bundle = Bundle {
            timeline_events: vec![event(1, Some("2025-01-01"))],
            ..Default::default()
        };
        let later = CheckContext::new(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap());

        assert_eq!(DateSanityCheck.check(&bundle, &ctx()).len(), 1);
        assert!(DateSanityCheck.check(&bundle, &later).is_empty());
    }
}

//! Scheduling rules: combining a calendar date with a wall-clock time and
//! validating the resulting instant.
//!
//! All instants are UTC; the dashboard runs in a single reference timezone.

use chrono::{DateTime, NaiveDate, NaiveTime, Timelike, Utc};

use crate::domain::PostStatus;
use crate::error::ValidationError;

/// Parse an `HH:MM` wall-clock string.
pub fn parse_time_of_day(raw: &str) -> Result<NaiveTime, ValidationError> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M")
        .map_err(|_| ValidationError::InvalidTime(raw.trim().to_owned()))
}

/// Combine a date and a time of day into a single UTC instant. Seconds and
/// subseconds are zeroed.
pub fn combine(date: NaiveDate, time: NaiveTime) -> DateTime<Utc> {
    let time = time
        .with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(time);
    date.and_time(time).and_utc()
}

/// Reject instants that are not strictly in the future. Never clamps or
/// adjusts.
pub fn ensure_future(instant: DateTime<Utc>, now: DateTime<Utc>) -> Result<(), ValidationError> {
    if instant <= now {
        return Err(ValidationError::PastSchedule);
    }
    Ok(())
}

/// Resolve the `scheduled_date` for a post being saved with `status`.
///
/// A scheduled post needs both pickers and a future instant; every other
/// status saves without a schedule.
pub fn resolve(
    status: PostStatus,
    date: Option<NaiveDate>,
    time: Option<NaiveTime>,
    now: DateTime<Utc>,
) -> Result<Option<DateTime<Utc>>, ValidationError> {
    if status != PostStatus::Scheduled {
        return Ok(None);
    }
    let (date, time) = match (date, time) {
        (Some(date), Some(time)) => (date, time),
        _ => return Err(ValidationError::MissingSchedule),
    };
    let instant = combine(date, time);
    ensure_future(instant, now)?;
    Ok(Some(instant))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_wall_clock_times() {
        assert_eq!(
            parse_time_of_day("14:30").unwrap(),
            NaiveTime::from_hms_opt(14, 30, 0).unwrap()
        );
        assert_eq!(
            parse_time_of_day(" 09:05 ").unwrap(),
            NaiveTime::from_hms_opt(9, 5, 0).unwrap()
        );
    }

    #[test]
    fn rejects_bad_times() {
        assert!(matches!(
            parse_time_of_day("25:00"),
            Err(ValidationError::InvalidTime(_))
        ));
        assert!(matches!(
            parse_time_of_day("noon"),
            Err(ValidationError::InvalidTime(_))
        ));
    }

    #[test]
    fn combine_zeroes_seconds() {
        let time = NaiveTime::from_hms_milli_opt(9, 30, 45, 250).unwrap();
        let instant = combine(date(2026, 9, 1), time);
        assert_eq!(
            instant,
            Utc.with_ymd_and_hms(2026, 9, 1, 9, 30, 0).unwrap()
        );
    }

    #[test]
    fn future_check_is_strict() {
        let now = Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap();
        assert_eq!(ensure_future(now, now), Err(ValidationError::PastSchedule));
        assert_eq!(
            ensure_future(now - chrono::Duration::minutes(1), now),
            Err(ValidationError::PastSchedule)
        );
        assert!(ensure_future(now + chrono::Duration::minutes(1), now).is_ok());
    }

    #[test]
    fn resolve_requires_both_pickers_when_scheduled() {
        let now = Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap();
        let err = resolve(PostStatus::Scheduled, Some(date(2026, 9, 2)), None, now);
        assert_eq!(err, Err(ValidationError::MissingSchedule));

        let err = resolve(PostStatus::Scheduled, None, None, now);
        assert_eq!(err, Err(ValidationError::MissingSchedule));
    }

    #[test]
    fn resolve_rejects_past_instants() {
        let now = Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap();
        let err = resolve(
            PostStatus::Scheduled,
            Some(date(2026, 8, 31)),
            Some(NaiveTime::from_hms_opt(9, 0, 0).unwrap()),
            now,
        );
        assert_eq!(err, Err(ValidationError::PastSchedule));
    }

    #[test]
    fn resolve_clears_schedule_for_other_statuses() {
        let now = Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap();
        let resolved = resolve(
            PostStatus::Draft,
            Some(date(2026, 9, 2)),
            Some(NaiveTime::from_hms_opt(9, 0, 0).unwrap()),
            now,
        );
        assert_eq!(resolved, Ok(None));
    }

    #[test]
    fn resolve_returns_the_combined_instant() {
        let now = Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap();
        let resolved = resolve(
            PostStatus::Scheduled,
            Some(date(2026, 9, 2)),
            Some(NaiveTime::from_hms_opt(14, 30, 0).unwrap()),
            now,
        )
        .unwrap();
        assert_eq!(
            resolved,
            Some(Utc.with_ymd_and_hms(2026, 9, 2, 14, 30, 0).unwrap())
        );
    }
}

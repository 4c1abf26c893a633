use crate::day::date_key;
use crate::errors::TallyError;
use crate::models::TallyRecord;
use chrono::NaiveDate;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOutcome {
    pub total: u64,
    pub daily_kills: u64,
    pub record: u64,
    pub new_record: bool,
}

/// Parses a raw form entry into a total. Anything that is not a
/// non-negative whole number is rejected.
pub fn parse_total(input: &str) -> Result<u64, TallyError> {
    input
        .trim()
        .parse::<u64>()
        .map_err(|_| TallyError::InvalidInput)
}

pub fn fresh_record(total: u64, today: NaiveDate) -> TallyRecord {
    TallyRecord {
        total,
        date: date_key(today),
        daily_kills: 0,
        history: BTreeMap::new(),
    }
}

/// Best single-day count ever observed: the finished days in `history`
/// plus the live day.
pub fn best_day(record: &TallyRecord) -> u64 {
    record
        .history
        .values()
        .copied()
        .max()
        .unwrap_or(0)
        .max(record.daily_kills)
}

/// Moves the record onto `today` if the stored day has passed, committing
/// the finished day's count into `history` when it was non-zero. Returns
/// true when the record changed and needs writing through. The active day
/// itself never appears in `history`.
pub fn roll_over(record: &mut TallyRecord, today: NaiveDate) -> bool {
    let key = date_key(today);
    if record.date == key {
        return false;
    }
    if record.daily_kills > 0 {
        let finished = std::mem::replace(&mut record.date, key);
        record.history.insert(finished, record.daily_kills);
    } else {
        record.date = key;
    }
    record.daily_kills = 0;
    true
}

/// Applies one reported total to a record that is already on the current
/// effective day (callers run [`roll_over`] first). `skip_daily` marks the
/// report as a correction: the total moves, in either direction, but
/// nothing is attributed to the day.
pub fn apply_report(
    record: &mut TallyRecord,
    input: &str,
    skip_daily: bool,
) -> Result<ReportOutcome, TallyError> {
    let new_total = parse_total(input)?;
    let prior_best = best_day(record);

    if new_total <= record.total {
        if !skip_daily {
            return Err(TallyError::NonIncreasingTotal {
                current: record.total,
            });
        }
        record.total = new_total;
        return Ok(ReportOutcome {
            total: record.total,
            daily_kills: record.daily_kills,
            record: prior_best,
            new_record: false,
        });
    }

    let delta = new_total - record.total;
    record.total = new_total;
    if !skip_daily {
        record.daily_kills += delta;
    }

    let best = best_day(record);
    Ok(ReportOutcome {
        total: record.total,
        daily_kills: record.daily_kills,
        record: best,
        new_record: best > prior_best,
    })
}

/// Clears the per-day history. The lifetime total, the active day, and the
/// live count stay as they are, so the derived record falls back to the
/// live day's count.
pub fn reset_history(record: &mut TallyRecord) {
    record.history.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 4, d).unwrap()
    }

    #[test]
    fn parse_rejects_junk_and_negatives() {
        assert_eq!(parse_total("abc"), Err(TallyError::InvalidInput));
        assert_eq!(parse_total(""), Err(TallyError::InvalidInput));
        assert_eq!(parse_total("-3"), Err(TallyError::InvalidInput));
        assert_eq!(parse_total("1.5"), Err(TallyError::InvalidInput));
        assert_eq!(parse_total(" 42 "), Ok(42));
        assert_eq!(parse_total("0"), Ok(0));
    }

    #[test]
    fn fresh_record_starts_clean() {
        let record = fresh_record(100, day(1));
        assert_eq!(record.total, 100);
        assert_eq!(record.date, "2026-04-01");
        assert_eq!(record.daily_kills, 0);
        assert!(record.history.is_empty());
    }

    #[test]
    fn increasing_totals_accumulate_into_the_day() {
        let mut record = fresh_record(100, day(1));
        apply_report(&mut record, "105", false).unwrap();
        apply_report(&mut record, "112", false).unwrap();
        let out = apply_report(&mut record, "120", false).unwrap();
        // dailyKills equals lastTotal - firstTotalOfDay
        assert_eq!(out.daily_kills, 20);
        assert_eq!(out.total, 120);
        assert_eq!(out.record, 20);
    }

    #[test]
    fn non_increasing_total_is_rejected_without_change() {
        let mut record = fresh_record(100, day(1));
        apply_report(&mut record, "105", false).unwrap();
        let before = record.clone();
        assert_eq!(
            apply_report(&mut record, "103", false),
            Err(TallyError::NonIncreasingTotal { current: 105 })
        );
        assert_eq!(
            apply_report(&mut record, "105", false),
            Err(TallyError::NonIncreasingTotal { current: 105 })
        );
        assert_eq!(record, before);
    }

    #[test]
    fn skip_allows_downward_correction() {
        let mut record = fresh_record(100, day(1));
        apply_report(&mut record, "105", false).unwrap();
        let out = apply_report(&mut record, "103", true).unwrap();
        assert_eq!(out.total, 103);
        assert_eq!(out.daily_kills, 5);
        assert!(!out.new_record);
        assert_eq!(record.total, 103);
    }

    #[test]
    fn skip_excludes_upward_delta_from_the_day() {
        let mut record = fresh_record(100, day(1));
        apply_report(&mut record, "105", false).unwrap();
        let out = apply_report(&mut record, "150", true).unwrap();
        assert_eq!(out.total, 150);
        assert_eq!(out.daily_kills, 5);
        assert_eq!(out.record, 5);
        assert!(!out.new_record);
    }

    #[test]
    fn invalid_input_never_touches_the_record() {
        let mut record = fresh_record(100, day(1));
        let before = record.clone();
        assert_eq!(
            apply_report(&mut record, "lots", false),
            Err(TallyError::InvalidInput)
        );
        assert_eq!(record, before);
    }

    #[test]
    fn roll_over_commits_the_finished_day_once() {
        let mut record = fresh_record(100, day(1));
        apply_report(&mut record, "105", false).unwrap();

        assert!(roll_over(&mut record, day(2)));
        assert_eq!(record.history.get("2026-04-01"), Some(&5));
        assert_eq!(record.daily_kills, 0);
        assert_eq!(record.date, "2026-04-02");

        // same day again is a no-op
        assert!(!roll_over(&mut record, day(2)));
        assert_eq!(record.history.len(), 1);
    }

    #[test]
    fn roll_over_skips_empty_days() {
        let mut record = fresh_record(100, day(1));
        assert!(roll_over(&mut record, day(2)));
        assert!(record.history.is_empty());
        assert_eq!(record.date, "2026-04-02");
    }

    #[test]
    fn record_spans_history_and_live_day() {
        let mut record = fresh_record(100, day(1));
        apply_report(&mut record, "105", false).unwrap();
        roll_over(&mut record, day(2));
        let out = apply_report(&mut record, "112", false).unwrap();
        assert_eq!(out.daily_kills, 7);
        assert_eq!(out.record, 7);
        assert!(out.new_record);
        assert_eq!(best_day(&record), 7);
    }

    #[test]
    fn new_record_flag_only_fires_on_a_beat() {
        let mut record = fresh_record(0, day(1));
        record.history.insert("2026-03-30".into(), 10);
        let out = apply_report(&mut record, "4", false).unwrap();
        assert!(!out.new_record);
        assert_eq!(out.record, 10);
        let out = apply_report(&mut record, "15", false).unwrap();
        assert!(out.new_record);
        assert_eq!(out.record, 15);
    }

    #[test]
    fn reset_history_leaves_total_and_day_alone() {
        let mut record = fresh_record(100, day(1));
        apply_report(&mut record, "105", false).unwrap();
        roll_over(&mut record, day(2));
        apply_report(&mut record, "108", false).unwrap();

        reset_history(&mut record);
        assert!(record.history.is_empty());
        assert_eq!(record.total, 108);
        assert_eq!(record.date, "2026-04-02");
        assert_eq!(record.daily_kills, 3);
        assert_eq!(best_day(&record), 3);
    }

    #[test]
    fn reset_after_day_change_does_not_resurrect_history() {
        let mut record = fresh_record(100, day(1));
        apply_report(&mut record, "105", false).unwrap();

        // the day moved on before the user hit reset; the rollover
        // migration runs first, then the clear
        roll_over(&mut record, day(2));
        reset_history(&mut record);
        assert!(record.history.is_empty());
        assert_eq!(record.daily_kills, 0);
        assert_eq!(record.date, "2026-04-02");

        // nothing later on the new day brings the finished day back
        assert!(!roll_over(&mut record, day(2)));
        apply_report(&mut record, "110", false).unwrap();
        assert!(record.history.is_empty());
        assert_eq!(record.daily_kills, 5);
        assert_eq!(best_day(&record), 5);
    }

    #[test]
    fn full_scenario_across_two_days() {
        let mut record = fresh_record(100, day(1));

        let out = apply_report(&mut record, "105", false).unwrap();
        assert_eq!((out.total, out.daily_kills, out.record), (105, 5, 5));

        assert_eq!(
            apply_report(&mut record, "103", false),
            Err(TallyError::NonIncreasingTotal { current: 105 })
        );

        let out = apply_report(&mut record, "103", true).unwrap();
        assert_eq!((out.total, out.daily_kills), (103, 5));

        roll_over(&mut record, day(2));
        assert_eq!(record.history.get("2026-04-01"), Some(&5));

        let out = apply_report(&mut record, "110", false).unwrap();
        assert_eq!(out.daily_kills, 7);
        assert_eq!(out.record, 7);
        assert!(out.new_record);
    }
}

use chrono::{DateTime, Duration, Local, NaiveDate, Timelike};

/// Returns the calendar date that "now" belongs to for accounting purposes.
/// Hours before `rollover_hour` still count as the previous day, so a
/// session that runs past midnight lands on the day it started. Exactly at
/// the rollover hour the new day begins.
pub fn effective_date(now: DateTime<Local>, rollover_hour: u32) -> NaiveDate {
    let today = now.date_naive();
    if now.hour() < rollover_hour {
        today - Duration::days(1)
    } else {
        today
    }
}

pub fn effective_date_now(rollover_hour: u32) -> NaiveDate {
    effective_date(Local::now(), rollover_hour)
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

use crate::models::{TallyRecord, TrendPoint};

/// Series for the mini chart: the last 7 finished days in date order,
/// followed by a live point for the active day. History keys are ISO
/// dates, so the map's ordering is date order.
pub fn build_trend(record: &TallyRecord) -> Vec<TrendPoint> {
    let mut points: Vec<TrendPoint> = record
        .history
        .iter()
        .rev()
        .take(7)
        .map(|(date, kills)| TrendPoint {
            date: date.clone(),
            kills: *kills,
            live: false,
        })
        .collect();
    points.reverse();
    points.push(TrendPoint {
        date: record.date.clone(),
        kills: record.daily_kills,
        live: true,
    });
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn record_with_days(days: &[(&str, u64)]) -> TallyRecord {
        let mut history = BTreeMap::new();
        for (date, kills) in days {
            history.insert((*date).to_string(), *kills);
        }
        TallyRecord {
            total: 500,
            date: "2026-04-10".to_string(),
            daily_kills: 4,
            history,
        }
    }

    #[test]
    fn trend_ends_with_the_live_day() {
        let record = record_with_days(&[("2026-04-08", 2), ("2026-04-09", 6)]);
        let trend = build_trend(&record);
        assert_eq!(trend.len(), 3);
        assert_eq!(trend[0].date, "2026-04-08");
        assert_eq!(trend[1].date, "2026-04-09");
        let live = trend.last().unwrap();
        assert!(live.live);
        assert_eq!(live.date, "2026-04-10");
        assert_eq!(live.kills, 4);
        assert!(trend[..2].iter().all(|point| !point.live));
    }

    #[test]
    fn trend_keeps_only_the_last_seven_finished_days() {
        let days: Vec<(String, u64)> = (1..=10)
            .map(|d| (format!("2026-03-{d:02}"), d as u64))
            .collect();
        let borrowed: Vec<(&str, u64)> =
            days.iter().map(|(date, kills)| (date.as_str(), *kills)).collect();
        let record = record_with_days(&borrowed);

        let trend = build_trend(&record);
        assert_eq!(trend.len(), 8);
        assert_eq!(trend[0].date, "2026-03-04");
        assert_eq!(trend[6].date, "2026-03-10");
        assert_eq!(trend[6].kills, 10);
    }

    #[test]
    fn empty_history_still_shows_the_live_day() {
        let record = record_with_days(&[]);
        let trend = build_trend(&record);
        assert_eq!(trend.len(), 1);
        assert!(trend[0].live);
    }
}

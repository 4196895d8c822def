use chrono::{DateTime, Days, NaiveDate, NaiveTime, TimeZone, Utc};

pub fn day_start(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}

/// Exclusive upper bound for an inclusive `to` date.
pub fn next_day_start(date: NaiveDate) -> DateTime<Utc> {
    day_start(date.checked_add_days(Days::new(1)).unwrap_or(date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_bounds_cover_the_whole_day() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let start = day_start(date);
        let end = next_day_start(date);

        assert_eq!(start.to_rfc3339(), "2024-01-01T00:00:00+00:00");
        assert_eq!((end - start).num_hours(), 24);
    }
}

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    models::{booking_model::Booking, fuel_log_model::FuelLog},
    types::models::booking::{booking_kind::BookingKind, booking_status::BookingStatus},
};

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelSummary {
    pub total_liters: f64,
    pub total_cost: f64,
}

/// Fold over a result set; the summary always agrees with the returned logs.
pub fn fuel_summary(logs: &[FuelLog]) -> FuelSummary {
    logs.iter().fold(FuelSummary::default(), |mut acc, log| {
        acc.total_liters += log.liters;
        acc.total_cost += log.total_cost;
        acc
    })
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownRow {
    pub key: String,
    pub count: usize,
    pub revenue: f64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingAnalytics {
    pub total_bookings: usize,
    /// Sum of totals over non-cancelled bookings.
    pub revenue: f64,
    pub completed: usize,
    pub completion_rate: f64,
    pub upcoming: usize,
    pub upcoming_share: f64,
    pub by_status: BTreeMap<String, usize>,
    pub by_day: Vec<BreakdownRow>,
    pub by_month: Vec<BreakdownRow>,
    pub by_route: Vec<BreakdownRow>,
    pub by_airline: Vec<BreakdownRow>,
}

fn grouped(entries: impl Iterator<Item = (String, f64)>) -> Vec<BreakdownRow> {
    let mut groups: BTreeMap<String, (usize, f64)> = BTreeMap::new();
    for (key, amount) in entries {
        let entry = groups.entry(key).or_default();
        entry.0 += 1;
        entry.1 += amount;
    }
    groups
        .into_iter()
        .map(|(key, (count, revenue))| BreakdownRow {
            key,
            count,
            revenue,
        })
        .collect()
}

/// Stateless reduction over an already-fetched booking range. `now` is passed
/// in so the upcoming share is deterministic for callers and tests alike.
pub fn booking_analytics(bookings: &[Booking], now: DateTime<Utc>) -> BookingAnalytics {
    let total = bookings.len();
    let revenue = bookings
        .iter()
        .filter(|b| b.status != BookingStatus::Cancelled)
        .map(|b| b.total_amount)
        .sum();
    let completed = bookings
        .iter()
        .filter(|b| b.status == BookingStatus::Completed)
        .count();
    let upcoming = bookings.iter().filter(|b| b.start_date > now).count();

    let mut by_status: BTreeMap<String, usize> = BTreeMap::new();
    for booking in bookings {
        *by_status.entry(booking.status.to_string()).or_default() += 1;
    }

    let ratio = |part: usize| {
        if total == 0 {
            0.0
        } else {
            part as f64 / total as f64
        }
    };

    BookingAnalytics {
        total_bookings: total,
        revenue,
        completed,
        completion_rate: ratio(completed),
        upcoming,
        upcoming_share: ratio(upcoming),
        by_status,
        by_day: grouped(
            bookings
                .iter()
                .map(|b| (b.start_date.format("%Y-%m-%d").to_string(), b.total_amount)),
        ),
        by_month: grouped(
            bookings
                .iter()
                .map(|b| (b.start_date.format("%Y-%m").to_string(), b.total_amount)),
        ),
        by_route: grouped(bookings.iter().filter_map(|b| {
            (b.kind == BookingKind::Flight)
                .then(|| b.route.clone())
                .flatten()
                .map(|route| (route, b.total_amount))
        })),
        by_airline: grouped(bookings.iter().filter_map(|b| {
            (b.kind == BookingKind::Flight)
                .then(|| b.airline.clone())
                .flatten()
                .map(|airline| (airline, b.total_amount))
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::models::booking::booking_channel::BookingChannel;
    use bson::oid::ObjectId;
    use chrono::TimeZone;

    fn log(liters: f64, total_cost: f64) -> FuelLog {
        FuelLog {
            id: None,
            owner_id: ObjectId::new(),
            car_id: ObjectId::new(),
            date: Utc::now(),
            liters,
            total_cost,
            price_per_liter: None,
            odometer: None,
            station: None,
            note: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn booking(
        kind: BookingKind,
        status: BookingStatus,
        start: DateTime<Utc>,
        total: f64,
        route: Option<&str>,
        airline: Option<&str>,
    ) -> Booking {
        Booking {
            id: None,
            kind,
            guest_id: ObjectId::new(),
            listing_id: None,
            owner_id: None,
            route: route.map(str::to_string),
            airline: airline.map(str::to_string),
            start_date: start,
            end_date: start,
            total_amount: total,
            status,
            channel: BookingChannel::Online,
            commission_rate: None,
            commission_amount: None,
            commission_paid: false,
            created_at: start,
            updated_at: start,
        }
    }

    #[test]
    fn summary_totals_are_the_fold_of_the_logs() {
        let logs = vec![log(10.0, 5000.0), log(25.5, 12750.0), log(0.0, 0.0)];
        let summary = fuel_summary(&logs);
        assert_eq!(summary.total_liters, 35.5);
        assert_eq!(summary.total_cost, 17750.0);
    }

    #[test]
    fn empty_log_set_sums_to_zero() {
        assert_eq!(fuel_summary(&[]), FuelSummary::default());
    }

    #[test]
    fn revenue_excludes_cancelled() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let past = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        let bookings = vec![
            booking(BookingKind::Property, BookingStatus::Completed, past, 100.0, None, None),
            booking(BookingKind::Property, BookingStatus::Cancelled, past, 900.0, None, None),
            booking(BookingKind::Car, BookingStatus::Confirmed, past, 50.0, None, None),
        ];

        let analytics = booking_analytics(&bookings, now);
        assert_eq!(analytics.revenue, 150.0);
        assert_eq!(analytics.total_bookings, 3);
    }

    #[test]
    fn completion_rate_and_upcoming_share() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let past = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        let future = Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap();
        let bookings = vec![
            booking(BookingKind::Property, BookingStatus::Completed, past, 100.0, None, None),
            booking(BookingKind::Property, BookingStatus::Pending, future, 100.0, None, None),
            booking(BookingKind::Car, BookingStatus::Confirmed, future, 100.0, None, None),
            booking(BookingKind::Car, BookingStatus::Completed, past, 100.0, None, None),
        ];

        let analytics = booking_analytics(&bookings, now);
        assert_eq!(analytics.completed, 2);
        assert_eq!(analytics.completion_rate, 0.5);
        assert_eq!(analytics.upcoming, 2);
        assert_eq!(analytics.upcoming_share, 0.5);
    }

    #[test]
    fn empty_range_has_zero_rates() {
        let analytics = booking_analytics(&[], Utc::now());
        assert_eq!(analytics.completion_rate, 0.0);
        assert_eq!(analytics.upcoming_share, 0.0);
        assert!(analytics.by_day.is_empty());
    }

    #[test]
    fn day_and_month_breakdowns_partition_the_input() {
        let d1 = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        let d2 = Utc.with_ymd_and_hms(2024, 5, 1, 15, 0, 0).unwrap();
        let d3 = Utc.with_ymd_and_hms(2024, 6, 2, 0, 0, 0).unwrap();
        let bookings = vec![
            booking(BookingKind::Property, BookingStatus::Confirmed, d1, 10.0, None, None),
            booking(BookingKind::Property, BookingStatus::Confirmed, d2, 20.0, None, None),
            booking(BookingKind::Property, BookingStatus::Confirmed, d3, 40.0, None, None),
        ];

        let analytics = booking_analytics(&bookings, Utc::now());
        assert_eq!(
            analytics.by_day,
            vec![
                BreakdownRow { key: "2024-05-01".into(), count: 2, revenue: 30.0 },
                BreakdownRow { key: "2024-06-02".into(), count: 1, revenue: 40.0 },
            ]
        );
        let total_count: usize = analytics.by_month.iter().map(|r| r.count).sum();
        assert_eq!(total_count, bookings.len());
    }

    #[test]
    fn route_and_airline_cover_flights_only() {
        let day = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        let bookings = vec![
            booking(
                BookingKind::Flight,
                BookingStatus::Confirmed,
                day,
                300.0,
                Some("BGW-EBL"),
                Some("Iraqi Airways"),
            ),
            booking(
                BookingKind::Flight,
                BookingStatus::Confirmed,
                day,
                200.0,
                Some("BGW-EBL"),
                Some("Fly Baghdad"),
            ),
            booking(BookingKind::Property, BookingStatus::Confirmed, day, 999.0, None, None),
        ];

        let analytics = booking_analytics(&bookings, Utc::now());
        assert_eq!(
            analytics.by_route,
            vec![BreakdownRow { key: "BGW-EBL".into(), count: 2, revenue: 500.0 }]
        );
        assert_eq!(analytics.by_airline.len(), 2);
    }
}

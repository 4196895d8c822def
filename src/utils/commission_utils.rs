use crate::{
    errors::ServiceError, models::commission_level_model::CommissionLevel,
    types::models::booking::booking_channel::BookingChannel,
};

/// Flat rates an owner may choose when no commission level applies.
pub const FLAT_RATES: [f64; 3] = [8.0, 10.0, 12.0];

/// The one commission computation shared by every caller. Nearest integer,
/// half rounds up. Persisted amounts and the client preview endpoint both go
/// through here.
pub fn commission_amount(price: f64, rate: f64) -> f64 {
    (price * rate / 100.0).round()
}

/// Rate selection: a commission level picks its per-channel percentage,
/// otherwise the owner-chosen flat rate must be one of [`FLAT_RATES`].
pub fn select_rate(
    level: Option<&CommissionLevel>,
    channel: BookingChannel,
    flat_rate: Option<f64>,
) -> Result<Option<f64>, ServiceError> {
    if let Some(level) = level {
        let rate = match channel {
            BookingChannel::Online => level.online_rate,
            BookingChannel::Direct => level.direct_rate,
        };
        return Ok(Some(rate));
    }

    match flat_rate {
        Some(rate) if FLAT_RATES.contains(&rate) => Ok(Some(rate)),
        Some(rate) => Err(ServiceError::validation(format!(
            "Flat commission rate must be one of 8, 10 or 12, got {}",
            rate
        ))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn level(online: f64, direct: f64) -> CommissionLevel {
        CommissionLevel {
            id: None,
            name: "Standard".to_string(),
            online_rate: online,
            direct_rate: direct,
            is_default: true,
            is_premium: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn preview_example_matches() {
        assert_eq!(commission_amount(100000.0, 12.0), 12000.0);
    }

    #[test]
    fn amount_rounds_half_up() {
        assert_eq!(commission_amount(50.0, 25.0), 13.0);
        assert_eq!(commission_amount(124.0, 10.0), 12.0);
        assert_eq!(commission_amount(125.0, 10.0), 13.0);
    }

    #[test]
    fn amount_is_bounded_for_sane_rates() {
        for price in [0.0, 1.0, 999.0, 100000.0] {
            for rate in [0.0, 8.0, 10.0, 12.0, 100.0] {
                let amount = commission_amount(price, rate);
                assert!(amount >= 0.0);
                assert!(amount <= price);
            }
        }
    }

    #[test]
    fn level_rate_follows_channel() {
        let level = level(12.0, 10.0);
        let online = select_rate(Some(&level), BookingChannel::Online, None).unwrap();
        let direct = select_rate(Some(&level), BookingChannel::Direct, None).unwrap();
        assert_eq!(online, Some(12.0));
        assert_eq!(direct, Some(10.0));
    }

    #[test]
    fn level_wins_over_flat_rate() {
        let level = level(12.0, 10.0);
        let rate = select_rate(Some(&level), BookingChannel::Online, Some(8.0)).unwrap();
        assert_eq!(rate, Some(12.0));
    }

    #[test]
    fn flat_rate_must_be_in_catalog() {
        assert_eq!(
            select_rate(None, BookingChannel::Direct, Some(10.0)).unwrap(),
            Some(10.0)
        );
        assert!(select_rate(None, BookingChannel::Direct, Some(9.0)).is_err());
    }

    #[test]
    fn no_level_and_no_flat_rate_means_no_commission() {
        assert_eq!(select_rate(None, BookingChannel::Online, None).unwrap(), None);
    }
}

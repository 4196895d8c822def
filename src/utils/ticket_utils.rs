use chrono::{DateTime, Utc};
use phonenumber::Mode;
use rand::Rng;

// Charset omits the ambiguous 0/O and 1/I glyphs.
const TICKET_SUFFIX_CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
const TICKET_SUFFIX_LEN: usize = 4;

pub fn generate_ticket_number(now: DateTime<Utc>, rng: &mut impl Rng) -> String {
    let suffix: String = (0..TICKET_SUFFIX_LEN)
        .map(|_| {
            let idx = rng.gen_range(0..TICKET_SUFFIX_CHARSET.len());
            TICKET_SUFFIX_CHARSET[idx] as char
        })
        .collect();

    format!("AKW-{}-{}", now.format("%y%m%d"), suffix)
}

/// Best-effort normalization: E.164 when the number parses, otherwise the
/// digits (plus a leading '+') as supplied. Empty input normalizes to None.
pub fn normalize_phone(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(number) = phonenumber::parse(None, trimmed) {
        if phonenumber::is_valid(&number) {
            return Some(number.format().mode(Mode::E164).to_string());
        }
    }

    let digits: String = trimmed
        .chars()
        .enumerate()
        .filter(|(i, c)| c.is_ascii_digit() || (*i == 0 && *c == '+'))
        .map(|(_, c)| c)
        .collect();

    if digits.chars().any(|c| c.is_ascii_digit()) {
        Some(digits)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn ticket_number_has_the_documented_shape() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let number = generate_ticket_number(now, &mut rng);

        assert!(number.starts_with("AKW-240115-"));
        let suffix = number.rsplit('-').next().unwrap();
        assert_eq!(suffix.len(), TICKET_SUFFIX_LEN);
        assert!(
            suffix
                .bytes()
                .all(|b| TICKET_SUFFIX_CHARSET.contains(&b))
        );
    }

    #[test]
    fn ticket_numbers_vary_with_the_rng() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let first = generate_ticket_number(now, &mut rng);
        let second = generate_ticket_number(now, &mut rng);
        assert_ne!(first, second);
    }

    #[test]
    fn parseable_numbers_normalize_to_e164() {
        assert_eq!(
            normalize_phone("+964 770 123 4567").as_deref(),
            Some("+9647701234567")
        );
    }

    #[test]
    fn unparseable_numbers_keep_their_digits() {
        assert_eq!(normalize_phone("0770-123-4567").as_deref(), Some("07701234567"));
    }

    #[test]
    fn empty_and_digitless_input_normalizes_to_none() {
        assert_eq!(normalize_phone(""), None);
        assert_eq!(normalize_phone("   "), None);
        assert_eq!(normalize_phone("n/a"), None);
    }
}

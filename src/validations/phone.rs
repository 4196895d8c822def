use validator::ValidationError;

use crate::utils::validation_utils::add_error;

const MIN_PHONE_DIGITS: usize = 7;
const MAX_PHONE_DIGITS: usize = 15;

fn digit_count(phone: &str) -> usize {
    phone.chars().filter(|c| c.is_ascii_digit()).count()
}

fn has_only_phone_chars(phone: &str) -> bool {
    phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')' | ' '))
}

pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let mut errors = Vec::new();

    let digits = digit_count(phone);
    if digits < MIN_PHONE_DIGITS {
        errors.push(format!(
            "Phone number must contain at least {} digits",
            MIN_PHONE_DIGITS
        ));
    }
    if digits > MAX_PHONE_DIGITS {
        errors.push(format!(
            "Phone number must contain at most {} digits",
            MAX_PHONE_DIGITS
        ));
    }

    if !has_only_phone_chars(phone) {
        errors.push("Phone number may only contain digits, spaces, '+', '-', '(' and ')'".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        let concatenated_errors = errors.join(", ");
        Err(add_error("phone.invalid", concatenated_errors, phone))
    }
}

#[cfg(test)]
mod tests {
    use super::validate_phone;

    #[test]
    fn accepts_local_and_international_forms() {
        assert!(validate_phone("+964 770 123 4567").is_ok());
        assert!(validate_phone("0770-123-4567").is_ok());
    }

    #[test]
    fn rejects_short_long_and_lettered_numbers() {
        assert!(validate_phone("12345").is_err());
        assert!(validate_phone("1234567890123456").is_err());
        assert!(validate_phone("CALL-ME-MAYBE").is_err());
    }
}

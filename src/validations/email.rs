use email_address::EmailAddress;
use validator::ValidationError;

use crate::utils::validation_utils::add_error;

fn is_valid_length(email: &str) -> bool {
    email.len() >= 5 && email.len() <= 254
}

fn contains_invalid_chars(email: &str) -> bool {
    email.chars().any(|c| c == ' ' || !c.is_ascii())
}

fn is_at_before_last_dot(email: &str) -> bool {
    if let (Some(at), Some(dot)) = (email.find('@'), email.rfind('.')) {
        at < dot
    } else {
        false
    }
}

fn get_domain(email: &str) -> Option<&str> {
    email.split('@').nth(1)
}

fn has_valid_tld(domain: &str) -> bool {
    if let Some(last_dot) = domain.rfind('.') {
        let tld = &domain[last_dot + 1..];
        tld.len() >= 2 && tld.chars().all(|c| c.is_alphabetic())
    } else {
        false
    }
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let mut errors = Vec::new();

    if !is_valid_length(email) {
        errors.push("Email must be between 5 and 254 characters".to_string());
    }

    if contains_invalid_chars(email) {
        errors.push("Email must not contain spaces or non-ASCII characters".to_string());
    }

    if !is_at_before_last_dot(email) {
        errors.push("Email must contain '@' followed by a domain with a '.'".to_string());
    }

    match get_domain(email) {
        Some(domain) if !domain.is_empty() => {
            if !has_valid_tld(domain) {
                errors.push(
                    "The TLD (after the last '.') must be at least 2 characters long and alphabetic"
                        .to_string(),
                );
            }
        }
        _ => errors.push("Email must have a domain part after '@'".to_string()),
    }

    if errors.is_empty() && !EmailAddress::is_valid(email) {
        errors.push("Invalid email format".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        let concatenated_errors = errors.join(", ");
        Err(add_error("email.invalid", concatenated_errors, email))
    }
}

#[cfg(test)]
mod tests {
    use super::validate_email;

    #[test]
    fn accepts_ordinary_addresses() {
        assert!(validate_email("guest@example.com").is_ok());
        assert!(validate_email("owner.name+tag@rentals.iq").is_ok());
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in ["", "a@b", "no-at-sign.com", "user@.com", "user name@x.com", "user@x.c0m"] {
            assert!(validate_email(bad).is_err(), "{bad} should be rejected");
        }
    }
}

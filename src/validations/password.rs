use rayon::prelude::*;
use validator::ValidationError;

use crate::utils::validation_utils::add_error;

const MIN_PASSWORD_LENGTH: usize = 8;
const MAX_PASSWORD_LENGTH: usize = 128;

fn has_min_length(password: &str) -> Result<(), String> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(format!(
            "Password must be at least {} characters long",
            MIN_PASSWORD_LENGTH
        ));
    }
    Ok(())
}

fn has_max_length(password: &str) -> Result<(), String> {
    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(format!(
            "Password must be no more than {} characters long",
            MAX_PASSWORD_LENGTH
        ));
    }
    Ok(())
}

fn has_no_space(password: &str) -> Result<(), String> {
    if password.contains(' ') {
        return Err("Password must not contain spaces".to_string());
    }
    Ok(())
}

fn has_letter(password: &str) -> Result<(), String> {
    if !password.chars().any(|char| char.is_ascii_alphabetic()) {
        return Err("Password must contain at least one letter".to_string());
    }
    Ok(())
}

fn has_digit(password: &str) -> Result<(), String> {
    if !password.chars().any(|char| char.is_ascii_digit()) {
        return Err("Password must contain at least one digit".to_string());
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    let validations = [
        has_min_length,
        has_max_length,
        has_no_space,
        has_letter,
        has_digit,
    ];

    let errors: Vec<String> = validations
        .par_iter()
        .filter_map(|validate_fn| validate_fn(password).err())
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        let concatenated_errors = errors.join(", ");
        Err(add_error("password.invalid", concatenated_errors, password))
    }
}

#[cfg(test)]
mod tests {
    use super::validate_password;

    #[test]
    fn accepts_a_policy_compliant_password() {
        assert!(validate_password("Passw0rd").is_ok());
        assert!(validate_password("s3cret-enough").is_ok());
    }

    #[test]
    fn rejects_passwords_under_eight_chars() {
        assert!(validate_password("Pass1").is_err());
        assert!(validate_password("1234567").is_err());
    }

    #[test]
    fn rejects_spaces_and_missing_classes() {
        assert!(validate_password("pass word 1").is_err());
        assert!(validate_password("onlyletters").is_err());
        assert!(validate_password("123456789").is_err());
        assert!(validate_password(&"a1".repeat(80)).is_err());
    }
}

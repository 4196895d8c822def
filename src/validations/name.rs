use validator::ValidationError;

use crate::utils::validation_utils::add_error;

const MIN_NAME_LENGTH: usize = 2;
const MAX_NAME_LENGTH: usize = 100;

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    let mut errors = Vec::new();

    if name.trim().is_empty() {
        errors.push("Name must not be empty".to_string());
    }

    if name.len() < MIN_NAME_LENGTH {
        errors.push(format!(
            "Name must be at least {} characters long",
            MIN_NAME_LENGTH
        ));
    }

    if name.len() > MAX_NAME_LENGTH {
        errors.push(format!(
            "Name must be less than {} characters",
            MAX_NAME_LENGTH
        ));
    }

    if !name.chars().all(|c| c.is_alphabetic() || c.is_whitespace()) {
        errors.push("Name can only contain letters and spaces".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        let concatenated_errors = errors.join(", ");
        Err(add_error("name.invalid", concatenated_errors, name))
    }
}

#[cfg(test)]
mod tests {
    use super::validate_name;

    #[test]
    fn accepts_plain_names() {
        assert!(validate_name("Sara Ahmed").is_ok());
    }

    #[test]
    fn rejects_empty_short_and_symbolic_names() {
        assert!(validate_name("").is_err());
        assert!(validate_name("A").is_err());
        assert!(validate_name("R2-D2").is_err());
        assert!(validate_name(&"x".repeat(101)).is_err());
    }
}

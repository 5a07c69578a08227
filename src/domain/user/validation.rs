//! Name and surname validation.
//!
//! A name is accepted when it consists of one or more characters, each of
//! which is a Latin letter, a Cyrillic letter, `-` or `+`.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{DomainError, DomainResult};

static LETTER_MATCH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[а-яА-ЯёЁa-zA-Z\-+]+$").expect("LETTER_MATCH_PATTERN is a valid regex pattern")
});

pub const NAME_MESSAGE: &str = "Name should contain only letters";
pub const SURNAME_MESSAGE: &str = "Surname should contain only letters";

/// Returns `true` if `value` is non-empty and contains only permitted characters.
pub fn is_letters_only(value: &str) -> bool {
    LETTER_MATCH_PATTERN.is_match(value)
}

pub fn validate_name(value: &str) -> DomainResult<()> {
    if is_letters_only(value) {
        Ok(())
    } else {
        Err(DomainError::validation("name", NAME_MESSAGE))
    }
}

pub fn validate_surname(value: &str) -> DomainResult<()> {
    if is_letters_only(value) {
        Ok(())
    } else {
        Err(DomainError::validation("surname", SURNAME_MESSAGE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_latin_and_cyrillic_names() {
        assert!(is_letters_only("Anna"));
        assert!(is_letters_only("Анна"));
        assert!(is_letters_only("Семён"));
        assert!(is_letters_only("A"));
    }

    #[test]
    fn accepts_hyphen_and_plus() {
        assert!(is_letters_only("Smith-Jones"));
        assert!(is_letters_only("Римский-Корсаков"));
        assert!(is_letters_only("A+B"));
    }

    #[test]
    fn rejects_digits_spaces_and_symbols() {
        for bad in ["Anna1", "Anna Maria", "O'Brien", "anna@", "", " ", "Ivan_ov", "Anna\n"] {
            assert!(!is_letters_only(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn rejects_letters_outside_latin_and_cyrillic() {
        assert!(!is_letters_only("Zoë"));
        assert!(!is_letters_only("Müller"));
    }

    #[test]
    fn errors_carry_field_specific_messages() {
        match validate_name("Anna1") {
            Err(DomainError::Validation { field, message }) => {
                assert_eq!(field, "name");
                assert_eq!(message, NAME_MESSAGE);
            }
            other => panic!("unexpected result: {other:?}"),
        }
        match validate_surname("Ivanova2") {
            Err(DomainError::Validation { field, message }) => {
                assert_eq!(field, "surname");
                assert_eq!(message, SURNAME_MESSAGE);
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(validate_name("Anna").is_ok());
        assert!(validate_surname("Ivanova").is_ok());
    }
}

//! Reusable field rules
//!
//! Each rule takes the raw value plus a human label and returns the message
//! to show under the field when the value is not acceptable. Shaped values
//! are matched as stored, so surrounding whitespace fails the shape check.

use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

pub type RuleResult = Result<(), String>;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));
static PAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").expect("valid PAN pattern"));
static IFSC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{4}0[A-Z0-9]{6}$").expect("valid IFSC pattern"));
static ISO_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date pattern"));

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Non-blank text
pub fn required(value: &str, label: &str) -> RuleResult {
    if value.trim().is_empty() {
        Err(format!("{} is required", label))
    } else {
        Ok(())
    }
}

pub fn email(value: &str, label: &str) -> RuleResult {
    required(value, label)?;
    if EMAIL.is_match(value) {
        Ok(())
    } else {
        Err(format!("{} must be a valid email address", label))
    }
}

/// Exactly `len` ASCII digits
pub fn digits(value: &str, len: usize, label: &str) -> RuleResult {
    required(value, label)?;
    if value.len() == len && value.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(format!("{} must be {} digits", label, len))
    }
}

/// Between `min` and `max` ASCII digits
pub fn digit_range(value: &str, min: usize, max: usize, label: &str) -> RuleResult {
    required(value, label)?;
    if (min..=max).contains(&value.len()) && value.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(format!("{} must be {} to {} digits", label, min, max))
    }
}

/// Ten digit phone number
pub fn phone(value: &str, label: &str) -> RuleResult {
    digits(value, 10, label)
}

/// Apply `rule` only when something was entered
pub fn optional(value: &str, rule: impl FnOnce(&str) -> RuleResult) -> RuleResult {
    if value.is_empty() {
        Ok(())
    } else {
        rule(value)
    }
}

pub fn pan(value: &str, label: &str) -> RuleResult {
    required(value, label)?;
    if PAN.is_match(value) {
        Ok(())
    } else {
        Err(format!("{} must look like ABCDE1234F", label))
    }
}

pub fn ifsc(value: &str, label: &str) -> RuleResult {
    required(value, label)?;
    if IFSC.is_match(value) {
        Ok(())
    } else {
        Err(format!("{} must look like SBIN0001234", label))
    }
}

/// `YYYY-MM-DD` date that is not after today
pub fn past_date(value: &str, label: &str) -> RuleResult {
    required(value, label)?;
    let malformed = || format!("{} must be a date in YYYY-MM-DD format", label);
    // chrono also takes unpadded and signed years
    if !ISO_DATE.is_match(value) {
        return Err(malformed());
    }
    let date = NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| malformed())?;
    if date > Local::now().date_naive() {
        return Err(format!("{} cannot be in the future", label));
    }
    Ok(())
}

/// Non-blank text of at most `max` characters
pub fn text(value: &str, max: usize, label: &str) -> RuleResult {
    required(value, label)?;
    max_length(value, max, label)
}

/// At most `max` characters
pub fn max_length(value: &str, max: usize, label: &str) -> RuleResult {
    if value.chars().count() > max {
        Err(format!("{} must be at most {} characters", label, max))
    } else {
        Ok(())
    }
}

/// Value must be one of `options`
pub fn one_of(value: &str, options: &[&str], label: &str) -> RuleResult {
    if value.is_empty() {
        return Err(format!("{} is required", label));
    }
    if options.contains(&value) {
        Ok(())
    } else {
        Err(format!("'{}' is not a valid {}", value, label.to_lowercase()))
    }
}

/// Every selected value must be one of `options`, without repeats
pub fn choices(values: &[String], options: &[&str], label: &str) -> RuleResult {
    let mut seen = HashSet::new();
    for value in values {
        if !options.contains(&value.as_str()) {
            return Err(format!("'{}' is not a valid choice for {}", value, label));
        }
        if !seen.insert(value.as_str()) {
            return Err(format!("'{}' is selected more than once in {}", value, label));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert!(required("x", "Name").is_ok());
        assert_eq!(required("   ", "Name").unwrap_err(), "Name is required");
    }

    #[test]
    fn test_email() {
        assert!(email("asha.rao@univ.edu", "Email").is_ok());
        assert!(email("asha.rao@", "Email").is_err());
        assert!(email("asha rao@univ.edu", "Email").is_err());
    }

    #[test]
    fn test_phone() {
        assert!(phone("9876543210", "Phone").is_ok());
        assert!(phone("98765", "Phone").is_err());
        assert!(phone("98765abcde", "Phone").is_err());
        assert!(phone(" 9876543210", "Phone").is_err());
        assert!(phone("9876543210 ", "Phone").is_err());
    }

    #[test]
    fn test_optional_skips_empty() {
        assert!(optional("", |v| phone(v, "Phone")).is_ok());
        assert!(optional("123", |v| phone(v, "Phone")).is_err());
        assert!(optional(" ", |v| phone(v, "Phone")).is_err());
    }

    #[test]
    fn test_identifiers() {
        assert!(pan("ABCDE1234F", "PAN").is_ok());
        assert!(pan("abcde1234f", "PAN").is_err());
        assert!(pan(" ABCDE1234F", "PAN").is_err());
        assert!(email(" asha.rao@univ.edu", "Email").is_err());
        assert!(ifsc("SBIN0001234", "IFSC").is_ok());
        assert!(ifsc("SBIN1001234", "IFSC").is_err());
        assert!(digit_range("123456789", 9, 18, "Account").is_ok());
        assert!(digit_range("12345678", 9, 18, "Account").is_err());
    }

    #[test]
    fn test_past_date() {
        assert!(past_date("1985-04-12", "Date of birth").is_ok());
        assert!(past_date("12/04/1985", "Date of birth").is_err());
        assert!(past_date("2999-01-01", "Date of birth").is_err());
        assert!(past_date("1985-02-30", "Date of birth").is_err());
        assert!(past_date("1985-4-2", "Date of birth").is_err());
        assert!(past_date("+1985-04-02", "Date of birth").is_err());
        assert!(past_date(" 1985-04-12", "Date of birth").is_err());
    }

    #[test]
    fn test_text() {
        assert!(text("Asha", 5, "Name").is_ok());
        assert_eq!(text("", 5, "Name").unwrap_err(), "Name is required");
        assert!(text("Ashalata", 5, "Name").is_err());
    }

    #[test]
    fn test_max_length() {
        assert!(max_length("", 3, "Remarks").is_ok());
        assert!(max_length("née", 3, "Remarks").is_ok());
        assert_eq!(max_length("abcd", 3, "Remarks").unwrap_err(), "Remarks must be at most 3 characters");
    }

    #[test]
    fn test_one_of() {
        assert!(one_of("Dr", &["Mr", "Dr"], "Prefix").is_ok());
        assert_eq!(one_of("", &["Mr"], "Prefix").unwrap_err(), "Prefix is required");
        assert!(one_of("Prof", &["Mr", "Dr"], "Prefix").is_err());
    }

    #[test]
    fn test_choices() {
        let opts = ["English", "Hindi"];
        assert!(choices(&[], &opts, "Languages").is_ok());
        assert!(choices(&["Hindi".into()], &opts, "Languages").is_ok());
        assert!(choices(&["Klingon".into()], &opts, "Languages").is_err());
        assert!(choices(&["Hindi".into(), "Hindi".into()], &opts, "Languages").is_err());
    }
}

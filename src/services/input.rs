//! Parsing of raw, text-typed input into the values the services accept.
//!
//! Browsers submit every field as text; anything that does not parse is a
//! validation error rather than being coerced.

use crate::error::AppError;

/// Trims `value` and rejects it when nothing is left.
pub fn required_text(field: &str, value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(format!("{field} required")));
    }
    Ok(trimmed.to_string())
}

pub fn parse_phone(raw: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::validation(format!("Guardian phone must be a number, got '{raw}'")))
}

pub fn parse_id(field: &str, raw: &str) -> Result<i32, AppError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| AppError::validation(format!("{field} must be a number, got '{raw}'")))
}

pub fn parse_flag(raw: &str) -> Result<i32, AppError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| AppError::validation(format!("Presence flag must be a number, got '{raw}'")))
}

/// A submitted roll call: the date plus the roster names and presence flags
/// in the order the form listed them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollCallForm {
    pub date: String,
    pub names: Vec<String>,
    pub flags: Vec<i32>,
}

impl RollCallForm {
    /// Builds the batch from url-encoded pairs. `name` and `present` repeat
    /// once per student and are paired by position; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Result<Self, AppError> {
        let mut date = None;
        let mut names = Vec::new();
        let mut flags = Vec::new();

        for (key, value) in pairs {
            match key.as_str() {
                "date" => date = Some(value),
                "name" => names.push(value),
                "present" => flags.push(parse_flag(&value)?),
                _ => {}
            }
        }

        let date = date.unwrap_or_default();
        required_text("Date", &date)?;
        Ok(Self { date, names, flags })
    }
}

#[cfg(test)]
mod tests {
    use super::{RollCallForm, parse_flag, parse_phone, required_text};
    use crate::error::AppError;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn required_text_trims_and_rejects_blank() {
        assert_eq!(required_text("Name", "  3B ").expect("valid"), "3B");
        let err = required_text("Name", " \t").expect_err("blank should fail");
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn phone_must_be_an_integer() {
        assert_eq!(parse_phone(" 5511987654321 ").expect("valid"), 5511987654321);
        assert!(matches!(parse_phone("55-11"), Err(AppError::Validation(_))));
        assert!(matches!(parse_phone(""), Err(AppError::Validation(_))));
    }

    #[test]
    fn flags_are_kept_verbatim() {
        assert_eq!(parse_flag("1").expect("valid"), 1);
        assert_eq!(parse_flag("2").expect("valid"), 2);
        assert!(matches!(parse_flag("yes"), Err(AppError::Validation(_))));
    }

    #[test]
    fn roll_call_pairs_names_and_flags_in_order() {
        let form = RollCallForm::from_pairs(pairs(&[
            ("date", "2024-05-01"),
            ("name", "Ana"),
            ("present", "1"),
            ("name", "beto"),
            ("present", "0"),
        ]))
        .expect("form should parse");

        assert_eq!(form.date, "2024-05-01");
        assert_eq!(form.names, ["Ana", "beto"]);
        assert_eq!(form.flags, [1, 0]);
    }

    #[test]
    fn roll_call_date_is_kept_verbatim() {
        let form = RollCallForm::from_pairs(pairs(&[
            ("date", " 1 de maio "),
            ("name", "Ana"),
            ("present", "1"),
        ]))
        .expect("form should parse");
        assert_eq!(form.date, " 1 de maio ");
    }

    #[test]
    fn roll_call_requires_a_date() {
        let err = RollCallForm::from_pairs(pairs(&[("name", "Ana"), ("present", "1")]))
            .expect_err("missing date should fail");
        assert_eq!(err.message(), "Date required");
    }

    #[test]
    fn roll_call_rejects_non_numeric_flags() {
        let err = RollCallForm::from_pairs(pairs(&[
            ("date", "2024-05-01"),
            ("name", "Ana"),
            ("present", "sim"),
        ]))
        .expect_err("non-numeric flag should fail");
        assert!(matches!(err, AppError::Validation(_)));
    }
}

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// The fields of the contact form that carry a rule. Optional inputs
/// (phone, company, newsletter) have no rule and always pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
    Privacy,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Subject,
        Field::Message,
        Field::Privacy,
    ];

    /// Element id of the input.
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
            Field::Privacy => "privacy",
        }
    }

    /// Element id of the inline error text.
    pub fn error_id(self) -> String {
        format!("{}Error", self.id())
    }

    pub fn rule(self) -> &'static ValidationRule {
        match self {
            Field::Name => &NAME_RULE,
            Field::Email => &EMAIL_RULE,
            Field::Subject => &SUBJECT_RULE,
            Field::Message => &MESSAGE_RULE,
            Field::Privacy => &PRIVACY_RULE,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

pub struct ValidationRule {
    pub required: bool,
    pub min_length: Option<usize>,
    pub pattern: Option<&'static Lazy<Regex>>,
    pub message: &'static str,
}

static NAME_RULE: ValidationRule = ValidationRule {
    required: true,
    min_length: Some(2),
    pattern: None,
    message: "Nama lengkap minimal 2 karakter",
};

static EMAIL_RULE: ValidationRule = ValidationRule {
    required: true,
    min_length: None,
    pattern: Some(&EMAIL_PATTERN),
    message: "Format email tidak valid",
};

static SUBJECT_RULE: ValidationRule = ValidationRule {
    required: true,
    min_length: None,
    pattern: None,
    message: "Silakan pilih subjek",
};

static MESSAGE_RULE: ValidationRule = ValidationRule {
    required: true,
    min_length: Some(10),
    pattern: None,
    message: "Pesan minimal 10 karakter",
};

static PRIVACY_RULE: ValidationRule = ValidationRule {
    required: true,
    min_length: None,
    pattern: None,
    message: "Anda harus menyetujui kebijakan privasi",
};

/// What an input holds: text from inputs/selects/textareas, or a checkbox state.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Checked(bool),
}

impl FieldValue<'_> {
    fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::Checked(checked) => !checked,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

impl ValidationRule {
    /// First failing check wins: required, then pattern, then minimum length.
    pub fn check(&self, value: &FieldValue<'_>) -> Result<(), &'static str> {
        if self.required && value.is_blank() {
            return Err(self.message);
        }

        let FieldValue::Text(text) = value else {
            return Ok(());
        };
        if text.is_empty() {
            return Ok(());
        }

        if let Some(pattern) = self.pattern {
            if !pattern.is_match(text) {
                return Err(self.message);
            }
        }

        if let Some(min_length) = self.min_length {
            // UTF-16 code units, as the browser measures `value.length`
            if text.encode_utf16().count() < min_length {
                return Err(self.message);
            }
        }

        Ok(())
    }
}

pub fn validate_field(field: Field, value: &FieldValue<'_>) -> Result<(), FieldError> {
    field
        .rule()
        .check(value)
        .map_err(|message| FieldError { field, message })
}

/// Validates every ruled field, even untouched ones. Each outcome is returned
/// so callers can both show and clear errors.
pub fn validate_all<'a>(
    value_of: impl Fn(Field) -> FieldValue<'a>,
) -> Vec<(Field, Result<(), FieldError>)> {
    Field::ALL
        .into_iter()
        .map(|field| (field, validate_field(field, &value_of(field))))
        .collect()
}

/// The inline error currently shown next to each field.
///
/// Blur re-validates one field, typing clears that field's error without
/// re-validating, and a submit replaces the whole set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors {
    shown: HashMap<Field, &'static str>,
}

impl FieldErrors {
    pub fn message(&self, field: Field) -> Option<&'static str> {
        self.shown.get(&field).copied()
    }

    pub fn len(&self) -> usize {
        self.shown.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shown.is_empty()
    }

    pub fn blur(&mut self, field: Field, value: &FieldValue<'_>) {
        match validate_field(field, value) {
            Ok(()) => self.shown.remove(&field),
            Err(err) => self.shown.insert(field, err.message),
        };
    }

    /// Returns whether an error was cleared.
    pub fn input(&mut self, field: Field) -> bool {
        self.shown.remove(&field).is_some()
    }

    pub fn submit(&mut self, outcomes: &[(Field, Result<(), FieldError>)]) {
        self.shown = outcomes
            .iter()
            .filter_map(|(field, outcome)| outcome.as_ref().err().map(|err| (*field, err.message)))
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> FieldValue<'_> {
        FieldValue::Text(value)
    }

    #[test]
    fn email_pattern() {
        assert!(validate_field(Field::Email, &text("a@b.co")).is_ok());

        let err = validate_field(Field::Email, &text("not-an-email")).unwrap_err();
        assert_eq!(err.field, Field::Email);
        assert_eq!(err.message, "Format email tidak valid");

        assert!(validate_field(Field::Email, &text("a b@c.d")).is_err());
        assert!(validate_field(Field::Email, &text("a@b")).is_err());
    }

    #[test]
    fn name_min_length() {
        assert!(validate_field(Field::Name, &text("A")).is_err());
        assert!(validate_field(Field::Name, &text("Al")).is_ok());
    }

    #[test]
    fn message_min_length() {
        let err = validate_field(Field::Message, &text("short")).unwrap_err();
        assert_eq!(err.message, "Pesan minimal 10 karakter");
        assert!(validate_field(Field::Message, &text("tolong kirim brosur")).is_ok());
    }

    #[test]
    fn min_length_counts_utf16_units() {
        // two characters, four bytes
        assert!(validate_field(Field::Name, &text("Éé")).is_ok());
        // one character outside the BMP is a surrogate pair
        assert!(validate_field(Field::Name, &text("😀")).is_ok());
        assert!(validate_field(Field::Name, &text("É")).is_err());
    }

    #[test]
    fn whitespace_only_is_missing() {
        let err = validate_field(Field::Subject, &text("   ")).unwrap_err();
        assert_eq!(err.message, "Silakan pilih subjek");
        assert!(validate_field(Field::Subject, &text("konsultasi")).is_ok());
    }

    #[test]
    fn privacy_must_be_checked() {
        assert!(validate_field(Field::Privacy, &FieldValue::Checked(true)).is_ok());
        let err = validate_field(Field::Privacy, &FieldValue::Checked(false)).unwrap_err();
        assert_eq!(err.to_string(), "privacy: Anda harus menyetujui kebijakan privasi");
    }

    #[test]
    fn every_field_has_a_distinct_id() {
        let ids: std::collections::HashSet<&str> = Field::ALL.iter().map(|f| f.id()).collect();
        assert_eq!(ids.len(), Field::ALL.len());
        for field in Field::ALL {
            assert!(!field.rule().message.is_empty());
        }
        assert_eq!(Field::Email.error_id(), "emailError");
    }

    #[test]
    fn validate_all_reports_untouched_fields() {
        let results = validate_all(|field| match field {
            Field::Privacy => FieldValue::Checked(false),
            Field::Name => FieldValue::Text("Budi"),
            _ => FieldValue::Text(""),
        });
        assert_eq!(results.len(), Field::ALL.len());
        let failed: Vec<Field> = results
            .iter()
            .filter(|(_, outcome)| outcome.is_err())
            .map(|(field, _)| *field)
            .collect();
        assert_eq!(
            failed,
            vec![Field::Email, Field::Subject, Field::Message, Field::Privacy]
        );
    }

    #[test]
    fn typing_clears_error_until_next_blur() {
        let mut errors = FieldErrors::default();
        errors.blur(Field::Name, &text("A"));
        assert_eq!(errors.message(Field::Name), Some("Nama lengkap minimal 2 karakter"));

        // still invalid, but typing alone does not bring the error back
        assert!(errors.input(Field::Name));
        assert_eq!(errors.message(Field::Name), None);
        assert!(!errors.input(Field::Name));
        assert_eq!(errors.message(Field::Name), None);

        errors.blur(Field::Name, &text("A"));
        assert_eq!(errors.message(Field::Name), Some("Nama lengkap minimal 2 karakter"));
        errors.blur(Field::Name, &text("Ani"));
        assert!(errors.is_empty());
    }

    #[test]
    fn blur_shows_the_configured_message() {
        let mut errors = FieldErrors::default();
        errors.blur(Field::Email, &text("a@b"));
        errors.blur(Field::Privacy, &FieldValue::Checked(false));
        assert_eq!(errors.message(Field::Email), Some(Field::Email.rule().message));
        assert_eq!(errors.message(Field::Privacy), Some(Field::Privacy.rule().message));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn submit_replaces_stale_errors() {
        let mut errors = FieldErrors::default();
        errors.blur(Field::Name, &text(""));
        errors.blur(Field::Email, &text("nope"));

        let outcomes = validate_all(|field| match field {
            Field::Name => FieldValue::Text("Budi"),
            Field::Email => FieldValue::Text("budi@tani.id"),
            Field::Privacy => FieldValue::Checked(true),
            Field::Subject => FieldValue::Text("Konsultasi"),
            Field::Message => FieldValue::Text("pendek"),
        });
        errors.submit(&outcomes);

        assert_eq!(errors.message(Field::Name), None);
        assert_eq!(errors.message(Field::Email), None);
        assert_eq!(errors.message(Field::Message), Some("Pesan minimal 10 karakter"));
        assert_eq!(errors.len(), 1);
    }
}

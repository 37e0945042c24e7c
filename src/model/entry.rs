//! Entry records for the chip editor.

use crate::validate::is_valid_email;

/// One email entry: the raw text plus its classification at creation time.
///
/// The value is never mutated after creation and the validity verdict is
/// never re-evaluated; an entry keeps the classification it was created
/// with even if the validation rules were to change. Identity is the value
/// itself, compared case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailEntry {
    value: String,
    is_valid: bool,
}

impl EmailEntry {
    /// Create an entry, classifying `value` with the email validator.
    pub fn classify(value: impl Into<String>) -> Self {
        let value = value.into();
        let is_valid = is_valid_email(&value);
        Self { value, is_valid }
    }

    /// The raw text as entered or set.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The validator's verdict captured at creation time.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }
}

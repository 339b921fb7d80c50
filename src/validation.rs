use crate::checksum::compute_check_digit;
use crate::document::DocumentKind;
use crate::normalization::clean;
use crate::pattern_filter::is_well_formed;
use strum::Display;
use thiserror::Error;

/// Which of the two trailing check digits disagreed with the computed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum CheckDigitPosition {
    First,
    Second,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Wrong number of digits for the document kind, or a denylisted value
    #[error("Invalid format")]
    InvalidFormat,

    #[error("Invalid digit: {position} check digit should be {expected}, found {found}")]
    DigitMismatch {
        position: CheckDigitPosition,
        expected: u8,
        found: u8,
    },
}

impl From<ValidationError> for i64 {
    fn from(value: ValidationError) -> i64 {
        match value {
            ValidationError::InvalidFormat => -1,
            ValidationError::DigitMismatch { .. } => -2,
        }
    }
}

/// Run the full validation pipeline, returning the cleaned digits on success.
pub(crate) fn check(input: &str, kind: DocumentKind) -> Result<String, ValidationError> {
    check_cleaned(clean(input), kind)
}

/// Same as [check] for input that already went through [clean].
pub(crate) fn check_cleaned(
    cleaned: String,
    kind: DocumentKind,
) -> Result<String, ValidationError> {
    if cleaned.is_empty() || !is_well_formed(&cleaned, kind) {
        return Err(ValidationError::InvalidFormat);
    }

    // The cleaned string is ASCII digits only from here on, so byte indexing is safe.
    let pos = cleaned.len() - 2;
    let digits = cleaned.as_bytes();
    let found_first = digits[pos] - b'0';
    let found_second = digits[pos + 1] - b'0';

    let first = compute_check_digit(&cleaned[..pos], kind.first_weight());
    if first != found_first {
        return Err(ValidationError::DigitMismatch {
            position: CheckDigitPosition::First,
            expected: first,
            found: found_first,
        });
    }

    let second = compute_check_digit(&cleaned[..pos + 1], kind.first_weight() + 1);
    if second != found_second {
        return Err(ValidationError::DigitMismatch {
            position: CheckDigitPosition::Second,
            expected: second,
            found: found_second,
        });
    }

    Ok(cleaned)
}

/// Checks that `input` is a well-formed CPF with matching check digits.
pub fn validate_cpf(input: &str) -> Result<(), ValidationError> {
    check(input, DocumentKind::Cpf).map(|_| ())
}

/// Checks that `input` is a well-formed CNPJ with matching check digits.
pub fn validate_cnpj(input: &str) -> Result<(), ValidationError> {
    check(input, DocumentKind::Cnpj).map(|_| ())
}

pub fn is_valid_cpf(input: &str) -> bool {
    validate_cpf(input).is_ok()
}

pub fn is_valid_cnpj(input: &str) -> bool {
    validate_cnpj(input).is_ok()
}

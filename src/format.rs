use crate::document::DocumentKind;
use crate::validation::{check, ValidationError};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Each separator is optional, but when present it must be in its canonical place.
    static ref CPF_SHAPE: Regex =
        Regex::new(r"^[0-9]{3}\.?[0-9]{3}\.?[0-9]{3}-?[0-9]{2}$").unwrap();
    static ref CNPJ_SHAPE: Regex =
        Regex::new(r"^[0-9]{2}\.?[0-9]{3}\.?[0-9]{3}/?[0-9]{4}-?[0-9]{2}$").unwrap();
}

/// Whether the raw (uncleaned) input follows the canonical layout of `kind`,
/// with or without its separators.
pub fn has_canonical_shape(input: &str, kind: DocumentKind) -> bool {
    match kind {
        DocumentKind::Cpf => CPF_SHAPE.is_match(input),
        DocumentKind::Cnpj => CNPJ_SHAPE.is_match(input),
    }
}

/// Fill the `#` placeholders of `mask` with `digits`, in order.
pub(crate) fn apply_mask(mask: &str, digits: &str) -> String {
    let mut digits = digits.chars();
    mask.chars()
        .filter_map(|c| if c == '#' { digits.next() } else { Some(c) })
        .collect()
}

/// Validate `input` and render it in its canonical punctuated form,
/// e.g. `111.444.777-35` or `11.444.777/0001-61`.
pub fn format_document(kind: DocumentKind, input: &str) -> Result<String, ValidationError> {
    let cleaned = check(input, kind)?;
    Ok(apply_mask(kind.mask(), &cleaned))
}

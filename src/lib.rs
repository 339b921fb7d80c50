// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod checksum;
mod config;
mod document;
mod format;
mod normalization;
mod observability;
mod pattern_filter;
mod validation;

// This is the public API of the brdoc library
pub use checksum::{
    check_digits, compute_check_digit, BrazilianCnpjChecksum, BrazilianCpfChecksum, Validator,
};
pub use config::{ConfigError, DocumentValidator, FormatPolicy, ValidatorConfig};
pub use document::{Document, DocumentKind};
pub use format::{format_document, has_canonical_shape};
pub use normalization::clean;
pub use observability::labels::Labels;
pub use pattern_filter::{is_denylisted, is_well_formed};
pub use validation::{
    is_valid_cnpj, is_valid_cpf, validate_cnpj, validate_cpf, CheckDigitPosition,
    ValidationError,
};

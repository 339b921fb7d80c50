use crate::format::apply_mask;
use crate::normalization::clean;
use crate::validation::{check, check_cleaned, ValidationError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use strum::{EnumIter, EnumString, IntoStaticStr};

/// The kind of Brazilian taxpayer document being validated.
#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    IntoStaticStr,
    EnumIter,
    EnumString,
    strum::Display,
)]
#[serde(tag = "type")]
#[strum(ascii_case_insensitive)]
pub enum DocumentKind {
    /// Cadastro de Pessoas Físicas (individuals)
    Cpf,
    /// Cadastro Nacional da Pessoa Jurídica (companies)
    Cnpj,
}

impl DocumentKind {
    /// Number of digits once separators are removed, check digits included.
    pub const fn digit_count(&self) -> usize {
        match self {
            DocumentKind::Cpf => 11,
            DocumentKind::Cnpj => 14,
        }
    }

    /// Starting weight for the first check digit. The second one starts one higher.
    pub const fn first_weight(&self) -> u32 {
        match self {
            DocumentKind::Cpf => 10,
            DocumentKind::Cnpj => 5,
        }
    }

    /// Canonical punctuated layout, `#` standing for a digit.
    pub const fn mask(&self) -> &'static str {
        match self {
            DocumentKind::Cpf => "###.###.###-##",
            DocumentKind::Cnpj => "##.###.###/####-##",
        }
    }

    pub const fn formatted_len(&self) -> usize {
        self.mask().len()
    }

    /// Guess the kind from the number of digits in `input`.
    pub fn detect(input: &str) -> Option<DocumentKind> {
        Self::from_digit_count(clean(input).len())
    }

    fn from_digit_count(count: usize) -> Option<DocumentKind> {
        match count {
            11 => Some(DocumentKind::Cpf),
            14 => Some(DocumentKind::Cnpj),
            _ => None,
        }
    }
}

/// A document number that passed validation, stored as its cleaned digits.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Document {
    kind: DocumentKind,
    digits: String,
}

impl Document {
    pub fn parse(kind: DocumentKind, input: &str) -> Result<Self, ValidationError> {
        let digits = check(input, kind)?;
        Ok(Document { kind, digits })
    }

    /// Parse `input` as whichever kind its digit count suggests.
    pub fn detect(input: &str) -> Result<Self, ValidationError> {
        let cleaned = clean(input);
        let kind =
            DocumentKind::from_digit_count(cleaned.len()).ok_or(ValidationError::InvalidFormat)?;
        let digits = check_cleaned(cleaned, kind)?;
        Ok(Document { kind, digits })
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn formatted(&self) -> String {
        apply_mask(self.kind.mask(), &self.digits)
    }
}

impl FromStr for Document {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Document::detect(s)
    }
}

impl Display for Document {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.formatted())
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Document::detect(&raw).map_err(serde::de::Error::custom)
    }
}

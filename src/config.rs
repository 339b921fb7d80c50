use crate::checksum::Validator;
use crate::document::DocumentKind;
use crate::format::has_canonical_shape;
use crate::observability::labels::Labels;
use crate::observability::metrics::ValidatorMetrics;
use crate::validation::{check, ValidationError};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;
use thiserror::Error;

/// How much punctuation a raw input may carry before it is cleaned.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatPolicy {
    /// Any non-digit character is ignored.
    #[default]
    Lenient,
    /// The raw input must follow the canonical layout, each separator being optional.
    Strict,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid validator config: {0}")]
    InvalidConfig(String),
}

#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ValidatorConfig {
    pub kind: DocumentKind,

    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub format: FormatPolicy,

    #[serde(skip)]
    pub labels: Labels,
}

impl ValidatorConfig {
    pub fn new(kind: DocumentKind) -> Self {
        Self {
            kind,
            format: FormatPolicy::default(),
            labels: Labels::default(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|err| ConfigError::InvalidConfig(err.to_string()))
    }

    pub fn kind(&self, kind: DocumentKind) -> Self {
        self.mutate_clone(|x| x.kind = kind)
    }

    pub fn format(&self, format: FormatPolicy) -> Self {
        self.mutate_clone(|x| x.format = format)
    }

    pub fn labels(&self, labels: Labels) -> Self {
        self.mutate_clone(|x| x.labels = labels)
    }

    pub fn build(&self) -> DocumentValidator {
        DocumentValidator {
            kind: self.kind,
            format: self.format,
            metrics: ValidatorMetrics::new(self.kind, &self.labels),
        }
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}

/// A validator for one document kind, built from a [ValidatorConfig].
/// Every call is recorded in the `document.validations` counter.
pub struct DocumentValidator {
    kind: DocumentKind,
    format: FormatPolicy,
    metrics: ValidatorMetrics,
}

impl DocumentValidator {
    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    fn run(&self, input: &str) -> Result<(), ValidationError> {
        if self.format == FormatPolicy::Strict && !has_canonical_shape(input, self.kind) {
            return Err(ValidationError::InvalidFormat);
        }
        check(input, self.kind).map(|_| ())
    }
}

impl Validator for DocumentValidator {
    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let result = self.run(input);
        self.metrics.record(&result);
        result
    }
}

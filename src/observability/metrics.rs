use crate::document::DocumentKind;
use crate::observability::labels::Labels;
use crate::validation::ValidationError;
use metrics::{counter, Counter};

const DOCUMENT_KIND: &str = "document_kind";
const OUTCOME: &str = "outcome";
const VALIDATIONS: &str = "document.validations";
const CREATIONS: &str = "validator.creations";

/// Per-validator counters, one for each validation outcome.
pub struct ValidatorMetrics {
    pub valid: Counter,
    pub invalid_format: Counter,
    pub digit_mismatch: Counter,
}

impl ValidatorMetrics {
    /// Registers the counters and counts one more validator creation.
    pub fn new(kind: DocumentKind, labels: &Labels) -> Self {
        let labels = labels.clone_with_labels(&[(DOCUMENT_KIND, <&'static str>::from(kind))]);
        counter!(CREATIONS, labels.clone()).increment(1);
        ValidatorMetrics {
            valid: counter!(
                VALIDATIONS,
                labels.clone_with_labels(&[(OUTCOME, "valid")])
            ),
            invalid_format: counter!(
                VALIDATIONS,
                labels.clone_with_labels(&[(OUTCOME, "invalid_format")])
            ),
            digit_mismatch: counter!(
                VALIDATIONS,
                labels.clone_with_labels(&[(OUTCOME, "digit_mismatch")])
            ),
        }
    }

    pub fn record(&self, result: &Result<(), ValidationError>) {
        match result {
            Ok(()) => self.valid.increment(1),
            Err(ValidationError::InvalidFormat) => self.invalid_format.increment(1),
            Err(ValidationError::DigitMismatch { .. }) => self.digit_mismatch.increment(1),
        }
    }
}

mod brazilian_cnpj_checksum;
mod brazilian_cpf_checksum;

pub use crate::checksum::brazilian_cnpj_checksum::BrazilianCnpjChecksum;
pub use crate::checksum::brazilian_cpf_checksum::BrazilianCpfChecksum;

use crate::document::DocumentKind;
use crate::validation::ValidationError;

pub trait Validator: Send + Sync {
    fn validate(&self, input: &str) -> Result<(), ValidationError>;

    fn is_valid_match(&self, input: &str) -> bool {
        self.validate(input).is_ok()
    }
}

impl Validator for DocumentKind {
    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        match self {
            DocumentKind::Cpf => BrazilianCpfChecksum.validate(input),
            DocumentKind::Cnpj => BrazilianCnpjChecksum.validate(input),
        }
    }
}

// Lowest weight of the modulo 11 table. Going below it wraps back to 9 (not to the start weight).
const MIN_WEIGHT: u32 = 2;
const WRAP_WEIGHT: u32 = 9;

/// Compute a modulo 11 check digit over `digits`, weighting them left to right
/// starting at `start_weight`.
///
/// Characters that are not ASCII digits do not contribute to the sum.
pub fn compute_check_digit(digits: &str, start_weight: u32) -> u8 {
    // Ex. CPF 111.444.777, first digit
    //   1    1    1    4    4    4    7    7    7
    // x10   x9   x8   x7   x6   x5   x4   x3   x2
    //  10 +  9 +  8 + 28 + 24 + 20 + 28 + 21 + 14 = 162, 162 % 11 = 8, 11 - 8 = 3
    // The sum is kept reduced modulo 11 so any weight and any input length fit.
    let mut weight = start_weight;
    let mut sum: u64 = 0;
    for digit in digits.chars().filter_map(|c| c.to_digit(10)) {
        sum = (sum + u64::from(digit) * u64::from(weight % 11)) % 11;
        weight = if weight <= MIN_WEIGHT {
            WRAP_WEIGHT
        } else {
            weight - 1
        };
    }

    match sum {
        0 | 1 => 0,
        remainder => (11 - remainder) as u8,
    }
}

/// Both check digits for `body`, which must hold exactly the non-check digits of `kind`.
pub fn check_digits(kind: DocumentKind, body: &str) -> Option<[u8; 2]> {
    if body.len() != kind.digit_count() - 2 || !body.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let first = compute_check_digit(body, kind.first_weight());
    let mut extended = String::with_capacity(body.len() + 1);
    extended.push_str(body);
    extended.push(char::from(b'0' + first));
    let second = compute_check_digit(&extended, kind.first_weight() + 1);
    Some([first, second])
}

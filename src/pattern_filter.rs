use crate::document::DocumentKind;

/// A cleaned document that is one digit repeated `length` times. Registries never issue
/// these, yet some of them pass the checksum.
#[derive(Clone, Copy)]
struct RepeatedDigit {
    length: usize,
    digit: u8,
}

const fn repeated_digits(length: usize) -> [RepeatedDigit; 10] {
    let mut entries = [RepeatedDigit { length, digit: b'0' }; 10];
    let mut digit = 0;
    while digit < 10 {
        entries[digit] = RepeatedDigit {
            length,
            digit: b'0' + digit as u8,
        };
        digit += 1;
    }
    entries
}

const CPF_DENYLIST: [RepeatedDigit; 10] = repeated_digits(11);
const CNPJ_DENYLIST: [RepeatedDigit; 10] = repeated_digits(14);

// XX.XXX.XXX/YYYY-ZZ: the YYYY branch number starts at 0001 (head office)
const CNPJ_BRANCH_RANGE: std::ops::Range<usize> = 8..12;
const CNPJ_LENGTH: usize = 14;

impl RepeatedDigit {
    fn matches(&self, cleaned: &str) -> bool {
        cleaned.len() == self.length && cleaned.bytes().all(|b| b == self.digit)
    }
}

fn has_zero_branch(cleaned: &str) -> bool {
    cleaned.len() == CNPJ_LENGTH
        && cleaned.is_ascii()
        && cleaned[CNPJ_BRANCH_RANGE].bytes().all(|b| b == b'0')
}

/// Whether `cleaned` is a denylisted value. Every entry is checked regardless of
/// the document kind, but an entry only ever matches values of its own length.
pub fn is_denylisted(cleaned: &str) -> bool {
    CPF_DENYLIST
        .iter()
        .chain(CNPJ_DENYLIST.iter())
        .any(|entry| entry.matches(cleaned))
        || has_zero_branch(cleaned)
}

/// Shape check run on an already cleaned digit string.
pub fn is_well_formed(cleaned: &str, kind: DocumentKind) -> bool {
    if is_denylisted(cleaned) {
        return false;
    }
    cleaned.len() == kind.digit_count() && cleaned.bytes().all(|b| b.is_ascii_digit())
}

use crate::checksum::Validator;
use crate::document::DocumentKind;
use crate::validation::{check, ValidationError};

pub struct BrazilianCnpjChecksum;

impl Validator for BrazilianCnpjChecksum {
    // https://pt.wikipedia.org/wiki/Cadastro_Nacional_da_Pessoa_Jur%C3%ADdica
    // XX.XXX.XXX/YYYY-ZZ, weights 5..2 then 9..2 for the first check digit
    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        check(input, DocumentKind::Cnpj).map(|_| ())
    }
}

#[cfg(test)]
mod test {
    use crate::checksum::*;
    use crate::validation::{CheckDigitPosition, ValidationError};

    #[test]
    fn test_valid_brazilian_cnpj_ids() {
        let valid_ids = vec![
            "00.623.904/0001-73",
            "00623904000173",
            "11.444.777/0001-61",
            "11.222.333/0001-81",
        ];
        for id in valid_ids {
            assert!(BrazilianCnpjChecksum.is_valid_match(id), "{id}");
        }
    }

    #[test]
    fn test_invalid_brazilian_cnpj_ids() {
        let invalid_ids = vec![
            // valid cpf
            "012.345.678-90",
            // wrong checksum
            "00.623.904/0001-71",
            "00.623.904/0001-53",
            // Non ascii digits do not count
            "567.456.234-90ñô",
            // wrong length
            "00.623.904/0131001-53",
            // all digits equal
            "11.111.111/1111-11",
            "00.000.000/0000-00",
            // branch 0000 is never issued
            "11.444.777/0000-61",
        ];
        for id in invalid_ids {
            assert!(!BrazilianCnpjChecksum.is_valid_match(id), "{id}");
        }
    }

    #[test]
    fn test_cnpj_errors() {
        assert_eq!(
            BrazilianCnpjChecksum.validate("00.623.904/0001-53"),
            Err(ValidationError::DigitMismatch {
                position: CheckDigitPosition::First,
                expected: 7,
                found: 5,
            })
        );
        assert_eq!(
            BrazilianCnpjChecksum.validate("11.444.777/0001-62"),
            Err(ValidationError::DigitMismatch {
                position: CheckDigitPosition::Second,
                expected: 1,
                found: 2,
            })
        );
        assert_eq!(
            BrazilianCnpjChecksum.validate("../-"),
            Err(ValidationError::InvalidFormat)
        );
    }
}

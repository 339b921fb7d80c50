use crate::checksum::Validator;
use crate::document::DocumentKind;
use crate::validation::{check, ValidationError};

pub struct BrazilianCpfChecksum;

impl Validator for BrazilianCpfChecksum {
    // https://pt.wikipedia.org/wiki/Cadastro_de_Pessoas_F%C3%ADsicas#C%C3%A1lculo_do_d%C3%ADgito_verificador
    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        check(input, DocumentKind::Cpf).map(|_| ())
    }
}

#[cfg(test)]
mod test {
    use crate::checksum::*;
    use crate::validation::{CheckDigitPosition, ValidationError};

    #[test]
    fn test_valid_brazilian_cpf_ids() {
        let valid_ids = vec![
            "012.345.678-90",
            "083.358.948-25",
            "111.444.777-35",
            "11144477735",
            "529.982.247-25",
            // separators are not checked
            "529 982 247 25",
            "529982247/25",
        ];
        for id in valid_ids {
            assert!(BrazilianCpfChecksum.is_valid_match(id), "{id}");
        }
    }

    #[test]
    fn test_invalid_brazilian_cpf_ids() {
        let invalid_ids = vec![
            // wrong checksum
            "345.675.677-78",
            "123.567.234-67",
            "678.534.123-98",
            "234.546.324-97",
            "567.456.234-90",
            "345.678.342-76",
            // Non ascii digits do not count
            "567.456.234-9ñô",
            // wrong length
            "345.678.3428723-76",
            "111.444.777-3",
            // all digits equal
            "111.111.111-11",
            "000.000.000-00",
            // valid cnpj
            "11.444.777/0001-61",
        ];
        for id in invalid_ids {
            assert!(!BrazilianCpfChecksum.is_valid_match(id), "{id}");
        }
    }

    #[test]
    fn test_cpf_errors() {
        assert_eq!(
            BrazilianCpfChecksum.validate("111.444.777-45"),
            Err(ValidationError::DigitMismatch {
                position: CheckDigitPosition::First,
                expected: 3,
                found: 4,
            })
        );
        assert_eq!(
            BrazilianCpfChecksum.validate("111.444.777-36"),
            Err(ValidationError::DigitMismatch {
                position: CheckDigitPosition::Second,
                expected: 5,
                found: 6,
            })
        );
        assert_eq!(
            BrazilianCpfChecksum.validate("999.999.999-99"),
            Err(ValidationError::InvalidFormat)
        );
    }
}

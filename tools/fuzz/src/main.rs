use afl::fuzz;
use brdoc::{
    check_digits, clean, format_document, validate_cnpj, validate_cpf, Document, DocumentKind,
    FormatPolicy, ValidationError, Validator, ValidatorConfig,
};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (options, input) = bytes.split_first()?;
    let input_str = std::str::from_utf8(input).ok()?;

    let kind = if options & 1 == 0 {
        DocumentKind::Cpf
    } else {
        DocumentKind::Cnpj
    };
    let format = if options & 2 == 0 {
        FormatPolicy::Lenient
    } else {
        FormatPolicy::Strict
    };
    run_fuzz(kind, format, input_str);

    Some(())
}

fn run_fuzz(kind: DocumentKind, format: FormatPolicy, input: &str) {
    #[cfg(feature = "manual_test")]
    {
        println!("Kind: {:?}", kind);
        println!("Format: {:?}", format);
        println!("Input: {:?}", input);
    }

    let cleaned = clean(input);
    assert_eq!(clean(&cleaned), cleaned);
    assert!(cleaned.bytes().all(|b| b.is_ascii_digit()));

    let result = match kind {
        DocumentKind::Cpf => validate_cpf(input),
        DocumentKind::Cnpj => validate_cnpj(input),
    };
    #[cfg(feature = "manual_test")]
    println!("Result: {:?}", result);

    // separators never change the outcome
    assert_eq!(result, kind.validate(&cleaned));

    if cleaned.len() != kind.digit_count() {
        assert_eq!(result, Err(ValidationError::InvalidFormat));
    }

    let validator = ValidatorConfig::new(kind).format(format).build();
    let configured = validator.validate(input);
    match format {
        FormatPolicy::Lenient => assert_eq!(configured, result),
        // strict validation only ever rejects more
        FormatPolicy::Strict => assert!(configured.is_err() || result.is_ok()),
    }

    if result.is_ok() {
        let formatted = format_document(kind, input).unwrap();
        assert_eq!(formatted.len(), kind.formatted_len());
        assert_eq!(Document::parse(kind, &formatted).unwrap().digits(), cleaned);

        let body = &cleaned[..cleaned.len() - 2];
        let [first, second] = check_digits(kind, body).unwrap();
        assert_eq!(format!("{body}{first}{second}"), cleaned);
    }
}

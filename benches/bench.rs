use criterion::{criterion_group, criterion_main};

mod cpf_benchmark {
    use brdoc::{validate_cpf, DocumentKind, Validator, ValidatorConfig};
    use criterion::{black_box, Criterion};

    pub fn criterion_benchmark(c: &mut Criterion) {
        let cpfs = vec![
            "111.444.777-35",
            "11144477735",
            "012.345.678-90",
            "083.358.948-25",
            "529.982.247-25",
            // wrong checksum
            "345.675.677-78",
            "111.444.777-36",
            // denylisted
            "111.111.111-11",
        ];
        c.bench_function("cpf-validation", |b| {
            b.iter(|| {
                for cpf in cpfs.iter() {
                    let _ = validate_cpf(black_box(cpf));
                }
            })
        });

        let validator = ValidatorConfig::new(DocumentKind::Cpf).build();
        c.bench_function("cpf-configured-validator", |b| {
            b.iter(|| {
                for cpf in cpfs.iter() {
                    validator.is_valid_match(black_box(cpf));
                }
            })
        });
    }
}

mod cnpj_benchmark {
    use brdoc::validate_cnpj;
    use criterion::{black_box, Criterion};

    pub fn criterion_benchmark(c: &mut Criterion) {
        let cnpjs = vec![
            "11.444.777/0001-61",
            "11444777000161",
            "00.623.904/0001-73",
            "11.222.333/0001-81",
            // wrong checksum
            "00.623.904/0001-71",
            // zero branch
            "11.444.777/0000-61",
        ];
        c.bench_function("cnpj-validation", |b| {
            b.iter(|| {
                for cnpj in cnpjs.iter() {
                    let _ = validate_cnpj(black_box(cnpj));
                }
            })
        });
    }
}

criterion_group!(
    benches,
    cpf_benchmark::criterion_benchmark,
    cnpj_benchmark::criterion_benchmark
);
criterion_main!(benches);

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn criterion_benchmark(c: &mut Criterion) {
    use bibtex_names::{parse_single_name_into_parts, split_multiple_persons_names};

    let field = "Charles Louis Xavier Joseph de la Vall{\\'e}e Poussin \
                 and Ford, Jr., Henry \
                 and {Barnes and Noble, Inc.} \
                 and Johannes Adam Ferdinand Alois Josef Maria Marko d'Aviano \
                 Pius von und zu Liechtenstein";

    c.bench_function("split persons", |b| {
        b.iter(|| split_multiple_persons_names(black_box(field)))
    });

    let persons = split_multiple_persons_names(field);

    c.bench_function("parse single name strict", |b| {
        b.iter(|| {
            for person in &persons {
                let _ = parse_single_name_into_parts(black_box(person), true);
            }
        })
    });

    c.bench_function("parse single name repair", |b| {
        b.iter(|| parse_single_name_into_parts(black_box("AA {{{BB} CC}"), false))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

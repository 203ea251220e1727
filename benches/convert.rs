use criterion::{black_box, criterion_group, criterion_main, Criterion};
use recase::{to_camel_case, to_dot_case, to_kebab_case};

fn bench_convert(c: &mut Criterion) {
    let inputs = [
        "XMLHttpRequest",
        "SCREEN_NAME",
        "--multiple__delimiters  test--",
        "someVeryLongMixedIdentifier_with-every_kind of-delimiter",
    ];

    c.bench_function("to_camel_case", |b| {
        b.iter(|| {
            for input in &inputs {
                black_box(to_camel_case(black_box(input)));
            }
        })
    });

    c.bench_function("to_kebab_case", |b| {
        b.iter(|| {
            for input in &inputs {
                black_box(to_kebab_case(black_box(input)));
            }
        })
    });

    c.bench_function("to_dot_case", |b| {
        b.iter(|| {
            for input in &inputs {
                black_box(to_dot_case(black_box(input)));
            }
        })
    });
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use semver_bump::prelude::*;

fn ok_inputs() -> Vec<&'static str> {
    vec![
        "1.2.3",
        "v1.2",
        "1",
        "1.0.0-alpha.beta.1",
        "1.2.0-x.Y.0+metadata-with-hyphen",
        "2147483648.3.0",
    ]
}

fn parse_ok(inputs: &[&str]) {
    for input in inputs {
        let res = input.parse::<Version>();
        assert!(res.is_ok());
    }
}

fn err_inputs() -> Vec<&'static str> {
    vec!["1.2.3.4", "1.2.beta", "1.2.3-alpha.01", "\n1.2", "foo"]
}

fn parse_err(inputs: &[&str]) {
    for input in inputs {
        let res = input.parse::<Version>();
        assert!(res.is_err());
    }
}

fn tag_list() -> Vec<String> {
    (0..50)
        .flat_map(|minor| {
            [
                format!("v1.{minor}.0"),
                format!("1.{minor}.1-rc.{minor}"),
                format!("release-{minor}"),
                format!("1.{minor}.0-beta.0{minor}"),
            ]
        })
        .rev()
        .collect()
}

fn increment_all(inputs: &[(&str, ReleaseType, &str)]) {
    for (version, release_type, track) in inputs {
        let res = increment(version, *release_type, track);
        assert!(res.is_ok());
    }
}

fn increment_inputs() -> Vec<(&'static str, ReleaseType, &'static str)> {
    vec![
        ("1.2.3", ReleaseType::Major, ""),
        ("1.2.0-5", ReleaseType::Minor, ""),
        ("1.2.3-alpha.10.beta", ReleaseType::PreRelease, ""),
        ("1.2.3-dev.4", ReleaseType::PreRelease, "dev"),
        ("1.2.3", ReleaseType::PreMajor, "rc"),
    ]
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("parse_ok", |b| b.iter(|| parse_ok(black_box(&ok_inputs()))));
    c.bench_function("parse_err", |b| b.iter(|| parse_err(black_box(&err_inputs()))));

    let tags = tag_list();
    c.bench_function("sorted_valid", |b| b.iter(|| sorted_valid(black_box(&tags))));

    c.bench_function("increment", |b| {
        b.iter(|| increment_all(black_box(&increment_inputs())))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

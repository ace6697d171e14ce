use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use coursecat::catalog::Catalog;
use coursecat::markup;
use coursecat::tag::FromTag;

fn synthetic_catalog(courses: usize) -> String {
    let mut document = String::from("<?xml version=\"1.0\"?>\n<courses timestamp=\"1\">\n");
    for c in 0..courses {
        document += &format!(
            "<course dept=\"CSCI\" num=\"{}\" name=\"Course {}\" credmin=\"1\" credmax=\"4\" gradetype=\"Letter\">\n",
            1000 + c,
            c
        );
        for s in 0..4 {
            document += &format!(
                "<section crn=\"{}\" num=\"{}\" students=\"20\" seats=\"30\">\
                 <period type=\"LEC\" instructor=\"Smith\" start=\"1000\" end=\"1150\" location=\"DCC 308\">\
                 <day>0</day><day>3</day></period>\
                 <period type=\"LAB\" instructor=\"Staff\" start=\"** TBA **\" end=\"** TBA **\" location=\"\"/>\
                 <note>PREREQ: CSCI 1100</note></section>\n",
                10000 + c * 10 + s,
                s + 1
            );
        }
        document += "</course>\n";
    }
    document += "</courses>\n";
    document
}

fn criterion_benchmark(c: &mut Criterion) {
    let document = synthetic_catalog(200);
    c.bench_function("read markup", |b| {
        b.iter(|| markup::parse(black_box(&document)).unwrap())
    });
    let root = markup::parse(&document).unwrap();
    c.bench_function("build catalog", |b| {
        b.iter(|| Catalog::from_tag(black_box(&root)).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

use chrono::NaiveDate;
use criterion::{Criterion, criterion_group, criterion_main};
use gedwick::config::BuildOptions;
use gedwick::dates::BirthDateMap;
use gedwick::gedcom::parse_str;
use gedwick::model::{BirthEvent, RecordSet, RecordSetBuilder};
use gedwick::tree::build_tree;
use std::hint::black_box;

const DATE_FORMS: &[&str] = &["04 JUL 1776", "ABT JUL 1776", "1776", "BET 1770 AND 1780", "ABT 1780/81", "Q1 1776"];

/// `width` family lines, each `depth` generations deep with one married son per couple.
fn synthetic_lines(width: usize, depth: usize) -> RecordSet {
    let mut builder = RecordSetBuilder::new();
    for line in 0..width {
        let couples: Vec<_> = (0..depth)
            .map(|generation| {
                let husband = builder.add_individual(format!("@H{line}_{generation}@"), [format!("Husband{line} /Line/")]);
                let wife = builder.add_individual(format!("@W{line}_{generation}@"), [format!("Wife{line} /Line/")]);
                builder.add_birth(husband, BirthEvent::on(DATE_FORMS[(line + generation) % DATE_FORMS.len()]));
                builder.add_birth(wife, BirthEvent::on(format!("{}", 1600 + line % 300 + 25 * generation)));
                (husband, wife)
            })
            .collect();
        for (generation, &(husband, wife)) in couples.iter().enumerate() {
            let children = couples.get(generation + 1).map(|&(son, _)| vec![son]).unwrap_or_default();
            builder.add_family(format!("@F{line}_{generation}@"), Some(husband), Some(wife), children);
        }
    }
    builder.finish()
}

fn synthetic_gedcom(individuals: usize) -> String {
    let mut gedcom = String::from("0 HEAD\n");
    for i in 0..individuals {
        gedcom.push_str(&format!("0 @I{i}@ INDI\n1 NAME Person{i} /Line/\n1 BIRT\n2 DATE {}\n", DATE_FORMS[i % DATE_FORMS.len()]));
    }
    for i in (0..individuals.saturating_sub(1)).step_by(2) {
        gedcom.push_str(&format!("0 @F{i}@ FAM\n1 HUSB @I{i}@\n1 WIFE @I{}@\n", i + 1));
    }
    gedcom.push_str("0 TRLR\n");
    gedcom
}

fn tree_building(c: &mut Criterion) {
    let records = synthetic_lines(500, 8);
    let options = BuildOptions::new().with_today(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());

    c.bench_function("infer dates", |b| {
        b.iter(|| BirthDateMap::infer(black_box(&records)));
    });

    let dates = BirthDateMap::infer(&records);
    c.bench_function("build tree", |b| {
        b.iter(|| build_tree(black_box(&records), &dates, &options));
    });
}

fn gedcom_reading(c: &mut Criterion) {
    let gedcom = synthetic_gedcom(10_000);
    c.bench_function("read gedcom", |b| {
        b.iter(|| parse_str(black_box(&gedcom)).unwrap());
    });
}

criterion_group!(regression, tree_building);
criterion_group! {
    name = reading;
    config = Criterion::default().sample_size(10);
    targets = gedcom_reading
}
criterion_main!(regression, reading);

use chrono::{NaiveDate, TimeDelta};
use gedwick::config::BuildOptions;
use gedwick::dates::BirthDateMap;
use gedwick::model::{BirthEvent, FamilyIndex, RecordSet, RecordSetBuilder};
use gedwick::newick;
use gedwick::tree::{MidnodeTreeBuilder, NodeCounter, build_tree, sort_by_age, trunk_families};
use gedwick::{build_userdata, parse_gedcom_file};

const FIXTURE: &str = "tests/fixtures/archdale.ged";

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
}

/// `n` childless couples, the husband of couple `i` born `i` years before today.
fn childless_couples(n: usize) -> (RecordSet, BirthDateMap) {
    let mut builder = RecordSetBuilder::new();
    let mut dates = BirthDateMap::new();
    for i in 0..n {
        let husband = builder.add_individual(format!("@H{i}@"), [format!("H{i}")]);
        let wife = builder.add_individual(format!("@W{i}@"), [format!("W{i}")]);
        builder.add_family(format!("@F{i}@"), Some(husband), Some(wife), vec![]);
        dates.insert(husband, today() - TimeDelta::days(365 * i as i64));
    }
    (builder.finish(), dates)
}

#[test]
fn test_internal_id_count_grows_with_families() {
    let options = BuildOptions::new().with_today(today());
    for (families, expected_ids) in [(1, 1), (2, 3), (3, 5), (5, 9)] {
        let (records, dates) = childless_couples(families);
        let literal = build_tree(&records, &dates, &options);
        let tree = newick::parse_str(format!("{literal};")).unwrap();

        assert_eq!(tree.num_internal(), expected_ids, "{families} families");
        let mut ids = tree.internal_ids();
        ids.sort_unstable();
        assert_eq!(ids, (1..=expected_ids as u32).collect::<Vec<_>>());
    }
}

#[test]
fn test_sort_is_descending_and_stable() {
    let (records, mut dates) = childless_couples(4);
    // Couple 0 has a husband born today, make couple 3 tie with couple 1
    dates.insert(6, today() - TimeDelta::days(365));
    let mut families: Vec<FamilyIndex> = vec![0, 1, 2, 3];
    sort_by_age(&mut families, &records, &dates, today());
    assert_eq!(families, vec![2, 1, 3, 0]);
}

#[test]
fn test_balanced_split_puts_smaller_half_left() {
    let (records, dates) = childless_couples(3);
    let options = BuildOptions::new().with_today(today());
    let builder = MidnodeTreeBuilder::new(&records, &dates, &options);

    let literal = builder.build(&[2, 1, 0]);
    assert_eq!(literal, "((H2:1.999,W2:0)1:0,((H1:0.999,W1:0)2:0,(H0:0,W0:0)3:0)4:0)5:0");
}

#[test]
fn test_counter_is_shared_across_calls() {
    let (records, dates) = childless_couples(2);
    let options = BuildOptions::new().with_today(today());
    let builder = MidnodeTreeBuilder::new(&records, &dates, &options);

    let mut counter = NodeCounter::new();
    let mut literal = String::new();
    builder.build_into(&[0], &mut literal, &mut counter);
    builder.build_into(&[1], &mut literal, &mut counter);
    assert_eq!(literal, "(H0:0,W0:0)1:0(H1:0.999,W1:0)2:0");
    assert_eq!(counter.issued(), 2);
}

#[test]
fn test_no_families_gives_empty_tree() {
    let records = RecordSetBuilder::new().finish();
    let options = BuildOptions::new().with_today(today());
    let script = build_userdata(&records, &options);
    assert!(newick::parse_userdata(script).unwrap().is_empty());
}

#[test]
fn test_end_to_end_from_gedcom() {
    let records = parse_gedcom_file(FIXTURE).unwrap();
    assert_eq!(trunk_families(&records).len(), 3);

    let options = BuildOptions::new().with_today(today());
    let script = build_userdata(&records, &options);
    assert_eq!(
        script,
        "function userdata() { fulltree = new midnode(\"\
         (((Adam_Archdale:299.992,Eve_Archdale:294.992)1:0,(Cain_Archdale:0,Dina_Brown:269.993)2:0)3:0,\
         ((Carl_Cole:0,Cara_Cole:279.995)4:0,(Bob_Baker:249.993,Beth_Baker:0)5:0)6:0)7:0;\"); }"
    );

    let tree = newick::parse_userdata(&script).unwrap();
    assert_eq!(
        tree.leaf_labels(),
        vec![
            "Adam_Archdale",
            "Eve_Archdale",
            "Cain_Archdale",
            "Dina_Brown",
            "Carl_Cole",
            "Cara_Cole",
            "Bob_Baker",
            "Beth_Baker"
        ]
    );
    assert_eq!(tree.internal_ids(), vec![1, 2, 3, 4, 5, 6, 7]);
    assert!(tree.post_order().iter().filter(|v| v.is_internal()).all(|v| v.weight() == Some(0.0)));
}

#[test]
fn test_end_to_end_writes_file() {
    let records = parse_gedcom_file(FIXTURE).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let options = BuildOptions::new().with_today(today()).with_output_path(dir.path().join("web/archdale.js"));

    let script = build_userdata(&records, &options);
    gedwick::write_userdata_file(options.output_path(), &script).unwrap();

    let written = std::fs::read_to_string(options.output_path()).unwrap();
    assert_eq!(written, script);
    assert_eq!(newick::parse_userdata(written).unwrap().num_leaves(), 8);
}

#[test]
fn test_mixed_knowledge_trunk_families() {
    let mut builder = RecordSetBuilder::new();
    let al = builder.add_individual("@I1@", ["Al /Abbot/"]);
    builder.add_birth(al, BirthEvent::on("1 JAN 1800"));
    let ada = builder.add_individual("@I2@", ["Ada /Abbot/"]);
    builder.add_birth(ada, BirthEvent::on("1810"));
    let ben = builder.add_individual("@I3@", ["Ben /Baker/"]);
    builder.add_birth(ben, BirthEvent::on("JAN 1750"));
    let cy = builder.add_individual("@I4@", ["Cy /Cole/"]);
    let cat = builder.add_individual("@I5@", ["Cat /Cole/"]);
    builder.add_birth(cat, BirthEvent::on("Q1 1776"));
    builder.add_family("@F1@", Some(al), Some(ada), vec![]);
    builder.add_family("@F2@", Some(ben), None, vec![]);
    builder.add_family("@F3@", Some(cy), Some(cat), vec![]);
    let records = builder.finish();

    let options = BuildOptions::new().with_today(today());
    let dates = BirthDateMap::infer(&records);
    let literal = build_tree(&records, &dates, &options);
    assert_eq!(
        literal,
        "(Ben_Baker:249.993,((Al_Abbot:199.995,Ada_Abbot:189.996)1:0,(Cy_Cole:0,Cat_Cole:0)2:0)3:0)4:0"
    );

    let tree = newick::parse_str(format!("{literal};")).unwrap();
    assert_eq!(tree.leaf_labels(), vec!["Ben_Baker", "Al_Abbot", "Ada_Abbot", "Cy_Cole", "Cat_Cole"]);
    assert_eq!(tree.internal_ids(), vec![1, 2, 3, 4]);
}

#[test]
fn test_single_known_parent_sorts_descending() {
    let mut builder = RecordSetBuilder::new();
    let younger = builder.add_individual("@I1@", ["Y"]);
    let older = builder.add_individual("@I2@", ["O"]);
    let first = builder.add_family("@F1@", Some(younger), None, vec![]);
    let second = builder.add_family("@F2@", None, Some(older), vec![]);
    let records = builder.finish();

    let mut dates = BirthDateMap::new();
    dates.insert(younger, today() - TimeDelta::days(100));
    dates.insert(older, today() - TimeDelta::days(200));

    let mut families = vec![first, second];
    sort_by_age(&mut families, &records, &dates, today());
    assert_eq!(families, vec![second, first]);
}

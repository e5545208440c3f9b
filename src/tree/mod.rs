//! Balanced, age-ordered midnode tree of all family lines.
//!
//! # Algorithm
//! 1. **Selection** - [trunk_families]: families where neither spouse has a
//!    family as child, i.e. the oldest known generation of each line.
//! 2. **Ranking** - [days_ago]: days since the birth of one spouse.
//! 3. **Ordering** - [sort_by_age]: oldest first (stable).
//! 4. **Partition** - [MidnodeTreeBuilder]: the ordered list is halved
//!    recursively into a balanced binary tree; each family then hangs the
//!    families of its married children below itself.
//!
//! # Format
//! The literal follows a weighted binary-tree notation close to Newick:
//! * `leaf ::= name ':' age`
//! * `internal ::= '(' vertex ',' vertex ')' id ':0'`
//!
//! Ids are assigned from 1 upwards in the order internal vertices are closed:
//! a subtree is fully closed before its right sibling starts, and a couple's
//! pair is closed before the vertex joining it with the children.
//!
//! # Example
//! ```
//! use chrono::NaiveDate;
//! use gedwick::config::BuildOptions;
//! use gedwick::dates::BirthDateMap;
//! use gedwick::model::{BirthEvent, RecordSetBuilder};
//! use gedwick::tree::build_tree;
//!
//! let mut builder = RecordSetBuilder::new();
//! let john = builder.add_individual("@I1@", ["John /Archdale/"]);
//! builder.add_birth(john, BirthEvent::on("1 JAN 1900"));
//! let mary = builder.add_individual("@I2@", ["Mary /Archdale/"]);
//! builder.add_family("@F1@", Some(john), Some(mary), vec![]);
//! let records = builder.finish();
//!
//! let options = BuildOptions::new().with_today(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
//! let dates = BirthDateMap::infer(&records);
//! assert_eq!(build_tree(&records, &dates, &options), "(John_Archdale:99.997,Mary_Archdale:0)1:0");
//! ```

pub mod label;
pub mod writer;

use crate::config::BuildOptions;
use crate::dates::{BirthDateMap, days_between};
use crate::model::{Family, FamilyIndex, IndividualIndex, RecordSet};
use chrono::NaiveDate;
use label::{format_age, sanitize_name};
use std::cmp::Reverse;
use tracing::{debug, info};

/// Weight written after every internal vertex.
const INTERNAL_WEIGHT: &str = "0";

// ============================================================================
// Selection, Ranking, Ordering (pub)
// ============================================================================
/// Returns the families without known ancestors, in record order.
///
/// A family qualifies if neither husband nor wife is a child in any family.
/// Families with neither husband nor wife are left out.
pub fn trunk_families(records: &RecordSet) -> Vec<FamilyIndex> {
    records
        .families()
        .iter()
        .filter(|family| {
            if family.husband().is_none() && family.wife().is_none() {
                debug!(family = family.xref(), "Skipping family without husband and wife");
                return false;
            }
            family.spouses().all(|spouse| !records[spouse].has_ancestors())
        })
        .map(Family::index)
        .collect()
}

/// Ranking key of a family: days from a spouse's birth to `today`.
///
/// With both dates known, the wife's days are used unless she was born
/// strictly earlier than her husband, in which case the husband's days are
/// used. So the key follows the younger spouse. With one date known, that
/// one is used; with none, the key is `0`.
pub fn days_ago(family: &Family, birth_dates: &BirthDateMap, today: NaiveDate) -> i64 {
    let wife_born = family.wife().and_then(|wife| birth_dates.get(wife));
    let husband_born = family.husband().and_then(|husband| birth_dates.get(husband));
    let born = match (husband_born, wife_born) {
        (Some(husband), Some(wife)) if wife < husband => Some(husband),
        (Some(_), Some(wife)) => Some(wife),
        (husband, wife) => husband.or(wife),
    };
    born.map_or(0, |born| days_between(born, today))
}

/// Sorts families by [days_ago], largest first; ties keep their order.
pub fn sort_by_age(families: &mut [FamilyIndex], records: &RecordSet, birth_dates: &BirthDateMap, today: NaiveDate) {
    families.sort_by_key(|&family| Reverse(days_ago(records.family(family), birth_dates, today)));
}

/// Selects, orders and builds the tree literal of a whole record set
/// (without the terminating `;`).
pub fn build_tree(records: &RecordSet, birth_dates: &BirthDateMap, options: &BuildOptions) -> String {
    let mut trunk = trunk_families(records);
    info!("Found {} families without known ancestors", trunk.len());

    sort_by_age(&mut trunk, records, birth_dates, options.today());

    let builder = MidnodeTreeBuilder::new(records, birth_dates, options);
    let mut counter = NodeCounter::new();
    let mut tree = String::new();
    builder.build_into(&trunk, &mut tree, &mut counter);
    debug!(internal_vertices = counter.issued(), "Built tree literal");
    tree
}

// =#========================================================================#=
// NODE COUNTER
// =#========================================================================#=
/// Source of internal vertex ids, shared by one whole build.
///
/// Starts at 1; every id is handed out once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeCounter {
    next: u32,
}

impl NodeCounter {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Returns the next id and advances.
    pub fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Number of ids handed out so far.
    pub fn issued(&self) -> u32 {
        self.next - 1
    }
}

impl Default for NodeCounter {
    fn default() -> Self {
        Self::new()
    }
}

// =#========================================================================#=
// MIDNODE TREE BUILDER
// =#========================================================================#=
/// Writes the tree literal of an ordered family list.
///
/// The builder only reads the record set and the birth dates; all mutable
/// state of a build lives in the [NodeCounter] passed in.
pub struct MidnodeTreeBuilder<'a> {
    records: &'a RecordSet,
    birth_dates: &'a BirthDateMap,
    today: NaiveDate,
    max_fraction_digits: usize,
}

impl<'a> MidnodeTreeBuilder<'a> {
    pub fn new(records: &'a RecordSet, birth_dates: &'a BirthDateMap, options: &BuildOptions) -> Self {
        Self {
            records,
            birth_dates,
            today: options.today(),
            max_fraction_digits: options.max_fraction_digits(),
        }
    }

    /// Builds the literal of `families` with a fresh counter.
    pub fn build(&self, families: &[FamilyIndex]) -> String {
        let mut tree = String::new();
        self.build_into(families, &mut tree, &mut NodeCounter::new());
        tree
    }

    /// Appends the literal of `families` to `tree`, drawing ids from `counter`.
    ///
    /// * no family: nothing
    /// * one family: its subtree
    /// * more: `(left,right)id:0`, splitting at `len / 2`
    pub fn build_into(&self, families: &[FamilyIndex], tree: &mut String, counter: &mut NodeCounter) {
        match families {
            [] => {}
            [family] => self.build_family(self.records.family(*family), tree, counter),
            _ => {
                let (left, right) = families.split_at(families.len() / 2);
                tree.push('(');
                self.build_into(left, tree, counter);
                tree.push(',');
                self.build_into(right, tree, counter);
                close_internal(tree, counter);
            }
        }
    }

    /// Appends the subtree of one family: the couple, and if there are
    /// children, the couple joined with the families of the children.
    fn build_family(&self, family: &Family, tree: &mut String, counter: &mut NodeCounter) {
        let husband = family.husband().map(|husband| self.individual_label(husband));
        let wife = family.wife().map(|wife| self.individual_label(wife));
        let has_children = !family.children().is_empty();

        if has_children {
            tree.push('(');
        }
        match (husband, wife) {
            (Some(husband), Some(wife)) => {
                tree.push('(');
                tree.push_str(&husband);
                tree.push(',');
                tree.push_str(&wife);
                close_internal(tree, counter);
            }
            (Some(single), None) | (None, Some(single)) => tree.push_str(&single),
            (None, None) => {}
        }
        if has_children {
            tree.push(',');
            let children_families: Vec<FamilyIndex> = family
                .children()
                .iter()
                .flat_map(|&child| self.records[child].families_as_spouse().iter().copied())
                .collect();
            self.build_into(&children_families, tree, counter);
            close_internal(tree, counter);
        }
    }

    /// `name:age`, with age `0` if the birth date is unknown.
    pub fn individual_label(&self, individual: IndividualIndex) -> String {
        let name = sanitize_name(&self.records[individual].formatted_name());
        let age = match self.birth_dates.get(individual) {
            Some(born) => format_age(days_between(born, self.today), self.max_fraction_digits),
            None => "0".to_string(),
        };
        format!("{name}:{age}")
    }
}

/// Closes an internal vertex: `)id:0`.
fn close_internal(tree: &mut String, counter: &mut NodeCounter) {
    tree.push(')');
    tree.push_str(&counter.next_id().to_string());
    tree.push(':');
    tree.push_str(INTERNAL_WEIGHT);
}

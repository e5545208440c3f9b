//! Genealogical record set: individuals and families in two arenas.
//!
//! Individuals and families reference each other by [IndividualIndex] and
//! [FamilyIndex] only, so the graph needs no shared pointers and can only be
//! walked, never mutated, once [RecordSetBuilder::finish] returned it.

use std::ops::Index;

/// Index of an [Individual] in a [RecordSet].
pub type IndividualIndex = usize;

/// Index of a [Family] in a [RecordSet].
pub type FamilyIndex = usize;

/// Separator the record parser places between several names of one person.
const NAME_SEPARATOR: &str = " aka ";

// =#========================================================================#=
// INDIVIDUAL
// =#========================================================================#=
/// A birth-type event with its raw, loosely structured date text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BirthEvent {
    /// Date text as written in the export, e.g. `ABT 1780/81`
    pub date: Option<String>,
}

impl BirthEvent {
    /// Creates a birth event with the given date text.
    pub fn on(date: impl Into<String>) -> Self {
        Self { date: Some(date.into()) }
    }

    /// Creates a birth event without any date.
    pub fn undated() -> Self {
        Self { date: None }
    }
}

/// A person of the record set.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    index: IndividualIndex,
    xref: String,
    names: Vec<String>,
    births: Vec<BirthEvent>,
    families_as_spouse: Vec<FamilyIndex>,
    families_as_child: Vec<FamilyIndex>,
}

impl Individual {
    /// Returns the index of this individual in its [RecordSet].
    pub fn index(&self) -> IndividualIndex {
        self.index
    }

    /// Returns the cross-reference id, e.g. `@I12@`.
    pub fn xref(&self) -> &str {
        &self.xref
    }

    /// Returns all names of this individual, as written in the export.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the display name: all names joined with `" aka "`.
    ///
    /// # Example
    /// ```
    /// use gedwick::model::RecordSetBuilder;
    ///
    /// let mut builder = RecordSetBuilder::new();
    /// let ann = builder.add_individual("@I1@", ["Ann /Archdale/", "Annie /Archdale/"]);
    /// let records = builder.finish();
    /// assert_eq!(records[ann].formatted_name(), "Ann /Archdale/ aka Annie /Archdale/");
    /// ```
    pub fn formatted_name(&self) -> String {
        self.names.join(NAME_SEPARATOR)
    }

    /// Returns the birth events in export order.
    pub fn births(&self) -> &[BirthEvent] {
        &self.births
    }

    /// Returns the families in which this individual is husband or wife.
    pub fn families_as_spouse(&self) -> &[FamilyIndex] {
        &self.families_as_spouse
    }

    /// Returns the families in which this individual is a child.
    pub fn families_as_child(&self) -> &[FamilyIndex] {
        &self.families_as_child
    }

    /// Returns `true` if this individual is linked to any parents' family.
    pub fn has_ancestors(&self) -> bool {
        !self.families_as_child.is_empty()
    }
}

// =#========================================================================#=
// FAMILY
// =#========================================================================#=
/// A couple (either side may be unknown) and their children.
#[derive(Debug, Clone, PartialEq)]
pub struct Family {
    index: FamilyIndex,
    xref: String,
    husband: Option<IndividualIndex>,
    wife: Option<IndividualIndex>,
    children: Vec<IndividualIndex>,
}

impl Family {
    /// Returns the index of this family in its [RecordSet].
    pub fn index(&self) -> FamilyIndex {
        self.index
    }

    /// Returns the cross-reference id, e.g. `@F3@`.
    pub fn xref(&self) -> &str {
        &self.xref
    }

    pub fn husband(&self) -> Option<IndividualIndex> {
        self.husband
    }

    pub fn wife(&self) -> Option<IndividualIndex> {
        self.wife
    }

    /// Returns the children in export order.
    pub fn children(&self) -> &[IndividualIndex] {
        &self.children
    }

    /// Returns husband and wife that are present, husband first.
    pub fn spouses(&self) -> impl Iterator<Item = IndividualIndex> + '_ {
        self.husband.into_iter().chain(self.wife)
    }
}

// =#========================================================================#=
// RECORD SET
// =#========================================================================#=
/// Immutable arena of all [Individual]s and [Family]s of one export.
///
/// Built with [RecordSetBuilder], either by hand or by the
/// [GEDCOM reader](crate::gedcom).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    individuals: Vec<Individual>,
    families: Vec<Family>,
}

impl RecordSet {
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    pub fn families(&self) -> &[Family] {
        &self.families
    }

    pub fn individual(&self, index: IndividualIndex) -> &Individual {
        &self.individuals[index]
    }

    pub fn family(&self, index: FamilyIndex) -> &Family {
        &self.families[index]
    }

    pub fn num_individuals(&self) -> usize {
        self.individuals.len()
    }

    pub fn num_families(&self) -> usize {
        self.families.len()
    }

    /// Looks up an individual by its cross-reference id.
    pub fn individual_by_xref(&self, xref: &str) -> Option<&Individual> {
        self.individuals.iter().find(|i| i.xref == xref)
    }

    /// Looks up a family by its cross-reference id.
    pub fn family_by_xref(&self, xref: &str) -> Option<&Family> {
        self.families.iter().find(|f| f.xref == xref)
    }
}

impl Index<IndividualIndex> for RecordSet {
    type Output = Individual;

    fn index(&self, index: IndividualIndex) -> &Self::Output {
        &self.individuals[index]
    }
}

// =#========================================================================#=
// RECORD SET BUILDER
// =#========================================================================#=
/// Builds a [RecordSet], wiring the spouse and child links of individuals
/// from the families added.
///
/// Individuals must be added before the families referencing them.
/// An individual's `families_as_spouse` and `families_as_child` follow the
/// order in which the families were added.
///
/// # Example
/// ```
/// use gedwick::model::{BirthEvent, RecordSetBuilder};
///
/// let mut builder = RecordSetBuilder::new();
/// let john = builder.add_individual("@I1@", ["John /Archdale/"]);
/// builder.add_birth(john, BirthEvent::on("ABT 1650"));
/// let mary = builder.add_individual("@I2@", ["Mary /Archdale/"]);
/// let son = builder.add_individual("@I3@", ["Thomas /Archdale/"]);
/// let family = builder.add_family("@F1@", Some(john), Some(mary), vec![son]);
/// let records = builder.finish();
///
/// assert_eq!(records[son].families_as_child(), &[family]);
/// assert_eq!(records[mary].families_as_spouse(), &[family]);
/// assert!(!records[john].has_ancestors());
/// ```
#[derive(Debug, Default)]
pub struct RecordSetBuilder {
    records: RecordSet,
}

impl RecordSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an individual with the given names and returns its index.
    pub fn add_individual<I, N>(&mut self, xref: impl Into<String>, names: I) -> IndividualIndex
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        let index = self.records.individuals.len();
        self.records.individuals.push(Individual {
            index,
            xref: xref.into(),
            names: names.into_iter().map(Into::into).collect(),
            births: Vec::new(),
            families_as_spouse: Vec::new(),
            families_as_child: Vec::new(),
        });
        index
    }

    /// Appends a birth event to an individual added before.
    ///
    /// # Panics
    /// Panics if `individual` was not returned by this builder.
    pub fn add_birth(&mut self, individual: IndividualIndex, birth: BirthEvent) {
        self.records.individuals[individual].births.push(birth);
    }

    /// Adds a family and links its members back to it.
    ///
    /// # Panics
    /// Panics if any member index was not returned by this builder.
    pub fn add_family(
        &mut self,
        xref: impl Into<String>,
        husband: Option<IndividualIndex>,
        wife: Option<IndividualIndex>,
        children: Vec<IndividualIndex>,
    ) -> FamilyIndex {
        let index = self.records.families.len();
        for spouse in husband.into_iter().chain(wife) {
            self.records.individuals[spouse].families_as_spouse.push(index);
        }
        for &child in &children {
            self.records.individuals[child].families_as_child.push(index);
        }
        self.records.families.push(Family {
            index,
            xref: xref.into(),
            husband,
            wife,
            children,
        });
        index
    }

    /// Number of individuals added so far.
    pub fn num_individuals(&self) -> usize {
        self.records.individuals.len()
    }

    /// Consumes the builder and returns the finished [RecordSet].
    pub fn finish(self) -> RecordSet {
        self.records
    }
}

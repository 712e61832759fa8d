//! Narrow a collection of [`DerivedLocus`] records with [`FilterCriteria`].

pub mod search;

use crate::locus::derive::DerivedLocus;
use crate::locus::motif;
use crate::options::{compute_motif_ceiling_bounds, InheritanceOption, Tag, TagSelection};
use itertools::Itertools;
use log::debug;
use search::SearchPattern;
use serde::{Deserialize, Serialize};

// ----------------------------------------------------------------------------
// Filter Criteria

/// The current value of every filter control.
///
/// Criteria are values: each `with_*` method returns new criteria with one
/// field replaced, leaving the others untouched.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FilterCriteria {
    /// Free-text search, matched literally and case-insensitively.
    pub search_text: String,
    /// Selected tags, a locus must carry all of them.
    pub selected_tags: TagSelection,
    /// Inclusive maximum length of every pathogenic motif, at least 1.
    pub motif_ceiling: usize,
    /// Inheritance mode a locus must have, or [`InheritanceOption::All`].
    pub inheritance: InheritanceOption,
}

impl FilterCriteria {
    /// Returns criteria that filter nothing out, with the motif ceiling at `motif_ceiling`.
    pub fn new(motif_ceiling: usize) -> Self {
        FilterCriteria {
            search_text: String::new(),
            selected_tags: TagSelection::default(),
            motif_ceiling: motif_ceiling.max(1),
            inheritance: InheritanceOption::All,
        }
    }

    /// Returns the default criteria for a dataset, where the motif ceiling is
    /// the longest motif observed so that every record is in view.
    pub fn for_records(records: &[DerivedLocus]) -> Self {
        FilterCriteria::new(compute_motif_ceiling_bounds(records))
    }

    pub fn with_search_text(&self, search_text: &str) -> Self {
        FilterCriteria { search_text: search_text.to_string(), ..self.clone() }
    }

    pub fn with_selected_tags(&self, selected_tags: TagSelection) -> Self {
        FilterCriteria { selected_tags, ..self.clone() }
    }

    /// Returns criteria with one tag flag flipped.
    pub fn with_tag_toggled(&self, tag: Tag) -> Self {
        self.with_selected_tags(self.selected_tags.toggled(tag))
    }

    /// Returns criteria with a new motif ceiling, raised to 1 if lower.
    pub fn with_motif_ceiling(&self, motif_ceiling: usize) -> Self {
        FilterCriteria { motif_ceiling: motif_ceiling.max(1), ..self.clone() }
    }

    pub fn with_inheritance(&self, inheritance: InheritanceOption) -> Self {
        FilterCriteria { inheritance, ..self.clone() }
    }
}

// ----------------------------------------------------------------------------
// Predicates

/// Returns true if the locus carries every active tag. No active tags match every locus.
pub fn matches_tags(record: &DerivedLocus, active: &[Tag]) -> bool {
    active.iter().all(|tag| record.has_tag(tag.as_ref()))
}

/// Returns true if every pathogenic motif is at most `motif_ceiling` long.
/// A locus without motifs always matches.
pub fn matches_motif_ceiling(record: &DerivedLocus, motif_ceiling: usize) -> bool {
    record
        .pathogenic_motif_reference_orientation
        .iter()
        .all(|m| motif::motif_length(m) <= motif_ceiling)
}

/// Returns true if the selection is `all`, or if the locus has the selected inheritance mode.
pub fn matches_inheritance(record: &DerivedLocus, inheritance: &InheritanceOption) -> bool {
    match inheritance {
        InheritanceOption::All => true,
        InheritanceOption::Mode(mode) => record.inheritance.contains(mode),
    }
}

/// [`FilterCriteria`] prepared for evaluation against many records.
#[derive(Clone, Debug)]
pub struct Matcher<'c> {
    criteria: &'c FilterCriteria,
    search: SearchPattern,
    active_tags: Vec<Tag>,
}

impl<'c> Matcher<'c> {
    pub fn new(criteria: &'c FilterCriteria) -> Self {
        Matcher {
            criteria,
            search: SearchPattern::new(&criteria.search_text),
            active_tags: criteria.selected_tags.active(),
        }
    }

    /// Returns true if the locus satisfies every criterion.
    pub fn matches(&self, record: &DerivedLocus) -> bool {
        matches_tags(record, &self.active_tags)
            && matches_motif_ceiling(record, self.criteria.motif_ceiling)
            && matches_inheritance(record, &self.criteria.inheritance)
            && self.search.matches(record)
    }
}

// ----------------------------------------------------------------------------
// View

/// Returns the records that satisfy all criteria, in their original order.
///
/// This has no side effects: the same records and criteria always produce the same view.
///
/// ## Examples
///
/// ```rust
/// use strchive::locus::{derive::derive_all, toy1};
/// use strchive::{compute_view, FilterCriteria, Tag};
///
/// let records = derive_all(toy1::records()?);
/// let criteria = FilterCriteria::for_records(&records);
/// assert_eq!(compute_view(&records, &criteria).len(), records.len());
///
/// let criteria = criteria.with_tag_toggled(Tag::ConflictingEvidence).with_motif_ceiling(4);
/// let ids: Vec<&str> = compute_view(&records, &criteria).into_iter().map(|r| r.id.as_str()).collect();
/// assert_eq!(ids, ["R1"]);
/// # Ok::<(), color_eyre::eyre::Report>(())
/// ```
pub fn compute_view<'r>(
    records: &'r [DerivedLocus],
    criteria: &FilterCriteria,
) -> Vec<&'r DerivedLocus> {
    let matcher = Matcher::new(criteria);
    let view = records.iter().filter(|record| matcher.matches(record)).collect_vec();
    debug!("Filtered view: {} of {} loci.", view.len(), records.len());
    view
}

/// Returns the positions of the records that satisfy all criteria, in their original order.
pub fn compute_view_indices(records: &[DerivedLocus], criteria: &FilterCriteria) -> Vec<usize> {
    let matcher = Matcher::new(criteria);
    records.iter().positions(|record| matcher.matches(record)).collect()
}

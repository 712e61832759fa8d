//! An interactive exploration session over a catalog.
//!
//! The [`Explorer`] binds filter controls to the filter engine. It owns the
//! derived records, the option catalogs computed from them, the current
//! [`FilterCriteria`] and the resulting view. Every setter replaces one field
//! of the criteria and recomputes the view once.

#[cfg(test)]
mod tests;

use crate::filter::{compute_view_indices, FilterCriteria};
use crate::locus::derive::{derive_all, DerivedLocus};
use crate::locus::LocusRecord;
use crate::options::{
    compute_inheritance_options, compute_motif_ceiling_bounds, tag_options, InheritanceOption,
    Tag, TagOption,
};
use log::{debug, info};
use std::fmt;

#[derive(Clone, Debug)]
pub struct Explorer {
    records: Vec<DerivedLocus>,
    tag_options: Vec<TagOption>,
    inheritance_options: Vec<InheritanceOption>,
    motif_bound: usize,
    criteria: FilterCriteria,
    view: Vec<usize>,
}

impl fmt::Display for Explorer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} of {} loci in view", self.view.len(), self.records.len())
    }
}

impl Explorer {
    /// Start a session over raw catalog records, with every record in view.
    pub fn new(records: Vec<LocusRecord>) -> Self {
        let records = derive_all(records);
        let inheritance_options = compute_inheritance_options(&records);
        let motif_bound = compute_motif_ceiling_bounds(&records);
        let criteria = FilterCriteria::new(motif_bound);

        let mut explorer = Explorer {
            records,
            tag_options: tag_options(),
            inheritance_options,
            motif_bound,
            criteria,
            view: Vec::new(),
        };
        explorer.recompute();
        info!("Started exploring {} loci.", explorer.records.len());
        explorer
    }

    /// Replace the dataset.
    ///
    /// Options and bounds are recomputed from the new records. The search
    /// text, tag selection and inheritance selection are kept, even when the
    /// selected inheritance mode no longer exists (the view is then empty).
    /// A motif ceiling that sat at the old bound moves to the new bound,
    /// otherwise it is clamped to the new bound.
    pub fn set_records(&mut self, records: Vec<LocusRecord>) {
        let previous_bound = self.motif_bound;
        self.records = derive_all(records);
        self.inheritance_options = compute_inheritance_options(&self.records);
        self.motif_bound = compute_motif_ceiling_bounds(&self.records);

        let motif_ceiling = if self.criteria.motif_ceiling >= previous_bound {
            self.motif_bound
        } else {
            self.criteria.motif_ceiling.min(self.motif_bound)
        };
        self.criteria = self.criteria.with_motif_ceiling(motif_ceiling);

        if !self.inheritance_options.contains(&self.criteria.inheritance) {
            debug!(
                "Inheritance selection {} is not in the new dataset.",
                self.criteria.inheritance
            );
        }
        info!("Loaded {} loci.", self.records.len());
        self.recompute();
    }

    pub fn set_search_text(&mut self, search_text: &str) {
        self.set_criteria(self.criteria.with_search_text(search_text));
    }

    pub fn toggle_tag(&mut self, tag: Tag) {
        self.set_criteria(self.criteria.with_tag_toggled(tag));
    }

    pub fn set_tag(&mut self, tag: Tag, selected: bool) {
        let selected_tags = self.criteria.selected_tags.with(tag, selected);
        self.set_criteria(self.criteria.with_selected_tags(selected_tags));
    }

    /// Set the motif ceiling, raised to 1 if lower.
    pub fn set_motif_ceiling(&mut self, motif_ceiling: usize) {
        self.set_criteria(self.criteria.with_motif_ceiling(motif_ceiling));
    }

    pub fn set_inheritance(&mut self, inheritance: InheritanceOption) {
        self.set_criteria(self.criteria.with_inheritance(inheritance));
    }

    /// Replace every criterion at once.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        // public fields may hold a ceiling of 0
        self.criteria = criteria.with_motif_ceiling(criteria.motif_ceiling);
        self.recompute();
    }

    fn recompute(&mut self) {
        self.view = compute_view_indices(&self.records, &self.criteria);
        debug!("{self}");
    }

    /// Returns all derived records, in catalog order.
    pub fn records(&self) -> &[DerivedLocus] {
        &self.records
    }

    /// Returns the records in view, in catalog order.
    pub fn view(&self) -> Vec<&DerivedLocus> {
        self.view.iter().map(|i| &self.records[*i]).collect()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn tag_options(&self) -> &[TagOption] {
        &self.tag_options
    }

    /// Returns the inheritance selector values, `all` first.
    pub fn inheritance_options(&self) -> &[InheritanceOption] {
        &self.inheritance_options
    }

    /// Returns the upper bound of the motif ceiling control.
    pub fn motif_bound(&self) -> usize {
        self.motif_bound
    }
}

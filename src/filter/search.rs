//! Free-text search over the visible columns of a locus.
//!
//! Search text is always taken literally: characters with a special meaning
//! in regular expressions (ex. `(`, `[`, `*`) are escaped before matching, so
//! any text a user can type is a valid search.

use crate::locus::derive::DerivedLocus;
use itertools::Itertools;
use log::warn;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// Separator placed between column values when building the searchable text.
pub const SEPARATOR: &str = "\t";

/// A user-visible column of a locus.
#[derive(Clone, Copy, Debug, Deserialize, EnumIter, Eq, Hash, PartialEq, Serialize)]
pub enum Column {
    Id,
    Gene,
    DiseaseId,
    Disease,
    Inheritance,
    Position,
    Motif,
}

impl Column {
    /// Returns the column header.
    pub fn header(&self) -> &'static str {
        match self {
            Column::Id => "ID",
            Column::Gene => "Gene",
            Column::DiseaseId => "Disease ID",
            Column::Disease => "Disease",
            Column::Inheritance => "Inheritance",
            Column::Position => "Position (hg38)",
            Column::Motif => "Pathogenic Motif",
        }
    }

    /// Returns the value of the column for a locus, empty if absent.
    pub fn value<'r>(&self, record: &'r DerivedLocus) -> &'r str {
        match self {
            Column::Id => &record.id,
            Column::Gene => record.gene.as_deref().unwrap_or_default(),
            Column::DiseaseId => record.disease_id.as_deref().unwrap_or_default(),
            Column::Disease => record.disease.as_deref().unwrap_or_default(),
            Column::Inheritance => &record.inheritance_display,
            Column::Position => record.position_hg38.as_deref().unwrap_or_default(),
            Column::Motif => &record.motif_display,
        }
    }
}

/// Returns the searchable text of a locus: every column value joined by [`SEPARATOR`].
///
/// ## Examples
///
/// ```rust
/// use strchive::filter::search::searchable_text;
/// use strchive::{derive_datum, LocusRecord};
///
/// let mut raw = LocusRecord::new("HD_HTT");
/// raw.gene = Some("HTT".to_string());
/// assert_eq!(searchable_text(&derive_datum(raw)), "HD_HTT\tHTT\t\t\t\t\t");
/// ```
pub fn searchable_text(record: &DerivedLocus) -> String {
    Column::iter().map(|column| column.value(record)).join(SEPARATOR)
}

/// A compiled search.
#[derive(Clone, Debug)]
pub enum SearchPattern {
    /// Empty search text, every locus matches.
    Everything,
    /// Case-insensitive literal match anywhere in the searchable text.
    Literal(Regex),
    /// The search could not be compiled, no locus matches.
    Nothing,
}

impl SearchPattern {
    /// Compile search text into a [`SearchPattern`].
    ///
    /// ## Examples
    ///
    /// ```rust
    /// use strchive::filter::search::SearchPattern;
    ///
    /// let pattern = SearchPattern::new("ataxia (type");
    /// assert!(pattern.is_match("Spinocerebellar ATAXIA (type 1)"));
    /// assert!(!pattern.is_match("ataxia type 1"));
    /// assert!(SearchPattern::new("").is_match("anything"));
    /// ```
    pub fn new(text: &str) -> Self {
        if text.is_empty() {
            return SearchPattern::Everything;
        }
        match RegexBuilder::new(&regex::escape(text)).case_insensitive(true).build() {
            Ok(regex) => SearchPattern::Literal(regex),
            Err(e) => {
                warn!("Search text {text:?} could not be compiled, no loci will match: {e}");
                SearchPattern::Nothing
            }
        }
    }

    /// Returns true if the pattern matches anywhere in the text.
    pub fn is_match(&self, text: &str) -> bool {
        match self {
            SearchPattern::Everything => true,
            SearchPattern::Literal(regex) => regex.is_match(text),
            SearchPattern::Nothing => false,
        }
    }

    /// Returns true if the pattern matches the searchable text of a locus.
    pub fn matches(&self, record: &DerivedLocus) -> bool {
        match self {
            SearchPattern::Everything => true,
            _ => self.is_match(&searchable_text(record)),
        }
    }
}

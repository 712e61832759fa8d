//! Selectable filter values: the static [`Tag`] catalog and the data-dependent [`InheritanceOption`]s.


use crate::locus::derive::DerivedLocus;
use crate::locus::motif;
use color_eyre::eyre::{eyre, Report, Result};
use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use strum::{AsRefStr, EnumIter, EnumProperty, EnumString, IntoEnumIterator};

// ----------------------------------------------------------------------------
// Tag

/// A classification tag that can be attached to a locus.
///
/// The variant order is significant: it is the order of the tag checkboxes and
/// of tag icons in results.
#[derive(
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Deserialize,
    EnumIter,
    EnumProperty,
    EnumString,
    Eq,
    Hash,
    PartialEq,
    Serialize,
)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Tag {
    #[strum(props(
        label = "Conflicting evidence",
        icon = "⚠️",
        tooltip = "Published reports disagree on the pathogenicity or thresholds of this locus."
    ))]
    ConflictingEvidence,
    #[strum(props(
        label = "Low penetrance",
        icon = "📉",
        tooltip = "Carriers of a pathogenic allele frequently remain unaffected."
    ))]
    LowPenetrance,
    #[strum(props(
        label = "Population specific",
        icon = "🌍",
        tooltip = "Pathogenic alleles have only been reported in specific populations."
    ))]
    PopulationSpecific,
    #[strum(props(
        label = "Sex biased",
        icon = "⚥",
        tooltip = "Disease presentation or penetrance differs between sexes."
    ))]
    SexBiased,
    #[strum(props(
        label = "Age onset by allele",
        icon = "⏳",
        tooltip = "Age of onset correlates with the length of the expanded allele."
    ))]
    AgeOnsetByAllele,
    #[strum(props(
        label = "Noncanonical motif",
        icon = "🧬",
        tooltip = "The pathogenic motif differs from the motif in the reference genome."
    ))]
    NoncanonicalMotif,
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl Tag {
    /// Returns the position of the tag in the tag catalog.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Returns the display descriptor of the tag.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// use strchive::Tag;
    ///
    /// let option = Tag::LowPenetrance.option();
    /// assert_eq!(option.value, "low-penetrance");
    /// assert_eq!(option.label, "Low penetrance");
    /// ```
    pub fn option(&self) -> TagOption {
        TagOption {
            tag: *self,
            value: self.as_ref().to_string(),
            label: self.get_str("label").unwrap_or_default().to_string(),
            icon: self.get_str("icon").unwrap_or_default().to_string(),
            tooltip: self.get_str("tooltip").unwrap_or_default().to_string(),
        }
    }
}

/// Display descriptor of a [`Tag`]: value, label, visual marker and tooltip.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TagOption {
    pub tag: Tag,
    pub value: String,
    pub label: String,
    pub icon: String,
    pub tooltip: String,
}

/// Returns the ordered tag catalog.
pub fn tag_options() -> Vec<TagOption> {
    Tag::iter().map(|tag| tag.option()).collect()
}

// ----------------------------------------------------------------------------
// Tag Selection

/// One selection flag per [`Tag`], indexed by tag position.
///
/// The selection is a value: toggling returns a new selection rather than
/// changing the existing one. A selection always holds exactly one flag per
/// tag, deserializing any other number of flags is an error.
///
/// ## Examples
///
/// ```rust
/// use strchive::options::TagSelection;
/// use strchive::Tag;
///
/// let none = TagSelection::default();
/// let some = none.toggled(Tag::SexBiased);
///
/// assert!(none.active().is_empty());
/// assert_eq!(some.active(), [Tag::SexBiased]);
/// assert!(some.toggled(Tag::SexBiased).active().is_empty());
/// ```
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(try_from = "Vec<bool>")]
pub struct TagSelection(Vec<bool>);

impl TryFrom<Vec<bool>> for TagSelection {
    type Error = Report;

    fn try_from(flags: Vec<bool>) -> Result<Self, Self::Error> {
        let (observed, expected) = (flags.len(), Tag::iter().len());
        if observed != expected {
            return Err(eyre!("Tag selection has {observed} flags, expected one per tag ({expected})."));
        }
        Ok(TagSelection(flags))
    }
}

impl Default for TagSelection {
    fn default() -> Self {
        TagSelection(vec![false; Tag::iter().len()])
    }
}

impl FromIterator<Tag> for TagSelection {
    fn from_iter<I: IntoIterator<Item = Tag>>(tags: I) -> Self {
        tags.into_iter().fold(TagSelection::default(), |selection, tag| selection.with(tag, true))
    }
}

impl TagSelection {
    /// Returns true if the tag is selected.
    pub fn is_selected(&self, tag: Tag) -> bool {
        self.0.get(tag.index()).copied().unwrap_or(false)
    }

    /// Returns a copy of the selection with one flag set.
    pub fn with(&self, tag: Tag, selected: bool) -> Self {
        let flags = self
            .0
            .iter()
            .enumerate()
            .map(|(i, flag)| if i == tag.index() { selected } else { *flag })
            .collect();
        TagSelection(flags)
    }

    /// Returns a copy of the selection with one flag flipped.
    pub fn toggled(&self, tag: Tag) -> Self {
        self.with(tag, !self.is_selected(tag))
    }

    /// Returns the selected tags, in catalog order.
    pub fn active(&self) -> Vec<Tag> {
        Tag::iter().filter(|tag| self.is_selected(*tag)).collect()
    }

    /// Returns the raw flags, indexed by tag position.
    pub fn flags(&self) -> &[bool] {
        &self.0
    }
}

// ----------------------------------------------------------------------------
// Inheritance Option

/// Value of the inheritance selector.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum InheritanceOption {
    /// Sentinel matching every locus.
    #[default]
    All,
    /// A specific inheritance mode (ex. `AD`).
    Mode(String),
}

impl Display for InheritanceOption {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            InheritanceOption::All => write!(f, "{}", InheritanceOption::ALL),
            InheritanceOption::Mode(mode) => write!(f, "{mode}"),
        }
    }
}

impl From<&str> for InheritanceOption {
    /// `"all"` becomes the sentinel, anything else a specific mode.
    fn from(value: &str) -> Self {
        match value {
            InheritanceOption::ALL => InheritanceOption::All,
            mode => InheritanceOption::Mode(mode.to_string()),
        }
    }
}

impl std::str::FromStr for InheritanceOption {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(InheritanceOption::from(value))
    }
}

impl InheritanceOption {
    /// Literal value of the [`InheritanceOption::All`] sentinel.
    pub const ALL: &'static str = "all";
}

/// Returns the inheritance selector values for a dataset.
///
/// The `all` sentinel comes first, followed by each distinct inheritance mode
/// in the order it is first seen across the records.
///
/// ## Examples
///
/// ```rust
/// use strchive::{compute_inheritance_options, derive_datum, LocusRecord};
///
/// let records: Vec<_> = [vec!["AR"], vec!["AD", "AR"], vec![]]
///     .into_iter()
///     .enumerate()
///     .map(|(i, modes)| {
///         let mut raw = LocusRecord::new(&i.to_string());
///         raw.inheritance = modes.into_iter().map(String::from).collect();
///         derive_datum(raw)
///     })
///     .collect();
///
/// let options = compute_inheritance_options(&records);
/// let values: Vec<String> = options.iter().map(|o| o.to_string()).collect();
/// assert_eq!(values, ["all", "AR", "AD"]);
/// ```
pub fn compute_inheritance_options(records: &[DerivedLocus]) -> Vec<InheritanceOption> {
    let options = std::iter::once(InheritanceOption::All)
        .chain(
            records
                .iter()
                .flat_map(|r| r.inheritance.iter())
                .map(|mode| InheritanceOption::from(mode.as_str())),
        )
        .unique()
        .collect_vec();
    debug!("Inheritance options: {}", options.iter().join(", "));
    options
}

/// Returns the longest pathogenic motif length across all records.
///
/// Empty motifs are ignored. A dataset without any motif returns 1, the
/// smallest valid motif ceiling.
///
/// ## Examples
///
/// ```rust
/// use strchive::{compute_motif_ceiling_bounds, derive_datum, LocusRecord};
///
/// assert_eq!(compute_motif_ceiling_bounds(&[]), 1);
///
/// let mut raw = LocusRecord::new("CANVAS_RFC1");
/// raw.pathogenic_motif_reference_orientation = vec!["AAGGG".to_string(), "".to_string()];
/// assert_eq!(compute_motif_ceiling_bounds(&[derive_datum(raw)]), 5);
/// ```
pub fn compute_motif_ceiling_bounds(records: &[DerivedLocus]) -> usize {
    records
        .iter()
        .flat_map(|r| r.pathogenic_motif_reference_orientation.iter())
        .filter(|m| !m.is_empty())
        .map(|m| motif::motif_length(m))
        .max()
        .unwrap_or(1)
        .max(1)
}

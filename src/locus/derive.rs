//! Enrich raw [`LocusRecord`]s with the display values used for filtering and presentation.

use crate::locus::motif;
use crate::locus::{GenomeBuild, LocusRecord};
use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// A [`LocusRecord`] plus derived values.
///
/// Every raw field stays accessible under its own name through [`Deref`], and
/// is flattened back into the same JSON object when serialized.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct DerivedLocus {
    #[serde(flatten)]
    pub locus: LocusRecord,
    /// Coordinates on hg19, as `chrom:start-stop`.
    pub position_hg19: Option<String>,
    /// Coordinates on hg38, as `chrom:start-stop`.
    pub position_hg38: Option<String>,
    /// Coordinates on T2T, as `chrom:start-stop`.
    pub position_t2t: Option<String>,
    /// Pathogenic motifs joined by `,`.
    pub motif_display: String,
    /// Inheritance modes joined by `,`.
    pub inheritance_display: String,
    /// Length of the longest pathogenic motif, 0 if there are none.
    pub max_motif_length: usize,
    /// Prevalence as a percentage, when the fraction could be parsed.
    pub prevalence_percent: Option<f64>,
    /// Every rotation of the pathogenic motifs, with `N` expanded to each
    /// nucleotide. Genotyped alleles report motifs in any rotation, so this is
    /// the set an observed motif is compared against (see
    /// [`DerivedLocus::is_pathogenic_motif`]).
    pub motif_rotations: Vec<String>,
}

impl Deref for DerivedLocus {
    type Target = LocusRecord;

    fn deref(&self) -> &Self::Target {
        &self.locus
    }
}

impl DerivedLocus {
    /// Returns the display position for a [`GenomeBuild`].
    pub fn position_display(&self, build: GenomeBuild) -> Option<&str> {
        match build {
            GenomeBuild::Hg19 => self.position_hg19.as_deref(),
            GenomeBuild::Hg38 => self.position_hg38.as_deref(),
            GenomeBuild::T2t => self.position_t2t.as_deref(),
        }
    }

    /// Returns true if an observed motif is a rotation of a pathogenic motif.
    ///
    /// ```rust
    /// use strchive::{derive_datum, LocusRecord};
    ///
    /// let mut raw = LocusRecord::new("CANVAS_RFC1");
    /// raw.pathogenic_motif_reference_orientation = vec!["AAGGG".to_string()];
    /// let derived = derive_datum(raw);
    ///
    /// assert!(derived.is_pathogenic_motif("GGAAG"));
    /// assert!(derived.is_pathogenic_motif("ggaag"));
    /// assert!(!derived.is_pathogenic_motif("AAAAG"));
    /// ```
    pub fn is_pathogenic_motif(&self, motif: &str) -> bool {
        self.motif_rotations.iter().any(|m| m.eq_ignore_ascii_case(motif))
    }

    /// Returns true if the locus carries the tag value.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Derive the display values of a [`LocusRecord`].
///
/// Never fails, and depends on nothing but the record itself.
///
/// ## Examples
///
/// ```rust
/// use strchive::{derive_datum, LocusRecord};
///
/// let mut raw = LocusRecord::new("SCA8_ATXN8OS");
/// raw.pathogenic_motif_reference_orientation = vec!["CTG".to_string(), "CTA".to_string()];
/// raw.inheritance = vec!["AD".to_string()];
/// raw.prevalence = Some("1/8".to_string());
///
/// let derived = derive_datum(raw);
/// assert_eq!(derived.id, "SCA8_ATXN8OS");
/// assert_eq!(derived.motif_display, "CTG,CTA");
/// assert_eq!(derived.max_motif_length, 3);
/// assert_eq!(derived.prevalence_percent, Some(12.5));
/// ```
pub fn derive_datum(raw: LocusRecord) -> DerivedLocus {
    let position = |build| raw.position(build).map(|p| p.to_string());
    let motifs = &raw.pathogenic_motif_reference_orientation;

    let derived = DerivedLocus {
        position_hg19: position(GenomeBuild::Hg19),
        position_hg38: position(GenomeBuild::Hg38),
        position_t2t: position(GenomeBuild::T2t),
        motif_display: motifs.iter().join(","),
        inheritance_display: raw.inheritance.iter().join(","),
        max_motif_length: motif::max_motif_length(motifs),
        prevalence_percent: raw.prevalence.as_deref().and_then(prevalence_percent),
        motif_rotations: motif::cyclical_variations(motifs),
        locus: raw,
    };
    debug!("Derived locus: {}", derived.id);
    derived
}

/// Derive every record, keeping the input order.
pub fn derive_all(raw: Vec<LocusRecord>) -> Vec<DerivedLocus> {
    raw.into_iter().map(derive_datum).collect()
}

/// Parse a prevalence fraction such as `1/100000` into a percentage.
///
/// ## Examples
///
/// ```rust
/// use strchive::locus::derive::prevalence_percent;
///
/// assert_eq!(prevalence_percent("1 / 4"), Some(25.0));
/// assert_eq!(prevalence_percent("rare"), None);
/// assert_eq!(prevalence_percent("1/0"), None);
/// ```
pub fn prevalence_percent(prevalence: &str) -> Option<f64> {
    let (numerator, denominator) = prevalence.split_once('/')?;
    let numerator: f64 = numerator.trim().parse().ok()?;
    let denominator: f64 = denominator.trim().parse().ok()?;
    (denominator != 0.0).then(|| numerator / denominator * 100.0)
}

//! Raw [`LocusRecord`]s of the STR catalog, as read from JSON.

pub mod derive;
pub mod motif;
pub mod toy1;
#[cfg(test)]
mod tests;

use color_eyre::eyre::{Report, Result, WrapErr};
use color_eyre::Help;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display, Formatter};
use std::path::Path;
use strum::{EnumIter, IntoEnumIterator};

// ----------------------------------------------------------------------------
// Genome Build

/// A reference genome build that loci are positioned on.
#[derive(Clone, Copy, Debug, Deserialize, EnumIter, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GenomeBuild {
    Hg19,
    Hg38,
    T2t,
}

impl Display for GenomeBuild {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let build = match self {
            GenomeBuild::Hg19 => "hg19",
            GenomeBuild::Hg38 => "hg38",
            GenomeBuild::T2t => "t2t",
        };
        write!(f, "{build}")
    }
}

/// Coordinates of a locus on one [`GenomeBuild`].
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GenomicPosition {
    pub chrom: String,
    pub start: u64,
    pub stop: u64,
}

impl Display for GenomicPosition {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}:{}-{}", self.chrom, self.start, self.stop)
    }
}

// ----------------------------------------------------------------------------
// Locus Record

/// One disease-associated STR locus, exactly as it appears in the catalog.
///
/// Everything except the `id` is optional in the catalog. Sequence fields that
/// are missing deserialize as empty, and `null` values are treated the same.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct LocusRecord {
    /// Unique locus identifier (ex. `HD_HTT`).
    pub id: String,
    /// Gene symbol.
    #[serde(default)]
    pub gene: Option<String>,
    /// Disease identifier (ex. `HD`).
    #[serde(default)]
    pub disease_id: Option<String>,
    /// Disease description.
    #[serde(default)]
    pub disease: Option<String>,
    #[serde(default)]
    pub chrom: Option<String>,
    #[serde(default)]
    pub start_hg19: Option<u64>,
    #[serde(default)]
    pub stop_hg19: Option<u64>,
    #[serde(default)]
    pub start_hg38: Option<u64>,
    #[serde(default)]
    pub stop_hg38: Option<u64>,
    #[serde(default)]
    pub start_t2t: Option<u64>,
    #[serde(default)]
    pub stop_t2t: Option<u64>,
    /// Repeat motifs found in the reference genome, in reference orientation.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub reference_motif_reference_orientation: Vec<String>,
    /// Repeat motifs that cause disease, in reference orientation.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub pathogenic_motif_reference_orientation: Vec<String>,
    /// Classification tags, see [`Tag`](crate::Tag).
    #[serde(default, rename = "flags", alias = "tags", deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    /// Inheritance modes (ex. `AD`, `AR`, `XR`).
    #[serde(default, deserialize_with = "null_as_empty")]
    pub inheritance: Vec<String>,
    #[serde(default)]
    pub benign_min: Option<u64>,
    #[serde(default)]
    pub benign_max: Option<u64>,
    #[serde(default)]
    pub pathogenic_min: Option<u64>,
    #[serde(default)]
    pub pathogenic_max: Option<u64>,
    /// Disease prevalence as a fraction (ex. `1/100000`).
    #[serde(default)]
    pub prevalence: Option<String>,
    #[serde(default)]
    pub age_onset: Option<String>,
    /// Alternate gene names used by gnomAD.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub gnomad: Vec<String>,
}

impl LocusRecord {
    /// Returns a new [`LocusRecord`] with only an identifier.
    pub fn new(id: &str) -> Self {
        LocusRecord { id: id.to_string(), ..Default::default() }
    }

    /// Returns the coordinates of the locus on a [`GenomeBuild`], if fully specified.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// use strchive::locus::{GenomeBuild, LocusRecord};
    ///
    /// let mut locus = LocusRecord::new("HD_HTT");
    /// locus.chrom = Some("chr4".to_string());
    /// locus.start_hg38 = Some(3074876);
    /// locus.stop_hg38 = Some(3074933);
    ///
    /// let position = locus.position(GenomeBuild::Hg38).unwrap();
    /// assert_eq!(position.to_string(), "chr4:3074876-3074933");
    /// assert_eq!(locus.position(GenomeBuild::Hg19), None);
    /// ```
    pub fn position(&self, build: GenomeBuild) -> Option<GenomicPosition> {
        let (start, stop) = match build {
            GenomeBuild::Hg19 => (self.start_hg19, self.stop_hg19),
            GenomeBuild::Hg38 => (self.start_hg38, self.stop_hg38),
            GenomeBuild::T2t => (self.start_t2t, self.stop_t2t),
        };
        let chrom = self.chrom.clone()?;
        Some(GenomicPosition { chrom, start: start?, stop: stop? })
    }

    /// Returns the builds that this locus has coordinates for.
    pub fn builds(&self) -> Vec<GenomeBuild> {
        GenomeBuild::iter().filter(|b| self.position(*b).is_some()).collect()
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    let values: Option<Vec<T>> = Option::deserialize(deserializer)?;
    Ok(values.unwrap_or_default())
}

// ----------------------------------------------------------------------------
// Catalog

/// Read a JSON catalog of [`LocusRecord`]s.
///
/// The catalog is a JSON array of loci. It is assumed to be already validated.
pub fn read_catalog<P>(path: &P) -> Result<Vec<LocusRecord>, Report>
where
    P: AsRef<Path> + Debug,
{
    info!("Reading catalog: {path:?}");
    let catalog = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read file: {path:?}."))?;
    let records = parse_catalog(&catalog)
        .wrap_err_with(|| format!("Failed to parse file: {path:?}"))?;
    info!("Loaded {} loci.", records.len());
    Ok(records)
}

/// Parse a JSON catalog of [`LocusRecord`]s from a string.
///
/// ## Examples
///
/// ```rust
/// let records = strchive::locus::parse_catalog(r#"[{"id": "HD_HTT", "inheritance": null}]"#)?;
/// assert_eq!(records[0].id, "HD_HTT");
/// assert!(records[0].inheritance.is_empty());
/// # Ok::<(), color_eyre::eyre::Report>(())
/// ```
pub fn parse_catalog(catalog: &str) -> Result<Vec<LocusRecord>, Report> {
    let records: Vec<LocusRecord> = serde_json::from_str(catalog)
        .map_err(Report::from)
        .suggestion("The catalog must be a JSON array of loci, each with at least an \"id\".")?;
    debug!("Parsed {} loci from catalog.", records.len());
    Ok(records)
}

//! Toy catalog 1, a small set of loci for examples and tests.

use crate::locus::{parse_catalog, LocusRecord};
use color_eyre::eyre::{Report, Result};

/// Toy catalog 1 as JSON.
///
/// +------------+--------+-------------------+-------------+-----------------------------------------+
/// | id         | gene   | motifs            | inheritance | flags                                   |
/// +------------+--------+-------------------+-------------+-----------------------------------------+
/// | R1         | GENE1  | AAG, AAGG         | AD          | conflicting-evidence, low-penetrance    |
/// | R2         | GENE2  | AAGGCTT           | AR          | conflicting-evidence                    |
/// | R3         | GENE3  |                   |             |                                         |
/// | R4         | GENE4  | CAG               | AD, XR      | sex-biased                              |
/// +------------+--------+-------------------+-------------+-----------------------------------------+
pub const CATALOG: &str = r#"[
  {
    "id": "R1",
    "gene": "GENE1",
    "disease_id": "D1",
    "disease": "Toy ataxia (type 1)",
    "chrom": "chr1",
    "start_hg38": 100,
    "stop_hg38": 150,
    "pathogenic_motif_reference_orientation": ["AAG", "AAGG"],
    "flags": ["conflicting-evidence", "low-penetrance"],
    "inheritance": ["AD"]
  },
  {
    "id": "R2",
    "gene": "GENE2",
    "disease_id": "D2",
    "disease": "Toy dystrophy",
    "chrom": "chr2",
    "start_hg38": 200,
    "stop_hg38": 270,
    "pathogenic_motif_reference_orientation": ["AAGGCTT"],
    "flags": ["conflicting-evidence"],
    "inheritance": ["AR"]
  },
  {
    "id": "R3",
    "gene": "GENE3",
    "disease": "Toy syndrome [unresolved]"
  },
  {
    "id": "R4",
    "gene": "GENE4",
    "disease_id": "D4",
    "disease": "Toy chorea",
    "chrom": "chrX",
    "start_hg38": 400,
    "stop_hg38": 430,
    "pathogenic_motif_reference_orientation": ["CAG"],
    "flags": ["sex-biased"],
    "inheritance": ["AD", "XR"]
  }
]"#;

/// Returns the raw records of toy catalog 1.
///
/// ```rust
/// let records = strchive::locus::toy1::records()?;
/// assert_eq!(records.len(), 4);
/// # Ok::<(), color_eyre::eyre::Report>(())
/// ```
pub fn records() -> Result<Vec<LocusRecord>, Report> {
    parse_catalog(CATALOG)
}

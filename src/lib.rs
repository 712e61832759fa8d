//! `strchive` explores a catalog of disease-associated short tandem repeat (**STR**) loci.
//!
//! The catalog is loaded once from JSON, each record is enriched with derived
//! display values, and the collection is then narrowed interactively by:
//!
//! 1. Free-text search across the visible columns (case-insensitive, literal).
//! 1. Tags, where a locus must carry _every_ selected tag.
//! 1. A motif length ceiling, where every pathogenic motif must fit.
//! 1. An inheritance mode, or `all`.
//!
//! ```rust
//! use strchive::{Explorer, LocusRecord, Tag};
//!
//! let json = r#"[
//!   {"id": "HD_HTT", "gene": "HTT", "disease": "Huntington disease",
//!    "pathogenic_motif_reference_orientation": ["CAG"], "inheritance": ["AD"]},
//!   {"id": "FRDA_FXN", "gene": "FXN", "disease": "Friedreich ataxia",
//!    "pathogenic_motif_reference_orientation": ["GAA"], "inheritance": ["AR"],
//!    "flags": ["low-penetrance"]}
//! ]"#;
//! let records: Vec<LocusRecord> = serde_json::from_str(json)?;
//!
//! let mut explorer = Explorer::new(records);
//! assert_eq!(explorer.view().len(), 2);
//!
//! explorer.set_search_text("ataxia");
//! explorer.toggle_tag(Tag::LowPenetrance);
//! assert_eq!(explorer.view()[0].id, "FRDA_FXN");
//! # Ok::<(), color_eyre::eyre::Report>(())
//! ```

#[cfg(feature = "cli")]
pub mod cli;
pub mod explorer;
pub mod filter;
pub mod locus;
pub mod options;
pub mod present;
#[cfg(feature = "cli")]
pub mod utils;

#[doc(inline)]
#[cfg(feature = "cli")]
pub use crate::cli::Cli;
#[doc(inline)]
pub use crate::explorer::Explorer;
#[doc(inline)]
pub use crate::filter::{compute_view, FilterCriteria};
#[doc(inline)]
pub use crate::locus::{derive::derive_datum, derive::DerivedLocus, LocusRecord};
#[doc(inline)]
pub use crate::options::{compute_inheritance_options, compute_motif_ceiling_bounds};
#[doc(inline)]
pub use crate::options::{InheritanceOption, Tag};
#[doc(inline)]
#[cfg(feature = "cli")]
pub use crate::utils::verbosity::Verbosity;

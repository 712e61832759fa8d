use crate::locus::read_catalog;
use crate::options::{InheritanceOption, Tag};
use crate::{present, Explorer};
use clap::Parser;
use color_eyre::eyre::{Report, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use strchive_table::Table;

// ----------------------------------------------------------------------------
// Structs

/// Arguments to filter a catalog.
#[derive(Clone, Debug, Deserialize, Parser, Serialize)]
#[clap(verbatim_doc_comment)]
pub struct Args {
    /// Loci catalog (JSON).
    #[clap(short = 'c', long)]
    pub catalog: PathBuf,

    /// Case-insensitive text to search for in the visible columns.
    #[clap(short = 's', long, default_value_t = String::new())]
    pub search: String,

    /// Keep loci carrying this tag. Repeat to require several tags.
    #[clap(short = 't', long, value_enum)]
    pub tag: Vec<Tag>,

    /// Keep loci whose pathogenic motifs are at most this long.
    ///
    /// Defaults to the longest motif in the catalog.
    #[clap(short = 'm', long)]
    pub max_motif_length: Option<usize>,

    /// Keep loci with this inheritance mode, or 'all'.
    #[clap(short = 'i', long, default_value_t = InheritanceOption::All)]
    pub inheritance: InheritanceOption,

    /// Write the loci in view to a TSV or CSV file instead of printing them.
    #[clap(short = 'o', long)]
    pub output: Option<PathBuf>,
}

impl Default for Args {
    fn default() -> Self {
        Args::new()
    }
}

impl Args {
    pub fn new() -> Self {
        Args {
            catalog: PathBuf::new(),
            search: String::new(),
            tag: Vec::new(),
            max_motif_length: None,
            inheritance: InheritanceOption::All,
            output: None,
        }
    }
}

// ----------------------------------------------------------------------------
// Functions

/// Load a catalog, apply the filter arguments and return the loci in view.
///
/// When `output` is set, the table is also written to that path.
pub fn run(args: &Args) -> Result<Table<String>, Report> {
    let mut explorer = Explorer::new(read_catalog(&args.catalog)?);

    let mut criteria = explorer
        .criteria()
        .with_search_text(&args.search)
        .with_selected_tags(args.tag.iter().copied().collect())
        .with_inheritance(args.inheritance.clone());
    if let Some(max_motif_length) = args.max_motif_length {
        criteria = criteria.with_motif_ceiling(max_motif_length);
    }
    explorer.set_criteria(criteria);

    if !explorer.inheritance_options().contains(&args.inheritance) {
        warn!("Inheritance mode {} does not occur in the catalog.", args.inheritance);
    }
    info!("{explorer}");

    let mut table = present::view_table(&explorer.view(), explorer.tag_options())?;
    if let Some(output) = &args.output {
        info!("Writing loci in view: {output:?}");
        table.write(output, None)?;
    }

    Ok(table)
}

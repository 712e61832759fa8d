use crate::locus::read_catalog;
use crate::{present, Explorer};
use clap::Parser;
use color_eyre::eyre::{Report, Result};
use indoc::formatdoc;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Arguments to summarize the filter options of a catalog.
#[derive(Clone, Debug, Deserialize, Parser, Serialize)]
#[clap(verbatim_doc_comment)]
pub struct Args {
    /// Loci catalog (JSON).
    #[clap(short = 'c', long)]
    pub catalog: PathBuf,
}

impl Default for Args {
    fn default() -> Self {
        Args::new()
    }
}

impl Args {
    pub fn new() -> Self {
        Args { catalog: PathBuf::new() }
    }
}

/// Returns a markdown summary of the tags, inheritance modes and motif length
/// bound that can be used to filter the catalog.
pub fn run(args: &Args) -> Result<String, Report> {
    let explorer = Explorer::new(read_catalog(&args.catalog)?);

    let tags = present::tag_table(explorer.tag_options())?;
    let inheritance =
        present::inheritance_table(explorer.inheritance_options(), explorer.records())?;

    let summary = formatdoc!(
        "
        ## Tags

        {}

        ## Inheritance

        {}

        ## Motif Length

        Pathogenic motifs are at most {} bp long.
        ",
        tags.to_markdown(),
        inheritance.to_markdown(),
        explorer.motif_bound(),
    );
    Ok(summary)
}

//! [Command-line interface](Cli) (CLI) of the main binary.

pub mod filter;
pub mod options;

use crate::Verbosity;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

// ----------------------------------------------------------------------------
// CLI Entry Point
// ----------------------------------------------------------------------------

/// The command-line interface (CLI).
/// ---
/// The CLI parses user input from the command-line in the main function, with
/// the `parse` function reading from [`std::env::args`](https://doc.rust-lang.org/std/env/fn.args.html).
/// ```no_run
/// use clap::Parser;
/// let args = strchive::Cli::parse();
/// ```
/// Here is a manual example of setting the command-line input:
/// ```rust
/// use clap::Parser;
/// use strchive::cli::Command;
///
/// let input = ["strchive", "filter", "--catalog", "loci.json", "--tag", "low-penetrance", "--search", "ataxia"];
/// let args = strchive::Cli::parse_from(input);
///
/// match args.command {
///     Command::Filter(args) => {
///         assert_eq!(args.search, "ataxia");
///         assert_eq!(args.tag, [strchive::Tag::LowPenetrance]);
///     }
///     Command::Options(_) => unreachable!(),
/// }
/// ```
#[derive(Debug, Deserialize, Parser, Serialize)]
#[clap(name = "strchive", author, version)]
#[clap(about = "strchive filters and searches a catalog of pathogenic short tandem repeat loci.")]
pub struct Cli {
    #[clap(subcommand)]
    #[clap(help = "Set the command.")]
    pub command: Command,

    /// Set the output [Verbosity] level.
    #[clap(short = 'v', long)]
    #[clap(value_enum, default_value_t = Verbosity::default())]
    #[clap(hide_possible_values = false)]
    #[clap(global = true)]
    #[clap(help = "Set the output verbosity level.")]
    pub verbosity: Verbosity,
}

/// CLI [commands](#variants). Used to decide which runtime [Command](#variants) the CLI arguments should be passed to.
#[derive(Debug, Deserialize, Serialize, Subcommand)]
pub enum Command {
    /// Pass CLI arguments to [`filter::run`].
    #[clap(about = "Filter the catalog and print or write the loci in view.")]
    Filter(filter::Args),

    /// Pass CLI arguments to [`options::run`].
    #[clap(about = "Summarize the filter options available for a catalog.")]
    Options(options::Args),
}

use clap::Parser;
use color_eyre::eyre::{Report, Result};
use strchive::{cli, cli::Cli};

fn main() -> Result<(), Report> {
    let args = Cli::parse();
    color_eyre::install()?;

    // the verbosity flag takes precedence over an inherited RUST_LOG
    std::env::set_var("RUST_LOG", args.verbosity.to_string());
    env_logger::init();

    match args.command {
        cli::Command::Filter(args) => {
            let table = cli::filter::run(&args)?;
            if args.output.is_none() {
                println!("{}", table.to_markdown());
            }
        }
        cli::Command::Options(args) => println!("{}", cli::options::run(&args)?),
    }

    Ok(())
}

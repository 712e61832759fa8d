#![cfg(feature = "cli")]

use clap::Parser;
use color_eyre::eyre::{eyre, Report, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use strchive::cli::{self, Command};
use strchive::locus::toy1;
use strchive::Cli;
use tempfile::NamedTempFile;

fn toy_catalog() -> Result<NamedTempFile, Report> {
    let mut file = NamedTempFile::new()?;
    file.write_all(toy1::CATALOG.as_bytes())?;
    Ok(file)
}

fn filter_args(input: &[&str]) -> Result<cli::filter::Args, Report> {
    let input = ["strchive", "filter"].iter().chain(input);
    match Cli::try_parse_from(input)?.command {
        Command::Filter(args) => Ok(args),
        command => Err(eyre!("Unexpected command: {command:?}")),
    }
}

fn path_str(path: &Path) -> Result<&str, Report> {
    path.to_str().ok_or_else(|| eyre!("Non UTF-8 path: {path:?}"))
}

#[test]
fn filter_writes_tsv() -> Result<(), Report> {
    let catalog = toy_catalog()?;
    let dir = tempfile::tempdir()?;
    let output = dir.path().join("view.tsv");

    let args = filter_args(&[
        "--catalog",
        path_str(catalog.path())?,
        "--tag",
        "conflicting-evidence",
        "--max-motif-length",
        "4",
        "--output",
        path_str(&output)?,
    ])?;
    let table = cli::filter::run(&args)?;
    assert_eq!(table.rows.len(), 1);

    let written = fs::read_to_string(&output)?;
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("ID\tGene\tDisease ID\t"));
    assert!(lines[1].starts_with("R1\tGENE1\tD1\t"));
    Ok(())
}

#[test]
fn filter_writes_csv_with_multi_value_columns() -> Result<(), Report> {
    let catalog = toy_catalog()?;
    let dir = tempfile::tempdir()?;
    let output = dir.path().join("view.csv");

    let args =
        filter_args(&["--catalog", path_str(catalog.path())?, "--output", path_str(&output)?])?;
    let table = cli::filter::run(&args)?;

    let mut reader = csv::ReaderBuilder::new().from_path(&output)?;
    let headers = reader.headers()?.clone();
    assert_eq!(headers.len(), table.headers.len());

    let records = reader.records().collect::<Result<Vec<_>, _>>()?;
    assert_eq!(records.len(), 4);
    for record in &records {
        assert_eq!(record.len(), headers.len(), "record {:?}", record.get(0));
    }
    let column = |name: &str| {
        headers.iter().position(|h| h == name).ok_or_else(|| eyre!("Missing column: {name}"))
    };
    let (motif, inheritance) = (column("Pathogenic Motif")?, column("Inheritance")?);
    assert_eq!(&records[0][motif], "AAG,AAGG");
    assert_eq!(&records[3][inheritance], "AD,XR");
    Ok(())
}

#[test]
fn filter_defaults_keep_everything() -> Result<(), Report> {
    let catalog = toy_catalog()?;
    let args = filter_args(&["--catalog", path_str(catalog.path())?])?;
    assert_eq!(args.max_motif_length, None);
    assert_eq!(args.inheritance.to_string(), "all");

    let table = cli::filter::run(&args)?;
    let ids: Vec<&String> = table.get_column(&"ID".to_string())?;
    assert_eq!(ids, ["R1", "R2", "R3", "R4"]);
    Ok(())
}

#[test]
fn filter_search_and_inheritance() -> Result<(), Report> {
    let catalog = toy_catalog()?;
    let catalog = path_str(catalog.path())?;

    let args = filter_args(&["--catalog", catalog, "--inheritance", "XR", "--search", "CHOREA"])?;
    let table = cli::filter::run(&args)?;
    assert_eq!(table.rows.len(), 1);
    assert!(table.to_markdown().contains("GENE4"));

    // a mode missing from the catalog is a warning, not an error
    let args = filter_args(&["--catalog", catalog, "--inheritance", "MT"])?;
    assert!(cli::filter::run(&args)?.rows.is_empty());
    Ok(())
}

#[test]
fn filter_rejects_unknown_output_extension() -> Result<(), Report> {
    let catalog = toy_catalog()?;
    let dir = tempfile::tempdir()?;
    let output = dir.path().join("view.json");

    let args =
        filter_args(&["--catalog", path_str(catalog.path())?, "--output", path_str(&output)?])?;
    assert!(cli::filter::run(&args).is_err());
    Ok(())
}

#[test]
fn filter_rejects_unknown_tag() {
    assert!(filter_args(&["--catalog", "loci.json", "--tag", "not-a-tag"]).is_err());
}

#[test]
fn filter_missing_catalog() -> Result<(), Report> {
    let dir = tempfile::tempdir()?;
    let missing = dir.path().join("missing.json");
    let args = filter_args(&["--catalog", path_str(&missing)?])?;
    assert!(cli::filter::run(&args).is_err());
    Ok(())
}

#[test]
fn options_summary() -> Result<(), Report> {
    let catalog = toy_catalog()?;
    let input = ["strchive", "options", "--catalog", path_str(catalog.path())?];
    let args = match Cli::try_parse_from(input)?.command {
        Command::Options(args) => args,
        command => return Err(eyre!("Unexpected command: {command:?}")),
    };

    let summary = cli::options::run(&args)?;
    assert!(summary.starts_with("## Tags"));
    assert!(summary.contains("conflicting-evidence"));
    assert!(summary.contains("XR"));
    assert!(summary.contains("at most 7 bp"));
    Ok(())
}

use crate::locus::{derive, parse_catalog, read_catalog, GenomeBuild};
use color_eyre::eyre::{Report, Result};
use indoc::indoc;
use std::io::Write;
use tempfile::NamedTempFile;

const CATALOG: &str = indoc! {r#"
    [
      {
        "id": "HD_HTT",
        "gene": "HTT",
        "disease_id": "HD",
        "disease": "Huntington disease",
        "chrom": "chr4",
        "start_hg19": 3076603,
        "stop_hg19": 3076660,
        "start_hg38": 3074876,
        "stop_hg38": 3074933,
        "reference_motif_reference_orientation": ["CAG"],
        "pathogenic_motif_reference_orientation": ["CAG"],
        "flags": ["age-onset-by-allele"],
        "inheritance": ["AD"],
        "pathogenic_min": 40,
        "prevalence": "1/10000"
      },
      {
        "id": "CANVAS_RFC1",
        "gene": "RFC1",
        "pathogenic_motif_reference_orientation": ["AAGGG", "ACAGG"],
        "inheritance": ["AR"],
        "flags": null,
        "gnomad": null
      }
    ]
"#};

#[test]
fn parse_optional_fields() -> Result<(), Report> {
    let records = parse_catalog(CATALOG)?;
    assert_eq!(records.len(), 2);

    let hd = &records[0];
    assert_eq!(hd.gene.as_deref(), Some("HTT"));
    assert_eq!(hd.tags, ["age-onset-by-allele"]);
    assert_eq!(hd.builds(), [GenomeBuild::Hg19, GenomeBuild::Hg38]);

    let canvas = &records[1];
    assert!(canvas.tags.is_empty());
    assert!(canvas.gnomad.is_empty());
    assert!(canvas.reference_motif_reference_orientation.is_empty());
    assert_eq!(canvas.disease, None);
    assert!(canvas.builds().is_empty());
    Ok(())
}

#[test]
fn parse_tags_alias() -> Result<(), Report> {
    let records = parse_catalog(r#"[{"id": "A", "tags": ["sex-biased"]}]"#)?;
    assert_eq!(records[0].tags, ["sex-biased"]);
    Ok(())
}

#[test]
fn parse_missing_id() {
    assert!(parse_catalog(r#"[{"gene": "HTT"}]"#).is_err());
    assert!(parse_catalog(r#"{"id": "HD_HTT"}"#).is_err());
}

#[test]
fn read_catalog_file() -> Result<(), Report> {
    let mut file = NamedTempFile::new()?;
    write!(file, "{CATALOG}")?;
    let records = read_catalog(&file.path())?;
    assert_eq!(records[1].id, "CANVAS_RFC1");

    assert!(read_catalog(&"does/not/exist.json").is_err());
    Ok(())
}

#[test]
fn derived_fields() -> Result<(), Report> {
    let records = derive::derive_all(parse_catalog(CATALOG)?);

    let hd = &records[0];
    assert_eq!(hd.position_hg38.as_deref(), Some("chr4:3074876-3074933"));
    assert_eq!(hd.position_display(GenomeBuild::Hg19), Some("chr4:3076603-3076660"));
    assert_eq!(hd.position_t2t, None);
    assert_eq!(hd.inheritance_display, "AD");
    assert_eq!(hd.prevalence_percent, Some(0.01));
    assert!(hd.has_tag("age-onset-by-allele"));
    assert_eq!(hd.motif_rotations, ["CAG", "GCA", "AGC"]);

    let canvas = &records[1];
    assert_eq!(canvas.motif_display, "AAGGG,ACAGG");
    assert_eq!(canvas.max_motif_length, 5);
    assert_eq!(canvas.prevalence_percent, None);
    assert_eq!(canvas.position_hg38, None);
    assert!(canvas.is_pathogenic_motif("GGACA"));
    assert!(!hd.is_pathogenic_motif("CTG"));
    Ok(())
}

#[test]
fn derived_keeps_raw_fields_in_json() -> Result<(), Report> {
    let records = derive::derive_all(parse_catalog(CATALOG)?);
    let json = serde_json::to_value(&records[0])?;
    assert_eq!(json["id"], "HD_HTT");
    assert_eq!(json["flags"][0], "age-onset-by-allele");
    assert_eq!(json["motif_display"], "CAG");
    Ok(())
}

use crate::explorer::Explorer;
use crate::filter::{compute_view, FilterCriteria};
use crate::locus::{toy1, LocusRecord};
use crate::options::{InheritanceOption, Tag};
use color_eyre::eyre::{Report, Result};

fn view_ids(explorer: &Explorer) -> Vec<String> {
    explorer.view().iter().map(|r| r.id.clone()).collect()
}

fn locus(id: &str, motifs: &[&str], inheritance: &[&str]) -> LocusRecord {
    let mut record = LocusRecord::new(id);
    record.pathogenic_motif_reference_orientation = motifs.iter().map(|m| m.to_string()).collect();
    record.inheritance = inheritance.iter().map(|m| m.to_string()).collect();
    record
}

#[test]
fn starts_with_everything_in_view() -> Result<(), Report> {
    let explorer = Explorer::new(toy1::records()?);

    assert_eq!(view_ids(&explorer), ["R1", "R2", "R3", "R4"]);
    assert_eq!(explorer.motif_bound(), 7);
    assert_eq!(explorer.criteria(), &FilterCriteria::new(7));
    assert_eq!(explorer.inheritance_options()[0], InheritanceOption::All);
    assert_eq!(explorer.tag_options().len(), 6);
    assert_eq!(explorer.to_string(), "4 of 4 loci in view");
    Ok(())
}

#[test]
fn each_control_recomputes() -> Result<(), Report> {
    let mut explorer = Explorer::new(toy1::records()?);

    explorer.set_search_text("toy");
    assert_eq!(view_ids(&explorer), ["R1", "R2", "R3", "R4"]);

    explorer.toggle_tag(Tag::ConflictingEvidence);
    assert_eq!(view_ids(&explorer), ["R1", "R2"]);

    explorer.set_motif_ceiling(4);
    assert_eq!(view_ids(&explorer), ["R1"]);

    explorer.set_inheritance("AR".into());
    assert!(explorer.view().is_empty());

    explorer.set_motif_ceiling(7);
    assert_eq!(view_ids(&explorer), ["R2"]);

    explorer.set_tag(Tag::ConflictingEvidence, false);
    explorer.set_inheritance(InheritanceOption::All);
    explorer.set_search_text("");
    assert_eq!(view_ids(&explorer), ["R1", "R2", "R3", "R4"]);
    Ok(())
}

#[test]
fn view_matches_compute_view() -> Result<(), Report> {
    let mut explorer = Explorer::new(toy1::records()?);
    explorer.set_search_text("GENE");
    explorer.set_inheritance("AD".into());

    let expected = compute_view(explorer.records(), explorer.criteria());
    assert_eq!(explorer.view(), expected);
    Ok(())
}

#[test]
fn ceiling_is_at_least_one() -> Result<(), Report> {
    let mut explorer = Explorer::new(toy1::records()?);
    explorer.set_motif_ceiling(0);
    assert_eq!(explorer.criteria().motif_ceiling, 1);

    let mut criteria = explorer.criteria().clone();
    criteria.motif_ceiling = 0;
    explorer.set_criteria(criteria);
    assert_eq!(explorer.criteria().motif_ceiling, 1);
    assert_eq!(view_ids(&explorer), ["R3"]);
    Ok(())
}

#[test]
fn options_follow_dataset() -> Result<(), Report> {
    let mut explorer = Explorer::new(toy1::records()?);
    assert_eq!(explorer.inheritance_options().len(), 4);

    explorer.set_records(vec![locus("A", &["CGG"], &["XD"]), locus("B", &["CCG"], &["XD"])]);
    assert_eq!(explorer.inheritance_options(), [InheritanceOption::All, "XD".into()]);
    assert_eq!(explorer.motif_bound(), 3);
    assert_eq!(view_ids(&explorer), ["A", "B"]);
    Ok(())
}

#[test]
fn stale_inheritance_matches_nothing() -> Result<(), Report> {
    let mut explorer = Explorer::new(toy1::records()?);
    explorer.set_inheritance("AR".into());
    assert_eq!(view_ids(&explorer), ["R2"]);

    explorer.set_records(vec![locus("A", &["CGG"], &["AD"])]);
    assert_eq!(explorer.criteria().inheritance, InheritanceOption::from("AR"));
    assert!(explorer.view().is_empty());

    explorer.set_inheritance(InheritanceOption::All);
    assert_eq!(view_ids(&explorer), ["A"]);
    Ok(())
}

#[test]
fn ceiling_on_reload() -> Result<(), Report> {
    // an untouched ceiling follows the new bound
    let mut explorer = Explorer::new(vec![locus("A", &["CAG"], &[])]);
    explorer.set_records(vec![locus("B", &["AAGGCTT"], &[])]);
    assert_eq!(explorer.criteria().motif_ceiling, 7);
    assert_eq!(view_ids(&explorer), ["B"]);

    // a lowered ceiling is kept
    explorer.set_motif_ceiling(5);
    explorer.set_records(vec![locus("C", &["AAGGG"], &[]), locus("D", &["AAGGGGGGG"], &[])]);
    assert_eq!(explorer.criteria().motif_ceiling, 5);
    assert_eq!(view_ids(&explorer), ["C"]);

    // and clamped to a smaller bound
    explorer.set_motif_ceiling(3);
    explorer.set_records(vec![locus("E", &["AT"], &[])]);
    assert_eq!(explorer.criteria().motif_ceiling, 2);
    Ok(())
}

#[test]
fn empty_dataset() {
    let mut explorer = Explorer::new(Vec::new());
    assert_eq!(explorer.motif_bound(), 1);
    assert_eq!(explorer.inheritance_options(), [InheritanceOption::All]);
    assert!(explorer.view().is_empty());

    explorer.set_search_text("[");
    explorer.toggle_tag(Tag::SexBiased);
    assert!(explorer.view().is_empty());
}

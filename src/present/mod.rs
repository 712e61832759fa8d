//! Tabular presentation of option catalogs and filtered views.

use crate::filter::search::Column;
use crate::locus::derive::DerivedLocus;
use crate::options::{InheritanceOption, TagOption};
use color_eyre::eyre::{Report, Result};
use itertools::Itertools;
use strchive_table::Table;
use strum::IntoEnumIterator;

/// Header of the tag icon column in [`view_table`].
pub const TAGS_HEADER: &str = "Tags";

/// Returns a table of loci with the visible columns, plus their tag icons.
///
/// Icons are listed in tag catalog order, regardless of the order of tags in the record.
///
/// ## Examples
///
/// ```rust
/// use strchive::{present, Explorer};
/// use strchive::locus::toy1;
///
/// let explorer = Explorer::new(toy1::records()?);
/// let table = present::view_table(&explorer.view(), explorer.tag_options())?;
/// assert_eq!(table.rows.len(), 4);
/// println!("{}", table.to_markdown());
/// # Ok::<(), color_eyre::eyre::Report>(())
/// ```
pub fn view_table(
    view: &[&DerivedLocus],
    tag_options: &[TagOption],
) -> Result<Table<String>, Report> {
    let mut table = Table::new();
    table.headers = Column::iter()
        .map(|column| column.header())
        .chain([TAGS_HEADER])
        .map(String::from)
        .collect();

    for record in view {
        let icons = tag_options
            .iter()
            .filter(|option| record.has_tag(&option.value))
            .map(|option| option.icon.as_str())
            .join(" ");
        let row = Column::iter().map(|column| column.value(record).to_string()).chain([icons]);
        table.add_row(row)?;
    }

    Ok(table)
}

/// Returns a table of the tag catalog.
pub fn tag_table(tag_options: &[TagOption]) -> Result<Table<String>, Report> {
    let mut table = Table::new();
    table.headers = ["Value", "Label", "Icon", "Tooltip"].map(String::from).to_vec();
    for option in tag_options {
        let row = [&option.value, &option.label, &option.icon, &option.tooltip];
        table.add_row(row.map(|v| v.to_string()))?;
    }
    Ok(table)
}

/// Returns a table of the inheritance selector values, with the number of loci for each.
pub fn inheritance_table(
    options: &[InheritanceOption],
    records: &[DerivedLocus],
) -> Result<Table<String>, Report> {
    let mut table = Table::new();
    table.headers = ["Inheritance", "Loci"].map(String::from).to_vec();
    for option in options {
        let count = records
            .iter()
            .filter(|record| crate::filter::matches_inheritance(record, option))
            .count();
        table.add_row([option.to_string(), count.to_string()])?;
    }
    Ok(table)
}

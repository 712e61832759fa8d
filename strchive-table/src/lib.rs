//! Create and manipulate a row-based [`Table`].


use color_eyre::eyre::{eyre, ContextCompat, Report, Result, WrapErr};
use color_eyre::Help;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};
use std::path::{Path, PathBuf};
use tabled::settings::Style;

/// A row-based [`Table`] of generic data.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Table<T> {
    /// Names of the table columns.
    pub headers: Vec<T>,
    /// Rows of table values.
    pub rows: Vec<Vec<T>>,
    /// Optional file path for where the table was written to.
    pub path: Option<PathBuf>,
}

impl<T> Default for Table<T>
where
    T: Clone + Display + Debug + PartialEq<T>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Table<T>
where
    T: Clone + Display + Debug + PartialEq<T>,
{
    /// Returns a new row-based [`Table`] with empty headers and rows.
    ///
    /// ## Examples
    ///
    /// ```
    /// let mut table = strchive_table::Table::new();
    /// table.headers = vec!["gene", "disease"];
    /// table.add_row(vec!["HTT", "Huntington disease"])?;
    /// # assert_eq!(table.rows, vec![vec!["HTT", "Huntington disease"]]);
    /// # Ok::<(), color_eyre::eyre::Report>(())
    /// ```
    pub fn new() -> Self {
        Table { headers: Vec::new(), rows: Vec::new(), path: None }
    }

    /// Add a new row to the table.
    ///
    /// The row must have one value per header.
    ///
    /// ## Examples
    ///
    /// ```
    /// let mut table = strchive_table::Table::new();
    /// table.headers = vec!["1", "2", "3"];
    /// table.add_row(["A", "B", "C"])?;
    /// assert!(table.add_row(["D", "E"]).is_err());
    /// # Ok::<(), color_eyre::eyre::Report>(())
    /// ```
    pub fn add_row<I>(&mut self, row: I) -> Result<(), Report>
    where
        I: IntoIterator<Item = T>,
    {
        let row = row.into_iter().collect::<Vec<T>>();
        let (new, ex) = (row.len(), self.headers.len());
        if new != ex {
            return Err(eyre!("New row size ({new}) does not match the table headers ({ex})."));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Returns the column index (0-based) of the header in the [`Table`].
    ///
    /// ## Examples
    ///
    /// ```
    /// let mut table = strchive_table::Table::new();
    /// table.headers = vec!["1", "2", "3"];
    ///
    /// assert_eq!(table.get_header_index(&"3")?, 2);
    /// assert!(table.get_header_index(&"4").is_err());
    /// # Ok::<(), color_eyre::eyre::Report>(())
    /// ```
    pub fn get_header_index(&self, header: &T) -> Result<usize, Report> {
        self.headers
            .iter()
            .position(|h| h == header)
            .ok_or_else(|| eyre!("Column '{header}' was not found in table: {:?}.", self.path))
    }

    /// Returns the [`Table`] value under a particular header and row index.
    ///
    /// ## Examples
    ///
    /// ```
    /// let mut table = strchive_table::Table::new();
    /// table.headers = vec!["1", "2", "3"];
    /// table.add_row(["A", "B", "C"])?;
    ///
    /// assert_eq!(table.get(&"2", 0)?, &"B");
    /// # Ok::<(), color_eyre::eyre::Report>(())
    /// ```
    pub fn get(&self, header: &T, row: usize) -> Result<&T, Report> {
        let header_i = self.get_header_index(header)?;
        let row = self.get_row(row)?;
        Ok(&row[header_i])
    }

    /// Returns a [`Vec`] of [`Table`] values under a header.
    ///
    /// ## Examples
    ///
    /// ```
    /// let mut table = strchive_table::Table::new();
    /// table.headers = vec!["1", "2"];
    /// table.add_row(["A", "B"])?;
    /// table.add_row(["C", "D"])?;
    ///
    /// assert_eq!(table.get_column(&"2")?, [&"B", &"D"]);
    /// # Ok::<(), color_eyre::eyre::Report>(())
    /// ```
    pub fn get_column(&self, header: &T) -> Result<Vec<&T>, Report> {
        let header_i = self.get_header_index(header)?;
        let column = self.rows.iter().map(|row| &row[header_i]).collect();
        Ok(column)
    }

    /// Return a row of [`Table`] values from a row index.
    pub fn get_row(&self, i: usize) -> Result<&[T], Report> {
        self.rows
            .get(i)
            .map(|row| row.as_slice())
            .ok_or_else(|| eyre!("Row ({i}) does not exist in the table."))
    }

    /// Render the [`Table`] as markdown.
    ///
    /// ## Examples
    ///
    /// ```
    /// let mut table = strchive_table::Table::new();
    /// table.headers = vec!["1", "2", "3"];
    /// table.add_row(["A", "B", "C"])?;
    /// println!("{}", table.to_markdown());
    /// # Ok::<(), color_eyre::eyre::Report>(())
    /// ```
    ///
    /// | 1 | 2 | 3 |
    /// |---|---|---|
    /// | A | B | C |
    ///
    /// Pipes and line breaks inside values are escaped so that each row stays on one line.
    pub fn to_markdown(&self) -> String {
        let mut builder = tabled::builder::Builder::default();
        builder.push_record(self.headers.iter().map(markdown_cell));
        self.rows.iter().for_each(|row| {
            builder.push_record(row.iter().map(markdown_cell));
        });
        builder.build().with(Style::markdown()).to_string()
    }

    /// Write [`Table`] to a delimited file.
    ///
    /// If `delim` is not provided, it is chosen from the file extension (see [`get_delimiter`]).
    ///
    /// ## Examples
    ///
    /// ```
    /// use tempfile::NamedTempFile;
    ///
    /// let mut table = strchive_table::Table::new();
    /// table.headers = vec!["1", "2", "3"];
    /// table.add_row(["A", "B", "C"])?;
    ///
    /// let file = NamedTempFile::new()?;
    /// table.write(&file.path(), Some('\t'))?;
    /// # Ok::<(), color_eyre::eyre::Report>(())
    /// ```
    pub fn write<P>(&mut self, path: &P, delim: Option<char>) -> Result<(), Report>
    where
        P: AsRef<Path> + Debug,
    {
        let delim = match delim {
            Some(c) => c,
            None => get_delimiter(path)?,
        };
        let delim = u8::try_from(delim)
            .map_err(|_| eyre!("Table delimiter must be a single byte: {delim:?}"))?;

        // fields holding the delimiter, quotes or newlines are quoted
        let mut writer = csv::WriterBuilder::new()
            .delimiter(delim)
            .from_path(path)
            .wrap_err_with(|| eyre!("Unable to create file: {path:?}"))?;

        writer
            .write_record(self.headers.iter().map(|h| h.to_string()))
            .wrap_err_with(|| eyre!("Unable to write table headers: {path:?}"))?;
        for (i, row) in self.rows.iter().enumerate() {
            writer
                .write_record(row.iter().map(|v| v.to_string()))
                .wrap_err_with(|| eyre!("Unable to write table row {i}: {path:?}"))?;
        }
        writer.flush().wrap_err_with(|| eyre!("Unable to write file: {path:?}"))?;

        self.path = Some(path.as_ref().to_path_buf());
        Ok(())
    }
}

fn markdown_cell<T: Display>(value: T) -> String {
    value.to_string().replace('|', "\\|").replace("\r\n", " ").replace(['\n', '\r'], " ")
}

/// Returns the expected table delimiter from a file extension.
///
/// ## Examples
///
/// ```rust
/// use strchive_table::get_delimiter;
///
/// assert_eq!(get_delimiter(&"file.tsv")?, '\t');
/// assert_eq!(get_delimiter(&"file.csv")?, ',');
/// assert_eq!(get_delimiter(&"file.txt")?, '\t');
/// assert!(get_delimiter(&"file").is_err());
/// # Ok::<(), color_eyre::eyre::Report>(())
/// ```
pub fn get_delimiter<P>(path: &P) -> Result<char, Report>
where
    P: AsRef<Path> + Debug,
{
    let ext = path
        .as_ref()
        .extension()
        .wrap_err_with(|| format!("Failed to get file extension: {path:?}"))?
        .to_str()
        .wrap_err_with(|| format!("Failed to convert file extension to str: {path:?}"))?;
    // convert extension to the expected delimiter
    match ext {
        "tsv" | "txt" => Ok('\t'),
        "csv" => Ok(','),
        _ext => {
            Err(eyre!("Unknown file extension: {_ext:?}").suggestion("Options: tsv, csv, or txt"))
        }
    }
}

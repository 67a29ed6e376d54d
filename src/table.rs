//! In-memory table of stringified values loaded from delimited text files.
//!
//! Every record becomes one row labelled by its zero-based position. Cells are kept verbatim
//! as strings; nothing is type-inferred since the browser only ever displays them.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use thiserror::Error;
use tracing::{debug, instrument};

/// Errors that can occur while loading a [`Table`].
#[derive(Debug, Error)]
pub enum TableError {
    /// The source file could not be opened
    #[error("Failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source file is not valid delimited text
    #[error("Failed to parse {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// How to interpret the source file.
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    /// Treat the first record as column names
    pub has_headers: bool,
    /// Field delimiter byte
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            has_headers: true,
            delimiter: b',',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    name: String,
    labels: Vec<String>,
    columns: Vec<String>,
    cells: Vec<Vec<String>>,
}

impl Table {
    /// Build a table from already-split records. Short records are padded with empty cells.
    pub fn from_records(
        name: impl Into<String>,
        mut columns: Vec<String>,
        rows: Vec<Vec<String>>,
    ) -> Self {
        let width = rows
            .iter()
            .map(Vec::len)
            .max()
            .unwrap_or(0)
            .max(columns.len());

        columns.extend((columns.len()..width).map(|i| i.to_string()));

        let cells: Vec<Vec<String>> = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        let labels = (0..cells.len()).map(|i| i.to_string()).collect();

        Self {
            name: name.into(),
            labels,
            columns,
            cells,
        }
    }

    /// Load a delimited text file. The table is named after the path as given.
    #[instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_csv_path(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Self, TableError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let csv_err = |source| TableError::Csv {
            path: path.to_path_buf(),
            source,
        };

        let mut reader = ReaderBuilder::new()
            .has_headers(options.has_headers)
            .delimiter(options.delimiter)
            .flexible(true)
            .from_reader(file);

        let columns: Vec<String> = if options.has_headers {
            reader
                .headers()
                .map_err(csv_err)?
                .iter()
                .map(str::to_string)
                .collect()
        } else {
            Vec::new()
        };

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(csv_err)?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        let table = Self::from_records(path.display().to_string(), columns, rows);
        debug!(
            rows = table.row_count(),
            columns = table.column_count(),
            "Loaded table"
        );
        Ok(table)
    }

    /// Buffer name shown in the footer.
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Row identifiers, in display order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Column names, in display order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.cells.get(row)?.get(column).map(String::as_str)
    }
}

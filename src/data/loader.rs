//! CSV Data Loader Module
//! Handles CSV parsing into raw tables and CSV export of derived views.

use crate::config::DashboardConfig;
use crate::data::table::{Cell, Column, Table};
use log::info;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("File size exceeds maximum limit of {0}MB")]
    FileTooLarge(u64),
    #[error("Empty CSV file detected")]
    EmptyFile,
}

/// Parses CSV input into a raw table of text cells and serializes tables
/// back to CSV. Type inference happens later, in the cleaning pass.
pub struct DataLoader;

impl DataLoader {
    /// Parse CSV bytes into a raw table. Every cell starts as `Text`;
    /// empty fields become `Missing`. Fails on zero rows or zero columns.
    pub fn parse_bytes(bytes: &[u8]) -> Result<Table, LoaderError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(bytes);

        let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
        if headers.is_empty() {
            return Err(LoaderError::EmptyFile);
        }

        let mut cells: Vec<Vec<Cell>> = vec![Vec::new(); headers.len()];
        for record in reader.records() {
            let record = record?;
            for (idx, column_cells) in cells.iter_mut().enumerate() {
                let field = record.get(idx).unwrap_or("");
                if field.is_empty() {
                    column_cells.push(Cell::Missing);
                } else {
                    column_cells.push(Cell::Text(field.to_string()));
                }
            }
        }

        let table = Table::new(
            headers
                .into_iter()
                .zip(cells)
                .map(|(name, column_cells)| Column::new(name, column_cells))
                .collect(),
        );

        if table.row_count() == 0 {
            return Err(LoaderError::EmptyFile);
        }

        info!(
            "Parsed {} rows, {} columns",
            table.row_count(),
            table.column_count()
        );
        Ok(table)
    }

    /// Parse a CSV file from disk, enforcing the configured size limit.
    pub fn parse_path(path: &Path, config: &DashboardConfig) -> Result<Table, LoaderError> {
        let size_mb = std::fs::metadata(path)?.len() / (1024 * 1024);
        if size_mb > config.max_file_size_mb {
            return Err(LoaderError::FileTooLarge(config.max_file_size_mb));
        }
        let bytes = std::fs::read(path)?;
        Self::parse_bytes(&bytes)
    }

    /// Serialize a table to CSV text: header row, no index column. Missing
    /// cells render as empty fields.
    pub fn export_csv(table: &Table) -> String {
        let mut writer = csv::Writer::from_writer(Vec::new());

        let headers: Vec<&str> = table.column_names();
        // Writes into a Vec sink cannot fail on I/O.
        let _ = writer.write_record(&headers);

        for row in 0..table.row_count() {
            let record: Vec<String> = table
                .columns()
                .iter()
                .map(|column| column.cells()[row].display())
                .collect();
            let _ = writer.write_record(&record);
        }

        let bytes = writer.into_inner().unwrap_or_default();
        String::from_utf8(bytes).unwrap_or_default()
    }
}

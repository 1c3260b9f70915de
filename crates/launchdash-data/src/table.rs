//! The immutable in-memory launch table.

use std::io::Read;
use std::path::Path;

use launchdash_common::{DashError, PayloadRange, Result};
use tracing::{debug, info};

use crate::record::LaunchRecord;

/// Columns that must be present in the CSV header.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    "Launch Site",
    "Payload Mass (kg)",
    "class",
    "Booster Version Category",
];

/// All launch records plus the summaries computed once at load time.
#[derive(Debug, Clone)]
pub struct LaunchTable {
    records: Vec<LaunchRecord>,
    /// Distinct sites in order of first appearance
    sites: Vec<String>,
    payload_min: f64,
    payload_max: f64,
}

impl LaunchTable {
    /// Load the table from a CSV file on disk.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading launch records from {:?}", path);

        let content = tokio::fs::read_to_string(path).await?;
        let table = Self::from_reader(content.as_bytes())?;

        let (min, max) = table.payload_bounds();
        info!(
            "Loaded {} launch records across {} sites from {:?} (payload {}..{} kg)",
            table.len(),
            table.sites.len(),
            path,
            min,
            max
        );
        Ok(table)
    }

    /// Parse CSV content with a header row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(DashError::MissingColumn(column.to_string()));
            }
        }

        let records = reader
            .deserialize::<LaunchRecord>()
            .enumerate()
            .map(|(i, result)| {
                result.map_err(|e| DashError::InvalidRecord {
                    row: i + 1,
                    message: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_records(records)
    }

    /// Build a table from already-parsed records.
    ///
    /// `InvalidRecord::row` is the 1-based record number, not counting the
    /// CSV header.
    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(DashError::EmptyDataset);
        }

        let mut sites: Vec<String> = Vec::new();
        let mut payload_min = f64::INFINITY;
        let mut payload_max = f64::NEG_INFINITY;

        for (i, record) in records.iter().enumerate() {
            record
                .validate()
                .map_err(|message| DashError::InvalidRecord { row: i + 1, message })?;
            if !sites.iter().any(|s| s == &record.launch_site) {
                sites.push(record.launch_site.clone());
            }
            payload_min = payload_min.min(record.payload_mass_kg);
            payload_max = payload_max.max(record.payload_mass_kg);
        }

        Ok(Self {
            records,
            sites,
            payload_min,
            payload_max,
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a loaded table; empty datasets are rejected.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Observed `(min, max)` of the payload column.
    pub fn payload_bounds(&self) -> (f64, f64) {
        (self.payload_min, self.payload_max)
    }

    /// The observed payload bounds as a range covering every row.
    pub fn full_range(&self) -> Result<PayloadRange> {
        PayloadRange::new(self.payload_min, self.payload_max)
    }

    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn has_site(&self, site: &str) -> bool {
        self.sites.iter().any(|s| s == site)
    }

    /// Rows whose payload lies in `range`, in table order.
    pub fn in_payload_range(&self, range: PayloadRange) -> impl Iterator<Item = &LaunchRecord> {
        self.records
            .iter()
            .filter(move |r| range.contains(r.payload_mass_kg))
    }

    /// Rows launched from `site`, in table order.
    pub fn at_site<'a>(&'a self, site: &'a str) -> impl Iterator<Item = &'a LaunchRecord> + 'a {
        self.records.iter().filter(move |r| r.launch_site == site)
    }

    pub fn success_count(&self) -> usize {
        self.records.iter().filter(|r| r.class.is_success()).count()
    }
}

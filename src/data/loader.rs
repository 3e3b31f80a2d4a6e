//! Dataset loading with the polars backend.
//!
//! The file is read eagerly once at startup, projected down to the three
//! columns the dashboard uses, and converted into [`Observation`] rows.
//! Delimiter selection follows the file extension (`.tsv` uses tab).

use crate::constants::{COL_AVERAGE_PRICE, COL_REGION, COL_YEAR};
use crate::data::error::{DataLoadError, DataResult};
use crate::types::Observation;
use polars::prelude::*;
use std::path::Path;

/// Supported on-disk formats
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataFormat {
    Csv,
    Tsv,
    Json,
}

impl DataFormat {
    /// Detect the format from the file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "csv" => Some(DataFormat::Csv),
            "tsv" => Some(DataFormat::Tsv),
            "json" => Some(DataFormat::Json),
            _ => None,
        }
    }
}

/// Check if a file path is a loadable data file (CSV/TSV/JSON)
pub fn is_data_file(path: &Path) -> bool {
    DataFormat::from_path(path).is_some()
}

/// Read `path` into observation rows.
///
/// Rows with a null in any required column are skipped; no other checks are
/// made on the values.
pub fn load_observations(path: &Path) -> DataResult<Vec<Observation>> {
    let start = std::time::Instant::now();

    if !path.exists() {
        return Err(DataLoadError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let format = DataFormat::from_path(path).ok_or_else(|| DataLoadError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let frame = match format {
        DataFormat::Csv => read_delimited(path, b',')?,
        DataFormat::Tsv => read_delimited(path, b'\t')?,
        DataFormat::Json => read_json(path)?,
    };

    let rows = frame_to_observations(frame)?;

    tracing::debug!(
        "Loaded {} with {} rows in {:?}",
        path.display(),
        rows.len(),
        start.elapsed()
    );

    Ok(rows)
}

fn read_delimited(path: &Path, separator: u8) -> DataResult<LazyFrame> {
    let lf = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_separator(separator)
        .with_infer_schema_length(Some(1000))
        .finish()?;
    Ok(lf)
}

fn read_json(path: &Path) -> DataResult<LazyFrame> {
    let file = std::fs::File::open(path)?;
    let df = JsonReader::new(file)
        .with_json_format(JsonFormat::Json)
        .infer_schema_len(std::num::NonZeroUsize::new(1000))
        .finish()?;
    Ok(df.lazy())
}

/// Project the frame onto the dashboard columns with fixed dtypes
fn frame_to_observations(frame: LazyFrame) -> DataResult<Vec<Observation>> {
    let df = frame
        .select([
            col(COL_REGION).cast(DataType::String),
            col(COL_YEAR).cast(DataType::Int64),
            col(COL_AVERAGE_PRICE).cast(DataType::Float64),
        ])
        .collect()?;

    let regions = df
        .column(COL_REGION)?
        .as_materialized_series()
        .str()
        .map_err(|_| DataLoadError::Column {
            column: COL_REGION,
            expected: "text",
        })?;
    let years = df
        .column(COL_YEAR)?
        .as_materialized_series()
        .i64()
        .map_err(|_| DataLoadError::Column {
            column: COL_YEAR,
            expected: "an integer",
        })?;
    let prices = df
        .column(COL_AVERAGE_PRICE)?
        .as_materialized_series()
        .f64()
        .map_err(|_| DataLoadError::Column {
            column: COL_AVERAGE_PRICE,
            expected: "a number",
        })?;

    let mut skipped = 0usize;
    let mut rows = Vec::with_capacity(df.height());
    for ((region, year), price) in regions
        .into_iter()
        .zip(years.into_iter())
        .zip(prices.into_iter())
    {
        match (region, year, price) {
            (Some(region), Some(year), Some(price)) => {
                rows.push(Observation::new(region, year, price));
            }
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        tracing::debug!(skipped, "Skipped rows with missing values");
    }

    Ok(rows)
}

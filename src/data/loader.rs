use std::path::Path;

use anyhow::{bail, Context, Result};
use arrow::array::{Array, ArrayRef, Float64Array, Int64Array, StringArray};
use arrow::compute::cast;
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;

use super::model::{LaunchDataset, LaunchRecord};

pub const LAUNCH_SITE_COL: &str = "Launch Site";
pub const PAYLOAD_COL: &str = "Payload Mass (kg)";
pub const CLASS_COL: &str = "class";
pub const BOOSTER_CATEGORY_COL: &str = "Booster Version Category";

const REQUIRED_COLUMNS: [&str; 4] = [LAUNCH_SITE_COL, PAYLOAD_COL, CLASS_COL, BOOSTER_CATEGORY_COL];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the launch dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row containing the four required columns (others ignored)
/// * `.json`    – `[{ "Launch Site": ..., "Payload Mass (kg)": ..., ... }, ...]`
/// * `.parquet` – flat columns with the same names
pub fn load_file(path: &Path) -> Result<LaunchDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
    .with_context(|| format!("loading {}", path.display()))?;

    log::info!(
        "Loaded {} launches from {} ({} sites)",
        dataset.len(),
        path.display(),
        dataset.sites.len()
    );
    Ok(dataset)
}

/// One row as it appears in CSV / JSON sources.
#[derive(Debug, Deserialize)]
struct RawLaunchRow {
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    class: i64,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: String,
}

impl RawLaunchRow {
    fn into_record(self) -> Result<LaunchRecord> {
        LaunchRecord::new(
            self.launch_site,
            self.payload_mass_kg,
            self.class,
            self.booster_version_category,
        )
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<LaunchDataset> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers = reader.headers().context("reading CSV headers")?.clone();

    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            bail!("CSV missing '{col}' column");
        }
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<RawLaunchRow>().enumerate() {
        let row = result.with_context(|| format!("CSV row {row_no}"))?;
        records.push(row.into_record().with_context(|| format!("CSV row {row_no}"))?);
    }

    Ok(LaunchDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, the default `df.to_json(orient='records')`.
fn load_json(path: &Path) -> Result<LaunchDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let rows: Vec<RawLaunchRow> = serde_json::from_str(&text).context("parsing JSON")?;

    let records = rows
        .into_iter()
        .enumerate()
        .map(|(i, row)| row.into_record().with_context(|| format!("Row {i}")))
        .collect::<Result<Vec<_>>>()?;

    Ok(LaunchDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with one flat column per required field.
///
/// String columns may be Utf8 or LargeUtf8; numeric columns any type Arrow
/// can cast to Float64 / Int64 (Pandas and Polars both qualify).
fn load_parquet(path: &Path) -> Result<LaunchDataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;

        let sites = typed_column::<StringArray>(&batch, LAUNCH_SITE_COL, &DataType::Utf8)?;
        let payloads = typed_column::<Float64Array>(&batch, PAYLOAD_COL, &DataType::Float64)?;
        let classes = typed_column::<Int64Array>(&batch, CLASS_COL, &DataType::Int64)?;
        let boosters =
            typed_column::<StringArray>(&batch, BOOSTER_CATEGORY_COL, &DataType::Utf8)?;

        for row in 0..batch.num_rows() {
            if sites.is_null(row)
                || payloads.is_null(row)
                || classes.is_null(row)
                || boosters.is_null(row)
            {
                bail!("Row {}: null value in a required column", records.len());
            }
            let record = LaunchRecord::new(
                sites.value(row),
                payloads.value(row),
                classes.value(row),
                boosters.value(row),
            )
            .with_context(|| format!("Row {}", records.len()))?;
            records.push(record);
        }
    }

    Ok(LaunchDataset::from_records(records))
}

/// Locate `name`, cast it to `target` and downcast to the matching array type.
fn typed_column<A: Array + Clone + 'static>(
    batch: &RecordBatch,
    name: &str,
    target: &DataType,
) -> Result<A> {
    let idx = batch
        .schema()
        .index_of(name)
        .map_err(|_| anyhow::anyhow!("Parquet file missing '{name}' column"))?;
    let casted: ArrayRef = cast(batch.column(idx), target)
        .with_context(|| format!("column '{name}' cannot be read as {target:?}"))?;
    casted
        .as_any()
        .downcast_ref::<A>()
        .cloned()
        .with_context(|| format!("column '{name}' has unexpected type"))
}

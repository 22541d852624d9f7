//! CSV loading

use arrow::compute::concat_batches;
use arrow::csv::reader::Format;
use arrow::csv::ReaderBuilder;
use arrow::record_batch::RecordBatch;
use std::fs::File;
use std::io::{BufReader, Seek};
use std::path::Path;
use std::sync::Arc;

use crate::{Dataset, Result};

/// Options for reading a CSV file
#[derive(Debug, Clone)]
pub struct CsvOptions {
    /// First line holds the column names
    pub has_header: bool,
    /// Field delimiter
    pub delimiter: u8,
    /// Rows sampled for type inference; `None` reads the whole file
    pub max_infer_records: Option<usize>,
    /// Rows per decoded batch
    pub batch_size: usize,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            has_header: true,
            delimiter: b',',
            max_infer_records: Some(5000),
            batch_size: 8192,
        }
    }
}

/// Read a whole CSV file into a [`Dataset`], inferring column types
pub fn load_csv(path: &Path, options: &CsvOptions) -> Result<Dataset> {
    let mut file = File::open(path)?;

    let format = Format::default()
        .with_header(options.has_header)
        .with_delimiter(options.delimiter);
    let (schema, sampled) = format.infer_schema(BufReader::new(&file), options.max_infer_records)?;
    let schema = Arc::new(schema);
    tracing::debug!("Inferred {} columns from {} rows of {}", schema.fields().len(), sampled, path.display());

    file.rewind()?;
    let reader = ReaderBuilder::new(schema.clone())
        .with_format(format)
        .with_batch_size(options.batch_size)
        .build(BufReader::new(file))?;
    let batches = reader.collect::<std::result::Result<Vec<RecordBatch>, _>>()?;
    let batch = concat_batches(&schema, &batches)?;

    tracing::info!("Loaded {} rows from {}", batch.num_rows(), path.display());
    Ok(Dataset::new(batch))
}

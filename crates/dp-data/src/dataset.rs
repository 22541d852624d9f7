//! In-memory dataset backed by an Arrow record batch

use arrow::array::{Array, ArrayRef, AsArray};
use arrow::array::BooleanArray;
use arrow::compute::kernels::nullif::nullif;
use arrow::compute::{cast, sort_to_indices, take, SortOptions};
use arrow::datatypes::{DataType, Float64Type, Int64Type, UInt64Type};
use arrow::record_batch::RecordBatch;
use arrow::util::display::array_value_to_string;
use serde_json::Value;

use crate::kind::{self, ColumnKind};
use crate::{stats, DataError, Result};

/// A table of named, typed columns
#[derive(Debug, Clone)]
pub struct Dataset {
    batch: RecordBatch,
}

impl Dataset {
    /// Wrap an existing record batch
    pub fn new(batch: RecordBatch) -> Self {
        Self { batch }
    }

    /// Build a dataset from named columns of equal length
    pub fn from_columns<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, ArrayRef)>,
        S: AsRef<str>,
    {
        let batch = RecordBatch::try_from_iter(columns)?;
        Ok(Self { batch })
    }

    pub fn num_rows(&self) -> usize {
        self.batch.num_rows()
    }

    /// Column names in source order
    pub fn column_names(&self) -> Vec<String> {
        self.batch
            .schema()
            .fields()
            .iter()
            .map(|f| f.name().clone())
            .collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.batch.column_by_name(name).is_some()
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Result<&ArrayRef> {
        self.batch
            .column_by_name(name)
            .ok_or_else(|| DataError::ColumnNotFound(name.to_string()))
    }

    /// Type category of a column
    pub fn kind(&self, name: &str) -> Result<ColumnKind> {
        Ok(ColumnKind::of(self.column(name)?.data_type()))
    }

    /// Whether a column holds floating point values
    pub fn is_float(&self, name: &str) -> Result<bool> {
        Ok(kind::is_float(self.column(name)?.data_type()))
    }

    /// Names of the columns that can drive a channel: numeric, boolean,
    /// datetime and string columns, in source order
    pub fn plottable_columns(&self) -> Vec<String> {
        self.columns_where(ColumnKind::is_plottable)
    }

    /// Names of the numeric (including boolean) columns, in source order
    pub fn numeric_columns(&self) -> Vec<String> {
        self.columns_where(ColumnKind::is_numeric)
    }

    fn columns_where(&self, predicate: impl Fn(ColumnKind) -> bool) -> Vec<String> {
        self.batch
            .schema()
            .fields()
            .iter()
            .filter(|f| predicate(ColumnKind::of(f.data_type())))
            .map(|f| f.name().clone())
            .collect()
    }

    /// Project the dataset onto the named columns, in the given order
    pub fn select(&self, names: &[String]) -> Result<Self> {
        let schema = self.batch.schema();
        let indices = names
            .iter()
            .map(|name| {
                schema
                    .index_of(name)
                    .map_err(|_| DataError::ColumnNotFound(name.clone()))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            batch: self.batch.project(&indices)?,
        })
    }

    /// Reorder all rows by one column. Missing values, NaN included, go last
    /// in both directions.
    pub fn sort_by(&self, name: &str, descending: bool) -> Result<Self> {
        let column = self.column(name)?;
        let key = if kind::is_float(column.data_type()) {
            let values = cast(column, &DataType::Float64)?;
            let nan: BooleanArray = values
                .as_primitive::<Float64Type>()
                .iter()
                .map(|value| value.map(f64::is_nan))
                .collect();
            nullif(values.as_ref(), &nan)?
        } else {
            column.clone()
        };

        let options = SortOptions {
            descending,
            nulls_first: false,
        };
        let indices = sort_to_indices(key.as_ref(), Some(options), None)?;

        let columns = self
            .batch
            .columns()
            .iter()
            .map(|column| take(column.as_ref(), &indices, None))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        tracing::debug!("Sorted {} rows by '{}' (descending: {})", self.num_rows(), name, descending);
        Ok(Self {
            batch: RecordBatch::try_new(self.batch.schema(), columns)?,
        })
    }

    /// Values of a numeric or boolean column as `f64`; booleans become 0 and 1
    pub fn numeric_values(&self, name: &str) -> Result<Vec<Option<f64>>> {
        let column = self.column(name)?;
        let kind = ColumnKind::of(column.data_type());
        if !kind.is_numeric() {
            return Err(DataError::NotNumeric {
                column: name.to_string(),
                kind,
            });
        }

        let values = cast(column, &DataType::Float64)?;
        Ok(values.as_primitive::<Float64Type>().iter().collect())
    }

    /// Smallest value of a numeric column
    pub fn min(&self, name: &str) -> Result<Option<f64>> {
        Ok(stats::min(&self.numeric_values(name)?))
    }

    /// Largest value of a numeric column
    pub fn max(&self, name: &str) -> Result<Option<f64>> {
        Ok(stats::max(&self.numeric_values(name)?))
    }

    /// Median of a numeric column
    pub fn median(&self, name: &str) -> Result<Option<f64>> {
        Ok(stats::median(&self.numeric_values(name)?))
    }

    /// Cells of a column as JSON values, `null` for missing entries.
    ///
    /// Integers stay integral, floats become JSON numbers (NaN becomes
    /// `null`), booleans stay booleans and everything else is rendered
    /// through Arrow's display formatting.
    pub fn json_values(&self, name: &str) -> Result<Vec<Value>> {
        let column = self.column(name)?;
        let values = match column.data_type() {
            DataType::Int8 | DataType::Int16 | DataType::Int32 | DataType::Int64 => {
                let ints = cast(column, &DataType::Int64)?;
                ints.as_primitive::<Int64Type>()
                    .iter()
                    .map(|v| v.map(Value::from).unwrap_or(Value::Null))
                    .collect()
            }
            DataType::UInt8 | DataType::UInt16 | DataType::UInt32 | DataType::UInt64 => {
                let ints = cast(column, &DataType::UInt64)?;
                ints.as_primitive::<UInt64Type>()
                    .iter()
                    .map(|v| v.map(Value::from).unwrap_or(Value::Null))
                    .collect()
            }
            DataType::Boolean => column
                .as_boolean()
                .iter()
                .map(|v| v.map(Value::Bool).unwrap_or(Value::Null))
                .collect(),
            data_type if ColumnKind::of(data_type) == ColumnKind::Numeric => self
                .numeric_values(name)?
                .into_iter()
                .map(|v| v.map(float_value).unwrap_or(Value::Null))
                .collect(),
            _ => (0..column.len())
                .map(|i| {
                    if column.is_null(i) {
                        Ok(Value::Null)
                    } else {
                        array_value_to_string(column, i).map(Value::String)
                    }
                })
                .collect::<std::result::Result<Vec<_>, _>>()?,
        };
        Ok(values)
    }
}

/// A float as a JSON number; non-finite values have no JSON form
pub fn float_value(value: f64) -> Value {
    serde_json::Number::from_f64(value)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

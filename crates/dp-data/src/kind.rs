//! Column type categories

use arrow::datatypes::DataType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse type category of a column, used to decide which channels it may drive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnKind {
    Numeric,
    Boolean,
    Datetime,
    String,
    /// Lists, structs, binary blobs and anything else a channel cannot use
    Other,
}

impl ColumnKind {
    /// Classify an Arrow data type
    pub fn of(data_type: &DataType) -> Self {
        match data_type {
            DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float16
            | DataType::Float32
            | DataType::Float64
            | DataType::Decimal128(_, _)
            | DataType::Decimal256(_, _) => ColumnKind::Numeric,
            DataType::Boolean => ColumnKind::Boolean,
            DataType::Date32 | DataType::Date64 | DataType::Timestamp(_, _) => ColumnKind::Datetime,
            DataType::Utf8 | DataType::LargeUtf8 | DataType::Utf8View => ColumnKind::String,
            DataType::Dictionary(_, values) => match ColumnKind::of(values) {
                ColumnKind::String => ColumnKind::String,
                _ => ColumnKind::Other,
            },
            _ => ColumnKind::Other,
        }
    }

    /// Whether a column of this kind may be placed on any channel
    pub fn is_plottable(self) -> bool {
        !matches!(self, ColumnKind::Other)
    }

    /// Numeric in the loose sense: numbers and booleans both qualify
    /// for the size and color channels
    pub fn is_numeric(self) -> bool {
        matches!(self, ColumnKind::Numeric | ColumnKind::Boolean)
    }

    /// Whether a log transform makes sense for this kind
    pub fn supports_log(self) -> bool {
        matches!(self, ColumnKind::Numeric)
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnKind::Numeric => "numeric",
            ColumnKind::Boolean => "boolean",
            ColumnKind::Datetime => "datetime",
            ColumnKind::String => "string",
            ColumnKind::Other => "unsupported",
        };
        f.write_str(name)
    }
}

/// Whether the data type holds floating point values
pub fn is_float(data_type: &DataType) -> bool {
    matches!(
        data_type,
        DataType::Float16 | DataType::Float32 | DataType::Float64
    )
}

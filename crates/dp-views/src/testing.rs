//! Shared fixtures for unit tests

use arrow::array::{ArrayRef, BooleanArray, Float64Array, Int64Array, ListArray, StringArray};
use arrow::datatypes::Int32Type;
use dp_data::Dataset;
use std::sync::Arc;

/// Four planets with string, float, integer, boolean and list columns
pub fn planets() -> Dataset {
    let tags = ListArray::from_iter_primitive::<Int32Type, _, _>(vec![
        Some(vec![Some(1)]),
        None,
        Some(vec![Some(2)]),
        None,
    ]);
    Dataset::from_columns(vec![
        ("pl_name", Arc::new(StringArray::from(vec!["a b", "c d", "e f", "g h"])) as ArrayRef),
        ("host", Arc::new(StringArray::from(vec!["sun", "sun", "vega", "rigel"])) as ArrayRef),
        ("tags", Arc::new(tags) as ArrayRef),
        ("mass", Arc::new(Float64Array::from(vec![Some(1.0), Some(10.0), None, Some(100.0)])) as ArrayRef),
        ("radius", Arc::new(Float64Array::from(vec![0.5, 1.0, 1.5, 2.0])) as ArrayRef),
        ("moons", Arc::new(Int64Array::from(vec![0, 2, 1, 5])) as ArrayRef),
        ("habitable", Arc::new(BooleanArray::from(vec![false, true, true, false])) as ArrayRef),
    ])
    .expect("fixture columns have equal length")
}

//! Marker size and color scaling

use dp_data::dataset::float_value;
use dp_data::{stats, ColumnKind, Dataset};
use serde_json::Value;

use crate::{Channel, Result, ViewError};

/// Marker size range for linear size channels
pub const SIZE_RANGE: (f64, f64) = (4.0, 50.0);

/// Marker size range for log-scaled size channels
pub const LOG_SIZE_RANGE: (f64, f64) = (10.0, 50.0);

/// Marker sizes for the size channel.
///
/// Values are rescaled linearly into [`SIZE_RANGE`], or log-transformed
/// first and rescaled into [`LOG_SIZE_RANGE`]. Gaps are filled with the
/// median of the rescaled sizes. A constant column maps to the middle of
/// the range.
pub fn normalize_size(dataset: &Dataset, channel: &Channel) -> Result<Vec<f64>> {
    let kind = dataset.kind(&channel.name)?;
    if !kind.is_numeric() {
        return Err(ViewError::NonNumericColumn {
            column: channel.name.clone(),
            kind,
        });
    }

    let values = dataset.numeric_values(&channel.name)?;
    let (values, range) = if channel.log {
        let logged = shift_non_negative(&values)
            .into_iter()
            .map(|v| v.map(f64::ln))
            .collect::<Vec<_>>();
        (logged, LOG_SIZE_RANGE)
    } else {
        (values, SIZE_RANGE)
    };

    let scaled = rescale(&values, range);
    let fill = stats::median(&scaled).unwrap_or_else(|| midpoint(range));
    Ok(scaled.into_iter().map(|v| v.unwrap_or(fill)).collect())
}

/// Marker color values for the color channel.
///
/// Booleans map to 0 and 1, log-flagged numeric columns are shifted to be
/// non-negative and take a base-10 log, and anything else passes through
/// unchanged. Gaps stay `null`.
pub fn normalize_color(dataset: &Dataset, channel: &Channel) -> Result<Vec<Value>> {
    let values = match dataset.kind(&channel.name)? {
        ColumnKind::Boolean => dataset
            .numeric_values(&channel.name)?
            .into_iter()
            .map(|v| v.map(|v| Value::from(v as i64)).unwrap_or(Value::Null))
            .collect(),
        ColumnKind::Numeric if channel.log => {
            let values = dataset.numeric_values(&channel.name)?;
            shift_non_negative(&values)
                .into_iter()
                .map(|v| v.map(|v| float_value(v.log10())).unwrap_or(Value::Null))
                .collect()
        }
        _ => dataset.json_values(&channel.name)?,
    };
    Ok(values)
}

/// Shift values so the minimum is non-negative: `v - min + |min|`
fn shift_non_negative(values: &[Option<f64>]) -> Vec<Option<f64>> {
    match stats::min(values) {
        Some(min) => values.iter().map(|v| v.map(|v| v - min + min.abs())).collect(),
        None => values.to_vec(),
    }
}

/// Linear map of the finite values onto `range`; non-finite values become gaps
fn rescale(values: &[Option<f64>], (low, high): (f64, f64)) -> Vec<Option<f64>> {
    let finite = |v: &Option<f64>| v.filter(|v| v.is_finite());
    let (min, max) = match (stats::min(values), stats::max(values)) {
        (Some(min), Some(max)) => (min, max),
        _ => return vec![None; values.len()],
    };

    let span = max - min;
    if span == 0.0 {
        tracing::debug!("Constant size column, using the middle of {:?}", (low, high));
        return values
            .iter()
            .map(|v| finite(v).map(|_| midpoint((low, high))))
            .collect();
    }

    values
        .iter()
        .map(|v| finite(v).map(|v| (v - min) / span * (high - low) + low))
        .collect()
}

fn midpoint((low, high): (f64, f64)) -> f64 {
    (low + high) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::planets;
    use arrow::array::{ArrayRef, Float64Array, Int64Array};
    use serde_json::json;
    use std::sync::Arc;

    fn single(name: &str, values: Vec<Option<f64>>) -> Dataset {
        Dataset::from_columns(vec![(name, Arc::new(Float64Array::from(values)) as ArrayRef)]).unwrap()
    }

    #[test]
    fn test_linear_size_spans_range() {
        let data = single("v", vec![Some(-3.0), Some(7.0), Some(2.0), Some(17.0)]);
        let sizes = normalize_size(&data, &Channel::new("v")).unwrap();

        assert_eq!(sizes[0], 4.0);
        assert_eq!(sizes[3], 50.0);
        assert!((sizes[1] - 27.0).abs() < 1e-9);
        assert!(sizes.iter().all(|s| (4.0..=50.0).contains(s)));
    }

    #[test]
    fn test_log_size_spans_range() {
        let data = single("v", vec![Some(1.0), Some(10.0), Some(100.0), Some(1000.0)]);
        let sizes = normalize_size(&data, &Channel::log("v")).unwrap();

        assert_eq!(sizes[0], 10.0);
        assert_eq!(sizes[3], 50.0);
        assert!(sizes.windows(2).all(|w| w[0] < w[1]));
        assert!(sizes.iter().all(|s| (10.0..=50.0).contains(s)));
    }

    #[test]
    fn test_log_size_with_negative_values() {
        // min -2 shifts every value by +4
        let data = single("v", vec![Some(-2.0), Some(0.0), Some(4.0)]);
        let sizes = normalize_size(&data, &Channel::log("v")).unwrap();

        assert_eq!(sizes[0], 10.0);
        assert_eq!(sizes[2], 50.0);
        let expected = (4f64.ln() - 2f64.ln()) / (8f64.ln() - 2f64.ln()) * 40.0 + 10.0;
        assert!((sizes[1] - expected).abs() < 1e-9);
    }

    #[test]
    fn test_log_size_of_zero_stays_finite() {
        let data = single("v", vec![Some(0.0), Some(1.0), Some(10.0), Some(100.0)]);
        let sizes = normalize_size(&data, &Channel::log("v")).unwrap();

        assert!(sizes.iter().all(|s| s.is_finite()));
        // ln(0) has no size of its own and takes the median of the rest
        assert!((sizes[0] - 30.0).abs() < 1e-9);
        assert_eq!(sizes[0], sizes[2]);
    }

    #[test]
    fn test_missing_sizes_take_rescaled_median() {
        let data = single("v", vec![Some(0.0), None, Some(10.0), Some(20.0)]);
        let sizes = normalize_size(&data, &Channel::new("v")).unwrap();
        assert_eq!(sizes, vec![4.0, 27.0, 27.0, 50.0]);

        let data = single("v", vec![Some(0.0), None, Some(1.0), Some(10.0)]);
        let sizes = normalize_size(&data, &Channel::new("v")).unwrap();
        let median = 1.0 / 10.0 * 46.0 + 4.0;
        assert!((sizes[1] - median).abs() < 1e-9);
    }

    #[test]
    fn test_constant_column_uses_mid_size() {
        let data = single("v", vec![Some(5.0), Some(5.0), None]);
        assert_eq!(normalize_size(&data, &Channel::new("v")).unwrap(), vec![27.0; 3]);
        assert_eq!(normalize_size(&data, &Channel::log("v")).unwrap(), vec![30.0; 3]);
    }

    #[test]
    fn test_all_missing_sizes() {
        let data = single("v", vec![None, None]);
        assert_eq!(normalize_size(&data, &Channel::new("v")).unwrap(), vec![27.0, 27.0]);
    }

    #[test]
    fn test_integer_and_boolean_sizes() {
        let data = Dataset::from_columns(vec![(
            "n",
            Arc::new(Int64Array::from(vec![1, 3, 2])) as ArrayRef,
        )])
        .unwrap();
        assert_eq!(normalize_size(&data, &Channel::new("n")).unwrap(), vec![4.0, 50.0, 27.0]);

        let data = planets();
        assert_eq!(
            normalize_size(&data, &Channel::new("habitable")).unwrap(),
            vec![4.0, 50.0, 50.0, 4.0]
        );
    }

    #[test]
    fn test_size_rejects_strings() {
        let data = planets();
        let result = normalize_size(&data, &Channel::new("host"));
        assert!(matches!(
            result,
            Err(ViewError::NonNumericColumn { kind: ColumnKind::String, .. })
        ));
    }

    #[test]
    fn test_boolean_colors() {
        let data = planets();
        let colors = normalize_color(&data, &Channel::new("habitable")).unwrap();
        assert_eq!(colors, vec![json!(0), json!(1), json!(1), json!(0)]);
    }

    #[test]
    fn test_log_colors() {
        let data = single("v", vec![Some(1.0), Some(10.0), None, Some(1000.0)]);
        let colors = normalize_color(&data, &Channel::log("v")).unwrap();
        assert_eq!(colors[2], Value::Null);
        let logged: Vec<f64> = [0, 1, 3].iter().map(|&i| colors[i].as_f64().unwrap()).collect();
        for (value, expected) in logged.iter().zip([0.0, 1.0, 3.0]) {
            assert!((value - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_colors_pass_through() {
        let data = planets();
        let colors = normalize_color(&data, &Channel::new("mass")).unwrap();
        assert_eq!(colors, vec![json!(1.0), json!(10.0), Value::Null, json!(100.0)]);

        let colors = normalize_color(&data, &Channel::new("host")).unwrap();
        assert_eq!(colors[2], json!("vega"));
    }
}

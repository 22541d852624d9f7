//! Hover template and custom data assembly

use dp_data::Dataset;
use serde::Serialize;
use serde_json::Value;

use crate::Result;

/// Number of leading hover columns with a fixed layout: title, x and y
const FIXED_COLUMNS: usize = 3;

/// Per-point hover text description
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoverInfo {
    /// Hover template with `%{customdata[i]}` placeholders
    pub template: String,
    /// Columns exposed as custom data, in placeholder order
    pub columns: Vec<String>,
    /// Row-major custom data table
    pub rows: Vec<Vec<Value>>,
}

/// Drop repeated names, keeping the first occurrence of each
pub fn remove_duplicates<I, S>(columns: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut unique: Vec<String> = Vec::new();
    for column in columns {
        let column = column.into();
        if !unique.contains(&column) {
            unique.push(column);
        }
    }
    unique
}

/// Build the hover template and custom data for `columns`.
///
/// `columns` must already be de-duplicated and start with the title, x and
/// y columns. The title is shown large, x and y with 4 significant digits,
/// and each further column gets one `name: value` line, formatted to 4
/// significant digits when it holds floats.
pub fn build(dataset: &Dataset, columns: Vec<String>, x: &str, y: &str) -> Result<HoverInfo> {
    let mut template = format!(
        "<b><span style='font-size: 1.8em;'>%{{customdata[0]}}</span></b><br>\
         <b>{x}:</b> %{{customdata[1]:.4g}}<br>\
         <b>{y}:</b> %{{customdata[2]:.4g}}<br>"
    );
    for (i, column) in columns.iter().enumerate().skip(FIXED_COLUMNS) {
        let format = if dataset.is_float(column)? { ":.4g" } else { "" };
        template.push_str(&format!("<b>{column}:</b> %{{customdata[{i}]{format}}}<br>"));
    }

    let rows = custom_data(dataset, &columns)?;
    Ok(HoverInfo {
        template,
        columns,
        rows,
    })
}

/// Row-major table of the given columns' values
pub fn custom_data(dataset: &Dataset, columns: &[String]) -> Result<Vec<Vec<Value>>> {
    let values = columns
        .iter()
        .map(|column| dataset.json_values(column))
        .collect::<Result<Vec<_>, _>>()?;

    let rows = (0..dataset.num_rows())
        .map(|row| values.iter().map(|column| column[row].clone()).collect())
        .collect();
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::planets;
    use serde_json::json;

    fn names(columns: &[&str]) -> Vec<String> {
        columns.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_remove_duplicates_keeps_first_seen_order() {
        let columns = remove_duplicates(["pl_name", "x", "y", "x", "extra"]);
        assert_eq!(columns, names(&["pl_name", "x", "y", "extra"]));
    }

    #[test]
    fn test_fixed_prefix() {
        let data = planets();
        let info = build(&data, names(&["pl_name", "radius", "moons"]), "radius", "moons").unwrap();
        assert_eq!(
            info.template,
            "<b><span style='font-size: 1.8em;'>%{customdata[0]}</span></b><br>\
             <b>radius:</b> %{customdata[1]:.4g}<br>\
             <b>moons:</b> %{customdata[2]:.4g}<br>"
        );
    }

    #[test]
    fn test_extra_lines_format_floats_only() {
        let data = planets();
        let info = build(
            &data,
            names(&["pl_name", "radius", "moons", "mass", "host", "habitable"]),
            "radius",
            "moons",
        )
        .unwrap();

        assert!(info.template.contains("<b>mass:</b> %{customdata[3]:.4g}<br>"));
        assert!(info.template.contains("<b>host:</b> %{customdata[4]}<br>"));
        assert!(info.template.contains("<b>habitable:</b> %{customdata[5]}<br>"));
    }

    #[test]
    fn test_custom_data_rows_follow_column_order() {
        let data = planets();
        let info = build(&data, names(&["pl_name", "moons", "host", "mass"]), "moons", "host").unwrap();

        assert_eq!(info.rows.len(), 4);
        assert_eq!(info.rows[0], vec![json!("a b"), json!(0), json!("sun"), json!(1.0)]);
        assert_eq!(info.rows[2][3], Value::Null);
    }

    #[test]
    fn test_unknown_column() {
        let data = planets();
        assert!(build(&data, names(&["pl_name", "mass", "radius", "nope"]), "mass", "radius").is_err());
    }
}

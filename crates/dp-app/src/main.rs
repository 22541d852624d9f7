//! Command-line entry point: CSV in, Plotly figure JSON out

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use dp_core::SessionState;
use dp_data::{load_csv, CsvOptions, Dataset};
use dp_templates::{colormaps, templates};
use dp_views::ScatterPlot;

mod inputs;

use inputs::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if args.list_presets {
        print_presets();
        return Ok(());
    }

    let dataset = load_csv(&args.input, &CsvOptions::default())
        .with_context(|| format!("Failed to load {}", args.input.display()))?;

    if args.list_columns {
        print_columns(&dataset);
        return Ok(());
    }

    let mut state = match &args.settings {
        Some(path) => SessionState::load(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?,
        None => SessionState::new(),
    };
    args.apply(&mut state);

    let plot = ScatterPlot::from_inputs(&dataset, &mut state, &args.defaults())
        .context("Invalid plot configuration")?;
    debug!("Resolved configuration: {:?}", plot);

    let figure = plot.make_fig(&dataset).context("Failed to build figure")?;
    let json = figure.to_json_string()?;

    match &args.out {
        Some(out) => {
            fs::write(out, &json).with_context(|| format!("Failed to write {}", out.display()))?;
            let display_path = display_config_path(out);
            let config = plot.display_config(&export_file_name(&args.input));
            fs::write(&display_path, serde_json::to_string_pretty(&config)?)
                .with_context(|| format!("Failed to write {}", display_path.display()))?;
            info!("Wrote {} and {}", out.display(), display_path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
    }

    if let Some(path) = &args.save_settings {
        state
            .save(path)
            .with_context(|| format!("Failed to save settings to {}", path.display()))?;
        info!("Saved {} settings to {}", state.len(), path.display());
    }

    Ok(())
}

fn print_columns(dataset: &Dataset) {
    for name in dataset.column_names() {
        let kind = dataset
            .kind(&name)
            .map(|kind| kind.to_string())
            .unwrap_or_else(|_| "?".to_string());
        println!("{name}\t{kind}");
    }
}

fn print_presets() {
    println!("Style templates:");
    for name in templates::names() {
        if let Ok(template) = templates::get(name) {
            println!("  {name:<10} {}", template.description);
        }
    }
    println!("Color maps (append `{}` to reverse):", colormaps::REVERSED_SUFFIX);
    for name in colormaps::base_names() {
        println!("  {name}");
    }
}

/// `figure.json` gets its display options in `figure.display.json`
fn display_config_path(out: &Path) -> PathBuf {
    let stem = out.file_stem().and_then(|s| s.to_str()).unwrap_or("figure");
    out.with_file_name(format!("{stem}.display.json"))
}

/// Download name offered by the chart's image button
fn export_file_name(input: &Path) -> String {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("scatter");
    format!("{stem}.png")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_output_names() {
        assert_eq!(
            display_config_path(Path::new("out/planets.json")),
            PathBuf::from("out/planets.display.json")
        );
        assert_eq!(export_file_name(Path::new("data/exoplanets.csv")), "exoplanets.png");
    }

    #[test]
    fn test_csv_to_figure() {
        let dir = tempdir().unwrap();
        let csv = dir.path().join("planets.csv");
        fs::write(&csv, "name,mass,radius\na,1.0,0.5\nb,10.0,1.0\nc,100.0,1.5\n").unwrap();

        let args = Args::parse_from(["dataplot", csv.to_str().unwrap(), "--x", "mass", "--log-x", "--template", "formal"]);
        let dataset = load_csv(&args.input, &CsvOptions::default()).unwrap();
        let mut state = SessionState::new();
        args.apply(&mut state);

        let plot = ScatterPlot::from_inputs(&dataset, &mut state, &args.defaults()).unwrap();
        assert_eq!(plot.x.name, "mass");
        assert!(plot.x.log);
        assert_eq!(plot.template, "formal");

        let json = plot.make_fig(&dataset).unwrap().to_json().unwrap();
        assert_eq!(json["layout"]["xaxis"]["type"], "log");
        assert_eq!(json["data"][0]["x"].as_array().map(|x| x.len()), Some(3));
    }
}

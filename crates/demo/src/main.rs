// File: crates/demo/src/main.rs
// Summary: Demo loads a percentile band (label, lower, upper) from CSV, lays it out and writes an SVG.

use anyhow::{Context, Result};
use bandchart_core::{BandChart, ChartLayout, LayoutConfig, LineModel, PointEntry, Size};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Usage: bandchart-demo [CSV] [WIDTHxHEIGHT]
    let mut args = std::env::args().skip(1);
    let input = args.next();
    let surface = match args.next() {
        Some(s) => parse_size(&s).with_context(|| format!("invalid surface size '{s}', expected WIDTHxHEIGHT"))?,
        None => Size::new(bandchart_core::types::WIDTH, bandchart_core::types::HEIGHT),
    };

    let (model, stem) = match input {
        Some(raw) => {
            let path = PathBuf::from(&raw);
            if !path.exists() {
                anyhow::bail!("file not found: {}", path.display());
            }
            println!("Using input file: {}", path.display());
            let model = load_band_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("band").to_string();
            (model, stem)
        }
        None => {
            println!("No input given; using built-in sample band");
            (sample_band()?, "sample".to_string())
        }
    };
    println!("Loaded {} categories", model.len());

    let chart = BandChart::new(model).with_config(LayoutConfig::default());
    let layout = chart.layout(surface);
    tracing::info!(
        content_width = layout.content_size.width,
        plot_height = layout.plot_height,
        "layout complete"
    );

    for g in &layout.grid {
        println!(
            "  grid y={:>7.2} label={:>5} {}",
            g.y,
            g.label,
            if g.dashed { "dashed" } else { "solid" }
        );
    }

    let out = out_name_with(&stem);
    std::fs::write(&out, render_svg(&layout)).with_context(|| format!("writing {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}

fn parse_size(s: &str) -> Option<Size> {
    let (w, h) = s.split_once(['x', 'X'])?;
    let w: f64 = w.trim().parse().ok()?;
    let h: f64 = h.trim().parse().ok()?;
    (w > 0.0 && h > 0.0).then(|| Size::new(w, h))
}

/// Produce output file name like target/out/band_<stem>.svg
fn out_name_with(stem: &str) -> PathBuf {
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("band_{}.svg", stem));
    out
}

/// Load a CSV with a label column and lower/upper value columns into a band.
fn load_band_csv(path: &Path) -> Result<LineModel> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    tracing::debug!(?headers, "csv headers");

    let idx = |names: &[&str]| -> Option<usize> { headers.iter().position(|h| names.contains(&h.as_str())) };

    let i_label = idx(&["label", "date", "week", "category", "name"]);
    let i_lower = idx(&["lower", "low", "p10", "min"])
        .context("no lower-bound column (lower/low/p10/min)")?;
    let i_upper = idx(&["upper", "high", "p90", "max"])
        .context("no upper-bound column (upper/high/p90/max)")?;

    let mut lower = Vec::new();
    let mut upper = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let parse = |i: usize| -> Option<f64> { rec.get(i).and_then(|s| s.parse::<f64>().ok()) };
        let (Some(lo), Some(hi)) = (parse(i_lower), parse(i_upper)) else {
            tracing::warn!(row, "skipping row with missing or non-numeric bounds");
            continue;
        };
        let label = i_label
            .and_then(|i| rec.get(i))
            .map(str::to_string)
            .unwrap_or_else(|| (row + 1).to_string());
        lower.push(PointEntry::new(lo, label.clone()));
        upper.push(PointEntry::new(hi, label));
    }

    if upper.is_empty() {
        anyhow::bail!("no rows loaded; check headers/delimiter.");
    }
    Ok(LineModel::try_new(lower, upper)?)
}

fn sample_band() -> Result<LineModel> {
    let p10 = [410.0, 455.0, 430.0, 520.0, 610.0, 575.0, 540.0, 600.0];
    let p90 = [880.0, 960.0, 905.0, 1100.0, 1240.0, 1180.0, 1050.0, 1195.0];
    let label = |i: usize| format!("W{}", i + 1);
    let lower = p10.iter().enumerate().map(|(i, &v)| PointEntry::new(v, label(i))).collect();
    let upper = p90.iter().enumerate().map(|(i, &v)| PointEntry::new(v, label(i))).collect();
    Ok(LineModel::try_new(lower, upper)?)
}

fn render_svg(layout: &ChartLayout) -> String {
    let w = layout.content_size.width;
    let h = layout.content_size.height;
    let mut s = String::new();
    let _ = writeln!(s, r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#);
    let _ = writeln!(s, r##"<rect width="100%" height="100%" fill="#121214"/>"##);
    for g in &layout.grid {
        let dash = if g.dashed { r#" stroke-dasharray="4 4""# } else { "" };
        let _ = writeln!(s, r##"<line x1="0" y1="{y:.2}" x2="{w}" y2="{y:.2}" stroke="#28282d"{dash}/>"##, y = g.y);
        let _ = writeln!(
            s,
            r##"<text x="4" y="{:.2}" fill="#d2d2dc" font-size="11">{}</text>"##,
            g.y - 3.0,
            g.label
        );
    }
    if let Some(area) = &layout.area_path {
        let _ = writeln!(s, r##"<path d="{}" fill="#40a0ff" fill-opacity="0.35"/>"##, area.to_svg_data());
    }
    for edge in [&layout.upper_path, &layout.lower_path].into_iter().flatten() {
        let _ = writeln!(s, r##"<path d="{}" fill="none" stroke="#40a0ff" stroke-width="2"/>"##, edge.to_svg_data());
    }
    for l in &layout.labels {
        let _ = writeln!(
            s,
            r##"<text x="{:.2}" y="{:.2}" fill="#d2d2dc" font-size="11" text-anchor="middle">{}</text>"##,
            l.x,
            l.y,
            escape_xml(&l.text)
        );
    }
    s.push_str("</svg>\n");
    s
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

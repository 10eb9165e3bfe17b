// File: crates/stack-chart-demo/src/main.rs
// Summary: Demo loads a CSV of dated series values, computes the stacked chart geometry and prints it.

use anyhow::{Context, Result};
use stack_chart_core::{
    hover_markers, hover_title, layer_shapes, x_axis_ticks, y_axis_ticks, ChartGeometry, ChartOptions, Frame,
    HoverEvent, HoverState, LayerShape, Observation, SeriesKeys,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

struct Args {
    csv: PathBuf,
    config: Option<PathBuf>,
    date_column: String,
    width: Option<f64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = parse_args()?;
    let mut opts = match &args.config {
        Some(p) => load_options(p)?,
        None => ChartOptions::default(),
    };
    if let Some(w) = args.width {
        opts.width = w;
        opts.validate()?;
    }

    let frame = load_frame(&args.csv, &args.date_column)
        .with_context(|| format!("failed to load CSV '{}'", args.csv.display()))?;
    tracing::info!(rows = frame.len(), series = frame.keys().len(), "loaded observations");

    let viewport = opts.viewport();
    let geometry = ChartGeometry::compute(&frame, &viewport, opts.tick_count)?;
    let date_format = opts.date_format()?;

    println!("Mode: {:?} ({} rows, {} series)", geometry.render_mode(), frame.len(), frame.keys().len());
    println!("Y ticks (step {}, domain 0..{}):", geometry.ticks().step, geometry.ticks().domain_max);
    for t in y_axis_ticks(geometry.ticks(), geometry.mapper()) {
        println!("  {:>10} @ y={:.1}", t.label, t.pixel);
    }
    println!("X ticks:");
    for t in x_axis_ticks(&frame, geometry.mapper(), opts.x_ticks_skip, &date_format)? {
        println!("  {:>10} @ x={:.1}", t.label, t.pixel);
    }

    println!("Layers:");
    for shape in layer_shapes(&geometry, &frame, opts.max_column_width) {
        match &shape {
            LayerShape::Area { key, upper, .. } => println!("  {key}: area, {} points", upper.len() * 2),
            LayerShape::Column { key, rect } => println!(
                "  {key}: column x={:.1} y={:.1} w={:.1} h={:.1}",
                rect.left, rect.top, rect.width, rect.height
            ),
        }
    }

    // Simulated pointer sweep across the chart, as a renderer would report it.
    let mut hover = HoverState::default();
    let hover_key = frame.keys().last().unwrap_or_default().to_string();
    println!("Pointer sweep over '{hover_key}':");
    let steps = 12;
    for s in 0..=steps {
        let px = viewport.width * s as f64 / steps as f64;
        let Some(index) = geometry.resolve_index(px) else { break };
        if let Some(HoverEvent::Moved { index, .. }) = hover.pointer_move(&hover_key, index) {
            let title = hover_title(&frame, &hover_key, Some(index), &date_format);
            let dot = hover_markers(&geometry, &frame, index)
                .and_then(|m| m.dots.last().map(|d| (m.x, d.1)));
            match dot {
                Some((x, y)) => println!("  px={px:>6.1} -> #{index} {title} marker=({x:.1}, {y:.1})"),
                None => println!("  px={px:>6.1} -> #{index} {title}"),
            }
        }
    }
    hover.pointer_leave();
    Ok(())
}

fn parse_args() -> Result<Args> {
    let mut it = std::env::args().skip(1);
    let mut csv = None;
    let mut config = None;
    let mut date_column = "date".to_string();
    let mut width = None;
    while let Some(a) = it.next() {
        match a.as_str() {
            "--config" => config = Some(PathBuf::from(it.next().context("--config needs a path")?)),
            "--date-column" => date_column = it.next().context("--date-column needs a name")?,
            "--width" => {
                let raw = it.next().context("--width needs a value")?;
                width = Some(raw.parse::<f64>().with_context(|| format!("bad width '{raw}'"))?);
            }
            _ => csv = Some(PathBuf::from(a)),
        }
    }
    let csv = csv.context("usage: stack-chart-demo <data.csv> [--config opts.toml] [--date-column date] [--width px]")?;
    Ok(Args { csv, config, date_column, width })
}

fn load_options(path: &Path) -> Result<ChartOptions> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let opts = ChartOptions::from_toml_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
    tracing::info!(path = %path.display(), "loaded chart options");
    Ok(opts)
}

/// Every column except the date column becomes a series, in header order.
fn load_frame(path: &Path, date_column: &str) -> Result<Frame> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    tracing::debug!(?headers, "csv headers");
    if !headers.iter().any(|h| h == date_column) {
        anyhow::bail!("no '{date_column}' column in {:?}", headers);
    }
    let keys = SeriesKeys::new(headers.iter().filter(|h| h.as_str() != date_column).cloned())?;

    let mut observations = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let fields = headers.iter().map(String::as_str).zip(rec.iter());
        observations.push(Observation::from_fields(row, fields, date_column, &keys)?);
    }
    Ok(Frame::new(keys, observations)?)
}

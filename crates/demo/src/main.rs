// File: crates/demo/src/main.rs
// Summary: Demo loads period/value rows and renders every range and theme to PNGs, then walks the tooltip path.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use trend_core::format;
use trend_core::types::{HEIGHT, WIDTH};
use trend_core::{
    ActiveRanges, ChartConfig, ChartController, Dataset, FixedHost, RangeKey, SeriesDefinition,
    ValueFormatter,
};

fn main() -> Result<()> {
    let rows = match std::env::args().nth(1) {
        Some(raw) => {
            let path = PathBuf::from(raw);
            println!("Using input file: {}", path.display());
            load_periods_csv(&path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => sample_returns(),
    };
    println!("Loaded {} periods", rows.len());
    if rows.is_empty() {
        anyhow::bail!("no rows loaded - check headers/delimiter.");
    }

    render_metric("net_return", &rows, format::percent(), format::percent())?;

    // A second metric derived from the same periods, with currency formatting.
    let aum = accumulate_aum(&rows);
    render_metric(
        "aum",
        &aum,
        format::currency_compact("$"),
        format::currency_compact("$"),
    )?;

    Ok(())
}

/// Render one metric for every range key and both themes, then probe the
/// hit-test path and print what the tooltip would show.
fn render_metric(
    name: &str,
    rows: &[(String, f64)],
    axis: ValueFormatter,
    tooltip: ValueFormatter,
) -> Result<()> {
    let host = Rc::new(FixedHost::new(WIDTH as f32, HEIGHT as f32, 2.0));
    let series = build_series(rows, axis, tooltip);
    let mut chart = ChartController::new(ChartConfig::new(Some(host), series));
    let mut ranges = ActiveRanges::new(RangeKey::Full);

    for key in RangeKey::ALL {
        ranges.select(name, key);
        chart.on_range_select(ranges.active(name))?;
        for dark in [true, false] {
            chart.on_theme_change(dark);
            chart.run_queued()?;
            let out = out_name(name, key, chart.theme().name);
            chart.surface_mut().write_png(&out)?;
            println!("Wrote {}", out.display());
        }
    }

    // Tooltip walkthrough on the full range.
    chart.on_theme_change(true);
    chart.run_queued()?;
    chart.on_range_select(RangeKey::Full)?;
    let stride = (rows.len() / 3).max(1);
    let probes: Vec<f32> = chart
        .points()
        .iter()
        .step_by(stride)
        .map(|p| p.x + 3.0)
        .collect();
    for x in probes {
        chart.on_pointer_move(x, 0.0);
        let t = chart.tooltip();
        if t.visible {
            let [(pk, pv), (vk, vv)] = t.rows();
            println!("  cursor {x:>6.1}px -> {pk}: {pv} | {vk}: {vv}");
        }
    }
    chart.on_pointer_leave();
    Ok(())
}

/// Full is every row; medium and short keep the most recent 12 and 6.
fn build_series(
    rows: &[(String, f64)],
    axis: ValueFormatter,
    tooltip: ValueFormatter,
) -> SeriesDefinition {
    let tail = |n: usize| {
        let start = rows.len().saturating_sub(n);
        let labels = rows[start..].iter().map(|(l, _)| l.clone()).collect();
        let values = rows[start..].iter().map(|(_, v)| *v).collect();
        Dataset::new(labels, values)
    };
    SeriesDefinition::new(axis, tooltip)
        .with_range(RangeKey::Short, tail(6))
        .with_range(RangeKey::Medium, tail(12))
        .with_range(RangeKey::Full, tail(rows.len()))
}

/// Produce output file name like target/out/<metric>_<range>_<theme>.png
fn out_name(metric: &str, key: RangeKey, theme: &str) -> PathBuf {
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("{}_{}_{}.png", metric, key.as_str(), theme));
    out
}

/// Load period/value rows. Periods like "2025-04" render as "Apr 2025";
/// anything unparseable is kept as the raw label.
fn load_periods_csv(path: &Path) -> Result<Vec<(String, f64)>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    let idx = |names: &[&str]| -> Option<usize> {
        headers.iter().position(|h| names.contains(&h.as_str()))
    };
    let i_period = idx(&["period", "month", "date", "label"]);
    let i_value = idx(&["value", "net", "return", "amount"]);

    let mut out = Vec::new();
    let mut skipped = 0usize;
    for rec in rdr.records() {
        let rec = rec?;
        let period = i_period
            .and_then(|i| rec.get(i))
            .unwrap_or("")
            .trim()
            .to_string();
        let value = i_value
            .and_then(|i| rec.get(i))
            .and_then(|s| s.trim().parse::<f64>().ok());
        match value {
            Some(v) if !period.is_empty() => out.push((month_label(&period), v)),
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        eprintln!("Skipped {skipped} malformed rows");
    }
    Ok(out)
}

/// "2025-04" -> "Apr 2025"; other formats pass through unchanged.
fn month_label(period: &str) -> String {
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{period}-01"), "%Y-%m-%d") {
        return date.format("%b %Y").to_string();
    }
    period.to_string()
}

/// Built-in sample: 24 months of illustrative net returns.
fn sample_returns() -> Vec<(String, f64)> {
    let mut out = Vec::with_capacity(24);
    for i in 0..24i32 {
        let date =
            NaiveDate::from_ymd_opt(2024 + i / 12, (i % 12 + 1) as u32, 1).expect("valid month");
        let value = ((i as f64) * 0.7).sin() * 1.8 + 1.1;
        out.push((date.format("%b %Y").to_string(), (value * 10.0).round() / 10.0));
    }
    out
}

/// Derive a cumulative assets series from monthly returns, starting at $100k.
fn accumulate_aum(rows: &[(String, f64)]) -> Vec<(String, f64)> {
    let mut level = 100_000.0f64;
    rows.iter()
        .map(|(label, ret)| {
            level *= 1.0 + ret / 100.0;
            (label.clone(), level.round())
        })
        .collect()
}

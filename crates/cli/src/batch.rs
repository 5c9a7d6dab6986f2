//! Non-interactive mode: `code cx cy r` lines in, JSON summary out.

use std::io::Read;

use anyhow::{bail, Context, Result};
use figures::prelude::*;
use serde::Serialize;

/// One stored figure as reported in the summary.
#[derive(Debug, Serialize)]
pub struct FigureRow {
    pub index: usize,
    pub sides: usize,
    pub center: [f64; 2],
    pub area: f64,
}

#[derive(Debug, Serialize)]
pub struct Summary {
    pub count: usize,
    pub capacity: usize,
    pub total_area: f64,
    pub figures: Vec<FigureRow>,
}

/// Build figures from text; blank lines and `#` comments are skipped.
pub fn load(text: &str, capacity: usize) -> Result<DynamicArray<FigureSlot<f64>>> {
    let mut figures = DynamicArray::with_capacity(capacity);
    for (n, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut tokens = line.split_whitespace();
        let parsed = tokens
            .next()
            .ok_or_else(|| FigureError::ParseFailure {
                reason: "missing figure type".into(),
            })
            .and_then(str::parse::<PolygonKind>)
            .and_then(|kind| kind.read::<f64, _>(&mut tokens));
        let figure = parsed.with_context(|| format!("line {}: {line:?}", n + 1))?;
        if let Some(extra) = tokens.next() {
            bail!("line {}: unexpected token {extra:?}", n + 1);
        }
        tracing::debug!(line = n + 1, sides = figure.sides(), "figure_loaded");
        figures.push_back(Some(figure));
    }
    Ok(figures)
}

pub fn summarize(figures: &DynamicArray<FigureSlot<f64>>) -> Summary {
    let rows = figures
        .iter()
        .enumerate()
        .filter_map(|(index, slot)| {
            slot.as_ref().map(|f| {
                let c = f.center();
                FigureRow {
                    index,
                    sides: f.sides(),
                    center: [c.x, c.y],
                    area: f.area(),
                }
            })
        })
        .collect();
    Summary {
        count: figures.size(),
        capacity: figures.capacity(),
        total_area: total_area(figures),
        figures: rows,
    }
}

/// Read `input` (a path, or `-` for stdin) and print the summary as JSON.
pub fn run(input: &str, capacity: usize) -> Result<()> {
    let text = if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        buf
    } else {
        std::fs::read_to_string(input).with_context(|| format!("reading {input}"))?
    };
    let figures = load(&text, capacity)?;
    let summary = summarize(&figures);
    tracing::info!(
        input,
        count = summary.count,
        total_area = summary.total_area,
        "batch"
    );
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

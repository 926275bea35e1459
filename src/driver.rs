//! Line-oriented terminal driver.
//!
//! Stands in for a windowed input loop: every input line is one pointer
//! click given as `X Y` in board coordinates. The driver hands each click
//! to a [`Round`] and writes what happened.

use derive_more::{Display, Error};
use serde::Serialize;
use std::io::{BufRead, Write};
use tictactoe_core::{Board, ClickOutcome, Point, Rect, Round, Segment, WinResult};
use tracing::{debug, instrument, warn};

/// How results are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Board drawings and banners.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// A click line that could not be read as two numbers.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("expected `X Y`, got {input:?}")]
pub struct ClickParseError {
    /// The offending line.
    pub input: String,
}

/// Parses `X Y` (whitespace or comma separated) into a point.
pub fn parse_click(line: &str) -> Result<Point, ClickParseError> {
    let err = || ClickParseError {
        input: line.to_string(),
    };
    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty());
    let x = parts.next().and_then(|s| s.parse::<f64>().ok()).ok_or_else(err)?;
    let y = parts.next().and_then(|s| s.parse::<f64>().ok()).ok_or_else(err)?;
    if parts.next().is_some() {
        return Err(err());
    }
    Ok(Point::new(x, y))
}

/// Feeds clicks from `input` into `round` until a blank line or EOF.
///
/// Unreadable lines are reported and skipped.
#[instrument(skip_all, fields(format = ?format))]
pub fn play<R: BufRead, W: Write>(
    round: &mut Round,
    input: R,
    out: &mut W,
    format: OutputFormat,
) -> anyhow::Result<()> {
    if format == OutputFormat::Text {
        writeln!(out, "{}", round.board())?;
        writeln!(out, "{} to move", round.to_move())?;
    }

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            debug!("Blank line, ending session");
            break;
        }

        let point = match parse_click(&line) {
            Ok(point) => point,
            Err(e) => {
                warn!(error = %e, "Skipping unreadable click");
                match format {
                    OutputFormat::Text => writeln!(out, "{e}")?,
                    OutputFormat::Json => {
                        writeln!(out, "{}", serde_json::json!({ "error": e.to_string() }))?
                    }
                }
                continue;
            }
        };

        let outcome = round.handle_click(point)?;
        match format {
            OutputFormat::Text => write_text(round, &outcome, point, out)?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&outcome)?)?,
        }
    }

    if format == OutputFormat::Text {
        writeln!(out, "{}", round.score())?;
    }
    Ok(())
}

fn write_text<W: Write>(
    round: &Round,
    outcome: &ClickOutcome,
    point: Point,
    out: &mut W,
) -> anyhow::Result<()> {
    match outcome {
        ClickOutcome::Reset => {
            writeln!(out, "board cleared")?;
            writeln!(out, "{}", round.board())?;
        }
        ClickOutcome::Missed => writeln!(out, "no cell at ({}, {})", point.x, point.y)?,
        ClickOutcome::Occupied { index } => {
            writeln!(out, "cell {index} is taken, {} to move", round.to_move())?
        }
        ClickOutcome::Placed { result, .. } => {
            writeln!(out, "{}", round.board())?;
            match result {
                WinResult::None => writeln!(out, "{} to move", round.to_move())?,
                WinResult::Line(_) | WinResult::Draw => {
                    writeln!(out, "{result}")?;
                    writeln!(out, "{}", round.score())?;
                }
            }
        }
    }
    Ok(())
}

/// Geometry of one cell, as reported by [`layout`].
#[derive(Debug, Clone, Serialize)]
pub struct CellLayout {
    /// Storage index.
    pub index: usize,
    /// Column.
    pub x: usize,
    /// Row, 0 at the top.
    pub y: usize,
    /// Top-left corner.
    pub start: Point,
    /// Bottom-right corner.
    pub end: Point,
    /// Area the cell's mark is drawn in.
    pub mark: Rect,
}

/// Everything a renderer needs to draw an empty board.
#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    /// Cells in storage order.
    pub cells: Vec<CellLayout>,
    /// Internal separator lines.
    pub grid_lines: Vec<Segment>,
}

/// Collects the static geometry of `board`.
///
/// Each cell's mark area is inset by `shape_margin` from its edges.
#[instrument(skip(board), fields(order = board.order()))]
pub fn layout(board: &Board, shape_margin: f64) -> Layout {
    let cells = board
        .cells()
        .iter()
        .map(|c| {
            let (x, y) = c.coord();
            CellLayout {
                index: c.index(),
                x,
                y,
                start: c.bounds().start,
                end: c.bounds().end,
                mark: c.mark_bounds(shape_margin),
            }
        })
        .collect();
    Layout {
        cells,
        grid_lines: board.grid_lines(),
    }
}

/// Writes `layout` in the chosen format.
pub fn write_layout<W: Write>(
    layout: &Layout,
    out: &mut W,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(layout)?)?,
        OutputFormat::Text => {
            for c in &layout.cells {
                writeln!(
                    out,
                    "cell {} ({}, {}): ({}, {}) -> ({}, {}) mark ({}, {}) -> ({}, {})",
                    c.index,
                    c.x,
                    c.y,
                    c.start.x,
                    c.start.y,
                    c.end.x,
                    c.end.y,
                    c.mark.start.x,
                    c.mark.start.y,
                    c.mark.end.x,
                    c.mark.end.y
                )?;
            }
            for s in &layout.grid_lines {
                writeln!(
                    out,
                    "line ({}, {}) -> ({}, {})",
                    s.from.x, s.from.y, s.to.x, s.to.y
                )?;
            }
        }
    }
    Ok(())
}

//! Text and JSON rendering of diff results

use crate::config::ViewMode;
use anyhow::{Context, Result};
use crossterm::style::{style, Color, Stylize};
use linediff_core::{to_split, DiffResult, DiffStats, EditOp, Hunk, Line, SplitKind, SplitRow};
use serde::Serialize;
use std::borrow::Cow;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TAB_WIDTH: usize = 4;
const SEPARATOR: &str = " │ ";
const NO_CHANGES: &str = "No changes";

pub struct RenderOptions {
    pub color: bool,
    /// Total width of the split view
    pub width: usize,
}

#[derive(Serialize)]
struct UnifiedReport<'a> {
    stats: DiffStats,
    ops: &'a [EditOp],
}

#[derive(Serialize)]
struct SplitReport {
    stats: DiffStats,
    rows: Vec<SplitRow>,
}

fn paint(text: String, color: Color, enabled: bool) -> String {
    if enabled {
        style(text).with(color).to_string()
    } else {
        text
    }
}

/// Expand tabs and make carriage returns visible
fn display_text(text: &str) -> Cow<'_, str> {
    if text.contains(['\t', '\r']) {
        Cow::Owned(
            text.replace('\t', &" ".repeat(TAB_WIDTH))
                .replace('\r', "␍"),
        )
    } else {
        Cow::Borrowed(text)
    }
}

/// Truncate to `width` display columns (with an ellipsis) and pad to exactly `width`
fn fit(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut used = 0;

    if text.width() <= width {
        out.push_str(text);
        used = text.width();
    } else {
        let limit = width.saturating_sub(1);
        for ch in text.chars() {
            let w = ch.width().unwrap_or(0);
            if used + w > limit {
                break;
            }
            out.push(ch);
            used += w;
        }
        if width > 0 {
            out.push('…');
            used += 1;
        }
    }

    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

/// Digits needed for the largest 1-based line number in the script
fn gutter_width(ops: &[EditOp]) -> usize {
    ops.iter()
        .flat_map(|op| [op.before_index(), op.after_index()])
        .flatten()
        .max()
        .map_or(1, |idx| (idx + 1).to_string().len())
}

fn line_number(index: Option<usize>, width: usize) -> String {
    match index {
        Some(idx) => format!("{:>width$}", idx + 1),
        None => " ".repeat(width),
    }
}

pub fn render_summary(stats: DiffStats, opts: &RenderOptions) -> String {
    let plural = |n: usize| if n == 1 { "" } else { "s" };
    format!(
        "{}, {}\n",
        paint(
            format!("{} addition{}(+)", stats.added, plural(stats.added)),
            Color::Green,
            opts.color
        ),
        paint(
            format!("{} deletion{}(-)", stats.removed, plural(stats.removed)),
            Color::Red,
            opts.color
        )
    )
}

/// Hunks in a single column: `old new sign text`
pub fn render_unified(result: &DiffResult, hunks: &[Hunk], opts: &RenderOptions) -> String {
    if result.is_unchanged() {
        return format!("{}\n", NO_CHANGES);
    }

    let ops = result.ops();
    let width = gutter_width(ops);
    let mut lines = Vec::new();

    for hunk in hunks {
        lines.push(paint(hunk.header(), Color::Cyan, opts.color));
        for op in hunk.slice(ops) {
            let row = format!(
                "{} {} {}{}",
                line_number(op.before_index(), width),
                line_number(op.after_index(), width),
                op.sign(),
                display_text(op.text())
            );
            lines.push(match op {
                EditOp::Insert { .. } => paint(row, Color::Green, opts.color),
                EditOp::Delete { .. } => paint(row, Color::Red, opts.color),
                EditOp::Equal { .. } => row,
            });
        }
    }

    let mut out = lines.join("\n");
    out.push_str("\n\n");
    out.push_str(&render_summary(result.stats(), opts));
    out
}

/// Hunks as two columns, with a blank spacer row between hunks
pub fn render_split(result: &DiffResult, hunks: &[Hunk], opts: &RenderOptions) -> String {
    if result.is_unchanged() {
        return format!("{}\n", NO_CHANGES);
    }

    let ops = result.ops();
    let number_width = gutter_width(ops);
    let side_width = opts.width.saturating_sub(SEPARATOR.width()) / 2;
    let text_width = side_width.saturating_sub(number_width + 2);
    let mut lines = Vec::new();

    for (n, hunk) in hunks.iter().enumerate() {
        if n > 0 {
            lines.push(split_row(
                &SplitRow::empty_pad(),
                number_width,
                text_width,
                opts,
            ));
        }
        lines.push(paint(hunk.header(), Color::Cyan, opts.color));
        for row in to_split(hunk.slice(ops)) {
            lines.push(split_row(&row, number_width, text_width, opts));
        }
    }

    let mut out = lines.join("\n");
    out.push_str("\n\n");
    out.push_str(&render_summary(result.stats(), opts));
    out
}

fn split_side(line: Option<&Line>, sign: char, number_width: usize, text_width: usize) -> String {
    match line {
        Some(line) => format!(
            "{:>number_width$} {}{}",
            line.number(),
            sign,
            fit(&display_text(&line.text), text_width)
        ),
        None => " ".repeat(number_width + 2 + text_width),
    }
}

fn split_row(
    row: &SplitRow,
    number_width: usize,
    text_width: usize,
    opts: &RenderOptions,
) -> String {
    let (left_sign, right_sign) = match row.kind {
        SplitKind::Removed => ('-', ' '),
        SplitKind::Added => (' ', '+'),
        SplitKind::Equal | SplitKind::EmptyPad => (' ', ' '),
    };
    let mut left = split_side(row.before.as_ref(), left_sign, number_width, text_width);
    let mut right = split_side(row.after.as_ref(), right_sign, number_width, text_width);

    match row.kind {
        SplitKind::Removed => left = paint(left, Color::Red, opts.color),
        SplitKind::Added => right = paint(right, Color::Green, opts.color),
        SplitKind::Equal | SplitKind::EmptyPad => {}
    }

    format!("{}{}{}", left, SEPARATOR, right)
        .trim_end()
        .to_string()
}

pub fn render_json(result: &DiffResult, view: ViewMode) -> Result<String> {
    let stats = result.stats();
    let json = match view {
        ViewMode::Unified => serde_json::to_string_pretty(&UnifiedReport {
            stats,
            ops: result.ops(),
        }),
        ViewMode::Split => serde_json::to_string_pretty(&SplitReport {
            stats,
            rows: result.to_split(),
        }),
    }
    .context("Failed to serialize diff")?;
    Ok(json + "\n")
}

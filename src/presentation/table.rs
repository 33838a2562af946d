use crate::domain::model::TranslationResult;
use unicode_width::UnicodeWidthStr;

const HEADER: [&str; 2] = ["Language:", "Word/Sentence"];
/// Label shown for the original-text row. Input is always treated as
/// English; the service auto-detects the real source language.
const SOURCE_LABEL: &str = "English";

/// Render the comparison table for one translation result.
///
/// `label` names the translated-text row and comes from config, not from the
/// target language code. Output is deterministic: same inputs, same bytes.
pub fn render_grid(result: &TranslationResult, label: &str) -> String {
    let rows = [
        [SOURCE_LABEL, result.original.as_str()],
        [label, result.translated.as_str()],
    ];
    grid(HEADER, &rows)
}

// 渲染 grid 样式表格: 表头下用 '=', 其余分隔行用 '-'
fn grid(header: [&str; 2], rows: &[[&str; 2]]) -> String {
    let mut widths = [header[0].width(), header[1].width()];
    for row in rows {
        for (col, cell) in row.iter().enumerate() {
            widths[col] = widths[col].max(cell.width());
        }
    }

    let mut out = String::new();
    out.push_str(&separator(&widths, '-'));
    out.push_str(&data_line(&header, &widths));
    out.push_str(&separator(&widths, '='));
    for row in rows {
        out.push_str(&data_line(row, &widths));
        out.push_str(&separator(&widths, '-'));
    }
    // Drop the final newline so callers decide the framing
    out.pop();
    out
}

fn separator(widths: &[usize; 2], fill: char) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.extend(std::iter::repeat(fill).take(width + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

fn data_line(cells: &[&str; 2], widths: &[usize; 2]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.iter().zip(widths) {
        line.push(' ');
        line.push_str(cell);
        // Pad by display width, cells may hold CJK or Indic text
        line.extend(std::iter::repeat(' ').take(width - cell.width() + 1));
        line.push('|');
    }
    line.push('\n');
    line
}

//! Column packing for multi-choice option lists.

use unicode_width::UnicodeWidthStr;

/// Lay out option labels in as many equal-width columns as fit in `width`.
///
/// Column count is `width / widest label` (at least one), and each column
/// is `width / column count` cells wide. Every row ends with a newline.
pub fn pack_columns(labels: &[String], width: usize) -> String {
    let widest = labels
        .iter()
        .map(|label| UnicodeWidthStr::width(label.as_str()))
        .max()
        .unwrap_or(0)
        .max(1);
    let per_line = (width / widest).max(1);
    let cell = width / per_line;

    let mut out = String::new();
    for row in labels.chunks(per_line) {
        for label in row {
            out.push_str(label);
            let pad = cell.saturating_sub(UnicodeWidthStr::width(label.as_str()));
            out.extend(std::iter::repeat(' ').take(pad));
        }
        out.push('\n');
    }
    out
}

/// Label for option `index`: right-aligned number, dash, text, trailing space.
pub fn option_label(index: usize, option: &dyn std::fmt::Display) -> String {
    format!("{:2} - {} ", index, option)
}

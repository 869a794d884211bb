//! Plain-text projection of a rendered table.

use unicode_width::UnicodeWidthStr;

use super::item::Alignment;
use super::state::RenderedTable;

/// Placeholder shown in place of a cell whose extractor failed.
pub const ERROR_PLACEHOLDER: &str = "#ERR";

/// Appended to the sort indicator when some rows had no usable sort key.
pub const SORT_ERROR_MARK: &str = "!";

const COLUMN_GAP: &str = "  ";

fn pad(text: &str, width: usize, align: Alignment) -> String {
    let fill = width.saturating_sub(text.width());
    match align {
        Alignment::Left => format!("{}{}", text, " ".repeat(fill)),
        Alignment::Right => format!("{}{}", " ".repeat(fill), text),
        Alignment::Center => {
            let left = fill / 2;
            format!("{}{}{}", " ".repeat(left), text, " ".repeat(fill - left))
        }
    }
}

/// Format a rendered table as aligned plain text.
///
/// The active sort column gets its direction indicator appended to the
/// header, followed by [`SORT_ERROR_MARK`] if any sort key failed. Failed
/// cells show [`ERROR_PLACEHOLDER`]. Trailing whitespace is trimmed from each
/// line.
pub fn format_plain<R>(table: &RenderedTable<'_, R>) -> String {
    let header: Vec<String> = table
        .header
        .iter()
        .map(|h| match h.sorted {
            Some(direction) if h.key_errors > 0 => {
                format!("{} {}{}", h.label, direction.indicator(), SORT_ERROR_MARK)
            }
            Some(direction) => format!("{} {}", h.label, direction.indicator()),
            None => h.label.clone(),
        })
        .collect();

    let body: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| {
            row.cells
                .iter()
                .map(|cell| match cell {
                    Ok(value) => value.to_string(),
                    Err(_) => ERROR_PLACEHOLDER.to_string(),
                })
                .collect()
        })
        .collect();

    let widths: Vec<usize> = header
        .iter()
        .enumerate()
        .map(|(i, h)| {
            body.iter()
                .filter_map(|cells| cells.get(i))
                .map(|c| c.width())
                .fold(h.width(), usize::max)
        })
        .collect();

    let format_line = |cells: &[String]| -> String {
        let line = cells
            .iter()
            .zip(&widths)
            .zip(&table.header)
            .map(|((cell, &width), h)| pad(cell, width, h.align))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP);
        line.trim_end().to_string()
    };

    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(format_line(&header));
    lines.push(
        widths
            .iter()
            .map(|&w| "-".repeat(w))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP),
    );
    lines.extend(body.iter().map(|cells| format_line(cells)));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_alignment() {
        assert_eq!(pad("ab", 4, Alignment::Left), "ab  ");
        assert_eq!(pad("ab", 4, Alignment::Right), "  ab");
        assert_eq!(pad("ab", 5, Alignment::Center), " ab  ");
        assert_eq!(pad("abcdef", 4, Alignment::Left), "abcdef");
    }

    #[test]
    fn test_pad_uses_display_width() {
        // Wide glyphs take two terminal columns
        assert_eq!(pad("漢", 4, Alignment::Left), "漢  ");
    }
}

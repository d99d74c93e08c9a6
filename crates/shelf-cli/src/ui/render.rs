//! Rendering primitives for CLI output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{ASCII_MARKDOWN, UTF8_FULL};
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table as ComfyTable};

use super::context::UiContext;
use super::mode::OutputMode;
use super::theme::{styled, styles, Badge};

const MAX_PATH_DISPLAY: usize = 50;

/// Render a header line for a command.
///
/// Pretty mode: "Shelf · command (context)" plus the library path when given.
/// Plain mode: "shelf command"
pub fn header(
    ctx: &UiContext,
    command: &str,
    context: Option<&str>,
    path: Option<&str>,
) -> String {
    match ctx.mode {
        OutputMode::Pretty => {
            let title = styled("Shelf", styles::bold(), ctx.color);
            let mut out = match context {
                Some(c) => format!("{} \u{00B7} {} ({})", title, command, c),
                None => format!("{} \u{00B7} {}", title, command),
            };
            if let Some(p) = path {
                out.push('\n');
                out.push_str(&kv(ctx, "Library", &shorten_path(p)));
            }
            out
        }
        OutputMode::Plain => format!("shelf {}", command),
        OutputMode::Json => String::new(),
    }
}

fn shorten_path(path: &str) -> String {
    let count = path.chars().count();
    if count <= MAX_PATH_DISPLAY {
        return path.to_string();
    }
    let tail: String = path.chars().skip(count - (MAX_PATH_DISPLAY - 3)).collect();
    format!("...{}", tail)
}

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let badge_text = styled(kind.display(ctx.unicode), kind.style(), ctx.color);
    if message.is_empty() {
        badge_text
    } else {
        format!("{} {}", badge_text, message)
    }
}

/// Render a key-value pair.
///
/// Pretty mode: "Key: value" with dim key
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let styled_key = styled(&format!("{}:", key), styles::dim(), ctx.color);
        format!("{} {}", styled_key, value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

/// Render a hint line.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        format!("{} {}", styled("Hint:", styles::dim(), ctx.color), text)
    } else {
        format!("hint={}", text)
    }
}

/// Render an informational line that is not an error.
///
/// Pretty mode: info badge + message
/// Plain mode: the bare message
pub fn notice(ctx: &UiContext, message: &str) -> String {
    if ctx.mode.is_pretty() {
        badge(ctx, Badge::Info, message)
    } else {
        message.to_string()
    }
}

/// Render a receipt (summary block after a change to the library).
///
/// Pretty mode: OK badge with the title, then indented key-value pairs
/// Plain mode: the title line followed by key=value lines
pub fn receipt(ctx: &UiContext, title: &str, items: &[(&str, String)]) -> String {
    let mut lines = Vec::with_capacity(items.len() + 1);
    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Ok, title));
        for (key, value) in items {
            lines.push(format!("  {}", kv(ctx, key, value)));
        }
    } else {
        lines.push(title.to_string());
        for (key, value) in items {
            lines.push(kv(ctx, key, value));
        }
    }
    lines.join("\n")
}

/// Column definition for table rendering.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub header: &'static str,
    pub align_right: bool,
}

impl Column {
    pub const fn new(header: &'static str) -> Self {
        Self {
            header,
            align_right: false,
        }
    }

    /// Column for numbers (ids, years).
    pub const fn right(header: &'static str) -> Self {
        Self {
            header,
            align_right: true,
        }
    }
}

/// Render a table.
///
/// Pretty mode: bordered comfy-table sized to the terminal
/// Plain mode: one tab-separated line per row, no header
pub fn table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    if !ctx.mode.is_pretty() {
        return rows
            .iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n");
    }

    let mut table = ComfyTable::new();
    if ctx.unicode {
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS);
    } else {
        table.load_preset(ASCII_MARKDOWN);
    }
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(ctx.width.min(u16::MAX as usize) as u16);

    table.set_header(columns.iter().map(|c| Cell::new(c.header)));
    for row in rows {
        table.add_row(row.iter().zip(columns).map(|(value, column)| {
            let cell = Cell::new(value);
            if column.align_right {
                cell.set_alignment(CellAlignment::Right)
            } else {
                cell
            }
        }));
    }

    table.to_string()
}

/// Print a message to stdout unless in JSON mode.
pub fn print(ctx: &UiContext, message: &str) {
    if !ctx.mode.is_json() {
        println!("{}", message);
    }
}

/// Print an empty line (only in pretty mode).
pub fn blank_line(ctx: &UiContext) {
    if ctx.mode.is_pretty() {
        println!();
    }
}

/// Format an error message with optional hint.
///
/// Pretty mode: "[ERR] message" with optional "Hint: ..." on next line
/// Plain mode: "error=message" with optional "hint=suggestion"
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = Vec::new();
    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Err, message));
    } else {
        lines.push(format!("error={}", message));
    }
    if let Some(h) = error_hint {
        lines.push(hint(ctx, h));
    }
    lines.join("\n")
}

/// Print an error message to stderr with optional hint.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_ctx() -> UiContext {
        UiContext::plain()
    }

    fn pretty_ctx() -> UiContext {
        UiContext {
            is_tty: true,
            color: false,
            unicode: true,
            width: 80,
            mode: OutputMode::Pretty,
        }
    }

    fn book_columns() -> [Column; 3] {
        [Column::right("ID"), Column::new("Title"), Column::right("Year")]
    }

    fn book_rows() -> Vec<Vec<String>> {
        vec![
            vec!["1".to_string(), "Dune".to_string(), "1965".to_string()],
            vec![
                "12".to_string(),
                "The Left Hand of Darkness".to_string(),
                "1969".to_string(),
            ],
        ]
    }

    #[test]
    fn test_header_pretty() {
        let h = header(&pretty_ctx(), "list", Some("2 books"), None);
        assert_eq!(h, "Shelf \u{00B7} list (2 books)");
    }

    #[test]
    fn test_header_plain() {
        assert_eq!(header(&plain_ctx(), "list", Some("2 books"), None), "shelf list");
    }

    #[test]
    fn test_header_json_is_empty() {
        let mut ctx = plain_ctx();
        ctx.mode = OutputMode::Json;
        assert!(header(&ctx, "list", None, None).is_empty());
    }

    #[test]
    fn test_header_shows_short_library_path() {
        let long_path = "/home/reader/.local/share/shelf/collections/2024/fiction/library.json";
        let h = header(&pretty_ctx(), "list", None, Some(long_path));
        assert!(h.contains("Library:"));
        assert!(h.contains("..."));
        assert!(h.ends_with("library.json"));

        let short = header(&pretty_ctx(), "list", None, Some("/tmp/books.json"));
        assert!(short.ends_with("/tmp/books.json"));
    }

    #[test]
    fn test_badge_ascii_and_unicode() {
        let ascii = badge(&plain_ctx(), Badge::Ok, "Saved");
        assert_eq!(ascii, "[OK] Saved");
        let unicode = badge(&pretty_ctx(), Badge::Err, "");
        assert_eq!(unicode, "[\u{2717}]");
    }

    #[test]
    fn test_kv_modes() {
        assert_eq!(kv(&pretty_ctx(), "Books Read", "50.00%"), "Books Read: 50.00%");
        assert_eq!(kv(&plain_ctx(), "Books Read", "50.00%"), "books_read=50.00%");
    }

    #[test]
    fn test_hint_modes() {
        assert_eq!(hint(&pretty_ctx(), "shelf add"), "Hint: shelf add");
        assert_eq!(hint(&plain_ctx(), "shelf add"), "hint=shelf add");
    }

    #[test]
    fn test_notice_modes() {
        assert_eq!(notice(&plain_ctx(), "Library is empty."), "Library is empty.");
        let pretty = notice(&pretty_ctx(), "Library is empty.");
        assert!(pretty.starts_with("[\u{2139}]"));
        assert!(pretty.ends_with("Library is empty."));
    }

    #[test]
    fn test_receipt_plain_keeps_title() {
        let r = receipt(
            &plain_ctx(),
            "Book added successfully!",
            &[("ID", "3".to_string()), ("Title", "Dune".to_string())],
        );
        assert_eq!(r, "Book added successfully!\nid=3\ntitle=Dune");
    }

    #[test]
    fn test_receipt_pretty() {
        let r = receipt(
            &pretty_ctx(),
            "Book added successfully!",
            &[("ID", "3".to_string())],
        );
        let lines: Vec<&str> = r.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Book added successfully!"));
        assert_eq!(lines[1], "  ID: 3");
    }

    #[test]
    fn test_table_plain_is_tab_separated() {
        let t = table(&plain_ctx(), &book_columns(), &book_rows());
        assert_eq!(t, "1\tDune\t1965\n12\tThe Left Hand of Darkness\t1969");
    }

    #[test]
    fn test_table_pretty_has_headers_and_rows() {
        let t = table(&pretty_ctx(), &book_columns(), &book_rows());
        assert!(t.contains("Title"));
        assert!(t.contains("Year"));
        assert!(t.contains("The Left Hand of Darkness"));
        assert!(t.contains("1969"));
    }

    #[test]
    fn test_table_ascii_preset() {
        let mut ctx = pretty_ctx();
        ctx.unicode = false;
        let t = table(&ctx, &book_columns(), &book_rows());
        assert!(t.contains('|'));
        assert!(!t.contains('\u{2502}'));
    }

    #[test]
    fn test_table_empty_rows_still_has_header() {
        let t = table(&pretty_ctx(), &book_columns(), &[]);
        assert!(t.contains("ID"));
        assert!(t.contains("Title"));
    }

    #[test]
    fn test_error_message_modes() {
        let pretty = error_message(&pretty_ctx(), "Library file is corrupt", Some("Fix it"));
        assert!(pretty.contains("Library file is corrupt"));
        assert!(pretty.contains("Hint: Fix it"));

        let plain = error_message(&plain_ctx(), "Library file is corrupt", None);
        assert_eq!(plain, "error=Library file is corrupt");
    }
}

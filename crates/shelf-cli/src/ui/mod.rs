//! UI primitives for the Shelf CLI.
//!
//! - **Context**: environment detection (TTY, width, color, unicode)
//! - **Mode**: output mode resolution (json, plain, pretty)
//! - **Theme**: badges, styles, read markers
//! - **Render**: headers, tables, receipts, hints
//! - **Format**: string helpers for table cells
//! - **Prompt**: dialoguer forms used by the menu and by `add`/`remove`/`search`
//!
//! ```ignore
//! let ctx = app.ui_context(args.json, format);
//! if ctx.mode.is_json() {
//!     return output::json::print_json(&output::json::books_json(&books));
//! }
//! ui::print(&ctx, &ui::header(&ctx, "list", None, None));
//! ui::print(&ctx, &ui::table(&ctx, &columns, &rows));
//! ```

mod context;
pub mod format;
pub mod mode;
pub mod prompt;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use mode::OutputFormat;

pub use render::{blank_line, header, hint, kv, notice, print, print_error, receipt, table, Column};

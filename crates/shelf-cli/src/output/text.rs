//! Table and plain text output for books and statistics.

use shelf_core::{Book, Statistics};

use crate::ui::format::{format_percent, genre_or_dash, read_marker, single_line, truncate};
use crate::ui::{blank_line, header, hint, kv, notice, print, table, Column, UiContext};

const TITLE_MAX: usize = 48;
const AUTHOR_MAX: usize = 32;

/// How a list of books should be introduced.
pub struct BookListView<'a> {
    /// Command name for the header (e.g. "list")
    pub command: &'a str,
    /// Extra header context, such as the search filters
    pub context: Option<String>,
    /// Library file shown under the header in pretty mode
    pub path: Option<String>,
    /// Message printed instead of a table when there are no books
    pub empty_message: &'a str,
    /// Suppress header and hints
    pub quiet: bool,
}

fn book_columns() -> [Column; 6] {
    [
        Column::right("ID"),
        Column::new("Title"),
        Column::new("Author"),
        Column::right("Year"),
        Column::new("Genre"),
        Column::new("Read"),
    ]
}

fn book_row(ctx: &UiContext, book: &Book) -> Vec<String> {
    let pretty = ctx.mode.is_pretty();
    let title = single_line(&book.title);
    let author = single_line(&book.author);
    vec![
        book.id.to_string(),
        if pretty { truncate(&title, TITLE_MAX) } else { title },
        if pretty { truncate(&author, AUTHOR_MAX) } else { author },
        book.publication_year.to_string(),
        genre_or_dash(&book.genre),
        read_marker(book.read_status, pretty && ctx.unicode).to_string(),
    ]
}

impl<'a> BookListView<'a> {
    pub fn new(command: &'a str, empty_message: &'a str) -> Self {
        Self {
            command,
            context: None,
            path: None,
            empty_message,
            quiet: false,
        }
    }

    pub fn context(mut self, context: Option<String>) -> Self {
        self.context = context;
        self
    }

    pub fn path(mut self, path: Option<String>) -> Self {
        self.path = path;
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

/// Print books as a table (pretty) or tab-separated lines (plain).
pub fn print_book_list(ctx: &UiContext, view: &BookListView<'_>, books: &[Book]) {
    if !view.quiet && ctx.mode.is_pretty() {
        let count = match books.len() {
            1 => "1 book".to_string(),
            n => format!("{} books", n),
        };
        let context = match &view.context {
            Some(c) => format!("{}, {}", c, count),
            None => count,
        };
        print(
            ctx,
            &header(ctx, view.command, Some(&context), view.path.as_deref()),
        );
        blank_line(ctx);
    }

    if books.is_empty() {
        print(ctx, &notice(ctx, view.empty_message));
        return;
    }

    let rows: Vec<Vec<String>> = books.iter().map(|book| book_row(ctx, book)).collect();
    print(ctx, &table(ctx, &book_columns(), &rows));

    if !view.quiet && ctx.mode.is_pretty() {
        blank_line(ctx);
        print(ctx, &hint(ctx, "shelf remove <id>  \u{00B7}  shelf stats"));
    }
}

/// Print the two statistics lines.
pub fn print_statistics(ctx: &UiContext, stats: &Statistics, quiet: bool) {
    if !quiet && ctx.mode.is_pretty() {
        print(ctx, &header(ctx, "stats", None, None));
        blank_line(ctx);
    }
    for line in statistics_lines(ctx, stats) {
        print(ctx, &line);
    }
}

fn statistics_lines(ctx: &UiContext, stats: &Statistics) -> [String; 2] {
    let (total, percent) = stats.summary();
    let total = total.to_string();
    let percent = format_percent(percent);
    if ctx.mode.is_pretty() {
        [kv(ctx, "Total Books", &total), kv(ctx, "Books Read", &percent)]
    } else {
        [
            format!("Total Books: {}", total),
            format!("Books Read: {}", percent),
        ]
    }
}

//! Interactive prompts for the menu and for commands run without flags.
//!
//! Every prompt refuses to run when stdin is not a terminal so that scripts
//! fail fast instead of hanging.

use std::io::IsTerminal;

use dialoguer::{theme::ColorfulTheme, Confirm, FuzzySelect, Input, Select};

use shelf_core::storage::{is_valid_publication_year, MAX_PUBLICATION_YEAR, MIN_PUBLICATION_YEAR};
use shelf_core::{Action, Book, BookId, GenreFilter, NewBook, ReadFilter, SearchQuery, SortKey};

use crate::errors::CliError;

const QUIT_LABEL: &str = "Quit";
const ALL_GENRES_LABEL: &str = "All";

fn ensure_interactive(what: &str) -> anyhow::Result<()> {
    if std::io::stdin().is_terminal() {
        Ok(())
    } else {
        Err(CliError::invalid_input_with_hint(
            format!("Interactive {} required", what),
            "Pass the values as flags or run on a TTY.",
        )
        .into())
    }
}

/// Prompt for a line of text, returned exactly as typed. Empty answers are
/// accepted.
pub fn prompt_input(prompt: &str, default: Option<&str>) -> anyhow::Result<String> {
    ensure_interactive("input")?;
    let theme = ColorfulTheme::default();
    let builder = Input::<String>::with_theme(&theme)
        .with_prompt(prompt)
        .allow_empty(true);
    let value = match default {
        Some(def) => builder.default(def.to_string()).interact_text()?,
        None => builder.interact_text()?,
    };
    Ok(value)
}

/// Prompt for a choice from `options`, returning its index.
pub fn prompt_select(prompt: &str, options: &[String], default: usize) -> anyhow::Result<usize> {
    ensure_interactive("selection")?;
    let theme = ColorfulTheme::default();
    let index = Select::with_theme(&theme)
        .with_prompt(prompt)
        .items(options)
        .default(default)
        .interact()?;
    Ok(index)
}

pub fn prompt_confirm(prompt: &str, default: bool) -> anyhow::Result<bool> {
    ensure_interactive("confirmation")?;
    let theme = ColorfulTheme::default();
    let answer = Confirm::with_theme(&theme)
        .with_prompt(prompt)
        .default(default)
        .interact()?;
    Ok(answer)
}

/// Parse a publication year typed at a prompt.
pub fn parse_year(input: &str) -> Result<i32, String> {
    let year: i32 = input
        .trim()
        .parse()
        .map_err(|_| "Please enter a whole number".to_string())?;
    if is_valid_publication_year(year) {
        Ok(year)
    } else {
        Err(format!(
            "Year must be between {} and {}",
            MIN_PUBLICATION_YEAR, MAX_PUBLICATION_YEAR
        ))
    }
}

fn prompt_year() -> anyhow::Result<i32> {
    ensure_interactive("input")?;
    let theme = ColorfulTheme::default();
    let raw = Input::<String>::with_theme(&theme)
        .with_prompt("Publication year")
        .validate_with(|input: &String| parse_year(input).map(|_| ()))
        .interact_text()?;
    parse_year(&raw).map_err(|msg| CliError::invalid_input(msg).into())
}

/// Values already known before the book form runs.
#[derive(Debug, Default, Clone)]
pub struct BookDraft {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub read: Option<bool>,
}

impl BookDraft {
    /// Whether title, author and year are all present.
    pub fn is_complete(&self) -> bool {
        self.title.is_some() && self.author.is_some() && self.year.is_some()
    }
}

/// Ask for every field `draft` is missing and build the new book.
pub fn book_form(draft: BookDraft) -> anyhow::Result<NewBook> {
    let title = match draft.title {
        Some(title) => title,
        None => prompt_input("Title", None)?,
    };
    let author = match draft.author {
        Some(author) => author,
        None => prompt_input("Author", None)?,
    };
    let year = match draft.year {
        Some(year) => year,
        None => prompt_year()?,
    };
    let genre = match draft.genre {
        Some(genre) => genre,
        None => prompt_input("Genre", Some(""))?,
    };
    let read = match draft.read {
        Some(read) => read,
        None => prompt_confirm("Have you read it?", false)?,
    };

    Ok(NewBook::new(title, author, year)
        .with_genre(genre)
        .with_read_status(read))
}

/// Menu item text for a book.
pub fn book_choice(book: &Book) -> String {
    format!("{} - {}", book.id, book.title)
}

/// Fuzzy picker over `books`. `None` when the user backs out.
pub fn select_book(prompt: &str, books: &[Book]) -> anyhow::Result<Option<BookId>> {
    ensure_interactive("selection")?;
    let items: Vec<String> = books.iter().map(book_choice).collect();
    let theme = ColorfulTheme::default();
    let picked = FuzzySelect::with_theme(&theme)
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact_opt()?;
    Ok(picked.and_then(|index| books.get(index)).map(|book| book.id))
}

/// Main menu. `None` means quit.
pub fn select_action() -> anyhow::Result<Option<Action>> {
    let mut options: Vec<String> = Action::ALL.iter().map(|a| a.label().to_string()).collect();
    options.push(QUIT_LABEL.to_string());
    let index = prompt_select("What would you like to do?", &options, 0)?;
    Ok(Action::ALL.get(index).copied())
}

/// Genre picker options: "All" followed by the genres in the library.
pub fn genre_options(genres: &[String]) -> Vec<String> {
    std::iter::once(ALL_GENRES_LABEL.to_string())
        .chain(genres.iter().cloned())
        .collect()
}

/// Search form: term, genre, read status and sort order.
pub fn search_form(genres: &[String]) -> anyhow::Result<(SearchQuery, SortKey)> {
    let term = prompt_input("Search (blank for all)", Some(""))?;

    let genre_choices = genre_options(genres);
    let genre = match prompt_select("Genre", &genre_choices, 0)? {
        0 => GenreFilter::All,
        index => GenreFilter::Named(genre_choices[index].clone()),
    };

    let status_choices: Vec<String> = ReadFilter::ALL
        .iter()
        .map(|f| f.label().to_string())
        .collect();
    let read = ReadFilter::ALL[prompt_select("Read status", &status_choices, 0)?];

    let sort_choices: Vec<String> = SortKey::ALL.iter().map(|k| k.label().to_string()).collect();
    let sort = SortKey::ALL[prompt_select("Sort by", &sort_choices, 0)?];

    Ok((SearchQuery::new().term(term).genre(genre).read(read), sort))
}

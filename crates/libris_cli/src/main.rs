//! Interactive menu entry point for the book catalog.
//!
//! # Responsibility
//! - Drive the numbered menu loop over stdin/stdout.
//! - Translate user input into `libris_core` service calls.
//!
//! # Invariants
//! - Every failure is reported as printed text; nothing here terminates
//!   the process except the explicit exit choice or stdin EOF.
//! - The loop and each operation are written against `BufRead`/`Write`
//!   so tests can script full sessions.

use libris_core::{
    core_version, default_log_level, init_logging, Book, BookStatus, CatalogService,
    JsonFileBookRepository, RepoError,
};
use log::{info, warn};
use std::io::{self, BufRead, Write};
use uuid::Uuid;

const DATA_FILE: &str = "library.json";
const LOG_DIR_NAME: &str = "logs";

fn main() {
    setup_logging();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut out = stdout.lock();

    let result = open_repository(DATA_FILE, &mut out)
        .and_then(|repo| run_menu(&mut input, &mut out, &mut CatalogService::new(repo)));
    if let Err(err) = result {
        eprintln!("console i/o failed: {err}");
    }
}

/// Best-effort logging bootstrap; the catalog works without diagnostics.
fn setup_logging() {
    let Ok(cwd) = std::env::current_dir() else {
        return;
    };
    let log_dir = cwd.join(LOG_DIR_NAME);
    let Some(log_dir) = log_dir.to_str() else {
        return;
    };
    if let Err(err) = init_logging(default_log_level(), log_dir) {
        eprintln!("logging disabled: {err}");
        return;
    }
    info!(
        "event=cli_start module=cli status=ok core_version={}",
        core_version()
    );
}

/// Opens the catalog, falling back to an empty one on unreadable content.
///
/// Prior data stays on disk until the next save overwrites it.
fn open_repository<W: Write>(path: &str, out: &mut W) -> io::Result<JsonFileBookRepository> {
    match JsonFileBookRepository::open(path) {
        Ok(repo) => Ok(repo),
        Err(err) => {
            warn!("event=catalog_open module=cli status=error error={err}");
            writeln!(
                out,
                "Error: the catalog file is corrupted or unreadable; starting with an empty library."
            )?;
            Ok(JsonFileBookRepository::empty(path))
        }
    }
}

fn run_menu<R, W>(
    input: &mut R,
    out: &mut W,
    service: &mut CatalogService<JsonFileBookRepository>,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(out)?;
        writeln!(out, "Menu:")?;
        writeln!(out, "1. Add a book")?;
        writeln!(out, "2. Delete a book")?;
        writeln!(out, "3. Search for a book")?;
        writeln!(out, "4. Show all books")?;
        writeln!(out, "5. Change a book's status")?;
        writeln!(out, "6. Exit")?;

        let Some(choice) = prompt(input, out, "Select a menu option: ")? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => add_book(input, out, service)?,
            "2" => delete_book(input, out, service)?,
            "3" => search_books(input, out, service)?,
            "4" => show_all_books(out, service)?,
            "5" => change_status(input, out, service)?,
            "6" => return Ok(()),
            _ => writeln!(out, "Invalid choice. Try again.")?,
        }
    }
}

fn add_book<R, W>(
    input: &mut R,
    out: &mut W,
    service: &mut CatalogService<JsonFileBookRepository>,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let Some(title) = prompt(input, out, "Enter the book title: ")? else {
        return Ok(());
    };
    let Some(author) = prompt(input, out, "Enter the book author: ")? else {
        return Ok(());
    };

    // Re-prompts until the year parses; EOF aborts the whole operation.
    let year = loop {
        let Some(raw) = prompt(input, out, "Enter the publication year: ")? else {
            return Ok(());
        };
        match raw.trim().parse::<i64>() {
            Ok(year) => break year,
            Err(_) => writeln!(out, "Invalid year. Try again.")?,
        }
    };

    match service.add_book(title, author, year) {
        Ok(book) => writeln!(out, "Book '{}' added.", book.title),
        Err(err) => writeln!(out, "Error: {err}"),
    }
}

fn delete_book<R, W>(
    input: &mut R,
    out: &mut W,
    service: &mut CatalogService<JsonFileBookRepository>,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let Some(raw_id) = prompt(input, out, "Enter the ID of the book to delete: ")? else {
        return Ok(());
    };

    let Ok(id) = Uuid::parse_str(&raw_id) else {
        return writeln!(out, "No book with ID '{raw_id}'.");
    };

    match service.remove_book(id) {
        Ok(()) => writeln!(out, "Book with ID '{id}' deleted."),
        Err(RepoError::NotFound(_)) => writeln!(out, "No book with ID '{id}'."),
        Err(err) => writeln!(out, "Error: {err}"),
    }
}

fn search_books<R, W>(
    input: &mut R,
    out: &mut W,
    service: &CatalogService<JsonFileBookRepository>,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let Some(term) = prompt(input, out, "Enter a search term (title, author or year): ")? else {
        return Ok(());
    };

    match service.search_books(&term) {
        Ok(results) if results.is_empty() => writeln!(out, "No books found."),
        Ok(results) => {
            writeln!(out, "Found books:")?;
            for book in &results {
                print_book(out, book)?;
            }
            Ok(())
        }
        Err(err) => writeln!(out, "Error: {err}"),
    }
}

fn show_all_books<W: Write>(
    out: &mut W,
    service: &CatalogService<JsonFileBookRepository>,
) -> io::Result<()> {
    match service.list_books() {
        Ok(books) if books.is_empty() => writeln!(out, "The library is empty."),
        Ok(books) => {
            writeln!(out, "All books:")?;
            for book in &books {
                print_book(out, book)?;
            }
            Ok(())
        }
        Err(err) => writeln!(out, "Error: {err}"),
    }
}

fn change_status<R, W>(
    input: &mut R,
    out: &mut W,
    service: &mut CatalogService<JsonFileBookRepository>,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let Some(raw_id) = prompt(input, out, "Enter the ID of the book to update: ")? else {
        return Ok(());
    };

    let Ok(id) = Uuid::parse_str(&raw_id) else {
        return writeln!(out, "No book with ID '{raw_id}'.");
    };

    let current = match service.get_book(id) {
        Ok(Some(book)) => book,
        Ok(None) => return writeln!(out, "No book with ID '{id}'."),
        Err(err) => return writeln!(out, "Error: {err}"),
    };

    writeln!(out, "Current status: '{}'", current.status)?;
    let Some(raw_status) = prompt(input, out, "Enter the new status ('available' or 'lent'): ")?
    else {
        return Ok(());
    };

    let Some(status) = BookStatus::parse(&raw_status) else {
        return writeln!(out, "Invalid status. Status not changed.");
    };

    match service.set_status(id, status) {
        Ok(()) => writeln!(out, "Status of book '{id}' changed to '{status}'."),
        Err(RepoError::NotFound(_)) => writeln!(out, "No book with ID '{id}'."),
        Err(err) => writeln!(out, "Error: {err}"),
    }
}

fn print_book<W: Write>(out: &mut W, book: &Book) -> io::Result<()> {
    writeln!(out, "ID: {}", book.id)?;
    writeln!(out, "Title: {}", book.title)?;
    writeln!(out, "Author: {}", book.author)?;
    writeln!(out, "Year: {}", book.year)?;
    writeln!(out, "Status: {}", book.status)?;
    writeln!(out, "{}", "-".repeat(20))
}

/// Writes `label`, then reads one line. Returns `None` on EOF.
fn prompt<R, W>(input: &mut R, out: &mut W, label: &str) -> io::Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(out, "{label}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

use std::io;
use std::io::{BufRead, Write};
use tracing::info;
use crate::books::domain::Book;
use crate::books::dto::BookDto;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
use crate::catalog::command::update_status_cmd::{UpdateBookStatusCommand, UpdateBookStatusCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::utils::console::prompt;

const MENU: &str = "\n1. Add a book\n2. Remove a book\n3. Search books\n4. List all books\n5. Update book status\n6. Exit";

// ConsoleController drives the menu over a pair of plain IO handles, which
// keeps whole sessions scriptable in tests.
pub(crate) struct ConsoleController {
    catalog_service: Box<dyn CatalogService>,
}

impl ConsoleController {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }

    // Runs the menu loop until the exit choice or end of input.
    pub(crate) fn run(&mut self, input: &mut dyn BufRead, output: &mut dyn Write) -> io::Result<()> {
        info!("console session started");
        loop {
            writeln!(output, "{}", MENU)?;
            let choice = match prompt(input, output, "\nEnter your choice: ")? {
                Some(choice) => choice,
                None => break,
            };
            match choice.as_str() {
                "1" => self.add_book(input, output)?,
                "2" => self.remove_book(input, output)?,
                "3" => self.search_books(input, output)?,
                "4" => self.list_books(output)?,
                "5" => self.update_book_status(input, output)?,
                "6" => break,
                _ => writeln!(output, "Invalid choice. Please try again.")?,
            }
        }
        info!("console session ended");
        Ok(())
    }

    fn add_book(&mut self, input: &mut dyn BufRead, output: &mut dyn Write) -> io::Result<()> {
        let title = match prompt(input, output, "Title: ")? {
            Some(title) => title,
            None => return Ok(()),
        };
        let author = match prompt(input, output, "Author: ")? {
            Some(author) => author,
            None => return Ok(()),
        };
        let year_line = match prompt(input, output, "Publication year: ")? {
            Some(year_line) => year_line,
            None => return Ok(()),
        };
        let year = match year_line.trim().parse::<i32>() {
            Ok(year) => year,
            Err(_) => {
                return writeln!(output, "Publication year must be a whole number.");
            }
        };
        let res = AddBookCommand::new(self.catalog_service.as_mut())
            .execute(AddBookCommandRequest::new(title.as_str(), author.as_str(), year));
        match res {
            Ok(res) => writeln!(output, "Book added: {} (ID: {})", res.book.title, res.book.book_id),
            Err(err) => writeln!(output, "{}", render_error(&err)),
        }
    }

    fn remove_book(&mut self, input: &mut dyn BufRead, output: &mut dyn Write) -> io::Result<()> {
        let book_id = match prompt(input, output, "Book ID: ")? {
            Some(book_id) => book_id,
            None => return Ok(()),
        };
        let res = RemoveBookCommand::new(self.catalog_service.as_mut())
            .execute(RemoveBookCommandRequest::new(book_id));
        match res {
            Ok(res) => writeln!(output, "Book removed: {}", res.book.title),
            Err(err) => writeln!(output, "{}", render_error(&err)),
        }
    }

    fn search_books(&mut self, input: &mut dyn BufRead, output: &mut dyn Write) -> io::Result<()> {
        let search_term = match prompt(input, output, "Search (title, author or year): ")? {
            Some(search_term) => search_term,
            None => return Ok(()),
        };
        let res = SearchBooksCommand::new(self.catalog_service.as_ref())
            .execute(SearchBooksCommandRequest::new(search_term.as_str()));
        match res {
            Ok(res) => {
                if res.books.is_empty() {
                    writeln!(output, "Nothing found for: '{}'", search_term)
                } else {
                    print_books(output, res.books.as_slice())
                }
            }
            Err(err) => writeln!(output, "{}", render_error(&err)),
        }
    }

    fn list_books(&mut self, output: &mut dyn Write) -> io::Result<()> {
        let res = ListBooksCommand::new(self.catalog_service.as_ref())
            .execute(ListBooksCommandRequest);
        match res {
            Ok(res) => {
                if res.books.is_empty() {
                    writeln!(output, "The catalog is empty.")
                } else {
                    print_books(output, res.books.as_slice())
                }
            }
            Err(err) => writeln!(output, "{}", render_error(&err)),
        }
    }

    fn update_book_status(&mut self, input: &mut dyn BufRead, output: &mut dyn Write) -> io::Result<()> {
        let book_id = match prompt(input, output, "Book ID: ")? {
            Some(book_id) => book_id,
            None => return Ok(()),
        };
        let new_status = match prompt(input, output, "New status (в наличии/выдана): ")? {
            Some(new_status) => new_status,
            None => return Ok(()),
        };
        let res = UpdateBookStatusCommand::new(self.catalog_service.as_mut())
            .execute(UpdateBookStatusCommandRequest::new(book_id, new_status));
        match res {
            Ok(res) => writeln!(output, "Book status updated: {} (now: {})", res.book.title, res.book.status()),
            Err(err) => writeln!(output, "{}", render_error(&err)),
        }
    }
}

fn print_books(output: &mut dyn Write, books: &[BookDto]) -> io::Result<()> {
    for book in books {
        writeln!(output, "ID: {}, Title: {}, Author: {}, Year: {}, Status: {}",
                 book.book_id, book.title, book.author, book.year, book.status())?;
    }
    Ok(())
}

// Every command error becomes one printed line. Business errors carry
// user-ready messages; storage and parsing failures get an error prefix.
fn render_error(err: &CommandError) -> String {
    match err {
        CommandError::DuplicateKey { message } => {
            message.to_string()
        }
        CommandError::NotFound { message } => {
            message.to_string()
        }
        CommandError::Validation { message, .. } => {
            message.to_string()
        }
        CommandError::Storage { message, retryable, .. } => {
            if *retryable {
                format!("error: {} (temporary, try again)", message)
            } else {
                format!("error: {}", message)
            }
        }
        CommandError::Serialization { message } => {
            format!("error: {}", message)
        }
    }
}

use crate::domain::{Book, Catalog, SearchQuery};
use std::io::{self, BufRead, Write};

use super::command::MenuCommand;
use super::input::{parse_book_id, strip_line_ending};

/// Whether the loop keeps going after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Interactive text menu over a catalog
///
/// Reads commands from `input`, dispatches them to the catalog and prints
/// results to `output`. Ends on the exit command or when input runs out.
/// Per-command errors (blank title, unknown ID, malformed ID) are printed and
/// the loop continues; only terminal I/O errors escape.
pub struct Menu<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn run(&mut self, catalog: &mut Catalog) -> io::Result<()> {
        loop {
            self.print_commands()?;
            let Some(choice) = self.prompt("Enter option number: ")? else {
                tracing::debug!("Input closed, leaving menu");
                return Ok(());
            };

            let flow = match choice.parse::<MenuCommand>() {
                Ok(command) => self.dispatch(command, catalog)?,
                Err(_) => {
                    writeln!(self.output, "Invalid choice")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, command: MenuCommand, catalog: &mut Catalog) -> io::Result<Flow> {
        tracing::debug!(?command, "Menu command selected");
        match command {
            MenuCommand::AddBook => self.add_book(catalog),
            MenuCommand::RemoveBook => self.remove_book(catalog),
            MenuCommand::SearchBooks => self.search_books(catalog),
            MenuCommand::ListBooks => self.list_books(catalog),
            MenuCommand::ChangeStatus => self.change_status(catalog),
            MenuCommand::Exit => Ok(Flow::Exit),
        }
    }

    fn add_book(&mut self, catalog: &mut Catalog) -> io::Result<Flow> {
        let Some(title) = self.prompt("Enter book title: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(author) = self.prompt("Enter book author: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(year) = self.prompt("Enter publication year: ")? else {
            return Ok(Flow::Exit);
        };

        match catalog.add(&title, &author, &year) {
            Ok(book) => writeln!(self.output, "Book added: {}", book)?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn remove_book(&mut self, catalog: &mut Catalog) -> io::Result<Flow> {
        let Some(raw) = self.prompt("Enter ID of the book to remove: ")? else {
            return Ok(Flow::Exit);
        };

        let id = match parse_book_id(&raw) {
            Ok(id) => id,
            Err(e) => {
                writeln!(self.output, "{}", e)?;
                return Ok(Flow::Continue);
            }
        };

        match catalog.remove(id) {
            Ok(_) => writeln!(self.output, "Book removed")?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn search_books(&mut self, catalog: &Catalog) -> io::Result<Flow> {
        let Some(title) = self.prompt("Title (leave empty to skip): ")? else {
            return Ok(Flow::Exit);
        };
        let Some(author) = self.prompt("Author (leave empty to skip): ")? else {
            return Ok(Flow::Exit);
        };
        let Some(year) = self.prompt("Year (leave empty to skip): ")? else {
            return Ok(Flow::Exit);
        };

        let results = catalog.search(&SearchQuery::new(&title, &author, &year));
        if results.is_empty() {
            writeln!(self.output, "No books found")?;
        } else {
            writeln!(self.output, "Found books:")?;
            self.print_books(results)?;
        }
        Ok(Flow::Continue)
    }

    fn list_books(&mut self, catalog: &Catalog) -> io::Result<Flow> {
        if catalog.is_empty() {
            writeln!(self.output, "The catalog is empty")?;
        } else {
            self.print_books(catalog.list())?;
        }
        Ok(Flow::Continue)
    }

    fn change_status(&mut self, catalog: &mut Catalog) -> io::Result<Flow> {
        let Some(raw) = self.prompt("Enter ID of the book to change status: ")? else {
            return Ok(Flow::Exit);
        };

        let id = match parse_book_id(&raw) {
            Ok(id) => id,
            Err(e) => {
                writeln!(self.output, "{}", e)?;
                return Ok(Flow::Continue);
            }
        };

        match catalog.toggle_status(id) {
            Ok(book) => writeln!(self.output, "Status changed: {}", book)?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn print_commands(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Menu:")?;
        for command in MenuCommand::ALL {
            writeln!(self.output, "{}: {}", command.number(), command.label())?;
        }
        Ok(())
    }

    fn print_books<'a>(&mut self, books: impl IntoIterator<Item = &'a Book>) -> io::Result<()> {
        for book in books {
            writeln!(self.output, "{}", book)?;
        }
        Ok(())
    }

    /// Print a prompt and read one line. `None` once input is exhausted.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(strip_line_ending(&line).to_string()))
    }
}

//! Menu session
//!
//! Drives the List / New / Edit / Delete / Quit loop against a `RecordStore`.
//! Generic over the input and output streams so it can run on a terminal or
//! on scripted buffers.

use std::io::{BufRead, Write};

use crate::error::{Result, StockError};
use crate::record::Record;
use crate::store::{RecordStore, SlotId};

use super::input::{parse_int, parse_price, parse_quantity, strip_line_ending};
use super::render::{header, product_row, CLEAR_LINES};

/// What the main loop does after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    /// Input ran out; leave the loop as if the user had quit
    EndOfInput,
}

/// Editable record field
#[derive(Debug, Clone, Copy)]
enum Field {
    Description,
    Quantity,
    Price,
}

impl Field {
    fn prompt(self) -> &'static str {
        match self {
            Field::Description => "New description: ",
            Field::Quantity => "New quantity: ",
            Field::Price => "New price: ",
        }
    }
}

/// Interactive stock-control session
pub struct Session<'a, R, W> {
    /// Store the session reads and writes (owned by the caller)
    store: &'a RecordStore,

    input: R,

    output: W,

    /// Print blank lines before each screen
    clear_screen: bool,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(store: &'a RecordStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
            clear_screen: true,
        }
    }

    /// Enable or disable screen clearing
    pub fn clear_screen(mut self, enabled: bool) -> Self {
        self.clear_screen = enabled;
        self
    }

    /// Give back the output stream
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the main menu until the user quits or input ends
    ///
    /// Full store, unknown ids and out-of-range ids are reported to the user
    /// and the loop continues. I/O and corruption errors end the session.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.clear()?;

            let Some(choice) = self.main_menu()? else {
                return Ok(());
            };

            let flow = match choice.chars().next() {
                Some('1') => self.list()?,
                Some('2') => self.new_product()?,
                Some('3') => self.edit_product()?,
                Some('4') => self.delete_product()?,
                Some('q') => return Ok(()),
                _ => {
                    write!(self.output, "Invalid Option!")?;
                    self.pause()?
                }
            };

            if flow == Flow::EndOfInput {
                return Ok(());
            }
        }
    }

    // =========================================================================
    // Screens
    // =========================================================================

    /// Show the main menu and read the choice; `None` on end of input
    fn main_menu(&mut self) -> Result<Option<String>> {
        writeln!(self.output, "----- STOCK CONTROL -----")?;
        writeln!(self.output, " 1. List")?;
        writeln!(self.output, " 2. New")?;
        writeln!(self.output, " 3. Edit")?;
        writeln!(self.output, " 4. Delete\n")?;
        writeln!(self.output, " q. Quit")?;
        writeln!(self.output, "\n")?;

        self.prompt("Choose option: ")
    }

    fn list(&mut self) -> Result<Flow> {
        self.clear()?;
        writeln!(self.output, "{}", header())?;
        for entry in self.store.iter() {
            let (id, record) = entry?;
            writeln!(self.output, "{}", product_row(id, &record))?;
        }
        self.pause()
    }

    fn new_product(&mut self) -> Result<Flow> {
        self.clear()?;
        writeln!(self.output, "NEW PRODUCT\n")?;

        let Some(description) = self.prompt("Description: ")? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(quantity) = self.prompt("Initial quantity: ")? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(price) = self.prompt("Price: ")? else {
            return Ok(Flow::EndOfInput);
        };

        let record = Record::new(description, parse_quantity(&quantity), parse_price(&price));

        match self.store.create(&record) {
            Ok(id) => {
                let stored = self.store.get(id)?;
                self.clear()?;
                writeln!(self.output, "{}", header())?;
                writeln!(self.output, "{}", product_row(id, &stored))?;
            }
            Err(StockError::StoreFull { .. }) => {
                writeln!(self.output, "Error: No more slots!\n")?;
            }
            Err(e) => return Err(e),
        }
        self.pause()
    }

    fn edit_product(&mut self) -> Result<Flow> {
        self.clear()?;
        let Some(line) = self.prompt("Product id: ")? else {
            return Ok(Flow::EndOfInput);
        };
        let id = parse_int(&line);

        let Some(mut record) = self.lookup(id)? else {
            writeln!(self.output, "Error, product not found!")?;
            return self.pause();
        };

        loop {
            self.clear()?;
            writeln!(self.output, "EDITING PRODUCT")?;
            writeln!(self.output, "{}", header())?;
            writeln!(self.output, "{}", product_row(id, &record))?;
            writeln!(self.output, "\n")?;
            writeln!(self.output, " 1. Edit description.")?;
            writeln!(self.output, " 2. Edit quantity.")?;
            writeln!(self.output, " 3. Edit Price.\n")?;
            writeln!(self.output, " 0. Return.\n")?;

            let Some(option) = self.prompt("Option: ")? else {
                return Ok(Flow::EndOfInput);
            };

            let field = match parse_int(&option) {
                0 => break,
                1 => Field::Description,
                2 => Field::Quantity,
                3 => Field::Price,
                _ => continue,
            };

            let Some(value) = self.prompt(field.prompt())? else {
                return Ok(Flow::EndOfInput);
            };
            match field {
                Field::Description => record.description = value,
                Field::Quantity => record.quantity = parse_quantity(&value),
                Field::Price => record.price = parse_price(&value),
            }

            self.store.update(id, &record)?;
            record = self.store.get(id)?;
        }

        writeln!(self.output, "Success editing.")?;
        self.pause()
    }

    fn delete_product(&mut self) -> Result<Flow> {
        self.clear()?;
        let Some(line) = self.prompt("Insert product ID to delete: ")? else {
            return Ok(Flow::EndOfInput);
        };
        let id = parse_int(&line);

        let Some(record) = self.lookup(id)? else {
            writeln!(self.output, "Error, can't find product!")?;
            return self.pause();
        };

        writeln!(self.output, "\n\n")?;
        writeln!(self.output, "{}", header())?;
        writeln!(self.output, "{}", product_row(id, &record))?;
        writeln!(self.output, "\n")?;
        writeln!(self.output, "Are you sure to delete this product?")?;

        let Some(answer) = self.prompt("Type y(yes) or n(no): ")? else {
            return Ok(Flow::EndOfInput);
        };
        if !answer.starts_with('y') {
            return Ok(Flow::Continue);
        }

        self.store.delete(id)?;
        writeln!(self.output, "Success deleting product.")?;
        self.pause()
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Fetch a record, mapping empty and out-of-range slots to `None`
    fn lookup(&self, id: SlotId) -> Result<Option<Record>> {
        match self.store.get(id) {
            Ok(record) => Ok(Some(record)),
            Err(e) if e.is_recoverable() => {
                tracing::debug!(id, error = %e, "lookup failed");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Print `text` and read one line, without its line ending
    ///
    /// Returns `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(strip_line_ending(&line).to_string()))
    }

    fn pause(&mut self) -> Result<Flow> {
        match self.prompt("Press ENTER to continue...")? {
            Some(_) => Ok(Flow::Continue),
            None => Ok(Flow::EndOfInput),
        }
    }

    fn clear(&mut self) -> Result<()> {
        if self.clear_screen {
            write!(self.output, "{}", "\n".repeat(CLEAR_LINES))?;
        }
        Ok(())
    }
}

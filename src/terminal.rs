//! Terminal
//!
//! A line-oriented front end for the counter. Each line is one edit or
//! action; after every edit the live bill is printed again so the cashier
//! always sees the current totals.

use std::{
    io::{self, BufRead, Write},
    str::FromStr,
};

use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    amounts::format_money,
    catalog::Catalog,
    menu::Category,
    records::past_records,
    session::{Session, SessionError},
    tax::TaxRate,
};

const HELP: &str = "\
Commands:
  name <text>            set the customer name
  contact <digits>       set the contact number
  qty <item> = <amount>  set the quantity typed for an item
  clear                  reset all quantities
  bill                   finalise the bill
  next                   start over for the next customer
  menu                   show the menu
  records                look up past bills
  help                   show this help
  quit                   leave";

/// Errors raised while reading a command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// The first word is not a command.
    #[error("unknown command `{0}`, type `help` for a list")]
    Unknown(String),

    /// `qty` was given without `item = amount`.
    #[error("expected `qty <item> = <amount>`")]
    MalformedQuantity,
}

/// One parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the customer name
    Name(String),

    /// Propose a contact number
    Contact(String),

    /// Record the raw quantity for an item
    Quantity {
        /// Menu item name
        item: String,

        /// Text typed into the quantity field
        raw: String,
    },

    /// Clear every quantity
    Clear,

    /// Finalise the bill
    Bill,

    /// Start over for the next customer
    Next,

    /// Print the menu
    Menu,

    /// Look up past bills
    Records,

    /// Print the command list
    Help,

    /// Leave the session
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match word.to_ascii_lowercase().as_str() {
            "name" => Ok(Command::Name(rest.to_string())),
            "contact" => Ok(Command::Contact(rest.to_string())),
            "qty" => {
                let (item, raw) = rest
                    .rsplit_once('=')
                    .ok_or(CommandError::MalformedQuantity)?;

                let item = item.trim();

                if item.is_empty() {
                    return Err(CommandError::MalformedQuantity);
                }

                Ok(Command::Quantity {
                    item: item.to_string(),
                    raw: raw.trim().to_string(),
                })
            }
            "clear" => Ok(Command::Clear),
            "bill" => Ok(Command::Bill),
            "next" => Ok(Command::Next),
            "menu" => Ok(Command::Menu),
            "records" => Ok(Command::Records),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(word.to_string())),
        }
    }
}

/// Whether the session loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line
    Continue,

    /// Stop
    Quit,
}

/// An interactive billing session over any line reader and writer.
#[derive(Debug)]
pub struct Terminal<'c, 'a> {
    catalog: &'c Catalog<'a>,
    tax_rate: TaxRate,
    tax_label: String,
    session: Session,
}

impl<'c, 'a> Terminal<'c, 'a> {
    /// Create a terminal over a catalog.
    pub fn new(catalog: &'c Catalog<'a>, tax_rate: TaxRate, tax_label: impl Into<String>) -> Self {
        Self {
            catalog,
            tax_rate,
            tax_label: tax_label.into(),
            session: Session::new(),
        }
    }

    /// The session being edited
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Read commands until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails.
    pub fn run(&mut self, input: impl BufRead, mut out: impl Write) -> io::Result<()> {
        write_menu(self.catalog, &mut out)?;
        writeln!(out, "\n{HELP}")?;

        for line in input.lines() {
            let line = line?;

            if line.trim().is_empty() {
                continue;
            }

            let flow = match line.parse::<Command>() {
                Ok(command) => self.handle(command, &mut out)?,
                Err(err) => {
                    writeln!(out, "{err}")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                break;
            }
        }

        Ok(())
    }

    /// Apply one command and print its outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn handle(&mut self, command: Command, out: &mut impl Write) -> io::Result<Flow> {
        debug!(?command, "handling command");

        match command {
            Command::Name(name) => {
                self.session.set_name(name);
                self.write_preview(out)?;
            }
            Command::Contact(contact) => {
                if self.session.set_contact(contact) {
                    self.write_preview(out)?;
                } else {
                    writeln!(out, "Contact number must contain digits only.")?;
                }
            }
            Command::Quantity { item, raw } => {
                if !self.catalog.contains(&item) {
                    writeln!(out, "No menu item named `{item}`.")?;
                    return Ok(Flow::Continue);
                }

                self.session.set_quantity(item, raw);
                self.write_preview(out)?;
            }
            Command::Clear => {
                self.session.reset_selections();
                self.write_preview(out)?;
            }
            Command::Bill => match self.session.finalize(self.catalog, self.tax_rate) {
                Ok(bill) => {
                    bill.write_table(&mut *out, &self.tax_label)?;
                    writeln!(out, "\nBill finalised.")?;
                }
                Err(SessionError::Validation(err)) => writeln!(out, "Warning: {err}")?,
                Err(err) => writeln!(out, "Error: {err}")?,
            },
            Command::Next => {
                self.session.next_customer();
                writeln!(out, "Ready for the next customer.")?;
            }
            Command::Menu => write_menu(self.catalog, &mut *out)?,
            Command::Records => {
                if let Err(err) = past_records() {
                    writeln!(out, "{err}")?;
                }
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    fn write_preview(&self, out: &mut impl Write) -> io::Result<()> {
        match self.session.preview(self.catalog, self.tax_rate) {
            Ok(bill) => writeln!(out, "\n{}\n", bill.summary(&self.tax_label)),
            Err(err) => {
                warn!(%err, "could not price the live bill");
                writeln!(out, "Error: {err}")
            }
        }
    }
}

/// Writes the menu as one table per category, in display order.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_menu(catalog: &Catalog<'_>, mut out: impl Write) -> io::Result<()> {
    for category in Category::ALL {
        let mut items = catalog.in_category(category).peekable();

        if items.peek().is_none() {
            continue;
        }

        let mut builder = Builder::default();
        builder.push_record([category.heading(), "Price"]);

        for item in items {
            builder.push_record([item.name.clone(), format_money(&item.price)]);
        }

        let mut table = builder.build();
        table.with(Style::modern_rounded());
        table.modify(Columns::new(1..2), Alignment::right());

        writeln!(out, "{table}")?;
    }

    Ok(())
}

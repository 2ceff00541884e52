//! Interactive menu shell.
//!
//! The shell owns a [`Session`] and a pair of I/O handles and runs the menu
//! loop against them. Keeping the handles generic lets the whole dialogue
//! run against in-memory buffers in tests, with real stdin and stdout wired
//! in only by the binary.

pub mod input;

use crate::api::Session;
use crate::commands::list::ListOrder;
use crate::commands::{CmdMessage, CmdResult, MessageLevel};
use crate::error::Result;
use crate::model::Record;
use crate::notebook::SearchKey;
use crate::store::SnapshotStore;
use colored::Colorize;
use std::io::{BufRead, Write};

pub struct Shell<S: SnapshotStore, R: BufRead, W: Write> {
    session: Session<S>,
    input: R,
    output: W,
}

impl<S: SnapshotStore, R: BufRead, W: Write> Shell<S, R, W> {
    pub fn new(session: Session<S>, input: R, output: W) -> Self {
        Shell {
            session,
            input,
            output,
        }
    }

    /// Run the menu loop until the user picks Exit or the input stream ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let choice = input::read_int_in_range(&mut self.input, &mut self.output, 1, 5)?;
            match choice {
                1 => self.action_add()?,
                2 => self.action_remove()?,
                3 => self.action_list()?,
                4 => self.action_search()?,
                _ => {
                    log::debug!("session closed by user");
                    return Ok(());
                }
            }
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "Choose an action:")?;
        writeln!(self.output, "1) Add a record")?;
        writeln!(self.output, "2) Remove a record")?;
        writeln!(self.output, "3) List all records")?;
        writeln!(self.output, "4) Search records")?;
        writeln!(self.output, "5) Exit")?;
        writeln!(self.output, "Enter the action number:")?;
        Ok(())
    }

    fn action_add(&mut self) -> Result<()> {
        writeln!(self.output, "Adding a new record.")?;

        input::prompt(&mut self.output, "Full name: ")?;
        let full_name = input::read_free_text(&mut self.input)?;

        input::prompt(
            &mut self.output,
            "Date of birth (YYYY-MM-DD, for example, 1995-02-24): ",
        )?;
        let birth_date = input::read_date(&mut self.input, &mut self.output)?;

        input::prompt(&mut self.output, "Phone number: ")?;
        let phone = input::read_free_text(&mut self.input)?;

        input::prompt(&mut self.output, "Note: ")?;
        let note = input::read_free_text(&mut self.input)?;

        let result = self
            .session
            .add(Record::new(full_name, birth_date, phone, note));
        self.report(&result)
    }

    fn action_remove(&mut self) -> Result<()> {
        if self.session.is_empty() {
            writeln!(
                self.output,
                "No records to remove. Add at least one record first!"
            )?;
            return Ok(());
        }

        writeln!(self.output, "Enter the number of the record to remove.")?;
        writeln!(self.output, "0) Cancel")?;
        let listing = self.session.list(ListOrder::AsIs);
        self.print_records(&listing.listed)?;

        let count = self.session.record_count() as i64;
        let choice = input::read_int_in_range(&mut self.input, &mut self.output, 0, count)?;
        if choice == 0 {
            writeln!(self.output, "Removal cancelled.")?;
            return Ok(());
        }

        let result = self.session.remove_at(choice as usize);
        self.report(&result)
    }

    fn action_list(&mut self) -> Result<()> {
        if self.session.is_empty() {
            writeln!(
                self.output,
                "No records to show. Add at least one record first!"
            )?;
            return Ok(());
        }

        writeln!(self.output, "Choose an action:")?;
        writeln!(self.output, "1) Show records as they are")?;
        writeln!(self.output, "2) Show records sorted by full name")?;
        writeln!(self.output, "Enter the action number:")?;
        let choice = input::read_int_in_range(&mut self.input, &mut self.output, 1, 2)?;
        let order = if choice == 2 {
            ListOrder::ByName
        } else {
            ListOrder::AsIs
        };

        let result = self.session.list(order);
        self.report(&result)
    }

    fn action_search(&mut self) -> Result<()> {
        writeln!(self.output, "Choose an action:")?;
        writeln!(self.output, "1) Search by full name")?;
        writeln!(self.output, "2) Search by phone number")?;
        writeln!(self.output, "3) Search by date of birth")?;
        writeln!(self.output, "4) Search by note")?;
        writeln!(self.output, "Enter the action number:")?;
        let choice = input::read_int_in_range(&mut self.input, &mut self.output, 1, 4)?;

        let key = if choice == 3 {
            input::prompt(
                &mut self.output,
                "Date of birth (YYYY-MM-DD, for example, 1995-02-24): ",
            )?;
            SearchKey::BirthDate(input::read_date(&mut self.input, &mut self.output)?)
        } else {
            input::prompt(&mut self.output, "Search text: ")?;
            let query = input::read_non_empty(&mut self.input, &mut self.output)?;
            match choice {
                1 => SearchKey::Name(query),
                2 => SearchKey::Phone(query),
                _ => SearchKey::Note(query),
            }
        };

        let result = self.session.search(&key);
        if !result.listed.is_empty() {
            writeln!(self.output, "Found records:")?;
        }
        self.report(&result)
    }

    /// Print a command result: the listed records first, then the messages.
    pub fn report(&mut self, result: &CmdResult) -> Result<()> {
        self.print_records(&result.listed)?;
        self.print_messages(&result.messages)
    }

    fn print_records(&mut self, records: &[Record]) -> Result<()> {
        for (index, record) in records.iter().enumerate() {
            writeln!(self.output, "{}) {}", index + 1, record)?;
        }
        Ok(())
    }

    fn print_messages(&mut self, messages: &[CmdMessage]) -> Result<()> {
        for message in messages {
            let line = match message.level {
                MessageLevel::Info => message.content.dimmed(),
                MessageLevel::Success => message.content.green(),
                MessageLevel::Warning => message.content.yellow(),
                MessageLevel::Error => message.content.red(),
            };
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }
}

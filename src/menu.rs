//! Interactive console menu.
//!
//! The menu is the presentation layer over a [`Directory`]: it reads a choice,
//! collects the fields the operation needs, calls the directory and renders the
//! outcome as text. It holds no state of its own beyond its input and output
//! streams, and it is generic over both so sessions can be scripted in tests.

use crate::directory::{Directory, DEFAULT_CAPACITY};
use crate::error::DirectoryError;
use crate::models::Contact;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// The options offered by the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Add,
    Find,
    UpdatePhone,
    Remove,
    Exists,
    List,
    FreeSlots,
    IsFull,
    Export,
    Exit,
}

impl MenuOption {
    /// Map a numeric choice to an option.
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Self::Add),
            2 => Some(Self::Find),
            3 => Some(Self::UpdatePhone),
            4 => Some(Self::Remove),
            5 => Some(Self::Exists),
            6 => Some(Self::List),
            7 => Some(Self::FreeSlots),
            8 => Some(Self::IsFull),
            9 => Some(Self::Export),
            0 => Some(Self::Exit),
            _ => None,
        }
    }
}

const MENU_TEXT: &str = "\
======= CONTACT DIRECTORY =======
1. Add contact
2. Find contact (by first and last name)
3. Update phone
4. Remove contact
5. Check whether a contact exists
6. List contacts (sorted)
7. Show free slots
8. Check whether the directory is full
9. Export contacts as JSON
0. Exit";

/// Console menu bound to an input and an output stream.
pub struct Menu<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the menu and hand back its output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Build the directory the session works on.
    ///
    /// A preset capacity (from configuration) is used directly. Otherwise the
    /// user is asked whether they want a specific size; anything other than a
    /// positive number falls back to the default capacity.
    pub fn create_directory(&mut self, preset: Option<usize>) -> Result<Directory> {
        writeln!(self.output, "--- Directory setup ---")?;

        if let Some(capacity) = preset {
            match Directory::new(Some(capacity)) {
                Ok(directory) => {
                    writeln!(self.output, "Directory created with capacity {}", capacity)?;
                    info!(capacity, "Directory created from configuration");
                    return Ok(directory);
                }
                Err(e) => warn!(error = %e, "Ignoring configured capacity"),
            }
        } else {
            let answer = self
                .prompt(&format!(
                    "Do you want a specific size (Y/N)? (Default is {}): ",
                    DEFAULT_CAPACITY
                ))?
                .unwrap_or_default();

            if answer.trim().eq_ignore_ascii_case("y") {
                if let Some(directory) = self.prompt_capacity()? {
                    return Ok(directory);
                }
            }
        }

        writeln!(
            self.output,
            "Using default capacity ({}).",
            DEFAULT_CAPACITY
        )?;
        info!(capacity = DEFAULT_CAPACITY, "Directory created with default capacity");
        Ok(Directory::default())
    }

    fn prompt_capacity(&mut self) -> Result<Option<Directory>> {
        let Some(raw) = self.prompt("Enter the size: ")? else {
            return Ok(None);
        };

        let size = match raw.trim().parse::<i64>() {
            Ok(size) => size,
            Err(_) => {
                writeln!(self.output, "Invalid input. Not a number.")?;
                return Ok(None);
            }
        };

        if size <= 0 {
            writeln!(self.output, "Size must be positive.")?;
            return Ok(None);
        }

        let directory = Directory::new(Some(size as usize))?;
        writeln!(self.output, "Directory created with capacity {}", size)?;
        info!(capacity = size, "Directory created");
        Ok(Some(directory))
    }

    /// Run the menu loop until the user exits or input ends.
    pub fn run(&mut self, directory: &mut Directory) -> Result<()> {
        loop {
            writeln!(self.output, "{}", MENU_TEXT)?;
            let Some(line) = self.prompt("Choose an option: ")? else {
                debug!("Input closed, leaving menu");
                return Ok(());
            };

            let option = match line.trim().parse::<i64>() {
                Ok(choice) => MenuOption::from_choice(choice),
                Err(_) => {
                    writeln!(self.output, "Error: please enter a number.")?;
                    writeln!(self.output)?;
                    continue;
                }
            };

            let Some(option) = option else {
                writeln!(self.output, "Invalid option. Try again.")?;
                writeln!(self.output)?;
                continue;
            };

            debug!(?option, "Menu option selected");
            if option == MenuOption::Exit {
                writeln!(self.output, "Exiting...")?;
                return Ok(());
            }

            let completed = self.dispatch(option, directory)?;
            writeln!(self.output)?;
            if !completed {
                debug!("Input closed, leaving menu");
                return Ok(());
            }
        }
    }

    /// Execute one option. Returns `false` if input ended while reading fields.
    fn dispatch(&mut self, option: MenuOption, directory: &mut Directory) -> Result<bool> {
        match option {
            MenuOption::Add => {
                let Some(first) = self.prompt("Enter first name: ")? else {
                    return Ok(false);
                };
                let Some(last) = self.prompt("Enter last name: ")? else {
                    return Ok(false);
                };
                let Some(phone) = self.prompt("Enter phone: ")? else {
                    return Ok(false);
                };
                self.handle_add(directory, Contact::new(first, last, phone))?;
            }
            MenuOption::Find => {
                let Some((first, last)) = self.prompt_names("to find")? else {
                    return Ok(false);
                };
                match directory.find_phone(&first, &last) {
                    Ok(phone) => writeln!(self.output, "Phone of {} {}: {}", first, last, phone)?,
                    Err(e) => {
                        debug!(error = %e, "Lookup missed");
                        writeln!(self.output, "Contact '{} {}' not found.", first, last)?;
                    }
                }
            }
            MenuOption::UpdatePhone => {
                let Some((first, last)) = self.prompt_names("to update")? else {
                    return Ok(false);
                };
                let Some(phone) = self.prompt("Enter the NEW phone: ")? else {
                    return Ok(false);
                };
                match directory.update_phone(&first, &last, phone) {
                    Ok(()) => {
                        let name = format!("{} {}", first, last);
                        info!(contact = %name, "Phone updated");
                        writeln!(self.output, "Phone of '{} {}' updated.", first, last)?;
                    }
                    Err(e) => {
                        warn!(error = %e, "Phone update rejected");
                        writeln!(
                            self.output,
                            "Contact '{} {}' not found, nothing updated.",
                            first, last
                        )?;
                    }
                }
            }
            MenuOption::Remove => {
                let Some((first, last)) = self.prompt_names("to remove")? else {
                    return Ok(false);
                };
                match directory.remove(&first, &last) {
                    Ok(removed) => {
                        info!(contact = %removed.full_name(), "Contact removed");
                        writeln!(self.output, "Contact '{}' removed.", removed.full_name())?;
                    }
                    Err(e) => {
                        warn!(error = %e, "Removal rejected");
                        writeln!(self.output, "Contact '{} {}' was not found.", first, last)?;
                    }
                }
            }
            MenuOption::Exists => {
                let Some((first, last)) = self.prompt_names("to check")? else {
                    return Ok(false);
                };
                if directory.exists(&first, &last) {
                    writeln!(self.output, "Contact '{} {}' exists.", first, last)?;
                } else {
                    writeln!(self.output, "Contact '{} {}' does not exist.", first, last)?;
                }
            }
            MenuOption::List => self.render_list(directory)?,
            MenuOption::FreeSlots => {
                writeln!(self.output, "Free slots: {}", directory.free_slots())?;
            }
            MenuOption::IsFull => {
                if directory.is_full() {
                    writeln!(self.output, "The directory IS full.")?;
                } else {
                    writeln!(self.output, "The directory is NOT full.")?;
                }
            }
            MenuOption::Export => {
                let json = serde_json::to_string_pretty(&directory.list())?;
                writeln!(self.output, "{}", json)?;
            }
            MenuOption::Exit => {}
        }

        Ok(true)
    }

    fn handle_add(&mut self, directory: &mut Directory, contact: Contact) -> Result<()> {
        let name = contact.full_name();
        match directory.add(contact) {
            Ok(()) => {
                info!(contact = %name, "Contact added");
                writeln!(self.output, "Contact '{}' added.", name)?;
            }
            Err(e) => {
                warn!(error = %e, "Add rejected");
                let message = match e {
                    DirectoryError::Validation(_) => {
                        "Error: cannot add a contact with an empty first or last name.".to_string()
                    }
                    DirectoryError::CapacityExceeded { .. } => {
                        format!("Error: the directory is full. Could not add {}.", name)
                    }
                    DirectoryError::DuplicateContact(_) => {
                        format!("Error: contact '{}' already exists.", name)
                    }
                    other => format!("Error: {}", other),
                };
                writeln!(self.output, "{}", message)?;
            }
        }
        Ok(())
    }

    fn render_list(&mut self, directory: &Directory) -> Result<()> {
        let contacts = directory.list();
        if contacts.is_empty() {
            writeln!(self.output, "The directory is empty.")?;
            return Ok(());
        }

        writeln!(
            self.output,
            "--- Contacts ({}/{}) ---",
            contacts.len(),
            directory.capacity()
        )?;
        for contact in contacts {
            writeln!(self.output, "{}", contact)?;
        }
        Ok(())
    }

    fn prompt_names(&mut self, purpose: &str) -> Result<Option<(String, String)>> {
        let Some(first) = self.prompt(&format!("Enter first name {}: ", purpose))? else {
            return Ok(None);
        };
        let Some(last) = self.prompt(&format!("Enter last name {}: ", purpose))? else {
            return Ok(None);
        };
        Ok(Some((first, last)))
    }

    /// Print a prompt and read one line. `None` means input is exhausted.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

use crate::core::input::TokenReader;
use crate::core::menu::MenuChoice;
use crate::core::messages::{Locale, Prompt};
use crate::core::RecordStore;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy)]
pub struct ShellOptions {
    pub locale: Locale,
    pub show_menu: bool,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            show_menu: true,
        }
    }
}

/// What the loop does after a command.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
    EndOfInput,
}

/// Menu-driven console over a record store.
pub struct Shell<S: RecordStore, R: BufRead, W: Write> {
    store: S,
    input: TokenReader<R>,
    output: W,
    options: ShellOptions,
}

impl<S: RecordStore, R: BufRead, W: Write> Shell<S, R, W> {
    pub fn new(store: S, input: R, output: W, options: ShellOptions) -> Self {
        Self {
            store,
            input: TokenReader::new(input),
            output,
            options,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_parts(self) -> (S, W) {
        (self.store, self.output)
    }

    /// Runs until the exit choice or end of input. Store errors are
    /// reported and the loop continues; I/O errors end the session.
    pub fn run(&mut self) -> Result<()> {
        tracing::debug!("Shell started with {:?}", self.options);

        loop {
            if self.options.show_menu {
                self.print_menu()?;
            }
            self.prompt(Prompt::Choice)?;

            let Some(token) = self.input.next_token()? else {
                tracing::info!("End of input, leaving shell");
                return Ok(());
            };

            let Some(choice) = MenuChoice::parse(&token) else {
                tracing::debug!("Invalid menu token: {:?}", token);
                writeln!(self.output, "{}", self.options.locale.invalid_choice())?;
                continue;
            };

            tracing::debug!("Dispatching {:?}", choice);
            match self.dispatch(choice) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Ok(Flow::EndOfInput) => {
                    tracing::info!("End of input during {:?}, command dropped", choice);
                    return Ok(());
                }
                Err(e) if e.is_recoverable() => {
                    tracing::warn!("{:?} failed: {:?} ({})", choice, e, e.recovery_suggestion());
                    writeln!(self.output, "{}", self.options.locale.error_line(&e))?;
                }
                Err(e) => {
                    tracing::error!("Shell aborted: {}", e);
                    return Err(e);
                }
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        let locale = self.options.locale;

        match choice {
            MenuChoice::Add => {
                let Some(surname) = self.read_field(Prompt::Surname)? else {
                    return Ok(Flow::EndOfInput);
                };
                let Some(birthdate) = self.read_field(Prompt::Birthdate)? else {
                    return Ok(Flow::EndOfInput);
                };
                let Some(phone) = self.read_field(Prompt::Phone)? else {
                    return Ok(Flow::EndOfInput);
                };
                self.store.add(&surname, &birthdate, &phone)?;
                writeln!(self.output, "{}", locale.record_added())?;
            }
            MenuChoice::Delete => {
                let Some(surname) = self.read_field(Prompt::DeleteSurname)? else {
                    return Ok(Flow::EndOfInput);
                };
                let removed = self.store.delete(&surname)?;
                writeln!(self.output, "{}", locale.records_deleted(&surname, removed))?;
            }
            MenuChoice::SearchBySurname => {
                let Some(surname) = self.read_field(Prompt::SearchSurname)? else {
                    return Ok(Flow::EndOfInput);
                };
                for record in self.store.search_by_surname(&surname)? {
                    writeln!(self.output, "{}", locale.record_line(record))?;
                }
            }
            MenuChoice::SearchByPhone => {
                let Some(phone) = self.read_field(Prompt::SearchPhone)? else {
                    return Ok(Flow::EndOfInput);
                };
                let record = self.store.search_by_phone(&phone)?;
                writeln!(self.output, "{}", locale.record_line(record))?;
            }
            MenuChoice::SearchByBirthdate => {
                let Some(birthdate) = self.read_field(Prompt::SearchBirthdate)? else {
                    return Ok(Flow::EndOfInput);
                };
                let record = self.store.search_by_birthdate(&birthdate)?;
                writeln!(self.output, "{}", locale.record_line(record))?;
            }
            MenuChoice::ListAll => {
                for record in self.store.list_all()? {
                    writeln!(self.output, "{}", locale.record_line(record))?;
                }
            }
            MenuChoice::Exit => {
                writeln!(self.output, "{}", locale.exiting())?;
                self.output.flush()?;
                return Ok(Flow::Exit);
            }
        }

        Ok(Flow::Continue)
    }

    fn print_menu(&mut self) -> Result<()> {
        let locale = self.options.locale;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice.number(), locale.menu_label(choice))?;
        }
        Ok(())
    }

    fn prompt(&mut self, prompt: Prompt) -> Result<()> {
        write!(self.output, "{}", self.options.locale.prompt(prompt))?;
        self.output.flush()?;
        Ok(())
    }

    fn read_field(&mut self, prompt: Prompt) -> Result<Option<String>> {
        self.prompt(prompt)?;
        self.input.next_token()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::notebook::Notebook;
    use crate::utils::error::NotebookError;
    use std::io::Cursor;

    fn run_script(script: &str, options: ShellOptions) -> (Notebook, String) {
        let mut shell = Shell::new(Notebook::new(), Cursor::new(script.to_string()), Vec::new(), options);
        shell.run().unwrap();
        let (store, output) = shell.into_parts();
        (store, String::from_utf8(output).unwrap())
    }

    fn quiet() -> ShellOptions {
        ShellOptions {
            show_menu: false,
            ..ShellOptions::default()
        }
    }

    #[test]
    fn test_menu_printed_each_iteration() {
        let (_, output) = run_script("9\n0\n", ShellOptions::default());
        assert_eq!(output.matches("1. Add record").count(), 2);
        assert_eq!(output.matches("0. Exit").count(), 2);
    }

    #[test]
    fn test_invalid_choice_has_no_side_effects() {
        let (store, output) = run_script("abc 7 -2 0", quiet());
        assert_eq!(output.matches("Invalid choice. Please try again.").count(), 3);
        assert!(store.is_empty());
        assert!(output.ends_with("Exiting...\n"));
    }

    #[test]
    fn test_error_does_not_end_loop() {
        let (store, output) = run_script("1 Smith 1-1-1990 555\n6\n1 Smith 01-01-1990 555\n0\n", quiet());
        assert!(output.contains("Error: date must be in DD-MM-YYYY format"));
        assert!(output.contains("Error: no records exist"));
        assert!(output.contains("Record added."));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_end_of_input_mid_command_drops_it() {
        let (store, output) = run_script("1 Smith 01-01-1990", quiet());
        assert!(store.is_empty());
        assert!(output.ends_with("Enter phone: "));
    }

    #[test]
    fn test_store_reflects_session() {
        let mut shell = Shell::new(
            Notebook::new(),
            Cursor::new("1 Smith 01-01-1990 555\n1 Adams 02-02-1980 777\n2 Adams\n0\n"),
            Vec::new(),
            quiet(),
        );
        shell.run().unwrap();

        assert_eq!(shell.store().len(), 1);
        assert_eq!(shell.store().search_by_phone("555").unwrap().surname, "Smith");
        assert!(shell.store().search_by_surname("Adams").is_err());
    }

    struct BrokenInput;

    impl std::io::Read for BrokenInput {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdin closed"))
        }
    }

    impl BufRead for BrokenInput {
        fn fill_buf(&mut self) -> std::io::Result<&[u8]> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdin closed"))
        }

        fn consume(&mut self, _amt: usize) {}
    }

    #[test]
    fn test_input_failure_ends_session_as_fatal() {
        let mut shell = Shell::new(Notebook::new(), BrokenInput, Vec::new(), quiet());

        match shell.run() {
            Err(e @ NotebookError::IoError(_)) => {
                assert!(!e.is_recoverable());
                assert_eq!(
                    e.recovery_suggestion(),
                    "Check that standard input and output are still open"
                );
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_end_of_input_at_menu() {
        let (store, output) = run_script("", quiet());
        assert!(store.is_empty());
        assert_eq!(output, "Choose an action: ");
    }
}

//! Interactive Session
//!
//! The menu loop that drives a [`Document`] over generic input/output
//! handles, so the whole session can be scripted in tests. Single-threaded
//! and synchronous: each action runs to completion before the next prompt.

use std::io::{BufRead, Write};

use log::{debug, warn};

use crate::document::Document;
use crate::menu::MenuCommand;

/// ANSI clear-screen plus cursor-home
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// One running editor session: a document plus the I/O it talks through
pub struct Session<R, W> {
    document: Document,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(document: Document, input: R, output: W) -> Self {
        Self {
            document,
            input,
            output,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Give back the document, for inspection after [`run`](Self::run).
    pub fn into_document(self) -> Document {
        self.document
    }

    /// Run the menu loop until exit is selected or the input ends.
    ///
    /// Only I/O failures on the handles themselves propagate; every editor
    /// error is reported to the output and the loop continues.
    pub fn run(&mut self) -> std::io::Result<()> {
        write!(self.output, "{CLEAR_SCREEN}")?;
        writeln!(self.output, "Simple Text Editor")?;
        writeln!(self.output, "==================")?;

        loop {
            self.show_menu()?;
            let Some(choice) = self.read_line()? else {
                break;
            };

            let command = match choice.parse::<MenuCommand>() {
                Ok(command) => command,
                Err(err) => {
                    warn!("rejected menu input {choice:?}");
                    writeln!(self.output, "{err}")?;
                    self.pause()?;
                    continue;
                }
            };

            debug!("dispatching {command:?}");
            match command {
                MenuCommand::AddLines => self.add_lines()?,
                MenuCommand::View => self.view()?,
                MenuCommand::Save => self.save()?,
                MenuCommand::Load => self.load()?,
                MenuCommand::Clear => self.clear()?,
                MenuCommand::Exit => {
                    writeln!(self.output, "\nExiting...")?;
                    return Ok(());
                }
            }
            self.pause()?;
        }
        Ok(())
    }

    fn show_menu(&mut self) -> std::io::Result<()> {
        writeln!(self.output, "\n--- MENU ---")?;
        writeln!(self.output, "1. Add text line(s)")?;
        writeln!(self.output, "2. View document")?;
        writeln!(self.output, "3. Save to file")?;
        writeln!(self.output, "4. Load from file")?;
        writeln!(self.output, "5. Clear document")?;
        writeln!(self.output, "6. Exit")?;
        write!(self.output, "Choice: ")?;
        self.output.flush()
    }

    fn add_lines(&mut self) -> std::io::Result<()> {
        writeln!(self.output, "\nEnter text (empty line to finish):")?;

        let Self {
            document,
            input,
            output,
        } = self;
        let mut next_index = document.len() + 1;
        let mut io_error = None;

        // The document consumes this lazily and stops at the empty-line
        // sentinel, so prompts and reads interleave per line.
        let appended = document.append_lines(std::iter::from_fn(|| {
            let prompt = write!(output, "Line {next_index}: ").and_then(|()| output.flush());
            if let Err(err) = prompt {
                io_error = Some(err);
                return None;
            }
            let mut line = String::new();
            match input.read_line(&mut line) {
                Ok(0) => None,
                Ok(_) => {
                    trim_newline(&mut line);
                    next_index += 1;
                    Some(line)
                }
                Err(err) => {
                    io_error = Some(err);
                    None
                }
            }
        }));
        if let Some(err) = io_error {
            return Err(err);
        }

        if appended > 0 {
            writeln!(self.output, "\nText added successfully!")?;
            writeln!(
                self.output,
                "Total lines in document: {}",
                self.document.len()
            )?;
        } else {
            writeln!(self.output, "No text was added.")?;
        }
        Ok(())
    }

    fn view(&mut self) -> std::io::Result<()> {
        write!(self.output, "{CLEAR_SCREEN}")?;
        writeln!(self.output, "Document Viewer")?;
        writeln!(self.output, "===============")?;

        match self.document.render() {
            None => {
                writeln!(self.output, "\nDocument is empty.")?;
                writeln!(
                    self.output,
                    "Use option 1 to add text or option 4 to load a file."
                )?;
            }
            Some(lines) => {
                writeln!(self.output, "Total lines: {}", self.document.len())?;
                writeln!(self.output, "\n--- DOCUMENT CONTENT ---")?;
                for (index, text) in lines {
                    writeln!(self.output, "{index:>4}: {text}")?;
                }
                writeln!(self.output, "--- END OF DOCUMENT ---")?;
            }
        }
        Ok(())
    }

    fn save(&mut self) -> std::io::Result<()> {
        // No point prompting for a filename with nothing to write.
        if self.document.is_empty() {
            writeln!(self.output, "\nNo content to save.")?;
            writeln!(self.output, "Add some text first using option 1.")?;
            return Ok(());
        }

        write!(self.output, "\nEnter filename (e.g. document.txt): ")?;
        self.output.flush()?;
        let Some(filename) = self.read_line()? else {
            return Ok(());
        };

        match self.document.save_to(&filename) {
            Ok(report) => {
                writeln!(
                    self.output,
                    "\nSuccess! Document saved to '{}'",
                    report.path.display()
                )?;
                writeln!(self.output, "Lines saved: {}", report.lines_written)?;
            }
            Err(err) => {
                writeln!(self.output, "Error: {err}")?;
                writeln!(self.output, "Check the filename and try again.")?;
            }
        }
        Ok(())
    }

    fn load(&mut self) -> std::io::Result<()> {
        write!(self.output, "\nEnter filename to load: ")?;
        self.output.flush()?;
        let Some(filename) = self.read_line()? else {
            return Ok(());
        };

        match self.document.load_from(&filename) {
            Ok(count) => {
                writeln!(self.output, "\nSuccess! Loaded '{filename}'")?;
                writeln!(self.output, "Lines loaded: {count}")?;
            }
            Err(err) => {
                writeln!(self.output, "Error: {err}")?;
                writeln!(self.output, "Make sure the file exists and try again.")?;
            }
        }
        Ok(())
    }

    fn clear(&mut self) -> std::io::Result<()> {
        match self.document.clear() {
            Ok(removed) => {
                writeln!(self.output, "\nDocument cleared successfully!")?;
                writeln!(self.output, "Lines removed: {removed}")?;
            }
            Err(err) => {
                writeln!(self.output, "\n{err}")?;
            }
        }
        Ok(())
    }

    fn pause(&mut self) -> std::io::Result<()> {
        write!(self.output, "\nPress Enter to continue...")?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(())
    }

    /// Read one line without its trailing newline; `None` at end of input.
    fn read_line(&mut self) -> std::io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        trim_newline(&mut line);
        Ok(Some(line))
    }
}

fn trim_newline(line: &mut String) {
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
}

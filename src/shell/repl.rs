//! Line-oriented command loop.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::ShellConfig;
use crate::editor::Editor;
use crate::shell::command::{help_text, parse_command, Command};

/// Result of executing a single shell command.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandStatus {
    /// Continue reading commands.
    Continue,
    /// Exit the shell loop.
    Quit,
}

/// How lines reach the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// An operator at a terminal: prompts are printed, errors are reported
    /// and the loop carries on.
    Interactive,
    /// Commands from a file: the first failing line stops the run and
    /// overwrites are refused unless pre-confirmed.
    Script,
}

/// Shell driver: parses command lines and invokes the editor.
pub struct Shell<R: BufRead, W: Write> {
    editor: Editor,
    reader: R,
    writer: W,
    mode: Mode,
    prompt: String,
    assume_yes: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(editor: Editor, reader: R, writer: W, mode: Mode, config: &ShellConfig) -> Self {
        Self {
            editor,
            reader,
            writer,
            mode,
            prompt: config.prompt.clone(),
            assume_yes: config.assume_yes,
        }
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    /// Run until EOF or `quit`.
    pub fn run(&mut self) -> Result<()> {
        let mut line = String::new();
        let mut number = 0usize;
        loop {
            if self.mode == Mode::Interactive {
                write!(self.writer, "{}", self.prompt)?;
                self.writer.flush()?;
            }
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                if self.mode == Mode::Interactive {
                    writeln!(self.writer)?;
                }
                break;
            }
            number += 1;

            match self.execute(line.trim()) {
                Ok(CommandStatus::Quit) => break,
                Ok(CommandStatus::Continue) => {}
                Err(e) if self.mode == Mode::Interactive => {
                    writeln!(self.writer, "error: {e:#}")?;
                }
                Err(e) => return Err(e.context(format!("line {number}: {}", line.trim()))),
            }
        }
        Ok(())
    }

    /// Execute a single command line.
    pub fn execute(&mut self, line: &str) -> Result<CommandStatus> {
        let Some(command) = parse_command(line)? else {
            return Ok(CommandStatus::Continue);
        };
        tracing::debug!(?command, "Executing command");

        match command {
            Command::DumpAux { id } => {
                let dump = self.editor.dump_aux(&id)?;
                write!(self.writer, "{dump}")?;
            }
            Command::DumpInput { id } => {
                let dump = self.editor.dump_input(&id)?;
                write!(self.writer, "{dump}")?;
            }
            Command::PrintAuxes => {
                let list = self.editor.print_auxes();
                write!(self.writer, "{list}")?;
            }
            Command::PrintInputs => {
                let list = self.editor.print_inputs();
                write!(self.writer, "{list}")?;
            }
            Command::RenameInput { id, name } => {
                let stored = self.editor.rename_input(&id, &name)?;
                writeln!(self.writer, "input {id} renamed to \"{stored}\"")?;
            }
            Command::SwapAuxes { a, b } => {
                let report = self.editor.swap_auxes(&a, &b)?;
                writeln!(self.writer, "{report}")?;
            }
            Command::SwapInputs { a, b } => {
                let report = self.editor.swap_inputs(&a, &b)?;
                writeln!(self.writer, "{report}")?;
                if report.moved_partners() {
                    writeln!(self.writer, "stereo partners moved with the requested inputs")?;
                }
            }
            Command::WriteFile { path } => {
                let outcome = self.write_file(&path)?;
                writeln!(
                    self.writer,
                    "wrote {} entries to {}",
                    outcome.entries,
                    outcome.path.display()
                )?;
            }
            Command::Help => {
                write!(self.writer, "{}", help_text())?;
            }
            Command::Quit => return Ok(CommandStatus::Quit),
        }
        Ok(CommandStatus::Continue)
    }

    fn write_file(&mut self, path: &str) -> Result<crate::report::WriteOutcome> {
        let Self {
            editor,
            reader,
            writer,
            mode,
            assume_yes,
            ..
        } = self;
        let (mode, assume_yes) = (*mode, *assume_yes);
        let outcome = editor.write_file(path, |target| {
            if assume_yes {
                return true;
            }
            match mode {
                Mode::Interactive => confirm_overwrite(reader, writer, target),
                Mode::Script => {
                    tracing::warn!(path = %target.display(), "Refusing to overwrite without confirmation");
                    false
                }
            }
        });
        outcome.with_context(|| format!("writing {path}"))
    }

    /// Consume the shell and return the editor and writer.
    pub fn into_parts(self) -> (Editor, W) {
        (self.editor, self.writer)
    }
}

/// Ask the operator whether `path` may be replaced. Anything but an explicit
/// yes, including a read failure, declines.
fn confirm_overwrite<R: BufRead, W: Write>(reader: &mut R, writer: &mut W, path: &Path) -> bool {
    if write!(writer, "{} exists; overwrite? [y/N] ", path.display())
        .and_then(|_| writer.flush())
        .is_err()
    {
        return false;
    }
    let mut answer = String::new();
    match reader.read_line(&mut answer) {
        Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
        Err(e) => {
            tracing::warn!(error = %e, "Could not read overwrite confirmation");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConsoleConfig;
    use std::io::Cursor;

    const DOC: &str = r#"{
        "schema": "6",
        "i.0.name": "Kick",
        "i.1.name": "Snare",
        "a.0.name": "Wedge"
    }"#;

    fn shell(input: &str, mode: Mode) -> Shell<Cursor<Vec<u8>>, Vec<u8>> {
        let editor = Editor::from_json(DOC, ConsoleConfig::default()).unwrap();
        Shell::new(
            editor,
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            mode,
            &ShellConfig::default(),
        )
    }

    fn output(shell: Shell<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(shell.into_parts().1).unwrap()
    }

    #[test]
    fn test_interactive_session_reports_errors_and_continues() {
        let mut sh = shell("swap_inputs 0 9\nrename_input 0 Bass-DI\nprint_inputs\nquit\nprint_auxes\n", Mode::Interactive);
        sh.run().unwrap();
        let out = output(sh);
        assert!(out.contains("error: input channel 9 not found"));
        assert!(out.contains("input 0 renamed to \"Bass DI\""));
        assert!(out.contains("  0   Bass DI\n"));
        assert!(!out.contains("Wedge"));
        assert!(out.starts_with("mixer> "));
    }

    #[test]
    fn test_script_stops_at_first_error() {
        let mut sh = shell("print_inputs\ndump_input 4\nprint_auxes\n", Mode::Script);
        let err = sh.run().unwrap_err();
        assert!(format!("{err:#}").contains("line 2: dump_input 4"));
        let out = output(sh);
        assert!(!out.contains("mixer> "));
        assert!(!out.contains("Wedge"));
    }

    #[test]
    fn test_quit_status() {
        let mut sh = shell("", Mode::Interactive);
        assert_eq!(sh.execute("quit").unwrap(), CommandStatus::Quit);
        assert_eq!(sh.execute("").unwrap(), CommandStatus::Continue);
        assert!(sh.execute("write_file").is_err());
    }

    #[test]
    fn test_overwrite_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mix.json");
        std::fs::write(&path, "old").unwrap();
        let script = format!("write_file {p}\nn\nwrite_file {p}\ny\n", p = path.display());

        let mut sh = shell(&script, Mode::Interactive);
        sh.run().unwrap();
        let out = output(sh);
        assert!(out.contains("exists; overwrite? [y/N]"));
        assert!(out.contains("error: writing"));
        assert!(out.contains("wrote 4 entries"));
        assert!(std::fs::read_to_string(&path).unwrap().contains("\"i.1.name\": \"Snare\""));
    }

    #[test]
    fn test_script_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mix.json");
        std::fs::write(&path, "old").unwrap();

        let mut sh = shell(&format!("write_file {}\n", path.display()), Mode::Script);
        assert!(sh.run().is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "old");
    }
}

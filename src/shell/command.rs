//! The operator command set.

use thiserror::Error;

/// Every command the shell understands, with its fixed arity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    DumpAux,
    DumpInput,
    PrintAuxes,
    PrintInputs,
    RenameInput,
    SwapAuxes,
    SwapInputs,
    WriteFile,
    Help,
    Quit,
}

impl CommandKind {
    pub const ALL: [CommandKind; 10] = [
        CommandKind::DumpAux,
        CommandKind::DumpInput,
        CommandKind::PrintAuxes,
        CommandKind::PrintInputs,
        CommandKind::RenameInput,
        CommandKind::SwapAuxes,
        CommandKind::SwapInputs,
        CommandKind::WriteFile,
        CommandKind::Help,
        CommandKind::Quit,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CommandKind::DumpAux => "dump_aux",
            CommandKind::DumpInput => "dump_input",
            CommandKind::PrintAuxes => "print_auxes",
            CommandKind::PrintInputs => "print_inputs",
            CommandKind::RenameInput => "rename_input",
            CommandKind::SwapAuxes => "swap_auxes",
            CommandKind::SwapInputs => "swap_inputs",
            CommandKind::WriteFile => "write_file",
            CommandKind::Help => "help",
            CommandKind::Quit => "quit",
        }
    }

    /// Argument names, which also fix the arity.
    pub fn params(self) -> &'static [&'static str] {
        match self {
            CommandKind::DumpAux | CommandKind::DumpInput => &["id"],
            CommandKind::RenameInput => &["id", "name"],
            CommandKind::SwapAuxes | CommandKind::SwapInputs => &["a", "b"],
            CommandKind::WriteFile => &["path"],
            CommandKind::PrintAuxes
            | CommandKind::PrintInputs
            | CommandKind::Help
            | CommandKind::Quit => &[],
        }
    }

    pub fn arity(self) -> usize {
        self.params().len()
    }

    pub fn description(self) -> &'static str {
        match self {
            CommandKind::DumpAux => "show every field of an aux channel",
            CommandKind::DumpInput => "show every field of an input channel",
            CommandKind::PrintAuxes => "list aux channels",
            CommandKind::PrintInputs => "list input channels",
            CommandKind::RenameInput => "rename an input; '-' becomes a space",
            CommandKind::SwapAuxes => "swap two aux buses and their sends",
            CommandKind::SwapInputs => "swap two inputs (stereo partners follow)",
            CommandKind::WriteFile => "write the configuration to a file",
            CommandKind::Help => "show this help",
            CommandKind::Quit => "leave the editor",
        }
    }

    /// e.g. `swap_inputs <a> <b>`
    pub fn usage(self) -> String {
        self.params()
            .iter()
            .fold(self.name().to_string(), |mut usage, param| {
                usage.push_str(&format!(" <{param}>"));
                usage
            })
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    DumpAux { id: String },
    DumpInput { id: String },
    PrintAuxes,
    PrintInputs,
    RenameInput { id: String, name: String },
    SwapAuxes { a: String, b: String },
    SwapInputs { a: String, b: String },
    WriteFile { path: String },
    Help,
    Quit,
}

/// Why a command line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("{command} takes {expected} argument(s) but got {found}; usage: {usage}")]
    Arity {
        command: &'static str,
        expected: usize,
        found: usize,
        usage: String,
    },
}

/// Parse one command line. Blank lines and `#` comments yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    if line.trim_start().starts_with('#') {
        return Ok(None);
    }
    let mut words = line.split_whitespace();
    let Some(name) = words.next() else {
        return Ok(None);
    };
    let kind = CommandKind::from_name(name).ok_or_else(|| CommandError::Unknown(name.to_string()))?;

    let args = words.map(str::to_string).collect::<Vec<_>>();
    if args.len() != kind.arity() {
        return Err(CommandError::Arity {
            command: kind.name(),
            expected: kind.arity(),
            found: args.len(),
            usage: kind.usage(),
        });
    }

    let mut args = args.into_iter();
    let mut next = || args.next().unwrap_or_default();
    let command = match kind {
        CommandKind::DumpAux => Command::DumpAux { id: next() },
        CommandKind::DumpInput => Command::DumpInput { id: next() },
        CommandKind::PrintAuxes => Command::PrintAuxes,
        CommandKind::PrintInputs => Command::PrintInputs,
        CommandKind::RenameInput => Command::RenameInput {
            id: next(),
            name: next(),
        },
        CommandKind::SwapAuxes => Command::SwapAuxes { a: next(), b: next() },
        CommandKind::SwapInputs => Command::SwapInputs { a: next(), b: next() },
        CommandKind::WriteFile => Command::WriteFile { path: next() },
        CommandKind::Help => Command::Help,
        CommandKind::Quit => Command::Quit,
    };
    Ok(Some(command))
}

/// Help text listing every command.
pub fn help_text() -> String {
    let width = CommandKind::ALL
        .iter()
        .map(|kind| kind.usage().len())
        .max()
        .unwrap_or(0);
    CommandKind::ALL
        .iter()
        .map(|kind| format!("  {:<width$}  {}\n", kind.usage(), kind.description()))
        .collect()
}

use std::str::FromStr;

/// A line typed at the console prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Recopy the entry at this 1-based position of the rendered list.
    Select(usize),
    List,
    Pause,
    Resume,
    Help,
    Quit,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseCommandError {
    #[error("empty input")]
    Empty,

    #[error("entries are numbered from 1")]
    ZeroIndex,

    #[error("unknown command '{0}', try 'help'")]
    Unknown(String),
}

impl FromStr for ConsoleCommand {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let input = line.trim();
        if input.is_empty() {
            return Err(ParseCommandError::Empty);
        }
        if let Ok(index) = input.parse::<usize>() {
            return if index == 0 {
                Err(ParseCommandError::ZeroIndex)
            } else {
                Ok(ConsoleCommand::Select(index))
            };
        }

        match input.to_ascii_lowercase().as_str() {
            "list" | "ls" | "l" => Ok(ConsoleCommand::List),
            "pause" => Ok(ConsoleCommand::Pause),
            "resume" => Ok(ConsoleCommand::Resume),
            "help" | "?" => Ok(ConsoleCommand::Help),
            "quit" | "exit" | "q" => Ok(ConsoleCommand::Quit),
            _ => Err(ParseCommandError::Unknown(input.to_string())),
        }
    }
}

pub const HELP: &str = "\
commands:
  <n>      copy entry n back to the clipboard
  list     show the history again
  pause    stop recording the clipboard
  resume   start recording again
  quit     exit";

use clap::{Parser, Subcommand};
use tasklist_core::error::AppError;
use tasklist_core::filter::Tab;

#[derive(Parser, Debug)]
#[command(name = "tasklist", version, about = "Single-session task list", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new task
    ///
    /// Example: add "Buy milk"
    Add {
        text: Option<String>,
    },
    /// Replace a task's text
    ///
    /// Example: edit 4821 "Buy organic milk"
    Edit {
        id: u32,
        new_text: String,
    },
    /// Mark a task as completed
    ///
    /// Example: done 4821
    Done {
        id: u32,
    },
    /// Delete a task
    ///
    /// Example: delete 4821
    Delete {
        id: u32,
    },
    /// Delete every task
    Clear,
    /// List tasks for a tab
    ///
    /// Example: list completed
    List {
        #[command(subcommand)]
        tab: Option<TabCommand>,
    },
    /// Search tasks by text, or by exact creation date (M/D/YYYY)
    ///
    /// Example: search milk
    /// Example: search 11/9/2025
    Search {
        query: String,
    },
    /// Switch the display theme (persists across sessions)
    ///
    /// Example: theme dark
    Theme {
        name: String,
    },
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum TabCommand {
    /// Tasks not yet completed (the default)
    Active,
    /// Completed tasks
    Completed,
    /// Every task
    All,
}

impl TabCommand {
    pub fn tab(self) -> Tab {
        match self {
            Self::Active => Tab::Active,
            Self::Completed => Tab::Completed,
            Self::All => Tab::All,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum SplitState {
    Bare,
    Quoted,
    QuotedEscape,
}

/// Splits one interactive line into arguments. Double quotes group words
/// into a single argument, `\"` and `\\` are literal inside quotes, and an
/// empty quoted pair ("") survives as an empty argument.
pub fn split_command_line(line: &str) -> Result<Vec<String>, AppError> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut pending = false;
    let mut state = SplitState::Bare;

    for ch in line.chars() {
        state = match (state, ch) {
            (SplitState::Bare, '"') => {
                pending = true;
                SplitState::Quoted
            }
            (SplitState::Bare, c) if c.is_whitespace() => {
                if pending {
                    args.push(std::mem::take(&mut current));
                    pending = false;
                }
                SplitState::Bare
            }
            (SplitState::Bare, c) => {
                pending = true;
                current.push(c);
                SplitState::Bare
            }
            (SplitState::Quoted, '"') => SplitState::Bare,
            (SplitState::Quoted, '\\') => SplitState::QuotedEscape,
            (SplitState::Quoted, c) => {
                current.push(c);
                SplitState::Quoted
            }
            (SplitState::QuotedEscape, c @ ('"' | '\\')) => {
                current.push(c);
                SplitState::Quoted
            }
            (SplitState::QuotedEscape, c) => {
                current.push('\\');
                current.push(c);
                SplitState::Quoted
            }
        };
    }

    if state != SplitState::Bare {
        return Err(AppError::validation("unterminated quote in command"));
    }
    if pending {
        args.push(current);
    }

    Ok(args)
}

fn parse_error(err: clap::Error) -> AppError {
    let rendered = err.to_string();
    let summary = rendered
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("invalid command");
    AppError::validation(summary.strip_prefix("error: ").unwrap_or(summary))
}

/// Parses one interactive line into a `Cli` invocation. Clap's multi-line
/// diagnostics are collapsed to their summary line for the `ERROR:` stream.
pub fn parse_line(line: &str) -> Result<Option<Cli>, AppError> {
    let args = split_command_line(line)?;
    if args.is_empty() {
        return Ok(None);
    }

    let argv = std::iter::once("tasklist".to_string()).chain(args);
    Cli::try_parse_from(argv).map(Some).map_err(parse_error)
}

#[cfg(test)]
mod tests {
    use super::{Command, parse_line, split_command_line};

    #[test]
    fn split_groups_quoted_words() {
        let args = split_command_line(r#"add "Buy organic milk""#).unwrap();
        assert_eq!(args, vec!["add", "Buy organic milk"]);
    }

    #[test]
    fn split_keeps_escaped_quotes_and_backslashes() {
        let args = split_command_line(r#"add "say \"hi\" to a\b""#).unwrap();
        assert_eq!(args, vec!["add", r#"say "hi" to a\b"#]);
    }

    #[test]
    fn split_preserves_empty_quoted_argument() {
        let args = split_command_line(r#"add """#).unwrap();
        assert_eq!(args, vec!["add", ""]);
    }

    #[test]
    fn split_rejects_unterminated_quote() {
        let err = split_command_line(r#"add "half open"#).unwrap_err();
        assert_eq!(err.code(), "invalid_input");
    }

    #[test]
    fn parse_line_builds_a_command() {
        let cli = parse_line("done 7").unwrap().unwrap();
        assert!(matches!(cli.command, Command::Done { id: 7 }));
    }

    #[test]
    fn parse_line_skips_blank_input() {
        assert!(parse_line("   ").unwrap().is_none());
    }

    #[test]
    fn parse_line_collapses_clap_errors() {
        let err = parse_line("frobnicate").unwrap_err();
        assert_eq!(err.code(), "invalid_input");
        assert_eq!(err.message().lines().count(), 1);
    }
}

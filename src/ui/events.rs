use crate::ui::carousel::Gesture;
use crate::ui::nav::{Page, UnknownPage};
use crate::ui::views::{NominationField, UnknownField};
use std::io::BufRead;
use std::str::FromStr;
use std::thread;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc;

/// Input from the host: user actions and address changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    Navigate(Page),
    /// The user entered an address in the host's bar.
    AddressChanged(String),
    /// Browser-style back.
    Back,
    Carousel(Gesture),
    /// Pointer down / drag start on the confession deck.
    InteractionStart,
    InteractionEnd,
    NoteDragStart,
    NoteDragEnd,
    NoteClick,
    SetEmail(String),
    AcceptSuggestion,
    SetNominationField(NominationField, String),
    Submit,
    SkipIntro,
}

/// A line of input to the interactive runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    Event(HostEvent),
    /// Let `Duration` of loop time pass.
    Wait(Duration),
    /// Print the current snapshot.
    Show,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error("'{command}' needs an argument")]
    MissingArgument { command: String },
    #[error("invalid argument '{value}' for '{command}'")]
    InvalidArgument { command: String, value: String },
    #[error(transparent)]
    Page(#[from] UnknownPage),
    #[error(transparent)]
    Field(#[from] UnknownField),
}

fn parse_number<T: FromStr>(command: &str, value: &str) -> Result<T, CommandError> {
    value.parse().map_err(|_| CommandError::InvalidArgument {
        command: command.to_string(),
        value: value.to_string(),
    })
}

/// Parse one input line such as `go waitlist`, `jump 3` or `email a@b.edu`.
pub fn parse_command(line: &str) -> Result<HostCommand, CommandError> {
    let line = line.trim();
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let argument = || {
        if rest.is_empty() {
            Err(CommandError::MissingArgument {
                command: command.to_string(),
            })
        } else {
            Ok(rest)
        }
    };

    let event = match command {
        "" => return Err(CommandError::Empty),
        "show" => return Ok(HostCommand::Show),
        "quit" | "exit" => return Ok(HostCommand::Quit),
        "wait" => {
            let millis: u64 = parse_number(command, argument()?)?;
            return Ok(HostCommand::Wait(Duration::from_millis(millis)));
        }
        "go" => HostEvent::Navigate(argument()?.parse()?),
        "address" => HostEvent::AddressChanged(argument()?.to_string()),
        "back" => HostEvent::Back,
        "next" => HostEvent::Carousel(Gesture::SwipeNext),
        "prev" => HostEvent::Carousel(Gesture::SwipePrev),
        "jump" => HostEvent::Carousel(Gesture::Dot(parse_number(command, argument()?)?)),
        "touch" => HostEvent::InteractionStart,
        "release" => HostEvent::InteractionEnd,
        "drag-note" => HostEvent::NoteDragStart,
        "drop-note" => HostEvent::NoteDragEnd,
        "note" => HostEvent::NoteClick,
        "email" => HostEvent::SetEmail(rest.to_string()),
        "suggest" => HostEvent::AcceptSuggestion,
        "name" | "year" | "reason" => {
            HostEvent::SetNominationField(command.parse()?, rest.to_string())
        }
        "submit" => HostEvent::Submit,
        "skip-intro" => HostEvent::SkipIntro,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(HostCommand::Event(event))
}

/// Read commands from stdin on a background thread.
///
/// Blank lines are skipped and unparsable ones logged. The channel closes
/// when stdin reaches EOF or the receiver goes away.
pub fn spawn_stdin_reader(tx: mpsc::Sender<HostCommand>) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    tracing::warn!(error = %err, "stdin read failed");
                    break;
                }
            };
            match parse_command(&line) {
                Ok(command) => {
                    if tx.blocking_send(command).is_err() {
                        break;
                    }
                }
                Err(CommandError::Empty) => {}
                Err(err) => tracing::warn!(line = %line, error = %err, "ignoring command"),
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_navigation() {
        assert_eq!(
            parse_command("go Partners"),
            Ok(HostCommand::Event(HostEvent::Navigate(Page::Partners)))
        );
        assert!(matches!(parse_command("go"), Err(CommandError::MissingArgument { .. })));
        assert!(matches!(parse_command("go about"), Err(CommandError::Page(_))));
    }

    #[test]
    fn email_keeps_empty_argument() {
        assert_eq!(
            parse_command("email"),
            Ok(HostCommand::Event(HostEvent::SetEmail(String::new())))
        );
    }

    #[test]
    fn field_text_keeps_inner_spaces() {
        assert_eq!(
            parse_command("reason  always shows up "),
            Ok(HostCommand::Event(HostEvent::SetNominationField(
                NominationField::Reason,
                "always shows up".to_string()
            )))
        );
    }

    #[test]
    fn rejects_bad_numbers_and_unknown_commands() {
        assert!(matches!(parse_command("jump x"), Err(CommandError::InvalidArgument { .. })));
        assert_eq!(parse_command("dance"), Err(CommandError::Unknown("dance".to_string())));
        assert_eq!(parse_command("   "), Err(CommandError::Empty));
        assert_eq!(parse_command("wait 250"), Ok(HostCommand::Wait(Duration::from_millis(250))));
    }

    #[test]
    fn jump_index_must_fit_usize() {
        assert_eq!(
            parse_command("jump 4"),
            Ok(HostCommand::Event(HostEvent::Carousel(Gesture::Dot(4))))
        );
        assert!(matches!(
            parse_command("jump 99999999999999999999999"),
            Err(CommandError::InvalidArgument { .. })
        ));
        assert!(matches!(parse_command("jump -1"), Err(CommandError::InvalidArgument { .. })));
    }
}

use crate::config::{CallConfig, CallMode, CallTemplate};
use rotary::number::PhoneNumber;
use std::process::{Command, Stdio};
use thiserror::Error;

const NUMBER_PLACEHOLDER: &str = "{number}";
const URI_OPENER: &str = "xdg-open";

#[derive(Debug, Error)]
pub enum CallError {
    #[error("No number dialed")]
    EmptyNumber,
    #[error("Call command is empty")]
    EmptyCommand,
    #[error("Invalid call command: {0}")]
    Parse(#[from] shell_words::ParseError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// How a call was handed off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placed {
    Command,
    Uri,
    Printed,
}

/// Splits the template like a shell would, then fills the number into each
/// argument. The number never passes through a shell.
pub fn build_command(
    template: &CallTemplate,
    number: &PhoneNumber,
) -> Result<Vec<String>, CallError> {
    let args: Vec<String> = shell_words::split(template.as_str())?
        .into_iter()
        .map(|arg| arg.replace(NUMBER_PLACEHOLDER, number.as_str()))
        .collect();

    if args.is_empty() {
        return Err(CallError::EmptyCommand);
    }
    Ok(args)
}

fn spawn(args: &[String]) -> Result<(), CallError> {
    let (program, rest) = args.split_first().ok_or(CallError::EmptyCommand)?;
    Command::new(program)
        .args(rest)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}

fn open_uri(number: &PhoneNumber) -> Result<Placed, CallError> {
    spawn(&[URI_OPENER.to_string(), number.to_uri()])?;
    Ok(Placed::Uri)
}

pub fn place_call(config: &CallConfig, number: &PhoneNumber) -> Result<Placed, CallError> {
    if number.is_empty() {
        return Err(CallError::EmptyNumber);
    }

    match (config.mode, &config.command) {
        (CallMode::Print, _) => {
            println!("{}", number);
            Ok(Placed::Printed)
        }
        (CallMode::Open, _) | (CallMode::Command, None) => open_uri(number),
        (CallMode::Command, Some(template)) => {
            match build_command(template, number).and_then(|args| spawn(&args)) {
                Ok(()) => Ok(Placed::Command),
                Err(e) => {
                    log::warn!("Call command failed ({}), opening tel: link instead", e);
                    open_uri(number)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(s: &str) -> PhoneNumber {
        PhoneNumber::new(s)
    }

    #[test]
    fn test_build_command_substitutes_number() {
        let template = CallTemplate::new("linphonecsh dial '{number}'");
        let args = build_command(&template, &number("0301234")).unwrap();
        assert_eq!(args, vec!["linphonecsh", "dial", "0301234"]);

        let template = CallTemplate::new("sip-call --to=sip:{number}@example.org");
        let args = build_command(&template, &number("42")).unwrap();
        assert_eq!(args, vec!["sip-call", "--to=sip:42@example.org"]);
    }

    #[test]
    fn test_build_command_errors() {
        assert!(matches!(
            build_command(&CallTemplate::new("   "), &number("1")),
            Err(CallError::EmptyCommand)
        ));
        assert!(matches!(
            build_command(&CallTemplate::new("dial 'unterminated"), &number("1")),
            Err(CallError::Parse(_))
        ));
    }

    #[test]
    fn test_empty_number_is_not_called() {
        let config = CallConfig {
            mode: CallMode::Print,
            command: None,
        };
        assert!(matches!(
            place_call(&config, &number("")),
            Err(CallError::EmptyNumber)
        ));
    }

    #[test]
    fn test_print_mode() {
        let config = CallConfig {
            mode: CallMode::Print,
            command: Some(CallTemplate::new("never-run {number}")),
        };
        assert_eq!(place_call(&config, &number("110")).unwrap(), Placed::Printed);
    }

    #[test]
    fn test_command_mode_spawns() {
        let config = CallConfig {
            mode: CallMode::Command,
            command: Some(CallTemplate::new("true {number}")),
        };
        assert_eq!(place_call(&config, &number("112")).unwrap(), Placed::Command);
    }
}

//! Line-oriented simulation scripts.
//!
//! One command per line, `#` starts a comment:
//!
//! ```text
//! next [step] [instant]      prev [step] [instant]     goto <index> [instant]
//! append <label>             prepend <label>           insert <label> <index>
//! remove <index>             wait <ms>                 settle
//! resize <width>             drag <from_x> <to_x> [moves]
//! click <index>              destroy [restore]         state
//! ```

use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("line {line}: {reason}")]
pub struct ScriptError {
    pub line: usize,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Next { step: Option<usize>, instant: bool },
    Prev { step: Option<usize>, instant: bool },
    GoTo { index: usize, instant: bool },
    Append(String),
    Prepend(String),
    Insert { label: String, index: usize },
    Remove(usize),
    Wait(u64),
    Settle,
    Resize(f32),
    Drag { from: f32, to: f32, moves: usize },
    Click(usize),
    Destroy { restore: bool },
    State,
}

/// A parsed command with the source text it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub number: usize,
    pub text: String,
    pub command: Command,
}

pub fn parse(source: &str) -> Result<Vec<Line>, ScriptError> {
    source
        .lines()
        .enumerate()
        .filter_map(|(idx, raw)| {
            let text = raw.split('#').next().unwrap_or_default().trim();
            (!text.is_empty()).then_some((idx + 1, text))
        })
        .map(|(number, text)| {
            parse_command(text)
                .map(|command| Line {
                    number,
                    text: text.to_string(),
                    command,
                })
                .map_err(|reason| ScriptError { line: number, reason })
        })
        .collect()
}

fn parse_command(text: &str) -> Result<Command, String> {
    let mut words = text.split_whitespace();
    let verb = words.next().unwrap_or_default();
    let mut args: Vec<&str> = words.collect();
    let instant = take_flag(&mut args, "instant");

    let command = match verb {
        "next" => Command::Next {
            step: optional(&args, 0)?,
            instant,
        },
        "prev" => Command::Prev {
            step: optional(&args, 0)?,
            instant,
        },
        "goto" | "go_to" => Command::GoTo {
            index: required(&args, 0, "index")?,
            instant,
        },
        "append" => Command::Append(required::<String>(&args, 0, "label")?),
        "prepend" => Command::Prepend(required::<String>(&args, 0, "label")?),
        "insert" => Command::Insert {
            label: required(&args, 0, "label")?,
            index: required(&args, 1, "index")?,
        },
        "remove" => Command::Remove(required(&args, 0, "index")?),
        "wait" => Command::Wait(required(&args, 0, "milliseconds")?),
        "settle" => Command::Settle,
        "resize" => Command::Resize(required(&args, 0, "width")?),
        "drag" => Command::Drag {
            from: required(&args, 0, "start x")?,
            to: required(&args, 1, "end x")?,
            moves: optional(&args, 2)?.unwrap_or(5).max(1),
        },
        "click" => Command::Click(required(&args, 0, "index")?),
        "destroy" => Command::Destroy {
            restore: take_flag(&mut args, "restore"),
        },
        "state" => Command::State,
        other => return Err(format!("unknown command '{other}'")),
    };
    Ok(command)
}

fn take_flag(args: &mut Vec<&str>, flag: &str) -> bool {
    let before = args.len();
    args.retain(|arg| *arg != flag);
    args.len() != before
}

fn optional<T: FromStr>(args: &[&str], at: usize) -> Result<Option<T>, String> {
    args.get(at)
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|_| format!("invalid argument '{raw}'"))
        })
        .transpose()
}

fn required<T: FromStr>(args: &[&str], at: usize, what: &str) -> Result<T, String> {
    optional(args, at)?.ok_or_else(|| format!("missing {what}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_and_skips_comments() {
        let lines = parse(
            "# warm up\nnext\nprev 2 instant\n\ngoto 4 # jump\ndrag 250 100\ndestroy restore\n",
        )
        .unwrap();
        let commands: Vec<_> = lines.iter().map(|l| l.command.clone()).collect();
        assert_eq!(
            commands,
            [
                Command::Next {
                    step: None,
                    instant: false
                },
                Command::Prev {
                    step: Some(2),
                    instant: true
                },
                Command::GoTo {
                    index: 4,
                    instant: false
                },
                Command::Drag {
                    from: 250.0,
                    to: 100.0,
                    moves: 5
                },
                Command::Destroy { restore: true },
            ]
        );
        assert_eq!(lines[2].number, 5);
        assert_eq!(lines[2].text, "goto 4");
    }

    #[test]
    fn reports_the_failing_line() {
        let err = parse("next\ninsert x\n").unwrap_err();
        assert_eq!(
            err,
            ScriptError {
                line: 2,
                reason: "missing index".into()
            }
        );
        assert!(parse("jump 3").is_err());
    }
}

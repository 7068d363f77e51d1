// parser.rs

use crate::calculator::Operation;
use crate::error::CommandError;

pub const COMMANDS: [&str; 9] = [
    "add", "sub", "mul", "div", "history", "use", "stores", "help", "exit",
];

pub const USAGE: [&str; 9] = [
    "add <a> <b>",
    "sub <a> <b>",
    "mul <a> <b>",
    "div <a> <b>",
    "history [n]",
    "history -c",
    "use <store>",
    "stores",
    "exit [code]",
];

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Command {
    Arith { op: Operation, a: i32, b: i32 },
    History { count: Option<usize> },
    ClearHistory,
    Use(String),
    Stores,
    Help,
    Exit(i32),
}

fn operation(name: &str) -> Option<Operation> {
    match name {
        "add" => Some(Operation::Add),
        "sub" => Some(Operation::Subtract),
        "mul" => Some(Operation::Multiply),
        "div" => Some(Operation::Divide),
        _ => None,
    }
}

fn usage_of(name: &str) -> &'static str {
    USAGE
        .iter()
        .find(|u| u.split(' ').next() == Some(name))
        .copied()
        .unwrap_or("help")
}

fn parse_int(value: &str) -> Result<i32, CommandError> {
    value.parse().map_err(|source| CommandError::InvalidInteger {
        value: value.to_string(),
        source,
    })
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if let [name, operands @ ..] = tokens.as_slice() {
        if let Some(op) = operation(name) {
            return match operands {
                [a, b] => Ok(Some(Command::Arith {
                    op,
                    a: parse_int(a)?,
                    b: parse_int(b)?,
                })),
                _ => Err(CommandError::Usage(usage_of(name))),
            };
        }
    }
    let command = match tokens.as_slice() {
        [] => return Ok(None),
        ["history"] => Command::History { count: None },
        ["history", "-c"] => Command::ClearHistory,
        ["history", n] => Command::History {
            count: Some(n.parse().map_err(|source| CommandError::InvalidCount {
                value: n.to_string(),
                source,
            })?),
        },
        ["use", store] => Command::Use(store.to_string()),
        ["stores"] => Command::Stores,
        ["help"] => Command::Help,
        ["exit"] => Command::Exit(0),
        ["exit", code] => Command::Exit(parse_int(code)?),
        [name, ..] if COMMANDS.contains(name) => {
            return Err(CommandError::Usage(usage_of(name)))
        }
        [other, ..] => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

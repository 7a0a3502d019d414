//! Process list files: one process per line as `arrival burst [priority]`,
//! whitespace separated. Blank lines and `#` comments are skipped; pids
//! follow the order of the remaining lines.

use std::{fmt, str::FromStr};

use crate::sim::ProcessSpec;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    MissingField {
        line: usize,
        field: &'static str,
    },
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },
    TrailingFields {
        line: usize,
    },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::MissingField { line, field } => write!(f, "line {line}: missing {field}"),
            Self::InvalidNumber { line, field, value } => {
                write!(f, "line {line}: invalid {field} {value:?}")
            }
            Self::TrailingFields { line } => {
                write!(f, "line {line}: expected `arrival burst [priority]`")
            }
        }
    }
}

impl std::error::Error for InputError {}

pub fn parse_process_specs(text: &str) -> Result<Vec<ProcessSpec>, InputError> {
    let mut specs = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let content = raw.split('#').next().unwrap_or_default().trim();
        if content.is_empty() {
            continue;
        }

        let mut fields = content.split_whitespace();
        let arrival_time = required(&mut fields, line, "arrival time")?;
        let burst_time = required(&mut fields, line, "burst time")?;
        let priority = match fields.next() {
            Some(value) => parse(value, line, "priority")?,
            None => 0,
        };
        if fields.next().is_some() {
            return Err(InputError::TrailingFields { line });
        }

        specs.push(ProcessSpec::new(arrival_time, burst_time, priority));
    }

    Ok(specs)
}

fn required<'a, T: FromStr>(
    fields: &mut impl Iterator<Item = &'a str>,
    line: usize,
    field: &'static str,
) -> Result<T, InputError> {
    let value = fields
        .next()
        .ok_or(InputError::MissingField { line, field })?;
    parse(value, line, field)
}

fn parse<T: FromStr>(value: &str, line: usize, field: &'static str) -> Result<T, InputError> {
    value.parse().map_err(|_| InputError::InvalidNumber {
        line,
        field,
        value: value.to_owned(),
    })
}

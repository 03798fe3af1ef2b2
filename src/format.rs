//! Text-dataset parsing and result rendering.
//!
//! A thin adapter around the core: the classic benchmark layout is a
//! stream of datasets, each opened by a label token `data.NNN:`, followed
//! by the job count `N`, the machine count `M`, and `N` rows of `M`
//! integer durations (whitespace-separated, row per job). Job ids are
//! assigned 1-based in row order, per dataset.
//!
//! Malformed input fails with a [`ParseError`] naming the dataset and the
//! offending token; rows are never skipped, short rows are never padded.
//! The core is only invoked with fully parsed instances.

use std::fmt;
use std::str::SplitWhitespace;

use crate::models::Instance;
use crate::solver::NehResult;

/// Errors from the text adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A token could not be parsed as the expected number.
    InvalidToken {
        /// Dataset label (or "instance" for unlabeled input).
        context: String,
        /// The token as read.
        token: String,
    },
    /// Input ended before the declared matrix was complete.
    UnexpectedEnd {
        /// Dataset label (or "instance" for unlabeled input).
        context: String,
        /// What was being read when input ran out.
        expected: &'static str,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidToken { context, token } => {
                write!(f, "{context}: invalid token '{token}'")
            }
            ParseError::UnexpectedEnd { context, expected } => {
                write!(f, "{context}: input ended while reading {expected}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses a multi-dataset stream.
///
/// Any token ending in `:` opens a dataset; its label (colon stripped) is
/// returned with the parsed instance, in file order. Tokens before the
/// first label are skipped, matching the forward label scan of the
/// classic readers.
pub fn parse_datasets(input: &str) -> Result<Vec<(String, Instance)>, ParseError> {
    let mut tokens = input.split_whitespace();
    let mut datasets = Vec::new();

    while let Some(tok) = tokens.next() {
        if let Some(label) = tok.strip_suffix(':') {
            let instance = parse_block(&mut tokens, label)?;
            datasets.push((label.to_string(), instance));
        }
    }

    Ok(datasets)
}

/// Parses a single unlabeled instance: `N M` followed by the matrix.
///
/// Trailing tokens are rejected: a well-formed input is exactly one
/// instance.
pub fn parse_instance(input: &str) -> Result<Instance, ParseError> {
    let mut tokens = input.split_whitespace();
    let instance = parse_block(&mut tokens, "instance")?;

    if let Some(extra) = tokens.next() {
        return Err(ParseError::InvalidToken {
            context: "instance".into(),
            token: extra.to_string(),
        });
    }

    Ok(instance)
}

/// Renders the classic dataset report: label, makespan, id sequence.
pub fn render_report(label: &str, result: &NehResult) -> String {
    let ids: Vec<String> = result.job_ids().iter().map(|id| id.to_string()).collect();
    format!("{label}: Cmax = {}\n{}", result.makespan, ids.join(" "))
}

fn parse_block(
    tokens: &mut SplitWhitespace<'_>,
    context: &str,
) -> Result<Instance, ParseError> {
    let jobs = next_number::<usize>(tokens, context, "the job count")?;
    let machines = next_number::<usize>(tokens, context, "the machine count")?;

    let mut rows = Vec::with_capacity(jobs);
    for _ in 0..jobs {
        let mut row = Vec::with_capacity(machines);
        for _ in 0..machines {
            row.push(next_number::<u64>(tokens, context, "a duration")?);
        }
        rows.push(row);
    }

    Ok(Instance::from_matrix(machines, rows))
}

fn next_number<T: std::str::FromStr>(
    tokens: &mut SplitWhitespace<'_>,
    context: &str,
    expected: &'static str,
) -> Result<T, ParseError> {
    let tok = tokens.next().ok_or_else(|| ParseError::UnexpectedEnd {
        context: context.to_string(),
        expected,
    })?;
    tok.parse().map_err(|_| ParseError::InvalidToken {
        context: context.to_string(),
        token: tok.to_string(),
    })
}

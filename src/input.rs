use anyhow::anyhow;

use crate::{parse::parse_double, utils::split::str_split};

/// A field read from the command line or stdin, with its parsed value.
#[derive(Clone, Debug, PartialEq)]
pub struct Reading {
    pub input: String,
    pub value: f64,
}

/// Splits `line` on `delim` and parses every non-empty field.
///
/// Fields that are not entirely a number are pushed to `errors` and skipped.
pub fn read_fields(line: &str, delim: char, errors: &mut Vec<anyhow::Error>) -> Vec<Reading> {
    let mut readings = Vec::new();

    for field in str_split(line, delim) {
        let field = field.trim();
        if field.is_empty() {
            tracing::trace!(line, "skipping empty field");
            continue;
        }

        match parse_double(field) {
            Ok((value, consumed)) if consumed == field.len() => readings.push(Reading {
                input: field.to_string(),
                value,
            }),
            Ok((_, consumed)) => errors.push(anyhow!(
                "unexpected trailing characters in '{}': '{}'",
                field,
                &field[consumed..]
            )),
            Err(err) => errors.push(err.into()),
        }
    }

    readings
}

use anyhow::anyhow;
use clap::Parser;

use crate::{config::Config, format::DEFAULT_PRECISION, units::system::UnitSystem};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None, allow_negative_numbers = true)]
pub struct Args {
    /// Numbers to format; read from stdin (one or more per line) when omitted
    pub values: Vec<String>,

    #[arg(name = "si", long = "si", conflicts_with = "binary")]
    pub si: bool,
    #[arg(
        name = "binary",
        long = "binary",
        aliases = vec!["bin", "iec"],
        conflicts_with = "si"
    )]
    pub binary: bool,

    #[arg(
        name = "precision",
        long = "precision",
        short = 'p',
        default_value_t = DEFAULT_PRECISION
    )]
    pub precision: i32,

    #[arg(
        name = "delimiter",
        long = "delimiter",
        short = 'd',
        aliases = vec!["delim", "sep"],
        default_value_t = ','
    )]
    pub delimiter: char,

    #[arg(name = "table", long = "table", short = 't')]
    pub table: bool,

    #[arg(
        name = "no-errors",
        long = "no-errors",
        aliases = vec![
            "no-error",
            "no-errs",
            "no-err",
            "noerrors",
            "noerror",
            "noerrs",
            "noerr"
        ]
    )]
    pub no_errors: bool,

    #[arg(name = "verbose", long = "verbose", short = 'v')]
    pub verbose: bool,
}

impl TryInto<Config> for Args {
    type Error = anyhow::Error;

    fn try_into(self) -> Result<Config, Self::Error> {
        let unit_system = if self.binary {
            UnitSystem::Binary
        } else {
            UnitSystem::SI
        };

        if is_numeric_char(self.delimiter) {
            return Err(anyhow!(
                "delimiter '{}' cannot be part of a number",
                self.delimiter
            ));
        }

        Ok(Config {
            values: self.values,
            unit_system,
            precision: self.precision,
            delimiter: self.delimiter,
            table: self.table,
            no_errors: self.no_errors,
            verbose: self.verbose,
        })
    }
}

fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E')
}

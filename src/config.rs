use std::ffi::OsString;

use anyhow::anyhow;
use clap::Parser;

use crate::{cli::Args, units::system::UnitSystem};

#[derive(Debug)]
pub struct Config {
    pub values: Vec<String>,
    pub unit_system: UnitSystem,
    pub precision: i32,
    pub delimiter: char,
    pub table: bool,
    pub no_errors: bool,
    pub verbose: bool,
}

impl Config {
    pub fn parse<I, T>(itr: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Args::try_parse_from(itr) {
            Ok(args) => Ok(args.try_into()?),
            Err(err) => Err(anyhow!("error parsing arguments into Config: {}", err)),
        }
    }

    pub fn format(&self, value: f64) -> String {
        self.unit_system.format_with_precision(value, self.precision)
    }
}

use std::io::{self, BufRead};

use anyhow::anyhow;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use humanum::{
    cli::Args,
    config::Config,
    input::{read_fields, Reading},
    ok_or,
    output::{
        errors::print_errors,
        table::{print_table, Row},
    },
};

fn main() -> anyhow::Result<()> {
    let config: Config = Args::parse().try_into()?;
    init_tracing(config.verbose);

    tracing::debug!(?config, "starting");

    let mut errors = Vec::new();
    let mut readings: Vec<Reading> = Vec::new();

    if config.values.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = ok_or!(line, err => {
                errors.push(anyhow!("error reading stdin: {err}"));
                break;
            });
            readings.extend(read_fields(&line, config.delimiter, &mut errors));
        }
    } else {
        for value in &config.values {
            readings.extend(read_fields(value, config.delimiter, &mut errors));
        }
    }

    let rows: Vec<Row> = readings
        .into_iter()
        .map(|r| Row {
            output: config.format(r.value),
            input: r.input,
        })
        .collect();

    print_table(&rows, config.table);

    if !errors.is_empty() {
        if !config.no_errors {
            print_errors(&errors);
        }
        return Err(anyhow!("{} value(s) could not be read", errors.len()));
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pathget::{PropertyPath, Resolver, ResolverConfig, Value};

/// Print the value found at a path in a json or yaml document.
#[derive(clap::Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Data file. json or yaml.
    #[arg(value_name = "data.json|data.yaml")]
    data: String,

    /// Path to resolve, e.g. `a.0.b.c`.
    path: String,

    /// Value printed when the path resolves to null or undefined. Parsed as json if possible.
    #[arg(long, short)]
    default: Option<String>,

    /// Segment separator.
    #[arg(long, short, default_value_t = '.')]
    separator: char,

    /// Treat `field[index]` as an index lookup.
    #[arg(long, short)]
    brackets: bool,

    /// Read the path as a json array of keys instead of a dotted string.
    #[arg(long)]
    keys: bool,
}

fn read_data(file: &str) -> Result<Value> {
    if file.ends_with(".json") {
        Value::from_json_file(file)
    } else if file.ends_with(".yaml") || file.ends_with(".yml") {
        Value::from_yaml_file(file)
    } else {
        bail!("Unsupported data file `{file}`. Must be json or yaml.")
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let data = read_data(&cli.data)?;

    let resolver = Resolver::new(ResolverConfig {
        separator: cli.separator,
        bracket_indices: cli.brackets,
    })?;

    let default = cli
        .default
        .map(|d| Value::from_json_str(&d).unwrap_or_else(|_| Value::from(d)));

    let keys;
    let path = if cli.keys {
        keys = Value::from_json_str(&cli.path)
            .with_context(|| format!("`{}` is not a json array of keys", cli.path))?;
        PropertyPath::from(&keys)
    } else {
        PropertyPath::from(&cli.path)
    };

    let value = resolver.resolve(&data, &path, default.as_ref());
    println!("{}", value.to_json_str()?);
    Ok(())
}

// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::{bail, Context};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use the_decorators::config::{load_and_validate_config, Config};
use the_decorators::demo::{run, Number, DEFAULT_INPUT};
use the_decorators::observability::init_tracing;
use the_decorators::sinks::TracingSink;
use the_decorators::traits::SharedSink;

const USAGE: &str = "Usage: the-decorators [--config <config.yaml>] [number]";

/// Command line arguments of the demo.
#[derive(Debug, PartialEq)]
struct Args {
    config: Option<PathBuf>,
    input: Number,
}

fn parse_args(args: &[String]) -> anyhow::Result<Args> {
    let mut config = None;
    let mut input = None;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = iter.next().context(USAGE)?;
                config = Some(PathBuf::from(path));
            }
            _ if input.is_none() => {
                input = Some(arg.parse::<Number>().context(USAGE)?);
            }
            _ => bail!("unexpected argument '{}'\n{}", arg, USAGE),
        }
    }

    Ok(Args {
        config,
        input: input.unwrap_or(DEFAULT_INPUT),
    })
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let args = parse_args(&args)?;

    let config = match &args.config {
        Some(path) => load_and_validate_config(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => Config::default(),
    };

    init_tracing(&config.logging)?;

    // Created once here and handed to every wrapper that logs.
    let logger: SharedSink = Arc::new(TracingSink::new(&config.logging.channel));

    println!("{}", run(args.input, logger)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let args = parse_args(&[]).unwrap();
        assert_eq!(args.config, None);
        assert_eq!(args.input, Number::Int(104));
    }

    #[test]
    fn test_config_and_number() {
        let args = parse_args(&strings(&["--config", "demo.yaml", "2.5"])).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("demo.yaml")));
        assert_eq!(args.input, Number::Float(2.5));
    }

    #[test]
    fn test_missing_config_path() {
        assert!(parse_args(&strings(&["--config"])).is_err());
    }

    #[test]
    fn test_extra_argument() {
        let err = parse_args(&strings(&["1", "2"])).unwrap_err();
        assert!(err.to_string().contains("unexpected argument '2'"));
    }
}

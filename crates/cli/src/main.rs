use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use bytefeed_corelib as core;
use bytefeed_corelib::config::Config;
use bytefeed_corelib::{ByteSinkAdapter, ConfigError, PrimitiveSink, PutError};
use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;

mod value;

use value::{Value, ValueError, ValueFunnel};

#[derive(Parser)]
#[command(name = "bytefeed", version, about = "Feed typed values into a hash")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported hashes
    Hashes {
        #[arg(long)]
        json: bool,
    },
    /// Hash a sequence of typed values
    Digest {
        /// Hash id; overrides the config file
        #[arg(long)]
        hash: Option<String>,
        /// Domain label fed before the values; overrides the config file
        #[arg(long)]
        label: Option<String>,
        /// JSON config file with `hash` and `label`
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long)]
        json: bool,
        /// Values as TYPE:VALUE (u8, i16, i32, i64, char, bool, f32, f64, str, chars, hex)
        #[arg(required = true)]
        values: Vec<String>,
    },
    /// Print the bytes a sequence of typed values forwards, as hex
    Bytes {
        #[arg(required = true)]
        values: Vec<String>,
    },
}

#[derive(Serialize)]
struct DigestReport<'a> {
    hash: &'a str,
    label: Option<&'a str>,
    values: usize,
    digest: String,
}

fn setup_logger(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}] {}",
                record.target(),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
        .context("installing logger")?;
    Ok(())
}

fn parse_values(tokens: &[String]) -> Result<Vec<Value>> {
    tokens
        .iter()
        .map(|t| t.parse::<Value>().map_err(anyhow::Error::from))
        .collect()
}

fn feed<S: PrimitiveSink>(sink: &mut S, values: &[Value]) -> Result<()> {
    for (i, v) in values.iter().enumerate() {
        sink.put_object(v, &ValueFunnel)
            .with_context(|| format!("value #{} ({:?})", i + 1, v))?;
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Hashes { json }) => {
            let infos = core::list_hashes();
            if json {
                println!("{}", serde_json::to_string(infos)?);
            } else {
                for h in infos {
                    println!("{}  digest={} bytes", h.id, h.digest_len);
                }
            }
        }
        Some(Commands::Digest {
            hash,
            label,
            config,
            json,
            values,
        }) => {
            let mut cfg = match &config {
                Some(path) => Config::load(path)
                    .with_context(|| format!("loading config {}", path.display()))?,
                None => Config::default(),
            };
            if let Some(hash) = hash {
                cfg.hash = hash;
            }
            if label.is_some() {
                cfg.label = label;
            }
            cfg.validate()?;

            let values = parse_values(&values)?;
            let hasher = cfg.hasher()?;
            let id = hasher.id();
            log::info!("hashing {} values with {}", values.len(), id);

            let mut adapter = ByteSinkAdapter::new(hasher);
            feed(&mut adapter, &values)?;
            let digest = hex::encode(adapter.into_inner().finalize());

            if json {
                let report = DigestReport {
                    hash: id,
                    label: cfg.label.as_deref(),
                    values: values.len(),
                    digest,
                };
                println!("{}", serde_json::to_string(&report)?);
            } else {
                println!("{digest}");
            }
        }
        Some(Commands::Bytes { values }) => {
            let values = parse_values(&values)?;
            let mut adapter = ByteSinkAdapter::new(Vec::new());
            feed(&mut adapter, &values)?;
            println!("{}", hex::encode(adapter.into_inner()));
        }
        None => {
            println!("bytefeed {}", core::version());
            println!("Try: `bytefeed hashes` or `bytefeed digest i32:1 str:abc`");
        }
    }
    Ok(())
}

/// Bad input exits 2; anything else exits 1.
fn exit_code(err: &anyhow::Error) -> u8 {
    let bad_input = err.chain().any(|cause| {
        cause.is::<PutError>() || cause.is::<ConfigError>() || cause.is::<ValueError>()
    });
    if bad_input {
        2
    } else {
        1
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = setup_logger(cli.verbose) {
        eprintln!("Error while initializing logger: {e:#}");
    }
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(exit_code(&e))
        }
    }
}

use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use partial_foreach::{
    resolve_options, try_foreach, Args, Arity, Declared, Key, Overrides, Settings,
};
use serde_json::Value;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "foreach", version, about = "Arity-aware foreach over JSON documents")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Walk a JSON document and print one line per callback invocation.
    Walk {
        /// JSON document (reads stdin when omitted).
        document: Option<PathBuf>,
        /// Declared callback signature; its parameter count picks the call shape.
        #[arg(long, default_value = "(key, value)")]
        signature: String,
        /// Options document, e.g. '{"castArrayIndex": false}'.
        #[arg(long)]
        options: Option<String>,
        /// Return `false` from the Nth invocation (N >= 1).
        #[arg(long)]
        stop_after: Option<NonZeroUsize>,
    },
    /// Print the settings a walk would use.
    Options {
        /// Options document merged over the defaults.
        #[arg(long)]
        options: Option<String>,
    },
    /// Print the arity detected for a declared signature.
    Arity {
        /// Declaration text, e.g. 'function (key, value)'.
        signature: String,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Walk {
            document,
            signature,
            options,
            stop_after,
        } => run_walk(document, &signature, options.as_deref(), stop_after)?,
        Commands::Options { options } => run_options(options.as_deref())?,
        Commands::Arity { signature } => {
            println!("{}", Arity::from_declaration(&signature).count());
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn run_walk(
    document: Option<PathBuf>,
    signature: &str,
    options: Option<&str>,
    stop_after: Option<NonZeroUsize>,
) -> Result<()> {
    let container = read_document(document.as_ref())?;
    let overrides = parse_overrides(options)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    walk_document(&container, signature, overrides.as_ref(), stop_after, &mut out)
        .context("failed to write output")?;
    out.flush().context("failed to flush output")?;
    Ok(())
}

/// Walk `container` and write one line per invocation: `key<TAB>value` for
/// 2-arg calls, `value` for 1-arg calls. Keys and values are printed as JSON,
/// so a numeric key reads `0` and a native one `"0"`.
fn walk_document<W: Write>(
    container: &Value,
    signature: &str,
    overrides: Option<&Overrides>,
    stop_after: Option<NonZeroUsize>,
    out: &mut W,
) -> io::Result<()> {
    let mut invocations = 0usize;

    let callback = Declared::new(signature, |args: Args<'_, Value>| -> io::Result<bool> {
        invocations += 1;
        match args.into_parts() {
            (Some(key), value) => writeln!(out, "{}\t{value}", key_json(key))?,
            (None, value) => writeln!(out, "{value}")?,
        }
        Ok(stop_after.map_or(true, |limit| invocations < limit.get()))
    });

    try_foreach(container, callback, overrides)
}

fn key_json(key: Key<'_>) -> Value {
    match key {
        Key::Index(index) => Value::from(index),
        Key::Name(name) => Value::String(name.into_owned()),
    }
}

fn run_options(options: Option<&str>) -> Result<()> {
    let overrides = parse_overrides(options)?;
    let settings = resolve_options(overrides.as_ref());

    let stdout = io::stdout();
    write_settings(&settings, &mut stdout.lock())?;
    Ok(())
}

fn write_settings<W: Write>(settings: &Settings, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, settings)?;
    writeln!(out)?;
    Ok(())
}

fn read_document(path: Option<&PathBuf>) -> Result<Value> {
    let text = match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read document {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read document from stdin")?;
            buffer
        }
    };
    serde_json::from_str(&text).context("document is not valid JSON")
}

fn parse_overrides(options: Option<&str>) -> Result<Option<Overrides>> {
    options
        .map(|text| Overrides::from_json_str(text).context("failed to parse --options"))
        .transpose()
}

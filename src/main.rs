use std::io::Read;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, bail};
use clap::{Parser as ArgParser, ValueEnum};

use packlang::Error;
use packlang::parser::Parser;

/// Parse a program and print its syntax tree.
#[derive(Debug, ArgParser)]
#[command(name = "packlang", version, about = "Packrat parser for a small expression language.")]
struct Args {
    /// Source file to parse. Reads stdin when omitted.
    file: Option<PathBuf>,

    /// What to print after a successful parse.
    #[arg(long, value_enum, default_value_t = Emit::Ast)]
    emit: Emit,

    /// Lex on a separate thread while parsing.
    #[arg(long)]
    threaded: bool,

    /// Log level (off, error, warn, info, debug, trace). Falls back to RUST_LOG.
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Emit {
    /// Debug dump of the tree
    Ast,
    /// The tree printed back as source code
    Source,
    /// Memo table counters
    Stats,
}

fn init_logging(requested: Option<String>) -> anyhow::Result<()> {
    let level = requested
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| "WARN".to_owned());
    let level = log::LevelFilter::from_str(&level)
        .map_err(|_| anyhow::anyhow!("invalid log level '{level}'"))?;

    simplelog::TermLogger::init(
        level,
        simplelog::ConfigBuilder::new()
            .set_time_format_custom(&[])
            .build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Never,
    )?;

    Ok(())
}

fn read_source(file: Option<&PathBuf>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            Ok(input)
        }
    }
}

/// Renders an error, pointing at the offending token when its location is
/// known.
fn render(parser: Option<&Parser>, err: &Error) -> String {
    let msg = err.to_string();
    let Error::Parse(parse_err) = err else {
        return msg;
    };
    let Some(token) = parse_err
        .position()
        .and_then(|pos| parser.and_then(|parser| parser.token_at(pos)))
    else {
        return msg;
    };

    let span = &token.position;
    if span.source.is_empty() {
        msg
    } else {
        span.to_string(&msg)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log_level)?;

    let input = read_source(args.file.as_ref())?;
    let outcome = packlang::parse_outcome(&input, args.threaded);
    let root = match outcome.result {
        Ok(root) => root,
        Err(err) => bail!("{}", render(outcome.parser.as_ref(), &err)),
    };
    let stats = outcome
        .parser
        .as_ref()
        .map(Parser::stats)
        .unwrap_or_default();

    match args.emit {
        Emit::Ast => println!("{root:#?}"),
        Emit::Source => print!("{root}"),
        Emit::Stats => {
            println!("functions: {}", root.functions.len());
            println!("memo entries: {}", stats.entries);
            println!("memo hits: {}", stats.hits);
            println!("memo misses: {}", stats.misses);
        }
    }

    Ok(())
}

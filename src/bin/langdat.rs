//! langdat CLI - inspect and edit language string files.
//!
//! Usage:
//!   langdat dump lang00.dat
//!   langdat compare lang07.dat lang00.dat --missing
//!   langdat set lang07.dat 12 "Nuovo gioco"

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, info};

use langdat::{Session, StringsFile, StringsFileConfig, WriteMode};

/// Reader and editor for NULL-delimited UTF-16 string files
#[derive(Parser, Debug)]
#[command(name = "langdat")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "LANGDAT_LOG", default_value = "warn")]
    log_level: String,

    /// Largest file to read, in bytes (overrides LANGDAT_MAX_SIZE)
    #[arg(long, global = true)]
    max_size: Option<u64>,

    /// Truncate and write files in place instead of replacing them atomically
    #[arg(long, global = true)]
    no_atomic: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every string with its index
    Dump { file: PathBuf },

    /// Print the number of strings
    Count { file: PathBuf },

    /// Print strings side by side with a reference file
    Compare {
        file: PathBuf,
        reference: PathBuf,

        /// Only rows with a reference string but no translation
        #[arg(long)]
        missing: bool,
    },

    /// Replace one string and save the file in place
    Set {
        file: PathBuf,
        index: usize,
        text: String,
    },

    /// Create a blank file with one empty string per reference string
    New {
        reference: PathBuf,

        #[arg(short, long)]
        output: PathBuf,
    },

    /// Write strings as escaped text, one per line
    Export {
        file: PathBuf,

        #[arg(short, long)]
        output: PathBuf,
    },

    /// Build a strings file from escaped text, one string per line
    Import {
        input: PathBuf,

        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging(&cli.log_level)?;

    let mut config = StringsFileConfig::from_env();
    if let Some(max_size) = cli.max_size {
        config = config.with_max_file_size(max_size);
    }
    if cli.no_atomic {
        config = config.with_write_mode(WriteMode::Truncate);
    }
    debug!("{config:?}");

    let file = StringsFile::new(config);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.command {
        Commands::Dump { file: path } => {
            let strings = file.read(&path)?;
            for (index, text) in strings.iter().enumerate() {
                writeln!(out, "{index}\t{}", escape(text))?;
            }
        }
        Commands::Count { file: path } => {
            let strings = file.read(&path)?;
            writeln!(out, "{}", strings.len())?;
        }
        Commands::Compare {
            file: path,
            reference,
            missing,
        } => {
            let mut session = Session::with_file(file);
            session.open_reference(&reference)?;
            session.open(&path)?;

            for (index, row) in session.comparisons().iter().enumerate() {
                if missing && !row.is_untranslated() {
                    continue;
                }
                writeln!(
                    out,
                    "{index}\t{}\t{}",
                    escape(&row.editable),
                    escape(row.reference().unwrap_or_default())
                )?;
            }
        }
        Commands::Set {
            file: path,
            index,
            text,
        } => {
            let mut session = Session::with_file(file);
            session.open(&path)?;
            session.set(index, text)?;
            if session.is_dirty() {
                session.save()?;
                info!("updated string {index} in {}", path.display());
            }
        }
        Commands::New { reference, output } => {
            let mut session = Session::with_file(file);
            session.open_reference(&reference)?;
            session
                .new_from_reference()
                .with_context(|| format!("{} has no strings", reference.display()))?;
            session.save_as(&output)?;
            writeln!(
                out,
                "Created {} with {} empty strings",
                output.display(),
                session.comparisons().len()
            )?;
        }
        Commands::Export { file: path, output } => {
            let strings = file.read(&path)?;
            let mut text = String::new();
            for line in &strings {
                text.push_str(&escape(line));
                text.push('\n');
            }
            fs::write(&output, text)
                .with_context(|| format!("failed to write {}", output.display()))?;
            info!("exported {} strings to {}", strings.len(), output.display());
        }
        Commands::Import { input, output } => {
            let text = fs::read_to_string(&input)
                .with_context(|| format!("failed to read {}", input.display()))?;
            let strings = text
                .lines()
                .enumerate()
                .map(|(n, line)| {
                    unescape(line).with_context(|| format!("{}:{}", input.display(), n + 1))
                })
                .collect::<Result<Vec<_>>>()?;
            file.write(&output, &strings)?;
            info!("imported {} strings into {}", strings.len(), output.display());
        }
    }

    out.flush()?;
    Ok(())
}

fn init_logging(level: &str) -> Result<()> {
    let level = log::LevelFilter::from_str(level)
        .with_context(|| format!("invalid log level {level:?}"))?;

    env_logger::Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{}:{} [{}] - {}",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.level(),
                record.args()
            )
        })
        .filter(None, level)
        .init();
    Ok(())
}

/// Make a string fit on one line.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}

fn unescape(line: &str) -> Result<String> {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some(other) => bail!("unknown escape \\{other}"),
            None => bail!("dangling backslash"),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_roundtrip() {
        let text = "line one\nline\ttwo \\ end\r";
        let escaped = escape(text);
        assert!(!escaped.contains('\n'));
        assert_eq!(unescape(&escaped).unwrap(), text);
    }

    #[test]
    fn test_unescape_rejects_unknown() {
        assert!(unescape("bad \\q").is_err());
        assert!(unescape("trailing \\").is_err());
    }
}

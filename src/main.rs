/*!
The `acorn` command line tool.

Reads a single JSON document from a file or standard input and writes it back out
as normalized JSON. Exits with `1` when the document is rejected, and `2` when it
couldn't be read at all.
*/

use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use tracing::{debug, error, warn};
use tracing_subscriber::EnvFilter;

use acorn_json::{Options, ReadSource, Value};

#[derive(Parser)]
#[command(name = "acorn")]
#[command(about = "Parse a JSON document and print it back out", long_about = None)]
#[command(version)]
struct Cli {
    /// The document to read. Standard input is read when omitted or `-`.
    path: Option<PathBuf>,

    /// Print the document across multiple indented lines
    #[arg(long)]
    pretty: bool,

    /// Reject documents that nest arrays and objects deeper than this
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    let mut options = Options::new();
    if let Some(depth) = cli.max_depth {
        options = options.max_depth(depth);
    }

    let value = match read(cli.path.as_ref(), options) {
        Ok(value) => value,
        Err(err) if err.is_input() => {
            warn!(error = %err, "rejected document");
            return ExitCode::from(1);
        }
        Err(err) => {
            error!(error = %err, "failed to read document");
            return ExitCode::from(2);
        }
    };

    debug!(kind = value.type_name(), "parsed document");

    match write(&value, cli.pretty) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "failed to write document");
            ExitCode::from(2)
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn read(path: Option<&PathBuf>, options: Options) -> Result<Value, acorn_json::Error> {
    match path.filter(|path| path.as_os_str() != "-") {
        Some(path) => {
            debug!(path = %path.display(), "reading document");

            let file = fs::File::open(path)?;
            acorn_json::parse_with(ReadSource::new(file), options)
        }
        None => {
            debug!("reading document from stdin");

            acorn_json::parse_with(ReadSource::new(io::stdin().lock()), options)
        }
    }
}

fn write(value: &Value, pretty: bool) -> io::Result<()> {
    let value = value.to_value();

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    if pretty {
        serde_json::to_writer_pretty(&mut stdout, &value)?;
    } else {
        serde_json::to_writer(&mut stdout, &value)?;
    }

    writeln!(stdout)?;
    stdout.flush()
}

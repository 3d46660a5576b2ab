use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::Parser;
use tracing::{warn, Level};
use tracing_subscriber::FmtSubscriber;

use matmul_order::bench;
use matmul_order::config::BenchConfig;

/// Times naive (i,j,k) against cache-friendly (i,k,j) square matrix multiplication
#[derive(Parser, Debug)]
#[command(name = "matmul-order")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Matrix dimension N; non-positive or unparseable values use 1024
    #[arg(value_name = "N", allow_negative_numbers = true)]
    size: Option<String>,

    /// Anything after N is ignored
    #[arg(hide = true, allow_negative_numbers = true)]
    rest: Vec<String>,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Parses the command line, keeping the first argument as N when clap rejects the rest.
///
/// Only `--help` and `--version` come back as errors, so the caller can print them.
fn parse_args<I, T>(args: I) -> Result<(Cli, Option<ErrorKind>), clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    match Cli::try_parse_from(&args) {
        Ok(cli) => Ok((cli, None)),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => Err(e),
        Err(e) => {
            let cli = Cli {
                size: args.get(1).map(|arg| arg.to_string_lossy().into_owned()),
                rest: Vec::new(),
                verbose: false,
            };
            Ok((cli, Some(e.kind())))
        }
    }
}

fn main() {
    let (cli, parse_error) = match parse_args(std::env::args_os()) {
        Ok(parsed) => parsed,
        Err(e) => {
            let _ = e.print();
            return;
        }
    };

    let log_level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    if let Some(kind) = parse_error {
        warn!("could not parse command line ({:?}), reading N from the first argument", kind);
    }
    if !cli.rest.is_empty() {
        warn!("ignoring extra arguments {:?}", cli.rest);
    }

    let config = BenchConfig::from_arg(cli.size.as_deref());
    let report = bench::run(&config);
    print!("{}", report);
}

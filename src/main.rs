//! Interactive front end for path-norm.
//!
//! Presents a menu of the four path operations and reads operands from
//! stdin. Exits with status 0 when input ends at the menu or `0` is chosen,
//! and with status 1 on a fatal input error.

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use path_norm::{FixedDirectory, Normalizer, PathStyle, ProcessDirectory, Shell, WorkingDirectory};

#[derive(Parser, Debug)]
#[command(name = "path-norm", version, about = "Join, absolutize and relativize paths lexically")]
struct Cli {
    /// Log debug records to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all log output
    #[arg(short, long)]
    quiet: bool,

    /// Separator convention: posix, windows or native
    #[arg(long, env = "PATH_NORM_STYLE", default_value = "native")]
    style: PathStyle,

    /// Use this directory instead of the process working directory
    #[arg(long, value_name = "DIR")]
    cwd: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = path_norm::init_logger(cli.verbose, cli.quiet).install() {
        eprintln!("Error: {e}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd: Box<dyn WorkingDirectory> = match cli.cwd {
        Some(dir) => Box::new(FixedDirectory::new(dir)),
        None => Box::new(ProcessDirectory),
    };
    log::debug!("using {} style", cli.style);

    let normalizer = Normalizer::new(cli.style, cwd);
    let stdin = io::stdin();
    let mut shell = Shell::new(normalizer, stdin.lock(), io::stdout().lock(), io::stderr().lock());
    shell.run().context("interactive session aborted")?;
    Ok(())
}

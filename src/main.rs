use std::{fs, path::PathBuf, process};

use clap::Parser;
use monkey::{interpreter::environment::Environment, repl, run_source};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// monkey runs programs written in the Monkey scripting language, or starts
/// an interactive session when given nothing to run.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// A source file to run.
    #[arg(conflicts_with = "eval")]
    file: Option<PathBuf>,

    /// Source code to run instead of a file.
    #[arg(short, long, value_name = "SOURCE")]
    eval: Option<String>,

    /// Do not echo the value of the last statement.
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr))
                                  .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                                                                             EnvFilter::new("warn")
                                                                         }))
                                  .init();

    let args = Args::parse();
    let env = Environment::new();

    let exit_code = if let Some(source) = args.eval {
        run_source(&source, "<eval>", &env, !args.quiet).exit_code
    } else if let Some(path) = args.file {
        let source = fs::read_to_string(&path).unwrap_or_else(|error| {
                                                  eprintln!("Failed to read the input file \
                                                             '{}': {error}",
                                                            path.display());
                                                  process::exit(1);
                                              });
        run_source(&source, &path.display().to_string(), &env, !args.quiet).exit_code
    } else {
        repl::run(env).unwrap_or_else(|error| {
                          eprintln!("Terminal error: {error}");
                          1
                      })
    };

    process::exit(exit_code);
}

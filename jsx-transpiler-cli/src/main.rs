//! CLI for the JSX transpiler.
use std::io::{Read, Write};

use clap::Parser;
use clap_verbosity_flag::Verbosity;
use jsx_transpiler_cli::Args;

/// Lowers JSX into plain JavaScript calls.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
	#[command(flatten)]
	args: Args,
	#[command(flatten)]
	verbose: Verbosity,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.target(env_logger::fmt::Target::Stderr)
		.init();

	let args = cli.args;

	let source = if let Some(ref entry) = args.entry_point {
		log::debug!("reading {entry}");
		std::fs::read_to_string(entry)?
	} else {
		let mut str = String::with_capacity(4096);
		std::io::stdin().read_to_string(&mut str)?;
		str
	};

	let compilation = jsx_transpiler_cli::run(source, &args)?;

	for warning in &compilation.warnings {
		eprintln!("{warning}");
	}

	if !compilation.errors.is_empty() {
		for error in &compilation.errors {
			eprintln!("{error}");
		}
		eprintln!("\nexiting due to {} errors", compilation.errors.len());
		std::process::exit(1);
	}

	if let Some(ref output) = args.output {
		std::fs::write(output, compilation.code.as_bytes())?;
	} else {
		std::io::stdout().write_all(compilation.code.as_bytes())?;
	}

	Ok(())
}

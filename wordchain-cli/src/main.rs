use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use env_logger::Env;
use log::{LevelFilter, info};
use wordchain_core::{
	DEFAULT_MAX_WORDS, GenerationInput, Generator, MarkovModel, ModelBuilder, SeedMode, generate,
};

const PROMPT: &str = "Enter filename (i.e. doctorwho.txt): ";

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about = "Generate random text from a trigram word model",
	long_about = None
)]
struct Cli {
	/// Source text file; `-` reads standard input. Prompted for when omitted
	#[arg(value_name = "PATH")]
	source: Option<PathBuf>,

	/// Maximum number of words to generate
	#[arg(short = 'n', long = "words", value_name = "COUNT", default_value_t = DEFAULT_MAX_WORDS)]
	max_words: usize,

	/// Seed the random source for reproducible output
	#[arg(long, value_name = "SEED")]
	seed: Option<u64>,

	/// Print the result as JSON
	#[arg(long)]
	json: bool,

	/// Increase verbosity (-v, -vv, -vvv)
	#[arg(short = 'v', long, action = ArgAction::Count)]
	verbose: u8,

	/// Decrease verbosity (-q, -qq)
	#[arg(short = 'q', long, action = ArgAction::Count)]
	quiet: u8,
}

fn main() -> Result<()> {
	let cli = Cli::parse();
	init_logging(cli.verbose, cli.quiet);

	let source = match cli.source {
		Some(path) => path,
		None => prompt_for_source()?,
	};

	let input = GenerationInput { max_words: cli.max_words, seed: SeedMode::from(cli.seed) };
	let mut model = load_model(&source)?;
	info!("generating up to {} words", input.max_words);

	let mut generator = Generator::new(input.seed);
	let generation = generate(&mut generator, &mut model, input.max_words)
		.context("text generation failed")?;

	let stdout = io::stdout();
	let mut out = stdout.lock();
	if cli.json {
		serde_json::to_writer(&mut out, &generation).context("unable to encode result")?;
		writeln!(out)?;
	} else {
		writeln!(out, "{}", generation.text)?;
	}
	Ok(())
}

fn init_logging(verbose: u8, quiet: u8) {
	let level = if quiet > 0 {
		match quiet {
			1 => LevelFilter::Error,
			_ => LevelFilter::Off,
		}
	} else {
		match verbose {
			0 => LevelFilter::Warn,
			1 => LevelFilter::Info,
			2 => LevelFilter::Debug,
			_ => LevelFilter::Trace,
		}
	};

	let env = Env::default().default_filter_or(level.as_str());
	let mut builder = env_logger::Builder::from_env(env);
	builder.format_timestamp_millis();
	let _ = builder.try_init();
}

/// Asks for the source file on standard input.
fn prompt_for_source() -> Result<PathBuf> {
	print!("{PROMPT}");
	io::stdout().flush()?;

	let mut line = String::new();
	io::stdin().lock().read_line(&mut line).context("unable to read filename")?;
	let name = line.trim();
	if name.is_empty() {
		bail!("no source file given");
	}
	Ok(PathBuf::from(name))
}

fn load_model(source: &Path) -> Result<MarkovModel> {
	if source.as_os_str() == "-" {
		return ModelBuilder::build_from_reader(io::stdin().lock())
			.context("unable to read standard input");
	}
	ModelBuilder::build_from_file(source)
		.with_context(|| format!("unable to build model from {}", source.display()))
}

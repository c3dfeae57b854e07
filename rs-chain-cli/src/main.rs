use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use rs_chain_core::io::read_corpus;
use rs_chain_core::model::chain::WordChain;
use rs_chain_core::model::config::{ChainLimits, GenerationInput};
use rs_chain_core::model::generator::SentenceGenerator;
use rs_chain_core::model::tokenizer::Tokenizer;

/// Embedded source text.
const CORPUS: &str = include_str!("../data/frankenstein.txt");

#[derive(Parser)]
#[command(name = "rs-chain", about = "Generate random sentences from a word chain")]
struct Args {
	/// Read the corpus from a file instead of the embedded text
	#[arg(long)]
	corpus: Option<PathBuf>,

	/// Random seed (defaults to the current time)
	#[arg(long)]
	seed: Option<u64>,

	/// Maximum number of distinct tokens (successor lists get a tenth of it)
	#[arg(long)]
	max_tokens: Option<usize>,

	/// Maximum number of successors recorded per token
	#[arg(long)]
	max_successors: Option<usize>,

	/// Sentence buffer capacity in bytes
	#[arg(long)]
	sentence_capacity: Option<usize>,

	/// Attempts made to find a sentence with the right terminator
	#[arg(long)]
	max_attempts: Option<usize>,
}

impl Args {
	fn limits(&self) -> Result<ChainLimits, Box<dyn std::error::Error>> {
		let mut limits = match self.max_tokens {
			Some(n) => ChainLimits::with_max_tokens(n)?,
			None => ChainLimits::default(),
		};
		if let Some(n) = self.max_successors {
			limits.set_max_successors(n)?;
		}
		Ok(limits)
	}

	fn generation_input(&self) -> Result<GenerationInput, Box<dyn std::error::Error>> {
		let mut input = GenerationInput::default();
		if let Some(n) = self.sentence_capacity {
			input.set_sentence_capacity(n)?;
		}
		if let Some(n) = self.max_attempts {
			input.set_max_attempts(n)?;
		}
		Ok(input)
	}

	fn seed(&self) -> u64 {
		self.seed.unwrap_or_else(|| {
			SystemTime::now()
				.duration_since(UNIX_EPOCH)
				.map(|d| d.as_secs())
				.unwrap_or_default()
		})
	}
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

	let args = Args::parse();

	let text = match &args.corpus {
		Some(path) => read_corpus(path)?,
		None => CORPUS.to_owned(),
	};

	let chain = WordChain::build(&text, &Tokenizer::default(), args.limits()?)?;

	let seed = args.seed();
	info!("Seeding random source with {}", seed);
	let mut generator = SentenceGenerator::new(&chain, StdRng::seed_from_u64(seed), args.generation_input()?);

	// A question, then an exclamation
	println!("{}", generator.generate_ending_with('?')?);
	println!();
	println!("{}", generator.generate_ending_with('!')?);

	Ok(())
}

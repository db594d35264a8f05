use clap::Parser;
use random_sequence::{generate_sequence_file, resolve_count, GeneratorConfig, SequenceError};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Write a random permutation of 0..COUNT to random_sequence.txt",
    long_about = None,
    allow_negative_numbers = true
)]
struct Cli {
    /// How many numbers to generate [default: 20]
    #[arg(value_name = "COUNT")]
    count: Option<String>,
    /// Anything after COUNT, kept only so it can be reported as an error
    #[arg(hide = true)]
    extra: Vec<String>,
    /// Seed the shuffle for a reproducible sequence
    #[arg(long, hide = true)]
    seed: Option<u64>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code());
    }
}

fn run() -> Result<(), SequenceError> {
    let cli = Cli::parse();
    let args: Vec<String> = cli.count.into_iter().chain(cli.extra).collect();
    let config = GeneratorConfig {
        count: resolve_count(&args)?,
        seed: cli.seed,
        ..GeneratorConfig::default()
    };

    println!("generating {} numbers", config.count);
    generate_sequence_file(&config)?;
    Ok(())
}

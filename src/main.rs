//! Hangman Solver - CLI
//!
//! Hangman oracle and letter-guessing strategies with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman_solver::{
    commands::{run_benchmark, run_simple, solve_word},
    core::GameConfig,
    output::{print_benchmark_result, print_game_result},
    solver::{Solver, StrategyKind},
    wordlists::{
        Dictionary,
        loader::{embedded_dictionary, load_from_file},
    },
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "hangman_solver",
    about = "Hangman oracle and frequency/predictor guessing strategies",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: frequency (default), routing
    #[arg(short, long, global = true, default_value = "frequency")]
    strategy: String,

    /// Wordlist: 'embedded' (default) or path to a line-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Wrong guesses allowed per game
    #[arg(long, global = true, default_value_t = 6)]
    max_tries: u32,

    /// Character shown for hidden letters
    #[arg(long, global = true, default_value_t = '_')]
    mask: char,

    /// Reveal fraction at which the routing strategy stops using its predictor
    #[arg(long, global = true, default_value_t = 0.5)]
    threshold: f64,

    /// Shortest dictionary word to keep
    #[arg(long, global = true, default_value_t = 3)]
    min_len: usize,

    /// Longest dictionary word to keep
    #[arg(long, global = true, default_value_t = 15)]
    max_len: usize,

    /// Seed for secret-word draws (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log level when RUST_LOG is unset (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode: you referee, the solver suggests letters
    Simple,

    /// Let the solver play one game
    Solve {
        /// Secret word (random dictionary word if omitted)
        word: Option<String>,

        /// Show per-turn tries and the hidden-letter tally
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark solver performance over random words
    Benchmark {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let config = GameConfig {
            max_tries: self.max_tries,
            mask_char: self.mask,
            heuristic_threshold: self.threshold,
            min_word_len: self.min_len,
            max_word_len: self.max_len,
            ..GameConfig::default()
        };
        config.validate()?;
        Ok(config)
    }

    fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }
}

/// Load the dictionary named by the -w flag and apply the length bounds
fn load_dictionary(wordlist: &str, config: &GameConfig) -> Result<Dictionary> {
    let dictionary = match wordlist {
        "embedded" => embedded_dictionary(),
        path => load_from_file(path).with_context(|| format!("failed to read wordlist {path}"))?,
    };

    let dictionary = dictionary.with_length_bounds(config.min_word_len, config.max_word_len);
    info!(words = dictionary.len(), wordlist, "dictionary loaded");
    Ok(dictionary)
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    init_tracing(&cli.log_level);

    let config = cli.game_config()?;
    let dictionary = load_dictionary(&cli.wordlist, &config)?;
    let kind = StrategyKind::from_name(&cli.strategy);

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&dictionary, config, cli.seed),
        Commands::Simple => {
            let solver = Solver::new(kind, &dictionary, config);
            run_simple(&solver)
        }
        Commands::Solve { word, verbose } => {
            let solver = Solver::new(kind, &dictionary, config);
            let mut rng = cli.rng();
            let outcome = solve_word(&solver, word.as_deref(), &mut rng)?;
            print_game_result(&outcome, solver.config().max_tries, verbose);
            Ok(())
        }
        Commands::Benchmark { count } => {
            run_benchmark_command(kind, count, cli.seed, &dictionary, config);
            Ok(())
        }
    }
}

fn run_benchmark_command(
    kind: StrategyKind,
    count: usize,
    seed: Option<u64>,
    dictionary: &Dictionary,
    config: GameConfig,
) {
    let seed = seed.unwrap_or_else(rand::random);
    println!(
        "Running benchmark on {count} random words (strategy: {}, seed: {seed})...",
        kind.name()
    );

    let solver = Solver::new(kind, dictionary, config);
    let result = run_benchmark(&solver, count, seed, true);
    print_benchmark_result(&result);
}

fn run_play_command(dictionary: &Dictionary, config: GameConfig, seed: Option<u64>) -> Result<()> {
    use hangman_solver::interactive::{App, run_tui};

    let app = App::new(dictionary, config, seed)?;
    run_tui(app)
}

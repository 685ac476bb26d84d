use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use five_star::output::{self, RatedItem};
use five_star::scorecard::{load_scorecard, Scorecard};

const EXIT_SUCCESS: i32 = 0;
const EXIT_RATING: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Table,
    Tsv,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rate scorecard files and list them by rating, highest first
    Rate {
        /// Scorecard YAML files
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Show each rater's description under its scorecard
        #[arg(short, long)]
        descriptions: bool,
    },
    /// Load and validate the rating configuration
    CheckConfig,
}

#[derive(Parser, Debug)]
#[command(name = "five-star")]
#[command(about = "Weighted ratings from pluggable raters", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/five-star/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // A second init (e.g. under a test harness) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.config.map(PathBuf::from);
    let configuration = match five_star::config::load_configuration(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let code = match cli.command {
        Commands::CheckConfig => {
            println!(
                "Configuration OK: rating {}..={}, weighting {}..={}",
                configuration.min_rating,
                configuration.max_rating,
                configuration.min_weighting,
                configuration.max_weighting
            );
            EXIT_SUCCESS
        }
        Commands::Rate {
            files,
            format,
            descriptions,
        } => rate_files(&files, configuration, format, descriptions),
    };

    std::process::exit(code);
}

fn rate_files(
    files: &[PathBuf],
    configuration: five_star::Configuration,
    format: OutputFormat,
    show_descriptions: bool,
) -> i32 {
    let mut scorecards: Vec<Scorecard> = Vec::new();
    for path in files {
        match load_scorecard(path, configuration) {
            Ok(card) => scorecards.push(card),
            Err(e) => {
                eprintln!("Scorecard error: {:#}", e);
                return EXIT_CONFIG;
            }
        }
    }

    // Rating failures are reported per scorecard; the rest are still listed
    let mut any_failed = false;
    let mut rated: Vec<RatedItem> = Vec::new();
    for card in &scorecards {
        match card.rating() {
            Ok(rating) => rated.push(RatedItem {
                name: card.name(),
                rating,
                max_rating: card.configuration().max_rating,
                descriptions: card.rating_descriptions(),
            }),
            Err(e) => {
                eprintln!("Rating failed for {}: {}", card.name(), e);
                any_failed = true;
            }
        }
    }

    // Rating descending, then name ascending for ties
    rated.sort_by(|a, b| {
        b.rating
            .partial_cmp(&a.rating)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.name.cmp(b.name))
    });

    match format {
        OutputFormat::Table => {
            let use_colors = output::should_use_colors();
            println!(
                "{}",
                output::format_rated_table(&rated, use_colors, show_descriptions)
            );
        }
        OutputFormat::Tsv => {
            if !rated.is_empty() {
                println!("{}", output::format_tsv(&rated));
            }
        }
        OutputFormat::Json => match output::format_json(&rated) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize ratings: {}", e);
                return EXIT_RATING;
            }
        },
    }

    if any_failed {
        EXIT_RATING
    } else {
        EXIT_SUCCESS
    }
}

use chrono::{Local, NaiveDate};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use focusboard_core::Config;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "focusboard", version, about = "Focusboard CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Focus timer
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Task list
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Daily journal
    Journal {
        /// Day to work on, as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
        #[command(subcommand)]
        action: commands::journal::JournalAction,
    },
    /// Sticky notes
    Note {
        #[command(subcommand)]
        action: commands::note::NoteAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Show the current time and date
    Clock,
    /// Print shell completions
    Completions { shell: Shell },
}

/// Logs go to stderr; stdout carries command output.
fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_env("FOCUSBOARD_LOG")
        .or_else(|_| EnvFilter::try_new(&config.log.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("warning: {e}; using default configuration");
            Config::default()
        }
    };
    init_logging(&config);

    let result = match cli.command {
        Commands::Timer { action } => commands::timer::run(action, &config),
        Commands::Task { action } => commands::task::run(action, &config),
        Commands::Journal { date, action } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            commands::journal::run(action, date, &config)
        }
        Commands::Note { action } => commands::note::run(action, &config),
        Commands::Config { action } => commands::config::run(action, &config),
        Commands::Clock => commands::clock::run(),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "focusboard", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

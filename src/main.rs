//! Verbo - CLI
//!
//! Daily Portuguese verb guessing game with TUI and CLI modes, plus word pool
//! administration.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use verbo::{
    commands::{
        advance_pool, daily_setup, import_file, list_pool, pool_stats, practice_setup,
        reset_pool, run_audit, run_guess, run_history, run_schedule, run_simple, run_today, run_validate,
        seed_pool, set_word_active,
    },
    config::{Config, DEFAULT_STATS_PATH, DEFAULT_STORE_PATH},
    core::score_str,
    daily::{Clock, DEFAULT_UTC_OFFSET_HOURS, SelectionError},
    game::{DEFAULT_MAX_ATTEMPTS, GameStats},
    interactive::{App, run_tui},
    logging,
    output::{
        print_advance_outcome, print_audit, print_entries, print_feedback, print_game_stats,
        print_guess, print_history, print_import_report, print_json, print_schedule, print_today,
        print_usage_stats, print_validation,
    },
    pool::{WordId, WordRepository},
    wordlists::{Dictionary, VERBS},
};

#[derive(Parser)]
#[command(
    name = "verbo",
    about = "Daily Portuguese verb guessing game",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word pool JSON file
    #[arg(long, global = true, env = "VERBO_STORE", default_value = DEFAULT_STORE_PATH)]
    store: PathBuf,

    /// Player statistics JSON file
    #[arg(long, global = true, env = "VERBO_STATS", default_value = DEFAULT_STATS_PATH)]
    stats: PathBuf,

    /// Hours from UTC of the game calendar
    #[arg(
        long,
        global = true,
        env = "VERBO_UTC_OFFSET",
        default_value_t = DEFAULT_UTC_OFFSET_HOURS,
        allow_hyphen_values = true
    )]
    utc_offset: i32,

    /// Attempts per game
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play {
        /// Every revealed hint must be reused
        #[arg(long)]
        hard: bool,

        /// Random verb, not recorded in statistics
        #[arg(long)]
        practice: bool,
    },

    /// Line-based game without the TUI
    Simple {
        /// Every revealed hint must be reused
        #[arg(long)]
        hard: bool,

        /// Random verb, not recorded in statistics
        #[arg(long)]
        practice: bool,
    },

    /// Show the verb of the day
    Today {
        #[arg(long)]
        json: bool,
    },

    /// Score an attempt against the verb of the day
    Guess {
        word: String,

        #[arg(long)]
        json: bool,
    },

    /// Score a guess against any secret word
    Score {
        guess: String,
        secret: String,

        #[arg(long)]
        json: bool,
    },

    /// Check whether a word is accepted as a guess
    Validate {
        word: String,

        #[arg(long)]
        json: bool,
    },

    /// Show the selections of the last days
    Schedule {
        /// Number of days, newest first
        #[arg(short, long, default_value = "10")]
        days: u32,

        #[arg(long)]
        json: bool,
    },

    /// Measure how evenly selection spreads over the pool
    Audit {
        /// Number of days to simulate
        #[arg(short, long, default_value = "365")]
        days: u32,

        /// First day (YYYY-MM-DD), default today
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Words to list
        #[arg(long, default_value = "10")]
        top: usize,

        #[arg(long)]
        json: bool,
    },

    /// Show player statistics
    Stats {
        #[arg(long)]
        json: bool,
    },

    /// Show recently played daily games
    History {
        /// Only games from the last N days
        #[arg(short, long)]
        days: Option<u32>,

        #[arg(long)]
        json: bool,
    },

    /// Administer the word pool
    Pool {
        #[command(subcommand)]
        action: PoolAction,
    },
}

#[derive(Subcommand)]
enum PoolAction {
    /// Usage counters
    Stats {
        #[arg(long)]
        json: bool,
    },
    /// Import the built-in verb list
    Seed,
    /// Import verbs from a file, one per line
    Import { file: PathBuf },
    /// Make all active words selectable again
    Reset,
    /// Retire the previous day's word now
    Advance,
    /// List words
    List {
        /// Only active, unused words
        #[arg(long)]
        available: bool,

        #[arg(long)]
        json: bool,
    },
    /// Make a word selectable
    Enable { id: u64 },
    /// Exclude a word from selection
    Disable { id: u64 },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = Config {
        store_path: cli.store,
        stats_path: cli.stats,
        utc_offset_hours: cli.utc_offset,
        max_attempts: cli.max_attempts,
    };
    config.validate()?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        hard: false,
        practice: false,
    });

    match command {
        Commands::Play { hard, practice } => run_play_command(&config, hard, practice, true),
        Commands::Simple { hard, practice } => run_play_command(&config, hard, practice, false),
        Commands::Today { json } => run_today_command(&config, json),
        Commands::Guess { word, json } => run_guess_command(&config, &word, json),
        Commands::Score {
            guess,
            secret,
            json,
        } => {
            let feedback = score_str(&guess, &secret)?;
            if json {
                print_json(&feedback)
            } else {
                print_feedback(&feedback);
                Ok(())
            }
        }
        Commands::Validate { word, json } => {
            let report = run_validate(&dictionary(&config)?, &word);
            if json {
                print_json(&report)
            } else {
                print_validation(&word, &report);
                Ok(())
            }
        }
        Commands::Schedule { days, json } => {
            let report = run_schedule(&config.repository(), &config.clock()?, days)?;
            if json {
                print_json(&report)
            } else {
                print_schedule(&report);
                Ok(())
            }
        }
        Commands::Audit {
            days,
            start,
            top,
            json,
        } => {
            let start = match start {
                Some(date) => date,
                None => config.clock()?.today(),
            };
            let entries = config.repository().entries()?;
            let report = run_audit(&entries, start, days, !json);
            if json {
                print_json(&report)
            } else {
                print_audit(&report, top);
                Ok(())
            }
        }
        Commands::Stats { json } => {
            let stats = GameStats::load(&config.stats_path)?;
            if json {
                print_json(&stats)
            } else {
                print_game_stats(&stats);
                Ok(())
            }
        }
        Commands::History { days, json } => {
            let today = config.clock()?.today();
            let report = run_history(&config.data_paths().history, today, days)?;
            if json {
                print_json(&report)
            } else {
                print_history(&report);
                Ok(())
            }
        }
        Commands::Pool { action } => run_pool_command(&config, action),
    }
}

/// Guess dictionary: built-in lists plus the current pool
fn dictionary(config: &Config) -> Result<Dictionary> {
    let entries = config.repository().entries()?;
    Ok(Dictionary::embedded().with_verbs(entries.iter().map(|e| e.word.as_str())))
}

fn run_today_command(config: &Config, json: bool) -> Result<()> {
    match run_today(&config.repository(), &config.clock()?) {
        Ok(report) if json => print_json(&report),
        Ok(report) => {
            print_today(&report);
            Ok(())
        }
        Err(SelectionError::NoWordsAvailable { stats }) => {
            if json {
                print_json(&serde_json::json!({
                    "error": "no words available",
                    "message": "all words used, admin reset required",
                    "stats": stats,
                }))?;
            } else {
                print_usage_stats(&stats);
            }
            bail!("all words used, admin reset required")
        }
        Err(e) => Err(e.into()),
    }
}

fn run_guess_command(config: &Config, word: &str, json: bool) -> Result<()> {
    let report = run_guess(&config.repository(), &config.clock()?, word)?;
    if json {
        print_json(&report)
    } else {
        print_guess(&report);
        Ok(())
    }
}

fn run_play_command(config: &Config, hard: bool, practice: bool, tui: bool) -> Result<()> {
    let options = config.session_options(hard);
    let clock = config.clock()?;
    let paths = config.data_paths();
    let setup = if practice {
        practice_setup(VERBS, clock.today(), options).context("no verbs to practice with")?
    } else {
        daily_setup(&config.repository(), &clock, options, &paths)
            .context("could not pick the verb of the day")?
    };

    if tui {
        run_tui(App::new(setup, paths))
    } else {
        run_simple(&setup, &paths)
    }
}

fn run_pool_command(config: &Config, action: PoolAction) -> Result<()> {
    let repo = config.repository();

    match action {
        PoolAction::Stats { json } => {
            let stats = pool_stats(&repo)?;
            if json {
                print_json(&stats)?;
            } else {
                print_usage_stats(&stats);
            }
        }
        PoolAction::Seed => print_import_report(&seed_pool(&repo)?),
        PoolAction::Import { file } => print_import_report(&import_file(&repo, &file)?),
        PoolAction::Reset => {
            let cleared = reset_pool(&repo)?;
            println!("Reset {cleared} words");
        }
        PoolAction::Advance => {
            let today = config.clock()?.today();
            print_advance_outcome(&advance_pool(&repo, today)?);
        }
        PoolAction::List { available, json } => {
            let entries = list_pool(&repo, available)?;
            if json {
                print_json(&entries)?;
            } else {
                print_entries(&entries);
            }
        }
        PoolAction::Enable { id } => toggle(&repo, id, true)?,
        PoolAction::Disable { id } => toggle(&repo, id, false)?,
    }
    Ok(())
}

fn toggle<R: WordRepository>(repo: &R, id: u64, active: bool) -> Result<()> {
    let changed = set_word_active(repo, WordId(id), active)?;
    let state = if active { "enabled" } else { "disabled" };
    if changed {
        println!("Word #{id} {state}");
    } else {
        println!("Word #{id} was already {state}");
    }
    Ok(())
}

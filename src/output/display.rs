//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_tiles};
use crate::commands::{
    AuditReport, GuessReport, HistoryReport, ScheduleReport, TodayReport, ValidationReport,
};
use crate::core::Feedback;
use crate::daily::AdvanceOutcome;
use crate::game::GameStats;
use crate::pool::{ImportReport, UsageStats, WordEntry};
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

/// Print any result as pretty JSON
///
/// # Errors
/// Returns an error if the value cannot be serialized.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_today(report: &TodayReport) {
    println!(
        "Verb of the day ({}): {}",
        report.date.bright_cyan(),
        report.word.to_uppercase().bright_yellow().bold()
    );
    println!(
        "  #{}  {} letters  {} of {} words left",
        report.id, report.length, report.stats.available, report.stats.total
    );
}

pub fn print_feedback(feedback: &Feedback) {
    println!("{}  {}", feedback_tiles(feedback), feedback.to_emoji());
}

pub fn print_guess(report: &GuessReport) {
    print_feedback(&report.feedback);
    if report.victory {
        println!("{}", "✅ Correct!".green().bold());
    }
}

pub fn print_validation(word: &str, report: &ValidationReport) {
    match (report.valid, report.kind) {
        (true, Some(kind)) => println!("{} is a valid word ({kind})", word.green().bold()),
        _ => println!(
            "{} is not accepted: {} [{}]",
            word.red().bold(),
            report.message.as_deref().unwrap_or("invalid"),
            report.code.unwrap_or("INVALID")
        ),
    }
}

pub fn print_usage_stats(stats: &UsageStats) {
    let bar = create_progress_bar(stats.used as f64, stats.total as f64, 30);
    println!("\n📊 {}", "Word pool".bright_cyan().bold());
    println!("   Active words:  {}", stats.total);
    println!("   Used:          {} [{}]", stats.used, bar.green());
    println!("   Available:     {}", stats.available);
    if stats.is_exhausted() {
        println!(
            "   {}",
            "All words used, an admin reset is required".red().bold()
        );
    }
}

pub fn print_schedule(report: &ScheduleReport) {
    println!("\n{}", "─".repeat(50).cyan());
    println!(
        "Daily schedule (today is {}, last advanced {})",
        report.today.to_string().bright_cyan(),
        report
            .last_advanced
            .map_or_else(|| "never".to_string(), |d| d.to_string())
    );
    println!("{}", "─".repeat(50).cyan());

    for entry in &report.entries {
        let word = entry.word.as_deref().map_or_else(
            || "(none)".red().to_string(),
            |w| w.to_uppercase().bright_white().bold().to_string(),
        );
        let used = if entry.used { " used".yellow().to_string() } else { String::new() };
        println!("  {}  {word}{used}", entry.date);
    }
    print_usage_stats(&report.stats);
}

#[allow(clippy::cast_precision_loss)]
pub fn print_audit(report: &AuditReport, top: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SELECTION AUDIT".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   First day:       {}", report.start);
    println!("   Days:            {}", report.days);
    if report.failed > 0 {
        println!("   No word:         {}", report.failed.to_string().red());
    }
    println!("   Distinct words:  {}", report.counts.len());
    println!("   Mean per word:   {:.2}", report.mean);
    println!(
        "   Min / max:       {} / {} (spread {})",
        report.min,
        report.max,
        report.spread().to_string().bright_yellow()
    );
    println!("   Time taken:      {}ms", report.elapsed_ms);

    println!("\n📈 {}", "Most selected:".bright_cyan().bold());
    for (word, count) in report.counts.iter().take(top) {
        let bar = create_progress_bar(f64::from(*count), f64::from(report.max), 30);
        println!("   {:<7} {} {count:4}", word.to_uppercase(), bar.green());
    }

    if !report.never_selected.is_empty() {
        println!(
            "\n   {} {}",
            "Never selected:".yellow(),
            report.never_selected.join(", ")
        );
    }
}

pub fn print_import_report(report: &ImportReport) {
    println!(
        "Added {}, duplicates {}, invalid {}",
        report.added_count().to_string().green().bold(),
        report.duplicates.len(),
        report.invalid.len()
    );
    for (word, reason) in &report.invalid {
        println!("  {} {word}: {reason}", "✗".red());
    }
}

pub fn print_entries(entries: &[WordEntry]) {
    for entry in entries {
        let state = match (entry.active, entry.used) {
            (false, _) => "disabled".bright_black(),
            (true, true) => "used".yellow(),
            (true, false) => "available".green(),
        };
        println!("{:>5}  {:<7} {state}", entry.id.0, entry.word);
    }
}

pub fn print_advance_outcome(outcome: &AdvanceOutcome) {
    match outcome {
        AdvanceOutcome::Marked { date, word } => {
            println!("Retired {} (word of {date})", word.to_uppercase().bold());
        }
        AdvanceOutcome::AlreadyUsed { date, word } => {
            println!("{} (word of {date}) was already retired", word.to_uppercase());
        }
        AdvanceOutcome::NothingToMark { date } => {
            println!("No word to retire for {date}");
        }
        AdvanceOutcome::AlreadyAdvanced { last } => {
            println!("Already advanced on {last}");
        }
    }
}

#[allow(clippy::cast_precision_loss)]
pub fn print_game_stats(stats: &GameStats) {
    println!("\n📊 {}", "Statistics".bright_cyan().bold());
    println!("   Played:          {}", stats.games_played);
    println!("   Win rate:        {}%", stats.win_rate());
    println!(
        "   Streak:          {} (best {})",
        stats.current_streak, stats.max_streak
    );
    println!("   Average guesses: {:.1}", stats.average_attempts());

    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let bar = create_progress_bar(f64::from(count), f64::from(max), 20);
        println!("   {}: {} {count}", i + 1, bar.green());
    }
}

pub fn print_history(report: &HistoryReport) {
    if report.entries.is_empty() {
        println!("No games played yet");
        return;
    }

    println!(
        "\n📜 {} ({} of {} won)",
        "Played words".bright_cyan().bold(),
        report.won,
        report.entries.len()
    );
    for entry in &report.entries {
        let result = if entry.won {
            entry.attempts.to_string().green()
        } else {
            "X".red()
        };
        let hard = if entry.hard_mode { " hard".yellow().to_string() } else { String::new() };
        let rows: Vec<String> = entry.guesses.iter().map(Feedback::to_emoji).collect();
        let rows = rows.join(" ");
        println!(
            "  {}  {:<7} {result}{hard}  {rows}",
            entry.date,
            entry.word.to_uppercase()
        );
    }
}

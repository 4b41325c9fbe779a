//! Display functions for command results

use super::formatters::{colored_cell, create_progress_bar};
use crate::board::Statistics;
use crate::commands::{ScoreResult, SimulationResult};
use crate::core::MAX_ATTEMPTS;
use colored::Colorize;
use std::io::{self, Write};

/// Print the marks of a single guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        result.guess.text().to_uppercase().bright_white().bold(),
        result.answer.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    let cells: String = result
        .guess
        .text()
        .chars()
        .zip(result.score.marks())
        .map(|(letter, &mark)| colored_cell(letter, mark.into()).to_string())
        .collect();

    println!("\n  {cells}");
    println!("  {}", result.score.to_emoji());

    if result.score.is_perfect() {
        println!("\n{}", "✅ Exact match".green().bold());
    }
}

/// Write win/loss totals and the guess distribution
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_statistics<W: Write>(out: &mut W, stats: &Statistics) -> io::Result<()> {
    writeln!(out, "\n📊 {}", "Statistics:".bright_cyan().bold())?;
    writeln!(out, "   Games played:     {}", stats.total_games)?;
    writeln!(
        out,
        "   Won / lost:       {} / {}",
        stats.games_won.to_string().green(),
        stats.games_lost().to_string().red()
    )?;
    writeln!(
        out,
        "   Win rate:         {}",
        format!("{:.1}%", stats.win_rate()).bright_yellow().bold()
    )?;
    if let Some(avg) = stats.average_guesses() {
        writeln!(out, "   Average guesses:  {avg:.2}")?;
    }

    if stats.games_won == 0 {
        return Ok(());
    }

    writeln!(out, "\n📈 {}", "Distribution:".bright_cyan().bold())?;
    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for guesses in 1..=MAX_ATTEMPTS {
        let count = stats.guess_distribution[guesses];
        let bar = create_progress_bar(count as f64, most as f64, 30);
        writeln!(out, "   {guesses}: {} {count:5}", bar.green())?;
    }
    Ok(())
}

/// Print session statistics to stdout
pub fn print_statistics(stats: &Statistics) {
    // Nothing sensible to do if stdout is gone
    let _ = write_statistics(&mut io::stdout().lock(), stats);
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    print_statistics(&result.stats);

    println!("\n⏱  {}", "Run:".bright_cyan().bold());
    println!("   Rejected guesses: {}", result.invalid_guesses);
    if result.abandoned > 0 {
        println!(
            "   Abandoned games:  {}",
            result.abandoned.to_string().yellow()
        );
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);
}

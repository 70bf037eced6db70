use std::path::Path;

use crate::colors::ColorScheme;
use crate::search::RunReport;

pub fn display_run_info(mode: &str, casts_path: &Path, colors: &ColorScheme) {
    println!("🎬 Loading casts from {}", colors.movie(&casts_path.display().to_string()));
    println!("⚙️  Answering {}", mode);
    println!("🔍 Searching...");
}

pub fn display_run_report(report: &RunReport, output_path: &Path, colors: &ColorScheme) {
    println!("\n---\n");
    println!(
        "{} Wrote {} of {} pairs to {}",
        colors.success("✅"),
        colors.number(&format_number(report.answered)),
        colors.number(&format_number(report.pairs)),
        output_path.display()
    );

    for pair in &report.disconnected {
        println!(
            "{} {} and {}",
            colors.warning("⚠️  Never connected:"),
            colors.actor_name(&format!("\"{}\"", pair.first)),
            colors.actor_name(&format!("\"{}\"", pair.second))
        );
    }

    display_run_statistics(report, colors);
}

/// Per-query failures go to stderr so they stay visible in quiet mode.
pub fn display_failures(report: &RunReport, colors: &ColorScheme) {
    for failure in &report.failures {
        eprintln!(
            "{} {} ({} → {})",
            colors.error("❌ Error:"),
            failure.error,
            failure.pair.first,
            failure.pair.second
        );
    }
}

fn display_run_statistics(report: &RunReport, colors: &ColorScheme) {
    println!("\n---\n");
    println!(
        "{} {} actors, {} movies, {} queries in {} sec",
        colors.stats("📊"),
        colors.number(&format_number(report.actor_count)),
        colors.number(&format_number(report.movie_count)),
        colors.number(&format_number(report.pairs)),
        colors.number(&format!("{:.3}", report.duration))
    );
}

pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(ch);
    }

    formatted
}

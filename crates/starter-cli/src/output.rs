//! Terminal output formatting for the starter CLI.
//!
//! Uses the [`console`] crate for styling. Progress and results go to stdout,
//! errors to stderr.

use console::style;

use starter_core::bootstrap::BootstrapReport;

/// Print a bold cyan header with an underline separator.
pub fn print_header(text: &str) {
    println!("\n{}", style(text).bold().cyan());
    println!("{}", style("=".repeat(text.len())).dim());
}

/// Print a progress step indicator like `[1/3] Resolving configuration`.
pub fn print_step(step: u32, total: u32, text: &str) {
    println!("{} {}", style(format!("[{step}/{total}]")).dim(), text);
}

/// Print an error message prefixed with red `[ERROR]` to stderr.
pub fn print_error(text: &str) {
    eprintln!("{} {}", style("[ERROR]").red().bold(), text);
}

/// Print what a bootstrap produced, followed by an `[OK]` line.
pub fn print_report(report: &BootstrapReport) {
    let identity = &report.identity;
    let rows = [
        ("root", identity.root.display().to_string()),
        ("project name", identity.short_name.clone()),
        ("metrics name", identity.metrics_name.clone()),
        ("files written", report.files.len().to_string()),
        ("templates rendered", report.templates_rendered.to_string()),
    ];
    let width = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    for (key, value) in &rows {
        println!("  {:<width$}  {}", style(key).dim(), value);
    }
    println!(
        "{} Project '{}' created",
        style("[OK]").green().bold(),
        identity.short_name
    );
}

/// Print the commands to run next inside the new project.
pub fn print_next_steps(report: &BootstrapReport) {
    println!();
    println!("  Next steps:");
    println!("    cd {}", report.identity.root.display());
    println!("    make deps generate build");
    println!();
}

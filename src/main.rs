use std::process::exit;

use colored::Colorize;

fn main() {
    if let Err(e) = sitekit::app::run_cli() {
        eprintln!("{} {e}", "error:".red().bold());
        exit(1);
    }
}

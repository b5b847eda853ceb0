//! Terminal output: status lines, delimiters, and boxed panels.

use colored::{Color, Colorize};

pub fn header(text: &str) {
    println!("\n{}", text.blue().bold());
}

pub fn success(message: &str) {
    println!("{}", format!("✅ {message}").green());
}

pub fn error(message: &str) {
    eprintln!("{}", format!("❌ {message}").red());
}

pub fn warning(message: &str) {
    println!("{}", format!("⚠️  {message}").yellow());
}

pub fn info(message: &str) {
    println!("{}", format!("ℹ️  {message}").blue());
}

pub fn delimiter() {
    println!("{}", "----------".cyan());
}

/// Render a titled box around multi-line content.
pub fn boxed(title: &str, content: &str, color: Color) {
    println!("{}", format!("┌── {title} ──┐").color(color));
    println!("{}", "│".color(color));
    for line in content.lines() {
        println!("{}", format!("│ {line}").color(color));
    }
    println!("{}", "│".color(color));
    println!("{}", "└────────────┘".color(color));
}

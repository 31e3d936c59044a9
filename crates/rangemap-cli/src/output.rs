use console::style;
use std::fmt::Display;
use tabled::{settings::Style, Table, Tabled};

/// Human-facing terminal output helpers.
#[derive(Default)]
pub struct OutputWriter;

impl OutputWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn success(&self, message: impl Display) {
        println!("{} {}", style("✓").green().bold(), message);
    }

    pub fn warning(&self, message: impl Display) {
        eprintln!("{} {}", style("⚠").yellow().bold(), message);
    }

    pub fn section(&self, title: impl Display) {
        println!("\n{}", style(title).bold().underlined());
    }

    pub fn table<T: Tabled>(&self, data: Vec<T>) {
        if data.is_empty() {
            println!("{}", style("(no data)").dim());
        } else {
            let mut table = Table::new(data);
            table.with(Style::rounded());
            println!("{}", table);
        }
    }
}

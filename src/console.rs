use std::fmt::Display;

use crossterm::style::Stylize;
use statewatch_observer::ReactionLog;

const DEFAULT_LINE_CHAR: &str = "=";
const DEFAULT_WIDTH: usize = 50;

pub fn horizontal_line(width: Option<usize>) {
    let width = width.unwrap_or(DEFAULT_WIDTH);

    println!("{}", DEFAULT_LINE_CHAR.repeat(width).dark_grey());
}

pub fn horizontal_line_with_text(
    header: &str,
    total_width: Option<usize>,
    margin: Option<usize>,
) {
    let margin = margin.unwrap_or(2);
    let total_width = total_width.unwrap_or(DEFAULT_WIDTH);

    let wider_than_total_width = header.len() >= total_width;

    let line_width_per_side = if wider_than_total_width {
        0
    } else {
        total_width
            .saturating_sub(header.len())
            .saturating_sub(2 * margin)
            / 2
    };

    let line_str = DEFAULT_LINE_CHAR.repeat(line_width_per_side);

    let margin_str = if wider_than_total_width {
        "".to_string()
    } else {
        " ".repeat(margin)
    };

    println!(
        "{}{}{}{}{}",
        line_str.clone().dark_grey(),
        margin_str,
        header.cyan().bold(),
        margin_str,
        line_str.dark_grey()
    );
}

#[inline(always)]
pub fn new_line() {
    println!();
}

/// A `ReactionLog` that prints each reaction straight to the console.
pub struct ConsoleLog;

impl ReactionLog for ConsoleLog {
    fn log_println<D: Display>(&self, content: D) {
        println!("{}", content.to_string().dark_yellow());
    }
}

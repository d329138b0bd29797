//! Console writer: badged title lines, body lines, console clearing.
//!
//! The reporter composes pure `Block` values; this module is the only
//! place that styles and prints them. Colors honor `NO_COLOR`.

use crate::models::{Badge, Block};
use owo_colors::OwoColorize;
use std::io::Write;

/// Where report blocks go. The reporter writes through this so tests can
/// record clears and prints instead of touching the terminal.
pub trait Sink {
    fn clear(&mut self);
    fn print(&mut self, block: &Block);
}

/// The real terminal.
pub struct Terminal;

impl Sink for Terminal {
    fn clear(&mut self) {
        clear_console();
    }

    fn print(&mut self, block: &Block) {
        print_block(block);
    }
}

fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

fn badge_text(badge: Badge, label: &str, color: bool) -> String {
    let tag = format!("⟦{label}⟧");
    if !color {
        return tag;
    }
    match badge {
        Badge::Success => tag.green().bold().to_string(),
        Badge::Info => tag.blue().bold().to_string(),
        Badge::Warning => tag.yellow().bold().to_string(),
        Badge::Error => tag.red().bold().to_string(),
    }
}

/// Print one report block: badged title, then body lines verbatim.
pub fn print_block(block: &Block) {
    let color = use_colors();
    let badge = badge_text(block.badge, &block.label, color);
    if color {
        println!("{} {}", badge, block.title.clone().bold());
    } else {
        println!("{} {}", badge, block.title);
    }
    if !block.body.is_empty() {
        println!();
        for line in &block.body {
            println!("{line}");
        }
    }
}

/// Clear the terminal and move the cursor home.
pub fn clear_console() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    let _ = std::io::stdout().flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_text_plain_when_colors_off() {
        assert_eq!(badge_text(Badge::Error, "ERROR", false), "⟦ERROR⟧");
        assert_eq!(badge_text(Badge::Success, "DONE", false), "⟦DONE⟧");
    }

    #[test]
    fn test_badge_text_styled_contains_label() {
        let styled = badge_text(Badge::Warning, "WARNING", true);
        assert!(styled.contains("WARNING"));
    }
}

//! Terminal rendering for the markdown produced by the display layer.
//!
//! Rich output goes through termimad; `--no-color` switches to a plain
//! passthrough so the output stays pipeable and testable.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

const CYAN: &str = "\x1b[36m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Renders markdown to the terminal, rich or plain.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Green);
        skin.italic.set_fg(Color::Blue);
        skin.inline_code.set_bg(Color::AnsiValue(237));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal.
    ///
    /// Headers and the Success/Error status lines are colored directly so
    /// list output stays scannable line by line; everything else goes
    /// through the termimad skin.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }
        for line in markdown.lines() {
            if line.starts_with('#') {
                println!("{CYAN}{line}{RESET}");
            } else if let Some(rest) = line.strip_prefix("Success: ") {
                println!("{GREEN}Success:{RESET} {rest}");
            } else if let Some(rest) = line.strip_prefix("Error: ") {
                println!("{RED}Error:{RESET} {rest}");
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
    }

    #[test]
    fn test_rich_renderer() {
        let renderer = TerminalRenderer::new(true);
        assert!(renderer.rich_enabled);
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }
}

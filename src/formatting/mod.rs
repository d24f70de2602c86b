use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FormattingConfig {
    pub color: ColorMode,
    /// Draw chart bars with block characters instead of `#`
    pub unicode: bool,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            unicode: true,
        }
    }
}

impl FormattingConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        // Check NO_COLOR environment variable (per no-color.org standard)
        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }

        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                config.color = ColorMode::Never;
            }
        }

        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        config
    }

    /// ASCII-only, no colors
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
            unicode: false,
        }
    }

    pub fn formatter(&self) -> Box<dyn OutputFormatter> {
        if self.color.should_use_color() {
            Box::new(ColoredFormatter::new(*self))
        } else {
            Box::new(PlainFormatter {
                unicode: self.unicode,
            })
        }
    }
}

pub trait OutputFormatter {
    fn success(&self, text: &str) -> String;
    fn header(&self, text: &str) -> String;
    fn bold(&self, text: &str) -> String;
    fn dim(&self, text: &str) -> String;
    /// Horizontal bar of `cells` cells
    fn bar(&self, cells: usize) -> String;
}

pub struct ColoredFormatter {
    config: FormattingConfig,
}

impl ColoredFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        colored::control::set_override(config.color.should_use_color());
        Self { config }
    }

    fn bar_char(&self) -> char {
        if self.config.unicode {
            '█'
        } else {
            '#'
        }
    }
}

impl OutputFormatter for ColoredFormatter {
    fn success(&self, text: &str) -> String {
        text.green().bold().to_string()
    }

    fn header(&self, text: &str) -> String {
        text.blue().bold().to_string()
    }

    fn bold(&self, text: &str) -> String {
        text.bold().to_string()
    }

    fn dim(&self, text: &str) -> String {
        text.dimmed().to_string()
    }

    fn bar(&self, cells: usize) -> String {
        self.bar_char().to_string().repeat(cells).cyan().to_string()
    }
}

pub struct PlainFormatter {
    pub unicode: bool,
}

impl OutputFormatter for PlainFormatter {
    fn success(&self, text: &str) -> String {
        text.to_string()
    }

    fn header(&self, text: &str) -> String {
        text.to_string()
    }

    fn bold(&self, text: &str) -> String {
        text.to_string()
    }

    fn dim(&self, text: &str) -> String {
        text.to_string()
    }

    fn bar(&self, cells: usize) -> String {
        let c = if self.unicode { "█" } else { "#" };
        c.repeat(cells)
    }
}

fn detect_color_support() -> bool {
    // Check if we're in a dumb terminal
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    std::io::stdout().is_terminal()
}

//! Terminal output utilities.
//!
//! Box drawing into frames, ANSI colors, entropy display.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const REVERSE: &str = "\x1b[7m";
pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[38;5;10m";
pub const RED: &str = "\x1b[38;5;9m";

// ============================================================================
// Box Drawing
// ============================================================================

pub const BOX_WIDTH: usize = 60;

/// Lines of one screen, built with the box helpers and drawn in one go.
#[derive(Debug, Default)]
pub struct Frame {
    lines: Vec<String>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// ┌─ Title ─────────────────┐
    pub fn top(&mut self, title: &str) -> &mut Self {
        let line = if title.is_empty() {
            format!("┌{}┐", "─".repeat(BOX_WIDTH - 2))
        } else {
            let title_part = format!("─ {} ", title);
            let remaining = (BOX_WIDTH - 2).saturating_sub(console_width(&title_part));
            format!("┌{}{}┐", title_part, "─".repeat(remaining))
        };
        self.lines.push(line);
        self
    }

    /// │ content                  │
    pub fn line(&mut self, content: &str) -> &mut Self {
        let inner_width = BOX_WIDTH - 4;
        let padding = inner_width.saturating_sub(console_width(content));
        self.lines
            .push(format!("│ {}{} │", content, " ".repeat(padding)));
        self
    }

    /// │         content          │
    pub fn line_center(&mut self, content: &str) -> &mut Self {
        let inner_width = BOX_WIDTH - 4;
        let total_padding = inner_width.saturating_sub(console_width(content));
        let left_pad = total_padding / 2;
        let right_pad = total_padding - left_pad;
        self.lines.push(format!(
            "│ {}{}{} │",
            " ".repeat(left_pad),
            content,
            " ".repeat(right_pad)
        ));
        self
    }

    /// ├──────────────────────────┤
    pub fn rule(&mut self) -> &mut Self {
        self.lines.push(format!("├{}┤", "─".repeat(BOX_WIDTH - 2)));
        self
    }

    /// └──────────────────────────┘
    pub fn bottom(&mut self) -> &mut Self {
        self.lines.push(format!("└{}┘", "─".repeat(BOX_WIDTH - 2)));
        self
    }

    /// A help option: flag column plus description, wrapped.
    pub fn opt(&mut self, flag: &str, desc: &str) -> &mut Self {
        let inner_width = BOX_WIDTH - 4;
        let flag_col = 22;
        let desc_col = inner_width - flag_col;

        let flag_padded = format!("{:<width$}", flag, width = flag_col);

        let mut wrapped: Vec<String> = Vec::new();
        let mut current = String::new();
        for word in desc.split_whitespace() {
            if current.is_empty() {
                current = word.to_string();
            } else if current.len() + 1 + word.len() <= desc_col {
                current.push(' ');
                current.push_str(word);
            } else {
                wrapped.push(std::mem::take(&mut current));
                current = word.to_string();
            }
        }
        if !current.is_empty() {
            wrapped.push(current);
        }

        let first = wrapped.first().map(String::as_str).unwrap_or("");
        self.line(&format!("{flag_padded}{first}"));
        let indent = " ".repeat(flag_col);
        for rest in wrapped.iter().skip(1) {
            self.line(&format!("{indent}{rest}"));
        }
        self
    }

    /// Print for cooked (line-buffered) mode.
    pub fn print(&self) {
        for line in &self.lines {
            println!("{line}");
        }
    }

    /// Redraw the whole screen from the top-left. Raw mode needs explicit
    /// carriage returns.
    pub fn present<W: Write>(&self, out: &mut W) -> io::Result<()> {
        queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;
        for line in &self.lines {
            write!(out, "{line}\r\n")?;
        }
        out.flush()
    }
}

/// Calculate display width accounting for ANSI escape codes.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Entropy Calculation
// ============================================================================

/// Calculate password entropy in bits.
pub fn calculate_entropy(password_length: usize, charset_size: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    password_length as f64 * (charset_size as f64).log2()
}

/// Get entropy strength description.
pub fn entropy_strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}

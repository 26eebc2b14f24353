//! Progress display for long-running operations.
//!
//! Renders a simple terminal progress bar or counter while pages are
//! copied. Updates are rate-limited so redraws do not dominate runtime
//! on small documents. When stdout is not a terminal the bar is
//! disabled and all calls become no-ops.

use std::io::{self, IsTerminal, Write};
use std::time::{Duration, Instant};

/// Visual style of the progress display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressStyle {
    /// A filled bar with a percentage, e.g. `[=====>    ] 50%`.
    Bar,
    /// A plain counter, e.g. `5/10`.
    Counter,
}

/// A terminal progress indicator.
pub struct ProgressBar {
    total: u64,
    current: u64,
    style: ProgressStyle,
    message: String,
    last_update: Instant,
    update_interval: Duration,
    enabled: bool,
}

impl ProgressBar {
    /// Create a progress bar for `total` units of work.
    ///
    /// The bar is enabled only when stdout is a terminal.
    pub fn new(total: u64, style: ProgressStyle) -> Self {
        Self {
            total,
            current: 0,
            style,
            message: String::new(),
            last_update: Instant::now(),
            update_interval: Duration::from_millis(100),
            enabled: io::stdout().is_terminal(),
        }
    }

    /// Create a disabled progress bar that never renders.
    ///
    /// Useful for quiet mode and tests.
    pub fn disabled(total: u64) -> Self {
        let mut bar = Self::new(total, ProgressStyle::Bar);
        bar.enabled = false;
        bar
    }

    /// Set the message shown next to the bar.
    pub fn set_message(&mut self, message: &str) {
        self.message = message.to_string();
        self.render();
    }

    /// Set progress to an absolute value.
    ///
    /// Redraws are rate-limited; the final unit always renders.
    pub fn update(&mut self, current: u64) {
        self.current = current.min(self.total);

        let now = Instant::now();
        if self.current < self.total && now.duration_since(self.last_update) < self.update_interval
        {
            return;
        }
        self.last_update = now;
        self.render();
    }

    /// Advance progress by one unit.
    pub fn increment(&mut self) {
        self.update(self.current + 1);
    }

    /// Complete the bar and move to a new line.
    pub fn finish(&mut self) {
        self.current = self.total;
        self.render();
        if self.enabled {
            println!();
        }
    }

    /// Complete the bar with a final message.
    pub fn finish_with_message(&mut self, message: &str) {
        self.message = message.to_string();
        self.finish();
    }

    /// Erase the bar from the terminal.
    pub fn clear(&self) {
        if self.enabled {
            print!("\r\x1b[K");
            let _ = io::stdout().flush();
        }
    }

    /// Current progress value.
    pub fn current(&self) -> u64 {
        self.current
    }

    /// Total units of work.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Progress as a percentage (0-100).
    pub fn percent(&self) -> u64 {
        if self.total == 0 {
            100
        } else {
            self.current * 100 / self.total
        }
    }

    fn render(&self) {
        if !self.enabled {
            return;
        }

        let line = match self.style {
            ProgressStyle::Bar => self.render_bar(),
            ProgressStyle::Counter => self.render_counter(),
        };

        print!("\r\x1b[K{line}");
        let _ = io::stdout().flush();
    }

    fn render_bar(&self) -> String {
        const WIDTH: u64 = 30;

        let filled = if self.total == 0 {
            WIDTH
        } else {
            self.current * WIDTH / self.total
        };

        let mut bar = String::with_capacity(WIDTH as usize + 2);
        bar.push('[');
        for i in 0..WIDTH {
            if i < filled {
                bar.push('=');
            } else if i == filled && self.current < self.total {
                bar.push('>');
            } else {
                bar.push(' ');
            }
        }
        bar.push(']');

        if self.message.is_empty() {
            format!("{bar} {:>3}%", self.percent())
        } else {
            format!("{bar} {:>3}% {}", self.percent(), self.message)
        }
    }

    fn render_counter(&self) -> String {
        if self.message.is_empty() {
            format!("{}/{}", self.current, self.total)
        } else {
            format!("{} {}/{}", self.message, self.current, self.total)
        }
    }
}

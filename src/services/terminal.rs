use std::io::{self, BufRead, Write};
use tracing::debug;

use super::confirm::Confirmer;
use super::notifications::Notifier;
use super::viewport::Viewport;

/// Prints notifications to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn success(&self, message: &str) {
        debug!(notification = "success", "{}", message);
        println!("✅ {}", message);
    }

    fn error(&self, message: &str) {
        debug!(notification = "error", "{}", message);
        println!("❌ {}", message);
    }
}

/// Asks on stdout and reads a y/N answer from stdin. Anything but an
/// explicit yes, including EOF or a read error, declines.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinConfirmer;

impl Confirmer for StdinConfirmer {
    fn confirm(&self, prompt: &str) -> bool {
        print!("{} [y/N] ", prompt);
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(0) | Err(_) => false,
            Ok(_) => is_yes(&answer),
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Clears the terminal when a page asks to scroll to the top.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalViewport;

impl Viewport for TerminalViewport {
    fn scroll_to_top(&self) {
        print!("\x1B[2J\x1B[H");
        let _ = io::stdout().flush();
    }
}

//! Terminal utilities for title setting and output management

use std::io::{IsTerminal, Write};

/// Sets the terminal title when stdout is a terminal
pub fn set_terminal_title(title: &str) {
    if std::io::stdout().is_terminal() {
        // ANSI escape sequence to set terminal title
        print!("\x1b]0;{}\x07", title);
    }
}

/// Sets the terminal title and flushes stdout
pub fn set_terminal_title_and_flush(title: &str) {
    set_terminal_title(title);
    // Flush errors are not worth failing a scan over
    let _ = std::io::stdout().flush();
}

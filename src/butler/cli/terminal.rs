use butler::error::{ButlerError, Result};
use butler::prompt::Prompt;
use std::io::{self, BufRead, Write};

/// Asks on stdout and reads answers line by line from stdin.
pub struct TerminalPrompt {
    stdin: io::Stdin,
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self { stdin: io::stdin() }
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for TerminalPrompt {
    fn ask(&mut self, question: &str) -> Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", question)?;
        stdout.flush()?;

        let mut line = String::new();
        if self.stdin.lock().read_line(&mut line)? == 0 {
            return Err(ButlerError::InputClosed);
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    fn show(&mut self, text: &str) {
        println!("{}", text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_reads_from_stdin() {
        let prompt = TerminalPrompt::default();
        let _ = prompt.stdin.lock();
    }
}

//! 標準入出力による Prompt 実装

use std::io::{BufRead, Write};

use common::error::Error;

use crate::ports::outbound::Prompt;

pub struct StdPrompt;

impl Prompt for StdPrompt {
    fn say(&self, line: &str) {
        println!("{}", line);
    }

    fn ask(&self, question: &str) -> Result<String, Error> {
        let mut stdout = std::io::stdout();
        write!(stdout, "{}", question)?;
        stdout.flush()?;
        let mut line = String::new();
        std::io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

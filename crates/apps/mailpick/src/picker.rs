//! Terminal action sheet
//!
//! Prints the options as a numbered list and reads the answer from stdin.

use async_trait::async_trait;
use maillink::{Choice, ChoicePicker, ChoiceRequest};
use tokio::io::{AsyncBufReadExt, BufReader};

pub struct TerminalPicker;

#[async_trait]
impl ChoicePicker for TerminalPicker {
    async fn present_choice(&self, request: ChoiceRequest) -> Choice {
        if let Some(title) = &request.title {
            println!("{title}");
        }
        if let Some(message) = &request.message {
            println!("{message}");
        }
        for (i, option) in request.options.iter().enumerate() {
            println!("  {}) {}", i + 1, option);
        }
        println!("Enter a number:");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let answer = match lines.next_line().await {
            Ok(Some(line)) => line,
            // EOF or a broken stdin dismisses the sheet
            _ => return Choice::Cancelled,
        };

        match parse_answer(&answer, request.options.len()) {
            Some(index) => Choice::from_index(index, request.cancel_index),
            None => Choice::Cancelled,
        }
    }
}

/// Map a 1-based answer to an index below `len`
fn parse_answer(answer: &str, len: usize) -> Option<usize> {
    let number: usize = answer.trim().parse().ok()?;
    (1..=len).contains(&number).then(|| number - 1)
}

//! Console prompt helpers.
//! Invalid input re-prompts indefinitely; a closed stdin surfaces as
//! AppError::InputClosed instead of spinning on empty reads.

use std::io::{self, BufRead, Write};

use crate::errors::{AppError, AppResult};
use crate::ui::messages;

/// Print a prompt and read one line. Returns None on EOF.
/// The answer is trimmed and lowercased.
pub fn read_answer(prompt: &str) -> AppResult<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    let n = io::stdin().lock().read_line(&mut line)?;
    if n == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}

/// Re-prompt until `parse` accepts the answer.
pub fn ask_until<T, F>(prompt: &str, invalid_msg: &str, parse: F) -> AppResult<T>
where
    F: Fn(&str) -> Option<T>,
{
    loop {
        match read_answer(prompt)? {
            None => return Err(AppError::InputClosed),
            Some(answer) => match parse(&answer) {
                Some(value) => return Ok(value),
                None => messages::warning(invalid_msg),
            },
        }
    }
}

/// Yes/no question. Only an exact case-insensitive "yes" is
/// affirmative; anything else, including EOF, is "no".
pub fn confirm(prompt: &str) -> AppResult<bool> {
    Ok(matches!(read_answer(prompt)?, Some(a) if a == "yes"))
}

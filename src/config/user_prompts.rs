//! Prompts for credentials that are neither configured nor in the environment.

use crate::error::AppError;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt};

async fn read_line(label: &str) -> Result<String, AppError> {
    let mut stdout = io::stdout();
    stdout.write_all(label.as_bytes()).await?;
    stdout.flush().await?;

    let mut input = String::new();
    let mut reader = io::BufReader::new(io::stdin());
    reader.read_line(&mut input).await?;
    Ok(input)
}

/// Drops the trailing `\n` or `\r\n` and nothing else.
fn strip_line_ending(input: &str) -> &str {
    let input = input.strip_suffix('\n').unwrap_or(input);
    input.strip_suffix('\r').unwrap_or(input)
}

/// Prompts the user for the account name and returns the trimmed input.
pub async fn prompt_for_username() -> Result<String, AppError> {
    Ok(read_line("MLS Live username: ").await?.trim().to_string())
}

/// Prompts the user for the account password.
///
/// Spaces are part of the password, so only the line ending is removed.
/// Input is echoed; set `MLS_LIVE_PASSWORD` to avoid typing it.
pub async fn prompt_for_password() -> Result<String, AppError> {
    let input = read_line("MLS Live password: ").await?;
    Ok(strip_line_ending(&input).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_line_ending_keeps_spaces() {
        assert_eq!(strip_line_ending("  pass word \n"), "  pass word ");
        assert_eq!(strip_line_ending(" secret\r\n"), " secret");
        assert_eq!(strip_line_ending("secret"), "secret");
        assert_eq!(strip_line_ending("\n"), "");
    }
}

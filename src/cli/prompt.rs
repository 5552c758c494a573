//! Typed line-input prompting for the interactive menu
//!
//! The prompter is generic over any async buffered reader, so menu flows run
//! against real stdin in production and against scripted byte slices in
//! tests. Every typed helper re-asks until it gets a parseable value; end of
//! input surfaces as an `Io` error, which the menu loop treats as a quit.

use crate::domain::{MedrecError, Result};
use chrono::NaiveDate;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Line-oriented prompt reader
pub struct Prompter<R> {
    reader: R,
}

impl<R: AsyncBufRead + Unpin> Prompter<R> {
    /// Create a prompter over the given reader
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Print `prompt` and read one line, trimmed
    ///
    /// # Errors
    ///
    /// Returns an `Io` error when the input stream ends.
    pub async fn line(&mut self, prompt: &str) -> Result<String> {
        print!("{prompt}");
        std::io::stdout().flush()?;

        let mut buf = String::new();
        let read = self.reader.read_line(&mut buf).await?;
        if read == 0 {
            return Err(MedrecError::Io("input stream closed".to_string()));
        }
        Ok(buf.trim().to_string())
    }

    /// Read a non-empty line, re-asking while the input is empty
    pub async fn required(&mut self, prompt: &str) -> Result<String> {
        loop {
            let value = self.line(prompt).await?;
            if !value.is_empty() {
                return Ok(value);
            }
            println!("[ERROR] A value is required.");
        }
    }

    /// Read a line, mapping empty input to `None`
    pub async fn optional(&mut self, prompt: &str) -> Result<Option<String>> {
        let value = self.line(prompt).await?;
        Ok((!value.is_empty()).then_some(value))
    }

    /// Read a whole number, re-asking on parse failure
    pub async fn int(&mut self, prompt: &str) -> Result<i32> {
        loop {
            let value = self.line(prompt).await?;
            match value.parse() {
                Ok(n) => return Ok(n),
                Err(_) => println!("[ERROR] Enter a whole number."),
            }
        }
    }

    /// Read a whole number or empty for `None`, re-asking on parse failure
    pub async fn optional_int(&mut self, prompt: &str) -> Result<Option<i32>> {
        loop {
            let value = self.line(prompt).await?;
            if value.is_empty() {
                return Ok(None);
            }
            match value.parse() {
                Ok(n) => return Ok(Some(n)),
                Err(_) => println!("[ERROR] Enter a whole number, or leave empty."),
            }
        }
    }

    /// Read a decimal number, re-asking on parse failure
    pub async fn decimal(&mut self, prompt: &str) -> Result<f64> {
        loop {
            let value = self.line(prompt).await?;
            match value.parse() {
                Ok(n) => return Ok(n),
                Err(_) => println!("[ERROR] Enter a number."),
            }
        }
    }

    /// Read a decimal number or empty for `None`, re-asking on parse failure
    pub async fn optional_decimal(&mut self, prompt: &str) -> Result<Option<f64>> {
        loop {
            let value = self.line(prompt).await?;
            if value.is_empty() {
                return Ok(None);
            }
            match value.parse() {
                Ok(n) => return Ok(Some(n)),
                Err(_) => println!("[ERROR] Enter a number, or leave empty."),
            }
        }
    }

    /// Read a date in `YYYY-MM-DD` form, re-asking on parse failure
    pub async fn date(&mut self, prompt: &str) -> Result<NaiveDate> {
        loop {
            let value = self.line(prompt).await?;
            match NaiveDate::parse_from_str(&value, "%Y-%m-%d") {
                Ok(date) => return Ok(date),
                Err(_) => println!("[ERROR] Enter a date as YYYY-MM-DD."),
            }
        }
    }

    /// Read a date or empty for `None`, re-asking on parse failure
    pub async fn optional_date(&mut self, prompt: &str) -> Result<Option<NaiveDate>> {
        loop {
            let value = self.line(prompt).await?;
            if value.is_empty() {
                return Ok(None);
            }
            match NaiveDate::parse_from_str(&value, "%Y-%m-%d") {
                Ok(date) => return Ok(Some(date)),
                Err(_) => println!("[ERROR] Enter a date as YYYY-MM-DD, or leave empty."),
            }
        }
    }

    /// Read a yes/no answer, re-asking until one is given
    pub async fn confirm(&mut self, prompt: &str) -> Result<bool> {
        loop {
            let value = self.line(prompt).await?.to_lowercase();
            match value.as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => println!("[ERROR] Enter y or n."),
            }
        }
    }
}

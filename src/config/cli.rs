use crate::core::Storage;
use crate::utils::error::{Result, RoadError};
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

pub const MENU: &str = "Choose an option:\n\
                        1. Compute the smallest neighborhood\n\
                        2. Find the city with the smallest neighborhood\n";

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    fn read_to_string(&self, path: &str) -> Result<String> {
        let full_path = Path::new(&self.base_path).join(path);
        let bytes = fs::read(&full_path).map_err(|source| RoadError::ResourceUnavailable {
            path: full_path.display().to_string(),
            source,
        })?;
        // Names in legacy encodings (e.g. Latin-1) are kept, not rejected.
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

fn read_answer<R: BufRead>(reader: &mut R, field: &str) -> Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    let answer = line.trim();
    if answer.is_empty() {
        return Err(RoadError::MissingConfigError {
            field: field.to_string(),
        });
    }
    Ok(answer.to_string())
}

/// Asks for the input file on `writer` and reads one line from `reader`.
pub fn prompt_input_path<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<String> {
    write!(writer, "Enter the input file name: ")?;
    writer.flush()?;
    read_answer(reader, "input")
}

/// Prints the query menu and returns the raw selector typed by the user.
pub fn prompt_mode<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<String> {
    write!(writer, "{}", MENU)?;
    writer.flush()?;
    read_answer(reader, "mode")
}

//! Environment struct (stdin/stdout/etc.)

use std::io::{self, Read, Stdin};

/// Execution environment
pub struct Environment {
    pub stdin: Stdin,
    pub stdin_isatty: bool,
    pub program_name: String,
}

impl Environment {
    pub fn init() -> Self {
        Self::default()
    }

    /// Read a curl command from stdin.
    ///
    /// Shell line continuations (`\` followed by a newline) are joined with a
    /// space and surrounding whitespace is trimmed, so a command copied from
    /// documentation over several lines becomes one line.
    pub fn read_stdin_command(&mut self) -> io::Result<String> {
        let mut input = String::new();
        self.stdin.read_to_string(&mut input)?;
        Ok(join_continuations(&input))
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            stdin: io::stdin(),
            stdin_isatty: atty::is(atty::Stream::Stdin),
            program_name: "curl2retrofit".to_string(),
        }
    }
}

/// Join `\`-newline continuations and flatten remaining newlines
pub fn join_continuations(input: &str) -> String {
    input
        .replace("\\\r\n", " ")
        .replace("\\\n", " ")
        .replace(['\r', '\n'], " ")
        .trim()
        .to_string()
}

use regex::Regex;

use crate::error::{ProjectIndexError, Result};

/// A minimal glob: `*` matches any run of characters, `?` exactly one,
/// everything else is literal. The whole input must match.
///
/// `*` is allowed to cross `/`, and there is no `**`, no character class and
/// no brace expansion.
#[derive(Debug, Clone)]
pub struct SimpleGlob {
    regex: Regex,
}

impl SimpleGlob {
    /// Compile a glob.
    ///
    /// # Errors
    /// Returns an error if the translated regex cannot be built (for example,
    /// when it exceeds the regex size limit).
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(&translate(pattern)).map_err(|source| {
            ProjectIndexError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            }
        })?;
        Ok(Self { regex })
    }

    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

fn translate(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 12);
    // `.` must also match a newline inside a file name
    out.push_str("(?s)^");
    let mut buf = [0u8; 4];
    for ch in pattern.chars() {
        match ch {
            '*' => out.push_str(".*"),
            '?' => out.push('.'),
            _ => out.push_str(&regex::escape(ch.encode_utf8(&mut buf))),
        }
    }
    out.push('$');
    out
}

use regex::{RegexSet, RegexSetBuilder};

/// Conventional program start files.
pub const ENTRY_POINT_PATTERNS: &[&str] = &[
    r"^(main|index|app|server|entry)\.(ts|tsx|js|jsx|py|go|rs)$",
    r"^(program|startup)\.cs$",
];

/// Build and tooling configuration files.
pub const CONFIG_FILE_PATTERNS: &[&str] = &[
    r"^package\.json$",
    r"^tsconfig.*\.json$",
    r"^vite\.config\.",
    r"^next\.config\.",
    r"^webpack\.config\.",
    r"^\.eslintrc",
    r"^\.prettierrc",
    r"^tailwind\.config\.",
    r"^docker-compose",
    r"^dockerfile$",
    r"^makefile$",
    r"^\.env\.example$",
    r"^requirements\.txt$",
    r"^pyproject\.toml$",
    r"^cargo\.toml$",
    r"^go\.mod$",
    r"\.(csproj|sln)$",
];

/// Documentation and governance files, plus agent convention files.
pub const KEY_FILE_PATTERNS: &[&str] = &[
    r"^readme",
    r"^changelog",
    r"^contributing",
    r"^license",
    r"^agents\.md$",
    r"^handoff\.md$",
];

/// A case-insensitive list of file-name patterns.
#[derive(Debug, Clone)]
pub struct NamePatterns {
    set: RegexSet,
}

impl NamePatterns {
    /// Compile a pattern table.
    ///
    /// # Errors
    /// Returns an error if any pattern is not a valid regex.
    pub fn new(patterns: &[&str]) -> Result<Self, regex::Error> {
        let set = RegexSetBuilder::new(patterns)
            .case_insensitive(true)
            .build()?;
        Ok(Self { set })
    }

    /// Compile one of the built-in tables above.
    fn builtin(patterns: &[&str]) -> Self {
        Self::new(patterns).expect("built-in name patterns are valid")
    }

    #[must_use]
    pub fn entry_points() -> Self {
        Self::builtin(ENTRY_POINT_PATTERNS)
    }

    #[must_use]
    pub fn config_files() -> Self {
        Self::builtin(CONFIG_FILE_PATTERNS)
    }

    #[must_use]
    pub fn key_files() -> Self {
        Self::builtin(KEY_FILE_PATTERNS)
    }

    #[must_use]
    pub fn is_match(&self, name: &str) -> bool {
        self.set.is_match(name)
    }
}

#[cfg(test)]
#[path = "patterns_tests.rs"]
mod tests;

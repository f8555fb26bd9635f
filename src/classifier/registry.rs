use std::collections::HashMap;

/// Category assigned when no table entry recognises the extension.
pub const OTHER_CATEGORY: &str = "other";

/// Result of main-language inference when no code file was seen.
pub const UNKNOWN_LANGUAGE: &str = "unknown";

/// Category table in declaration order. Lookups never depend on this order
/// (extensions are disjoint), but language inference breaks ties with it.
pub const CATEGORY_TABLE: &[(&str, &[&str])] = &[
    ("typescript", &["ts", "tsx", "mts", "cts"]),
    ("javascript", &["js", "jsx", "mjs", "cjs"]),
    ("python", &["py", "pyw", "pyi"]),
    ("csharp", &["cs", "csx"]),
    ("java", &["java"]),
    ("go", &["go"]),
    ("rust", &["rs"]),
    ("ruby", &["rb"]),
    ("php", &["php"]),
    ("styles", &["css", "scss", "sass", "less", "styl"]),
    ("markup", &["html", "htm", "vue", "svelte"]),
    ("config", &["json", "yaml", "yml", "toml", "xml", "ini"]),
    ("markdown", &["md", "mdx"]),
];

/// Categories that count as programming languages.
pub const CODE_CATEGORIES: &[&str] = &[
    "typescript",
    "javascript",
    "python",
    "csharp",
    "java",
    "go",
    "rust",
    "ruby",
    "php",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub extensions: Vec<&'static str>,
}

#[derive(Debug)]
pub struct CategoryRegistry {
    categories: Vec<Category>,
    extension_map: HashMap<&'static str, usize>,
}

impl CategoryRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            categories: Vec::new(),
            extension_map: HashMap::new(),
        }
    }

    pub fn register(&mut self, category: Category) {
        let idx = self.categories.len();
        for ext in &category.extensions {
            self.extension_map.entry(*ext).or_insert(idx);
        }
        self.categories.push(category);
    }

    /// Look up a category by lowercase extension (without the dot).
    #[must_use]
    pub fn get_by_extension(&self, ext: &str) -> Option<&Category> {
        self.extension_map
            .get(ext)
            .map(|&idx| &self.categories[idx])
    }

    /// Category name for a file name; [`OTHER_CATEGORY`] if unrecognised.
    #[must_use]
    pub fn categorize(&self, file_name: &str) -> &'static str {
        extension_of(file_name)
            .and_then(|ext| self.get_by_extension(&ext))
            .map_or(OTHER_CATEGORY, |category| category.name)
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        for &(name, extensions) in CATEGORY_TABLE {
            registry.register(Category {
                name,
                extensions: extensions.to_vec(),
            });
        }
        registry
    }
}

/// Lowercase extension of a file name, without the leading dot.
///
/// A name whose only dot is the first character (`.gitignore`) has no
/// extension, and neither does a name ending in a dot.
#[must_use]
pub fn extension_of(file_name: &str) -> Option<String> {
    let idx = file_name.rfind('.')?;
    if idx == 0 || idx + 1 == file_name.len() {
        return None;
    }
    Some(file_name[idx + 1..].to_ascii_lowercase())
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;

use super::*;

#[test]
fn default_registry_has_all_categories() {
    let registry = CategoryRegistry::default();
    let mut names = Vec::new();
    for &(name, extensions) in CATEGORY_TABLE {
        for ext in extensions {
            assert_eq!(registry.get_by_extension(ext).unwrap().name, name);
        }
        names.push(name);
    }
    assert_eq!(
        names,
        vec![
            "typescript",
            "javascript",
            "python",
            "csharp",
            "java",
            "go",
            "rust",
            "ruby",
            "php",
            "styles",
            "markup",
            "config",
            "markdown",
        ]
    );
}

#[test]
fn get_by_extension_finds_language() {
    let registry = CategoryRegistry::default();
    assert_eq!(registry.get_by_extension("tsx").unwrap().name, "typescript");
    assert_eq!(registry.get_by_extension("pyi").unwrap().name, "python");
    assert_eq!(registry.get_by_extension("svelte").unwrap().name, "markup");
}

#[test]
fn get_by_extension_unknown_returns_none() {
    let registry = CategoryRegistry::default();
    assert!(registry.get_by_extension("exe").is_none());
}

#[test]
fn categorize_is_case_insensitive() {
    let registry = CategoryRegistry::default();
    assert_eq!(registry.categorize("Main.RS"), "rust");
    assert_eq!(registry.categorize("README.MD"), "markdown");
    assert_eq!(registry.categorize("styles.SCSS"), "styles");
}

#[test]
fn categorize_uses_last_extension() {
    let registry = CategoryRegistry::default();
    assert_eq!(registry.categorize("app.config.json"), "config");
    assert_eq!(registry.categorize("types.d.ts"), "typescript");
}

#[test]
fn categorize_without_extension_is_other() {
    let registry = CategoryRegistry::default();
    assert_eq!(registry.categorize("Makefile"), OTHER_CATEGORY);
    assert_eq!(registry.categorize(".gitignore"), OTHER_CATEGORY);
    assert_eq!(registry.categorize("trailing."), OTHER_CATEGORY);
}

#[test]
fn categorize_unknown_extension_is_other() {
    let registry = CategoryRegistry::default();
    assert_eq!(registry.categorize("logo.png"), OTHER_CATEGORY);
}

#[test]
fn extension_of_examples() {
    assert_eq!(extension_of("index.TS"), Some("ts".to_string()));
    assert_eq!(extension_of(".env.example"), Some("example".to_string()));
    assert_eq!(extension_of(".bashrc"), None);
    assert_eq!(extension_of("LICENSE"), None);
}

#[test]
fn code_categories_are_registered() {
    let registry = CategoryRegistry::default();
    for code in CODE_CATEGORIES {
        let registered = CATEGORY_TABLE
            .iter()
            .find(|&&(name, _)| name == *code)
            .is_some_and(|&(_, extensions)| registry.get_by_extension(extensions[0]).is_some());
        assert!(registered, "{code} missing from table");
    }
}

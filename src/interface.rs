//! Interface source files
//!
//! Checks that an existing file declares an interface, appends generated
//! functions to it, and creates new interface files.

use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::info;

use crate::codegen::Language;
use crate::errors::{Curl2RetrofitError, Result};

static IDENTIFIER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("Invalid identifier regex")
});

/// Heuristic interface detection: the word just before the declared name,
/// ahead of the first `{`, must be `interface`.
///
/// ```
/// use curl2retrofit::interface::is_interface;
/// assert!(is_interface("package a\n\ninterface UserApi {\n}\n"));
/// assert!(!is_interface("class UserApi {\n}\n"));
/// ```
pub fn is_interface(contents: &str) -> bool {
    let Some(brace) = contents.find('{') else {
        return false;
    };

    let words: Vec<&str> = contents[..brace].split_whitespace().collect();
    words.len() >= 2 && words[words.len() - 2].eq_ignore_ascii_case("interface")
}

/// Check that `path` may receive generated code.
///
/// With a project directory, the file must live inside it.
pub fn check_interface_file(path: &Path, project_dir: Option<&Path>) -> Result<()> {
    if let Some(project_dir) = project_dir {
        let file = path.canonicalize()?;
        let project = project_dir.canonicalize()?;
        if !file.starts_with(&project) {
            return Err(Curl2RetrofitError::InterfaceFile(
                "Selected file isn't within project folder".to_string(),
            ));
        }
    }

    let contents = fs::read_to_string(path)?;
    if !is_interface(&contents) {
        return Err(Curl2RetrofitError::InterfaceFile(
            "Selected file isn't an interface class".to_string(),
        ));
    }

    Ok(())
}

/// Insert `snippet`, indented one level, right before the last `}` of `contents`
pub fn insert_before_last_brace(contents: &str, snippet: &str) -> Option<String> {
    let pos = contents.rfind('}')?;

    let mut updated = String::with_capacity(contents.len() + snippet.len() + 16);
    updated.push_str(&contents[..pos]);
    if !updated.is_empty() && !updated.ends_with('\n') {
        updated.push('\n');
    }
    for line in snippet.lines() {
        updated.push_str("    ");
        updated.push_str(line);
        updated.push('\n');
    }
    updated.push_str(&contents[pos..]);

    Some(updated)
}

/// Append a generated function to an existing interface file
pub fn append_before_last_brace(path: &Path, snippet: &str) -> Result<()> {
    let contents = fs::read_to_string(path)?;
    let updated = insert_before_last_brace(&contents, snippet).ok_or_else(|| {
        Curl2RetrofitError::InterfaceFile(format!("No closing brace found in {}", path.display()))
    })?;

    fs::write(path, updated)?;
    info!(path = %path.display(), "Appended function to interface");
    Ok(())
}

/// Write a new `<class_name>.<ext>` file holding `full_code` into `dir`.
///
/// Refuses to overwrite an existing file.
pub fn create_interface_file(
    dir: &Path,
    class_name: &str,
    language: Language,
    full_code: &str,
) -> Result<PathBuf> {
    if !IDENTIFIER_RE.is_match(class_name) {
        return Err(Curl2RetrofitError::Argument(format!(
            "'{}' is not a valid class name",
            class_name
        )));
    }
    if !dir.is_dir() {
        return Err(Curl2RetrofitError::Argument(format!(
            "{} is not a directory",
            dir.display()
        )));
    }

    let path = dir.join(format!("{}.{}", class_name, language.extension()));
    if path.exists() {
        return Err(Curl2RetrofitError::InterfaceFile(format!(
            "{} already exists",
            path.display()
        )));
    }

    fs::write(&path, full_code)?;
    info!(path = %path.display(), "Created interface file");
    Ok(path)
}

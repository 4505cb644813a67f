//! Retrofit interface generation
//!
//! Renders a [`CurlCommand`] as a Retrofit service declaration in Kotlin or
//! Java. Two forms are produced: the single annotated function, for pasting
//! into an existing interface, and a complete file with imports.

use std::path::Path;
use std::str::FromStr;

use clap::ValueEnum;

use crate::config::{DEFAULT_CLASS_NAME, DEFAULT_METHOD_NAME};
use crate::curl::CurlCommand;

/// Supported target languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Language {
    #[value(alias = "kt")]
    Kotlin,
    Java,
}

impl Language {
    /// Source file extension, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            Language::Kotlin => "kt",
            Language::Java => "java",
        }
    }

    /// Pick the language of an existing source file: `.kt` is Kotlin,
    /// anything else is treated as Java.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("kt") => Language::Kotlin,
            _ => Language::Java,
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kotlin" | "kt" => Ok(Language::Kotlin),
            "java" => Ok(Language::Java),
            _ => Err(format!("Unknown language '{}'. Supported: kotlin, java", s)),
        }
    }
}

/// Names used in the generated declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodegenOptions {
    pub class_name: String,
    pub method_name: String,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self {
            class_name: DEFAULT_CLASS_NAME.to_string(),
            method_name: DEFAULT_METHOD_NAME.to_string(),
        }
    }
}

/// Result of code generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCode {
    /// Complete source file: imports and interface declaration
    pub full_code: String,
    /// The annotated function alone
    pub code_function: String,
}

/// Generate a Retrofit declaration for the command
pub fn generate(command: &CurlCommand, language: Language, options: &CodegenOptions) -> GeneratedCode {
    let endpoint = escape_literal(&endpoint(command), language);
    let annotation = command.method.as_str();
    let with_body = command.has_body() && command.method.accepts_body();

    let signature = match (language, with_body) {
        (Language::Kotlin, true) => {
            format!("fun {}(@Body body: RequestBody): Call<Void>", options.method_name)
        }
        (Language::Kotlin, false) => format!("fun {}(): Call<Void>", options.method_name),
        (Language::Java, true) => {
            format!("Call<Void> {}(@Body RequestBody body);", options.method_name)
        }
        (Language::Java, false) => format!("Call<Void> {}();", options.method_name),
    };

    let code_function = format!("@{}(\"{}\")\n{}", annotation, endpoint, signature);

    let terminator = match language {
        Language::Kotlin => "",
        Language::Java => ";",
    };
    let mut imports = vec![
        "retrofit2.Call".to_string(),
        format!("retrofit2.http.{}", annotation),
    ];
    if with_body {
        imports.push("retrofit2.http.Body".to_string());
        imports.push("okhttp3.RequestBody".to_string());
    }

    let mut full_code = String::new();
    for import in &imports {
        full_code.push_str(&format!("import {}{}\n", import, terminator));
    }
    full_code.push('\n');

    match language {
        Language::Kotlin => full_code.push_str(&format!("interface {} {{\n", options.class_name)),
        Language::Java => full_code.push_str(&format!("public interface {} {{\n", options.class_name)),
    }
    for line in code_function.lines() {
        full_code.push_str("    ");
        full_code.push_str(line);
        full_code.push('\n');
    }
    full_code.push_str("}\n");

    GeneratedCode {
        full_code,
        code_function,
    }
}

/// Base URL followed by the query string as written in the command.
/// Values stay percent-encoded and repeated keys are kept.
pub fn endpoint(command: &CurlCommand) -> String {
    let base = command.url.as_deref().unwrap_or_default();
    match command.raw_query.as_deref() {
        Some(query) if !query.is_empty() => format!("{}?{}", base, query),
        _ => base.to_string(),
    }
}

/// Escape for a string literal in the target language
fn escape_literal(s: &str, language: Language) -> String {
    let escaped = s
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t");
    match language {
        Language::Kotlin => escaped.replace('$', "\\$"),
        Language::Java => escaped,
    }
}

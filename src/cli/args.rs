//! CLI argument definitions using clap
//!
//! This module defines all command-line arguments for curl2retrofit.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::codegen::Language;

/// curl2retrofit - turn curl commands into Retrofit interface declarations
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "curl2retrofit", version, about, long_about = None)]
pub struct Args {
    // =========================================================================
    // POSITIONAL ARGUMENTS
    // =========================================================================

    /// The full curl command, quoted as a single argument.
    /// Use `-` or omit it to read the command from stdin
    #[arg(value_name = "CURL_COMMAND")]
    pub command: Option<String>,

    // =========================================================================
    // GENERATION
    // =========================================================================

    /// Target language of the generated code
    #[arg(short = 'l', long = "language", value_name = "LANGUAGE", value_enum)]
    pub language: Option<Language>,

    /// Name of the generated interface
    #[arg(short = 'c', long = "class-name", value_name = "NAME")]
    pub class_name: Option<String>,

    /// Name of the generated function
    #[arg(short = 'm', long = "method-name", value_name = "NAME")]
    pub method_name: Option<String>,

    /// Print the complete interface file instead of the function alone
    #[arg(long = "full", action = ArgAction::SetTrue)]
    pub full: bool,

    // =========================================================================
    // MODES
    // =========================================================================

    /// Only validate the command
    #[arg(long = "check", action = ArgAction::SetTrue, conflicts_with = "json")]
    pub check: bool,

    /// Print the extracted request as JSON instead of generating code
    #[arg(long = "json", action = ArgAction::SetTrue)]
    pub json: bool,

    // =========================================================================
    // OUTPUT FILES
    // =========================================================================

    /// Write the full interface to <DIR>/<CLASS_NAME>.<kt|java>
    #[arg(short = 'o', long = "output-dir", value_name = "DIR", conflicts_with = "append")]
    pub output_dir: Option<PathBuf>,

    /// Append the function to an existing interface file
    #[arg(short = 'a', long = "append", value_name = "FILE")]
    pub append: Option<PathBuf>,

    /// Project root the --append target must live in
    #[arg(long = "project-dir", value_name = "DIR", requires = "append")]
    pub project_dir: Option<PathBuf>,

    // =========================================================================
    // TROUBLESHOOTING
    // =========================================================================

    /// Enable debug logging and detailed error output
    #[arg(long = "debug", action = ArgAction::SetTrue)]
    pub debug: bool,
}

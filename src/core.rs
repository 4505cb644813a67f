//! Main execution logic: validate, extract, generate, write

use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::Args;
use crate::codegen::{generate, CodegenOptions, Language};
use crate::config::Config;
use crate::context::{join_continuations, Environment};
use crate::curl::{extract, validate};
use crate::errors::{Curl2RetrofitError, Result};
use crate::interface::{append_before_last_brace, check_interface_file, create_interface_file};
use crate::status::ExitStatus;

/// Main entry point for the CLI.
///
/// Handles argument parsing, configuration loading, and dispatches to the
/// requested output mode.
pub fn run(args: Vec<String>, mut env: Environment) -> ExitStatus {
    if let Some(name) = args.first() {
        if let Some(basename) = std::path::Path::new(name).file_stem() {
            env.program_name = basename.to_string_lossy().to_string();
        }
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Failed to load config: {}", e);
            Config::default()
        }
    };

    let merged_args = merge_default_options(args, &config);

    let parsed = match Args::try_parse_from(&merged_args) {
        Ok(args) => args,
        Err(e) => {
            e.print().ok();
            return if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion {
                ExitStatus::Success
            } else {
                ExitStatus::Error
            };
        }
    };

    init_logging(parsed.debug);
    debug!(config_dir = %config.config_dir.display(), "Configuration loaded");

    let debug = parsed.debug;
    match program(parsed, &config, &mut env) {
        Ok(status) => status,
        Err(e) => handle_error(e, debug),
    }
}

pub fn program(args: Args, config: &Config, env: &mut Environment) -> Result<ExitStatus> {
    let raw = read_command(&args, env)?;
    debug!(command = %raw, "Validating curl command");

    validate(&raw)?;

    if args.check {
        println!("Valid");
        return Ok(ExitStatus::Success);
    }

    let command = extract(&raw);
    debug!(
        method = %command.method,
        url = command.url.as_deref().unwrap_or_default(),
        query_params = command.query_params.len(),
        headers = command.headers.len(),
        has_body = command.has_body(),
        "Extracted request"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&command)?);
        return Ok(ExitStatus::Success);
    }

    let options = CodegenOptions {
        class_name: args.class_name.clone().unwrap_or_else(|| config.class_name.clone()),
        method_name: args.method_name.clone().unwrap_or_else(|| config.method_name.clone()),
    };

    if let Some(path) = &args.append {
        check_interface_file(path, args.project_dir.as_deref())?;
        let language = Language::from_path(path);
        if args.language.is_some_and(|l| l != language) {
            warn!(path = %path.display(), "--language ignored; following the file extension");
        }
        let code = generate(&command, language, &options);
        append_before_last_brace(path, &code.code_function)?;
        println!("{}", path.display());
        return Ok(ExitStatus::Success);
    }

    let language = args.language.unwrap_or(config.language);
    let code = generate(&command, language, &options);
    info!(language = ?language, method = %command.method, "Generated Retrofit declaration");

    if let Some(dir) = &args.output_dir {
        let path = create_interface_file(dir, &options.class_name, language, &code.full_code)?;
        println!("{}", path.display());
        return Ok(ExitStatus::Success);
    }

    if args.full {
        print!("{}", code.full_code);
    } else {
        println!("{}", code.code_function);
    }

    Ok(ExitStatus::Success)
}

/// Take the command from the positional argument, or from stdin for `-`
/// or when stdin is piped.
fn read_command(args: &Args, env: &mut Environment) -> Result<String> {
    match args.command.as_deref() {
        Some("-") => Ok(env.read_stdin_command()?),
        Some(command) => Ok(join_continuations(command)),
        None if !env.stdin_isatty => Ok(env.read_stdin_command()?),
        None => Err(Curl2RetrofitError::Argument(format!(
            "no curl command given; pass it as an argument or pipe it into {}",
            env.program_name
        ))),
    }
}

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("curl2retrofit=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

fn merge_default_options(args: Vec<String>, config: &Config) -> Vec<String> {
    if config.default_options.is_empty() {
        return args;
    }

    let (flags, positional): (Vec<_>, Vec<_>) = config.default_options.iter()
        .partition(|opt| opt.starts_with('-'));

    if !positional.is_empty() {
        eprintln!("Warning: Positional arguments in default options are ignored: {:?}", positional);
    }

    if flags.is_empty() {
        return args;
    }

    let mut merged = Vec::with_capacity(args.len() + flags.len());

    if let Some(program) = args.first() {
        merged.push(program.clone());
    }

    merged.extend(flags.into_iter().cloned());
    merged.extend(args.into_iter().skip(1));

    merged
}

fn handle_error(error: Curl2RetrofitError, debug: bool) -> ExitStatus {
    match error {
        Curl2RetrofitError::Validation(e) => eprintln!("{}", e),
        e if debug => eprintln!("Error: {:?}", e),
        e => eprintln!("Error: {}", e),
    }

    ExitStatus::Error
}

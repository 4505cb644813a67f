use curl2retrofit::context::Environment;
use curl2retrofit::status::ExitStatus;

/// Entry point - collects argv and calls core::run()
///
/// Returns ExitStatus directly, which implements std::process::Termination.
fn main() -> ExitStatus {
    let args: Vec<String> = std::env::args().collect();
    let env = Environment::init();

    curl2retrofit::core::run(args, env)
}

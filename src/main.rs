use clap::Parser;
use std::process::ExitCode;
use veridion::utils::logger;

// Arguments are accepted and ignored; the banner is printed regardless.
#[derive(Parser)]
#[command(name = "veridion")]
#[command(about = "Véridion AI - Quality Orchestrator")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    _args: Vec<String>,
}

fn main() -> ExitCode {
    let _cli = Cli::parse();

    logger::init_from_env();
    tracing::debug!("Starting veridion");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    // Startup never fails the process; problems only reach the log.
    match veridion::run(&mut out) {
        Ok(env_file) if env_file.is_loaded() => {
            tracing::debug!("Startup complete with {:?}", env_file);
        }
        Ok(_) => tracing::debug!("Startup complete without an environment file"),
        Err(e) => tracing::warn!("Failed to print banner: {}", e),
    }

    ExitCode::SUCCESS
}

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod domain;
mod services;

pub use cli::*;
pub use commands::{handle_modes, handle_verify};
pub use domain::models::*;
pub use services::assets::{build_asset_set, expand_assets};
pub use services::mount::MountRegistry;
pub use services::output::{print_error, print_out};
pub use services::paths::resolve_app_root;
pub use services::profile::{load_profile, resolve};
pub use services::report::{build_report, JsonSink, ReportSink, TextSink};
pub use services::settings::{load_settings, Settings};
pub use services::verify::FileVerifier;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let settings = load_settings()?;
    let cwd = std::env::current_dir()?;
    let root = resolve_app_root(cli.root.as_deref(), &cwd, &settings.root_markers)?;

    match &cli.command {
        Commands::Verify {
            profile,
            mode,
            filter,
        } => {
            let params = CliParams {
                profile: profile.clone(),
                modes: mode.clone(),
                filter: *filter,
            };
            handle_verify(cli, &params, &settings, &root)
        }
        Commands::Modes => handle_modes(cli, &settings, &root),
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_error(cli.json, &err);
            ExitCode::FAILURE
        }
    }
}

use crate::*;
use anyhow::Context;
use colored::Colorize;
use std::path::Path;
use tracing::{debug, info};

pub const VACUOUS_WARNING: &str = "No assets to verify! No mode/include specified, filter too specific or the respective mode(s) are not installed";

/// Printed to stderr whatever `RUST_LOG` says.
fn report_vacuous(cli: &Cli) -> anyhow::Result<()> {
    debug!("vacuous verification request");
    eprintln!("{}", VACUOUS_WARNING.yellow());
    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: Option::<VerifyReport>::None
            })?
        );
    }
    Ok(())
}

pub fn handle_verify(
    cli: &Cli,
    params: &CliParams,
    settings: &Settings,
    root: &Path,
) -> anyhow::Result<()> {
    let profile = match &params.profile {
        Some(path) => Some(
            load_profile(path).with_context(|| format!("loading profile {}", path.display()))?,
        ),
        None => None,
    };
    let request = resolve(params, profile)?;
    if request.is_vacuous() {
        return report_vacuous(cli);
    }

    let set = build_asset_set(&request, &settings.catalog(), root);
    let verifier = FileVerifier::new(settings.raster_generators.clone());
    let report = build_report(root, &set, request.filter, &verifier, &MountRegistry::builtin());
    if report.groups.is_empty() {
        return report_vacuous(cli);
    }

    info!(
        files = report.summary.total,
        failed = report.summary.failed,
        "verification finished"
    );

    let stdout = std::io::stdout();
    if cli.json {
        JsonSink::new(stdout.lock()).render(&report)
    } else {
        TextSink::new(stdout.lock()).render(&report)
    }
}

use crate::cli::GeneratorKind;
use crate::domain::models::{
    AssetSet, FileReport, GroupReport, JsonOut, MountAnnotation, VerificationResult, VerifyReport,
    VerifySummary,
};
use crate::services::assets::filter_files;
use crate::services::mount::MountRegistry;
use crate::services::verify::{expected_format, FileVerifier};
use colored::Colorize;
use std::io::Write;
use std::path::Path;

const GENERATOR_COLUMN: usize = 13;

/// Verifies every file of every group that survives `filter`. Groups left
/// empty by the filter are dropped; group order is kept.
pub fn build_report(
    root: &Path,
    set: &AssetSet,
    filter: Option<GeneratorKind>,
    verifier: &FileVerifier,
    mounts: &MountRegistry,
) -> VerifyReport {
    let mut summary = VerifySummary::default();
    let mut groups = Vec::new();

    for group in &set.groups {
        let files = filter_files(&group.files, filter);
        if files.is_empty() {
            continue;
        }
        let files: Vec<FileReport> = files
            .into_iter()
            .map(|f| {
                let result = verifier.status(f);
                summary.total += 1;
                if result.is_ok() {
                    summary.ok += 1;
                } else {
                    summary.failed += 1;
                }
                FileReport {
                    relative_path: f.relative_path.clone(),
                    generator: f.generator,
                    expected_width: f.width,
                    expected_height: f.height,
                    result,
                    mount: mounts.annotation(root, f),
                }
            })
            .collect();
        groups.push(GroupReport {
            name: group.name.clone(),
            files,
        });
    }

    VerifyReport {
        root: root.display().to_string(),
        assets_of: set.assets_of.clone(),
        filter,
        groups,
        summary,
    }
}

pub trait ReportSink {
    fn render(&mut self, report: &VerifyReport) -> anyhow::Result<()>;
}

pub struct TextSink<W: Write> {
    out: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

fn status_text(file: &FileReport) -> String {
    match file.result {
        VerificationResult::Ok => "SIZE OK".green().to_string(),
        VerificationResult::Missing => "ERROR: missing!".red().to_string(),
        VerificationResult::InvalidImage => {
            let kind = expected_format(file.generator, Path::new(&file.relative_path))
                .and_then(|f| f.extensions_str().first().copied())
                .unwrap_or("image");
            format!("ERROR: not a {}!", kind).red().to_string()
        }
        VerificationResult::WrongDimensions { width, height } => {
            format!("ERROR: incorrect resolution! {}x{}", width, height)
                .red()
                .to_string()
        }
    }
}

fn mount_text(mount: &Option<MountAnnotation>) -> String {
    match mount {
        Some(m) if m.tracked => format!("[{}: tracked]", m.mount).green().to_string(),
        Some(m) => format!("[{}: not tracked]", m.mount).yellow().to_string(),
        None => String::new(),
    }
}

impl<W: Write> ReportSink for TextSink<W> {
    fn render(&mut self, report: &VerifyReport) -> anyhow::Result<()> {
        let filter = report
            .filter
            .map(|f| f.as_str().green().to_string())
            .unwrap_or_else(|| "none".to_string());
        writeln!(self.out, " VERIFYING with the following options:")?;
        writeln!(self.out, " ================")?;
        writeln!(self.out, " Root folder..... {}", report.root.green())?;
        writeln!(self.out, " Assets of....... {}", report.assets_of.green())?;
        writeln!(self.out, " Assets filter... {}", filter)?;
        writeln!(self.out, " ================")?;
        writeln!(self.out)?;

        for group in &report.groups {
            let header = format!("Mode {}", group.name.to_uppercase());
            writeln!(self.out, " {}", header.green().underline())?;
            writeln!(self.out)?;
            for file in &group.files {
                let generator = format!("{}:", file.generator);
                let line = format!(
                    " {} - {:<width$} {} {}",
                    status_text(file),
                    generator,
                    file.relative_path,
                    mount_text(&file.mount),
                    width = GENERATOR_COLUMN
                );
                writeln!(self.out, "{}", line.trim_end())?;
            }
            writeln!(self.out)?;
        }

        let s = &report.summary;
        let failed = if s.failed == 0 {
            s.failed.to_string().green()
        } else {
            s.failed.to_string().red()
        };
        writeln!(
            self.out,
            " {} files checked, {} ok, {} failed",
            s.total, s.ok, failed
        )?;
        Ok(())
    }
}

pub struct JsonSink<W: Write> {
    out: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> ReportSink for JsonSink<W> {
    fn render(&mut self, report: &VerifyReport) -> anyhow::Result<()> {
        writeln!(
            self.out,
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: report
            })?
        )?;
        Ok(())
    }
}

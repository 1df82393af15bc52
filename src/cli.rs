use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(
    name = "iconverify",
    version,
    about = "Verify generated app icons and splashscreens"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "App root folder (defaults to the nearest folder holding a root marker)"
    )]
    pub root: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check every expected asset of the requested modes and/or profile.
    Verify {
        #[arg(long, help = "Profile file supplying params and/or an explicit asset list")]
        profile: Option<PathBuf>,
        #[arg(
            long,
            value_delimiter = ',',
            help = "Mode(s) to verify (repeat or comma-separate), or `all`"
        )]
        mode: Vec<String>,
        #[arg(long, value_enum, help = "Only report assets of this generator kind")]
        filter: Option<GeneratorKind>,
    },
    /// List known modes and whether they are installed under the app root.
    Modes,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorKind {
    Png,
    Splashscreen,
    Svg,
    Ico,
    Icns,
}

impl GeneratorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeneratorKind::Png => "png",
            GeneratorKind::Splashscreen => "splashscreen",
            GeneratorKind::Svg => "svg",
            GeneratorKind::Ico => "ico",
            GeneratorKind::Icns => "icns",
        }
    }

    /// Kinds whose manifest entries describe pixel sizes.
    pub fn needs_sizes(&self) -> bool {
        matches!(self, GeneratorKind::Png | GeneratorKind::Splashscreen)
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeneratorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(GeneratorKind::Png),
            "splashscreen" => Ok(GeneratorKind::Splashscreen),
            "svg" => Ok(GeneratorKind::Svg),
            "ico" => Ok(GeneratorKind::Ico),
            "icns" => Ok(GeneratorKind::Icns),
            other => Err(format!(
                "unknown generator `{}` (expected png, splashscreen, svg, ico or icns)",
                other
            )),
        }
    }
}

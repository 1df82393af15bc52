use crate::cli::GeneratorKind;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct JsonErr {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// One pixel size of a manifest entry: a square edge or a `[width, height]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AssetSize {
    Square(u32),
    Rect([u32; 2]),
}

impl AssetSize {
    pub fn dimensions(&self) -> (u32, u32) {
        match *self {
            AssetSize::Square(edge) => (edge, edge),
            AssetSize::Rect([width, height]) => (width, height),
        }
    }
}

/// Declarative manifest entry, as found in the mode catalog, the settings file
/// or a profile's `assets` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetSpec {
    pub generator: GeneratorKind,
    /// File name template; `{size}`, `{width}` and `{height}` are substituted per size.
    pub name: String,
    pub folder: String,
    #[serde(default)]
    pub sizes: Vec<AssetSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModeEntry {
    pub name: String,
    /// Install folder, relative to the app root.
    pub folder: String,
    #[serde(default)]
    pub assets: Vec<AssetSpec>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub params: Option<ProfileParams>,
    #[serde(default)]
    pub assets: Option<Vec<AssetSpec>>,
}

/// The subset of profile params that matters for verification. Generation-only
/// keys (icon, background, colors, ...) are ignored.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ProfileParams {
    #[serde(default, deserialize_with = "one_or_many")]
    pub include: Vec<String>,
    #[serde(default)]
    pub filter: Option<String>,
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(s) => vec![s],
        OneOrMany::Many(v) => v,
    })
}

#[derive(Debug, Default, Clone)]
pub struct CliParams {
    pub profile: Option<PathBuf>,
    pub modes: Vec<String>,
    pub filter: Option<GeneratorKind>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VerificationRequest {
    pub modes: Vec<String>,
    pub explicit_assets: Vec<AssetSpec>,
    pub filter: Option<GeneratorKind>,
}

impl VerificationRequest {
    pub fn is_vacuous(&self) -> bool {
        self.modes.is_empty() && self.explicit_assets.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpectedFile {
    pub absolute_path: PathBuf,
    pub relative_path: String,
    pub generator: GeneratorKind,
    pub width: u32,
    pub height: u32,
    pub platform: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AssetGroup {
    pub name: String,
    pub files: Vec<ExpectedFile>,
}

#[derive(Debug, Clone)]
pub struct AssetSet {
    pub assets_of: String,
    pub groups: Vec<AssetGroup>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum VerificationResult {
    Ok,
    Missing,
    InvalidImage,
    WrongDimensions { width: u32, height: u32 },
}

impl VerificationResult {
    pub fn is_ok(&self) -> bool {
        matches!(self, VerificationResult::Ok)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MountAnnotation {
    pub mount: String,
    pub tracked: bool,
}

#[derive(Debug, Serialize)]
pub struct FileReport {
    pub relative_path: String,
    pub generator: GeneratorKind,
    pub expected_width: u32,
    pub expected_height: u32,
    #[serde(flatten)]
    pub result: VerificationResult,
    pub mount: Option<MountAnnotation>,
}

#[derive(Debug, Serialize)]
pub struct GroupReport {
    pub name: String,
    pub files: Vec<FileReport>,
}

#[derive(Debug, Default, Serialize, PartialEq, Eq)]
pub struct VerifySummary {
    pub total: usize,
    pub ok: usize,
    pub failed: usize,
}

#[derive(Debug, Serialize)]
pub struct VerifyReport {
    pub root: String,
    pub assets_of: String,
    pub filter: Option<GeneratorKind>,
    pub groups: Vec<GroupReport>,
    pub summary: VerifySummary,
}

#[derive(Serialize)]
pub struct ModeReport {
    pub name: String,
    pub folder: String,
    pub installed: bool,
    pub files: usize,
}

//! Best-effort "is this file wired into the platform project" annotations.
//!
//! A probe claims files by platform and checks whether the platform's own
//! manifest references them. Nothing here can fail a verification run: read
//! or parse errors simply report the file as not tracked.

use crate::domain::models::{ExpectedFile, MountAnnotation};
use crate::services::paths::strip_folder;
use std::path::Path;

pub trait MountProbe {
    fn mount(&self) -> &'static str;
    fn claims(&self, file: &ExpectedFile) -> bool;
    fn is_tracked(&self, root: &Path, file: &ExpectedFile) -> bool;
}

/// Cordova icons and splashscreens are declared as `src="..."` attributes in
/// `src-cordova/config.xml`, relative to `src-cordova`.
pub struct CordovaConfigProbe;

const CORDOVA_FOLDER: &str = "src-cordova";

impl MountProbe for CordovaConfigProbe {
    fn mount(&self) -> &'static str {
        "cordova"
    }

    fn claims(&self, file: &ExpectedFile) -> bool {
        file.platform
            .as_deref()
            .map(|p| p.starts_with("cordova-"))
            .unwrap_or(false)
    }

    fn is_tracked(&self, root: &Path, file: &ExpectedFile) -> bool {
        let Some(rel) = strip_folder(&file.relative_path, CORDOVA_FOLDER) else {
            return false;
        };
        let Ok(config) = std::fs::read_to_string(root.join(CORDOVA_FOLDER).join("config.xml"))
        else {
            return false;
        };
        let tracked = xml_src_values(&config).any(|src| src.trim_start_matches("./") == rel);
        tracked
    }
}

/// Values of every `src` attribute in `xml`, single or double quoted, with
/// optional whitespace around `=`.
fn xml_src_values(xml: &str) -> impl Iterator<Item = &str> {
    xml.match_indices("src").filter_map(move |(at, _)| {
        let preceded_by_space = xml[..at]
            .chars()
            .next_back()
            .is_some_and(char::is_whitespace);
        if !preceded_by_space {
            return None;
        }
        let rest = xml[at + 3..].trim_start().strip_prefix('=')?.trim_start();
        let quote = rest.chars().next().filter(|c| *c == '"' || *c == '\'')?;
        let body = &rest[1..];
        body.find(quote).map(|end| body[..end].trim())
    })
}

/// Browser extension icons are listed (anywhere) in `src-bex/manifest.json`,
/// relative to `src-bex`.
pub struct BexManifestProbe;

const BEX_FOLDER: &str = "src-bex";

fn json_mentions(value: &serde_json::Value, needle: &str) -> bool {
    match value {
        serde_json::Value::String(s) => s.trim_start_matches("./") == needle,
        serde_json::Value::Array(items) => items.iter().any(|v| json_mentions(v, needle)),
        serde_json::Value::Object(map) => map.values().any(|v| json_mentions(v, needle)),
        _ => false,
    }
}

impl MountProbe for BexManifestProbe {
    fn mount(&self) -> &'static str {
        "bex"
    }

    fn claims(&self, file: &ExpectedFile) -> bool {
        file.platform.as_deref() == Some("bex")
    }

    fn is_tracked(&self, root: &Path, file: &ExpectedFile) -> bool {
        let Some(rel) = strip_folder(&file.relative_path, BEX_FOLDER) else {
            return false;
        };
        let Ok(raw) = std::fs::read_to_string(root.join(BEX_FOLDER).join("manifest.json")) else {
            return false;
        };
        let Ok(manifest) = serde_json::from_str::<serde_json::Value>(&raw) else {
            return false;
        };
        json_mentions(&manifest, rel)
    }
}

pub struct MountRegistry {
    probes: Vec<Box<dyn MountProbe>>,
}

impl MountRegistry {
    pub fn builtin() -> Self {
        Self {
            probes: vec![Box::new(CordovaConfigProbe), Box::new(BexManifestProbe)],
        }
    }

    /// First claiming probe answers; unclaimed files carry no annotation.
    pub fn annotation(&self, root: &Path, file: &ExpectedFile) -> Option<MountAnnotation> {
        let probe = self.probes.iter().find(|p| p.claims(file))?;
        Some(MountAnnotation {
            mount: probe.mount().to_string(),
            tracked: probe.is_tracked(root, file),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::GeneratorKind;
    use std::fs;
    use tempfile::TempDir;

    fn file(rel: &str, platform: Option<&str>) -> ExpectedFile {
        ExpectedFile {
            absolute_path: Path::new("/app").join(rel),
            relative_path: rel.to_string(),
            generator: GeneratorKind::Png,
            width: 36,
            height: 36,
            platform: platform.map(str::to_string),
        }
    }

    #[test]
    fn cordova_files_referenced_in_config_xml_are_tracked() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("src-cordova")).unwrap();
        fs::write(
            tmp.path().join("src-cordova/config.xml"),
            r#"<widget><platform name="android"><icon density="ldpi" src="res/android/icon-36x36.png" /></platform></widget>"#,
        )
        .unwrap();

        let reg = MountRegistry::builtin();
        let tracked = reg.annotation(
            tmp.path(),
            &file("src-cordova/res/android/icon-36x36.png", Some("cordova-android")),
        );
        assert_eq!(
            tracked,
            Some(MountAnnotation {
                mount: "cordova".to_string(),
                tracked: true
            })
        );

        let untracked = reg
            .annotation(
                tmp.path(),
                &file("src-cordova/res/android/icon-48x48.png", Some("cordova-android")),
            )
            .expect("claimed by cordova");
        assert!(!untracked.tracked);
    }

    #[test]
    fn cordova_src_attribute_quoting_and_spacing_are_tolerated() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("src-cordova")).unwrap();
        fs::write(
            tmp.path().join("src-cordova/config.xml"),
            "<widget>\n  <icon density='ldpi' src = 'res/android/icon-36x36.png'/>\n  <splash\n    src=\"./res/screen/ios/Default@2x~universal~anyany.png\" />\n  <icon data-src=\"res/android/icon-48x48.png\"/>\n</widget>",
        )
        .unwrap();

        let reg = MountRegistry::builtin();
        let tracked = |rel: &str| {
            reg.annotation(tmp.path(), &file(rel, Some("cordova-android")))
                .expect("claimed by cordova")
                .tracked
        };
        assert!(tracked("src-cordova/res/android/icon-36x36.png"));
        assert!(tracked("src-cordova/res/screen/ios/Default@2x~universal~anyany.png"));
        assert!(!tracked("src-cordova/res/android/icon-48x48.png"));
    }

    #[test]
    fn missing_platform_manifest_means_untracked() {
        let tmp = TempDir::new().unwrap();
        let a = MountRegistry::builtin()
            .annotation(
                tmp.path(),
                &file("src-cordova/res/ios/icon-20x20.png", Some("cordova-ios")),
            )
            .expect("claimed by cordova");
        assert!(!a.tracked);
    }

    #[test]
    fn bex_icons_listed_in_manifest_are_tracked() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("src-bex")).unwrap();
        fs::write(
            tmp.path().join("src-bex/manifest.json"),
            r#"{"icons":{"16":"icons/icon-16x16.png"},"action":{"default_icon":["./icons/icon-48x48.png"]}}"#,
        )
        .unwrap();

        let reg = MountRegistry::builtin();
        for rel in ["src-bex/icons/icon-16x16.png", "src-bex/icons/icon-48x48.png"] {
            let a = reg.annotation(tmp.path(), &file(rel, Some("bex"))).unwrap();
            assert_eq!(a.mount, "bex");
            assert!(a.tracked, "{rel} should be tracked");
        }
        let a = reg
            .annotation(tmp.path(), &file("src-bex/icons/icon-128x128.png", Some("bex")))
            .unwrap();
        assert!(!a.tracked);
    }

    #[test]
    fn broken_bex_manifest_is_not_fatal() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("src-bex")).unwrap();
        fs::write(tmp.path().join("src-bex/manifest.json"), "{ nope").unwrap();
        let a = MountRegistry::builtin()
            .annotation(tmp.path(), &file("src-bex/icons/icon-16x16.png", Some("bex")))
            .unwrap();
        assert!(!a.tracked);
    }

    #[test]
    fn files_without_platform_have_no_annotation() {
        let reg = MountRegistry::builtin();
        assert_eq!(
            reg.annotation(Path::new("/app"), &file("public/favicon.ico", None)),
            None
        );
        assert_eq!(
            reg.annotation(Path::new("/app"), &file("icons/x.png", Some("electron"))),
            None
        );
    }
}

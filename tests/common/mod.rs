#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use image::RgbaImage;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub app: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");

        let app = tmp.path().join("app");
        fs::create_dir_all(&app).expect("create app root");
        fs::write(app.join("package.json"), r#"{"name":"fixture-app"}"#)
            .expect("write root marker");

        Self {
            _tmp: tmp,
            home,
            app,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("iconverify");
        cmd.env("HOME", &self.home)
            .env_remove("RUST_LOG")
            .current_dir(&self.app);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_text(&self, args: &[&str]) -> String {
        let out = self
            .cmd()
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        String::from_utf8(out).expect("utf8 output")
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.app.join(rel)
    }

    pub fn install(&self, folder: &str) {
        fs::create_dir_all(self.path(folder)).expect("create mode folder");
    }

    pub fn write_png(&self, rel: &str, width: u32, height: u32) {
        write_png(&self.path(rel), width, height);
    }

    pub fn write_file(&self, rel: &str, contents: &str) {
        let p = self.path(rel);
        fs::create_dir_all(p.parent().expect("file parent")).expect("create parent dir");
        fs::write(p, contents).expect("write file");
    }

    pub fn write_settings(&self, toml: &str) {
        let p = self.home.join(".config/iconverify/config.toml");
        fs::create_dir_all(p.parent().expect("settings parent")).expect("create settings dir");
        fs::write(p, toml).expect("write settings");
    }

    /// Electron mode with every asset present: icns, ico, and both 512px pngs,
    /// except `linux-512x512.png` which is written at 256px.
    pub fn electron_fixture(&self) {
        self.install("src-electron");
        self.write_file("src-electron/icons/icon.icns", "icns");
        self.write_file("src-electron/icons/icon.ico", "ico");
        self.write_png("src-electron/icons/icon.png", 512, 512);
        self.write_png("src-electron/icons/linux-512x512.png", 256, 256);
    }
}

pub fn write_png(path: &Path, width: u32, height: u32) {
    fs::create_dir_all(path.parent().expect("png parent")).expect("create png dir");
    RgbaImage::new(width, height)
        .save(path)
        .expect("write png fixture");
}

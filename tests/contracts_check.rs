mod common;

use common::TestEnv;
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

fn load_schema(name: &str) -> Value {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let raw = fs::read_to_string(root.join("docs/contracts").join(name)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn validate(schema_name: &str, data: &Value) {
    let schema = load_schema(schema_name);
    let validator = JSONSchema::compile(&schema).expect("compile schema");
    let msgs: Vec<String> = match validator.validate(data) {
        Ok(()) => return,
        Err(errors) => errors.map(|e| e.to_string()).collect(),
    };
    panic!("schema validation failed: {}", msgs.join(" | "));
}

#[test]
fn contracts_check() {
    let env = TestEnv::new();
    env.electron_fixture();
    env.install("src-cordova");
    env.write_file("src-electron/icons/icon.png", "not a png");

    let verify = env.run_json(&["verify", "--mode", "electron,cordova"]);
    assert_eq!(verify["ok"], true);
    validate("verify.schema.json", &verify["data"]);

    let filtered = env.run_json(&["verify", "--mode", "electron", "--filter", "png"]);
    assert_eq!(filtered["ok"], true);
    validate("verify.schema.json", &filtered["data"]);

    let modes = env.run_json(&["modes"]);
    assert_eq!(modes["ok"], true);
    validate("modes.schema.json", &modes["data"]);

    let out = env
        .cmd()
        .args(["--json", "verify", "--profile", "missing-profile"])
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();
    let err: Value = serde_json::from_slice(&out).expect("error json output");
    validate("error.schema.json", &err);
}

//! Exports the locked versions of the runtime crates so the handler can report them.
//! Falls back to `unknown` when the workspace lock file cannot be read, e.g. when built from a packaged crate.
use std::env::var;
use std::fs;
use std::path::PathBuf;

/// (crate name in Cargo.lock, env var visible to `env!` in the crate)
const REPORTED_CRATES: [(&str, &str); 2] = [
    ("lambda_runtime", "LAMBDA_RUNTIME_VERSION"),
    ("lambda_runtime_api_client", "LAMBDA_RUNTIME_API_CLIENT_VERSION"),
];

fn main() {
    let manifest_dir = PathBuf::from(var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR is always set by cargo"));
    let lock_path = manifest_dir.join("..").join("Cargo.lock");
    println!("cargo:rerun-if-changed={}", lock_path.display());
    println!("cargo:rerun-if-changed=build.rs");

    let lock = fs::read_to_string(&lock_path)
        .ok()
        .and_then(|contents| toml::from_str::<toml::Table>(&contents).ok());

    for (crate_name, env_name) in REPORTED_CRATES {
        let version = lock
            .as_ref()
            .and_then(|lock| locked_version(lock, crate_name))
            .unwrap_or_else(|| "unknown".to_string());
        println!("cargo:rustc-env={env_name}={version}");
    }
}

/// Returns the version of the first `[[package]]` entry named `crate_name`.
fn locked_version(lock: &toml::Table, crate_name: &str) -> Option<String> {
    lock.get("package")?
        .as_array()?
        .iter()
        .filter_map(|package| package.as_table())
        .find(|package| package.get("name").and_then(|v| v.as_str()) == Some(crate_name))
        .and_then(|package| package.get("version"))
        .and_then(|v| v.as_str())
        .map(str::to_owned)
}

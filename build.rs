//! Build script for inbox-ingest
//!
//! Stamps the binary with the metadata served by `GET /version`:
//! `INGEST_BUILD_TIME`, `INGEST_GIT_HASH`, `INGEST_BUILD_PROFILE` and
//! `INGEST_RUSTC_VERSION`. Container builds without a `.git` directory can
//! pass `INGEST_GIT_HASH` in the environment instead.

use std::process::Command;

fn main() {
    let build_time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    emit("INGEST_BUILD_TIME", build_time.to_string());

    let git_hash = std::env::var("INGEST_GIT_HASH")
        .ok()
        .filter(|hash| !hash.trim().is_empty())
        .or_else(git_revision)
        .unwrap_or_else(|| "unknown".to_string());
    emit("INGEST_GIT_HASH", git_hash);

    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string());
    emit("INGEST_BUILD_PROFILE", profile);

    let rustc = std::env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let rustc_version = command_output(&rustc, &["--version"]).unwrap_or_else(|| "unknown".to_string());
    emit("INGEST_RUSTC_VERSION", rustc_version);

    println!("cargo:rerun-if-env-changed=INGEST_GIT_HASH");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");
    println!("cargo:rerun-if-changed=Cargo.toml");
}

fn emit(key: &str, value: String) {
    println!("cargo:rustc-env={}={}", key, value);
}

/// Short commit hash, suffixed with `-dirty` when the worktree has changes
fn git_revision() -> Option<String> {
    if std::env::var("DOCS_RS").is_ok() {
        return None;
    }

    let hash = command_output("git", &["rev-parse", "--short", "HEAD"])?;
    let dirty = command_output("git", &["status", "--porcelain", "--untracked-files=no"])
        .is_some_and(|status| !status.is_empty());

    Some(if dirty { format!("{}-dirty", hash) } else { hash })
}

fn command_output(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|text| text.trim().to_string())
}

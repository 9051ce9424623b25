use chrono::Utc;
use std::{env, fs, process::Command};

fn main() {
    println!("cargo:rerun-if-changed=VERSION");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads");

    set_build_metadata();
}

/// Stamps the five provenance fields into the binary via `cargo:rustc-env`.
/// A field that cannot be determined is left unset; the runtime reads each
/// one with `option_env!` and substitutes the `Unknown` sentinel.
fn set_build_metadata() {
    let version = fs::read_to_string("VERSION")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());
    println!("cargo:rustc-env=BUILDINFO_VERSION={}", version);

    if let Some(revision) = git_output(&["rev-parse", "--short", "HEAD"]) {
        println!("cargo:rustc-env=BUILDINFO_REVISION={}", revision);
    }

    if let Some(url) = git_output(&["remote", "get-url", "origin"]) {
        println!("cargo:rustc-env=BUILDINFO_URL={}", url);
    }

    if let Some(user) = env::var("USER").ok().or_else(|| env::var("USERNAME").ok()) {
        println!("cargo:rustc-env=BUILDINFO_USER={}", user);
    }

    let date = Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
    println!("cargo:rustc-env=BUILDINFO_DATE={}", date);
}

fn git_output(args: &[&str]) -> Option<String> {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .filter(|s| !s.is_empty())
}

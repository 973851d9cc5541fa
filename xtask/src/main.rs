// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Custom cargo commands for plotfinder.
//!
//! Usage:
//!   cargo xtask verify           - Format check, clippy, tests
//!   cargo xtask test             - Run all tests
//!   cargo xtask check            - Quick check
//!   cargo xtask bench            - Run benchmarks
//!   cargo xtask fuzz <target> [seconds]

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

const FUZZ_TARGETS: &[&str] = &[
    "search_queries",
    "deep_link",
    "geojson_loading",
    "section_ordering",
];

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => {
            let target = args.next();
            let seconds = args.next();
            fuzz(target.as_deref(), seconds.as_deref())?
        }
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Full suite: rustfmt --check, clippy -D warnings, all tests
  test      Run all Rust tests
  check     Quick check (cargo check + tests)
  bench     Run criterion benchmarks
  fuzz      Run a fuzz target: fuzz <target|all> [seconds, default 60]

Fuzz targets: {}
"#,
        FUZZ_TARGETS.join(", ")
    );
}

fn verify() -> Result<()> {
    println!("==========================================");
    println!("plotfinder verification suite");
    println!("==========================================\n");

    println!("[1/3] Checking formatting...");
    run_cargo(&["fmt", "--all", "--", "--check"])?;
    println!("✓ Formatting clean\n");

    println!("[2/3] Running clippy...");
    run_cargo(&["clippy", "--workspace", "--all-targets", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[3/3] Running tests...");
    run_cargo(&["test", "--workspace", "--quiet"])?;
    println!("✓ All tests passed\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");
    Ok(())
}

fn test() -> Result<()> {
    run_cargo(&["test", "--workspace"])
}

fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/2] cargo check...");
    run_cargo(&["check", "--workspace", "--all-targets"])?;

    println!("[2/2] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Run one fuzz target (or all of them) for a bounded time.
fn fuzz(target: Option<&str>, seconds: Option<&str>) -> Result<()> {
    let seconds: u64 = match seconds {
        Some(s) => s
            .parse()
            .with_context(|| format!("invalid fuzz duration {:?}", s))?,
        None => 60,
    };

    let targets: Vec<&str> = match target {
        Some("all") => FUZZ_TARGETS.to_vec(),
        Some(name) if FUZZ_TARGETS.contains(&name) => vec![name],
        Some(name) => bail!("unknown fuzz target {:?}; expected one of {:?}", name, FUZZ_TARGETS),
        None => bail!("missing fuzz target; expected one of {:?} or \"all\"", FUZZ_TARGETS),
    };

    let max_time = format!("-max_total_time={}", seconds);
    for target in targets {
        println!("Fuzzing {} for {}s...", target, seconds);
        run_cargo(&["+nightly", "fuzz", "run", target, "--", &max_time])?;
    }
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::{Command, Output};
use std::time::Instant;

/// Every step of `cargo xtask check`, in run order. Any failure stops the run.
const STEPS: &[(&str, &[&str])] = &[
    (
        "no_std target (thumbv7em)",
        &["check", "-p", "ringbuffer", "--target", "thumbv7em-none-eabihf"],
    ),
    (
        "no_std target with defmt",
        &[
            "check",
            "-p",
            "ringbuffer",
            "--target",
            "thumbv7em-none-eabihf",
            "--features",
            "defmt",
        ],
    ),
    (
        "host workspace (std + tracing)",
        &[
            "check",
            "--workspace",
            "--all-targets",
            "--features",
            "ringbuffer/std,ringbuffer/tracing",
        ],
    ),
    (
        "clippy lints",
        &[
            "clippy",
            "--workspace",
            "--all-targets",
            "--features",
            "ringbuffer/std,ringbuffer/tracing",
            "--",
            "-D",
            "warnings",
        ],
    ),
    ("formatting", &["fmt", "--all", "--check"]),
];

pub fn run() -> Result<()> {
    println!();
    println!("{}", "🔍 Checking ring buffer builds...".cyan().bold());
    println!();

    let total_start = Instant::now();

    for (label, args) in STEPS {
        cargo_step(label, args)?;
    }

    println!(
        "{}",
        format!(
            "✓ All checks completed in {:.2}s",
            total_start.elapsed().as_secs_f64()
        )
        .green()
        .bold()
    );
    println!();

    Ok(())
}

/// Run one `cargo` invocation, failing the whole check if it fails.
fn cargo_step(label: &str, args: &[&str]) -> Result<()> {
    println!("{}", format!("  Checking {label}...").cyan());
    let start = Instant::now();

    let output = Command::new("cargo")
        .args(args)
        .output()
        .with_context(|| format!("Failed to run cargo for {label}"))?;

    require_success(label, &output)?;

    println!(
        "{}",
        format!(
            "  ✓ {label} passed in {:.2}s",
            start.elapsed().as_secs_f64()
        )
        .green()
    );
    println!();
    Ok(())
}

fn require_success(label: &str, output: &Output) -> Result<()> {
    if output.status.success() {
        return Ok(());
    }
    eprintln!("{}", format!("  ✗ {label} failed").red().bold());
    eprintln!();
    eprintln!("{}", String::from_utf8_lossy(&output.stderr));
    if label == "formatting" {
        eprintln!("     Run 'cargo fmt --all' to fix");
    }
    anyhow::bail!("{label} check failed")
}

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;
use std::process::Command;
use std::time::Instant;

/// One rustdoc pass over the feature matrix.
struct DocBuild {
    label: &'static str,
    target: Option<&'static str>,
    features: &'static str,
}

/// Host docs include the `std::io` adapters; the embedded pass proves the
/// `no_std` + `defmt` surface documents without broken links.
const BUILDS: [DocBuild; 2] = [
    DocBuild {
        label: "host API (std + tracing)",
        target: None,
        features: "ringbuffer/std,ringbuffer/tracing",
    },
    DocBuild {
        label: "no_std API (thumbv7em + defmt)",
        target: Some("thumbv7em-none-eabihf"),
        features: "ringbuffer/defmt",
    },
];

pub fn run(open: bool) -> Result<()> {
    println!();
    println!("{}", "📚 Building ring buffer documentation...".cyan().bold());
    println!();

    let total_start = Instant::now();

    for build in &BUILDS {
        // Only the host pass can be opened in a browser.
        doc_step(build, open && build.target.is_none())?;
    }

    let index = index_path(None);
    if !index.exists() {
        anyhow::bail!("rustdoc finished but {} is missing", index.display());
    }

    println!(
        "{}",
        format!(
            "✓ Documentation built in {:.2}s",
            total_start.elapsed().as_secs_f64()
        )
        .green()
        .bold()
    );

    if !open {
        println!();
        println!(
            "   {}",
            format!("Open {} in your browser", index.display()).dimmed()
        );
        println!("   {}", "Or run 'cargo xtask doc --open'".dimmed());
    }

    println!();

    Ok(())
}

fn doc_step(build: &DocBuild, open: bool) -> Result<()> {
    println!("{}", format!("  Documenting {}...", build.label).cyan());
    let start = Instant::now();

    let output = Command::new("cargo")
        .args(doc_args(build, open))
        .env("RUSTDOCFLAGS", "-D rustdoc::broken_intra_doc_links")
        .output()
        .with_context(|| format!("Failed to run rustdoc for {}", build.label))?;

    if !output.status.success() {
        eprintln!("{}", format!("  ✗ {} failed", build.label).red().bold());
        eprintln!();
        eprintln!("{}", String::from_utf8_lossy(&output.stderr));
        anyhow::bail!("Documentation build failed for {}", build.label);
    }

    println!(
        "{}",
        format!(
            "  ✓ {} documented in {:.2}s",
            build.label,
            start.elapsed().as_secs_f64()
        )
        .green()
    );
    println!();
    Ok(())
}

fn doc_args(build: &DocBuild, open: bool) -> Vec<&'static str> {
    let mut args = vec!["doc", "-p", "ringbuffer", "--no-deps", "--features", build.features];
    if let Some(target) = build.target {
        args.extend(["--target", target]);
    }
    if open {
        args.push("--open");
    }
    args
}

/// Where rustdoc writes the crate index for `target` (`None` = host).
fn index_path(target: Option<&str>) -> PathBuf {
    let mut path = PathBuf::from("target");
    if let Some(triple) = target {
        path.push(triple);
    }
    path.join("doc").join("ringbuffer").join("index.html")
}

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Crates each workspace member may depend on. Anything else internal is a layering violation.
const ALLOWED_INTERNAL_DEPS: &[(&str, &[&str])] = &[
    ("gcms-domain", &[]),
    ("gcms-shared", &["gcms-domain"]),
    ("gcms-client", &["gcms-domain", "gcms-shared"]),
];

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    manifest_path: PathBuf,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;

    let mut violations = dependency_violations(&metadata);

    if let Some(domain) = metadata.packages.iter().find(|p| p.name == "gcms-domain") {
        let src = domain
            .manifest_path
            .parent()
            .map(|dir| dir.join("src"))
            .context("domain manifest has no parent directory")?;
        violations.extend(source_violations(&src)?);
    }

    if violations.is_empty() {
        println!("arch-check: ok");
        return Ok(());
    }

    for violation in &violations {
        eprintln!("arch-check: {violation}");
    }
    anyhow::bail!("{} layering violation(s)", violations.len())
}

fn dependency_violations(metadata: &Metadata) -> Vec<String> {
    let allowed: HashMap<&str, &[&str]> = ALLOWED_INTERNAL_DEPS.iter().copied().collect();
    let mut violations = Vec::new();

    for package in &metadata.packages {
        let Some(allowed_deps) = allowed.get(package.name.as_str()) else {
            continue;
        };
        for dep in &package.dependencies {
            let internal = allowed.contains_key(dep.name.as_str());
            if internal && !allowed_deps.contains(&dep.name.as_str()) {
                violations.push(format!("{} must not depend on {}", package.name, dep.name));
            }
        }
    }

    violations
}

/// The domain crate must not name the outer crates even through a path.
fn source_violations(dir: &Path) -> anyhow::Result<Vec<String>> {
    let pattern = regex_lite::Regex::new(r"\bgcms_(shared|client)\b")
        .context("compiling import pattern")?;
    let mut violations = Vec::new();

    for entry in std::fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            violations.extend(source_violations(&path)?);
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some("rs") {
            continue;
        }

        let source = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        for (line_no, line) in source.lines().enumerate() {
            if let Some(found) = pattern.find(line) {
                violations.push(format!(
                    "{}:{} references {}",
                    path.display(),
                    line_no + 1,
                    found.as_str()
                ));
            }
        }
    }

    Ok(violations)
}

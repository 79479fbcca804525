use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;
use zonepath::cfg::{EPS, UNREACHABLE};
use zonepath::rand::{draw_instance, InstanceCfg, ReplayToken};
use zonepath::{solve, Instance, Solution};

mod provenance;

#[derive(Parser)]
#[command(name = "zonepath")]
#[command(about = "Shortest path that stays inside a union of disks")]
struct Cmd {
    /// Without a subcommand: solve the instance on stdin and print its length
    #[command(subcommand)]
    action: Option<Action>,
}

#[derive(Subcommand)]
enum Action {
    /// Solve one instance from a file or stdin
    Solve {
        #[arg(long)]
        input: Option<PathBuf>,
        /// Print a JSON report instead of the bare length
        #[arg(long)]
        json: bool,
        /// Also write the JSON report (plus provenance sidecar) to this path
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a random instance in the input format
    Generate {
        #[arg(long, default_value_t = 12)]
        zones: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 10.0)]
        extent: f64,
        #[arg(long, default_value_t = 1.0)]
        radius_min: f64,
        #[arg(long, default_value_t = 4.0)]
        radius_max: f64,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    // stdout carries only the result; logs go to stderr
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        None => run_solve(None, false, None),
        Some(Action::Solve { input, json, out }) => run_solve(input, json, out),
        Some(Action::Generate {
            zones,
            seed,
            index,
            extent,
            radius_min,
            radius_max,
        }) => generate(
            InstanceCfg {
                zones,
                extent,
                radius_min,
                radius_max,
            },
            ReplayToken { seed, index },
        ),
        Some(Action::Report) => report(),
    }
}

/// What `solve --json` prints and `solve --out` writes.
#[derive(Debug, Serialize)]
struct Report {
    length: f64,
    formatted: String,
    reachable: bool,
    zones: usize,
    vertices: usize,
    edges: usize,
}

impl Report {
    fn new(inst: &Instance, sol: &Solution) -> Self {
        Self {
            length: sol.length,
            formatted: sol.formatted(),
            reachable: sol.is_reachable(),
            zones: inst.zones.len(),
            vertices: sol.vertices,
            edges: sol.edges,
        }
    }
}

fn run_solve(input: Option<PathBuf>, json: bool, out: Option<PathBuf>) -> Result<()> {
    let text = read_input(input.as_deref())?;
    let report = solve_text(&text)?;
    if let Some(out) = &out {
        write_report(out, &report, input.as_deref())?;
    }
    let mut stdout = io::stdout().lock();
    render(&mut stdout, &report, json)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => {
            std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn solve_text(text: &str) -> Result<Report> {
    let inst = Instance::parse(text).context("parsing instance")?;
    let sol = solve(&inst);
    tracing::info!(
        zones = inst.zones.len(),
        vertices = sol.vertices,
        edges = sol.edges,
        reachable = sol.is_reachable(),
        "solve"
    );
    Ok(Report::new(&inst, &sol))
}

/// Bare length has no trailing newline.
fn render<W: Write>(w: &mut W, report: &Report, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *w, report)?;
        writeln!(w)?;
    } else {
        write!(w, "{}", report.formatted)?;
    }
    w.flush()?;
    Ok(())
}

fn write_report(out: &Path, report: &Report, input: Option<&Path>) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(report)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let input_name = input
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<stdin>".to_string());
    let payload = provenance::Payload::new(json!({ "eps": EPS, "unreachable": UNREACHABLE }))
        .with_input(input_name);
    let sidecar = provenance::write_sidecar(out, payload)?;
    tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "report_written");
    Ok(())
}

fn generate(cfg: InstanceCfg, tok: ReplayToken) -> Result<()> {
    tracing::info!(zones = cfg.zones, seed = tok.seed, index = tok.index, "generate");
    let inst = draw_instance(cfg, tok);
    let mut stdout = io::stdout().lock();
    stdout.write_all(inst.to_input_string().as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "version": zonepath::VERSION,
        "eps": EPS,
        "unreachable": UNREACHABLE,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    fn rendered(text: &str, json: bool) -> String {
        let report = solve_text(text).unwrap();
        let mut buf = Vec::new();
        render(&mut buf, &report, json).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn bare_length_without_newline() {
        assert_eq!(rendered("0 0\n10 0\n1\n5 0 6\n", false), "10.0000000000");
        assert_eq!(rendered("0 0\n10 0\n0\n", false), "10000000000.0000000000");
        assert_eq!(
            rendered("-5 0\n15 0\n2\n0 0 5\n10 0 5\n", false),
            "20.0000000000"
        );
    }

    #[test]
    fn json_report_fields() {
        let out = rendered("-5 0\n15 0\n2\n0 0 5\n10 0 5\n", true);
        let v: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["reachable"], true);
        assert_eq!(v["zones"], 2);
        assert_eq!(v["vertices"], 3);
        assert_eq!(v["formatted"], "20.0000000000");
    }

    #[test]
    fn malformed_input_is_an_error() {
        let err = solve_text("0 0\n10 0\n3\n1 1 1\n").unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains("parsing instance"));
        assert!(chain.contains("zones[1]"));
    }

    #[test]
    fn report_file_and_sidecar() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("runs").join("r.json");
        let report = solve_text("0 0\n10 0\n1\n5 0 6\n").unwrap();
        write_report(&out, &report, None).unwrap();
        let parsed: Value = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed["formatted"], "10.0000000000");
        assert!(dir.path().join("runs").join("r.provenance.json").exists());
    }
}

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use squarepack::api::{
    train_with, write_svg, ActionBounds, EpisodeStats, PackingSurface, RandomAgent, RenderCfg,
    TrainCfg,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod provenance;

#[derive(Parser)]
#[command(name = "squarepack")]
#[command(about = "Unit-square packing environment and training driver")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Run training episodes with the random placeholder agent
    Train(TrainArgs),
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Clone, Debug)]
struct TrainArgs {
    /// Number of episodes
    #[arg(long, default_value_t = 1)]
    episodes: usize,
    /// Target number of squares per episode
    #[arg(long, default_value_t = 10)]
    squares: usize,
    /// Step budget per episode before it is truncated
    #[arg(long, default_value_t = 10_000)]
    max_attempts: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Write a JSON summary of every episode here
    #[arg(long)]
    out: Option<PathBuf>,
    /// Render the last episode's surface as SVG here
    #[arg(long)]
    svg: Option<PathBuf>,
    #[arg(long, default_value_t = 600)]
    size_px: u32,
}

impl TrainArgs {
    fn cfg(&self) -> TrainCfg {
        TrainCfg {
            episodes: self.episodes,
            squares: self.squares,
            max_attempts: self.max_attempts,
        }
    }

    fn params(&self) -> serde_json::Value {
        serde_json::json!({
            "episodes": self.episodes,
            "squares": self.squares,
            "max_attempts": self.max_attempts,
            "agent": "random",
        })
    }
}

#[derive(Serialize)]
struct Summary<'a> {
    episodes: &'a [EpisodeStats],
    mean_density: f64,
    truncated: usize,
}

fn main() -> Result<()> {
    let directives = std::env::var("RUST_LOG").unwrap_or_default();
    SubscriberBuilder::default()
        .with_env_filter(log_filter(&directives)?)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Train(args) => train(&args).map(|_| ()),
        Action::Report => report(),
    }
}

/// `RUST_LOG`-style directives on top of an `info` default.
fn log_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse(directives)
        .with_context(|| format!("parsing log directives {directives:?}"))
}

fn train(args: &TrainArgs) -> Result<Vec<EpisodeStats>> {
    let cfg = args.cfg();
    tracing::info!(
        episodes = cfg.episodes,
        squares = cfg.squares,
        max_attempts = cfg.max_attempts,
        seed = args.seed,
        "train"
    );
    let mut env = PackingSurface::new();
    let mut agent = RandomAgent::new(ActionBounds::default(), args.seed)?;
    let stats = train_with(&mut env, &mut agent, &cfg, |s| {
        tracing::info!(
            episode = s.episode + 1,
            of = cfg.episodes,
            placed = s.placed,
            attempts = s.attempts,
            side = s.side,
            density = s.density,
            "progress"
        );
    })?;
    anyhow::ensure!(!env.has_overlaps(), "surface holds overlapping squares");

    if let Some(out) = &args.out {
        write_summary(out, &stats)?;
        provenance::write_sidecar(out, payload(args))?;
    }
    if let Some(svg) = &args.svg {
        ensure_parent(svg)?;
        let render = RenderCfg {
            size_px: args.size_px,
            ..RenderCfg::default()
        };
        write_svg(svg, &env, &render).with_context(|| format!("writing {}", svg.display()))?;
        provenance::write_sidecar(svg, payload(args))?;
        tracing::info!(path = %svg.display(), "svg");
    }
    Ok(stats)
}

fn payload(args: &TrainArgs) -> provenance::Payload {
    provenance::Payload::new(args.params()).with_seed(args.seed)
}

fn write_summary(out: &Path, stats: &[EpisodeStats]) -> Result<()> {
    ensure_parent(out)?;
    let mean_density = if stats.is_empty() {
        0.0
    } else {
        stats.iter().map(|s| s.density).sum::<f64>() / stats.len() as f64
    };
    let summary = Summary {
        episodes: stats,
        mean_density,
        truncated: stats.iter().filter(|s| s.truncated).count(),
    };
    std::fs::write(out, serde_json::to_vec_pretty(&summary)?)
        .with_context(|| format!("writing {}", out.display()))?;
    tracing::info!(path = %out.display(), mean_density, "summary");
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

fn report() -> Result<()> {
    let mut obj = provenance::header();
    obj["params"] = serde_json::json!({});
    obj["outputs"] = serde_json::json!([]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn args(dir: &Path) -> TrainArgs {
        TrainArgs {
            episodes: 2,
            squares: 4,
            max_attempts: 5_000,
            seed: 3,
            out: Some(dir.join("runs/summary.json")),
            svg: Some(dir.join("runs/final.svg")),
            size_px: 200,
        }
    }

    #[test]
    fn cli_parses_train_flags() {
        let cmd = Cmd::try_parse_from([
            "squarepack",
            "train",
            "--episodes",
            "3",
            "--squares",
            "7",
        ])
        .unwrap();
        match cmd.action {
            Action::Train(a) => {
                assert_eq!(a.episodes, 3);
                assert_eq!(a.squares, 7);
                assert_eq!(a.max_attempts, 10_000);
                assert!(a.out.is_none());
            }
            Action::Report => panic!("expected train"),
        }
    }

    #[test]
    fn log_filter_defaults_to_info_and_enables_library_targets() {
        assert_eq!(log_filter("").unwrap().max_level_hint(), Some(LevelFilter::INFO));
        let f = log_filter("squarepack::train=debug,squarepack::surface=trace").unwrap();
        assert_eq!(f.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn train_writes_summary_svg_and_sidecars() {
        let dir = tempdir().unwrap();
        let a = args(dir.path());
        let stats = train(&a).unwrap();
        assert_eq!(stats.len(), 2);
        assert!(stats.iter().all(|s| s.placed == 4));

        let summary: serde_json::Value =
            serde_json::from_slice(&std::fs::read(dir.path().join("runs/summary.json")).unwrap())
                .unwrap();
        assert_eq!(summary["episodes"].as_array().unwrap().len(), 2);
        assert_eq!(summary["truncated"], 0);

        let svg = std::fs::read_to_string(dir.path().join("runs/final.svg")).unwrap();
        assert_eq!(svg.matches(r#"class="square""#).count(), 4);
        assert!(dir.path().join("runs/summary.provenance.json").exists());
        assert!(dir.path().join("runs/final.provenance.json").exists());
    }

    #[test]
    fn same_seed_same_run() {
        let a = TrainArgs {
            out: None,
            svg: None,
            ..args(Path::new("."))
        };
        assert_eq!(train(&a).unwrap(), train(&a).unwrap());
    }
}

//! Episode loop connecting an agent to a packing surface.
//!
//! Each episode starts from an empty surface and runs
//! `choose_action → step → update` until `squares` squares are placed or
//! `max_attempts` steps were taken. The cap guarantees termination when the
//! agent's action range is already full.

use serde::Serialize;

use crate::agent::Agent;
use crate::geom::PlaceError;
use crate::surface::PackingSurface;

/// Training loop configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrainCfg {
    pub episodes: usize,
    /// Target number of squares per episode.
    pub squares: usize,
    /// Step budget per episode; the episode is truncated when it runs out.
    pub max_attempts: usize,
}

impl Default for TrainCfg {
    fn default() -> Self {
        Self {
            episodes: 1,
            squares: 10,
            max_attempts: 10_000,
        }
    }
}

/// Summary of one finished episode.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EpisodeStats {
    pub episode: usize,
    pub placed: usize,
    pub attempts: usize,
    pub truncated: bool,
    pub side: f64,
    pub density: f64,
}

/// Run a single episode on `env` (which is reset first).
pub fn run_episode<A: Agent + ?Sized>(
    env: &mut PackingSurface,
    agent: &mut A,
    cfg: &TrainCfg,
    episode: usize,
) -> Result<EpisodeStats, PlaceError> {
    env.reset();
    let mut state = env.state();
    let mut placed = 0usize;
    let mut attempts = 0usize;
    while placed < cfg.squares && attempts < cfg.max_attempts {
        let action = agent.choose_action();
        let step = env.step(action)?;
        attempts += 1;
        agent.update(&state, action, step.reward, &step.state);
        if step.done {
            placed += 1;
        }
        state = step.state;
    }
    let truncated = placed < cfg.squares;
    if truncated {
        tracing::warn!(episode, placed, attempts, "episode hit the attempt cap");
    }
    Ok(EpisodeStats {
        episode,
        placed,
        attempts,
        truncated,
        side: env.minimal_bounding_square().side_len(),
        density: env.packing_density(),
    })
}

/// Run `cfg.episodes` episodes sequentially. `env` holds the last episode's squares afterwards.
pub fn train<A: Agent + ?Sized>(
    env: &mut PackingSurface,
    agent: &mut A,
    cfg: &TrainCfg,
) -> Result<Vec<EpisodeStats>, PlaceError> {
    train_with(env, agent, cfg, |_| {})
}

/// `train`, calling `on_episode` after each finished episode (progress reporting).
pub fn train_with<A, F>(
    env: &mut PackingSurface,
    agent: &mut A,
    cfg: &TrainCfg,
    mut on_episode: F,
) -> Result<Vec<EpisodeStats>, PlaceError>
where
    A: Agent + ?Sized,
    F: FnMut(&EpisodeStats),
{
    let mut out = Vec::with_capacity(cfg.episodes);
    for episode in 0..cfg.episodes {
        let stats = run_episode(env, agent, cfg, episode)?;
        tracing::debug!(
            episode,
            placed = stats.placed,
            attempts = stats.attempts,
            density = stats.density,
            "episode"
        );
        on_episode(&stats);
        out.push(stats);
    }
    Ok(out)
}

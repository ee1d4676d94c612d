//! Agents that propose placements to a packing surface.
//!
//! The surface treats an agent purely as a source of candidate placements and a
//! sink for transitions. `RandomAgent` is the placeholder policy: uniform
//! integer coordinates and a uniform angle, with a no-op update.

use std::f64::consts::FRAC_PI_2;
use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::Placement;

/// Policy interface used by the training driver.
pub trait Agent {
    /// Propose the next placement.
    fn choose_action(&mut self) -> Placement;

    /// Observe one transition `(state, action, reward, next_state)`.
    fn update(
        &mut self,
        state: &[Placement],
        action: Placement,
        reward: f64,
        next_state: &[Placement],
    );
}

#[derive(Debug)]
pub enum AgentError {
    InvalidBounds { reason: String },
}

impl AgentError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidBounds {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for AgentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBounds { reason } => write!(f, "invalid action bounds: {reason}"),
        }
    }
}

impl std::error::Error for AgentError {}

/// Inclusive integer ranges for the reference corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionBounds {
    pub min_x: i64,
    pub max_x: i64,
    pub min_y: i64,
    pub max_y: i64,
}

impl Default for ActionBounds {
    fn default() -> Self {
        Self {
            min_x: -5,
            max_x: 5,
            min_y: -5,
            max_y: 5,
        }
    }
}

impl ActionBounds {
    fn validate(&self) -> Result<(), AgentError> {
        if self.min_x > self.max_x {
            return Err(AgentError::invalid("min_x <= max_x required"));
        }
        if self.min_y > self.max_y {
            return Err(AgentError::invalid("min_y <= max_y required"));
        }
        Ok(())
    }
}

/// Uniform random placements from an explicitly seeded generator.
pub struct RandomAgent {
    bounds: ActionBounds,
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(bounds: ActionBounds, seed: u64) -> Result<Self, AgentError> {
        bounds.validate()?;
        Ok(Self {
            bounds,
            rng: StdRng::seed_from_u64(seed),
        })
    }
}

impl Agent for RandomAgent {
    fn choose_action(&mut self) -> Placement {
        let b = self.bounds;
        let x = self.rng.gen_range(b.min_x..=b.max_x) as f64;
        let y = self.rng.gen_range(b.min_y..=b.max_y) as f64;
        let angle = self.rng.gen_range(0.0..FRAC_PI_2);
        Placement::new(x, y, angle)
    }

    fn update(
        &mut self,
        _state: &[Placement],
        _action: Placement,
        _reward: f64,
        _next_state: &[Placement],
    ) {
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::angle_in_range;

    #[test]
    fn actions_stay_in_bounds() {
        let bounds = ActionBounds {
            min_x: -2,
            max_x: 3,
            min_y: 0,
            max_y: 1,
        };
        let mut agent = RandomAgent::new(bounds, 7).unwrap();
        for _ in 0..500 {
            let a = agent.choose_action();
            assert!(a.x >= -2.0 && a.x <= 3.0 && a.x.fract() == 0.0);
            assert!(a.y >= 0.0 && a.y <= 1.0 && a.y.fract() == 0.0);
            assert!(angle_in_range(a.angle));
        }
    }

    #[test]
    fn same_seed_same_actions() {
        let mut a = RandomAgent::new(ActionBounds::default(), 42).unwrap();
        let mut b = RandomAgent::new(ActionBounds::default(), 42).unwrap();
        for _ in 0..20 {
            assert_eq!(a.choose_action(), b.choose_action());
        }
    }

    #[test]
    fn inverted_bounds_rejected() {
        let bounds = ActionBounds {
            min_x: 1,
            max_x: 0,
            ..ActionBounds::default()
        };
        assert!(matches!(
            RandomAgent::new(bounds, 0),
            Err(AgentError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn degenerate_bounds_pin_position() {
        let bounds = ActionBounds {
            min_x: 4,
            max_x: 4,
            min_y: -1,
            max_y: -1,
        };
        let mut agent = RandomAgent::new(bounds, 3).unwrap();
        let a = agent.choose_action();
        assert_eq!((a.x, a.y), (4.0, -1.0));
    }
}

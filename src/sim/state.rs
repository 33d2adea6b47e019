//! Game state and core simulation types
//!
//! Everything a running game needs between frames: the particle world, the
//! sun, the emission countdown, the seeded RNG and the current phase.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::event::SimEvent;
use super::particle::Particle;
use super::sun::{EmissionTimer, Sun};
use super::world::World;
use crate::error::Result;
use crate::screen_center;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// The structure reached the sun
    GameOver,
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub world: World,
    pub sun: Sun,
    pub emission: EmissionTimer,
    pub phase: GamePhase,
    /// Simulation frame counter
    pub frames: u64,
    /// Whether a steer command was held last frame
    pub steering: bool,
}

impl GameState {
    /// Create a new game with default tuning
    pub fn new(seed: u64) -> Self {
        Self::build(seed, Tuning::default())
    }

    /// Create a new game with custom tuning, rejecting values the simulation
    /// cannot run with
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Result<Self> {
        tuning.validate()?;
        Ok(Self::build(seed, tuning))
    }

    /// The structure starts as one base-tier particle at the screen center
    fn build(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let emission = EmissionTimer::new(&tuning, &mut rng);
        let sun = Sun::new(&tuning);

        let mut world = World::new();
        world.spawn(Particle::neutral(1, screen_center(tuning.screen_width, tuning.screen_height)));

        log::info!("New game with seed {seed}");

        Self {
            seed,
            rng,
            tuning,
            world,
            sun,
            emission,
            phase: GamePhase::Playing,
            frames: 0,
            steering: false,
        }
    }

    pub fn center(&self) -> Vec2 {
        screen_center(self.tuning.screen_width, self.tuning.screen_height)
    }

    /// Sum of tiers across the structure
    pub fn score(&self) -> u64 {
        self.world.score()
    }

    /// True when any docked particle touches the sun
    pub fn structure_reached_sun(&self) -> bool {
        self.world.stationary().any(|(_, p)| self.sun.overlaps(p))
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        self.world.drain_events()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::particle::{Matter, ParticleKind};

    #[test]
    fn test_new_game_has_seed_particle() {
        let state = GameState::new(42);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.world.len(), 1);
        let (id, p) = state.world.iter().next().unwrap();
        assert!(state.world.is_stationary(id));
        assert_eq!(p.kind, ParticleKind::Neutral(Matter::LightGrey));
        assert_eq!(p.pos, state.center());
        assert_eq!(state.score(), 1);
        assert!(!state.structure_reached_sun());
    }

    #[test]
    fn test_structure_touching_sun() {
        let mut state = GameState::new(42);
        let near_sun = state.sun.pos - Vec2::new(state.sun.radius, 0.0);
        state.world.spawn(Particle::neutral(1, near_sun));
        assert!(state.structure_reached_sun());
    }

    #[test]
    fn test_with_tuning_rejects_bad_emission_window() {
        let tuning = Tuning {
            emission_min_secs: 5.0,
            emission_max_secs: 2.0,
            ..Default::default()
        };
        assert!(GameState::with_tuning(1, tuning).is_err());

        let state = GameState::with_tuning(1, Tuning::default()).unwrap();
        assert_eq!(state.world.len(), 1);
    }
}

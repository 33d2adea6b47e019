//! Per-frame driver
//!
//! Applies player commands, moves the sun, handles emission, runs one
//! simulation step and checks for game over.

use super::event::SimEvent;
use super::particle::{Matter, ParticleKind};
use super::state::{GamePhase, GameState};
use super::step::step;
use super::sun::OrbitDir;

/// Screen direction for steering charges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steer {
    Up,
    Down,
    Left,
    Right,
}

impl Steer {
    /// Heading in degrees (y-up screen space)
    pub fn angle(self) -> f32 {
        match self {
            Steer::Right => 0.0,
            Steer::Up => 90.0,
            Steer::Left => 180.0,
            Steer::Down => 270.0,
        }
    }
}

/// Speed change for in-flight base-tier particles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Throttle {
    Faster,
    Slower,
}

/// Input commands for a single frame (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held steer direction; negative charges follow it, positive charges flee it
    pub steer: Option<Steer>,
    pub throttle: Option<Throttle>,
    /// Requested orbit direction; the sun only turns around if it is
    /// currently orbiting the other way
    pub orbit: Option<OrbitDir>,
    /// Pause toggle
    pub pause: bool,
}

/// Advance the game by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                return;
            }
            GamePhase::Paused => state.phase = GamePhase::Playing,
            GamePhase::GameOver => {}
        }
    }

    if state.phase != GamePhase::Playing {
        return;
    }

    state.frames += 1;

    apply_steering(state, input);
    apply_throttle(state, input);
    if let Some(dir) = input.orbit {
        state.sun.set_orbit_direction(dir);
    }

    state.sun.update(dt);
    if state.emission.update(dt, &state.tuning, &mut state.rng) {
        let particle = state.sun.emit(&state.tuning, &mut state.rng);
        let kind = particle.kind;
        let id = state.world.spawn(particle);
        state.world.push_event(SimEvent::Emitted { id, kind });
    }

    step(&mut state.world, dt, state.sun.disc(), &state.tuning, &mut state.rng);

    if state.structure_reached_sun() {
        let score = state.score();
        state.phase = GamePhase::GameOver;
        state.world.push_event(SimEvent::GameOver { score });
        log::info!("Game over after {} frames, score {score}", state.frames);
    }
}

/// Point moving charges along the held direction; on release, re-aim them at
/// the screen center
fn apply_steering(state: &mut GameState, input: &TickInput) {
    let released = state.steering && input.steer.is_none();
    state.steering = input.steer.is_some();
    if input.steer.is_none() && !released {
        return;
    }

    let center = state.center();
    for id in state.world.moving_ids() {
        let Some(p) = state.world.get_mut(id) else {
            continue;
        };
        let angle = match (p.kind, input.steer) {
            (ParticleKind::Negative, Some(dir)) => dir.angle(),
            (ParticleKind::Positive, Some(dir)) => dir.angle() + 180.0,
            (ParticleKind::Positive | ParticleKind::Negative, None) => {
                p.angle_towards_point(center)
            }
            _ => continue,
        };
        p.angle = crate::normalize_degrees(angle);
    }
}

/// Speed moving base-tier particles up or down within the tuned range
fn apply_throttle(state: &mut GameState, input: &TickInput) {
    let Some(throttle) = input.throttle else {
        return;
    };
    let t = &state.tuning;
    let delta = match throttle {
        Throttle::Faster => t.neutral_speed_step,
        Throttle::Slower => -t.neutral_speed_step,
    };
    let (min, max) = (t.neutral_speed_min, t.neutral_speed_max);

    for id in state.world.moving_ids() {
        if let Some(p) = state.world.get_mut(id) {
            if p.kind == ParticleKind::Neutral(Matter::LightGrey) {
                p.speed = (p.speed + delta).clamp(min, max);
            }
        }
    }
}

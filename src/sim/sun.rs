//! The orbiting sun and its particle emitter
//!
//! The sun circles the screen center. At random intervals it releases a
//! particle from the edge of its disc facing the center, aimed at the center.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::charge::SunDisc;
use super::particle::{Matter, Particle, ParticleKind};
use super::proximity::overlaps_disc;
use crate::consts::PARTICLE_SIZE;
use crate::screen_center;
use crate::tuning::Tuning;

/// Gap between the sun's edge and a freshly emitted particle
const EMISSION_OFFSET: f32 = 1.0;

/// Direction of travel around the orbit center
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrbitDir {
    Clockwise,
    Counterclockwise,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sun {
    pub orbit_center: Vec2,
    pub orbit_radius: f32,
    /// Radians per second; negative orbits clockwise
    pub orbit_speed: f32,
    /// Current orbit angle (radians)
    pub angle: f32,
    pub radius: f32,
    pub pos: Vec2,
}

impl Sun {
    pub fn new(tuning: &Tuning) -> Self {
        let orbit_center = screen_center(tuning.screen_width, tuning.screen_height);
        let mut sun = Self {
            orbit_center,
            orbit_radius: tuning.orbit_radius,
            orbit_speed: tuning.orbit_speed,
            angle: 0.0,
            radius: tuning.sun_radius,
            pos: orbit_center,
        };
        sun.update(0.0);
        sun
    }

    /// Advance along the orbit
    pub fn update(&mut self, dt: f32) {
        self.angle += self.orbit_speed * dt;
        self.pos =
            self.orbit_center + Vec2::new(self.angle.cos(), self.angle.sin()) * self.orbit_radius;
    }

    pub fn reverse_orbit_direction(&mut self) {
        self.orbit_speed = -self.orbit_speed;
    }

    /// Current orbit direction (y-up screen space)
    pub fn orbit_direction(&self) -> OrbitDir {
        if self.orbit_speed < 0.0 {
            OrbitDir::Clockwise
        } else {
            OrbitDir::Counterclockwise
        }
    }

    /// Orbit in `dir`, reversing only if the sun currently runs the other way
    pub fn set_orbit_direction(&mut self, dir: OrbitDir) {
        if self.orbit_direction() != dir {
            self.reverse_orbit_direction();
        }
    }

    pub fn disc(&self) -> SunDisc {
        SunDisc {
            center: self.pos,
            radius: self.radius,
        }
    }

    pub fn overlaps(&self, particle: &Particle) -> bool {
        overlaps_disc(particle, self.pos, self.radius)
    }

    /// Release a particle of random kind from the sun's inner edge.
    ///
    /// The spawn point is clamped into the playfield so the particle is not
    /// culled before it gets a chance to move.
    pub fn emit<R: Rng + ?Sized>(&self, tuning: &Tuning, rng: &mut R) -> Particle {
        let kind = match rng.random_range(0..3) {
            0 => ParticleKind::Neutral(Matter::LightGrey),
            1 => ParticleKind::Positive,
            _ => ParticleKind::Negative,
        };

        let inward = Vec2::new(self.angle.cos(), self.angle.sin());
        let reach = self.radius + PARTICLE_SIZE / 2.0 + EMISSION_OFFSET;
        let pos = (self.pos - inward * reach).clamp(
            Vec2::ZERO,
            Vec2::new(tuning.screen_width, tuning.screen_height),
        );

        let particle = Particle::new(kind, pos);
        let heading = particle.angle_towards_point(self.orbit_center);
        particle.with_heading(heading, tuning.emission_speed)
    }
}

/// Countdown to the next emission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmissionTimer {
    pub elapsed: f32,
    pub next: f32,
}

impl EmissionTimer {
    pub fn new<R: Rng + ?Sized>(tuning: &Tuning, rng: &mut R) -> Self {
        Self {
            elapsed: 0.0,
            next: Self::roll(tuning, rng),
        }
    }

    fn roll<R: Rng + ?Sized>(tuning: &Tuning, rng: &mut R) -> f32 {
        rng.random_range(tuning.emission_min_secs..=tuning.emission_max_secs)
    }

    /// Advance the timer; true when an emission is due (and the timer rearms)
    pub fn update<R: Rng + ?Sized>(&mut self, dt: f32, tuning: &Tuning, rng: &mut R) -> bool {
        self.elapsed += dt;
        if self.elapsed >= self.next {
            self.elapsed = 0.0;
            self.next = Self::roll(tuning, rng);
            true
        } else {
            false
        }
    }
}

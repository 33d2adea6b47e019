//! Particle entities
//!
//! A single record type covers every kind of matter in the game. Kind-specific
//! behaviour is dispatched with `match` on [`ParticleKind`].
//!
//! Screen space is y-up: `top` is the larger y edge.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::PARTICLE_SIZE;
use crate::{angle_between_points, heading_vector};

/// Stable particle identifier, allocated by the world
pub type ParticleId = u32;

/// Neutral matter, ordered by gravitational tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Matter {
    LightGrey,
    Brown,
    Melting,
    Magma,
}

impl Matter {
    /// Tier lookup table, index = tier - 1
    const TABLE: [Matter; 4] = [Matter::LightGrey, Matter::Brown, Matter::Melting, Matter::Magma];

    /// Gravitational value of this matter
    pub fn tier(self) -> u32 {
        match self {
            Matter::LightGrey => 1,
            Matter::Brown => 2,
            Matter::Melting => 3,
            Matter::Magma => 4,
        }
    }

    pub fn from_tier(tier: u32) -> Option<Self> {
        let index = (tier as usize).checked_sub(1)?;
        Self::TABLE.get(index).copied()
    }

    /// Matter produced when this one collapses. Past the top of the table
    /// growth wraps back to the base tier.
    pub fn promoted(self) -> Self {
        Self::from_tier(self.tier() + 1).unwrap_or(Matter::LightGrey)
    }
}

/// What a particle is made of
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ParticleKind {
    Neutral(Matter),
    Positive,
    Negative,
    /// Born from repulsion; drifts outward until it reaches the sun
    Fire,
    /// Released when fire hits the sun; explodes on contact
    Radioactive,
}

impl ParticleKind {
    /// Tier for neutral matter, 0 for everything else
    pub fn tier(self) -> u32 {
        match self {
            ParticleKind::Neutral(matter) => matter.tier(),
            _ => 0,
        }
    }

    pub fn is_charge(self) -> bool {
        matches!(self, ParticleKind::Positive | ParticleKind::Negative)
    }

    pub fn is_neutral(self) -> bool {
        matches!(self, ParticleKind::Neutral(_))
    }
}

/// Whether a particle is in flight or docked to the structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mobility {
    Moving,
    Stationary,
}

/// A square body in screen space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Center position
    pub pos: Vec2,
    /// Body width and height
    pub size: Vec2,
    /// Heading in degrees
    pub angle: f32,
    /// Scalar speed (pixels per second)
    pub speed: f32,
    pub kind: ParticleKind,
    pub mobility: Mobility,
}

impl Particle {
    /// A stationary particle of the given kind
    pub fn new(kind: ParticleKind, pos: Vec2) -> Self {
        Self {
            pos,
            size: Vec2::splat(PARTICLE_SIZE),
            angle: 0.0,
            speed: 0.0,
            kind,
            mobility: Mobility::Stationary,
        }
    }

    /// A stationary neutral particle for `tier`, falling back to the base tier
    /// when the table has no entry
    pub fn neutral(tier: u32, pos: Vec2) -> Self {
        let matter = Matter::from_tier(tier).unwrap_or(Matter::LightGrey);
        Self::new(ParticleKind::Neutral(matter), pos)
    }

    /// Fire at `pos`, heading directly away from `center`
    pub fn fire(pos: Vec2, center: Vec2, speed: f32) -> Self {
        let away = angle_between_points(pos, center) + 180.0;
        Self::new(ParticleKind::Fire, pos).with_heading(away, speed)
    }

    pub fn radioactive(pos: Vec2, angle: f32, speed: f32) -> Self {
        Self::new(ParticleKind::Radioactive, pos).with_heading(angle, speed)
    }

    /// Set the particle in motion
    pub fn with_heading(mut self, angle: f32, speed: f32) -> Self {
        self.angle = angle;
        self.speed = speed;
        self.mobility = Mobility::Moving;
        self
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.mobility == Mobility::Moving
    }

    #[inline]
    pub fn tier(&self) -> u32 {
        self.kind.tier()
    }

    /// Move along the heading for `dt` seconds. Stationary particles stay put.
    pub fn advance(&mut self, dt: f32) {
        if self.is_moving() {
            self.pos += heading_vector(self.angle) * self.speed * dt;
        }
    }

    /// Heading in degrees from this particle toward a point
    pub fn angle_towards_point(&self, point: Vec2) -> f32 {
        angle_between_points(self.pos, point)
    }

    /// Stop and dock: zero heading and speed, become stationary
    pub fn halt(&mut self) {
        self.angle = 0.0;
        self.speed = 0.0;
        self.mobility = Mobility::Stationary;
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.size.x / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y - self.size.y / 2.0
    }

    pub fn set_left(&mut self, x: f32) {
        self.pos.x = x + self.size.x / 2.0;
    }

    pub fn set_right(&mut self, x: f32) {
        self.pos.x = x - self.size.x / 2.0;
    }

    pub fn set_top(&mut self, y: f32) {
        self.pos.y = y - self.size.y / 2.0;
    }

    pub fn set_bottom(&mut self, y: f32) {
        self.pos.y = y + self.size.y / 2.0;
    }
}

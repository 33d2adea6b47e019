//! Simulation outcomes for the audio/render layers
//!
//! The simulation records what happened each frame; the host drains the list
//! and reacts (sounds, flashes, score popups). Nothing in the simulation reads
//! events back.

use glam::Vec2;

use super::particle::{ParticleId, ParticleKind};

#[derive(Debug, Clone, PartialEq)]
pub enum SimEvent {
    /// The sun released a new particle
    Emitted { id: ParticleId, kind: ParticleKind },
    /// A particle left the playfield
    Culled { id: ParticleId },
    /// A moving particle snapped onto the structure
    Docked { id: ParticleId, onto: ParticleId },
    /// A radioactive particle touched something; both are gone
    Exploded {
        a: ParticleId,
        b: ParticleId,
        pos: Vec2,
    },
    /// Two like charges annihilated into fire
    Repelled {
        consumed: [ParticleId; 2],
        fire: ParticleId,
    },
    /// Two opposite charges condensed into neutral matter
    Attracted {
        consumed: [ParticleId; 2],
        spawned: [ParticleId; 2],
    },
    /// Fire reached the sun and split into radioactive particles
    Decayed {
        fire: ParticleId,
        spawned: [ParticleId; 2],
    },
    /// A 3x3 cluster collapsed; `replaced` pairs old ids with their promoted successors
    Collapsed {
        kind: ParticleKind,
        replaced: Vec<(ParticleId, ParticleId)>,
    },
    /// The structure reached the sun
    GameOver { score: u64 },
}

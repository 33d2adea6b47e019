//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time advances only through the `dt` passed in
//! - Seeded RNG only
//! - Stable iteration order (by particle ID)
//! - No rendering, audio or platform dependencies

pub mod charge;
pub mod cluster;
pub mod collision;
pub mod event;
pub mod particle;
pub mod proximity;
pub mod state;
pub mod step;
pub mod sun;
pub mod tick;
pub mod world;

pub use charge::{Interaction, SunDisc, attract, repel, resolve_charges, resolve_sun_impacts};
pub use cluster::{Cluster, escalate, find_cluster};
pub use collision::{CollisionKind, align, classify, resolve_collisions};
pub use event::SimEvent;
pub use particle::{Matter, Mobility, Particle, ParticleId, ParticleKind};
pub use proximity::{in_bounds, is_adjacent, overlaps, overlaps_disc};
pub use state::{GamePhase, GameState};
pub use step::{cull_out_of_bounds, step};
pub use sun::{EmissionTimer, OrbitDir, Sun};
pub use tick::{Steer, Throttle, TickInput, tick};
pub use world::World;

//! Movement and view-control core for a networked player actor.
//!
//! Converts per-tick input into locomotion state (stance, speed, facing),
//! integrates look rotation, and drives a camera rig that blends between a
//! follow and an aiming viewpoint with a smoothed lateral lean offset. Only
//! the owning machine simulates any of this; session setup and replication
//! live elsewhere.

pub mod camera;
pub mod config;
pub mod core;
pub mod input;
pub mod player;
pub mod world;

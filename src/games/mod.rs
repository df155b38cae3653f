//! Playable game facades built on the engine.

pub mod rummikub;

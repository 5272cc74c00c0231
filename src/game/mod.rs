//! Match state and the per-frame update. Nothing in here touches the
//! window, so every rule can be exercised without a graphics context.

pub mod physics;
pub mod structs;

pub use physics::update;
pub use structs::*;

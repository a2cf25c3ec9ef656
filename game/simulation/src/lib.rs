//! Two-agent steering demo: a hunter and a wolf steering relative to each other, with the active
//! behaviours chosen by the current demo [Phase].

pub use crate::agent::{Agent, Role};
pub use crate::body::PointBody;
pub use crate::phase::{Phase, Plan};
pub use crate::render::Renderer;
pub use crate::simulation::{Simulation, SimulationError};

mod agent;
mod body;
mod phase;
mod render;
mod simulation;

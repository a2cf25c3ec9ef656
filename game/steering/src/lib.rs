//! Dynamic steering behaviours for autonomous agents: each behaviour turns the relative state of
//! an agent and its target into a bounded linear and/or angular acceleration, which the
//! integrator then applies to the agent's kinematic state.

pub use angle::{angle_steer, heading_of, wrap_angle, AngleSteering};
pub use body::Body;
pub use debug::{Annotation, DebugDisplay};
pub use engine::{AngularBehaviour, LinearBehaviour, SteeringBehaviour, SteeringEngine};
pub use kinematic::{integrate, KinematicState};
pub use output::SteeringOutput;
pub use path::PathFollower;
pub use wander::WanderState;

pub use config::SteeringParams;

pub mod behaviour;

mod angle;
mod body;
mod debug;
mod engine;
mod kinematic;
mod output;
mod path;
mod wander;

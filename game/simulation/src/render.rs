use std::fmt::Debug;

use steering::{DebugDisplay, KinematicState};

use crate::agent::Role;

pub trait Renderer {
    type Display: DebugDisplay;
    type Error: Debug;

    /// Per-agent sink for steering annotations and labels
    fn display(&mut self, role: Role) -> &mut Self::Display;

    /// Start rendering simulation
    fn sim_start(&mut self);

    /// `interpolation` is the fraction of a tick elapsed since `state` was computed
    fn sim_agent(&mut self, role: Role, state: &KinematicState, interpolation: f64);

    /// Finish rendering simulation
    fn sim_finish(&mut self) -> Result<(), Self::Error>;
}

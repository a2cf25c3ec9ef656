use std::collections::HashMap;

use common::*;
use simulation::{Renderer, Role};
use steering::{DebugDisplay, KinematicState};

/// Logs annotations and label changes for one agent
pub struct TextDisplay {
    role: Role,
    label: String,
    circles: usize,
}

/// Headless renderer writing agent states to the log
pub struct TextRenderer {
    displays: HashMap<Role, TextDisplay>,
    agents: usize,

    /// Seconds per tick
    dt: F,
}

impl TextRenderer {
    pub fn new(dt: F) -> Self {
        Self {
            displays: HashMap::new(),
            agents: 0,
            dt,
        }
    }
}

impl TextDisplay {
    fn new(role: Role) -> Self {
        Self {
            role,
            label: String::new(),
            circles: 0,
        }
    }
}

impl DebugDisplay for TextDisplay {
    fn draw_circle(&mut self, centre: Vector3, radius: F) {
        self.circles += 1;
        trace!("circle"; "agent" => self.role, "centre" => ?centre, "radius" => radius);
    }

    fn clear_drawing(&mut self) {
        if self.circles > 0 {
            trace!("cleared drawing"; "agent" => self.role, "circles" => self.circles);
            self.circles = 0;
        }
    }

    fn set_label(&mut self, text: &str) {
        if self.label != text {
            info!("label changed"; "agent" => self.role, "label" => text);
            self.label.clear();
            self.label.push_str(text);
        }
    }
}

impl Renderer for TextRenderer {
    type Display = TextDisplay;
    type Error = ();

    fn display(&mut self, role: Role) -> &mut Self::Display {
        self.displays
            .entry(role)
            .or_insert_with(|| TextDisplay::new(role))
    }

    fn sim_start(&mut self) {
        self.agents = 0;
    }

    fn sim_agent(&mut self, role: Role, state: &KinematicState, interpolation: f64) {
        // extrapolate position between ticks
        let position = state.position + state.velocity * (interpolation as F * self.dt);
        self.agents += 1;

        debug!("agent";
            "agent" => role,
            "position" => ?position,
            "speed" => state.velocity.magnitude(),
            "orientation" => state.orientation
        );
    }

    fn sim_finish(&mut self) -> Result<(), Self::Error> {
        trace!("rendered frame"; "agents" => self.agents);
        Ok(())
    }
}

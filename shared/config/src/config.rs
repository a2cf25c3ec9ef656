use serde::Deserialize;

use common::*;

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub simulation: Simulation,
    pub hunter: Agent,
    pub wolf: Agent,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Simulation {
    pub ticks_per_second: usize,
    pub max_frameskip: u32,

    /// Demo phase to start in
    pub phase: u8,

    /// Entropy if not set
    pub random_seed: Option<u64>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Agent {
    pub position: (F, F, F),

    /// Radians around the up axis, 0 faces +z
    #[serde(default)]
    pub orientation: F,

    pub max_speed: F,
    pub steering: SteeringParams,

    /// Waypoints to follow in order
    #[serde(default)]
    pub path: Vec<(F, F, F)>,
}

/// Tunable limits and radii for every steering behaviour. Radii suffixed with `_l` are linear
/// distances, `_a` are angles in radians.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct SteeringParams {
    pub max_acceleration: F,
    /// Upper bound on how far ahead pursue and evade predict, in seconds
    pub max_prediction: F,

    pub target_radius_l: F,
    /// Must be > 0
    pub slow_radius_l: F,
    /// Must be > 0
    pub time_to_target: F,

    pub max_rotation: F,
    pub max_angular_acceleration: F,
    pub target_radius_a: F,
    /// Must be > 0
    pub slow_radius_a: F,

    pub wander_offset: F,
    pub wander_radius: F,
    pub wander_rate: F,
}

impl Default for SteeringParams {
    fn default() -> Self {
        Self {
            max_acceleration: 10.0,
            max_prediction: 1.0,
            target_radius_l: 1.0,
            slow_radius_l: 5.0,
            time_to_target: 0.25,
            max_rotation: 3.0,
            max_angular_acceleration: 6.0,
            target_radius_a: 0.05,
            slow_radius_a: 0.5,
            wander_offset: 4.0,
            wander_radius: 2.0,
            wander_rate: 1.0,
        }
    }
}

impl Agent {
    pub fn position(&self) -> Vector3 {
        let (x, y, z) = self.position;
        Vector3::new(x, y, z)
    }

    pub fn path(&self) -> impl Iterator<Item = Vector3> + '_ {
        self.path.iter().map(|&(x, y, z)| Vector3::new(x, y, z))
    }
}

use common::*;

use crate::body::Body;
use crate::output::SteeringOutput;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct KinematicState {
    /// Read back from the body each tick
    pub position: Vector3,

    /// Never longer than `max_speed` after integration
    pub velocity: Vector3,

    /// Radians around the up axis, 0 faces +z. Accumulates without wrapping
    pub orientation: F,

    /// Angular speed in radians/second
    pub rotation: F,

    pub max_speed: F,
}

impl KinematicState {
    /// At rest
    pub fn new(position: Vector3, orientation: F, max_speed: F) -> Self {
        Self {
            position,
            velocity: Vector3::zero(),
            orientation,
            rotation: 0.0,
            max_speed,
        }
    }

    pub fn with_velocity(mut self, velocity: Vector3) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_rotation(mut self, rotation: F) -> Self {
        self.rotation = rotation;
        self
    }

    /// Unit vector the agent is facing
    pub fn heading(&self) -> Vector3 {
        forward(self.orientation)
    }

    /// Applies the resets requested by the steering output, integrates its accelerations over
    /// `dt`, and hands the resulting velocity change and heading to the body.
    ///
    /// Position is left alone until [sync_position](Self::sync_position) once the body has
    /// moved.
    pub fn advance(&mut self, steering: &SteeringOutput, dt: F, body: &mut impl Body) {
        if steering.stop_velocity {
            self.velocity.set_zero();
        }
        if steering.stop_rotation {
            self.rotation = 0.0;
        }

        *self = integrate(self, steering.linear, steering.angular, dt);

        body.apply_velocity_delta(self.velocity - body.velocity());
        body.set_heading(self.orientation);
    }

    pub fn sync_position(&mut self, body: &impl Body) {
        self.position = body.position();
    }
}

/// Advances orientation by the rotation from *before* this step, then applies the accelerations.
/// Velocity is limited to `max_speed`, position is untouched.
pub fn integrate(state: &KinematicState, linear: Vector3, angular: F, dt: F) -> KinematicState {
    let orientation = state.orientation + state.rotation * dt;
    let velocity = truncate(state.velocity + linear * dt, state.max_speed);
    let rotation = state.rotation + angular * dt;

    KinematicState {
        orientation,
        velocity,
        rotation,
        ..*state
    }
}

use common::*;

use crate::angle::AngleSteering;
use crate::debug::Annotation;

/// Accelerations requested by a behaviour for a single tick, plus any resets of the agent's state
/// the integrator should apply first
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SteeringOutput {
    pub linear: Vector3,
    pub angular: F,

    /// Arrived, velocity should be zeroed
    pub stop_velocity: bool,

    /// Facing the desired heading, rotation should be zeroed
    pub stop_rotation: bool,

    pub annotation: Option<Annotation>,
}

impl SteeringOutput {
    pub fn none() -> Self {
        Self {
            linear: Vector3::zero(),
            angular: 0.0,
            stop_velocity: false,
            stop_rotation: false,
            annotation: None,
        }
    }

    pub fn linear(linear: Vector3) -> Self {
        Self {
            linear,
            ..Self::none()
        }
    }

    pub fn angular(steering: AngleSteering) -> Self {
        Self {
            angular: steering.angular,
            stop_rotation: steering.converged,
            ..Self::none()
        }
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotation = Some(annotation);
        self
    }

    /// Linear half from `linear`, angular half from `angular`. The linear behaviour's annotation
    /// wins if both have one
    pub fn combine(linear: Self, angular: Self) -> Self {
        Self {
            linear: linear.linear,
            angular: angular.angular,
            stop_velocity: linear.stop_velocity,
            stop_rotation: angular.stop_rotation,
            annotation: linear.annotation.or(angular.annotation),
        }
    }
}

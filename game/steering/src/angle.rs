use std::f32::consts::{PI, TAU};

use common::*;
use config::SteeringParams;

/// Result of steering towards a heading
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AngleSteering {
    pub angular: F,

    /// Within the target radius, the caller should zero the agent's rotation. `angular` has
    /// already been calculated as if it were zero
    pub converged: bool,
}

impl AngleSteering {
    pub const fn none() -> Self {
        Self {
            angular: 0.0,
            converged: false,
        }
    }
}

/// Wraps into (-PI, PI]
pub fn wrap_angle(mut angle: F) -> F {
    if !angle.is_finite() {
        return angle;
    }

    // subtracting TAU from huge values does nothing at f32 precision
    if angle.abs() > 4.0 * TAU {
        angle %= TAU;
    }

    while angle > PI {
        angle -= TAU;
    }
    while angle <= -PI {
        angle += TAU;
    }

    angle
}

/// Orientation that faces along the given direction on the horizontal plane, 0 being +z
pub fn heading_of(direction: Vector3) -> F {
    direction.x.atan2(direction.z)
}

/// Angular acceleration to turn from `orientation` (currently turning at `rotation`) to face
/// `desired`, slowing down inside the slow radius and stopping inside the target radius.
///
/// `slow_radius_a` and `time_to_target` must be non-zero.
pub fn angle_steer(
    orientation: F,
    rotation: F,
    desired: F,
    params: &SteeringParams,
) -> AngleSteering {
    let delta = wrap_angle(desired - orientation);
    if delta == 0.0 {
        return AngleSteering::none();
    }

    let size = delta.abs();
    let converged = size < params.target_radius_a;
    let rotation = if converged { 0.0 } else { rotation };

    let speed = if size > params.slow_radius_a {
        params.max_rotation
    } else {
        params.max_rotation * size / params.slow_radius_a
    };
    let speed = speed.copysign(delta);

    let angular = (speed - rotation) / params.time_to_target;
    let angular = if angular.abs() > params.max_angular_acceleration {
        params.max_angular_acceleration.copysign(angular)
    } else {
        angular
    };

    AngleSteering { angular, converged }
}

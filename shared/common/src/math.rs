//! Vector helpers shared by steering and physics. The world is y-up, and an orientation of 0
//! faces along +z
use crate::*;

pub const AXIS_FWD: Vector3 = Vector3::new(0.0, 0.0, 1.0);

/// Rescales to exactly `max` if longer, otherwise unchanged. Direction is preserved
pub fn truncate(vec: Vector3, max: F) -> Vector3 {
    if vec.magnitude2() > max * max {
        vec.normalize_to(max)
    } else {
        vec
    }
}

/// Unit vector on the horizontal plane for the given orientation around the up axis
pub fn forward(orientation: F) -> Vector3 {
    let (sin, cos) = orientation.sin_cos();
    Vector3::new(sin, 0.0, cos)
}

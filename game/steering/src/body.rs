use common::*;

/// The physical body an agent drives. It owns world-space position: the integrator only tells it
/// how to change velocity and which way to face, and reads the position back afterwards
pub trait Body {
    fn position(&self) -> Vector3;

    fn velocity(&self) -> Vector3;

    fn apply_velocity_delta(&mut self, delta: Vector3);

    /// Radians around the up axis
    fn set_heading(&mut self, orientation: F);
}

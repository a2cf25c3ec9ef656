use common::*;
use steering::Body;

/// Velocity below which a body is considered stopped
const STOP_LIMIT: F = 0.001;

/// Frictionless point mass, moved along its velocity once per tick
#[derive(Debug, Clone)]
pub struct PointBody {
    position: Vector3,
    velocity: Vector3,

    /// Radians around the up axis
    heading: F,
}

impl PointBody {
    pub fn new(position: Vector3, heading: F) -> Self {
        Self {
            position,
            velocity: Vector3::zero(),
            heading,
        }
    }

    pub fn heading(&self) -> F {
        self.heading
    }

    pub fn step(&mut self, dt: F) {
        if self.velocity.magnitude2() < STOP_LIMIT * STOP_LIMIT {
            // practically zero
            self.velocity.set_zero();
            return;
        }

        self.position += self.velocity * dt;
    }
}

impl Body for PointBody {
    fn position(&self) -> Vector3 {
        self.position
    }

    fn velocity(&self) -> Vector3 {
        self.velocity
    }

    fn apply_velocity_delta(&mut self, delta: Vector3) {
        self.velocity += delta;
    }

    fn set_heading(&mut self, orientation: F) {
        self.heading = orientation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_along_velocity() {
        let mut body = PointBody::new(Vector3::new(1.0, 0.0, 1.0), 0.0);
        body.apply_velocity_delta(Vector3::new(2.0, 0.0, 0.0));
        body.apply_velocity_delta(Vector3::new(0.0, 0.0, -1.0));

        body.step(0.5);
        assert_eq!(body.position(), Vector3::new(2.0, 0.0, 0.5));
        assert_eq!(body.velocity(), Vector3::new(2.0, 0.0, -1.0));
    }

    #[test]
    fn tiny_velocity_stops() {
        let mut body = PointBody::new(Vector3::zero(), 0.0);
        body.apply_velocity_delta(Vector3::new(0.0001, 0.0, 0.0));
        body.step(1.0);

        assert_eq!(body.position(), Vector3::zero());
        assert_eq!(body.velocity(), Vector3::zero());
    }

    #[test]
    fn heading_is_stored() {
        let mut body = PointBody::new(Vector3::zero(), 0.0);
        body.set_heading(7.5);
        assert_eq!(body.heading(), 7.5);
    }
}

use common::*;
use config::SteeringParams;

use crate::behaviour::face_direction;
use crate::debug::Annotation;
use crate::kinematic::KinematicState;
use crate::output::SteeringOutput;

/// Persistent drift of the wander target around the wander circle, relative to the agent's
/// orientation
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WanderState {
    pub orientation: F,
}

impl WanderState {
    pub fn new(agent_orientation: F) -> Self {
        Self {
            orientation: agent_orientation,
        }
    }

    /// Nudges the wander orientation by up to `wander_rate` either way, then steers towards the
    /// resulting point on a circle ahead of the agent while accelerating straight ahead.
    ///
    /// Returns the steering and the state to use next tick.
    pub fn step(
        self,
        agent: &KinematicState,
        params: &SteeringParams,
        rng: &mut impl Rng,
    ) -> (SteeringOutput, WanderState) {
        let drift = rng.gen::<F>() - rng.gen::<F>();
        let next = WanderState {
            orientation: self.orientation + drift * params.wander_rate,
        };

        let heading = agent.heading();
        let centre = agent.position + heading * params.wander_offset;
        let target = centre + forward(next.orientation + agent.orientation) * params.wander_radius;

        let annotation = Annotation::Circle {
            centre,
            radius: params.wander_radius,
        };

        let direction = target - agent.position;
        if direction.is_zero() {
            return (SteeringOutput::none().with_annotation(annotation), next);
        }

        let angular = face_direction(agent, direction, params);
        let linear = SteeringOutput::linear(heading * params.max_acceleration);

        let output = SteeringOutput::combine(linear, angular).with_annotation(annotation);
        (output, next)
    }
}

#[cfg(test)]
mod tests {
    use common::rand::rngs::mock::StepRng;

    use super::*;

    fn params() -> SteeringParams {
        SteeringParams {
            max_acceleration: 3.0,
            wander_offset: 4.0,
            wander_radius: 2.0,
            wander_rate: 0.5,
            ..SteeringParams::default()
        }
    }

    #[test]
    fn drift_is_bounded() {
        let p = params();
        let agent = KinematicState::new(Vector3::zero(), 0.3, 5.0);
        let mut rng = SmallRng::seed_from_u64(1234);

        let mut state = WanderState::new(agent.orientation);
        for _ in 0..200 {
            let before = state.orientation;
            let (_, next) = state.step(&agent, &p, &mut rng);
            assert!((next.orientation - before).abs() <= p.wander_rate + 1e-5);
            state = next;
        }
    }

    #[test]
    fn no_drift_goes_straight() {
        let p = params();
        let agent = KinematicState::new(Vector3::new(1.0, 0.0, 1.0), 0.0, 5.0);

        // identical draws cancel out
        let (out, next) = WanderState::new(0.0).step(&agent, &p, &mut StepRng::new(0x1234_5678, 0));
        assert_eq!(next.orientation, 0.0);

        // target straight ahead, nothing to turn
        assert_eq!(out.angular, 0.0);
        assert_eq!(out.linear, Vector3::new(0.0, 0.0, 3.0));
        assert_eq!(
            out.annotation,
            Some(Annotation::Circle {
                centre: Vector3::new(1.0, 0.0, 5.0),
                radius: 2.0
            })
        );
    }

    #[test]
    fn linear_ignores_wander_target() {
        let p = params();
        let agent = KinematicState::new(Vector3::zero(), 1.0, 5.0);
        let mut rng = SmallRng::seed_from_u64(99);

        let (out, _) = WanderState::new(2.5).step(&agent, &p, &mut rng);
        let expected = agent.heading() * p.max_acceleration;
        assert_eq!(out.linear, expected);
        assert_ne!(out.angular, 0.0);
        assert!(out.angular.abs() <= p.max_angular_acceleration);
    }
}

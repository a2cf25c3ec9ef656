//! Stateless behaviours. Each is a function of the agent's and target's state at the start of the
//! tick.
//!
//! Pursue and evade normalise without checking for a zero-length direction, so an agent exactly on
//! top of its predicted target gets NaN components. Arrive only normalises outside
//! `target_radius_l`, and seek and flee only truncate, so coincidence stops or gives zero. Face
//! and face away check first and return no steering.

use common::*;
use config::SteeringParams;

use crate::angle::{angle_steer, heading_of};
use crate::debug::Annotation;
use crate::kinematic::KinematicState;
use crate::output::SteeringOutput;

const PURSUE_MARKER_RADIUS: F = 0.3;
const EVADE_MARKER_RADIUS: F = 0.5;

pub fn seek(
    agent: &KinematicState,
    target: &KinematicState,
    params: &SteeringParams,
) -> SteeringOutput {
    let linear = target.position - agent.position;
    SteeringOutput::linear(truncate(linear, params.max_acceleration))
}

pub fn flee(
    agent: &KinematicState,
    target: &KinematicState,
    params: &SteeringParams,
) -> SteeringOutput {
    let linear = agent.position - target.position;
    SteeringOutput::linear(truncate(linear, params.max_acceleration))
}

/// Seek that slows down within `slow_radius_l` and stops dead within `target_radius_l`
pub fn arrive(
    agent: &KinematicState,
    target: &KinematicState,
    params: &SteeringParams,
) -> SteeringOutput {
    let direction = target.position - agent.position;
    let distance = direction.magnitude();

    let annotation = if distance <= params.slow_radius_l {
        Annotation::Circle {
            centre: target.position,
            radius: params.slow_radius_l,
        }
    } else {
        Annotation::Clear
    };

    if distance < params.target_radius_l {
        return SteeringOutput {
            stop_velocity: true,
            ..SteeringOutput::none()
        }
        .with_annotation(annotation);
    }

    let speed = if distance > params.slow_radius_l {
        agent.max_speed
    } else {
        agent.max_speed * distance / params.slow_radius_l
    };

    let desired_velocity = direction.normalize() * speed;
    let linear = (desired_velocity - agent.velocity) / params.time_to_target;

    SteeringOutput::linear(truncate(linear, params.max_acceleration)).with_annotation(annotation)
}

/// How far ahead to predict the target's position, never more than `max_prediction`. Slow agents
/// look the full `max_prediction` ahead
pub fn prediction_time(
    agent: &KinematicState,
    target: &KinematicState,
    params: &SteeringParams,
) -> F {
    let distance = (target.position - agent.position).magnitude();
    let speed = agent.velocity.magnitude();

    if speed <= distance / params.max_prediction {
        params.max_prediction
    } else {
        distance / speed
    }
}

fn predicted_position(
    agent: &KinematicState,
    target: &KinematicState,
    params: &SteeringParams,
) -> Vector3 {
    let prediction = prediction_time(agent, target, params);
    target.position + target.velocity * prediction
}

/// Full acceleration towards where the target will be
pub fn pursue(
    agent: &KinematicState,
    target: &KinematicState,
    params: &SteeringParams,
) -> SteeringOutput {
    let predicted = predicted_position(agent, target, params);
    let linear = (predicted - agent.position).normalize() * params.max_acceleration;

    SteeringOutput::linear(linear).with_annotation(Annotation::Circle {
        centre: predicted,
        radius: PURSUE_MARKER_RADIUS,
    })
}

/// Full acceleration away from where the target will be
pub fn evade(
    agent: &KinematicState,
    target: &KinematicState,
    params: &SteeringParams,
) -> SteeringOutput {
    let predicted = predicted_position(agent, target, params);
    let linear = (agent.position - predicted).normalize() * params.max_acceleration;

    SteeringOutput::linear(linear).with_annotation(Annotation::Circle {
        centre: predicted,
        radius: EVADE_MARKER_RADIUS,
    })
}

/// Turns to face along `direction`, no steering for a zero direction
pub fn face_direction(
    agent: &KinematicState,
    direction: Vector3,
    params: &SteeringParams,
) -> SteeringOutput {
    if direction.is_zero() {
        return SteeringOutput::none();
    }

    let steering = angle_steer(
        agent.orientation,
        agent.rotation,
        heading_of(direction),
        params,
    );
    SteeringOutput::angular(steering)
}

pub fn face(
    agent: &KinematicState,
    target: &KinematicState,
    params: &SteeringParams,
) -> SteeringOutput {
    face_direction(agent, target.position - agent.position, params)
}

pub fn face_away(
    agent: &KinematicState,
    target: &KinematicState,
    params: &SteeringParams,
) -> SteeringOutput {
    face_direction(agent, agent.position - target.position, params)
}

/// Match the target's orientation, regardless of position
pub fn align(
    agent: &KinematicState,
    target: &KinematicState,
    params: &SteeringParams,
) -> SteeringOutput {
    let steering = angle_steer(
        agent.orientation,
        agent.rotation,
        target.orientation,
        params,
    );
    SteeringOutput::angular(steering)
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use super::*;

    fn params() -> SteeringParams {
        SteeringParams {
            max_acceleration: 2.0,
            max_prediction: 2.0,
            target_radius_l: 0.5,
            slow_radius_l: 4.0,
            time_to_target: 0.5,
            max_rotation: 2.0,
            max_angular_acceleration: 3.0,
            target_radius_a: 0.05,
            slow_radius_a: 0.5,
            ..SteeringParams::default()
        }
    }

    fn at(x: F, y: F, z: F) -> KinematicState {
        KinematicState::new(Vector3::new(x, y, z), 0.0, 5.0)
    }

    #[test]
    fn seek_from_origin() {
        let out = seek(&at(0.0, 0.0, 0.0), &at(10.0, 0.0, 0.0), &params());
        assert!(out.linear.magnitude().approx_eq(2.0, (f32::EPSILON, 2)));
        assert!(out.linear.x > 0.0);
        assert_eq!(out.linear.y, 0.0);
        assert_eq!(out.linear.z, 0.0);
        assert_eq!(out.angular, 0.0);
    }

    #[test]
    fn seek_close_is_unclamped() {
        let out = seek(&at(0.0, 0.0, 0.0), &at(0.5, 0.0, 0.5), &params());
        assert_eq!(out.linear, Vector3::new(0.5, 0.0, 0.5));
    }

    #[test]
    fn flee_mirrors_seek() {
        let p = SteeringParams {
            max_acceleration: 100.0,
            ..params()
        };
        let (a, b) = (at(1.0, 0.0, 2.0), at(-3.0, 1.0, 5.0));

        assert_eq!(flee(&a, &b, &p).linear, -seek(&a, &b, &p).linear);

        // swapping agent and target
        assert_eq!(flee(&b, &a, &p).linear, seek(&a, &b, &p).linear);
    }

    #[test]
    fn arrive_inside_target_radius() {
        let agent = at(0.0, 0.0, 0.0).with_velocity(Vector3::new(1.0, 0.0, 0.0));
        let out = arrive(&agent, &at(0.2, 0.0, 0.1), &params());

        assert_eq!(out.linear, Vector3::zero());
        assert!(out.stop_velocity);
        assert!(matches!(out.annotation, Some(Annotation::Circle { .. })));
    }

    #[test]
    fn arrive_far_is_full_speed() {
        let out = arrive(&at(0.0, 0.0, 0.0), &at(0.0, 0.0, 20.0), &params());

        // desires 5 m/s from rest within 0.5s, clamped
        assert!(out.linear.magnitude().approx_eq(2.0, (f32::EPSILON, 2)));
        assert!(out.linear.z > 0.0);
        assert!(!out.stop_velocity);
        assert_eq!(out.annotation, Some(Annotation::Clear));
    }

    #[test]
    fn arrive_slows_down() {
        let p = SteeringParams {
            max_acceleration: 100.0,
            ..params()
        };

        // half way into slow radius => half of max speed, already moving at that speed
        let agent = at(0.0, 0.0, 0.0).with_velocity(Vector3::new(2.5, 0.0, 0.0));
        let out = arrive(&agent, &at(2.0, 0.0, 0.0), &p);
        assert!(out.linear.magnitude() < 1e-5, "{:?}", out.linear);
        assert_eq!(
            out.annotation,
            Some(Annotation::Circle {
                centre: Vector3::new(2.0, 0.0, 0.0),
                radius: 4.0
            })
        );
    }

    #[test]
    fn prediction_capped() {
        let p = params();
        let target = at(10.0, 0.0, 0.0).with_velocity(Vector3::new(0.0, 0.0, 1.0));

        // slow agent predicts the full amount
        let slow = at(0.0, 0.0, 0.0).with_velocity(Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(prediction_time(&slow, &target, &p), p.max_prediction);

        // fast agent predicts less
        let fast = at(0.0, 0.0, 0.0).with_velocity(Vector3::new(20.0, 0.0, 0.0));
        assert!(prediction_time(&fast, &target, &p).approx_eq(0.5, (f32::EPSILON, 2)));

        for speed in 0..50 {
            let agent = at(0.0, 0.0, 0.0).with_velocity(Vector3::new(speed as F, 0.0, 0.0));
            assert!(prediction_time(&agent, &target, &p) <= p.max_prediction);
        }
    }

    #[test]
    fn pursue_leads_target() {
        let p = params();
        let target = at(10.0, 0.0, 0.0).with_velocity(Vector3::new(0.0, 0.0, 5.0));
        let out = pursue(&at(0.0, 0.0, 0.0), &target, &p);

        // predicted at (10, 0, 10)
        assert!(out.linear.magnitude().approx_eq(2.0, (1e-6, 4)));
        assert!(out.linear.x.approx_eq(out.linear.z, (1e-6, 4)));
        assert_eq!(
            out.annotation,
            Some(Annotation::Circle {
                centre: Vector3::new(10.0, 0.0, 10.0),
                radius: PURSUE_MARKER_RADIUS
            })
        );
    }

    #[test]
    fn evade_opposes_pursue() {
        let p = params();
        let agent = at(1.0, 0.0, -2.0).with_velocity(Vector3::new(0.5, 0.0, 0.5));
        let target = at(6.0, 0.0, 3.0).with_velocity(Vector3::new(-1.0, 0.0, 2.0));

        let pursuing = pursue(&agent, &target, &p);
        let evading = evade(&agent, &target, &p);
        assert_eq!(evading.linear, -pursuing.linear);
    }

    #[test]
    fn coincident_pursuit_is_undefined() {
        let out = pursue(&at(1.0, 0.0, 1.0), &at(1.0, 0.0, 1.0), &params());
        assert!(out.linear.x.is_nan());
    }

    #[test]
    fn coincident_evasion_is_undefined() {
        let out = evade(&at(1.0, 0.0, 1.0), &at(1.0, 0.0, 1.0), &params());
        assert!(out.linear.x.is_nan());
        assert!(out.linear.z.is_nan());
    }

    #[test]
    fn coincident_arrival_stops() {
        let out = arrive(&at(1.0, 0.0, 1.0), &at(1.0, 0.0, 1.0), &params());
        assert!(out.stop_velocity);
        assert_eq!(out.linear, Vector3::zero());
    }

    #[test]
    fn face_target_behind() {
        let p = params();
        let out = face(&at(0.0, 0.0, 0.0), &at(0.0, 0.0, -5.0), &p);

        assert_ne!(out.angular, 0.0);
        assert!(out.angular.abs() <= p.max_angular_acceleration);
        assert!(!out.stop_rotation);
    }

    #[test]
    fn face_coincident() {
        let out = face(&at(1.0, 0.0, 1.0), &at(1.0, 0.0, 1.0), &params());
        assert_eq!(out, SteeringOutput::none());

        let out = face_away(&at(1.0, 0.0, 1.0), &at(1.0, 0.0, 1.0), &params());
        assert_eq!(out, SteeringOutput::none());
    }

    #[test]
    fn face_away_turns_opposite() {
        let p = params();

        // target to the right (+x), facing +z
        let agent = at(0.0, 0.0, 0.0);
        let target = at(5.0, 0.0, 0.0);

        assert!(face(&agent, &target, &p).angular > 0.0);
        assert!(face_away(&agent, &target, &p).angular < 0.0);
    }

    #[test]
    fn align_to_orientation() {
        let p = params();
        let mut target = at(100.0, 0.0, 100.0);
        target.orientation = PI / 2.0 + 4.0 * PI;

        let out = align(&at(0.0, 0.0, 0.0), &target, &p);
        assert!(out.angular > 0.0);

        // already aligned within radius
        target.orientation = 0.01;
        let agent = at(0.0, 0.0, 0.0).with_rotation(1.0);
        let out = align(&agent, &target, &p);
        assert!(out.stop_rotation);
    }

    #[test]
    fn accelerations_bounded() {
        let p = params();
        for i in 1..60 {
            let f = i as F;
            let agent = at(f.sin() * f, 0.0, f.cos())
                .with_velocity(Vector3::new(f.cos(), 0.0, -f.sin()) * 4.0)
                .with_rotation((f * 0.3).sin() * 5.0);
            let mut target = at(-f, 1.0, f * 0.5).with_velocity(Vector3::new(1.0, 0.0, f * 0.1));
            target.orientation = f * 1.7;

            for out in [
                seek(&agent, &target, &p),
                flee(&agent, &target, &p),
                arrive(&agent, &target, &p),
                pursue(&agent, &target, &p),
                evade(&agent, &target, &p),
            ] {
                assert!(out.linear.magnitude() <= p.max_acceleration * (1.0 + 1e-6));
            }

            for out in [
                face(&agent, &target, &p),
                face_away(&agent, &target, &p),
                align(&agent, &target, &p),
            ] {
                assert!(out.angular.abs() <= p.max_angular_acceleration);
            }
        }
    }
}

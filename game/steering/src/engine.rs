use common::*;
use config::SteeringParams;

use crate::behaviour;
use crate::kinematic::KinematicState;
use crate::output::SteeringOutput;
use crate::path::PathFollower;
use crate::wander::WanderState;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LinearBehaviour {
    Nop,
    Seek,
    Flee,
    Arrive,
    Pursue,
    Evade,
    /// Pursue added on top of arrive, until arrived
    ArrivePursuing,
    FollowPath,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AngularBehaviour {
    Nop,
    Face,
    FaceAway,
    Align,
    FacePath,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SteeringBehaviour {
    /// Stand still
    Nop,

    /// Drives both linear and angular
    Wander,

    Combined(LinearBehaviour, AngularBehaviour),
}

impl Default for SteeringBehaviour {
    fn default() -> Self {
        Self::Nop
    }
}

slog_value_debug!(SteeringBehaviour);

/// Binds one agent's steering tunables with its persistent wander and path state. Target-relative
/// behaviours take the agent and target as snapshots from the start of the tick
pub struct SteeringEngine {
    params: SteeringParams,
    wander: WanderState,
    path: PathFollower,
}

impl SteeringEngine {
    pub fn new(params: SteeringParams, agent: &KinematicState) -> Self {
        Self {
            params,
            wander: WanderState::new(agent.orientation),
            path: PathFollower::default(),
        }
    }

    pub fn with_path(mut self, waypoints: impl IntoIterator<Item = Vector3>) -> Self {
        self.path = PathFollower::new(waypoints);
        self
    }

    pub fn params(&self) -> &SteeringParams {
        &self.params
    }

    /// Persistent state is kept
    pub fn set_params(&mut self, params: SteeringParams) {
        self.params = params;
    }

    pub fn wander_state(&self) -> WanderState {
        self.wander
    }

    pub fn path(&self) -> &PathFollower {
        &self.path
    }

    pub fn seek(&self, agent: &KinematicState, target: &KinematicState) -> SteeringOutput {
        behaviour::seek(agent, target, &self.params)
    }

    pub fn flee(&self, agent: &KinematicState, target: &KinematicState) -> SteeringOutput {
        behaviour::flee(agent, target, &self.params)
    }

    pub fn arrive(&self, agent: &KinematicState, target: &KinematicState) -> SteeringOutput {
        behaviour::arrive(agent, target, &self.params)
    }

    pub fn pursue(&self, agent: &KinematicState, target: &KinematicState) -> SteeringOutput {
        behaviour::pursue(agent, target, &self.params)
    }

    pub fn evade(&self, agent: &KinematicState, target: &KinematicState) -> SteeringOutput {
        behaviour::evade(agent, target, &self.params)
    }

    pub fn face(&self, agent: &KinematicState, target: &KinematicState) -> SteeringOutput {
        behaviour::face(agent, target, &self.params)
    }

    pub fn face_away(&self, agent: &KinematicState, target: &KinematicState) -> SteeringOutput {
        behaviour::face_away(agent, target, &self.params)
    }

    pub fn align(&self, agent: &KinematicState, target: &KinematicState) -> SteeringOutput {
        behaviour::align(agent, target, &self.params)
    }

    pub fn wander(&mut self, agent: &KinematicState, rng: &mut impl Rng) -> SteeringOutput {
        let (output, next) = self.wander.step(agent, &self.params, rng);
        self.wander = next;
        output
    }

    pub fn follow_path(&mut self, agent: &KinematicState) -> SteeringOutput {
        self.path.follow(agent, &self.params)
    }

    pub fn face_path(&self, agent: &KinematicState) -> SteeringOutput {
        self.path.face(agent, &self.params)
    }

    /// Arrive, with pursuit added while still approaching. The sum is limited to
    /// `max_acceleration` like any other behaviour. The pursuit marker is always shown
    pub fn arrive_pursuing(
        &self,
        agent: &KinematicState,
        target: &KinematicState,
    ) -> SteeringOutput {
        let arriving = self.arrive(agent, target);
        let pursuing = self.pursue(agent, target);

        let linear = if arriving.linear.is_zero() {
            arriving.linear
        } else {
            truncate(
                arriving.linear + pursuing.linear,
                self.params.max_acceleration,
            )
        };

        SteeringOutput {
            linear,
            annotation: pursuing.annotation,
            ..arriving
        }
    }

    pub fn linear(
        &mut self,
        behaviour: LinearBehaviour,
        agent: &KinematicState,
        target: &KinematicState,
    ) -> SteeringOutput {
        match behaviour {
            LinearBehaviour::Nop => SteeringOutput::none(),
            LinearBehaviour::Seek => self.seek(agent, target),
            LinearBehaviour::Flee => self.flee(agent, target),
            LinearBehaviour::Arrive => self.arrive(agent, target),
            LinearBehaviour::Pursue => self.pursue(agent, target),
            LinearBehaviour::Evade => self.evade(agent, target),
            LinearBehaviour::ArrivePursuing => self.arrive_pursuing(agent, target),
            LinearBehaviour::FollowPath => self.follow_path(agent),
        }
    }

    pub fn angular(
        &self,
        behaviour: AngularBehaviour,
        agent: &KinematicState,
        target: &KinematicState,
    ) -> SteeringOutput {
        match behaviour {
            AngularBehaviour::Nop => SteeringOutput::none(),
            AngularBehaviour::Face => self.face(agent, target),
            AngularBehaviour::FaceAway => self.face_away(agent, target),
            AngularBehaviour::Align => self.align(agent, target),
            AngularBehaviour::FacePath => self.face_path(agent),
        }
    }

    /// Runs the given behaviour for this tick. Angular steering is evaluated before linear so
    /// that facing the path sees the waypoint from the start of the tick
    pub fn steer(
        &mut self,
        behaviour: SteeringBehaviour,
        agent: &KinematicState,
        target: &KinematicState,
        rng: &mut impl Rng,
    ) -> SteeringOutput {
        match behaviour {
            SteeringBehaviour::Nop => SteeringOutput::none(),
            SteeringBehaviour::Wander => self.wander(agent, rng),
            SteeringBehaviour::Combined(linear, angular) => {
                let angular = self.angular(angular, agent, target);
                let linear = self.linear(linear, agent, target);
                SteeringOutput::combine(linear, angular)
            }
        }
    }
}

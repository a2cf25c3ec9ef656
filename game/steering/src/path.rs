use common::*;
use config::SteeringParams;

use crate::behaviour::face_direction;
use crate::kinematic::KinematicState;
use crate::output::SteeringOutput;

/// Ordered waypoints and the index of the one currently being approached
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathFollower {
    waypoints: Vec<Vector3>,
    current: usize,
}

impl PathFollower {
    pub fn new(waypoints: impl IntoIterator<Item = Vector3>) -> Self {
        Self {
            waypoints: waypoints.into_iter().collect(),
            current: 0,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_waypoint(&self) -> Option<Vector3> {
        self.waypoints.get(self.current).copied()
    }

    pub fn waypoints(&self) -> &[Vector3] {
        &self.waypoints
    }

    /// Every waypoint has been reached, or there were none
    pub fn is_complete(&self) -> bool {
        self.current >= self.waypoints.len()
    }

    /// Full acceleration towards the current waypoint. Once within `target_radius_l`, returns no
    /// steering and the index of the next waypoint, which is headed for from the following tick.
    /// A completed path never steers again.
    pub fn follow_step(
        &self,
        agent: &KinematicState,
        params: &SteeringParams,
    ) -> (SteeringOutput, usize) {
        let waypoint = match self.current_waypoint() {
            Some(w) => w,
            None => return (SteeringOutput::none(), self.current),
        };

        let direction = waypoint - agent.position;
        if direction.magnitude() > params.target_radius_l {
            let linear = direction.normalize() * params.max_acceleration;
            (SteeringOutput::linear(linear), self.current)
        } else {
            (SteeringOutput::none(), self.current + 1)
        }
    }

    pub fn follow(&mut self, agent: &KinematicState, params: &SteeringParams) -> SteeringOutput {
        let (output, next) = self.follow_step(agent, params);
        if next != self.current {
            debug!(
                "reached waypoint";
                "index" => self.current,
                "remaining" => self.waypoints.len() - next
            );
            self.current = next;
        }

        output
    }

    /// Turn towards the current waypoint, no steering once the path is complete
    pub fn face(&self, agent: &KinematicState, params: &SteeringParams) -> SteeringOutput {
        match self.current_waypoint() {
            Some(waypoint) => face_direction(agent, waypoint - agent.position, params),
            None => SteeringOutput::none(),
        }
    }
}

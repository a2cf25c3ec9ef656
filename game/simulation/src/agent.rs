use strum::EnumIter;

use common::*;
use steering::{KinematicState, SteeringEngine, SteeringOutput};

use crate::body::PointBody;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, EnumIter)]
pub enum Role {
    Hunter,
    Wolf,
}

slog_value_display!(Role);

impl Role {
    /// The agent this role steers relative to
    pub fn opponent(self) -> Self {
        match self {
            Role::Hunter => Role::Wolf,
            Role::Wolf => Role::Hunter,
        }
    }

    fn config(self, config: &config::Config) -> &config::Agent {
        match self {
            Role::Hunter => &config.hunter,
            Role::Wolf => &config.wolf,
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Role::Hunter => "hunter",
            Role::Wolf => "wolf",
        })
    }
}

/// A steered agent: kinematic state, the body it drives and its steering engine
pub struct Agent {
    role: Role,
    state: KinematicState,
    body: PointBody,
    engine: SteeringEngine,
}

impl Agent {
    pub fn from_config(role: Role, config: &config::Config) -> Self {
        let agent = role.config(config);
        let position = agent.position();

        let state = KinematicState::new(position, agent.orientation, agent.max_speed);
        let body = PointBody::new(position, agent.orientation);
        let engine = SteeringEngine::new(agent.steering, &state).with_path(agent.path());

        debug!("created agent"; "agent" => role, "position" => ?position, "waypoints" => agent.path.len());
        Self {
            role,
            state,
            body,
            engine,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn state(&self) -> &KinematicState {
        &self.state
    }

    pub fn engine(&self) -> &SteeringEngine {
        &self.engine
    }

    pub(crate) fn engine_mut(&mut self) -> &mut SteeringEngine {
        &mut self.engine
    }

    /// Applies this tick's steering to the state and pushes the result into the body
    pub(crate) fn advance(&mut self, steering: &SteeringOutput, dt: F) {
        if steering.stop_velocity && !self.state.velocity.is_zero() {
            trace!("arrived"; "agent" => self.role, "position" => ?self.state.position);
        }

        self.state.advance(steering, dt, &mut self.body);
    }

    /// Moves the body and reads its position back
    pub(crate) fn sync(&mut self, dt: F) {
        self.body.step(dt);
        self.state.sync_position(&self.body);
    }

    /// Picks up new tunables and max speed, keeping position, velocity and behaviour state
    pub(crate) fn reconfigure(&mut self, config: &config::Config) {
        let agent = self.role.config(config);
        self.state.max_speed = agent.max_speed;
        self.engine.set_params(agent.steering);
    }
}

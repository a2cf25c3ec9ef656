use std::convert::TryFrom;

use strum::IntoEnumIterator;

use common::random::SmallRngExt;
use common::*;
use steering::{DebugDisplay, KinematicState};

use crate::agent::{Agent, Role};
use crate::phase::Phase;
use crate::render::Renderer;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("no such phase {0}, must be 0-10")]
    BadPhase(u8),

    #[error("no agent with role {0}")]
    NoSuchAgent(Role),
}

pub struct Simulation<R: Renderer> {
    agents: Vec<Agent>,
    phase: Phase,
    ticks: u64,
    random: SmallRng,

    renderer: PhantomData<R>,
}

impl<R: Renderer> Simulation<R> {
    pub fn new(config: &config::Config) -> Result<Self, SimulationError> {
        let phase = Phase::try_from(config.simulation.phase)?;
        let random = match config.simulation.random_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_shared(),
        };

        let agents = Role::iter()
            .map(|role| Agent::from_config(role, config))
            .collect();

        info!("created simulation"; "phase" => %phase);
        Ok(Self {
            agents,
            phase,
            ticks: 0,
            random,
            renderer: PhantomData,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn agent(&self, role: Role) -> Result<&Agent, SimulationError> {
        self.agents
            .iter()
            .find(|a| a.role() == role)
            .ok_or(SimulationError::NoSuchAgent(role))
    }

    /// Switches behaviours, wiping anything the previous phase drew
    pub fn set_phase(&mut self, phase: Phase, renderer: &mut R) {
        if phase == self.phase {
            return;
        }

        info!("changing phase"; "from" => %self.phase, "to" => %phase);
        self.phase = phase;

        for agent in &self.agents {
            renderer.display(agent.role()).clear_drawing();
        }
    }

    /// Applies reloaded tunables and phase without disturbing agent state. A bad phase is
    /// logged and the current one kept
    pub fn update_config(&mut self, config: &config::Config, renderer: &mut R) {
        debug!("applying config to agents");
        for agent in self.agents.iter_mut() {
            agent.reconfigure(config);
        }

        match Phase::try_from(config.simulation.phase) {
            Ok(phase) => self.set_phase(phase, renderer),
            Err(e) => warn!("ignoring reloaded phase"; "error" => %e, "phase" => %self.phase),
        }
    }

    pub fn tick(&mut self, dt: F, renderer: &mut R) -> Result<(), SimulationError> {
        // every agent steers relative to where the others were at the start of the tick
        let snapshot = self
            .agents
            .iter()
            .map(|a| (a.role(), *a.state()))
            .collect_vec();
        let state_of = |role: Role| -> Result<KinematicState, SimulationError> {
            snapshot
                .iter()
                .find(|(r, _)| *r == role)
                .map(|(_, state)| *state)
                .ok_or(SimulationError::NoSuchAgent(role))
        };

        for agent in self.agents.iter_mut() {
            let role = agent.role();
            let me = state_of(role)?;
            let target = state_of(role.opponent())?;

            let plan = self.phase.plan(role);
            let display = renderer.display(role);
            display.set_label(plan.label);

            let steering = agent
                .engine_mut()
                .steer(plan.behaviour, &me, &target, &mut self.random);

            if let Some(annotation) = steering.annotation {
                annotation.apply_to(display);
            }

            agent.advance(&steering, dt);
        }

        for agent in self.agents.iter_mut() {
            agent.sync(dt);
        }

        self.ticks += 1;
        Ok(())
    }

    pub fn render(&self, renderer: &mut R, interpolation: f64) {
        renderer.sim_start();
        for agent in &self.agents {
            renderer.sim_agent(agent.role(), agent.state(), interpolation);
        }

        if let Err(e) = renderer.sim_finish() {
            warn!("render sim_finish() failed: {:?}", e);
        }
    }
}

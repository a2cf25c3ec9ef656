use std::convert::TryFrom;

use strum::{EnumIter, IntoEnumIterator};

use common::*;
use steering::{AngularBehaviour as A, LinearBehaviour as L, SteeringBehaviour};

use crate::agent::Role;
use crate::simulation::SimulationError;

/// Demo stage, selecting which behaviours each agent runs
#[derive(Debug, Copy, Clone, Eq, PartialEq, EnumIter)]
#[repr(u8)]
pub enum Phase {
    Idle = 0,
    SeekFace,
    FleeFaceAway,
    Face,
    Wander,
    SeekAndFlee,
    ArriveAndFlee,
    PursueArriveAndWander,
    PursueAndEvade,
    AlignPursueAndWander,
    FollowPaths,
}

slog_value_debug!(Phase);

/// What an agent does in a phase, and the label it shows while doing it
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Plan {
    pub behaviour: SteeringBehaviour,
    pub label: &'static str,
}

impl Plan {
    const IDLE: Plan = Plan {
        behaviour: SteeringBehaviour::Nop,
        label: "",
    };

    const fn new(linear: L, angular: A, label: &'static str) -> Self {
        Self {
            behaviour: SteeringBehaviour::Combined(linear, angular),
            label,
        }
    }

    const fn wander(label: &'static str) -> Self {
        Self {
            behaviour: SteeringBehaviour::Wander,
            label,
        }
    }
}

impl Phase {
    pub fn plan(self, role: Role) -> Plan {
        use Phase::*;
        use Role::*;

        match (self, role) {
            (SeekFace, Hunter) => Plan::new(L::Seek, A::Face, "1: dynamic seek + face"),
            (FleeFaceAway, Wolf) => Plan::new(L::Flee, A::FaceAway, "2: dynamic flee + face away"),
            (Face, _) => Plan::new(L::Nop, A::Face, "3: dynamic face"),
            (Wander, Hunter) => Plan::wander("4: dynamic wander"),

            (SeekAndFlee, Hunter) => Plan::new(L::Seek, A::Face, "5: dynamic seek + face"),
            (SeekAndFlee, Wolf) => Plan::new(L::Flee, A::FaceAway, "5: dynamic flee + face away"),

            (ArriveAndFlee, Hunter) => Plan::new(L::Arrive, A::Face, "6: dynamic arrive + face"),
            (ArriveAndFlee, Wolf) => Plan::new(L::Flee, A::FaceAway, "6: dynamic flee + face away"),

            (PursueArriveAndWander, Hunter) => {
                Plan::new(L::ArrivePursuing, A::Face, "7: dynamic pursue + arrive")
            }
            (PursueArriveAndWander, Wolf) => Plan::wander("7: dynamic wander"),

            (PursueAndEvade, Hunter) => Plan::new(L::Pursue, A::Face, "8: dynamic pursue + face"),
            (PursueAndEvade, Wolf) => {
                Plan::new(L::Evade, A::FaceAway, "8: dynamic evade + face away")
            }

            (AlignPursueAndWander, Hunter) => {
                Plan::new(L::Pursue, A::Align, "9: dynamic align + pursue")
            }
            (AlignPursueAndWander, Wolf) => Plan::wander("9: dynamic wander"),

            (FollowPaths, _) => Plan::new(L::FollowPath, A::FacePath, "10: path follow + face"),

            _ => Plan::IDLE,
        }
    }
}

impl TryFrom<u8> for Phase {
    type Error = SimulationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Phase::iter()
            .nth(value as usize)
            .ok_or(SimulationError::BadPhase(value))
    }
}

impl Display for Phase {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} ({:?})", *self as u8, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_from_u8() {
        assert_eq!(Phase::try_from(0).unwrap(), Phase::Idle);
        assert_eq!(Phase::try_from(7).unwrap(), Phase::PursueArriveAndWander);
        assert_eq!(Phase::try_from(10).unwrap(), Phase::FollowPaths);

        for phase in Phase::iter() {
            assert_eq!(Phase::try_from(phase as u8).unwrap(), phase);
        }

        assert!(matches!(
            Phase::try_from(11),
            Err(SimulationError::BadPhase(11))
        ));
    }

    #[test]
    fn idle_does_nothing() {
        for role in Role::iter() {
            assert_eq!(Phase::Idle.plan(role), Plan::IDLE);
        }
    }

    #[test]
    fn unassigned_roles_idle() {
        assert_eq!(Phase::SeekFace.plan(Role::Wolf), Plan::IDLE);
        assert_eq!(Phase::FleeFaceAway.plan(Role::Hunter), Plan::IDLE);
        assert_eq!(Phase::Wander.plan(Role::Wolf), Plan::IDLE);
    }

    #[test]
    fn labels_match_phase() {
        for phase in Phase::iter().skip(1) {
            for role in Role::iter() {
                let plan = phase.plan(role);
                if plan.behaviour == SteeringBehaviour::Nop {
                    assert!(plan.label.is_empty());
                } else {
                    let prefix = format!("{}: ", phase as u8);
                    assert!(
                        plan.label.starts_with(&prefix),
                        "{:?} for {} is labelled {:?}",
                        phase,
                        role,
                        plan.label
                    );
                }
            }
        }
    }

    #[test]
    fn pursuit_phases() {
        assert_eq!(
            Phase::PursueAndEvade.plan(Role::Wolf).behaviour,
            SteeringBehaviour::Combined(L::Evade, A::FaceAway)
        );
        assert_eq!(
            Phase::AlignPursueAndWander.plan(Role::Hunter).behaviour,
            SteeringBehaviour::Combined(L::Pursue, A::Align)
        );
        assert_eq!(
            Phase::AlignPursueAndWander.plan(Role::Wolf).behaviour,
            SteeringBehaviour::Wander
        );
    }
}

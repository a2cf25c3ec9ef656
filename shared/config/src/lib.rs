pub use crate::config::{Agent, Config, Simulation, SteeringParams};
pub use crate::load::{get, init, load_str, ConfigError, ConfigType};

mod config;
mod load;

pub use cgmath;
pub use cgmath::{InnerSpace, MetricSpace, Zero};
pub use float_cmp::ApproxEq;
pub use itertools::*;
pub use lazy_static::lazy_static;
pub use logging::{
    self, crit, debug, error, info, prelude::*, slog_value_debug, slog_value_display, trace,
    warn,
};
pub use parking_lot;
pub use rand::{self, prelude::*};
pub use thiserror::{self, Error};

// misc imports that annoyingly get resolved to other pub exports of std/core
pub use std::{
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    marker::PhantomData,
};

pub type BoxedResult<T> = Result<T, Box<dyn std::error::Error>>;

pub type F = f32;
pub type Vector3 = cgmath::Vector3<F>;

pub use math::{forward, truncate, AXIS_FWD};

pub mod math;
pub mod random;

//! Deterministic random generator shared between all agents, reseeded from config so that demo
//! runs can be replayed
use crate::*;
use parking_lot::{Mutex, MutexGuard};
use std::ops::DerefMut;

lazy_static! {
    static ref RANDY: Mutex<SmallRng> = Mutex::new(SmallRng::from_entropy());
}

pub fn reseed(seed: u64) {
    let mut randy = RANDY.lock();
    *randy.deref_mut() = SmallRng::seed_from_u64(seed);
}

/// May block!! In debug builds panics on deadlock
pub fn get<'a>() -> MutexGuard<'a, SmallRng> {
    if cfg!(debug_assertions) {
        RANDY
            .try_lock()
            .unwrap_or_else(|| panic!("can't take the random mutex"))
    } else {
        RANDY.lock()
    }
}

pub trait SmallRngExt {
    /// Seeded from the shared generator, so is deterministic if that has been reseeded
    fn from_shared() -> SmallRng;
}

impl SmallRngExt for SmallRng {
    fn from_shared() -> SmallRng {
        let seed = get().gen::<u64>();
        SmallRng::seed_from_u64(seed)
    }
}

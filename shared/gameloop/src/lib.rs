//! Fixed timestep scene clock. Steering and integration always advance by the same `dt`, while
//! rendering happens as often as the host allows.

use std::cell::Cell;
use std::time::{Duration, Instant};

use common::*;

pub struct GameLoop {
    start_time: Instant,

    tick_duration: Duration,
    max_frameskip: u32,

    /// Time since start at which the next tick is due
    next_game_tick: Cell<Duration>,
    tick_count: Cell<u64>,
}

pub struct FrameGuard<'a> {
    game_loop: &'a GameLoop,
}

pub struct FrameActions<'a> {
    game_loop: &'a GameLoop,

    loops: u32,
    rendered: bool,
}

#[derive(Debug, PartialEq)]
pub enum FrameAction {
    Tick,
    Render { interpolation: f64 },
}

impl GameLoop {
    /// Panics if `tps` is 0, which config loading rejects
    pub fn new(tps: usize, max_frameskip: u32) -> Self {
        assert!(tps > 0, "ticks per second must be positive");

        let tick_duration = Duration::from_secs(1) / tps as u32;
        info!(
            "initialized game loop";
            "tps" => tps,
            "ms_per_tick" => tick_duration.as_millis() as u64,
            "max_frameskip" => max_frameskip
        );

        Self {
            start_time: Instant::now(),
            max_frameskip,
            tick_duration,
            next_game_tick: Cell::new(Duration::default()),
            tick_count: Cell::new(0),
        }
    }

    /// Seconds of simulated time per tick
    pub fn dt(&self) -> F {
        self.tick_duration.as_secs_f32()
    }

    /// Number of ticks handed out so far
    pub fn ticks(&self) -> u64 {
        self.tick_count.get()
    }

    /// For headless runs that don't wait for wall-clock time
    pub fn force_tick(&self) -> FrameAction {
        self.increment_next_game_tick();
        FrameAction::Tick
    }

    pub fn start_frame(&self) -> FrameGuard {
        FrameGuard { game_loop: self }
    }

    fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    fn increment_next_game_tick(&self) {
        self.next_game_tick
            .set(self.next_game_tick.get() + self.tick_duration);
        self.tick_count.set(self.tick_count.get() + 1);
    }
}

impl<'a> FrameGuard<'a> {
    pub fn actions(self) -> FrameActions<'a> {
        FrameActions {
            game_loop: self.game_loop,
            loops: 0,
            rendered: false,
        }
    }
}

impl<'a> Iterator for FrameActions<'a> {
    type Item = FrameAction;

    fn next(&mut self) -> Option<Self::Item> {
        let next_tick = &self.game_loop.next_game_tick;

        if self.game_loop.elapsed() > next_tick.get() && self.loops < self.game_loop.max_frameskip
        {
            self.game_loop.increment_next_game_tick();
            self.loops += 1;
            return Some(FrameAction::Tick);
        }

        if !self.rendered {
            self.rendered = true;

            let render_time = self.game_loop.elapsed().as_secs_f64();
            let tick = self.game_loop.tick_duration.as_secs_f64();
            let interpolation = (render_time + tick - next_tick.get().as_secs_f64()) / tick;

            return Some(FrameAction::Render {
                interpolation: interpolation.clamp(0.0, 1.0),
            });
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dt_from_tps() {
        let gameloop = GameLoop::new(50, 5);
        assert!(gameloop.dt().approx_eq(0.02, (f32::EPSILON, 2)));
    }

    #[test]
    fn forced_ticks_are_counted() {
        let gameloop = GameLoop::new(20, 5);
        assert_eq!(gameloop.ticks(), 0);

        for _ in 0..3 {
            assert_eq!(gameloop.force_tick(), FrameAction::Tick);
        }
        assert_eq!(gameloop.ticks(), 3);
    }

    #[test]
    fn always_renders_once() {
        let gameloop = GameLoop::new(20, 5);
        let renders = gameloop
            .start_frame()
            .actions()
            .filter(|a| matches!(a, FrameAction::Render { .. }))
            .count();
        assert_eq!(renders, 1);
    }
}

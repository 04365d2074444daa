use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

/// Ticks per counter run.
pub const COUNTER_STEPS: u32 = 50;
/// Milliseconds between ticks.
pub const COUNTER_TICK_MS: u32 = 30;

/// Linear count from 0 to `target` in a fixed number of equal steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterRun {
    target: f64,
    steps: u32,
    tick: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterTick {
    pub value: f64,
    pub finished: bool,
}

impl CounterRun {
    pub fn new(target: f64, steps: u32) -> Self {
        Self {
            target,
            steps: steps.max(1),
            tick: 0,
        }
    }

    /// Moves one step forward. The last step lands exactly on the target and
    /// further calls keep returning it.
    pub fn advance(&mut self) -> CounterTick {
        if self.tick < self.steps {
            self.tick += 1;
        }
        let finished = self.tick >= self.steps;
        let value = if finished {
            self.target
        } else {
            (self.target / f64::from(self.steps) * f64::from(self.tick)).min(self.target)
        };
        CounterTick { value, finished }
    }
}

/// Holds at most one timer handle. Arming drops, and so cancels, whatever was
/// there before.
#[derive(Debug)]
pub struct TimerSlot<H> {
    handle: Option<H>,
}

impl<H> Default for TimerSlot<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H> TimerSlot<H> {
    pub fn arm(&mut self, handle: H) {
        self.cancel();
        self.handle = Some(handle);
    }

    pub fn cancel(&mut self) {
        drop(self.handle.take());
    }

    pub fn take(&mut self) -> Option<H> {
        self.handle.take()
    }

    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }
}

#[derive(Default)]
struct CounterTimers {
    delay: TimerSlot<Timeout>,
    ticker: TimerSlot<Interval>,
}

impl CounterTimers {
    fn cancel(&mut self) {
        self.delay.cancel();
        self.ticker.cancel();
    }
}

/// Counts from 0 to `target` each time `active` turns true, starting after
/// `delay_ms`. A new trigger cancels the previous run first; turning inactive
/// leaves the current run alone.
#[hook]
pub fn use_animated_counter(active: bool, target: f64, delay_ms: u32) -> f64 {
    let value = use_state(|| 0.0_f64);
    let timers = use_mut_ref(CounterTimers::default);

    {
        let value = value.clone();
        let timers = timers.clone();
        use_effect_with_deps(
            move |active| {
                if *active {
                    timers.borrow_mut().cancel();
                    value.set(0.0);

                    let start = {
                        let timers = timers.clone();
                        move || start_ticking(value, timers, target)
                    };
                    timers.borrow_mut().delay.arm(Timeout::new(delay_ms, start));
                }
                || ()
            },
            active,
        );
    }

    {
        let timers = timers.clone();
        use_effect_with_deps(
            move |_| {
                move || timers.borrow_mut().cancel()
            },
            (),
        );
    }

    *value
}

fn start_ticking(value: UseStateHandle<f64>, timers: Rc<RefCell<CounterTimers>>, target: f64) {
    let mut run = CounterRun::new(target, COUNTER_STEPS);
    let ticker = {
        let timers = timers.clone();
        Interval::new(COUNTER_TICK_MS, move || {
            let tick = run.advance();
            value.set(tick.value);
            if tick.finished {
                // Cannot drop the interval from inside its own callback.
                if let Some(done) = timers.borrow_mut().ticker.take() {
                    wasm_bindgen_futures::spawn_local(async move { drop(done) });
                }
            }
        })
    };
    timers.borrow_mut().ticker.arm(ticker);
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn reaches_target_exactly_on_last_tick() {
        let mut run = CounterRun::new(25.0, COUNTER_STEPS);
        let ticks: Vec<CounterTick> = (0..COUNTER_STEPS).map(|_| run.advance()).collect();
        let last = ticks.last().unwrap();
        assert_eq!(last.value, 25.0);
        assert!(last.finished);
        assert!(ticks[..ticks.len() - 1].iter().all(|t| !t.finished));
        assert!(ticks.iter().all(|t| t.value <= 25.0));
    }

    #[test]
    fn advances_by_target_over_steps() {
        let mut run = CounterRun::new(25.0, 50);
        assert_eq!(run.advance().value, 0.5);
        assert_eq!(run.advance().value, 1.0);
    }

    #[test]
    fn values_never_decrease_or_overshoot() {
        let target = 1234.7;
        let mut run = CounterRun::new(target, 50);
        let mut prev = 0.0;
        for _ in 0..60 {
            let tick = run.advance();
            assert!(tick.value >= prev);
            assert!(tick.value <= target);
            prev = tick.value;
        }
        assert_eq!(prev, target);
    }

    #[test]
    fn zero_steps_finishes_immediately() {
        let mut run = CounterRun::new(10.0, 0);
        assert_eq!(run.advance(), CounterTick { value: 10.0, finished: true });
    }

    struct CountsDrops(Rc<Cell<u32>>);

    impl Drop for CountsDrops {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn arming_a_slot_cancels_previous_timer() {
        let dropped = Rc::new(Cell::new(0));
        let mut slot = TimerSlot::default();
        slot.arm(CountsDrops(dropped.clone()));
        assert_eq!(dropped.get(), 0);
        slot.arm(CountsDrops(dropped.clone()));
        assert_eq!(dropped.get(), 1);
        assert!(slot.is_armed());
        slot.cancel();
        assert_eq!(dropped.get(), 2);
        assert!(!slot.is_armed());
    }
}

use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_hooks::use_interval;

use crate::config::CounterTiming;

pub const COUNTER_FRAME_RATE: u32 = 60;

pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterAnimation {
    total_ticks: u32,
}

impl CounterAnimation {
    pub fn new(duration_ms: u32) -> Self {
        let total_ticks = (duration_ms * COUNTER_FRAME_RATE + 999) / 1000;
        let total_ticks = total_ticks.max(1);
        Self { total_ticks }
    }

    pub fn total_ticks(&self) -> u32 {
        self.total_ticks
    }

    pub fn tick_interval_ms(&self) -> u32 {
        1000 / COUNTER_FRAME_RATE
    }

    pub fn is_finished(&self, tick: u32) -> bool {
        tick >= self.total_ticks
    }

    pub fn progress(&self, tick: u32) -> f64 {
        ease_out_cubic(tick as f64 / self.total_ticks as f64)
    }

    pub fn value_at(&self, tick: u32, target: f64) -> f64 {
        if self.is_finished(tick) {
            target
        } else {
            (target * self.progress(tick)).round()
        }
    }

    pub fn rating_at(&self, tick: u32, target: f64) -> f64 {
        if self.is_finished(tick) {
            target
        } else {
            (target * self.progress(tick) * 10.0).round() / 10.0
        }
    }
}

pub fn tick_millis(animation: CounterAnimation, running: bool, tick: u32) -> u32 {
    if running && !animation.is_finished(tick) {
        animation.tick_interval_ms()
    } else {
        0
    }
}

#[hook]
pub fn use_counter_ticks(timing: CounterTiming, started: bool) -> u32 {
    let tick = use_state(|| 0u32);
    let running = use_state(|| false);
    let animation = CounterAnimation::new(timing.duration_ms);

    {
        let running = running.clone();
        use_effect_with_deps(
            move |started| {
                let delay = (*started)
                    .then(|| Timeout::new(timing.start_delay_ms, move || running.set(true)));
                move || drop(delay)
            },
            started,
        );
    }

    {
        let tick = tick.clone();
        let millis = tick_millis(animation, *running, *tick);
        use_interval(
            move || {
                if !animation.is_finished(*tick) {
                    tick.set(*tick + 1);
                }
            },
            millis,
        );
    }

    *tick
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_hits_both_ends() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn durations_map_to_sixty_fps_ticks() {
        assert_eq!(CounterAnimation::new(2000).total_ticks(), 120);
        assert_eq!(CounterAnimation::new(2500).total_ticks(), 150);
        assert_eq!(CounterAnimation::new(0).total_ticks(), 1);
    }

    #[test]
    fn values_rise_monotonically_and_finish_on_target() {
        let anim = CounterAnimation::new(2000);
        let mut last = 0.0;
        for tick in 0..=anim.total_ticks() {
            let v = anim.value_at(tick, 127.0);
            assert!(v >= last);
            last = v;
        }
        assert_eq!(anim.value_at(anim.total_ticks(), 127.0), 127.0);
        assert_eq!(anim.value_at(0, 127.0), 0.0);
    }

    #[test]
    fn ticking_stops_once_finished() {
        let anim = CounterAnimation::new(2000);
        assert_eq!(tick_millis(anim, false, 0), 0);
        assert_eq!(tick_millis(anim, true, 0), anim.tick_interval_ms());
        assert_eq!(tick_millis(anim, true, anim.total_ticks() - 1), anim.tick_interval_ms());
        assert_eq!(tick_millis(anim, true, anim.total_ticks()), 0);
    }

    #[test]
    fn rating_keeps_one_decimal() {
        let anim = CounterAnimation::new(2500);
        let v = anim.rating_at(75, 4.9);
        assert_eq!((v * 10.0).round() / 10.0, v);
        assert_eq!(anim.rating_at(150, 4.9), 4.9);
    }
}

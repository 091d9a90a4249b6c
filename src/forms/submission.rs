use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use log::{debug, info};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::SubmissionConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Pending,
    Succeeded,
    Failed,
}

impl SubmissionState {
    pub fn begin(self) -> Option<SubmissionState> {
        match self {
            SubmissionState::Pending => None,
            _ => Some(SubmissionState::Pending),
        }
    }

    pub fn finish(self, succeeded: bool) -> SubmissionState {
        match (self, succeeded) {
            (SubmissionState::Pending, true) => SubmissionState::Succeeded,
            (SubmissionState::Pending, false) => SubmissionState::Failed,
            (other, _) => other,
        }
    }

    pub fn is_pending(self) -> bool {
        self == SubmissionState::Pending
    }
}

pub fn decide(roll: f64, success_ratio: f64) -> bool {
    roll < success_ratio
}

pub trait Submitter {
    fn submit(&self) -> Pin<Box<dyn Future<Output = bool>>>;
}

pub struct SimulatedSubmitter {
    config: SubmissionConfig,
}

impl SimulatedSubmitter {
    pub fn new(config: SubmissionConfig) -> Self {
        Self { config }
    }
}

impl Submitter for SimulatedSubmitter {
    fn submit(&self) -> Pin<Box<dyn Future<Output = bool>>> {
        let config = self.config;
        Box::pin(async move {
            TimeoutFuture::new(config.delay_ms).await;
            let succeeded = decide(js_sys::Math::random(), config.success_ratio);
            debug!("Simulated submission finished, succeeded: {}", succeeded);
            succeeded
        })
    }
}

#[derive(Clone, PartialEq)]
pub struct Submission {
    pub state: SubmissionState,
    pub submit: Callback<()>,
    pub reset: Callback<()>,
}

#[hook]
pub fn use_submission(config: SubmissionConfig) -> Submission {
    let submitter: Rc<dyn Submitter> = Rc::new(SimulatedSubmitter::new(config));
    use_submission_with(submitter, config.reset_after_ms)
}

#[hook]
pub fn use_submission_with(submitter: Rc<dyn Submitter>, reset_after_ms: u32) -> Submission {
    let state = use_state(|| SubmissionState::Idle);
    // Callbacks outlive a render, so they read the live state from here.
    let current = use_mut_ref(|| SubmissionState::Idle);
    let reset_timer = use_mut_ref(|| None::<Timeout>);
    let mounted = use_mut_ref(|| true);

    {
        let reset_timer = reset_timer.clone();
        let mounted = mounted.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    *mounted.borrow_mut() = false;
                    reset_timer.borrow_mut().take();
                }
            },
            (),
        );
    }

    let set = {
        let state = state.clone();
        let current = current.clone();
        let mounted = mounted.clone();
        Rc::new(move |next: SubmissionState| {
            if *mounted.borrow() {
                *current.borrow_mut() = next;
                state.set(next);
            }
        })
    };

    let submit = {
        let set = set.clone();
        let current = current.clone();
        let reset_timer = reset_timer.clone();
        Callback::from(move |_: ()| {
            let Some(next) = current.borrow().begin() else {
                return;
            };
            reset_timer.borrow_mut().take();
            set(next);
            info!("Submitting form");

            let pending = submitter.submit();
            let set = set.clone();
            let current = current.clone();
            let reset_timer: Rc<RefCell<Option<Timeout>>> = reset_timer.clone();
            spawn_local(async move {
                let succeeded = pending.await;
                let settled = current.borrow().finish(succeeded);
                set(settled);
                let set = set.clone();
                *reset_timer.borrow_mut() = Some(Timeout::new(reset_after_ms, move || {
                    set(SubmissionState::Idle);
                }));
            });
        })
    };

    let reset = {
        let set = set.clone();
        let current = current.clone();
        Callback::from(move |_: ()| {
            if !current.borrow().is_pending() {
                reset_timer.borrow_mut().take();
                set(SubmissionState::Idle);
            }
        })
    };

    Submission {
        state: *state,
        submit,
        reset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_refuses_double_submit() {
        assert_eq!(SubmissionState::Idle.begin(), Some(SubmissionState::Pending));
        assert_eq!(SubmissionState::Failed.begin(), Some(SubmissionState::Pending));
        assert_eq!(SubmissionState::Succeeded.begin(), Some(SubmissionState::Pending));
        assert_eq!(SubmissionState::Pending.begin(), None);
    }

    #[test]
    fn only_pending_settles() {
        assert_eq!(SubmissionState::Pending.finish(true), SubmissionState::Succeeded);
        assert_eq!(SubmissionState::Pending.finish(false), SubmissionState::Failed);
        assert_eq!(SubmissionState::Idle.finish(true), SubmissionState::Idle);
        assert_eq!(SubmissionState::Succeeded.finish(false), SubmissionState::Succeeded);
    }

    #[test]
    fn decide_splits_at_ratio() {
        assert!(decide(0.0, 0.9));
        assert!(decide(0.89, 0.9));
        assert!(!decide(0.9, 0.9));
        assert!(!decide(0.99, 0.9));
        // a ratio of 1.0 never fails for rolls in [0, 1)
        assert!(decide(0.999_999, 1.0));
    }
}

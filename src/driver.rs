//! Sequential execution of resolved units
//!
//! The driver walks the resolved plan one unit at a time. There is no
//! parallelism: several units may touch the same file (a pointer block and
//! a seed in one directory), and the artifact counts are far too small for
//! concurrency to pay for the ordering risk it would introduce.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::Config;
use crate::error::Error;
use crate::filesystem::Vfs;
use crate::initializer::{InitResult, Initializer};

/// Cooperative cancellation handle.
///
/// The driver checks it between units only; a unit already in flight runs
/// to completion so no artifact is left half-written.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// What a run produced.
///
/// `result` holds everything completed units reported even when `error` is
/// set; a failed run still tells the user what it already changed.
#[derive(Debug)]
pub struct RunOutcome {
    pub result: InitResult,
    pub error: Option<Error>,
}

impl RunOutcome {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Run units in order, stopping at the first failure or cancellation.
pub fn execute(
    units: &[Box<dyn Initializer>],
    project: &mut dyn Vfs,
    home: &mut dyn Vfs,
    config: &Config,
    cancel: &CancelFlag,
) -> RunOutcome {
    let mut result = InitResult::new();

    for unit in units {
        if cancel.is_cancelled() {
            log::warn!("initialization interrupted before {}", unit.describe());
            return RunOutcome {
                result,
                error: Some(Error::Interrupted),
            };
        }

        log::debug!("running {}", unit.describe());
        match unit.init(project, home, config) {
            Ok(unit_result) => result.merge(unit_result),
            Err(e) => {
                log::debug!("unit failed: {}", unit.describe());
                return RunOutcome {
                    result,
                    error: Some(e),
                };
            }
        }
    }

    RunOutcome {
        result,
        error: None,
    }
}

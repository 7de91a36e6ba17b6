use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::debounce::Debouncer;

use super::calculator_model::{CalculatorField, CalculatorSnapshot};
use super::calculator_service::ContributionCalculator;

/// A calculator fed by field edits, with bursts of edits coalesced.
///
/// Each edit is a `(field, text)` pair; only the last edit of a burst reaches
/// the calculator. The final state for a given final input is the same as
/// running every edit directly.
pub struct CalculatorSession {
    calculator: Arc<Mutex<ContributionCalculator>>,
    debouncer: Debouncer<(CalculatorField, String)>,
}

impl CalculatorSession {
    /// Must be called from within a tokio runtime.
    pub fn new(delay: Duration) -> Self {
        Self::with_calculator(ContributionCalculator::new(), delay)
    }

    pub fn with_calculator(calculator: ContributionCalculator, delay: Duration) -> Self {
        let calculator = Arc::new(Mutex::new(calculator));
        let target = calculator.clone();
        let debouncer = Debouncer::spawn(delay, move |(field, raw): (CalculatorField, String)| {
            lock(&target).on_field_changed(field, &raw);
        });
        CalculatorSession {
            calculator,
            debouncer,
        }
    }

    /// Queues an edit. Returns `false` once the session has stopped.
    pub fn edit(&self, field: CalculatorField, raw: impl Into<String>) -> bool {
        self.debouncer.call((field, raw.into()))
    }

    pub fn snapshot(&self) -> CalculatorSnapshot {
        lock(&self.calculator).snapshot()
    }

    /// Applies any pending edit immediately and returns the final state.
    pub async fn finish(self) -> CalculatorSnapshot {
        let CalculatorSession {
            calculator,
            debouncer,
        } = self;
        debouncer.finish().await;
        let snapshot = lock(&calculator).snapshot();
        snapshot
    }
}

fn lock(calculator: &Mutex<ContributionCalculator>) -> MutexGuard<'_, ContributionCalculator> {
    calculator.lock().unwrap_or_else(PoisonError::into_inner)
}

use std::{cell::RefCell, rc::Rc};

use argmin::core::{Error, KV, observers::Observe};

use crate::swarm::SwarmState;

/// Records the global-best cost and every personal-best cost after
/// initialization and after each iteration.
///
/// Clones share the same history, so a clone can be handed to the executor
/// and read back afterwards.
#[derive(Clone, Default)]
pub struct CostHistoryObserver {
    cost_history: Rc<RefCell<Vec<f64>>>,
    personal_best_history: Rc<RefCell<Vec<Vec<f64>>>>,
}

impl CostHistoryObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Global-best cost per observation; entry 0 is the post-initialization cost.
    pub fn cost_history(&self) -> Vec<f64> {
        self.cost_history.borrow().clone()
    }

    /// Personal-best costs per observation, indexed `[observation][particle]`.
    pub fn personal_best_history(&self) -> Vec<Vec<f64>> {
        self.personal_best_history.borrow().clone()
    }

    fn record(&self, state: &SwarmState) {
        self.cost_history.borrow_mut().push(state.get_cost());
        let personal_bests = state
            .get_population()
            .map(|particles| particles.iter().map(|p| p.best_cost).collect())
            .unwrap_or_default();
        self.personal_best_history.borrow_mut().push(personal_bests);
    }
}

impl Observe<SwarmState> for CostHistoryObserver {
    fn observe_init(&mut self, _name: &str, state: &SwarmState, _kv: &KV) -> Result<(), Error> {
        self.record(state);
        Ok(())
    }

    fn observe_iter(&mut self, state: &SwarmState, _kv: &KV) -> Result<(), Error> {
        self.record(state);
        Ok(())
    }
}

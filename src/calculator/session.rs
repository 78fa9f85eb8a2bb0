//! All three calculators of one page session, sharing a store

use super::{GasCalculator, MortgageCalculator, StudentLoanCalculator};
use crate::storage::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Headline figure from each calculator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactSummary {
    /// Monthly payment change from the rate move (old − new)
    pub mortgage_delta: f64,
    /// Monthly student loan interest
    pub student_interest: f64,
    /// Monthly fuel cost change
    pub gas_impact: f64,
}

#[derive(Debug, Clone, Default)]
pub struct CalculatorSession {
    pub mortgage: MortgageCalculator,
    pub student_loan: StudentLoanCalculator,
    pub gas: GasCalculator,
}

impl CalculatorSession {
    /// Fresh session on documented defaults, nothing persisted
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore every calculator from `store`; later edits are written back.
    /// Keys are namespaced per calculator so the store can be shared.
    pub fn restore(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            mortgage: MortgageCalculator::restore(Arc::clone(&store)),
            student_loan: StudentLoanCalculator::restore(Arc::clone(&store)),
            gas: GasCalculator::restore(store),
        }
    }

    pub fn reset_all(&mut self) {
        self.mortgage.reset();
        self.student_loan.reset();
        self.gas.reset();
    }

    pub fn summary(&self) -> ImpactSummary {
        ImpactSummary {
            mortgage_delta: self.mortgage.outputs().delta,
            student_interest: self.student_loan.outputs().monthly_interest,
            gas_impact: self.gas.outputs().monthly_impact,
        }
    }
}

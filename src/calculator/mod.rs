//! Derived-state layer: raw inputs in, memoized outputs out
//!
//! Each calculator kind is described by a [`Calculator`] implementation (its
//! fields, defaults and pure `compute`). [`CalculatorState`] holds one
//! instance's raw inputs, keeps the outputs in step with them, and mirrors
//! every input into an optional [`KeyValueStore`].

mod mortgage;
mod student_loan;
mod gas;
mod session;

pub use mortgage::{Mortgage, MortgageField, MortgageInputs, MortgageResult};
pub use student_loan::{StudentLoan, StudentLoanField, StudentLoanInputs, StudentLoanResult};
pub use gas::{Gas, GasField, GasInputs, GasResult};
pub use session::{CalculatorSession, ImpactSummary};

use crate::error::{CalcError, Result};
use crate::storage::KeyValueStore;
use std::fmt;
use std::sync::Arc;

pub type MortgageCalculator = CalculatorState<Mortgage>;
pub type StudentLoanCalculator = CalculatorState<StudentLoan>;
pub type GasCalculator = CalculatorState<Gas>;

/// An editable input of a calculator
pub trait InputField: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Every field, in display order
    const ALL: &'static [Self];

    /// Stable name used for persistence keys and lookup by name
    fn key(self) -> &'static str;
}

/// One kind of calculator: its inputs, outputs and the formulas joining them
pub trait Calculator {
    /// Prefix for this calculator's persistence keys
    const NAMESPACE: &'static str;

    type Field: InputField;
    /// `Default` must produce the documented defaults restored by `reset`.
    type Inputs: Clone + Default + PartialEq + fmt::Debug;
    type Outputs: Clone + PartialEq + fmt::Debug;

    fn get(inputs: &Self::Inputs, field: Self::Field) -> f64;

    fn set(inputs: &mut Self::Inputs, field: Self::Field, value: f64);

    /// Pure derivation of outputs from inputs
    fn compute(inputs: &Self::Inputs) -> Self::Outputs;

    /// Look a field up by its key
    fn field(name: &str) -> Result<Self::Field> {
        <Self::Field as InputField>::ALL
            .iter()
            .copied()
            .find(|f| f.key() == name)
            .ok_or_else(|| CalcError::UnknownField {
                calculator: Self::NAMESPACE,
                field: name.to_string(),
            })
    }
}

/// Persistence key for a field, e.g. `mortgage.principal`
pub fn storage_key<C: Calculator>(field: C::Field) -> String {
    format!("{}.{}", C::NAMESPACE, field.key())
}

/// One live calculator: raw inputs plus the outputs derived from them
pub struct CalculatorState<C: Calculator> {
    inputs: C::Inputs,
    outputs: C::Outputs,
    store: Option<Arc<dyn KeyValueStore>>,
}

impl<C: Calculator> CalculatorState<C> {
    /// Documented defaults, not persisted
    pub fn new() -> Self {
        Self::with_inputs(C::Inputs::default())
    }

    pub fn with_inputs(inputs: C::Inputs) -> Self {
        let outputs = C::compute(&inputs);
        Self {
            inputs,
            outputs,
            store: None,
        }
    }

    /// Load inputs from `store` and keep writing changes back to it.
    ///
    /// Each field is read once. Absent keys keep their default; values that
    /// cannot be read or parsed are logged and also fall back to the default.
    pub fn restore(store: Arc<dyn KeyValueStore>) -> Self {
        let mut inputs = C::Inputs::default();
        for &field in <C::Field as InputField>::ALL {
            let key = storage_key::<C>(field);
            match store.get(&key) {
                Ok(Some(raw)) => match raw.trim().parse::<f64>() {
                    Ok(value) => C::set(&mut inputs, field, value),
                    Err(_) => log::warn!("ignoring unparseable value {raw:?} stored under {key}"),
                },
                Ok(None) => {}
                Err(e) => log::warn!("failed to read {key}: {e}"),
            }
        }
        log::debug!("restored {} inputs: {:?}", C::NAMESPACE, inputs);

        let mut state = Self::with_inputs(inputs);
        state.store = Some(store);
        state
    }

    /// Store a raw value and recompute.
    ///
    /// No validation: NaN or negative values are kept as entered and flow
    /// through the formulas. Setting a field to its current value is a no-op.
    pub fn set_input(&mut self, field: C::Field, value: f64) {
        if C::get(&self.inputs, field).to_bits() == value.to_bits() {
            return;
        }
        C::set(&mut self.inputs, field, value);
        self.recompute();
        self.persist(field);
    }

    /// Replace every input at once (e.g. when loading a saved profile)
    pub fn replace_inputs(&mut self, inputs: C::Inputs) {
        self.inputs = inputs;
        self.recompute();
        self.persist_all();
    }

    /// Restore the documented defaults and persist them
    pub fn reset(&mut self) {
        self.replace_inputs(C::Inputs::default());
    }

    pub fn input(&self, field: C::Field) -> f64 {
        C::get(&self.inputs, field)
    }

    pub fn inputs(&self) -> &C::Inputs {
        &self.inputs
    }

    /// Outputs for the current inputs
    pub fn outputs(&self) -> &C::Outputs {
        &self.outputs
    }

    fn recompute(&mut self) {
        self.outputs = C::compute(&self.inputs);
        log::debug!("{} recomputed: {:?}", C::NAMESPACE, self.outputs);
    }

    fn persist(&self, field: C::Field) {
        let Some(store) = &self.store else {
            return;
        };
        let key = storage_key::<C>(field);
        let value = C::get(&self.inputs, field).to_string();
        if let Err(e) = store.set(&key, &value) {
            log::warn!("failed to persist {key}: {e}");
        }
    }

    fn persist_all(&self) {
        for &field in <C::Field as InputField>::ALL {
            self.persist(field);
        }
    }
}

impl<C: Calculator> Default for CalculatorState<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Calculator> Clone for CalculatorState<C> {
    fn clone(&self) -> Self {
        Self {
            inputs: self.inputs.clone(),
            outputs: self.outputs.clone(),
            store: self.store.clone(),
        }
    }
}

impl<C: Calculator> fmt::Debug for CalculatorState<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalculatorState")
            .field("calculator", &C::NAMESPACE)
            .field("inputs", &self.inputs)
            .field("outputs", &self.outputs)
            .field("persisted", &self.store.is_some())
            .finish()
    }
}

//! Constraint solver port and the kasuari-backed solve pass
//!
//! Marks publish their intrinsic geometric relationships as linear
//! equalities through the [`ConstraintSolver`] port; they never see the
//! solver's internals. This module also provides the concrete adapter around
//! the kasuari Cassowary solver and the per-mark solve pass: current values
//! of primary attributes anchor the system as edit suggestions, required
//! constraints determine the derived attributes, and the solution is written
//! back into the store in one batch.

use std::collections::HashMap;

use kasuari::{
    Expression, Solver as KasuariSolver, Strength as KasuariStrength, Term,
    Variable as KasuariVariable, WeightedRelation::*,
};
use thiserror::Error;

use crate::attrs::{AttributeStore, SolverRole};
use crate::marks::MarkClass;

/// Coarse priority tag for an emitted constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    /// Must be satisfied exactly
    Hard,
    Strong,
    Medium,
    Weak,
}

impl Strength {
    fn to_kasuari(self) -> KasuariStrength {
        match self {
            Strength::Hard => KasuariStrength::REQUIRED,
            Strength::Strong => KasuariStrength::STRONG,
            Strength::Medium => KasuariStrength::MEDIUM,
            Strength::Weak => KasuariStrength::WEAK,
        }
    }
}

/// Opaque handle to one (element, attribute) solver variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariableId(usize);

/// The port marks emit constraints through.
///
/// `add_linear` declares `bias + sum(lhs) = sum(rhs)`. Emission never
/// signals errors: a mark's constraint set is structural (a function of
/// which attributes exist, not their values), so failures can only be
/// adapter-level and surface when the host solves.
pub trait ConstraintSolver {
    /// Get or create the variable for an element's attribute
    fn attr(&mut self, element_id: &str, attribute: &str) -> VariableId;

    /// Declare the linear equality `bias + sum(lhs) = sum(rhs)`,
    /// where each term is (coefficient, variable)
    fn add_linear(
        &mut self,
        strength: Strength,
        bias: f64,
        lhs: &[(f64, VariableId)],
        rhs: &[(f64, VariableId)],
    );
}

/// Errors from the kasuari adapter
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("unsatisfiable constraint: {0}")]
    Unsatisfiable(String),

    #[error("duplicate constraint: {0}")]
    Duplicate(String),

    #[error("internal solver error: {0}")]
    Internal(String),
}

/// Adapter implementing the port on top of the kasuari solver
pub struct KasuariContext {
    solver: KasuariSolver,
    vars: Vec<KasuariVariable>,
    values: Vec<f64>,
    index: HashMap<(String, String), VariableId>,
    by_var: HashMap<KasuariVariable, VariableId>,
    edited: Vec<VariableId>,
    /// First emission failure, surfaced when the host solves
    pending: Option<SolveError>,
}

impl KasuariContext {
    pub fn new() -> Self {
        Self {
            solver: KasuariSolver::new(),
            vars: Vec::new(),
            values: Vec::new(),
            index: HashMap::new(),
            by_var: HashMap::new(),
            edited: Vec::new(),
            pending: None,
        }
    }

    fn expression(&self, terms: &[(f64, VariableId)], constant: f64) -> Expression {
        Expression::new(
            terms
                .iter()
                .map(|&(coefficient, id)| Term::new(self.vars[id.0], coefficient))
                .collect(),
            constant,
        )
    }

    /// Anchor an attribute at its current value with a strong edit variable
    pub fn edit(
        &mut self,
        element_id: &str,
        attribute: &str,
        value: f64,
    ) -> Result<(), SolveError> {
        let id = self.attr(element_id, attribute);
        let var = self.vars[id.0];
        if !self.edited.contains(&id) {
            self.solver
                .add_edit_variable(var, KasuariStrength::STRONG)
                .map_err(|e| SolveError::Internal(format!("failed to add edit variable: {}", e)))?;
            self.edited.push(id);
        }
        self.solver
            .suggest_value(var, value)
            .map_err(|e| SolveError::Internal(format!("failed to suggest value: {}", e)))?;
        Ok(())
    }

    /// Pull changed values out of kasuari into the local solution table
    pub fn refresh(&mut self) {
        for (var, value) in self.solver.fetch_changes() {
            if let Some(&id) = self.by_var.get(var) {
                self.values[id.0] = *value;
            }
        }
    }

    /// Solved value of a variable (0 until constrained or suggested)
    pub fn value(&self, id: VariableId) -> f64 {
        self.values[id.0]
    }

    /// Surface the first emission failure, if any
    pub fn take_pending(&mut self) -> Result<(), SolveError> {
        match self.pending.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl Default for KasuariContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstraintSolver for KasuariContext {
    fn attr(&mut self, element_id: &str, attribute: &str) -> VariableId {
        let key = (element_id.to_string(), attribute.to_string());
        if let Some(&id) = self.index.get(&key) {
            return id;
        }
        let var = KasuariVariable::new();
        let id = VariableId(self.vars.len());
        self.vars.push(var);
        self.values.push(0.0);
        self.index.insert(key, id);
        self.by_var.insert(var, id);
        id
    }

    fn add_linear(
        &mut self,
        strength: Strength,
        bias: f64,
        lhs: &[(f64, VariableId)],
        rhs: &[(f64, VariableId)],
    ) {
        let lhs_expr = self.expression(lhs, bias);
        let rhs_expr = self.expression(rhs, 0.0);
        let result = self
            .solver
            .add_constraint(lhs_expr | EQ(strength.to_kasuari()) | rhs_expr);
        if let Err(e) = result {
            let err = match e {
                kasuari::AddConstraintError::UnsatisfiableConstraint => {
                    SolveError::Unsatisfiable(format!("{:?} = {:?}", lhs, rhs))
                }
                kasuari::AddConstraintError::DuplicateConstraint => {
                    SolveError::Duplicate(format!("{:?} = {:?}", lhs, rhs))
                }
                kasuari::AddConstraintError::InternalSolverError(msg) => {
                    SolveError::Internal(msg.to_string())
                }
            };
            if self.pending.is_none() {
                self.pending = Some(err);
            }
        }
    }
}

/// Run one solve pass for a single mark instance.
///
/// The mark re-emits its structural constraints, current primary attribute
/// values are suggested as strong edits (so handle edits applied to the
/// store are authoritative), and the consistent assignment is written back.
pub fn solve_mark(
    mark: &dyn MarkClass,
    element_id: &str,
    store: &mut AttributeStore,
) -> Result<(), SolveError> {
    let mut ctx = KasuariContext::new();
    mark.build_constraints(element_id, &mut ctx);
    ctx.take_pending()?;

    for spec in mark.schema() {
        if spec.role == SolverRole::Primary {
            let value = store.number(spec.name);
            ctx.edit(element_id, spec.name, value)?;
        }
    }

    ctx.refresh();

    for spec in mark.schema() {
        if matches!(spec.role, SolverRole::Primary | SolverRole::Derived) {
            let id = ctx.attr(element_id, spec.name);
            store.set_number(spec.name, ctx.value(id));
        }
    }
    Ok(())
}

/// Test double that records emitted equations instead of solving them
#[derive(Debug, Default)]
pub struct RecordingSolver {
    names: Vec<String>,
    index: HashMap<(String, String), VariableId>,
    pub constraints: Vec<RecordedConstraint>,
}

/// One equation captured by [`RecordingSolver`], with variables resolved to
/// "element.attribute" names
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedConstraint {
    pub strength: Strength,
    pub bias: f64,
    pub lhs: Vec<(f64, String)>,
    pub rhs: Vec<(f64, String)>,
}

impl RecordingSolver {
    pub fn new() -> Self {
        Self::default()
    }

    fn resolve(&self, terms: &[(f64, VariableId)]) -> Vec<(f64, String)> {
        terms
            .iter()
            .map(|&(c, id)| (c, self.names[id.0].clone()))
            .collect()
    }
}

impl ConstraintSolver for RecordingSolver {
    fn attr(&mut self, element_id: &str, attribute: &str) -> VariableId {
        let key = (element_id.to_string(), attribute.to_string());
        if let Some(&id) = self.index.get(&key) {
            return id;
        }
        let id = VariableId(self.names.len());
        self.names.push(format!("{}.{}", element_id, attribute));
        self.index.insert(key, id);
        id
    }

    fn add_linear(
        &mut self,
        strength: Strength,
        bias: f64,
        lhs: &[(f64, VariableId)],
        rhs: &[(f64, VariableId)],
    ) {
        let recorded = RecordedConstraint {
            strength,
            bias,
            lhs: self.resolve(lhs),
            rhs: self.resolve(rhs),
        };
        self.constraints.push(recorded);
    }
}

//! Quadratic binary programs.
//!
//! A [`QuadraticProgram`] is an objective over binary variables:
//! a constant offset, linear terms, and quadratic terms on variable
//! pairs, together with an optimization sense. It carries no
//! constraints — the programs formulated here are unconstrained
//! (that is the U in QUBO).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use skera_graph::Assignment;

use crate::error::{QuboError, QuboResult};

/// Objective direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sense {
    /// Smaller objective values are better.
    Minimize,
    /// Larger objective values are better.
    Maximize,
}

impl Sense {
    /// LP-format section keyword for this sense.
    pub fn keyword(self) -> &'static str {
        match self {
            Sense::Minimize => "Minimize",
            Sense::Maximize => "Maximize",
        }
    }
}

/// An unconstrained quadratic program over binary variables.
///
/// Quadratic terms are stored on unordered index pairs with the smaller
/// index first. A term on `(i, i)` is folded into the linear part,
/// since `x² = x` for a binary variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawProgram", into = "RawProgram")]
pub struct QuadraticProgram {
    name: String,
    sense: Sense,
    variables: Vec<String>,
    linear: Vec<f64>,
    quadratic: BTreeMap<(usize, usize), f64>,
    offset: f64,
}

impl QuadraticProgram {
    /// Create an empty program with the given name.
    ///
    /// New programs maximize by default; use
    /// [`QuadraticProgram::to_minimization`] to flip.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sense: Sense::Maximize,
            variables: Vec::new(),
            linear: Vec::new(),
            quadratic: BTreeMap::new(),
            offset: 0.0,
        }
    }

    /// Add a binary variable and return its index.
    pub fn binary_var(&mut self, name: impl Into<String>) -> QuboResult<usize> {
        let name = name.into();
        if self.variables.contains(&name) {
            return Err(QuboError::DuplicateVariable(name));
        }
        self.variables.push(name);
        self.linear.push(0.0);
        Ok(self.variables.len() - 1)
    }

    /// Accumulate a linear coefficient onto variable `i`.
    pub fn add_linear(&mut self, i: usize, coeff: f64) -> QuboResult<()> {
        self.check_index(i)?;
        self.linear[i] += coeff;
        Ok(())
    }

    /// Accumulate a quadratic coefficient onto the pair `(i, j)`.
    ///
    /// The pair is unordered; `(i, i)` folds into the linear part.
    pub fn add_quadratic(&mut self, i: usize, j: usize, coeff: f64) -> QuboResult<()> {
        self.check_index(i)?;
        self.check_index(j)?;
        if i == j {
            self.linear[i] += coeff;
        } else {
            let key = (i.min(j), i.max(j));
            *self.quadratic.entry(key).or_insert(0.0) += coeff;
        }
        Ok(())
    }

    /// Accumulate a constant onto the objective.
    pub fn add_offset(&mut self, coeff: f64) {
        self.offset += coeff;
    }

    /// Evaluate the objective at a 0/1 point.
    ///
    /// The value is the objective as written; the sense says whether a
    /// larger or smaller value is better.
    pub fn evaluate(&self, assignment: &Assignment) -> QuboResult<f64> {
        if assignment.len() as usize != self.variables.len() {
            return Err(QuboError::ArityMismatch {
                expected: self.variables.len(),
                got: assignment.len(),
            });
        }
        let bits = assignment.bits();
        let mut value = self.offset;
        for (i, &coeff) in self.linear.iter().enumerate() {
            if bits[i] {
                value += coeff;
            }
        }
        for (&(i, j), &coeff) in &self.quadratic {
            if bits[i] && bits[j] {
                value += coeff;
            }
        }
        Ok(value)
    }

    /// The same objective expressed as a minimization.
    ///
    /// A maximization is negated term by term (including the offset) so
    /// that optimal points are preserved; a program that already
    /// minimizes is returned unchanged.
    pub fn to_minimization(&self) -> Self {
        match self.sense {
            Sense::Minimize => self.clone(),
            Sense::Maximize => Self {
                name: self.name.clone(),
                sense: Sense::Minimize,
                variables: self.variables.clone(),
                linear: self.linear.iter().map(|c| -c).collect(),
                quadratic: self.quadratic.iter().map(|(&k, &c)| (k, -c)).collect(),
                offset: -self.offset,
            },
        }
    }

    /// Program name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Objective direction.
    pub fn sense(&self) -> Sense {
        self.sense
    }

    /// Number of binary variables.
    pub fn num_vars(&self) -> usize {
        self.variables.len()
    }

    /// Variable names, in index order.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Linear coefficients, in variable order.
    pub fn linear(&self) -> &[f64] {
        &self.linear
    }

    /// Quadratic coefficients on unordered index pairs.
    pub fn quadratic(&self) -> impl Iterator<Item = ((usize, usize), f64)> + '_ {
        self.quadratic.iter().map(|(&k, &c)| (k, c))
    }

    /// Constant term of the objective.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub(crate) fn from_parts(
        name: String,
        sense: Sense,
        variables: Vec<String>,
        linear: Vec<f64>,
        quadratic: BTreeMap<(usize, usize), f64>,
        offset: f64,
    ) -> Self {
        debug_assert_eq!(variables.len(), linear.len());
        Self {
            name,
            sense,
            variables,
            linear,
            quadratic,
            offset,
        }
    }

    fn check_index(&self, i: usize) -> QuboResult<()> {
        if i >= self.variables.len() {
            return Err(QuboError::UnknownVariable {
                index: i,
                num_vars: self.variables.len(),
            });
        }
        Ok(())
    }
}

/// Wire form of a program; quadratic terms as `[i, j, coeff]` triples.
#[derive(Serialize, Deserialize)]
struct RawProgram {
    name: String,
    sense: Sense,
    variables: Vec<String>,
    linear: Vec<f64>,
    quadratic: Vec<(usize, usize, f64)>,
    offset: f64,
}

impl TryFrom<RawProgram> for QuadraticProgram {
    type Error = QuboError;

    fn try_from(raw: RawProgram) -> Result<Self, Self::Error> {
        if raw.linear.len() != raw.variables.len() {
            return Err(QuboError::Malformed(format!(
                "{} linear coefficients for {} variables",
                raw.linear.len(),
                raw.variables.len()
            )));
        }
        let mut seen = std::collections::BTreeSet::new();
        for name in &raw.variables {
            if !seen.insert(name) {
                return Err(QuboError::DuplicateVariable(name.clone()));
            }
        }
        let mut program = QuadraticProgram::from_parts(
            raw.name,
            raw.sense,
            raw.variables,
            raw.linear,
            BTreeMap::new(),
            raw.offset,
        );
        for (i, j, coeff) in raw.quadratic {
            program.add_quadratic(i, j, coeff)?;
        }
        Ok(program)
    }
}

impl From<QuadraticProgram> for RawProgram {
    fn from(program: QuadraticProgram) -> Self {
        RawProgram {
            name: program.name,
            sense: program.sense,
            variables: program.variables,
            linear: program.linear,
            quadratic: program
                .quadratic
                .into_iter()
                .map(|((i, j), c)| (i, j, c))
                .collect(),
            offset: program.offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy_program() -> QuadraticProgram {
        let mut qp = QuadraticProgram::new("toy");
        let x0 = qp.binary_var("x0").unwrap();
        let x1 = qp.binary_var("x1").unwrap();
        qp.add_linear(x0, 1.0).unwrap();
        qp.add_linear(x1, 1.0).unwrap();
        qp.add_quadratic(x0, x1, -2.0).unwrap();
        qp
    }

    #[test]
    fn test_duplicate_variable_rejected() {
        let mut qp = QuadraticProgram::new("dup");
        qp.binary_var("x0").unwrap();
        let err = qp.binary_var("x0").unwrap_err();
        assert!(matches!(err, QuboError::DuplicateVariable(_)));
    }

    #[test]
    fn test_unknown_index_rejected() {
        let mut qp = QuadraticProgram::new("idx");
        qp.binary_var("x0").unwrap();
        assert!(matches!(
            qp.add_linear(1, 1.0),
            Err(QuboError::UnknownVariable {
                index: 1,
                num_vars: 1
            })
        ));
        assert!(qp.add_quadratic(0, 1, 1.0).is_err());
    }

    #[test]
    fn test_quadratic_pair_is_unordered() {
        let mut qp = QuadraticProgram::new("sym");
        qp.binary_var("x0").unwrap();
        qp.binary_var("x1").unwrap();
        qp.add_quadratic(1, 0, 2.0).unwrap();
        qp.add_quadratic(0, 1, 1.0).unwrap();
        let terms: Vec<_> = qp.quadratic().collect();
        assert_eq!(terms, vec![((0, 1), 3.0)]);
    }

    #[test]
    fn test_diagonal_folds_to_linear() {
        let mut qp = QuadraticProgram::new("diag");
        qp.binary_var("x0").unwrap();
        qp.add_quadratic(0, 0, 5.0).unwrap();
        assert_eq!(qp.linear(), &[5.0]);
        assert_eq!(qp.quadratic().count(), 0);
    }

    #[test]
    fn test_evaluate() {
        let qp = toy_program();
        let on_01: Assignment = "01".parse().unwrap();
        let on_11: Assignment = "11".parse().unwrap();
        let off: Assignment = "00".parse().unwrap();
        assert_eq!(qp.evaluate(&on_01).unwrap(), 1.0);
        assert_eq!(qp.evaluate(&on_11).unwrap(), 0.0);
        assert_eq!(qp.evaluate(&off).unwrap(), 0.0);
    }

    #[test]
    fn test_evaluate_arity_mismatch() {
        let qp = toy_program();
        let err = qp.evaluate(&Assignment::zeros(3)).unwrap_err();
        assert!(matches!(
            err,
            QuboError::ArityMismatch {
                expected: 2,
                got: 3
            }
        ));
    }

    #[test]
    fn test_to_minimization_negates() {
        let qp = toy_program();
        let min = qp.to_minimization();
        assert_eq!(min.sense(), Sense::Minimize);
        let point: Assignment = "01".parse().unwrap();
        assert_eq!(min.evaluate(&point).unwrap(), -qp.evaluate(&point).unwrap());

        // Already minimizing: unchanged.
        assert_eq!(min.to_minimization(), min);
    }

    #[test]
    fn test_serde_roundtrip() {
        let qp = toy_program();
        let json = serde_json::to_string(&qp).unwrap();
        let back: QuadraticProgram = serde_json::from_str(&json).unwrap();
        assert_eq!(back, qp);
    }

    #[test]
    fn test_serde_rejects_malformed() {
        let json = r#"{
            "name": "bad",
            "sense": "maximize",
            "variables": ["x0"],
            "linear": [0.0, 1.0],
            "quadratic": [],
            "offset": 0.0
        }"#;
        assert!(serde_json::from_str::<QuadraticProgram>(json).is_err());
    }
}

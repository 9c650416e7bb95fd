//! Partition assignments.
//!
//! An [`Assignment`] is an ordered sequence of binary values, one per
//! vertex index, describing a 2-coloring of a graph: vertices with bit 0
//! form one side of the partition, vertices with bit 1 the other. An
//! assignment is immutable once created.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{GraphError, GraphResult};
use crate::vertex::VertexId;

/// A partition assignment: one bit per vertex, vertex 0 first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct Assignment {
    bits: Vec<bool>,
}

impl Assignment {
    /// The all-zero assignment on `n` vertices (every vertex on side 0).
    pub fn zeros(n: u32) -> Self {
        Self {
            bits: vec![false; n as usize],
        }
    }

    /// Build an assignment from explicit booleans, vertex 0 first.
    pub fn from_bools(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Build an assignment from 0/1 values, vertex 0 first.
    ///
    /// Any value other than 0 or 1 is rejected.
    pub fn from_bits(bits: &[u8]) -> GraphResult<Self> {
        let mut out = Vec::with_capacity(bits.len());
        for (index, &bit) in bits.iter().enumerate() {
            match bit {
                0 => out.push(false),
                1 => out.push(true),
                other => {
                    return Err(GraphError::NotBinary {
                        index,
                        value: other.to_string(),
                    });
                }
            }
        }
        Ok(Self { bits: out })
    }

    /// Build the assignment at position `rank` in lexicographic order.
    ///
    /// Candidates are ordered as lexicographic bit tuples with vertex 0
    /// most significant: rank 0 is all-zero, rank 1 flips the last
    /// vertex, and rank 2^n − 1 is all-one. This is the order a
    /// Cartesian product of {0, 1} repeated `n` times produces.
    ///
    /// Only the low `n` bits of `rank` are read. Supports `n <= 64`.
    pub fn from_lex_rank(n: u32, rank: u64) -> Self {
        debug_assert!(n <= 64, "lexicographic rank limited to 64 vertices");
        let bits = (0..n).map(|i| (rank >> (n - 1 - i)) & 1 == 1).collect();
        Self { bits }
    }

    /// Position of this assignment in lexicographic order.
    ///
    /// Inverse of [`Assignment::from_lex_rank`]; the empty assignment has
    /// rank 0.
    pub fn lex_rank(&self) -> u64 {
        debug_assert!(self.bits.len() <= 64);
        self.bits
            .iter()
            .fold(0u64, |rank, &bit| (rank << 1) | u64::from(bit))
    }

    /// Number of bits (vertices) in this assignment.
    pub fn len(&self) -> u32 {
        self.bits.len() as u32
    }

    /// Whether this is the empty assignment (zero vertices).
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The bit for a vertex, or `None` when the vertex is out of range.
    pub fn bit(&self, v: VertexId) -> Option<bool> {
        self.bits.get(v.0 as usize).copied()
    }

    /// The bits in vertex order.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Iterate over the bits in vertex order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    /// Split the vertices into the two sides of the partition.
    ///
    /// Returns `(side0, side1)` where `side0` holds the vertices with
    /// bit 0, in increasing vertex order.
    pub fn partition_sets(&self) -> (Vec<VertexId>, Vec<VertexId>) {
        let mut side0 = Vec::new();
        let mut side1 = Vec::new();
        for (i, &bit) in self.bits.iter().enumerate() {
            let v = VertexId(i as u32);
            if bit {
                side1.push(v);
            } else {
                side0.push(v);
            }
        }
        (side0, side1)
    }

    /// The assignment with every bit flipped.
    ///
    /// Complementary assignments describe the same partition and always
    /// have the same cut value.
    pub fn complement(&self) -> Self {
        Self {
            bits: self.bits.iter().map(|b| !b).collect(),
        }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Assignment {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bits = Vec::with_capacity(s.len());
        for (index, ch) in s.chars().enumerate() {
            match ch {
                '0' => bits.push(false),
                '1' => bits.push(true),
                other => {
                    return Err(GraphError::NotBinary {
                        index,
                        value: other.to_string(),
                    });
                }
            }
        }
        Ok(Self { bits })
    }
}

impl TryFrom<Vec<u8>> for Assignment {
    type Error = GraphError;

    fn try_from(bits: Vec<u8>) -> Result<Self, Self::Error> {
        Assignment::from_bits(&bits)
    }
}

impl From<Assignment> for Vec<u8> {
    fn from(assignment: Assignment) -> Self {
        assignment.bits.iter().map(|&b| u8::from(b)).collect()
    }
}

//! Boolean logic gates and truth tables.
//!
//! ## Invariants
//!
//! * `NOT` is unary and its table has 2 rows; every other gate has 4.
//! * Rows are ordered by input as an unsigned binary number, `a` being the
//!   most significant bit.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

/// Logic gate.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    AND,
    OR,
    XOR,
    NAND,
    NOR,
    XNOR,
    NOT,
}

impl Gate {
    /// All supported gates.
    pub const ALL: [Gate; 7] = [
        Self::AND,
        Self::OR,
        Self::XOR,
        Self::NAND,
        Self::NOR,
        Self::XNOR,
        Self::NOT,
    ];

    /// Gate name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AND => "AND",
            Self::OR => "OR",
            Self::XOR => "XOR",
            Self::NAND => "NAND",
            Self::NOR => "NOR",
            Self::XNOR => "XNOR",
            Self::NOT => "NOT",
        }
    }

    /// Number of inputs.
    #[inline]
    pub const fn arity(&self) -> usize {
        match self {
            Self::NOT => 1,
            _ => 2,
        }
    }

    /// Evaluate the gate. `b` is ignored by `NOT`.
    #[inline]
    pub const fn apply(&self, a: bool, b: bool) -> bool {
        match self {
            Self::AND => a && b,
            Self::OR => a || b,
            Self::XOR => a ^ b,
            Self::NAND => !(a && b),
            Self::NOR => !(a || b),
            Self::XNOR => a == b,
            Self::NOT => !a,
        }
    }
}

/// One row of a truth table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruthRow {
    /// First input.
    pub a: bool,

    /// Second input; `None` for unary gates.
    pub b: Option<bool>,

    /// Gate output.
    pub output: bool,
}

/// Complete truth table for a gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    /// Gate the table describes.
    pub gate: Gate,

    /// Rows in input order.
    pub rows: Vec<TruthRow>,
}

impl TruthTable {
    /// Enumerate every input combination of `gate`.
    pub fn new(gate: Gate) -> Self {
        let rows = if gate.arity() == 1 {
            [false, true]
                .into_iter()
                .map(|a| TruthRow {
                    a,
                    b: None,
                    output: gate.apply(a, false),
                })
                .collect()
        } else {
            [(false, false), (false, true), (true, false), (true, true)]
                .into_iter()
                .map(|(a, b)| TruthRow {
                    a,
                    b: Some(b),
                    output: gate.apply(a, b),
                })
                .collect()
        };
        Self { gate, rows }
    }

    /// Index of the row matching the current inputs.
    ///
    /// `b` is ignored for unary gates; a binary gate with no `b` matches nothing.
    pub fn highlighted(&self, a: bool, b: Option<bool>) -> Option<usize> {
        self.rows.iter().position(|row| {
            row.a == a
                && match row.b {
                    None => true,
                    Some(rb) => b == Some(rb),
                }
        })
    }
}

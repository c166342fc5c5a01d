//! Tests for logic gates and truth tables.
//!
//! ## Test Organization
//!
//! 1. **Gate Evaluation** - Each gate, operand checks
//! 2. **Identities** - XOR decomposition, De Morgan
//! 3. **Truth Tables** - Row counts, ordering, highlighting, rendering

use formulary::prelude::*;

const PAIRS: [(bool, bool); 4] = [(false, false), (false, true), (true, false), (true, true)];

// ============================================================================
// Gate Evaluation Tests
// ============================================================================

/// Test each binary gate against its definition.
#[test]
fn test_binary_gates() {
    for (a, b) in PAIRS {
        assert_eq!(evaluate_gate(Gate::AND, a, Some(b)).unwrap(), a && b);
        assert_eq!(evaluate_gate(Gate::OR, a, Some(b)).unwrap(), a || b);
        assert_eq!(evaluate_gate(Gate::XOR, a, Some(b)).unwrap(), a != b);
        assert_eq!(evaluate_gate(Gate::NAND, a, Some(b)).unwrap(), !(a && b));
        assert_eq!(evaluate_gate(Gate::NOR, a, Some(b)).unwrap(), !(a || b));
        assert_eq!(evaluate_gate(Gate::XNOR, a, Some(b)).unwrap(), a == b);
    }
}

/// Test NOT ignores the second operand.
#[test]
fn test_not_gate() {
    assert!(evaluate_gate(Gate::NOT, false, None).unwrap());
    assert!(!evaluate_gate(Gate::NOT, true, None).unwrap());
    assert!(!evaluate_gate(Gate::NOT, true, Some(false)).unwrap());
}

/// Test binary gates require the second operand.
#[test]
fn test_missing_operand() {
    assert_eq!(
        evaluate_gate(Gate::NAND, true, None),
        Err(FormularyError::MissingOperand { gate: "NAND" })
    );
}

/// Test gate names parse case-insensitively.
#[test]
fn test_gate_tags() {
    for gate in Gate::ALL {
        assert_eq!(gate.name().parse::<Gate>().unwrap(), gate);
        assert_eq!(gate.name().to_lowercase().parse::<Gate>().unwrap(), gate);
    }
    assert!("IMPLIES".parse::<Gate>().is_err());
}

// ============================================================================
// Identity Tests
// ============================================================================

/// Test XOR(a,b) = AND(OR(a,b), NOT(AND(a,b))) for all inputs.
#[test]
fn test_xor_decomposition() {
    for (a, b) in PAIRS {
        let or = evaluate_gate(Gate::OR, a, Some(b)).unwrap();
        let and = evaluate_gate(Gate::AND, a, Some(b)).unwrap();
        let not_and = evaluate_gate(Gate::NOT, and, None).unwrap();
        let composed = evaluate_gate(Gate::AND, or, Some(not_and)).unwrap();
        assert_eq!(evaluate_gate(Gate::XOR, a, Some(b)).unwrap(), composed);
    }
}

/// Test each negated gate is the complement of its base gate.
#[test]
fn test_negated_pairs() {
    let pairs = [
        (Gate::AND, Gate::NAND),
        (Gate::OR, Gate::NOR),
        (Gate::XOR, Gate::XNOR),
    ];
    for (base, negated) in pairs {
        for (a, b) in PAIRS {
            assert_ne!(base.apply(a, b), negated.apply(a, b));
        }
    }
}

// ============================================================================
// Truth Table Tests
// ============================================================================

/// Test NOT has 2 rows and every other gate has 4.
#[test]
fn test_row_counts() {
    for gate in Gate::ALL {
        let table = truth_table(gate);
        let expected = if gate == Gate::NOT { 2 } else { 4 };
        assert_eq!(table.rows.len(), expected, "{} row count", gate.name());
        assert_eq!(table.gate, gate);
    }
}

/// Test rows are ordered by input and carry the gate output.
#[test]
fn test_row_order() {
    let table = truth_table(Gate::AND);
    let inputs: Vec<(bool, Option<bool>)> = table.rows.iter().map(|r| (r.a, r.b)).collect();
    assert_eq!(
        inputs,
        vec![
            (false, Some(false)),
            (false, Some(true)),
            (true, Some(false)),
            (true, Some(true)),
        ]
    );
    let outputs: Vec<bool> = table.rows.iter().map(|r| r.output).collect();
    assert_eq!(outputs, vec![false, false, false, true]);

    let not = truth_table(Gate::NOT);
    assert_eq!(
        not.rows,
        vec![
            TruthRow {
                a: false,
                b: None,
                output: true
            },
            TruthRow {
                a: true,
                b: None,
                output: false
            },
        ]
    );
}

/// Test the row matching the current inputs is found.
#[test]
fn test_highlighted_row() {
    let table = truth_table(Gate::XOR);
    assert_eq!(table.highlighted(false, Some(false)), Some(0));
    assert_eq!(table.highlighted(true, Some(false)), Some(2));
    assert_eq!(table.highlighted(true, Some(true)), Some(3));
    assert_eq!(table.highlighted(true, None), None);

    let not = truth_table(Gate::NOT);
    assert_eq!(not.highlighted(true, None), Some(1));
    assert_eq!(not.highlighted(true, Some(false)), Some(1));
}

/// Test table rendering.
#[test]
fn test_table_display() {
    assert_eq!(
        truth_table(Gate::NOR).to_string(),
        "NOR\nA B | OUT\n0 0 |  1\n0 1 |  0\n1 0 |  0\n1 1 |  0"
    );
    assert_eq!(truth_table(Gate::NOT).to_string(), "NOT\nA | OUT\n0 |  1\n1 |  0");
}

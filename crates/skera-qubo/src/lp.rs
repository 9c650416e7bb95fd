//! CPLEX-LP text export.
//!
//! Emits a [`QuadraticProgram`] in the LP file format understood by
//! CPLEX, Gurobi, and the docplex tooling quantum SDKs build on.
//! Quadratic terms use the bracket convention: coefficients inside
//! `[ ... ] / 2` are doubled so the bracket halves back to the written
//! objective.

use crate::program::{QuadraticProgram, Sense};

/// Emit a program as LP-format text.
pub fn to_lp_string(program: &QuadraticProgram) -> String {
    let mut emitter = LpEmitter::new();
    emitter.emit(program)
}

/// LP text emitter.
struct LpEmitter {
    output: String,
}

impl LpEmitter {
    fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    fn emit(&mut self, program: &QuadraticProgram) -> String {
        self.writeln(&format!("\\Problem name: {}", program.name()));
        self.writeln("");

        match program.sense() {
            Sense::Maximize => self.writeln("Maximize"),
            Sense::Minimize => self.writeln("Minimize"),
        }
        self.writeln(&format!(" obj: {}", objective_expr(program)));

        self.writeln("Subject To");
        self.writeln("");

        self.writeln("Bounds");
        for name in program.variables() {
            self.writeln(&format!(" 0 <= {name} <= 1"));
        }

        self.writeln("Binaries");
        if !program.variables().is_empty() {
            self.writeln(&format!(" {}", program.variables().join(" ")));
        }

        self.writeln("End");
        self.output.clone()
    }

    fn writeln(&mut self, line: &str) {
        self.output.push_str(line);
        self.output.push('\n');
    }
}

fn objective_expr(program: &QuadraticProgram) -> String {
    let mut expr = String::new();

    for (i, &coeff) in program.linear().iter().enumerate() {
        if coeff == 0.0 {
            continue;
        }
        push_term(&mut expr, coeff, Some(program.variables()[i].as_str()));
    }

    let quadratic: Vec<_> = program.quadratic().filter(|&(_, c)| c != 0.0).collect();
    if !quadratic.is_empty() {
        if !expr.is_empty() {
            expr.push_str(" + ");
        }
        expr.push('[');
        let mut bracket = String::new();
        for ((i, j), coeff) in quadratic {
            let product = format!(
                "{}*{}",
                program.variables()[i],
                program.variables()[j]
            );
            // Doubled inside the bracket; the trailing / 2 restores it.
            push_term(&mut bracket, 2.0 * coeff, Some(product.as_str()));
        }
        expr.push(' ');
        expr.push_str(&bracket);
        expr.push_str(" ] / 2");
    }

    if program.offset() != 0.0 {
        push_term(&mut expr, program.offset(), None);
    }

    if expr.is_empty() {
        expr.push('0');
    }
    expr
}

/// Append one signed term, handling the leading-term case.
fn push_term(expr: &mut String, coeff: f64, symbol: Option<&str>) {
    let magnitude = coeff.abs();
    if expr.is_empty() {
        if coeff < 0.0 {
            expr.push_str("- ");
        }
    } else {
        expr.push_str(if coeff < 0.0 { " - " } else { " + " });
    }

    match symbol {
        Some(symbol) if magnitude == 1.0 => expr.push_str(symbol),
        Some(symbol) => {
            expr.push_str(&fmt_num(magnitude));
            expr.push(' ');
            expr.push_str(symbol);
        }
        None => expr.push_str(&fmt_num(magnitude)),
    }
}

fn fmt_num(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{v:.0}")
    } else {
        format!("{v}")
    }
}

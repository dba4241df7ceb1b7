//! WebAssembly bindings for the ripple calculator.
//!
//! This module provides JavaScript-friendly wrappers around the core engine.
//! Operands cross the boundary as digit strings.

use wasm_bindgen::prelude::*;
use crate::binary::{self, Comparison};
use crate::calc::{parse_operand, render_truth_tables, Calculation, Operation, RippleTrace};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn operands(x: &str, y: &str) -> Result<(crate::BitSequence, crate::BitSequence), JsError> {
    let x = parse_operand(x).map_err(|e| JsError::new(&format!("{}", e)))?;
    let y = parse_operand(y).map_err(|e| JsError::new(&format!("{}", e)))?;
    Ok((x, y))
}

/// Add two binary numbers. Returns the sum as a digit string.
#[wasm_bindgen]
pub fn wasm_add(x: &str, y: &str) -> Result<String, JsError> {
    let (x, y) = operands(x, y)?;
    Ok(binary::add(&x, &y).to_string())
}

/// Subtract `y` from `x`. Returns the magnitude, prefixed with `-` when negative.
#[wasm_bindgen]
pub fn wasm_subtract(x: &str, y: &str) -> Result<String, JsError> {
    let (x, y) = operands(x, y)?;
    Ok(Calculation::subtract(x, y).result_text())
}

/// True if `x < y`.
#[wasm_bindgen]
pub fn wasm_less_than(x: &str, y: &str) -> Result<bool, JsError> {
    let (x, y) = operands(x, y)?;
    Ok(binary::compare(&x, &y) == Comparison::Less)
}

/// Render the calculation layout for `op` (`+` or `-`).
#[wasm_bindgen]
pub fn wasm_layout(op: &str, x: &str, y: &str) -> Result<String, JsError> {
    let op = Operation::parse(op).map_err(|e| JsError::new(&format!("{}", e)))?;
    let (x, y) = operands(x, y)?;
    Calculation::evaluate(op, x, y)
        .map(|calc| calc.render())
        .ok_or_else(|| JsError::new("quit is not a calculation"))
}

/// Record the ripple pass for `op` and return it as JSON.
#[wasm_bindgen]
pub fn wasm_trace_json(op: &str, x: &str, y: &str) -> Result<String, JsError> {
    let op = Operation::parse(op).map_err(|e| JsError::new(&format!("{}", e)))?;
    let (x, y) = operands(x, y)?;
    let trace = RippleTrace::run(op, x, y)
        .ok_or_else(|| JsError::new("quit is not a calculation"))?;
    trace.to_json().map_err(|e| JsError::new(&format!("{}", e)))
}

/// The adder, subtractor and comparator truth tables as text.
#[wasm_bindgen]
pub fn wasm_truth_tables() -> String {
    render_truth_tables()
}

/// One string per ripple position, least significant first, holding the
/// cell's bits in the order `x y state_in output state_out`.
#[wasm_bindgen]
pub fn wasm_trace_rows(op: &str, x: &str, y: &str) -> Result<js_sys::Array, JsError> {
    let op = Operation::parse(op).map_err(|e| JsError::new(&format!("{}", e)))?;
    let (x, y) = operands(x, y)?;
    let trace = RippleTrace::run(op, x, y)
        .ok_or_else(|| JsError::new("quit is not a calculation"))?;
    Ok(trace
        .steps
        .iter()
        .map(|s| {
            let row = format!("{}{}{}{}{}", s.x, s.y, s.state_in, s.output, s.state_out);
            JsValue::from_str(&row)
        })
        .collect())
}

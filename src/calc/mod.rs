//! The calculator around the arithmetic core.
//!
//! - [`validate`] - Operation and operand parsing
//! - [`display`] - Right-aligned calculation layout
//! - [`truth_table`] - Truth tables for the single-bit circuits
//! - [`trace`] - Per-position record of a ripple pass
//! - [`session`] - Interactive prompt loop

pub mod validate;
pub mod display;
pub mod truth_table;
pub mod trace;
pub mod session;

pub use validate::{parse_operand, strip_leading_zeros, Operation, ValidationError};
pub use display::{Calculation, Outcome};
pub use truth_table::{render_truth_tables, TruthTable};
pub use trace::RippleTrace;
pub use session::{Session, SessionError};

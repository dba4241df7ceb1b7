//! Ripple Calculator - CLI Entry Point
//!
//! Commands:
//! - `ripple-calc` - Print truth tables, then start the interactive calculator
//! - `ripple-calc add <x> <y>` - Add two binary numbers
//! - `ripple-calc sub <x> <y>` - Subtract two binary numbers
//! - `ripple-calc cmp <x> <y>` - Compare two binary numbers
//! - `ripple-calc tables` - Print the circuit truth tables
//! - `ripple-calc trace <op> <x> <y>` - Show the ripple pass bit by bit

use clap::{Parser, Subcommand};
use ripple::BitSequence;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ripple-calc")]
#[command(version = "0.1.0")]
#[command(about = "Binary addition and subtraction built from logic-gate ripple circuits")]
struct Cli {
    /// Skip the truth tables printed before the interactive calculator
    #[arg(long, global = true)]
    no_tables: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add two binary numbers
    Add {
        x: String,
        y: String,
        /// Print the calculation as JSON
        #[arg(long)]
        json: bool,
    },
    /// Subtract Y from X
    Sub {
        x: String,
        y: String,
        /// Print the calculation as JSON
        #[arg(long)]
        json: bool,
    },
    /// Report whether X is less than Y
    Cmp {
        x: String,
        y: String,
        /// Print the comparison as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the adder, subtractor and comparator truth tables
    Tables,
    /// Show every position of the ripple pass
    Trace {
        /// Operation: + or -
        #[arg(allow_hyphen_values = true)]
        op: String,
        x: String,
        y: String,
        /// Print the trace as JSON
        #[arg(long)]
        json: bool,
        /// Step through the pass in the terminal UI
        #[arg(short, long)]
        interactive: bool,
    },
    /// Run the built-in self-test
    Test,
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Add { x, y, json }) => {
            let calc = ripple::Calculation::add(operand(&x), operand(&y));
            print_calculation(&calc, json);
        }
        Some(Commands::Sub { x, y, json }) => {
            let calc = ripple::Calculation::subtract(operand(&x), operand(&y));
            print_calculation(&calc, json);
        }
        Some(Commands::Cmp { x, y, json }) => {
            compare_operands(&x, &y, json);
        }
        Some(Commands::Tables) => {
            print!("{}", ripple::calc::render_truth_tables());
        }
        Some(Commands::Trace { op, x, y, json, interactive }) => {
            trace_operation(&op, &x, &y, json, interactive);
        }
        Some(Commands::Test) => {
            run_self_test();
        }
        None => {
            run_interactive(!cli.no_tables);
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default: warnings only).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Validate an operand or exit.
fn operand(input: &str) -> BitSequence {
    match ripple::calc::parse_operand(input) {
        Ok(seq) => seq,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}

fn print_calculation(calc: &ripple::Calculation, json: bool) {
    if !json {
        println!("{}", calc);
        return;
    }

    match calc.to_json() {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("❌ Failed to serialize: {}", e);
            std::process::exit(1);
        }
    }
}

fn compare_operands(x: &str, y: &str, json: bool) {
    use ripple::Comparison;

    let (x, y) = (operand(x), operand(y));
    let comparison = ripple::compare(&x, &y);

    if json {
        let value = serde_json::json!({ "x": x, "y": y, "comparison": comparison });
        match serde_json::to_string_pretty(&value) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("❌ Failed to serialize: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    match comparison {
        Comparison::Less => println!("{} < {}", x, y),
        Comparison::NotLess => println!("{} >= {}", x, y),
    }
}

fn trace_operation(op: &str, x: &str, y: &str, json: bool, interactive: bool) {
    use ripple::{Operation, RippleTrace};

    let op = match Operation::parse(op) {
        Ok(Operation::Quit) | Err(_) => {
            eprintln!("❌ Trace needs an operation of + or -, got '{}'", op);
            std::process::exit(1);
        }
        Ok(op) => op,
    };

    let Some(trace) = RippleTrace::run(op, operand(x), operand(y)) else {
        return;
    };

    if interactive {
        launch_stepper(trace);
    } else if json {
        match trace.to_json() {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("❌ Failed to serialize: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        println!("{}", trace.render());
    }
}

#[cfg(feature = "tui")]
fn launch_stepper(trace: ripple::RippleTrace) {
    if let Err(e) = ripple::run_stepper(trace) {
        eprintln!("❌ Stepper error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "tui"))]
fn launch_stepper(_trace: ripple::RippleTrace) {
    eprintln!("❌ Built without the `tui` feature; drop --interactive for a text trace");
    std::process::exit(1);
}

fn run_interactive(show_tables: bool) {
    use std::io::{stdin, stdout};

    if show_tables {
        println!("{}", ripple::calc::render_truth_tables());
    }

    let stdin = stdin();
    let mut session = ripple::Session::new(stdin.lock(), stdout());
    if let Err(e) = session.run() {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run_self_test() {
    println!("━━━ Ripple Calculator Self-Test ━━━");
    println!();

    let mut passed = 0;
    let mut failed = 0;

    for (name, ok) in self_test_checks() {
        print!("{}... ", name);
        if ok { println!("✓"); passed += 1; }
        else { println!("✗"); failed += 1; }
    }

    println!();
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Results: {} passed, {} failed", passed, failed);

    if failed == 0 {
        println!("✓ All tests passed!");
    } else {
        std::process::exit(1);
    }
}

/// The self-test checks, each paired with its label.
fn self_test_checks() -> Vec<(&'static str, bool)> {
    use ripple::{Bit, Comparison, Sign};
    use ripple::binary::{self, gates};

    let seq = |s: &str| BitSequence::parse(s).ok();
    let mut checks = Vec::new();

    // CNF xor agrees with native xor
    let ok = Bit::ALL
        .iter()
        .all(|&x| Bit::ALL.iter().all(|&y| x.xor(y) == x.xor_native(y)));
    checks.push(("XOR conjunctive normal form", ok));

    // Full adder against integer arithmetic
    let mut ok = true;
    for x in Bit::ALL {
        for y in Bit::ALL {
            for c in Bit::ALL {
                let total = x.to_u8() + y.to_u8() + c.to_u8();
                let (s, co) = gates::full_add(x, y, c);
                if s.to_u8() != total % 2 || co.to_u8() != total / 2 {
                    ok = false;
                }
            }
        }
    }
    checks.push(("Full adder truth table", ok));

    // Addition with final carry
    let ok = match (seq("101"), seq("11"), seq("1000")) {
        (Some(a), Some(b), Some(expected)) => binary::add(&a, &b) == expected,
        _ => false,
    };
    checks.push(("101 + 11 = 1000", ok));

    // Negative subtraction
    let ok = match (seq("11"), seq("101"), seq("10")) {
        (Some(a), Some(b), Some(expected)) => {
            binary::subtract(&a, &b) == (expected, Sign::Negative)
        }
        _ => false,
    };
    checks.push(("11 - 101 = -10", ok));

    // Comparison across widths
    let ok = match (seq("10"), seq("100")) {
        (Some(a), Some(b)) => binary::compare(&a, &b) == Comparison::Less,
        _ => false,
    };
    checks.push(("10 < 100", ok));

    // Round trip against native integers
    let pairs = [
        (0u64, 0u64),
        (1, 0),
        (255, 1),
        (1 << 33, 12345),
        (987_654_321, 123_456_789),
    ];
    let mut ok = true;
    for (a, b) in pairs {
        let (a, b) = (BitSequence::from_u64(a), BitSequence::from_u64(b));
        let (diff, sign) = binary::subtract(&a, &b);
        if sign != Sign::Positive || binary::add(&b, &diff).normalize() != a {
            ok = false;
        }
    }
    checks.push(("Round trip a - b + b = a", ok));

    checks
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_self_test_checks_all_pass() {
        let checks = self_test_checks();
        assert_eq!(checks.len(), 6);
        for (name, ok) in checks {
            assert!(ok, "self-test check failed: {}", name);
        }
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_trace_accepts_minus_operation() {
        let cli = Cli::try_parse_from(["ripple-calc", "trace", "-", "101", "11"]).unwrap();
        match cli.command {
            Some(Commands::Trace { op, x, y, json, interactive }) => {
                assert_eq!((op.as_str(), x.as_str(), y.as_str()), ("-", "101", "11"));
                assert!(!json && !interactive);
            }
            _ => panic!("expected trace command"),
        }
    }

    #[test]
    fn test_no_command_starts_session() {
        let cli = Cli::try_parse_from(["ripple-calc", "--no-tables"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.no_tables);
    }
}

//! Truth tables for the single-bit circuits.

use std::fmt::Write as _;
use crate::binary::{gates, Bit};

/// The circuits that get a printed truth table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TruthTable {
    /// Full adder: inputs `c x y`, outputs sum `Z` and carry `C`.
    Addition,
    /// Full subtractor: inputs `b x y`, outputs difference `Z` and borrow `B`.
    Subtraction,
    /// Comparator cell: inputs `l x y`, output `L`.
    LessThan,
}

impl TruthTable {
    /// All tables in print order.
    pub const ALL: [TruthTable; 3] = [
        TruthTable::Addition,
        TruthTable::Subtraction,
        TruthTable::LessThan,
    ];

    pub const fn title(self) -> &'static str {
        match self {
            TruthTable::Addition => "ADDITION",
            TruthTable::Subtraction => "SUBTRACTION",
            TruthTable::LessThan => "LESS_THAN",
        }
    }

    pub const fn header(self) -> &'static str {
        match self {
            TruthTable::Addition => "c x y Z C",
            TruthTable::Subtraction => "b x y Z B",
            TruthTable::LessThan => "l x y L",
        }
    }

    /// Output columns for one input row.
    pub fn outputs(self, state: Bit, x: Bit, y: Bit) -> Vec<Bit> {
        match self {
            TruthTable::Addition => {
                vec![gates::sum_bit(x, y, state), gates::carry_out(x, y, state)]
            }
            TruthTable::Subtraction => {
                vec![gates::diff_bit(x, y, state), gates::borrow_out(x, y, state)]
            }
            TruthTable::LessThan => vec![gates::less_so_far(x, y, state)],
        }
    }

    /// Every row as `[state, x, y, outputs...]`, counting the inputs up
    /// from `000` to `111` with the state as the most significant column.
    pub fn rows(self) -> Vec<Vec<Bit>> {
        (0u8..8)
            .map(|i| {
                let state = Bit::from_bool(i & 0b100 != 0);
                let x = Bit::from_bool(i & 0b010 != 0);
                let y = Bit::from_bool(i & 0b001 != 0);
                let mut row = vec![state, x, y];
                row.extend(self.outputs(state, x, y));
                row
            })
            .collect()
    }

    /// Title, header, rule and rows, each line newline-terminated.
    pub fn render(self) -> String {
        let mut out = String::new();
        let header = self.header();
        let _ = writeln!(out, "{}", self.title());
        let _ = writeln!(out, "{}", header);
        let _ = writeln!(out, "{}", "-".repeat(header.len()));
        for row in self.rows() {
            let cells: Vec<String> = row.iter().map(|b| b.to_string()).collect();
            let _ = writeln!(out, "{}", cells.join(" "));
        }
        out
    }
}

/// All three tables separated by blank lines.
pub fn render_truth_tables() -> String {
    TruthTable::ALL
        .iter()
        .map(|table| table.render())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addition_table_text() {
        let expected = "\
ADDITION
c x y Z C
---------
0 0 0 0 0
0 0 1 1 0
0 1 0 1 0
0 1 1 0 1
1 0 0 1 0
1 0 1 0 1
1 1 0 0 1
1 1 1 1 1
";
        assert_eq!(TruthTable::Addition.render(), expected);
    }

    #[test]
    fn test_subtraction_table_text() {
        let expected = "\
SUBTRACTION
b x y Z B
---------
0 0 0 0 0
0 0 1 1 1
0 1 0 1 0
0 1 1 0 0
1 0 0 1 1
1 0 1 0 1
1 1 0 0 0
1 1 1 1 1
";
        assert_eq!(TruthTable::Subtraction.render(), expected);
    }

    #[test]
    fn test_less_than_table_text() {
        let expected = "\
LESS_THAN
l x y L
-------
0 0 0 0
0 0 1 1
0 1 0 0
0 1 1 0
1 0 0 1
1 0 1 1
1 1 0 0
1 1 1 1
";
        assert_eq!(TruthTable::LessThan.render(), expected);
    }

    #[test]
    fn test_all_tables_are_blank_line_separated() {
        let text = render_truth_tables();
        assert!(text.starts_with("ADDITION\n"));
        assert!(text.contains("1 1 1 1 1\n\nSUBTRACTION\n"));
        assert!(text.contains("\n\nLESS_THAN\n"));
        assert_eq!(text.lines().count(), 3 * 11 + 2);
    }
}

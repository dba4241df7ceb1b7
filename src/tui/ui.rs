//! UI rendering for the stepper.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, List, ListItem},
    style::{Color, Style, Modifier},
};
use crate::binary::{Bit, BitSequence, Chain};
use super::app::StepperApp;

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &StepperApp) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60),
            Constraint::Percentage(40),
        ])
        .split(frame.area());

    // Left side: circuit and status
    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(chunks[0]);

    draw_circuit(frame, left_chunks[0], app);
    draw_status(frame, left_chunks[1], app);

    // Right side: step log and help
    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),
            Constraint::Length(4),
        ])
        .split(chunks[1]);

    draw_log(frame, right_chunks[0], app);
    draw_help(frame, right_chunks[1]);
}

/// Draw the operands, state row and partial result in aligned columns.
///
/// Column 0 is the slot for the final carry; column `width - p` holds
/// position `p`.
fn draw_circuit(frame: &mut Frame, area: Rect, app: &StepperApp) {
    let trace = &app.trace;
    let width = trace.width();
    let current = app.applied.checked_sub(1);
    let column_of = |col: usize| -> Option<usize> {
        if col == 0 {
            None
        } else {
            Some(width - col)
        }
    };

    let state_row: Vec<Span<'static>> = (0..=width)
        .map(|col| match column_of(col) {
            Some(pos) if pos < app.applied => {
                bit_span(trace.steps[pos].state_in, Some(pos) == current, false)
            }
            Some(pos) if pos == app.applied => bit_span(app.pending_state(), false, true),
            _ => Span::raw(" "),
        })
        .collect();

    let operand_row = |seq: &BitSequence| -> Vec<Span<'static>> {
        (0..=width)
            .map(|col| match column_of(col) {
                Some(pos) => {
                    bit_span(seq.bit_from_lsb(pos), Some(pos) == current, pos >= seq.len())
                }
                None => Span::raw(" "),
            })
            .collect()
    };

    let final_carry = match (trace.chain, app.current_step()) {
        (Chain::Carry, Some(step)) if app.is_finished() && step.state_out.is_set() => {
            Some(Bit::One)
        }
        _ => None,
    };
    let partial = app.partial_output();
    let mut output_row = vec![match final_carry {
        Some(bit) => bit_span(bit, false, false),
        None => Span::raw(" "),
    }];
    output_row.extend(partial.iter().enumerate().map(|(i, bit)| match bit {
        Some(bit) => bit_span(*bit, Some(width - 1 - i) == current, false),
        None => Span::styled("·", Style::default().fg(Color::DarkGray)),
    }));

    let label = |text: &str| Span::styled(format!("{:<8}", text), Style::default().fg(Color::Cyan));
    let state_label = format!("{}in:", trace.state_label());

    let mut lines = vec![
        Line::from([vec![label(&state_label)], state_row].concat()),
        Line::from([vec![label("upper:")], operand_row(&trace.upper)].concat()),
        Line::from(
            [vec![label(trace.calculation.op.symbol())], operand_row(&trace.lower)].concat(),
        ),
        Line::from(format!("{:<8}{}", "", "-".repeat(width + 1))),
        Line::from([vec![label("out:")], output_row].concat()),
        Line::from(""),
    ];

    if app.is_finished() {
        lines.push(Line::from(vec![
            Span::raw("Result: "),
            Span::styled(
                trace.calculation.result_text(),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
        ]));
    } else {
        lines.push(Line::from(Span::styled(
            format!("{} of {} positions", app.applied, width),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let calc = &trace.calculation;
    let title = format!(" {} {} {} ({} chain) ", calc.x, calc.op, calc.y, trace.chain);
    let paragraph = Paragraph::new(lines)
        .block(Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)));

    frame.render_widget(paragraph, area);
}

/// Draw the log of evaluated cells.
fn draw_log(frame: &mut Frame, area: Rect, app: &StepperApp) {
    let s = app.trace.state_label();
    let items: Vec<ListItem> = app
        .applied_steps()
        .iter()
        .skip(app.log_scroll)
        .map(|step| {
            let text = format!(
                "{:>3}: x={} y={} {}={} -> Z={} {}={}",
                step.position, step.x, step.y, s, step.state_in, step.output, s, step.state_out
            );
            let style = if app.current_step() == Some(step) {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(text).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default()
            .title(" Steps ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta)));

    frame.render_widget(list, area);
}

/// Draw status bar.
fn draw_status(frame: &mut Frame, area: Rect, app: &StepperApp) {
    let status = Paragraph::new(app.status.clone())
        .style(Style::default().fg(Color::White))
        .block(Block::default()
            .title(" Status ")
            .borders(Borders::ALL));

    frame.render_widget(status, area);
}

/// Draw help panel.
fn draw_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(vec![
        Line::from("s: Step  r: Run  p: Pause  x: Reset"),
        Line::from("↑↓: Scroll steps  q: Quit"),
    ])
    .style(Style::default().fg(Color::DarkGray))
    .block(Block::default()
        .title(" Help ")
        .borders(Borders::ALL));

    frame.render_widget(help, area);
}

/// A single bit, highlighted at the active column and dimmed when padded.
fn bit_span(bit: Bit, active: bool, dim: bool) -> Span<'static> {
    let style = if active {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else if dim {
        Style::default().fg(Color::DarkGray)
    } else if bit.is_set() {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Gray)
    };
    Span::styled(bit.to_string(), style)
}

//! Attacker, Defender and Skill tabs - editable field lists

use crate::app::{App, Tab};
use crate::form::FieldKind;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    draw_fields(f, app, chunks[0]);
    draw_side_panel(f, app, chunks[1]);
}

fn draw_fields(f: &mut Frame, app: &App, area: Rect) {
    let (rows, selected) = app.form_rows();

    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let is_selected = i == selected;
            let value_span = match (&app.editing, is_selected) {
                (Some(buffer), true) => Span::styled(
                    format!("{}▏", buffer),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Yellow),
                ),
                _ => {
                    let style = if row.is_default {
                        Style::default().fg(Color::DarkGray)
                    } else {
                        Style::default().fg(Color::White)
                    };
                    let text = match row.kind {
                        FieldKind::Choice => format!("◀ {} ▶", row.value),
                        _ => row.value.clone(),
                    };
                    Span::styled(text, style)
                }
            };
            let marker = if row.is_default { " (default)" } else { "" };

            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:20}", row.label),
                    Style::default().fg(Color::Gray),
                ),
                value_span,
                Span::styled(marker, Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let title = match app.current_tab {
        Tab::Attacker => " Attacker ",
        Tab::Defender => " Defender ",
        _ => " Skill ",
    };

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(selected));
    f.render_stateful_widget(list, area, &mut state);
}

/// Live result and what the current tab feeds into it
fn draw_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let b = &app.breakdown;
    let mut lines = vec![
        super::section_header("Result"),
        super::stat_line("Min (no crit)", crate::report::format_amount(b.result.min_damage)),
        super::stat_line("Max (crit)", crate::report::format_amount(b.result.max_damage)),
        super::stat_line("Average", crate::report::format_amount(b.result.avg_damage)),
        Line::from(""),
    ];

    match app.current_tab {
        Tab::Attacker => {
            let a = &app.resolved.attacker;
            lines.push(super::section_header("Resolved"));
            lines.push(super::stat_line("Total ATK", format!("{:.1}", a.total_attack())));
            lines.push(super::stat_line("Effective ATK", format!("{:.1}", b.effective_attack)));
            lines.push(super::stat_line("Total HP", format!("{:.1}", a.total_health())));
            lines.push(super::stat_line("Total SPD", format!("{:.1}", a.total_speed())));
            lines.push(super::stat_line(
                "Crit rate (adjusted)",
                format!("{:.1}%", b.adjusted_crit_rate * 100.0),
            ));
            lines.push(super::stat_line("Crit multiplier", format!("x{:.2}", b.crit_multiplier)));
        }
        Tab::Defender => {
            let d = &app.resolved.defender;
            lines.push(super::section_header("Resolved"));
            lines.push(super::stat_line("Total DEF", format!("{:.1}", d.total_defense())));
            lines.push(super::stat_line("Effective DEF", format!("{:.1}", b.effective_defense)));
            lines.push(super::stat_line("Total HP", format!("{:.1}", d.total_health())));
            lines.push(super::stat_line(
                "Defense factor",
                format!("{:.4} ({})", b.defense_factor, app.resolved.formula),
            ));
        }
        _ => {
            let s = &app.resolved.skill;
            lines.push(super::section_header("Formula"));
            lines.push(Line::from(Span::styled(
                s.mode().formula_description(),
                Style::default().fg(Color::Yellow),
            )));
            lines.push(Line::from(s.scaling.describe()));
            lines.push(Line::from(""));
            lines.push(super::stat_line("Pre-defense / hit", format!("{:.2}", b.pre_defense_per_hit)));
            lines.push(super::stat_line("Pre-defense total", format!("{:.2}", b.pre_defense_total())));
            if let Some(index) = app.preset_index {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    format!("Preset {}/{}", index + 1, app.presets.len()),
                    Style::default().fg(Color::Magenta),
                )));
            }
        }
    }

    if !app.warnings().is_empty() {
        lines.push(Line::from(""));
        lines.push(super::section_header("Warnings"));
        for warning in app.warnings() {
            lines.push(Line::from(Span::styled(
                warning.to_string(),
                Style::default().fg(Color::Red),
            )));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Live "))
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

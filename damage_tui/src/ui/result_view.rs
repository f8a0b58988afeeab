//! Result tab - combat summary, pipeline breakdown and the input log

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(12), Constraint::Percentage(40)])
        .split(chunks[1]);

    draw_summary(f, app, chunks[0]);
    draw_pipeline(f, app, right[0]);
    draw_log(f, app, right[1]);
}

fn draw_summary(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .summary_lines()
        .into_iter()
        .map(|line| {
            if line.starts_with("===") {
                Line::from(Span::styled(line, Style::default().fg(Color::Cyan)))
            } else {
                Line::from(line)
            }
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Combat Summary "))
        .scroll((u16::try_from(app.result_scroll).unwrap_or(u16::MAX), 0));

    f.render_widget(paragraph, area);
}

fn draw_pipeline(f: &mut Frame, app: &App, area: Rect) {
    let b = &app.breakdown;
    let mut lines = vec![
        super::stat_line("Effective ATK", format!("{:.2}", b.effective_attack)),
        super::stat_line("Scaled / hit", format!("{:.2}", b.base_scaled_per_hit)),
        super::stat_line("Pre-defense / hit", format!("{:.2}", b.pre_defense_per_hit)),
        super::stat_line("After multipliers", format!("{:.2}", b.per_hit_base)),
        super::stat_line(
            "Element",
            format!("{} (x{:.2})", b.relation, b.elemental.damage_mul),
        ),
        super::stat_line(
            "Crit",
            format!(
                "{:.1}% for x{:.2} (avg x{:.4})",
                b.adjusted_crit_rate * 100.0,
                b.crit_multiplier,
                b.avg_crit_factor
            ),
        ),
    ];

    if b.elemental.glancing_prob > 0.0 {
        lines.push(super::stat_line(
            "Glancing",
            format!(
                "{:.0}%: x{:.3} / else x{:.2}",
                b.elemental.glancing_prob * 100.0,
                b.elemental.glance_mul,
                b.elemental.non_glance_mul
            ),
        ));
    }

    if b.defense_ignored {
        lines.push(super::stat_line("Defense", "ignored by skill".to_string()));
    } else {
        lines.push(super::stat_line(
            "Effective DEF",
            format!("{:.2}", b.effective_defense),
        ));
        lines.push(super::stat_line(
            "Defense factor",
            format!(
                "{:.4} (-{:.1}%)",
                b.defense_factor,
                b.defense_reduction_percent()
            ),
        ));
    }
    lines.push(super::stat_line("Hits", b.hits.to_string()));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Pipeline "));

    f.render_widget(paragraph, area);
}

fn draw_log(f: &mut Frame, app: &App, area: Rect) {
    let visible = area.height.saturating_sub(2) as usize;
    let start = app.log.len().saturating_sub(visible);

    let lines: Vec<Line> = app.log[start..]
        .iter()
        .map(|entry| {
            let color = if entry.starts_with("Warning") {
                Color::Red
            } else {
                Color::Gray
            };
            Line::from(Span::styled(entry.clone(), Style::default().fg(color)))
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Log "));

    f.render_widget(paragraph, area);
}

//! Help tab view

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, _app: &App, area: Rect) {
    let lines = vec![
        super::section_header("Navigation"),
        key_line("1-5", "Jump to tab (Attacker/Defender/Skill/Result/Help)"),
        key_line("Tab / Shift+Tab", "Next/previous tab"),
        key_line("↑/k  ↓/j", "Select field / scroll"),
        key_line("q / Ctrl+C", "Quit"),
        key_line("?", "Toggle help"),
        Line::from(""),
        super::section_header("Editing"),
        key_line("Enter", "Edit field, Enter again to commit"),
        key_line("Esc", "Cancel edit"),
        key_line("←/→", "Cycle element, scaling mode, ignores DEF"),
        key_line("(empty)", "Commit nothing to restore the default"),
        key_line("f", "Toggle defense formula"),
        key_line("p", "Load next skill preset"),
        key_line("r", "Reset to starting values"),
        Line::from(""),
        super::section_header("Damage Pipeline"),
        Line::from(""),
        Line::from(Span::styled("Effective ATK:", Style::default().fg(Color::Yellow))),
        Line::from("  (base + bonus ATK) × (1 + buff) + flat ATK"),
        Line::from(""),
        Line::from(Span::styled("Per hit:", Style::default().fg(Color::Yellow))),
        Line::from("  scaled × multiplier + flat damage"),
        Line::from("  × (1 + amplify) × (1 − reduction) × elemental"),
        Line::from(""),
        Line::from(Span::styled("Elements:", Style::default().fg(Color::Yellow))),
        Line::from("  Fire > Wind > Water > Fire, Light ⇄ Dark"),
        Line::from("  Stronger: +5% damage, +15% crit rate"),
        Line::from("  Weaker: −15% crit rate, 50% glancing (×0.588), else ×0.95"),
        Line::from(""),
        Line::from(Span::styled("Defense:", Style::default().fg(Color::Yellow))),
        Line::from("  effective DEF = DEF × (1 − break) × (1 − ignore)"),
        Line::from("  GENERIC: 100 / (100 + DEF)"),
        Line::from("  RATIO:   ATK / (ATK + DEF)"),
        Line::from(""),
        Line::from(Span::styled("Results:", Style::default().fg(Color::Yellow))),
        Line::from("  Min = no crits, Max = every hit crits, Average = expected"),
        Line::from("  Glancing is averaged into all three"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Help & Mechanics "));

    f.render_widget(paragraph, area);
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:20}", key),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}

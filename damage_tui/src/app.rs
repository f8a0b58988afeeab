//! Application state

use crate::form::{FieldKind, FormRow, SkillField, UnitField};
use crate::report;
use damage_core::config::{default_skill_inputs, CalculatorDefaults};
use damage_core::input::{SkillInput, Validator};
use damage_core::{DamageBreakdown, InputWarning, ResolvedScenario, Scenario};

/// Most log lines kept for the Result tab
const MAX_LOG_LINES: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Attacker,
    Defender,
    Skill,
    Result,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Attacker, Tab::Defender, Tab::Skill, Tab::Result, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Attacker => "Attacker",
            Tab::Defender => "Defender",
            Tab::Skill => "Skill",
            Tab::Result => "Result",
            Tab::Help => "Help",
        }
    }
}

/// A row the cursor can sit on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selected {
    Attacker(UnitField),
    Defender(UnitField),
    Skill(SkillField),
}

pub struct App {
    pub current_tab: Tab,
    previous_tab: Tab,
    /// What `r` resets to
    initial: Scenario,
    /// Live, user-edited inputs
    pub scenario: Scenario,
    pub defaults: CalculatorDefaults,
    pub presets: Vec<SkillInput>,
    pub preset_index: Option<usize>,
    pub resolved: ResolvedScenario,
    pub breakdown: DamageBreakdown,
    pub log: Vec<String>,
    pub attacker_row: usize,
    pub defender_row: usize,
    pub skill_row: usize,
    pub result_scroll: usize,
    /// Text being typed into the selected field
    pub editing: Option<String>,
}

impl App {
    pub fn new(scenario: Scenario) -> Self {
        let defaults = scenario.effective_defaults();
        let resolved = scenario.resolve();
        let breakdown = resolved.calculate();

        let mut app = App {
            current_tab: Tab::Attacker,
            previous_tab: Tab::Attacker,
            initial: scenario.clone(),
            scenario,
            defaults,
            presets: default_skill_inputs(),
            preset_index: None,
            resolved,
            breakdown,
            log: Vec::new(),
            attacker_row: 0,
            defender_row: 0,
            skill_row: 0,
            result_scroll: 0,
            editing: None,
        };
        app.push_log("Ready.".to_string());
        let startup: Vec<String> = app
            .resolved
            .warnings
            .iter()
            .map(|w| format!("Warning: {}", w))
            .collect();
        for line in startup {
            app.push_log(line);
        }
        app
    }

    // === Tabs ===

    /// Replace the skill presets cycled with `p`; an empty list keeps the current ones
    pub fn with_presets(mut self, presets: Vec<SkillInput>) -> Self {
        if !presets.is_empty() {
            self.presets = presets;
            self.preset_index = None;
        }
        self
    }

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let next_idx = (current_idx + 1) % tabs.len();
        self.current_tab = tabs[next_idx];
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let prev_idx = if current_idx == 0 {
            tabs.len() - 1
        } else {
            current_idx - 1
        };
        self.current_tab = tabs[prev_idx];
    }

    pub fn set_tab(&mut self, index: usize) {
        let tabs = Tab::all();
        if index < tabs.len() {
            self.current_tab = tabs[index];
        }
    }

    pub fn toggle_help(&mut self) {
        if self.current_tab == Tab::Help {
            self.current_tab = self.previous_tab;
        } else {
            self.previous_tab = self.current_tab;
            self.current_tab = Tab::Help;
        }
    }

    // === Form rows ===

    fn skill_fields(&self) -> Vec<SkillField> {
        SkillField::fields_for(self.scenario.skill.mode.unwrap_or_default())
    }

    fn row_count(&self) -> usize {
        match self.current_tab {
            Tab::Attacker => UnitField::attacker_fields().len(),
            Tab::Defender => UnitField::defender_fields().len(),
            Tab::Skill => self.skill_fields().len(),
            Tab::Result | Tab::Help => 0,
        }
    }

    fn row_cursor(&mut self) -> Option<&mut usize> {
        match self.current_tab {
            Tab::Attacker => Some(&mut self.attacker_row),
            Tab::Defender => Some(&mut self.defender_row),
            Tab::Skill => Some(&mut self.skill_row),
            Tab::Result | Tab::Help => None,
        }
    }

    fn selected(&self) -> Option<Selected> {
        match self.current_tab {
            Tab::Attacker => UnitField::attacker_fields()
                .get(self.attacker_row)
                .map(|f| Selected::Attacker(*f)),
            Tab::Defender => UnitField::defender_fields()
                .get(self.defender_row)
                .map(|f| Selected::Defender(*f)),
            Tab::Skill => self
                .skill_fields()
                .get(self.skill_row)
                .map(|f| Selected::Skill(*f)),
            Tab::Result | Tab::Help => None,
        }
    }

    /// Rows of the current form tab, plus the selected index
    pub fn form_rows(&self) -> (Vec<FormRow>, usize) {
        match self.current_tab {
            Tab::Attacker => (
                UnitField::attacker_fields()
                    .iter()
                    .map(|f| f.row(&self.scenario.attacker, &self.defaults.attacker))
                    .collect(),
                self.attacker_row,
            ),
            Tab::Defender => (
                UnitField::defender_fields()
                    .iter()
                    .map(|f| f.row(&self.scenario.defender, &self.defaults.defender))
                    .collect(),
                self.defender_row,
            ),
            Tab::Skill => (
                self.skill_fields()
                    .iter()
                    .map(|f| f.row(&self.scenario.skill, &self.defaults.skill))
                    .collect(),
                self.skill_row,
            ),
            Tab::Result | Tab::Help => (Vec::new(), 0),
        }
    }

    fn selected_kind(&self) -> Option<FieldKind> {
        self.selected().map(|s| match s {
            Selected::Attacker(f) | Selected::Defender(f) => f.kind(),
            Selected::Skill(f) => f.kind(),
        })
    }

    // === Navigation ===

    pub fn on_up(&mut self) {
        if self.current_tab == Tab::Result {
            self.result_scroll = self.result_scroll.saturating_sub(1);
        } else if let Some(row) = self.row_cursor() {
            *row = row.saturating_sub(1);
        }
    }

    pub fn on_down(&mut self) {
        if self.current_tab == Tab::Result {
            let last = self.summary_lines().len().saturating_sub(1);
            self.result_scroll = (self.result_scroll + 1).min(last);
            return;
        }
        let max = self.row_count().saturating_sub(1);
        if let Some(row) = self.row_cursor() {
            if *row < max {
                *row += 1;
            }
        }
    }

    pub fn on_left(&mut self) {
        self.cycle_selected(false);
    }

    pub fn on_right(&mut self) {
        self.cycle_selected(true);
    }

    fn cycle_selected(&mut self, forward: bool) {
        let Some(selected) = self.selected() else {
            return;
        };
        match selected {
            Selected::Attacker(f) if f.kind() == FieldKind::Choice => {
                f.cycle(&mut self.scenario.attacker, forward)
            }
            Selected::Defender(f) if f.kind() == FieldKind::Choice => {
                f.cycle(&mut self.scenario.defender, forward)
            }
            Selected::Skill(f) if f.kind() == FieldKind::Choice => {
                f.cycle(&mut self.scenario.skill, forward);
                self.preset_index = None;
                let max = self.skill_fields().len().saturating_sub(1);
                self.skill_row = self.skill_row.min(max);
            }
            _ => return,
        }
        self.recalculate();
    }

    // === Editing ===

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Enter: cycle a choice, start editing, or commit the edit
    pub fn on_enter(&mut self) {
        if self.editing.is_some() {
            self.commit_edit();
            return;
        }
        let Some(selected) = self.selected() else {
            return;
        };
        if self.selected_kind() == Some(FieldKind::Choice) {
            self.cycle_selected(true);
            return;
        }
        let text = match selected {
            Selected::Attacker(f) => f.edit_text(&self.scenario.attacker),
            Selected::Defender(f) => f.edit_text(&self.scenario.defender),
            Selected::Skill(f) => f.edit_text(&self.scenario.skill),
        };
        self.editing = Some(text);
    }

    pub fn on_char(&mut self, c: char) {
        if let Some(buffer) = self.editing.as_mut() {
            buffer.push(c);
        }
    }

    pub fn on_backspace(&mut self) {
        if let Some(buffer) = self.editing.as_mut() {
            buffer.pop();
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    fn commit_edit(&mut self) {
        let Some(raw) = self.editing.take() else {
            return;
        };
        let Some(selected) = self.selected() else {
            return;
        };

        let mut validator = Validator::new();
        let (owner, label) = match selected {
            Selected::Attacker(f) => {
                f.apply(&mut self.scenario.attacker, &raw, &mut validator);
                ("Attacker", f.label())
            }
            Selected::Defender(f) => {
                f.apply(&mut self.scenario.defender, &raw, &mut validator);
                ("Defender", f.label())
            }
            Selected::Skill(f) => {
                let mode = self.scenario.skill.mode.unwrap_or_default();
                f.apply(&mut self.scenario.skill, &raw, &mut validator);
                self.preset_index = None;
                ("Skill", f.label(mode))
            }
        };

        let shown = raw.trim();
        if shown.is_empty() {
            self.push_log(format!("{} {} reset to default", owner, label));
        } else {
            self.push_log(format!("{} {} = {}", owner, label, shown));
        }
        for warning in validator.into_warnings() {
            self.push_log(format!("Warning: {}", warning));
        }
        self.recalculate();
    }

    // === Commands ===

    /// Toggle the defense formula
    pub fn toggle_formula(&mut self) {
        self.scenario.formula = self.scenario.formula.toggle();
        self.push_log(format!("Defense formula: {}", self.scenario.formula));
        self.recalculate();
    }

    /// Load the next skill preset into the skill form
    pub fn next_preset(&mut self) {
        if self.presets.is_empty() {
            return;
        }
        let index = match self.preset_index {
            Some(i) => (i + 1) % self.presets.len(),
            None => 0,
        };
        self.preset_index = Some(index);
        self.scenario.skill = self.presets[index].clone();
        self.skill_row = 0;
        let name = self.scenario.skill.name.clone().unwrap_or_default();
        self.push_log(format!("Preset {}/{}: {}", index + 1, self.presets.len(), name));
        self.recalculate();
    }

    /// Back to the scenario the app started with
    pub fn reset(&mut self) {
        self.scenario = self.initial.clone();
        self.preset_index = None;
        self.editing = None;
        self.attacker_row = 0;
        self.defender_row = 0;
        self.skill_row = 0;
        self.result_scroll = 0;
        self.push_log("Reset to starting values.".to_string());
        self.recalculate();
    }

    /// Re-resolve every input and recompute the damage
    pub fn recalculate(&mut self) {
        let previous = std::mem::take(&mut self.resolved.warnings);
        self.resolved = self.scenario.resolve();
        self.breakdown = self.resolved.calculate();
        let last = self.summary_lines().len().saturating_sub(1);
        self.result_scroll = self.result_scroll.min(last);

        let fresh: Vec<String> = self
            .resolved
            .warnings
            .iter()
            .filter(|w| !previous.contains(w))
            .map(|w| format!("Warning: {}", w))
            .collect();
        for line in fresh {
            self.push_log(line);
        }
        tracing::debug!(
            avg = self.breakdown.result.avg_damage,
            warnings = self.resolved.warnings.len(),
            "recalculated"
        );
    }

    /// Text of the Result tab's summary panel
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = report::combat_summary(&self.resolved, &self.breakdown);
        lines.push(String::new());
        lines.extend(report::result_lines(
            &format!("Damage result ({})", self.resolved.formula),
            &self.breakdown.result,
        ));
        lines
    }

    pub fn warnings(&self) -> &[InputWarning] {
        &self.resolved.warnings
    }

    fn push_log(&mut self, line: String) {
        self.log.push(line);
        if self.log.len() > MAX_LOG_LINES {
            let excess = self.log.len() - MAX_LOG_LINES;
            self.log.drain(..excess);
        }
    }
}

//! Skill preset loading

use super::{ConfigError, SkillDefaults};
use crate::damage::Skill;
use crate::input::{SkillInput, Validator};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Container for skill presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsConfig {
    #[serde(rename = "skills")]
    pub skills: Vec<SkillInput>,
}

fn resolve_all(config: SkillsConfig, defaults: &SkillDefaults) -> Result<Vec<Skill>, ConfigError> {
    if config.skills.is_empty() {
        return Err(ConfigError::ValidationError("no [[skills]] defined".to_string()));
    }
    let mut skills = Vec::with_capacity(config.skills.len());
    for (index, input) in config.skills.iter().enumerate() {
        let mut validator = Validator::new();
        let skill = input.resolve(defaults, &mut validator);
        if let Some(warning) = validator.warnings().first() {
            return Err(ConfigError::ValidationError(format!(
                "skill #{} ({}): {}",
                index + 1,
                skill.name,
                warning
            )));
        }
        skills.push(skill);
    }
    Ok(skills)
}

/// Load skill presets from a TOML file, in file order
pub fn load_skill_configs(path: &Path, defaults: &SkillDefaults) -> Result<Vec<Skill>, ConfigError> {
    let config: SkillsConfig = super::load_toml(path)?;
    resolve_all(config, defaults)
}

/// Load skill presets from a TOML string, in file order
pub fn parse_skill_configs(content: &str, defaults: &SkillDefaults) -> Result<Vec<Skill>, ConfigError> {
    let config: SkillsConfig = super::parse_toml(content)?;
    resolve_all(config, defaults)
}

/// Get the built-in skill presets
pub fn default_skills() -> Vec<Skill> {
    default_skill_inputs()
        .iter()
        .map(|input| input.resolve(&SkillDefaults::default(), &mut Validator::new()))
        .collect()
}

/// The built-in presets as raw inputs, for front ends that edit them
pub fn default_skill_inputs() -> Vec<SkillInput> {
    let toml = include_str!("../../config/skills.toml");
    match super::parse_toml::<SkillsConfig>(toml) {
        Ok(config) if !config.skills.is_empty() => config.skills,
        _ => vec![SkillInput::from_skill(&Skill::basic())],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::damage::Scaling;
    use crate::types::ScalingMode;

    #[test]
    fn test_parse_skills() {
        let toml = r#"
[[skills]]
name = "Crushing Blow"
mode = "atk_def_combo"
a_coef = 2.0

[[skills]]
name = "Heartbeat"
mode = "spd_with_hp"
hits = 2
"#;

        let skills = parse_skill_configs(toml, &SkillDefaults::default()).unwrap();
        assert_eq!(skills.len(), 2);
        assert_eq!(
            skills[0].scaling,
            Scaling::AtkDefCombo {
                a_coef: 2.0,
                d_coef: 2.9
            }
        );
        assert_eq!(skills[1].mode(), ScalingMode::SpdWithHp);
        assert_eq!(skills[1].hits, 2);
    }

    #[test]
    fn test_invalid_preset_rejected() {
        let toml = r#"
[[skills]]
name = "Broken"
mode = "spd_with_atk"
spd_div = 0
"#;
        let result = parse_skill_configs(toml, &SkillDefaults::default());
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_empty_preset_list_rejected() {
        let result = parse_skill_configs("skills = []", &SkillDefaults::default());
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_load_skill_configs_from_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config/skills.toml");
        let skills = load_skill_configs(&path, &SkillDefaults::default()).unwrap();
        assert_eq!(skills, default_skills());

        let missing = Path::new(env!("CARGO_MANIFEST_DIR")).join("config/missing.toml");
        assert!(matches!(
            load_skill_configs(&missing, &SkillDefaults::default()),
            Err(ConfigError::IoError(_))
        ));
    }

    #[test]
    fn test_default_skills_cover_every_mode() {
        let skills = default_skills();

        for mode in ScalingMode::all() {
            assert!(
                skills.iter().any(|s| s.mode() == *mode),
                "Missing preset for mode: {}",
                mode
            );
        }
        assert_eq!(skills[0].name, "Basic Attack");
    }
}

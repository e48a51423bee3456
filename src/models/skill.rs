use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::validate::{self, Validate};
use crate::api::Resource;
use crate::error::Result;

pub const MIN_PROFICIENCY: u32 = 1;
pub const MAX_PROFICIENCY: u32 = 100;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category_id: Option<String>,
    pub proficiency: u32,
    #[serde(default)]
    pub profile_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSkill {
    pub name: String,
    pub proficiency: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSkill {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proficiency: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
}

impl Resource for Skill {
    const NAME: &'static str = "skill";
    const PATH: &'static str = "/skills";
    type Create = CreateSkill;
    type Update = UpdateSkill;
}

impl Validate for CreateSkill {
    fn validate(&self) -> Result<()> {
        validate::min_chars("Name", &self.name, 1)?;
        validate::in_range("Proficiency", self.proficiency, MIN_PROFICIENCY, MAX_PROFICIENCY)
    }
}

impl Validate for UpdateSkill {
    fn validate(&self) -> Result<()> {
        validate::min_chars_opt("Name", &self.name, 1)?;
        if let Some(proficiency) = self.proficiency {
            validate::in_range("Proficiency", proficiency, MIN_PROFICIENCY, MAX_PROFICIENCY)?;
        }
        Ok(())
    }
}

/// Grouping for skills. The API only lists and creates these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSkillCategory {
    pub name: String,
}

impl Resource for SkillCategory {
    const NAME: &'static str = "skill category";
    const PATH: &'static str = "/skill-categories";
    type Create = CreateSkillCategory;
    type Update = CreateSkillCategory;
}

impl Validate for CreateSkillCategory {
    fn validate(&self) -> Result<()> {
        validate::min_chars("Name", &self.name, 1)
    }
}

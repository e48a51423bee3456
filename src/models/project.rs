use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::validate::{self, Validate};
use crate::api::Resource;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    Ongoing,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    pub status: ProjectStatus,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,
}

impl Resource for Project {
    const NAME: &'static str = "project";
    const PATH: &'static str = "/projects";
    type Create = CreateProject;
    type Update = UpdateProject;
}

impl Validate for CreateProject {
    fn validate(&self) -> Result<()> {
        validate::min_chars("title", &self.title, 2)?;
        validate::min_chars("description", &self.description, 10)?;
        validate::optional_url("liveUrl", &self.live_url)?;
        validate::optional_url("githubUrl", &self.github_url)?;
        validate::non_empty_list("technologies", &self.technologies)
    }
}

impl Validate for UpdateProject {
    fn validate(&self) -> Result<()> {
        validate::min_chars_opt("title", &self.title, 2)?;
        validate::min_chars_opt("description", &self.description, 10)?;
        validate::optional_url("liveUrl", &self.live_url)?;
        validate::optional_url("githubUrl", &self.github_url)?;
        if let Some(technologies) = &self.technologies {
            validate::non_empty_list("technologies", technologies)?;
        }
        Ok(())
    }
}

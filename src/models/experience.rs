use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::validate::{self, Validate};
use crate::api::Resource;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Internship,
    Freelance,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub employment_type: EmploymentType,
    pub start_date: DateTime<Utc>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    pub is_current: bool,
    #[serde(default)]
    pub description: Option<Vec<String>>,
    #[serde(default)]
    pub profile_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExperience {
    pub title: String,
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub employment_type: EmploymentType,
    pub start_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    pub is_current: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExperience {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<EmploymentType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_current: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Vec<String>>,
}

impl Resource for Experience {
    const NAME: &'static str = "experience";
    const PATH: &'static str = "/experiences";
    type Create = CreateExperience;
    type Update = UpdateExperience;
}

impl Validate for CreateExperience {
    fn validate(&self) -> Result<()> {
        validate::min_chars("title", &self.title, 1)?;
        validate::min_chars("company", &self.company, 1)?;
        validate::date_span(
            Some(&self.start_date),
            self.end_date.as_ref(),
            Some(self.is_current),
        )
    }
}

impl Validate for UpdateExperience {
    fn validate(&self) -> Result<()> {
        validate::min_chars_opt("title", &self.title, 1)?;
        validate::min_chars_opt("company", &self.company, 1)?;
        validate::date_span(
            self.start_date.as_ref(),
            self.end_date.as_ref(),
            self.is_current,
        )
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::validate::{self, Validate};
use crate::api::Resource;
use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    #[serde(default)]
    pub location: Option<String>,
    pub start_date: DateTime<Utc>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    pub is_current: bool,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub activities: Option<String>,
    #[serde(default)]
    pub description: Option<Vec<String>>,
    #[serde(default)]
    pub profile_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEducation {
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub start_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    pub is_current: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activities: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEducation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_of_study: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_current: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activities: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Vec<String>>,
}

impl Resource for Education {
    const NAME: &'static str = "education";
    const PATH: &'static str = "/educations";
    type Create = CreateEducation;
    type Update = UpdateEducation;
}

impl Validate for CreateEducation {
    fn validate(&self) -> Result<()> {
        validate::min_chars("Institution", &self.institution, 1)?;
        validate::min_chars("Degree", &self.degree, 1)?;
        validate::min_chars("Field of study", &self.field_of_study, 1)?;
        validate::date_span(
            Some(&self.start_date),
            self.end_date.as_ref(),
            Some(self.is_current),
        )
    }
}

impl Validate for UpdateEducation {
    fn validate(&self) -> Result<()> {
        validate::min_chars_opt("Institution", &self.institution, 1)?;
        validate::min_chars_opt("Degree", &self.degree, 1)?;
        validate::min_chars_opt("Field of study", &self.field_of_study, 1)?;
        validate::date_span(
            self.start_date.as_ref(),
            self.end_date.as_ref(),
            self.is_current,
        )
    }
}

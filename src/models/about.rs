use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::validate::{self, Validate};
use crate::api::Resource;
use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct About {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub resume_url: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAbout {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAbout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
}

impl Resource for About {
    const NAME: &'static str = "about";
    const PATH: &'static str = "/about";
    type Create = CreateAbout;
    type Update = UpdateAbout;
}

impl Validate for CreateAbout {
    fn validate(&self) -> Result<()> {
        validate::min_chars("title", &self.title, 1)?;
        validate::min_chars("description", &self.description, 1)?;
        validate::optional_url("resumeUrl", &self.resume_url)
    }
}

impl Validate for UpdateAbout {
    fn validate(&self) -> Result<()> {
        validate::min_chars_opt("title", &self.title, 1)?;
        validate::min_chars_opt("description", &self.description, 1)?;
        validate::optional_url("resumeUrl", &self.resume_url)
    }
}

/// Quote shown alongside the about section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: String,
    pub text: String,
    pub author: String,
    #[serde(default)]
    pub source: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuote {
    pub text: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuote {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Resource for Quote {
    const NAME: &'static str = "quote";
    const PATH: &'static str = "/quotes";
    type Create = CreateQuote;
    type Update = UpdateQuote;
}

impl Validate for CreateQuote {
    fn validate(&self) -> Result<()> {
        validate::min_chars("Quote text", &self.text, 1)?;
        validate::min_chars("Author", &self.author, 1)
    }
}

impl Validate for UpdateQuote {
    fn validate(&self) -> Result<()> {
        validate::min_chars_opt("Quote text", &self.text, 1)?;
        validate::min_chars_opt("Author", &self.author, 1)
    }
}

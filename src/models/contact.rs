use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::validate::{self, Validate};
use crate::api::Resource;
use crate::error::Result;

/// Message left through the public contact form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub profile_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateContact {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateContact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Resource for Contact {
    const NAME: &'static str = "contact";
    const PATH: &'static str = "/contacts";
    type Create = CreateContact;
    type Update = UpdateContact;
}

impl Validate for CreateContact {
    fn validate(&self) -> Result<()> {
        validate::min_chars("name", &self.name, 1)?;
        validate::email("email", &self.email)?;
        validate::min_chars("subject", &self.subject, 1)?;
        validate::min_chars("message", &self.message, 1)
    }
}

impl Validate for UpdateContact {
    fn validate(&self) -> Result<()> {
        validate::min_chars_opt("name", &self.name, 1)?;
        if let Some(email) = &self.email {
            validate::email("email", email)?;
        }
        validate::min_chars_opt("subject", &self.subject, 1)?;
        validate::min_chars_opt("message", &self.message, 1)
    }
}

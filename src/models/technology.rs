use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::validate::{self, Validate};
use crate::api::Resource;
use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Technology {
    pub id: String,
    pub name: String,
    pub value: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTechnology {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTechnology {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Resource for Technology {
    const NAME: &'static str = "technology";
    const PATH: &'static str = "/technologies";
    type Create = CreateTechnology;
    type Update = UpdateTechnology;
}

impl Validate for CreateTechnology {
    fn validate(&self) -> Result<()> {
        validate::min_chars("name", &self.name, 1)?;
        validate::min_chars("value", &self.value, 1)
    }
}

impl Validate for UpdateTechnology {
    fn validate(&self) -> Result<()> {
        validate::min_chars_opt("name", &self.name, 1)?;
        validate::min_chars_opt("value", &self.value, 1)
    }
}

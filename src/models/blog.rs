use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::validate::{self, Validate};
use crate::api::Resource;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlogStatus {
    Draft,
    Published,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: Option<BlogStatus>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlog {
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<BlogStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<BlogStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
}

impl Resource for Blog {
    const NAME: &'static str = "blog";
    const PATH: &'static str = "/blogs";
    type Create = CreateBlog;
    type Update = UpdateBlog;
}

impl Validate for CreateBlog {
    fn validate(&self) -> Result<()> {
        validate::min_chars("title", &self.title, 2)?;
        validate::min_chars("content", &self.content, 10)?;
        validate::min_chars_opt("summary", &self.summary, 10)?;
        validate::min_chars_opt("categoryId", &self.category_id, 1)?;
        validate::non_empty_list("tags", &self.tags)
    }
}

impl Validate for UpdateBlog {
    fn validate(&self) -> Result<()> {
        validate::min_chars_opt("title", &self.title, 2)?;
        validate::min_chars_opt("content", &self.content, 10)?;
        validate::min_chars_opt("summary", &self.summary, 10)?;
        if let Some(tags) = &self.tags {
            validate::non_empty_list("tags", tags)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogCategory {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, rename = "_count")]
    pub count: Option<BlogCategoryCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogCategoryCount {
    pub blogs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogCategory {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogCategory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Resource for BlogCategory {
    const NAME: &'static str = "blog category";
    const PATH: &'static str = "/blog-categories";
    type Create = CreateBlogCategory;
    type Update = UpdateBlogCategory;
}

impl Validate for CreateBlogCategory {
    fn validate(&self) -> Result<()> {
        validate::min_chars("name", &self.name, 1)
    }
}

impl Validate for UpdateBlogCategory {
    fn validate(&self) -> Result<()> {
        validate::min_chars_opt("name", &self.name, 1)
    }
}

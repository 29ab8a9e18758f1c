use serde::Deserialize;

use super::repo_types::ProjectFields;
use crate::error::{AppError, AppResult};

pub const MAX_TITLE_LEN: usize = 200;

/// Body for both create and full update.
#[derive(Debug, Deserialize)]
pub struct ProjectRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: Option<String>,
}

impl ProjectRequest {
    pub fn validate(self) -> AppResult<ProjectFields> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(AppError::bad_request("Title is required"));
        }
        if title.chars().count() > MAX_TITLE_LEN {
            return Err(AppError::bad_request("Title is too long"));
        }
        let link = self
            .link
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty());
        Ok(ProjectFields {
            title,
            description: self.description.trim().to_string(),
            link,
        })
    }
}

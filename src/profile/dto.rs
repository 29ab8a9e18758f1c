use serde::Deserialize;

use crate::error::{AppError, AppResult};

pub const MAX_HOURS_PER_WEEK: i64 = 168;

/// Profile form. Text fields may arrive missing; they are reported as required.
#[derive(Debug, Default, Deserialize)]
pub struct ProfileRequest {
    #[serde(default)]
    pub career_goal: Option<String>,
    #[serde(default)]
    pub current_level: Option<String>,
    #[serde(default)]
    pub interests: Option<String>,
    #[serde(default)]
    pub time_per_week: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileFields {
    pub career_goal: String,
    pub current_level: String,
    pub interests: String,
    pub time_per_week: i32,
}

fn required(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

impl ProfileRequest {
    pub fn validate(self) -> AppResult<ProfileFields> {
        let (Some(career_goal), Some(current_level), Some(interests), Some(hours)) = (
            required(self.career_goal),
            required(self.current_level),
            required(self.interests),
            self.time_per_week,
        ) else {
            return Err(AppError::bad_request("All profile fields are required"));
        };

        if !(0..=MAX_HOURS_PER_WEEK).contains(&hours) {
            return Err(AppError::bad_request(format!(
                "time_per_week must be between 0 and {MAX_HOURS_PER_WEEK}"
            )));
        }

        Ok(ProfileFields {
            career_goal,
            current_level,
            interests,
            time_per_week: hours as i32,
        })
    }
}

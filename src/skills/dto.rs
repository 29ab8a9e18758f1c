use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SkillGapRequest {
    pub role: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

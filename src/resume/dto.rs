use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ResumeScoreRequest {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub role: Option<String>,
}

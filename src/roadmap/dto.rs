use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use super::repo_types::Roadmap;

/// Current roadmap; empty steps and no id when none was generated yet.
#[derive(Debug, Serialize)]
pub struct RoadmapResponse {
    pub id: Option<Uuid>,
    pub steps: Vec<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
}

impl From<Option<Roadmap>> for RoadmapResponse {
    fn from(r: Option<Roadmap>) -> Self {
        match r {
            Some(r) => Self {
                id: Some(r.id),
                steps: r.steps,
                created_at: Some(r.created_at),
            },
            None => Self {
                id: None,
                steps: Vec::new(),
                created_at: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_roadmap_serializes_as_empty_steps() {
        let json = serde_json::to_value(RoadmapResponse::from(None)).unwrap();
        assert_eq!(json["steps"], serde_json::json!([]));
        assert!(json["id"].is_null());
        assert!(json["created_at"].is_null());
    }
}

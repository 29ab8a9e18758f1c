use serde::{Deserialize, Serialize};

use super::services::{Category, Question};

#[derive(Debug, Serialize)]
pub struct QuestionView {
    pub id: u8,
    pub text: &'static str,
    pub options: Vec<OptionView>,
}

#[derive(Debug, Serialize)]
pub struct OptionView {
    pub key: char,
    pub text: &'static str,
}

impl From<&Question> for QuestionView {
    fn from(q: &Question) -> Self {
        Self {
            id: q.id,
            text: q.text,
            options: q
                .options
                .iter()
                .map(|o| OptionView {
                    key: o.key,
                    text: o.text,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct QuizSubmission {
    pub answers: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: u32,
}

#[derive(Debug, Serialize)]
pub struct QuizResult {
    pub category: Category,
    pub label: &'static str,
    pub description: &'static str,
    pub suggested_goal: &'static str,
    pub tally: Vec<CategoryCount>,
}

//! Career quiz: three fixed questions, five categories, one vote per answer.

use serde::Serialize;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    DataScience,
    AiMl,
    WebDevelopment,
    Cybersecurity,
    UiUx,
}

impl Category {
    /// Declaration order; tallies and tie-breaks follow it.
    pub const ALL: [Category; 5] = [
        Category::DataScience,
        Category::AiMl,
        Category::WebDevelopment,
        Category::Cybersecurity,
        Category::UiUx,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::DataScience => "Data Science",
            Category::AiMl => "AI / Machine Learning",
            Category::WebDevelopment => "Web Development",
            Category::Cybersecurity => "Cybersecurity",
            Category::UiUx => "UI/UX Design",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Category::DataScience => "You like turning raw numbers into answers and decisions.",
            Category::AiMl => "You enjoy maths and teaching machines to learn from data.",
            Category::WebDevelopment => "You like shipping things people can open and use right away.",
            Category::Cybersecurity => "You think like an attacker so you can keep systems safe.",
            Category::UiUx => "You care how products look and feel to the people using them.",
        }
    }

    /// Career goal to put in the profile; it feeds the roadmap generator.
    pub fn suggested_goal(self) -> &'static str {
        match self {
            Category::DataScience => "Data Scientist",
            Category::AiMl => "AI Engineer",
            Category::WebDevelopment => "Web Developer",
            Category::Cybersecurity => "Cybersecurity Analyst",
            Category::UiUx => "UI/UX Designer",
        }
    }
}

pub struct QuizOption {
    pub key: char,
    pub text: &'static str,
    pub category: Category,
}

pub struct Question {
    pub id: u8,
    pub text: &'static str,
    pub options: [QuizOption; 5],
}

const fn opt(key: char, text: &'static str, category: Category) -> QuizOption {
    QuizOption { key, text, category }
}

pub static QUESTIONS: [Question; 3] = [
    Question {
        id: 1,
        text: "Which activity sounds the most fun?",
        options: [
            opt('a', "Finding patterns in a big spreadsheet", Category::DataScience),
            opt('b', "Teaching a computer to recognise images", Category::AiMl),
            opt('c', "Building a website for a friend", Category::WebDevelopment),
            opt('d', "Finding the weak spot in a system", Category::Cybersecurity),
            opt('e', "Sketching how an app should look", Category::UiUx),
        ],
    },
    Question {
        id: 2,
        text: "Which subject did you enjoy most?",
        options: [
            opt('a', "Art and design", Category::UiUx),
            opt('b', "Statistics", Category::DataScience),
            opt('c', "Computer networks", Category::Cybersecurity),
            opt('d', "Mathematics", Category::AiMl),
            opt('e', "Programming", Category::WebDevelopment),
        ],
    },
    Question {
        id: 3,
        text: "What kind of result would make you proudest?",
        options: [
            opt('a', "A product people can use today", Category::WebDevelopment),
            opt('b', "A system that holds up under attack", Category::Cybersecurity),
            opt('c', "A model that makes accurate predictions", Category::AiMl),
            opt('d', "An interface people love using", Category::UiUx),
            opt('e', "A chart that changes a decision", Category::DataScience),
        ],
    },
];

/// Resolves one answer per question, in question order.
pub fn parse_answers<S: AsRef<str>>(answers: &[S]) -> AppResult<Vec<Category>> {
    if answers.len() != QUESTIONS.len() {
        return Err(AppError::bad_request(format!(
            "Expected {} answers, got {}",
            QUESTIONS.len(),
            answers.len()
        )));
    }

    QUESTIONS
        .iter()
        .zip(answers)
        .map(|(q, raw)| {
            let raw = raw.as_ref().trim().to_lowercase();
            let mut chars = raw.chars();
            let key = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => return Err(invalid_answer(q.id, &raw)),
            };
            q.options
                .iter()
                .find(|o| o.key == key)
                .map(|o| o.category)
                .ok_or_else(|| invalid_answer(q.id, &raw))
        })
        .collect()
}

fn invalid_answer(question: u8, raw: &str) -> AppError {
    AppError::bad_request(format!("Invalid answer '{raw}' for question {question}"))
}

/// Votes for every category, zero included, in declaration order.
pub fn tally(votes: &[Category]) -> Vec<(Category, u32)> {
    Category::ALL
        .iter()
        .map(|&c| (c, votes.iter().filter(|&&v| v == c).count() as u32))
        .collect()
}

/// Highest count wins; on a tie the earlier entry wins.
pub fn winner(counts: &[(Category, u32)]) -> Option<Category> {
    let mut best: Option<(Category, u32)> = None;
    for &(category, n) in counts {
        if best.map_or(true, |(_, top)| n > top) {
            best = Some((category, n));
        }
    }
    best.map(|(c, _)| c)
}

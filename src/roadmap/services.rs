//! Rule-based roadmap generation.
//!
//! The career goal is matched by substring against a short, ordered list of
//! tracks; the first hit picks the steps. Level and weekly hours then adjust
//! the two ends of the list.

use crate::profile::repo::Profile;

/// Checked in order; the first keyword contained in the goal wins.
const TRACKS: &[(&str, &[&str])] = &[
    (
        "data",
        &[
            "Python fundamentals",
            "Statistics & Probability",
            "Pandas, NumPy, SQL",
            "Data visualization",
            "Mini data projects",
            "Internship preparation",
        ],
    ),
    (
        "ai",
        &[
            "Python & math foundations",
            "Machine Learning basics",
            "Neural Networks",
            "TensorFlow / PyTorch",
            "AI projects",
        ],
    ),
    (
        "web",
        &[
            "HTML, CSS, JavaScript",
            "React fundamentals",
            "Flask backend",
            "Databases",
            "Deploy full-stack apps",
        ],
    ),
];

const FALLBACK: &[&str] = &[
    "Learn field basics",
    "Build core skills",
    "Create projects",
    "Apply for roles",
];

pub const BEGINNER_STEP: &str = "Programming fundamentals";
pub const SLOW_PACE_STEP: &str = "Follow a slow-paced learning plan";
pub const SLOW_PACE_BELOW_HOURS: i32 = 5;

pub fn generate_steps(career_goal: &str, current_level: &str, time_per_week: i32) -> Vec<String> {
    let goal = career_goal.to_lowercase();
    let base = TRACKS
        .iter()
        .find(|(keyword, _)| goal.contains(keyword))
        .map(|(_, steps)| *steps)
        .unwrap_or(FALLBACK);

    let mut steps: Vec<String> = Vec::with_capacity(base.len() + 2);
    if current_level.trim().to_lowercase() == "beginner" {
        steps.push(BEGINNER_STEP.to_string());
    }
    steps.extend(base.iter().map(|s| s.to_string()));
    if time_per_week < SLOW_PACE_BELOW_HOURS {
        steps.push(SLOW_PACE_STEP.to_string());
    }
    steps
}

pub fn steps_for_profile(profile: &Profile) -> Vec<String> {
    generate_steps(
        &profile.career_goal,
        &profile.current_level,
        profile.time_per_week,
    )
}

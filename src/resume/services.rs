use serde::Serialize;

use crate::skills::services::{percent, RoleChecklist};

/// Used when no target role is given.
pub const GENERAL_KEYWORDS: &[&str] = &[
    "python",
    "sql",
    "java",
    "javascript",
    "git",
    "communication",
    "teamwork",
    "leadership",
    "project",
    "internship",
];

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ResumeScore {
    pub score: u32,
    pub role: Option<&'static str>,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub feedback: &'static str,
}

pub fn feedback_for(score: u32) -> &'static str {
    match score {
        s if s >= 70 => "Strong resume: it covers most of the keywords recruiters look for.",
        s if s >= 40 => "Good start: add the missing skills you actually have and describe your projects.",
        _ => "Needs work: list your technical skills, projects and any internships explicitly.",
    }
}

/// Each keyword counts once if it appears anywhere in the lowercased text.
pub fn score_resume(text: &str, checklist: Option<&RoleChecklist>) -> ResumeScore {
    let text = text.to_lowercase();
    let keywords: Vec<String> = match checklist {
        Some(c) => c.skills.iter().map(|s| s.to_lowercase()).collect(),
        None => GENERAL_KEYWORDS.iter().map(|s| s.to_string()).collect(),
    };

    let total = keywords.len();
    let (matched, missing): (Vec<String>, Vec<String>) =
        keywords.into_iter().partition(|k| text.contains(k.as_str()));
    let score = percent(matched.len(), total);

    ResumeScore {
        score,
        role: checklist.map(|c| c.role),
        matched,
        missing,
        feedback: feedback_for(score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::services::find_checklist;

    #[test]
    fn counts_general_keywords_once() {
        let r = score_resume("Python python PYTHON and SQL. Led a project.", None);
        assert_eq!(r.matched, vec!["python", "sql", "project"]);
        assert_eq!(r.score, 30);
        assert_eq!(r.missing.len(), 7);
        assert_eq!(r.role, None);
    }

    #[test]
    fn substring_matching_means_javascript_also_hits_java() {
        let r = score_resume("JavaScript developer", None);
        assert!(r.matched.contains(&"java".to_string()));
        assert!(r.matched.contains(&"javascript".to_string()));
    }

    #[test]
    fn role_checklist_replaces_general_list() {
        let c = find_checklist("web developer").unwrap();
        let r = score_resume("HTML, CSS, JavaScript, React, Node.js, SQL and Git", Some(c));
        assert_eq!(r.score, 100);
        assert_eq!(r.role, Some("web developer"));
        assert!(r.missing.is_empty());
        assert_eq!(r.feedback, feedback_for(100));
    }

    #[test]
    fn feedback_tiers() {
        assert!(feedback_for(70).starts_with("Strong"));
        assert!(feedback_for(69).starts_with("Good"));
        assert!(feedback_for(40).starts_with("Good"));
        assert!(feedback_for(39).starts_with("Needs"));
        assert!(feedback_for(0).starts_with("Needs"));
    }
}

//! Fixed skill checklists per role and the gap against a user's selection.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RoleChecklist {
    pub role: &'static str,
    pub skills: &'static [&'static str],
}

pub const CHECKLISTS: &[RoleChecklist] = &[
    RoleChecklist {
        role: "data scientist",
        skills: &[
            "Python",
            "Statistics",
            "SQL",
            "Pandas",
            "Machine Learning",
            "Data Visualization",
            "Git",
        ],
    },
    RoleChecklist {
        role: "web developer",
        skills: &["HTML", "CSS", "JavaScript", "React", "Node.js", "SQL", "Git"],
    },
    RoleChecklist {
        role: "ai engineer",
        skills: &[
            "Python",
            "Linear Algebra",
            "Machine Learning",
            "Deep Learning",
            "TensorFlow",
            "PyTorch",
            "Git",
        ],
    },
    RoleChecklist {
        role: "software engineer",
        skills: &[
            "Data Structures",
            "Algorithms",
            "Java",
            "Git",
            "SQL",
            "System Design",
            "Testing",
        ],
    },
];

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

pub fn find_checklist(role: &str) -> Option<&'static RoleChecklist> {
    let wanted = normalize(role);
    CHECKLISTS.iter().find(|c| c.role == wanted)
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SkillGap {
    pub role: &'static str,
    pub required: Vec<&'static str>,
    pub have: Vec<&'static str>,
    pub missing: Vec<&'static str>,
    pub coverage_percent: u32,
}

/// Required skills minus the selection, keeping checklist order.
/// Selections that are not on the checklist are ignored.
pub fn skill_gap<S: AsRef<str>>(checklist: &RoleChecklist, selected: &[S]) -> SkillGap {
    let selected: Vec<String> = selected.iter().map(|s| normalize(s.as_ref())).collect();
    let (have, missing): (Vec<&'static str>, Vec<&'static str>) = checklist
        .skills
        .iter()
        .copied()
        .partition(|skill| selected.contains(&normalize(skill)));

    SkillGap {
        role: checklist.role,
        required: checklist.skills.to_vec(),
        coverage_percent: percent(have.len(), checklist.skills.len()),
        have,
        missing,
    }
}

pub(crate) fn percent(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((part as f64 * 100.0) / total as f64).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_lookup_is_case_insensitive() {
        assert_eq!(find_checklist("  Data Scientist ").unwrap().role, "data scientist");
        assert!(find_checklist("astronaut").is_none());
    }

    #[test]
    fn checklists_stay_short() {
        for c in CHECKLISTS {
            assert!(!c.skills.is_empty() && c.skills.len() <= 10, "{}", c.role);
        }
    }

    #[test]
    fn gap_keeps_checklist_order() {
        let c = find_checklist("web developer").unwrap();
        let gap = skill_gap(c, &["git", " html ", "Rust", "React"]);
        assert_eq!(gap.have, vec!["HTML", "React", "Git"]);
        assert_eq!(gap.missing, vec!["CSS", "JavaScript", "Node.js", "SQL"]);
        assert_eq!(gap.coverage_percent, 43);
    }

    #[test]
    fn empty_selection_misses_everything() {
        let c = find_checklist("ai engineer").unwrap();
        let gap = skill_gap::<&str>(c, &[]);
        assert!(gap.have.is_empty());
        assert_eq!(gap.missing.len(), c.skills.len());
        assert_eq!(gap.coverage_percent, 0);
    }

    #[test]
    fn full_selection_covers_role() {
        let c = find_checklist("software engineer").unwrap();
        let gap = skill_gap(c, c.skills);
        assert!(gap.missing.is_empty());
        assert_eq!(gap.coverage_percent, 100);
    }

    #[test]
    fn percent_rounds() {
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(0, 0), 0);
    }
}

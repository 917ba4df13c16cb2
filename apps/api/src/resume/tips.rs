use serde::Serialize;

/// One resume-writing check: whether a section heading is present, and what
/// to tell the candidate either way.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeTip {
    pub section: &'static str,
    pub present: bool,
    pub message: &'static str,
}

struct SectionCheck {
    section: &'static str,
    /// Case-sensitive; any one is enough.
    markers: &'static [&'static str],
    present: &'static str,
    missing: &'static str,
}

const CHECKS: &[SectionCheck] = &[
    SectionCheck {
        section: "Objective",
        markers: &["Objective"],
        present: "Awesome! You have added Objective",
        missing: "According to our recommendation please add your career objective, it will give your career intention to the Recruiters.",
    },
    SectionCheck {
        section: "Declaration",
        markers: &["Declaration"],
        present: "Awesome! You have added Declaration",
        missing: "According to our recommendation please add Declaration. It will give the assurance that everything written on your resume is true and fully acknowledged by you",
    },
    SectionCheck {
        section: "Hobbies",
        markers: &["Hobbies", "Interests"],
        present: "Awesome! You have added your Hobbies",
        missing: "According to our recommendation please add Hobbies. It will show your personality to the Recruiters and give the assurance that you are fit for this role or not.",
    },
    SectionCheck {
        section: "Achievements",
        markers: &["Achievements"],
        present: "Awesome! You have added your Achievements",
        missing: "According to our recommendation please add Achievements. It will show that you are capable for the required position.",
    },
    SectionCheck {
        section: "Projects",
        markers: &["Projects"],
        present: "Awesome! You have added your Projects",
        missing: "According to our recommendation please add Projects. It will show that you have done work related the required position or not.",
    },
];

pub fn resume_tips(resume_text: &str) -> Vec<ResumeTip> {
    CHECKS
        .iter()
        .map(|check| {
            let present = check.markers.iter().any(|m| resume_text.contains(m));
            ResumeTip {
                section: check.section,
                present,
                message: if present { check.present } else { check.missing },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tip<'a>(tips: &'a [ResumeTip], section: &str) -> &'a ResumeTip {
        tips.iter().find(|t| t.section == section).unwrap()
    }

    #[test]
    fn test_all_sections_checked_in_order() {
        let sections: Vec<&str> = resume_tips("").iter().map(|t| t.section).collect();
        assert_eq!(
            sections,
            vec!["Objective", "Declaration", "Hobbies", "Achievements", "Projects"]
        );
    }

    #[test]
    fn test_present_and_missing_sections() {
        let tips = resume_tips("Objective\nBuild things.\nProjects\n- a compiler");
        assert!(tip(&tips, "Objective").present);
        assert!(tip(&tips, "Projects").present);
        assert!(!tip(&tips, "Declaration").present);
        assert!(tip(&tips, "Declaration").message.starts_with("According to"));
        assert!(tip(&tips, "Objective").message.starts_with("Awesome"));
    }

    #[test]
    fn test_interests_counts_as_hobbies() {
        let tips = resume_tips("Interests: chess");
        assert!(tip(&tips, "Hobbies").present);
    }

    #[test]
    fn test_markers_are_case_sensitive() {
        let tips = resume_tips("my objective is to ship");
        assert!(!tip(&tips, "Objective").present);
    }
}

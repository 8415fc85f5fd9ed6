use serde::{Deserialize, Serialize};

/// Sentinel entry in the tech-stack picker that unlocks the free-text addendum.
pub const OTHER_TECH: &str = "Other";

/// Technologies offered by the intake form's multi-select.
pub const TECH_STACK_OPTIONS: &[&str] = &[
    "Python",
    "JavaScript",
    "Java",
    "C++",
    "C#",
    "Ruby",
    "Go",
    "Rust",
    "React",
    "Angular",
    "Vue.js",
    "Node.js",
    "Express.js",
    "Django",
    "Flask",
    "Ruby on Rails",
    "Spring",
    "Spring Boot",
    "SQL",
    "NoSQL",
    "MongoDB",
    "PostgreSQL",
    "MySQL",
    "Cassandra",
    "AWS",
    "Azure",
    "Google Cloud Platform",
    "Docker",
    "Kubernetes",
    "Git",
    OTHER_TECH,
];

/// Raw intake form payload. Every field is optional on the wire; beyond
/// presence nothing is validated (an empty email is accepted).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileSubmission {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub experience: u32,
    pub desired_position: String,
    pub current_location: String,
    pub tech_stack: Vec<String>,
    pub other_tech: String,
}

/// The stored candidate profile. Frozen once submitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateProfile {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub experience: u32,
    pub desired_position: String,
    pub current_location: String,
    pub tech_stack: Vec<String>,
}

impl ProfileSubmission {
    /// Folds the free-text addendum into the tech stack (only when "Other"
    /// was picked) and drops it.
    pub fn into_profile(self) -> CandidateProfile {
        let mut tech_stack = self.tech_stack;
        let addendum = self.other_tech.trim();
        if !addendum.is_empty() && tech_stack.iter().any(|t| t == OTHER_TECH) {
            tech_stack.push(addendum.to_string());
        }

        CandidateProfile {
            full_name: self.full_name,
            email: self.email,
            phone: self.phone,
            experience: self.experience,
            desired_position: self.desired_position,
            current_location: self.current_location,
            tech_stack,
        }
    }
}

impl CandidateProfile {
    /// Human-readable summary, one `- Label: value` line per field.
    pub fn summary_lines(&self) -> Vec<String> {
        [
            ("Full Name", self.full_name.clone()),
            ("Email", self.email.clone()),
            ("Phone", self.phone.clone()),
            ("Experience", self.experience.to_string()),
            ("Desired Position", self.desired_position.clone()),
            ("Current Location", self.current_location.clone()),
            ("Tech Stack", self.tech_stack.join(", ")),
        ]
        .into_iter()
        .map(|(label, value)| format!("- {label}: {value}"))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(tech: &[&str], other: &str) -> ProfileSubmission {
        ProfileSubmission {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            experience: 7,
            tech_stack: tech.iter().map(|t| t.to_string()).collect(),
            other_tech: other.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_other_addendum_appended_when_sentinel_selected() {
        let profile = submission(&["Rust", "Other"], "Zig").into_profile();
        assert_eq!(profile.tech_stack, vec!["Rust", "Other", "Zig"]);
    }

    #[test]
    fn test_other_addendum_ignored_without_sentinel() {
        let profile = submission(&["Rust"], "Zig").into_profile();
        assert_eq!(profile.tech_stack, vec!["Rust"]);
    }

    #[test]
    fn test_blank_addendum_is_dropped() {
        let profile = submission(&["Other"], "   ").into_profile();
        assert_eq!(profile.tech_stack, vec!["Other"]);
    }

    #[test]
    fn test_missing_fields_default_on_deserialize() {
        let form: ProfileSubmission = serde_json::from_str(r#"{"full_name":"Bo"}"#).unwrap();
        assert_eq!(form.full_name, "Bo");
        assert!(form.email.is_empty());
        assert!(form.tech_stack.is_empty());
        assert_eq!(form.experience, 0);
    }

    #[test]
    fn test_negative_experience_rejected() {
        let result = serde_json::from_str::<ProfileSubmission>(r#"{"experience":-1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_summary_lines_labels_each_field() {
        let lines = submission(&["Go", "Docker"], "").into_profile().summary_lines();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "- Full Name: Ada Lovelace");
        assert_eq!(lines[3], "- Experience: 7");
        assert_eq!(lines[6], "- Tech Stack: Go, Docker");
    }

    #[test]
    fn test_options_end_with_other_sentinel() {
        assert_eq!(TECH_STACK_OPTIONS.last(), Some(&OTHER_TECH));
    }
}

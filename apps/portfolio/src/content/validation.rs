use serde::{Deserialize, Serialize};

use super::models::Content;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentIssue {
    pub section: String,
    pub index: usize,
    pub field: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub passed: bool,
    pub issues: Vec<ContentIssue>,
}

fn require(issues: &mut Vec<ContentIssue>, section: &str, index: usize, field: &str, value: &str) {
    if value.trim().is_empty() {
        issues.push(ContentIssue {
            section: section.to_string(),
            index,
            field: field.to_string(),
            reason: format!("{section} entry #{index} has an empty '{field}'"),
        });
    }
}

/// Checks the fields a reader cannot do without.
///
/// Required:
/// - experience: `company`, `role`
/// - project: `title`
/// - at most one featured project
///
/// Everything else is optional display text. The report never alters content.
pub fn validate_content(content: &Content) -> ValidationReport {
    let mut issues = Vec::new();

    for (i, exp) in content.experience.iter().enumerate() {
        require(&mut issues, "experience", i, "company", &exp.company);
        require(&mut issues, "experience", i, "role", &exp.role);
    }

    for (i, project) in content.projects.iter().enumerate() {
        require(&mut issues, "project", i, "title", &project.title);
    }

    let featured: Vec<usize> = content
        .projects
        .iter()
        .enumerate()
        .filter(|(_, p)| p.featured)
        .map(|(i, _)| i)
        .collect();
    if let [_, extra @ ..] = featured.as_slice() {
        for &i in extra {
            issues.push(ContentIssue {
                section: "project".to_string(),
                index: i,
                field: "featured".to_string(),
                reason: format!(
                    "project entry #{i} is featured but entry #{} already is",
                    featured[0]
                ),
            });
        }
    }

    ValidationReport {
        passed: issues.is_empty(),
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::builtin_content;

    #[test]
    fn test_builtin_content_passes() {
        let report = validate_content(&builtin_content());
        assert!(report.passed, "{:?}", report.issues);
    }

    #[test]
    fn test_blank_company_fails() {
        let mut content = builtin_content();
        content.experience[2].company = "   ".to_string();
        let report = validate_content(&content);
        assert!(!report.passed);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].section, "experience");
        assert_eq!(report.issues[0].index, 2);
        assert_eq!(report.issues[0].field, "company");
    }

    #[test]
    fn test_blank_role_and_title_both_reported() {
        let mut content = builtin_content();
        content.experience[0].role.clear();
        content.projects[1].title.clear();
        let report = validate_content(&content);
        let fields: Vec<_> = report.issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(fields, vec!["role", "title"]);
    }

    #[test]
    fn test_second_featured_project_fails() {
        let mut content = builtin_content();
        content.projects[2].featured = true;
        let report = validate_content(&content);
        assert!(!report.passed);
        assert_eq!(report.issues[0].field, "featured");
        assert_eq!(report.issues[0].index, 2);
    }

    #[test]
    fn test_empty_collections_pass() {
        let mut content = builtin_content();
        content.experience.clear();
        content.projects.clear();
        content.education.clear();
        content.skills.clear();
        assert!(validate_content(&content).passed);
    }

    #[test]
    fn test_validation_leaves_content_untouched() {
        let content = builtin_content();
        let before = content.clone();
        let _ = validate_content(&content);
        assert_eq!(content, before);
    }
}

//! Precondition checks for lifecycle commands
//!
//! These run client-side before a round trip is spent; the backend
//! re-checks everything and remains authoritative.

use crate::error::{Error, Result};
use crate::types::{Assignment, Submission};
use regex::Regex;
use url::Url;

/// Validate a submission link
///
/// The link must be non-empty and a syntactically valid http(s) URL.
/// Returns the parsed URL in normalized form.
pub fn validate_link(link: &str) -> Result<Url> {
    let trimmed = link.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation("submission link is required".to_string()));
    }

    let url = Url::parse(trimmed)
        .map_err(|e| Error::Validation(format!("invalid submission link \"{trimmed}\": {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::Validation(format!(
            "submission link must be http(s), got \"{}\"",
            url.scheme()
        )));
    }

    Ok(url)
}

/// Check that a group is in the assignment's audience
pub fn ensure_eligible(assignment: &Assignment, group_id: &str) -> Result<()> {
    if assignment.audience.includes(group_id) {
        Ok(())
    } else {
        Err(Error::Eligibility(format!(
            "group {group_id} is not assigned \"{}\"",
            assignment.title
        )))
    }
}

/// Check that the (assignment, group) pair has no submission yet
pub fn ensure_not_duplicate(
    existing: &[Submission],
    assignment_id: &str,
    group_id: &str,
) -> Result<()> {
    if existing
        .iter()
        .any(|s| s.assignment_id == assignment_id && s.group_id == group_id)
    {
        Err(Error::Duplicate(format!(
            "group {group_id} has already submitted assignment {assignment_id}"
        )))
    } else {
        Ok(())
    }
}

/// Shape-check an email address before sending it to the backend
///
/// The backend owns membership rules; this only catches obvious typos.
pub fn validate_email(email: &str) -> Result<()> {
    let re = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    if re.is_match(email.trim()) {
        Ok(())
    } else {
        Err(Error::Validation(format!(
            "\"{email}\" does not look like an email address"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Audience, SubmissionStatus};
    use chrono::Utc;

    fn make_assignment(audience: Audience) -> Assignment {
        Assignment {
            id: "a1".to_string(),
            title: "Essay".to_string(),
            description: "Write an essay".to_string(),
            due_date: Utc::now(),
            link: None,
            created_by: "p1".to_string(),
            audience,
        }
    }

    fn make_submission(assignment_id: &str, group_id: &str) -> Submission {
        Submission {
            id: format!("{assignment_id}-{group_id}"),
            assignment_id: assignment_id.to_string(),
            assignment_title: "Essay".to_string(),
            group_id: group_id.to_string(),
            submitted_by: "Avery Lee".to_string(),
            link: "https://example.com/work".to_string(),
            status: SubmissionStatus::Submitted,
            confirmation_step: 1,
            submitted_at: Utc::now(),
            confirmed_at: None,
        }
    }

    #[test]
    fn test_valid_links_accepted() {
        assert!(validate_link("https://github.com/team/repo").is_ok());
        assert!(validate_link("http://example.com/doc?id=1").is_ok());
        assert!(validate_link("  https://example.com/padded  ").is_ok());
    }

    #[test]
    fn test_empty_link_rejected() {
        assert!(matches!(
            validate_link("").unwrap_err(),
            Error::Validation(_)
        ));
        assert!(matches!(
            validate_link("   ").unwrap_err(),
            Error::Validation(_)
        ));
    }

    #[test]
    fn test_malformed_link_rejected() {
        assert!(matches!(
            validate_link("not-a-url").unwrap_err(),
            Error::Validation(_)
        ));
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        assert!(matches!(
            validate_link("ftp://example.com/work").unwrap_err(),
            Error::Validation(_)
        ));
    }

    #[test]
    fn test_audience_all_is_always_eligible() {
        let assignment = make_assignment(Audience::All);
        assert!(ensure_eligible(&assignment, "any-group").is_ok());
    }

    #[test]
    fn test_unlisted_group_is_not_eligible() {
        let assignment = make_assignment(Audience::Groups(vec![
            "g1".to_string(),
            "g2".to_string(),
        ]));
        assert!(ensure_eligible(&assignment, "g1").is_ok());
        assert!(matches!(
            ensure_eligible(&assignment, "g3").unwrap_err(),
            Error::Eligibility(_)
        ));
    }

    #[test]
    fn test_duplicate_pair_rejected() {
        let existing = vec![make_submission("a1", "g1")];
        assert!(matches!(
            ensure_not_duplicate(&existing, "a1", "g1").unwrap_err(),
            Error::Duplicate(_)
        ));
    }

    #[test]
    fn test_same_assignment_other_group_allowed() {
        let existing = vec![make_submission("a1", "g1")];
        assert!(ensure_not_duplicate(&existing, "a1", "g2").is_ok());
        assert!(ensure_not_duplicate(&existing, "a2", "g1").is_ok());
    }

    #[test]
    fn test_email_shape_check() {
        assert!(validate_email("avery@example.com").is_ok());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("two@@example.com").is_err());
        assert!(validate_email("missing@tld").is_err());
    }
}

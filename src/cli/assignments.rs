//! Assignment commands - list and create

use crate::cli::{authenticated_gateway, progress, style};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use classtrack::error::{Error, Result};
use classtrack::gateway::ClassroomGateway;
use classtrack::lifecycle::is_overdue;
use classtrack::types::{Audience, NewAssignment};

/// Run `assignments list`
pub async fn run_assignments_list(api_url: &str) -> Result<()> {
    let gateway = authenticated_gateway(api_url)?;

    let spinner = progress::spinner("Fetching assignments...");
    let result = gateway.list_assignments().await;
    spinner.finish_and_clear();
    let assignments = result?;

    if assignments.is_empty() {
        println!("No assignments posted yet");
        return Ok(());
    }

    let now = Utc::now();
    for assignment in &assignments {
        let due = assignment.due_date.format("%Y-%m-%d %H:%M");
        let due_label = if is_overdue(assignment, now) {
            style::warn(&format!("overdue (was due {due})"))
        } else {
            format!("due {due}")
        };
        println!(
            "{}  {}  {}",
            style::emphasis(&assignment.title),
            style::muted(&assignment.id),
            due_label
        );

        if !assignment.description.is_empty() {
            println!("  {}", style::muted(&assignment.description));
        }
        if let Some(link) = &assignment.link {
            println!("  {}", style::hyperlink("resource", link));
        }
        match &assignment.audience {
            Audience::All => println!("  audience: all groups"),
            Audience::Groups(ids) => println!("  audience: {} specific group(s)", ids.len()),
        }
        println!();
    }
    Ok(())
}

/// Run `assignments create`
pub async fn run_assignments_create(
    api_url: &str,
    title: String,
    description: String,
    due: &str,
    link: Option<String>,
    groups: Vec<String>,
) -> Result<()> {
    let due_date = parse_due(due)?;
    let audience = if groups.is_empty() {
        Audience::All
    } else {
        Audience::Groups(groups)
    };

    let new_assignment = NewAssignment {
        title,
        description,
        due_date,
        link,
        audience,
    };

    let gateway = authenticated_gateway(api_url)?;
    let spinner = progress::spinner("Posting assignment...");
    let result = gateway.create_assignment(&new_assignment).await;
    spinner.finish_and_clear();

    let assignment = result?;
    println!(
        "{} Posted {} {}",
        style::check(),
        style::emphasis(&assignment.title),
        style::muted(&assignment.id)
    );
    println!(
        "  due {}",
        assignment.due_date.format("%Y-%m-%d %H:%M UTC")
    );
    Ok(())
}

/// Parse a due date argument
///
/// Accepts RFC 3339 (`2025-01-10T23:59:00Z`), a local-style timestamp
/// without zone (`2025-01-10T23:59`, read as UTC), or a bare date
/// (`2025-01-10`, read as end of that day).
fn parse_due(input: &str) -> Result<DateTime<Utc>> {
    let trimmed = input.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M") {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(end_of_day) = date.and_hms_opt(23, 59, 0) {
            return Ok(end_of_day.and_utc());
        }
    }

    Err(Error::Validation(format!(
        "cannot parse due date \"{trimmed}\"; use e.g. 2025-01-10T23:59"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_due_rfc3339() {
        let parsed = parse_due("2025-01-10T23:59:00Z").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2025-01-10T23:59:00+00:00");
    }

    #[test]
    fn test_parse_due_without_zone() {
        let parsed = parse_due("2025-01-10T23:59").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2025-01-10T23:59:00+00:00");
    }

    #[test]
    fn test_parse_due_bare_date_is_end_of_day() {
        let parsed = parse_due("2025-01-10").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2025-01-10T23:59:00+00:00");
    }

    #[test]
    fn test_parse_due_garbage_rejected() {
        assert!(parse_due("next friday").is_err());
    }
}

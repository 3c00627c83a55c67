//! Submission commands - list, submit, confirm

use crate::cli::{authenticated_gateway, progress, style};
use classtrack::error::{Error, Result};
use classtrack::gateway::ClassroomGateway;
use classtrack::lifecycle::{
    TOTAL_CONFIRMATION_STEPS, confirm_submission, progress_ratio, submit_assignment,
};
use classtrack::types::{Group, Submission, SubmissionStatus};

fn status_badge(submission: &Submission) -> String {
    match submission.status {
        SubmissionStatus::Pending => "Not Submitted".to_string(),
        SubmissionStatus::Submitted => format!("{} Step 1: Submitted", style::pending_dot()),
        SubmissionStatus::Confirmed => format!("{} Step 2: Confirmed", style::check()),
    }
}

fn progress_bar(submission: &Submission) -> String {
    let filled = usize::from(submission.confirmation_step) * 5;
    let percent = progress_ratio(submission) * 100.0;
    format!(
        "[{}{}] {}/{TOTAL_CONFIRMATION_STEPS} steps ({percent:.0}%)",
        "#".repeat(filled),
        "-".repeat(10 - filled),
        submission.confirmation_step
    )
}

/// Pick the group to operate on: by id when given, the first one otherwise
async fn select_group(gateway: &dyn ClassroomGateway, group_id: Option<&str>) -> Result<Group> {
    let groups = gateway.list_groups().await?;
    match group_id {
        Some(id) => groups
            .into_iter()
            .find(|g| g.id == id)
            .ok_or_else(|| Error::NotFound(format!("group {id}"))),
        None => groups.into_iter().next().ok_or_else(|| {
            Error::NotFound("a group to show; join or create one first".to_string())
        }),
    }
}

/// Run `submissions`
pub async fn run_submissions_list(api_url: &str, group_id: Option<String>) -> Result<()> {
    let gateway = authenticated_gateway(api_url)?;

    let spinner = progress::spinner("Fetching submissions...");
    let result = async {
        let group = select_group(&gateway, group_id.as_deref()).await?;
        let submissions = gateway.list_group_submissions(&group.id).await?;
        Ok::<_, Error>((group, submissions))
    }
    .await;
    spinner.finish_and_clear();
    let (group, submissions) = result?;

    println!("Submissions for {}", style::emphasis(&group.name));
    println!();

    if submissions.is_empty() {
        println!("No submissions yet for this group");
        return Ok(());
    }

    for submission in &submissions {
        println!(
            "{}  {}",
            style::emphasis(&submission.assignment_title),
            status_badge(submission)
        );
        println!(
            "  submitted by {} on {}",
            submission.submitted_by,
            submission.submitted_at.format("%Y-%m-%d")
        );
        println!("  {}", style::hyperlink(&submission.link, &submission.link));
        println!("  {}", progress_bar(submission));

        match submission.status {
            SubmissionStatus::Submitted => {
                println!(
                    "  {}",
                    style::warn(&format!(
                        "Step 2 pending - run `ctrack confirm {}` to finalize",
                        submission.id
                    ))
                );
            }
            SubmissionStatus::Confirmed => {
                if let Some(confirmed_at) = submission.confirmed_at {
                    println!(
                        "  confirmed on {}",
                        confirmed_at.format("%Y-%m-%d")
                    );
                }
            }
            SubmissionStatus::Pending => {}
        }
        println!();
    }
    Ok(())
}

/// Run `submit`
pub async fn run_submit(
    api_url: &str,
    assignment_id: &str,
    group_id: &str,
    link: &str,
) -> Result<()> {
    let gateway = authenticated_gateway(api_url)?;

    let spinner = progress::spinner("Submitting...");
    let result = submit_assignment(&gateway, assignment_id, group_id, link).await;
    spinner.finish_and_clear();

    let submission = result?;
    println!(
        "{} Submitted {} {}",
        style::check(),
        style::emphasis(&submission.assignment_title),
        style::muted(&submission.id)
    );
    println!("  {}", style::hyperlink(&submission.link, &submission.link));
    println!(
        "  {}",
        style::muted(&format!(
            "Step 2: run `ctrack confirm {} --group {group_id}` to finalize",
            submission.id
        ))
    );
    Ok(())
}

/// Run `confirm`
pub async fn run_confirm(api_url: &str, submission_id: &str, group_id: &str) -> Result<()> {
    let gateway = authenticated_gateway(api_url)?;

    let spinner = progress::spinner("Confirming...");
    let result = confirm_submission(&gateway, group_id, submission_id).await;
    spinner.finish_and_clear();

    let submission = result?;
    let confirmed_on = submission
        .confirmed_at
        .map_or_else(|| "now".to_string(), |t| t.format("%Y-%m-%d").to_string());
    println!(
        "{} Submission confirmed on {confirmed_on} ({}/{TOTAL_CONFIRMATION_STEPS} steps)",
        style::check(),
        submission.confirmation_step
    );
    Ok(())
}

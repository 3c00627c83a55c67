//! Group commands - list, create, add members

use crate::cli::{authenticated_gateway, progress, style};
use classtrack::error::Result;
use classtrack::gateway::ClassroomGateway;
use classtrack::lifecycle::validate_email;

/// Run `groups list`
pub async fn run_groups_list(api_url: &str) -> Result<()> {
    let gateway = authenticated_gateway(api_url)?;

    let spinner = progress::spinner("Fetching groups...");
    let result = gateway.list_groups().await;
    spinner.finish_and_clear();
    let groups = result?;

    if groups.is_empty() {
        println!("No groups yet - create one with `ctrack groups create`");
        return Ok(());
    }

    for group in &groups {
        println!(
            "{}  {}  {} member{}",
            style::emphasis(&group.name),
            style::muted(&group.id),
            group.members.len(),
            if group.members.len() == 1 { "" } else { "s" }
        );
        if let Some(description) = &group.description {
            println!("  {}", style::muted(description));
        }
        for member in &group.members {
            match &member.student_id {
                Some(student_id) => println!("  - {} ({student_id})", member.name),
                None => println!("  - {}", member.name),
            }
        }
        println!();
    }
    Ok(())
}

/// Run `groups create`
pub async fn run_groups_create(
    api_url: &str,
    name: String,
    description: Option<String>,
) -> Result<()> {
    let gateway = authenticated_gateway(api_url)?;

    let spinner = progress::spinner("Creating group...");
    let result = gateway.create_group(&name, description.as_deref()).await;
    spinner.finish_and_clear();

    let group = result?;
    println!(
        "{} Created group {} {}",
        style::check(),
        style::emphasis(&group.name),
        style::muted(&group.id)
    );
    Ok(())
}

/// Run `groups add-member`
pub async fn run_groups_add_member(api_url: &str, group_id: &str, email: &str) -> Result<()> {
    validate_email(email)?;
    let gateway = authenticated_gateway(api_url)?;

    let spinner = progress::spinner("Adding member...");
    let result = gateway.add_group_member(group_id, email).await;
    spinner.finish_and_clear();
    result?;

    println!("{} Added {email}", style::check());
    Ok(())
}

//! Dashboard command - headline counts for the acting user

use crate::cli::{authenticated_gateway, progress, style};
use classtrack::error::Result;
use classtrack::gateway::ClassroomGateway;
use classtrack::lifecycle::dashboard_counts;
use classtrack::types::Role;

/// Run `dashboard` (also the default command)
pub async fn run_dashboard(api_url: &str) -> Result<()> {
    let gateway = authenticated_gateway(api_url)?;

    let spinner = progress::spinner("Loading dashboard...");
    let user = match gateway.current_user().await {
        Ok(user) => user,
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e);
        }
    };
    let counts = dashboard_counts(&gateway, user.role).await;
    spinner.finish_and_clear();

    println!("Welcome back, {}!", style::emphasis(&user.name));
    println!();
    println!("  Groups:      {}", counts.groups);
    println!("  Assignments: {}", counts.assignments);
    if user.role == Role::Professor {
        println!("  Submissions: {}", counts.submissions);
    }
    Ok(())
}

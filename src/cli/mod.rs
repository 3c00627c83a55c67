//! CLI commands
//!
//! Command implementations for the `ctrack` binary.

mod assignments;
mod auth;
mod dashboard;
mod groups;
mod progress;
mod style;
mod submissions;

pub use assignments::{run_assignments_create, run_assignments_list};
pub use auth::{run_login, run_logout, run_register, run_whoami};
pub use dashboard::run_dashboard;
pub use groups::{run_groups_add_member, run_groups_create, run_groups_list};
pub use submissions::{run_confirm, run_submissions_list, run_submit};

use classtrack::auth::resolve_credentials;
use classtrack::error::{Error, Result};
use classtrack::gateway::HttpGateway;

/// Build a gateway acting as the resolved credential owner
pub(crate) fn authenticated_gateway(api_url: &str) -> Result<HttpGateway> {
    let credentials = resolve_credentials()?;
    Ok(HttpGateway::new(api_url, &credentials))
}

/// Print a failure to stderr the way all commands report them
pub fn report_error(err: &Error) {
    eprintln!("{}: {err}", style::error_label());
}

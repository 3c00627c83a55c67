//! ctrack - classroom assignment tracking from the terminal
//!
//! CLI binary for groups, assignments and two-step submissions.

use clap::{Parser, Subcommand, ValueEnum};
use classtrack::config;
use classtrack::error::Result;
use classtrack::types::Role;

mod cli;

#[derive(Parser)]
#[command(name = "ctrack")]
#[command(about = "Classroom assignment tracking - groups, assignments & submissions")]
#[command(version)]
struct Cli {
    /// Backend base URL (defaults to CLASSTRACK_API_URL or the hosted backend)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Authentication management
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },

    /// List or post assignments
    Assignments {
        #[command(subcommand)]
        action: Option<AssignmentsAction>,
    },

    /// List or manage groups
    Groups {
        #[command(subcommand)]
        action: Option<GroupsAction>,
    },

    /// List a group's submissions
    Submissions {
        /// Group id (defaults to your first group)
        #[arg(long)]
        group: Option<String>,
    },

    /// Submit a link for an assignment (step 1 of 2)
    Submit {
        /// Assignment id
        assignment: String,

        /// Group id to submit as
        #[arg(long)]
        group: String,

        /// Link to the completed work
        #[arg(long)]
        link: String,
    },

    /// Confirm a submission (step 2 of 2)
    Confirm {
        /// Submission id
        submission: String,

        /// Group id the submission belongs to
        #[arg(long)]
        group: String,
    },

    /// Show counts of groups, assignments and submissions
    Dashboard,
}

#[derive(Subcommand)]
enum AuthAction {
    /// Log in and store a session
    Login {
        /// Login email (prompted when omitted)
        #[arg(long)]
        email: Option<String>,
    },
    /// Create an account and store a session
    Register {
        /// Display name (prompted when omitted)
        #[arg(long)]
        name: Option<String>,

        /// Login email (prompted when omitted)
        #[arg(long)]
        email: Option<String>,

        /// Account role
        #[arg(long, value_enum, default_value_t = RoleArg::Student)]
        role: RoleArg,
    },
    /// Delete the stored session
    Logout,
    /// Show who the current credential belongs to
    Whoami,
}

#[derive(Subcommand)]
enum AssignmentsAction {
    /// List assignments visible to you
    List,
    /// Post a new assignment (professor)
    Create {
        /// Assignment title
        #[arg(long)]
        title: String,

        /// Task description
        #[arg(long, default_value = "")]
        description: String,

        /// Due date, e.g. 2025-01-10T23:59 (UTC)
        #[arg(long)]
        due: String,

        /// External resource link
        #[arg(long)]
        link: Option<String>,

        /// Restrict to specific group ids (repeatable; default: all groups)
        #[arg(long = "group")]
        groups: Vec<String>,
    },
}

#[derive(Subcommand)]
enum GroupsAction {
    /// List groups with their members
    List,
    /// Create a group
    Create {
        /// Group name
        name: String,

        /// Free-form description
        #[arg(long)]
        description: Option<String>,
    },
    /// Add a member by email (group creator only)
    AddMember {
        /// Group id
        group: String,

        /// Member email
        email: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RoleArg {
    Student,
    Professor,
}

impl From<RoleArg> for Role {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Student => Self::Student,
            RoleArg::Professor => Self::Professor,
        }
    }
}

async fn dispatch(command: Option<Commands>, api_url: &str) -> Result<()> {
    match command {
        None | Some(Commands::Dashboard) => cli::run_dashboard(api_url).await,
        Some(Commands::Auth { action }) => match action {
            AuthAction::Login { email } => cli::run_login(api_url, email).await,
            AuthAction::Register { name, email, role } => {
                cli::run_register(api_url, name, email, role.into()).await
            }
            AuthAction::Logout => cli::run_logout(),
            AuthAction::Whoami => cli::run_whoami(api_url).await,
        },
        Some(Commands::Assignments { action }) => {
            match action.unwrap_or(AssignmentsAction::List) {
                AssignmentsAction::List => cli::run_assignments_list(api_url).await,
                AssignmentsAction::Create {
                    title,
                    description,
                    due,
                    link,
                    groups,
                } => {
                    cli::run_assignments_create(api_url, title, description, &due, link, groups)
                        .await
                }
            }
        }
        Some(Commands::Groups { action }) => match action.unwrap_or(GroupsAction::List) {
            GroupsAction::List => cli::run_groups_list(api_url).await,
            GroupsAction::Create { name, description } => {
                cli::run_groups_create(api_url, name, description).await
            }
            GroupsAction::AddMember { group, email } => {
                cli::run_groups_add_member(api_url, &group, &email).await
            }
        },
        Some(Commands::Submissions { group }) => cli::run_submissions_list(api_url, group).await,
        Some(Commands::Submit {
            assignment,
            group,
            link,
        }) => cli::run_submit(api_url, &assignment, &group, &link).await,
        Some(Commands::Confirm { submission, group }) => {
            cli::run_confirm(api_url, &submission, &group).await
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    let api_url = config::resolve_api_url(args.api_url.as_deref());

    if let Err(err) = dispatch(args.command, &api_url).await {
        cli::report_error(&err);
        std::process::exit(1);
    }
}

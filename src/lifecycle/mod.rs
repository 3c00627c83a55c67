//! Two-step submission lifecycle
//!
//! A submission for an (assignment, group) pair moves through exactly two
//! steps: it is created `submitted` (step 1) with a mandatory resource
//! link, then advanced once by an explicit confirm action to `confirmed`
//! (step 2), which is terminal. There is no reject, reopen or edit-link
//! transition.
//!
//! The backend is the sole arbiter of the authoritative state; this module
//! validates preconditions before spending a round trip and reads results
//! back from the backend rather than advancing state locally.

mod service;
mod state;
mod validate;

pub use service::{DashboardCounts, confirm_submission, dashboard_counts, submit_assignment};
pub use state::{TOTAL_CONFIRMATION_STEPS, is_overdue, progress_ratio};
pub use validate::{ensure_eligible, ensure_not_duplicate, validate_email, validate_link};

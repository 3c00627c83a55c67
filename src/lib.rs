//! classtrack - classroom assignment tracking client
//!
//! Library crate backing the `ctrack` binary. Students join groups,
//! professors post assignments, and groups submit links to completed work
//! which then move through a two-step confirmation flow.
//!
//! The interesting logic lives in [`lifecycle`]: the submission state
//! machine (pending -> submitted -> confirmed) and its validation rules.
//! [`gateway`] talks to the backend over authenticated HTTP and is the
//! only place wire data is handled; everything it hands to the rest of
//! the crate is fully populated.

pub mod auth;
pub mod config;
pub mod error;
pub mod gateway;
pub mod lifecycle;
pub mod types;

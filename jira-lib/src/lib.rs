//! Jira API client library
//!
//! A Rust async client library for the Jira REST API (v2): JQL search with
//! lazy result paging, issue CRUD, workflow transitions, comments, links,
//! attachments and server metadata.

pub mod api;
pub mod auth;
pub mod error;
pub mod model;
pub mod transport;

mod client;

pub use client::*;
pub use model::Issue;
pub use model::IssueFields;
pub use model::IssueRef;

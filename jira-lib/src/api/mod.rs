//! REST operations
//!
//! Every operation is a method on [`JiraClient`](crate::JiraClient); the
//! modules here group them by resource. Searching lives in [`query`].

mod attachments;
mod comments;
mod execute;
mod issues;
mod links;
mod meta;
pub mod query;
mod remote_links;

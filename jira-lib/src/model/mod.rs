//! Typed models for issues, fields and projection

mod fields;
mod issue;
mod link;
pub mod projection;
mod schema;
pub mod types;
mod value;

pub use fields::*;
pub use issue::*;
pub use link::IssueLink;
pub use link::LinkType;
pub use schema::*;
pub use value::*;

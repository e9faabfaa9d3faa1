//! Search queries and result paging

mod builder;
mod jql;
mod page;
mod pages;

pub use builder::*;
pub use jql::*;
pub use page::*;
pub use pages::*;

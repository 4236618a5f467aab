//! Domain list storage, lookup, and wildcard matching

mod bundle;
mod list;
mod pattern;

pub use bundle::Bundle;
pub use list::DomainList;
pub use pattern::Pattern;

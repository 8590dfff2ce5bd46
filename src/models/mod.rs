//! Data models for the Question Aura client.
//!
//! These mirror the backend's request and response schemas field for field.

mod answer;
mod page;
mod question;
mod topic;
mod user;

pub use answer::*;
pub use page::*;
pub use question::*;
pub use topic::*;
pub use user::*;

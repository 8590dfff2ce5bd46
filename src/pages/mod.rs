//! View models for each screen plus the pieces they share.

pub mod feed;
pub mod forms;
pub mod home;
pub mod layout;
pub mod pagination;
pub mod question_detail;
pub mod routes;
pub mod topic_detail;
pub mod welcome;

pub use feed::QuestionFeed;
pub use forms::{validate_username, AnswerForm, QuestionForm};
pub use home::HomePage;
pub use layout::{Layout, SearchBox, SidebarEntry};
pub use pagination::{FetchTicket, Pager};
pub use question_detail::QuestionDetailPage;
pub use routes::Route;
pub use topic_detail::TopicDetailPage;
pub use welcome::WelcomePage;

/// Load state of a view backed by a single resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewStatus {
    Loading,
    Ready,
    NotFound(String),
    Failed(String),
}

//! Shell around every signed-in view: topic sidebar, search box, user menu.

use super::routes::Route;
use crate::api::ApiClient;
use crate::auth::AuthState;
use crate::errors::ClientResult;
use crate::models::{Question, QuestionQuery, Topic};
use crate::slug::to_slug;

/// Search results always come from the first page.
pub const SEARCH_PAGE_SIZE: u32 = 10;
pub const NO_SEARCH_RESULTS: &str = "No questions found";

/// One sidebar link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry {
    pub label: String,
    pub route: Route,
    pub image_url: Option<String>,
    pub is_active: bool,
}

/// Search box state. Results are visible only while the query is non-blank.
#[derive(Debug, Clone, Default)]
pub struct SearchBox {
    pub query: String,
    pub results: Vec<Question>,
    pub is_visible: bool,
}

impl SearchBox {
    fn hide(&mut self) {
        self.results.clear();
        self.is_visible = false;
    }

    /// "Questions (3)" or the no-results text.
    pub fn header(&self) -> String {
        if self.results.is_empty() {
            NO_SEARCH_RESULTS.to_string()
        } else {
            format!("Questions ({})", self.results.len())
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Layout {
    pub topics: Vec<Topic>,
    pub search: SearchBox,
    pub is_user_menu_open: bool,
}

impl Layout {
    /// Load sidebar topics. On failure the sidebar stays empty.
    pub async fn load_topics(&mut self, api: &ApiClient) {
        match api.topics().list().await {
            Ok(topics) => self.topics = topics,
            Err(e) => {
                tracing::error!("Failed to load sidebar topics: {}", e);
                self.topics.clear();
            }
        }
    }

    /// Dashboard link followed by one link per topic, with the entry matching
    /// `current` marked active.
    pub fn sidebar(&self, current: &Route) -> Vec<SidebarEntry> {
        let dashboard = SidebarEntry {
            label: "Dashboard".to_string(),
            route: Route::home(),
            image_url: None,
            is_active: matches!(current, Route::Home { .. }),
        };

        let topics = self.topics.iter().map(|topic| {
            let slug = to_slug(&topic.name);
            let is_active = matches!(current, Route::Topic { slug: s, .. } if *s == slug);
            SidebarEntry {
                label: topic.name.clone(),
                route: Route::topic(topic),
                image_url: topic.image_url.clone(),
                is_active,
            }
        });

        std::iter::once(dashboard).chain(topics).collect()
    }

    pub fn user_name(&self, auth: &AuthState) -> String {
        auth.identity().display_name()
    }

    pub fn user_avatar(&self, auth: &AuthState) -> String {
        auth.identity().avatar_url()
    }

    pub fn toggle_user_menu(&mut self) {
        self.is_user_menu_open = !self.is_user_menu_open;
    }

    /// Run a search. A blank query hides the results without a request.
    pub async fn search(&mut self, api: &ApiClient, query: &str) {
        self.search.query = query.to_string();

        let trimmed = query.trim();
        if trimmed.is_empty() {
            self.search.hide();
            return;
        }

        let params = QuestionQuery::search(trimmed, 1, SEARCH_PAGE_SIZE);
        match api.questions().list(&params).await {
            Ok(page) => self.search.results = page.items,
            Err(e) => {
                tracing::error!("Search for {:?} failed: {}", trimmed, e);
                self.search.results.clear();
            }
        }
        self.search.is_visible = true;
    }

    /// Follow a search result. The search box is cleared.
    pub fn open_search_result(&mut self, question_id: i64) -> Route {
        self.search.query.clear();
        self.search.hide();
        Route::question(question_id)
    }

    /// End the session and return the route to show next.
    pub async fn logout(&mut self, auth: &mut AuthState) -> ClientResult<Route> {
        self.is_user_menu_open = false;
        auth.logout().await?;
        Ok(Route::Login)
    }
}

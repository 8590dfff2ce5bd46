//! Home feed: every question, newest first, with the ask form.

use super::feed::QuestionFeed;
use super::forms::QuestionForm;
use super::routes::Route;
use crate::api::ApiClient;
use crate::models::Question;

#[derive(Debug, Clone)]
pub struct HomePage {
    pub feed: QuestionFeed,
    pub form: QuestionForm,
}

impl HomePage {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            feed: QuestionFeed::new(None, page, page_size),
            form: QuestionForm::default(),
        }
    }

    pub fn from_route(route: &Route, page_size: u32) -> Option<Self> {
        match route {
            Route::Home { page } => Some(Self::new(*page, page_size)),
            _ => None,
        }
    }

    pub fn route(&self) -> Route {
        Route::Home {
            page: self.feed.pager.page(),
        }
    }

    pub async fn load(&mut self, api: &ApiClient) {
        self.feed.load(api).await;
    }

    pub async fn go_to_page(&mut self, api: &ApiClient, page: u32) -> bool {
        self.feed.go_to_page(api, page).await
    }

    pub async fn next_page(&mut self, api: &ApiClient) -> bool {
        self.feed.next_page(api).await
    }

    pub async fn previous_page(&mut self, api: &ApiClient) -> bool {
        self.feed.previous_page(api).await
    }

    /// Open the ask form with the topic picker populated.
    pub async fn open_question_form(&mut self, api: &ApiClient) {
        self.form.open(api).await;
    }

    pub async fn submit_question(&mut self, api: &ApiClient) -> Option<Question> {
        let question = self.form.submit(api).await?;
        self.feed.reset(api).await;
        Some(question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_tracks_page() {
        let mut home = HomePage::from_route(&Route::Home { page: 2 }, 10).unwrap();
        assert_eq!(home.route().to_string(), "/?page=2");
        home.feed.pager.reset();
        assert_eq!(home.route(), Route::home());
    }
}

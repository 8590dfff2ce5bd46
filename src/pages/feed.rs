//! Paginated question list shared by the home feed and topic pages.

use super::pagination::{FetchTicket, Pager};
use crate::api::ApiClient;
use crate::errors::ClientResult;
use crate::models::{Page, Question, QuestionQuery};

/// One page of questions, optionally restricted to a topic.
#[derive(Debug, Clone)]
pub struct QuestionFeed {
    pub topic_id: Option<i64>,
    pub questions: Vec<Question>,
    pub pager: Pager,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl QuestionFeed {
    pub fn new(topic_id: Option<i64>, page: u32, page_size: u32) -> Self {
        Self {
            topic_id,
            questions: Vec::new(),
            pager: Pager::starting_at(page, page_size),
            is_loading: false,
            error: None,
        }
    }

    /// Ticket and query for fetching the current page.
    ///
    /// Callers that run fetches concurrently pair this with [`Self::apply`];
    /// everyone else uses [`Self::load`].
    pub fn begin_fetch(&mut self) -> (FetchTicket, QuestionQuery) {
        self.is_loading = true;
        let ticket = self.pager.begin();
        let page_size = self.pager.page_size();
        let query = match self.topic_id {
            Some(topic_id) => QuestionQuery::for_topic(topic_id, ticket.page, page_size),
            None => QuestionQuery::feed(ticket.page, page_size),
        };
        (ticket, query)
    }

    /// Apply a fetch result. Results for superseded tickets are dropped and
    /// `false` is returned.
    pub fn apply(&mut self, ticket: FetchTicket, result: ClientResult<Page<Question>>) -> bool {
        match result {
            Ok(page) => {
                if !self.pager.accept(ticket, page.total_pages) {
                    return false;
                }
                self.questions = page.items;
                self.error = None;
            }
            Err(e) => {
                if !self.pager.accept(ticket, self.pager.total_pages()) {
                    return false;
                }
                tracing::error!("Failed to load questions: {}", e);
                self.error = Some(e.user_message("Failed to load questions"));
            }
        }
        self.is_loading = false;
        true
    }

    /// Fetch the current page, replacing the previous result set.
    pub async fn load(&mut self, api: &ApiClient) {
        let (ticket, query) = self.begin_fetch();
        let result = api.questions().list(&query).await;
        self.apply(ticket, result);
    }

    /// Move to `page` and fetch it. Nothing happens if already there.
    pub async fn go_to_page(&mut self, api: &ApiClient, page: u32) -> bool {
        if !self.pager.go_to(page) {
            return false;
        }
        self.load(api).await;
        true
    }

    pub async fn next_page(&mut self, api: &ApiClient) -> bool {
        if !self.pager.next() {
            return false;
        }
        self.load(api).await;
        true
    }

    pub async fn previous_page(&mut self, api: &ApiClient) -> bool {
        if !self.pager.previous() {
            return false;
        }
        self.load(api).await;
        true
    }

    /// Back to page 1 and refetch, so a newly created question shows up.
    pub async fn reset(&mut self, api: &ApiClient) {
        self.pager.reset();
        self.load(api).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ClientError;

    fn page_of(ids: &[i64], total_pages: u32) -> Page<Question> {
        let items = ids
            .iter()
            .map(|id| {
                serde_json::from_value(serde_json::json!({
                    "id": id,
                    "ask": format!("Question {}", id),
                    "topic_id": 1,
                    "asker_id": 1,
                    "created_at": "2024-01-01T00:00:00",
                    "updated_at": "2024-01-01T00:00:00",
                    "topic": {"id": 1, "name": "Programming"},
                    "asker": {"id": 1, "email": "a@example.com"}
                }))
                .unwrap()
            })
            .collect();
        Page {
            items,
            total: ids.len() as u64,
            page: 1,
            page_size: 10,
            total_pages,
        }
    }

    #[test]
    fn test_query_carries_topic_and_page() {
        let mut feed = QuestionFeed::new(Some(3), 2, 10);
        let (_, query) = feed.begin_fetch();
        assert_eq!(query, QuestionQuery::for_topic(3, 2, 10));

        let mut home = QuestionFeed::new(None, 1, 5);
        let (_, query) = home.begin_fetch();
        assert_eq!(query, QuestionQuery::feed(1, 5));
        assert!(home.is_loading);
    }

    #[test]
    fn test_latest_fetch_wins() {
        let mut feed = QuestionFeed::new(None, 1, 10);
        let (first, _) = feed.begin_fetch();
        feed.pager.go_to(2);
        let (second, _) = feed.begin_fetch();

        assert!(feed.apply(second, Ok(page_of(&[11, 12], 2))));
        assert!(!feed.apply(first, Ok(page_of(&[1, 2, 3], 2))));

        let ids: Vec<i64> = feed.questions.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![11, 12]);
        assert!(!feed.is_loading);
    }

    #[test]
    fn test_failed_fetch_keeps_items_and_sets_error() {
        let mut feed = QuestionFeed::new(None, 1, 10);
        let (ticket, _) = feed.begin_fetch();
        feed.apply(ticket, Ok(page_of(&[1], 1)));

        let (ticket, _) = feed.begin_fetch();
        feed.apply(
            ticket,
            Err(ClientError::from_response(500, "boom".into())),
        );
        assert_eq!(feed.questions.len(), 1);
        assert_eq!(feed.error.as_deref(), Some("Failed to load questions"));
    }
}

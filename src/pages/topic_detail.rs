//! Topic page: resolve the slug from the route, then page through its questions.

use super::feed::QuestionFeed;
use super::forms::QuestionForm;
use super::routes::Route;
use super::ViewStatus;
use crate::api::ApiClient;
use crate::models::{Question, Topic};
use crate::slug::{from_slug, topic_id_from_slug};

pub const TOPIC_NOT_FOUND: &str = "Topic not found";
pub const NO_QUESTIONS: &str = "No questions yet in this topic. Be the first to ask!";

#[derive(Debug, Clone)]
pub struct TopicDetailPage {
    pub slug: String,
    pub topic: Option<Topic>,
    pub feed: QuestionFeed,
    pub form: QuestionForm,
    pub status: ViewStatus,
}

impl TopicDetailPage {
    pub fn new(slug: impl Into<String>, page: u32, page_size: u32) -> Self {
        Self {
            slug: slug.into(),
            topic: None,
            feed: QuestionFeed::new(None, page, page_size),
            form: QuestionForm::default(),
            status: ViewStatus::Loading,
        }
    }

    /// Page for a `/topic/<slug>` route.
    pub fn from_route(route: &Route, page_size: u32) -> Option<Self> {
        match route {
            Route::Topic { slug, page } => Some(Self::new(slug.clone(), *page, page_size)),
            _ => None,
        }
    }

    /// Topic name once known, a guess from the slug before that.
    pub fn heading(&self) -> String {
        match &self.topic {
            Some(topic) => topic.name.clone(),
            None => from_slug(&self.slug),
        }
    }

    /// Prompt shown above the feed.
    pub fn prompt(&self) -> String {
        format!("What is your question about {}?", self.heading())
    }

    /// Current location, including the page number.
    pub fn route(&self) -> Route {
        Route::Topic {
            slug: self.slug.clone(),
            page: self.feed.pager.page(),
        }
    }

    /// Fetch the topic list, resolve the slug, then fetch the current page.
    /// The question fetch only runs once the slug resolves.
    pub async fn load(&mut self, api: &ApiClient) {
        self.status = ViewStatus::Loading;

        let topics = match api.topics().list().await {
            Ok(topics) => topics,
            Err(e) => {
                tracing::error!("Failed to load topic {:?}: {}", self.slug, e);
                self.status = ViewStatus::Failed(e.user_message("Failed to load topic"));
                return;
            }
        };

        let Some(topic_id) = topic_id_from_slug(&self.slug, &topics) else {
            tracing::info!("No topic matches slug {:?}", self.slug);
            self.status = ViewStatus::NotFound(TOPIC_NOT_FOUND.to_string());
            return;
        };

        self.topic = topics.into_iter().find(|t| t.id == topic_id);
        self.feed.topic_id = Some(topic_id);
        self.form = QuestionForm::with_default_topic(Some(topic_id));
        self.status = ViewStatus::Ready;

        self.feed.load(api).await;
    }

    pub async fn go_to_page(&mut self, api: &ApiClient, page: u32) -> bool {
        self.is_ready() && self.feed.go_to_page(api, page).await
    }

    pub async fn next_page(&mut self, api: &ApiClient) -> bool {
        self.is_ready() && self.feed.next_page(api).await
    }

    pub async fn previous_page(&mut self, api: &ApiClient) -> bool {
        self.is_ready() && self.feed.previous_page(api).await
    }

    pub async fn open_question_form(&mut self, api: &ApiClient) {
        self.form.open(api).await;
    }

    /// Submit the question form. On success the feed returns to page 1 and
    /// the new question is returned.
    pub async fn submit_question(&mut self, api: &ApiClient) -> Option<Question> {
        let question = self.form.submit(api).await?;
        self.feed.reset(api).await;
        Some(question)
    }

    /// Text for an empty feed, once loading has finished.
    pub fn empty_message(&self) -> Option<&'static str> {
        (self.is_ready() && !self.feed.is_loading && self.feed.questions.is_empty())
            .then_some(NO_QUESTIONS)
    }

    fn is_ready(&self) -> bool {
        self.status == ViewStatus::Ready
    }
}

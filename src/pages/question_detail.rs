//! Question page: the question itself, its answers, and the answer form.

use super::forms::AnswerForm;
use super::routes::Route;
use super::ViewStatus;
use crate::api::ApiClient;
use crate::models::{Answer, Question};

pub const QUESTION_NOT_FOUND: &str = "Question not found";
pub const NO_ANSWERS: &str = "No answers yet. Be the first to answer!";

#[derive(Debug, Clone)]
pub struct QuestionDetailPage {
    pub question_id: i64,
    pub question: Option<Question>,
    pub answers: Vec<Answer>,
    pub form: AnswerForm,
    pub status: ViewStatus,
}

impl QuestionDetailPage {
    pub fn new(question_id: i64) -> Self {
        Self {
            question_id,
            question: None,
            answers: Vec::new(),
            form: AnswerForm::new(question_id),
            status: ViewStatus::Loading,
        }
    }

    pub fn from_route(route: &Route) -> Option<Self> {
        match route {
            Route::Question { id } => Some(Self::new(*id)),
            _ => None,
        }
    }

    pub fn route(&self) -> Route {
        Route::question(self.question_id)
    }

    /// Fetch the question, then its answers. A missing question stops there.
    pub async fn load(&mut self, api: &ApiClient) {
        self.status = ViewStatus::Loading;

        match api.questions().get(self.question_id).await {
            Ok(question) => self.question = Some(question),
            Err(e) => {
                tracing::warn!("Failed to load question {}: {}", self.question_id, e);
                self.question = None;
                self.status = ViewStatus::NotFound(QUESTION_NOT_FOUND.to_string());
                return;
            }
        }

        self.load_answers(api).await;
        self.status = ViewStatus::Ready;
    }

    /// Refresh the answer list. On failure the list is left empty.
    pub async fn load_answers(&mut self, api: &ApiClient) {
        match api.answers().for_question(self.question_id).await {
            Ok(answers) => self.answers = answers,
            Err(e) => {
                tracing::error!("Failed to load answers for question {}: {}", self.question_id, e);
                self.answers.clear();
            }
        }
    }

    /// Submit the answer form and reload the answers on success.
    pub async fn submit_answer(&mut self, api: &ApiClient) -> bool {
        if self.form.submit(api).await.is_none() {
            return false;
        }
        self.load_answers(api).await;
        true
    }

    /// "1 Answer", "3 Answers"
    pub fn answers_heading(&self) -> String {
        match self.answers.len() {
            1 => "1 Answer".to_string(),
            n => format!("{} Answers", n),
        }
    }

    pub fn empty_message(&self) -> Option<&'static str> {
        (self.status == ViewStatus::Ready && self.answers.is_empty()).then_some(NO_ANSWERS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRecord;

    fn answer(id: i64) -> Answer {
        Answer {
            id,
            question_id: 1,
            response: "Use a Vec.".into(),
            image_url: None,
            responder_id: 2,
            created_at: "2024-03-05T10:00:00".into(),
            updated_at: "2024-03-05T10:00:00".into(),
            responder: UserRecord {
                id: 2,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_answers_heading() {
        let mut page = QuestionDetailPage::new(1);
        assert_eq!(page.answers_heading(), "0 Answers");
        page.answers.push(answer(1));
        assert_eq!(page.answers_heading(), "1 Answer");
        page.answers.push(answer(2));
        assert_eq!(page.answers_heading(), "2 Answers");
    }

    #[test]
    fn test_route_round_trip() {
        let route = Route::parse("/question/17").unwrap();
        let page = QuestionDetailPage::from_route(&route).unwrap();
        assert_eq!(page.form.question_id, 17);
        assert_eq!(page.route(), route);
    }

    #[test]
    fn test_empty_message_only_when_ready() {
        let mut page = QuestionDetailPage::new(1);
        assert_eq!(page.empty_message(), None);
        page.status = ViewStatus::Ready;
        assert_eq!(page.empty_message(), Some(NO_ANSWERS));
    }
}

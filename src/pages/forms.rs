//! Question, answer and username forms.
//!
//! Each form validates locally first; a form that fails validation records
//! its message and never touches the network.

use crate::api::ApiClient;
use crate::models::{Answer, AnswerCreate, Question, QuestionCreate, Topic};
use crate::upload::ImageFile;

pub const ENTER_QUESTION: &str = "Please enter a question";
pub const SELECT_TOPIC: &str = "Please select a topic";
pub const ENTER_ANSWER: &str = "Please enter an answer";
pub const ENTER_USERNAME: &str = "Please enter a username";
pub const INVALID_USERNAME: &str = "Username must be 3-20 characters (letters, numbers, _, - only)";

const USERNAME_MIN_LEN: usize = 3;
const USERNAME_MAX_LEN: usize = 20;

/// Modal form for asking a question.
#[derive(Debug, Clone, Default)]
pub struct QuestionForm {
    pub is_open: bool,
    pub text: String,
    pub topic_id: Option<i64>,
    pub topics: Vec<Topic>,
    pub image: Option<ImageFile>,
    pub error: Option<String>,
    pub is_submitting: bool,
    default_topic_id: Option<i64>,
}

impl QuestionForm {
    /// A form that preselects `default_topic_id`, as on a topic page.
    pub fn with_default_topic(default_topic_id: Option<i64>) -> Self {
        Self {
            topic_id: default_topic_id,
            default_topic_id,
            ..Default::default()
        }
    }

    /// Open the form and load the topic picker. Without a selection the first
    /// topic is preselected.
    pub async fn open(&mut self, api: &ApiClient) {
        self.is_open = true;
        match api.topics().list().await {
            Ok(topics) => {
                if self.topic_id.is_none() {
                    self.topic_id = topics.first().map(|t| t.id);
                }
                self.topics = topics;
            }
            Err(e) => {
                tracing::error!("Failed to load topics: {}", e);
                self.error = Some("Failed to load topics".to_string());
            }
        }
    }

    pub fn cancel(&mut self) {
        self.text.clear();
        self.image = None;
        self.error = None;
        self.is_open = false;
    }

    /// Build the request body, or the message explaining why not.
    pub fn validate(&self) -> Result<QuestionCreate, &'static str> {
        let ask = self.text.trim();
        if ask.is_empty() {
            return Err(ENTER_QUESTION);
        }
        let topic_id = self.topic_id.ok_or(SELECT_TOPIC)?;

        Ok(QuestionCreate {
            topic_id,
            ask: ask.to_string(),
            image_url: None,
        })
    }

    /// Validate, upload the image if one is attached, then create the
    /// question. On failure the error text is left on the form.
    pub async fn submit(&mut self, api: &ApiClient) -> Option<Question> {
        let mut data = match self.validate() {
            Ok(data) => data,
            Err(message) => {
                self.error = Some(message.to_string());
                return None;
            }
        };

        self.is_submitting = true;
        self.error = None;

        if let Some(image) = &self.image {
            match api.uploads().upload_image(image).await {
                Ok(url) => data.image_url = Some(url),
                Err(e) => {
                    tracing::error!("Failed to upload question image: {}", e);
                    self.error = Some(e.user_message("Failed to upload image"));
                    self.is_submitting = false;
                    return None;
                }
            }
        }

        let result = api.questions().create(&data).await;
        self.is_submitting = false;

        match result {
            Ok(question) => {
                tracing::info!("Created question {}", question.id);
                self.text.clear();
                self.image = None;
                self.topic_id = self
                    .default_topic_id
                    .or_else(|| self.topics.first().map(|t| t.id));
                self.is_open = false;
                Some(question)
            }
            Err(e) => {
                tracing::error!("Failed to create question: {}", e);
                self.error = Some(e.user_message("Failed to create question"));
                None
            }
        }
    }
}

/// Modal form for answering a question.
#[derive(Debug, Clone)]
pub struct AnswerForm {
    pub question_id: i64,
    pub is_open: bool,
    pub text: String,
    pub image: Option<ImageFile>,
    pub error: Option<String>,
    pub is_submitting: bool,
}

impl AnswerForm {
    pub fn new(question_id: i64) -> Self {
        Self {
            question_id,
            is_open: false,
            text: String::new(),
            image: None,
            error: None,
            is_submitting: false,
        }
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn cancel(&mut self) {
        self.text.clear();
        self.image = None;
        self.error = None;
        self.is_open = false;
    }

    pub fn validate(&self) -> Result<AnswerCreate, &'static str> {
        let response = self.text.trim();
        if response.is_empty() {
            return Err(ENTER_ANSWER);
        }
        Ok(AnswerCreate {
            question_id: self.question_id,
            response: response.to_string(),
            image_url: None,
        })
    }

    pub async fn submit(&mut self, api: &ApiClient) -> Option<Answer> {
        let mut data = match self.validate() {
            Ok(data) => data,
            Err(message) => {
                self.error = Some(message.to_string());
                return None;
            }
        };

        self.is_submitting = true;
        self.error = None;

        if let Some(image) = &self.image {
            match api.uploads().upload_image(image).await {
                Ok(url) => data.image_url = Some(url),
                Err(e) => {
                    tracing::error!("Failed to upload answer image: {}", e);
                    self.error = Some(e.user_message("Failed to upload image"));
                    self.is_submitting = false;
                    return None;
                }
            }
        }

        let result = api.answers().create(&data).await;
        self.is_submitting = false;

        match result {
            Ok(answer) => {
                tracing::info!("Created answer {} on question {}", answer.id, self.question_id);
                self.text.clear();
                self.image = None;
                self.is_open = false;
                Some(answer)
            }
            Err(e) => {
                tracing::error!("Failed to create answer: {}", e);
                self.error = Some(e.user_message("Failed to create answer"));
                None
            }
        }
    }
}

/// Check a username picked at sign-up. Returns it lowercased.
pub fn validate_username(raw: &str) -> Result<String, &'static str> {
    if raw.is_empty() {
        return Err(ENTER_USERNAME);
    }
    let username = raw.to_lowercase();
    let valid_chars = username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    let valid_len = (USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&username.chars().count());

    if valid_chars && valid_len {
        Ok(username)
    } else {
        Err(INVALID_USERNAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_validation() {
        let mut form = QuestionForm::with_default_topic(Some(4));
        form.text = "   ".into();
        assert_eq!(form.validate(), Err(ENTER_QUESTION));

        form.text = "  What is ownership?  ".into();
        assert_eq!(
            form.validate(),
            Ok(QuestionCreate {
                topic_id: 4,
                ask: "What is ownership?".into(),
                image_url: None,
            })
        );

        form.topic_id = None;
        assert_eq!(form.validate(), Err(SELECT_TOPIC));
    }

    #[test]
    fn test_answer_validation() {
        let mut form = AnswerForm::new(9);
        assert_eq!(form.validate(), Err(ENTER_ANSWER));
        form.text = "Borrow it.".into();
        assert_eq!(form.validate().unwrap().question_id, 9);
    }

    #[test]
    fn test_cancel_clears_form() {
        let mut form = QuestionForm::default();
        form.is_open = true;
        form.text = "draft".into();
        form.error = Some(ENTER_QUESTION.into());
        form.cancel();
        assert!(!form.is_open);
        assert!(form.text.is_empty());
        assert!(form.error.is_none());
    }

    #[test]
    fn test_username_rules() {
        assert_eq!(validate_username(""), Err(ENTER_USERNAME));
        assert_eq!(validate_username("ab"), Err(INVALID_USERNAME));
        assert_eq!(validate_username("has space"), Err(INVALID_USERNAME));
        assert_eq!(validate_username(&"x".repeat(21)), Err(INVALID_USERNAME));
        assert_eq!(validate_username("Ada_Lovelace-1"), Ok("ada_lovelace-1".into()));
    }
}

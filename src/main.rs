//! Question Aura command-line client
//!
//! Browses topics and questions, posts questions and answers, and manages the
//! local sign-in against a Question Aura backend.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use question_aura_client::api::ApiClient;
use question_aura_client::auth::{
    author_name, AuthState, CredentialStore, ProviderSession, SessionStore,
};
use question_aura_client::config::Config;
use question_aura_client::models::{format_date, Question};
use question_aura_client::pages::{
    HomePage, Layout, QuestionDetailPage, QuestionFeed, Route, TopicDetailPage, ViewStatus,
    WelcomePage,
};
use question_aura_client::slug::to_slug;
use question_aura_client::upload::ImageFile;

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "qaura")]
#[command(about = "Question Aura - ask and answer questions by topic", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all topics
    Topics,
    /// List questions, optionally by topic or search text
    Questions {
        /// Topic slug, e.g. "career-advice"
        #[arg(long)]
        topic: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Free-text search (first page only)
        #[arg(long)]
        search: Option<String>,
    },
    /// Show a question with its answers
    Question { id: i64 },
    /// Ask a question under a topic
    Ask {
        #[arg(long)]
        topic: String,
        text: String,
        /// Image to attach
        #[arg(long)]
        image: Option<PathBuf>,
    },
    /// Answer a question
    Answer {
        id: i64,
        text: String,
        #[arg(long)]
        image: Option<PathBuf>,
    },
    /// Upload an image and print its URL
    Upload { path: PathBuf },
    /// Sign in with the demo account
    DemoLogin,
    /// Sign out and forget the stored session
    Logout,
    /// Show the current identity
    Whoami,
}

#[tokio::main]
async fn main() -> CliResult<()> {
    let cli = Cli::parse();

    let config = Config::from_env()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("API URL: {}", config.api_url);
    tracing::debug!("Session file: {:?}", config.session_path());

    let provider = match (&config.provider_access_token, &config.provider_id_token) {
        (Some(access), Some(id_token)) => {
            Some(ProviderSession::from_tokens(access.clone(), id_token)?)
        }
        (None, None) => None,
        _ => {
            tracing::warn!(
                "Provider session needs both QA_PROVIDER_ACCESS_TOKEN and \
                 QA_PROVIDER_ID_TOKEN; ignoring"
            );
            None
        }
    };

    let credentials = CredentialStore::new();
    let store = SessionStore::new(config.session_path());
    let mut auth = AuthState::restore(credentials.clone(), store, provider).await?;
    let api = ApiClient::new(&config.api_url, credentials);

    match cli.command {
        Commands::Topics => list_topics(&api).await?,
        Commands::Questions { topic, page, search } => {
            list_questions(&api, &config, topic, page, search).await?
        }
        Commands::Question { id } => show_question(&api, id).await?,
        Commands::Ask { topic, text, image } => ask(&api, &config, &topic, text, image).await?,
        Commands::Answer { id, text, image } => answer(&api, id, text, image).await?,
        Commands::Upload { path } => {
            let file = ImageFile::from_path(&path).await?;
            let url = api.uploads().upload_image(&file).await?;
            println!("{}", url);
        }
        Commands::DemoLogin => {
            let mut welcome = WelcomePage::new();
            match welcome.demo_login(&api, &mut auth).await {
                Some(route) => {
                    println!("Signed in as {} ({})", auth.identity().display_name(), route)
                }
                None => return Err(welcome.error.unwrap_or_default().into()),
            }
        }
        Commands::Logout => {
            let route = Layout::default().logout(&mut auth).await?;
            println!("Signed out ({})", route);
        }
        Commands::Whoami => {
            let identity = auth.identity();
            let kind = if identity.is_demo() {
                "demo"
            } else if identity.is_authenticated() {
                "provider"
            } else {
                "anonymous"
            };
            println!("{} [{}]", identity.display_name(), kind);
            println!("{}", identity.avatar_url());
        }
    }

    Ok(())
}

async fn list_topics(api: &ApiClient) -> CliResult<()> {
    for topic in api.topics().list().await? {
        println!("{:>4}  {:<30} /topic/{}", topic.id, topic.name, to_slug(&topic.name));
    }
    Ok(())
}

async fn list_questions(
    api: &ApiClient,
    config: &Config,
    topic: Option<String>,
    page: u32,
    search: Option<String>,
) -> CliResult<()> {
    if let Some(query) = search {
        let mut layout = Layout::default();
        layout.search(api, &query).await;
        println!("{}", layout.search.header());
        for question in &layout.search.results {
            print_question_line(question);
        }
        return Ok(());
    }

    match topic {
        Some(slug) => {
            let mut view = TopicDetailPage::new(slug, page, config.page_size);
            view.load(api).await;
            ensure_ready(&view.status)?;
            println!("{}", view.heading());
            print_feed(&view.feed, view.empty_message());
            println!("{}", view.route());
        }
        None => {
            let mut view = HomePage::new(page, config.page_size);
            view.load(api).await;
            print_feed(&view.feed, None);
            println!("{}", view.route());
        }
    }
    Ok(())
}

async fn show_question(api: &ApiClient, id: i64) -> CliResult<()> {
    let mut view = QuestionDetailPage::new(id);
    view.load(api).await;
    ensure_ready(&view.status)?;

    if let Some(question) = &view.question {
        println!("{}", question.ask);
        println!(
            "  asked by {} in {} on {}",
            author_name(&question.asker),
            question.topic.name,
            format_date(&question.created_at)
        );
        if let Some(url) = &question.image_url {
            println!("  image: {}", url);
        }
    }

    println!();
    println!("{}", view.answers_heading());
    if let Some(message) = view.empty_message() {
        println!("{}", message);
    }
    for answer in &view.answers {
        println!(
            "- {} ({}, {})",
            answer.response,
            author_name(&answer.responder),
            format_date(&answer.created_at)
        );
    }
    Ok(())
}

async fn ask(
    api: &ApiClient,
    config: &Config,
    slug: &str,
    text: String,
    image: Option<PathBuf>,
) -> CliResult<()> {
    let mut view = TopicDetailPage::new(slug, 1, config.page_size);
    view.load(api).await;
    ensure_ready(&view.status)?;

    view.form.text = text;
    if let Some(path) = image {
        view.form.image = Some(ImageFile::from_path(&path).await?);
    }
    match view.submit_question(api).await {
        Some(question) => {
            println!("Posted: {}", Route::question(question.id));
            Ok(())
        }
        None => Err(view.form.error.unwrap_or_default().into()),
    }
}

async fn answer(api: &ApiClient, id: i64, text: String, image: Option<PathBuf>) -> CliResult<()> {
    let mut view = QuestionDetailPage::new(id);
    view.load(api).await;
    ensure_ready(&view.status)?;

    view.form.text = text;
    if let Some(path) = image {
        view.form.image = Some(ImageFile::from_path(&path).await?);
    }
    if !view.submit_answer(api).await {
        return Err(view.form.error.unwrap_or_default().into());
    }

    println!("{}", view.answers_heading());
    Ok(())
}

fn ensure_ready(status: &ViewStatus) -> CliResult<()> {
    match status {
        ViewStatus::NotFound(message) | ViewStatus::Failed(message) => Err(message.clone().into()),
        _ => Ok(()),
    }
}

fn print_feed(feed: &QuestionFeed, empty_message: Option<&str>) {
    if let Some(error) = &feed.error {
        eprintln!("{}", error);
    }
    if let Some(message) = empty_message {
        println!("{}", message);
    }
    for question in &feed.questions {
        print_question_line(question);
    }
    if feed.pager.shows_controls() {
        println!("{}", feed.pager.label());
    }
}

fn print_question_line(question: &Question) {
    println!(
        "{:>5}  {}  [{}, {}]",
        question.id,
        question.ask,
        author_name(&question.asker),
        format_date(&question.created_at)
    );
}

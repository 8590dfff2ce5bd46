//! Client routes and their URL form.
//!
//! The page number of paginated views lives in the query string so that a
//! route alone is enough to restore the view.

use std::fmt;

use reqwest::Url;

use crate::models::Topic;
use crate::slug::to_slug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home { page: u32 },
    Topic { slug: String, page: u32 },
    Question { id: i64 },
    Login,
}

impl Route {
    pub fn home() -> Self {
        Route::Home { page: 1 }
    }

    /// Route to the first page of a topic.
    pub fn topic(topic: &Topic) -> Self {
        Route::Topic {
            slug: to_slug(&topic.name),
            page: 1,
        }
    }

    pub fn question(id: i64) -> Self {
        Route::Question { id }
    }

    /// Parse a path with optional query, e.g. `/topic/finance?page=2`.
    /// Unknown paths yield `None`.
    pub fn parse(target: &str) -> Option<Self> {
        let url = Url::parse("http://localhost").ok()?.join(target).ok()?;
        let page = page_from_query(&url);
        let segments: Vec<&str> = url
            .path_segments()
            .map(|s| s.filter(|seg| !seg.is_empty()).collect())
            .unwrap_or_default();

        match segments.as_slice() {
            [] => Some(Route::Home { page }),
            ["login"] => Some(Route::Login),
            ["topic", slug] => Some(Route::Topic {
                slug: slug.to_lowercase(),
                page,
            }),
            ["question", id] => id.parse().ok().map(|id| Route::Question { id }),
            _ => None,
        }
    }

    /// Page carried by the route; 1 for routes without pagination.
    pub fn page(&self) -> u32 {
        match self {
            Route::Home { page } | Route::Topic { page, .. } => *page,
            _ => 1,
        }
    }

    /// Same route on another page. Routes without pagination are unchanged.
    pub fn with_page(self, page: u32) -> Self {
        let page = page.max(1);
        match self {
            Route::Home { .. } => Route::Home { page },
            Route::Topic { slug, .. } => Route::Topic { slug, page },
            other => other,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home { page } => write!(f, "/{}", page_query(*page)),
            Route::Topic { slug, page } => write!(f, "/topic/{}{}", slug, page_query(*page)),
            Route::Question { id } => write!(f, "/question/{}", id),
            Route::Login => write!(f, "/login"),
        }
    }
}

/// `?page=N`, omitted for the first page.
fn page_query(page: u32) -> String {
    if page > 1 {
        format!("?page={}", page)
    } else {
        String::new()
    }
}

/// Missing, zero, or malformed values all mean page 1.
fn page_from_query(url: &Url) -> u32 {
    url.query_pairs()
        .find(|(key, _)| *key == "page")
        .and_then(|(_, value)| value.parse::<u32>().ok())
        .filter(|page| *page > 0)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_routes() {
        assert_eq!(Route::parse("/"), Some(Route::home()));
        assert_eq!(Route::parse("/?page=4"), Some(Route::Home { page: 4 }));
        assert_eq!(Route::parse("/login"), Some(Route::Login));
        assert_eq!(
            Route::parse("/topic/finance-investing?page=2"),
            Some(Route::Topic {
                slug: "finance-investing".into(),
                page: 2
            })
        );
        assert_eq!(Route::parse("/question/42"), Some(Route::question(42)));
    }

    #[test]
    fn test_bad_page_values_mean_first_page() {
        for target in [
            "/topic/art",
            "/topic/art?page=0",
            "/topic/art?page=abc",
            "/topic/art?page=-3",
        ] {
            assert_eq!(Route::parse(target).map(|r| r.page()), Some(1), "{}", target);
        }
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(Route::parse("/question/abc"), None);
        assert_eq!(Route::parse("/settings"), None);
        assert_eq!(Route::parse("/topic"), None);
    }

    #[test]
    fn test_display_is_inverse_of_parse() {
        let routes = [
            Route::home(),
            Route::Home { page: 3 },
            Route::Topic {
                slug: "programming".into(),
                page: 1,
            },
            Route::Topic {
                slug: "programming".into(),
                page: 7,
            },
            Route::question(9),
            Route::Login,
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.to_string()), Some(route.clone()));
        }
        assert_eq!(Route::home().to_string(), "/");
        assert_eq!(Route::Home { page: 2 }.to_string(), "/?page=2");
    }

    #[test]
    fn test_topic_route_uses_slug() {
        let topic = Topic {
            id: 1,
            name: "Finance & Investing".into(),
            image_url: None,
        };
        assert_eq!(Route::topic(&topic).to_string(), "/topic/finance-investing");
        assert_eq!(
            Route::topic(&topic).with_page(2).to_string(),
            "/topic/finance-investing?page=2"
        );
        assert_eq!(Route::Login.with_page(3), Route::Login);
    }
}

//! Conversion between topic names and URL slugs.

use crate::models::Topic;

/// Convert a topic name to a URL slug.
///
/// `"Finance & Investing"` becomes `"finance-investing"`.
pub fn to_slug(name: &str) -> String {
    let lowered = name.to_lowercase();

    // Keep [a-z0-9], whitespace and hyphens; whitespace runs and hyphen runs
    // both collapse to one hyphen.
    let mut slug = String::with_capacity(lowered.len());
    for c in lowered.trim().chars() {
        let next = if c.is_ascii_lowercase() || c.is_ascii_digit() {
            c
        } else if c.is_whitespace() || c == '-' {
            '-'
        } else {
            continue;
        };
        if next == '-' && slug.ends_with('-') {
            continue;
        }
        slug.push(next);
    }

    slug.trim_matches('-').to_string()
}

/// Best-effort display name for a slug: `"programming-basics"` becomes
/// `"Programming Basics"`. Only good enough for a placeholder heading.
pub fn from_slug(slug: &str) -> String {
    slug.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Find the id of the topic whose name slugs to `slug`.
///
/// The incoming slug is compared case-insensitively. If several names collapse
/// to the same slug the first one in `topics` wins.
pub fn topic_id_from_slug(slug: &str, topics: &[Topic]) -> Option<i64> {
    let wanted = slug.to_lowercase();
    topics
        .iter()
        .find(|topic| to_slug(&topic.name) == wanted)
        .map(|topic| topic.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topic(id: i64, name: &str) -> Topic {
        Topic {
            id,
            name: name.to_string(),
            image_url: None,
        }
    }

    #[test]
    fn test_to_slug_basic() {
        assert_eq!(to_slug("Programming Basics"), "programming-basics");
        assert_eq!(to_slug("Finance & Investing"), "finance-investing");
        assert_eq!(to_slug("  Art  "), "art");
    }

    #[test]
    fn test_to_slug_strips_and_collapses() {
        assert_eq!(to_slug("C++ / Rust -- Systems"), "c-rust-systems");
        assert_eq!(to_slug("--Leading and trailing--"), "leading-and-trailing");
        assert_eq!(to_slug("snake_case_name"), "snakecasename");
        assert_eq!(to_slug("Tabs\tand\nnewlines"), "tabs-and-newlines");
        assert_eq!(to_slug("Café Culture"), "caf-culture");
        assert_eq!(to_slug("!!!"), "");
    }

    #[test]
    fn test_to_slug_is_idempotent() {
        let names = [
            "Programming Basics",
            "Finance & Investing",
            "  --Weird   Spacing--  ",
            "Q&A: 101",
            "Ünïcödé Names",
            "",
        ];
        for name in names {
            let once = to_slug(name);
            assert_eq!(to_slug(&once), once, "not idempotent for {:?}", name);
        }
    }

    #[test]
    fn test_from_slug() {
        assert_eq!(from_slug("programming-basics"), "Programming Basics");
        assert_eq!(from_slug("art"), "Art");
    }

    #[test]
    fn test_resolve_round_trip() {
        let names = ["Programming", "Finance & Investing", "Books 2024", "Career Advice"];
        for (i, name) in names.iter().enumerate() {
            let topics = vec![topic(i as i64 + 1, name)];
            assert_eq!(topic_id_from_slug(&to_slug(name), &topics), Some(i as i64 + 1));
        }
    }

    #[test]
    fn test_resolve_is_case_insensitive_on_slug() {
        let topics = vec![topic(1, "Finance"), topic(2, "Programming")];
        assert_eq!(topic_id_from_slug("PROGRAMMING", &topics), Some(2));
    }

    #[test]
    fn test_resolve_not_found() {
        let topics = vec![topic(1, "Finance")];
        assert_eq!(topic_id_from_slug("unknown", &topics), None);
        assert_eq!(topic_id_from_slug("", &[]), None);
    }

    #[test]
    fn test_resolve_first_match_wins() {
        let topics = vec![topic(7, "Rust & Go"), topic(8, "Rust Go")];
        assert_eq!(topic_id_from_slug("rust-go", &topics), Some(7));
    }
}

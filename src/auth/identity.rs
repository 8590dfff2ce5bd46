//! Resolution of the current viewer into one tagged identity.
//!
//! Display names and avatars for every kind of user go through the same
//! fallback chain here, so views never inspect user shapes themselves.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::errors::{ClientError, ClientResult};
use crate::models::UserRecord;

use super::session::DemoSession;

/// Name shown for an anonymous viewer.
pub const GUEST_NAME: &str = "Guest User";

/// Name shown for a question or answer author with no usable fields.
pub const UNKNOWN_AUTHOR: &str = "User";

const AVATAR_BASE: &str = "https://ui-avatars.com/api/";
const AVATAR_BACKGROUND: &str = "b92b27";
const AVATAR_COLOR: &str = "ffffff";

/// Profile claims issued by the identity provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProviderClaims {
    pub sub: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

/// An authenticated provider session: the API access token plus profile claims.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSession {
    pub access_token: String,
    pub claims: ProviderClaims,
}

impl ProviderSession {
    /// Build a session from an access token and the provider's ID token.
    ///
    /// The ID token's signature is not checked; its claims are only used for
    /// display. The backend verifies the access token on every request.
    pub fn from_tokens(access_token: impl Into<String>, id_token: &str) -> ClientResult<Self> {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        let token = decode::<ProviderClaims>(id_token, &DecodingKey::from_secret(&[]), &validation)
            .map_err(|e| ClientError::Decode(format!("ID token: {}", e)))?;

        Ok(Self {
            access_token: access_token.into(),
            claims: token.claims,
        })
    }
}

/// Who is looking at the app right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    Provider(ProviderClaims),
    Demo(UserRecord),
    Anonymous,
}

impl Identity {
    /// Provider session wins, then the demo session, else anonymous.
    pub fn resolve(provider: Option<&ProviderSession>, demo: Option<&DemoSession>) -> Self {
        match (provider, demo) {
            (Some(session), _) => Identity::Provider(session.claims.clone()),
            (None, Some(session)) => Identity::Demo(session.user.clone()),
            (None, None) => Identity::Anonymous,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Identity::Anonymous)
    }

    pub fn is_demo(&self) -> bool {
        matches!(self, Identity::Demo(_))
    }

    pub fn display_name(&self) -> String {
        self.fields()
            .and_then(|f| f.display_name())
            .unwrap_or_else(|| GUEST_NAME.to_string())
    }

    pub fn avatar_url(&self) -> String {
        if let Identity::Provider(claims) = self {
            if let Some(picture) = non_blank(claims.picture.as_deref()) {
                return picture.to_string();
            }
        }
        let seed = self.fields().and_then(|f| f.avatar_seed());
        avatar_for(seed.as_deref().unwrap_or(UNKNOWN_AUTHOR))
    }

    fn fields(&self) -> Option<ProfileFields<'_>> {
        match self {
            Identity::Provider(claims) => Some(ProfileFields {
                name: claims.name.as_deref(),
                first_name: claims.given_name.as_deref(),
                last_name: claims.family_name.as_deref(),
                username: claims.nickname.as_deref(),
                email: claims.email.as_deref(),
            }),
            Identity::Demo(user) => Some(ProfileFields::from(user)),
            Identity::Anonymous => None,
        }
    }
}

/// Label for the author of a question or answer.
pub fn author_name(user: &UserRecord) -> String {
    ProfileFields::from(user)
        .display_name()
        .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string())
}

/// Avatar for the author of a question or answer.
pub fn author_avatar(user: &UserRecord) -> String {
    let seed = ProfileFields::from(user).avatar_seed();
    avatar_for(seed.as_deref().unwrap_or(UNKNOWN_AUTHOR))
}

/// The fields the fallback chain reads, whatever shape they came from.
struct ProfileFields<'a> {
    name: Option<&'a str>,
    first_name: Option<&'a str>,
    last_name: Option<&'a str>,
    username: Option<&'a str>,
    email: Option<&'a str>,
}

impl<'a> From<&'a UserRecord> for ProfileFields<'a> {
    fn from(user: &'a UserRecord) -> Self {
        Self {
            name: None,
            first_name: user.first_name.as_deref(),
            last_name: user.last_name.as_deref(),
            username: user.username.as_deref(),
            email: user.email.as_deref(),
        }
    }
}

impl ProfileFields<'_> {
    /// name, then "first last", then username, then email.
    fn display_name(&self) -> Option<String> {
        non_blank(self.name)
            .map(str::to_string)
            .or_else(|| self.full_name())
            .or_else(|| self.username_or_email())
    }

    /// Same chain without the provider's `name`.
    fn avatar_seed(&self) -> Option<String> {
        self.full_name().or_else(|| self.username_or_email())
    }

    fn full_name(&self) -> Option<String> {
        let joined = format!(
            "{} {}",
            self.first_name.unwrap_or(""),
            self.last_name.unwrap_or("")
        );
        non_blank(Some(joined.trim())).map(str::to_string)
    }

    fn username_or_email(&self) -> Option<String> {
        non_blank(self.username)
            .or_else(|| non_blank(self.email))
            .map(str::to_string)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn avatar_for(name: &str) -> String {
    Url::parse_with_params(
        AVATAR_BASE,
        &[
            ("name", name),
            ("background", AVATAR_BACKGROUND),
            ("color", AVATAR_COLOR),
        ],
    )
    .map(String::from)
    .unwrap_or_else(|_| AVATAR_BASE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> UserRecord {
        UserRecord {
            id: 1,
            ..Default::default()
        }
    }

    fn claims() -> ProviderClaims {
        ProviderClaims {
            sub: "auth0|abc".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_email_only_record() {
        let user = UserRecord {
            email: Some("ada@example.com".into()),
            ..record()
        };
        assert_eq!(Identity::Demo(user.clone()).display_name(), "ada@example.com");
        assert_eq!(author_name(&user), "ada@example.com");
    }

    #[test]
    fn test_first_and_last_name_are_joined_and_trimmed() {
        let user = UserRecord {
            first_name: Some("Ada".into()),
            last_name: Some("Lovelace".into()),
            email: Some("ada@example.com".into()),
            ..record()
        };
        assert_eq!(Identity::Demo(user).display_name(), "Ada Lovelace");

        let first_only = UserRecord {
            first_name: Some("Ada".into()),
            last_name: Some("".into()),
            ..record()
        };
        assert_eq!(author_name(&first_only), "Ada");
    }

    #[test]
    fn test_username_before_email() {
        let user = UserRecord {
            username: Some("ada".into()),
            email: Some("ada@example.com".into()),
            ..record()
        };
        assert_eq!(author_name(&user), "ada");
    }

    #[test]
    fn test_provider_name_wins() {
        let identity = Identity::Provider(ProviderClaims {
            name: Some("Grace Hopper".into()),
            given_name: Some("Grace".into()),
            family_name: Some("H.".into()),
            nickname: Some("grace".into()),
            email: Some("grace@example.com".into()),
            ..claims()
        });
        assert_eq!(identity.display_name(), "Grace Hopper");
    }

    #[test]
    fn test_blank_fields_fall_through() {
        let identity = Identity::Provider(ProviderClaims {
            name: Some("   ".into()),
            email: Some("grace@example.com".into()),
            ..claims()
        });
        assert_eq!(identity.display_name(), "grace@example.com");
        assert_eq!(Identity::Demo(record()).display_name(), GUEST_NAME);
        assert_eq!(author_name(&record()), UNKNOWN_AUTHOR);
    }

    #[test]
    fn test_anonymous() {
        let identity = Identity::Anonymous;
        assert_eq!(identity.display_name(), GUEST_NAME);
        assert!(!identity.is_authenticated());
        assert!(identity.avatar_url().contains("name=User"));
    }

    #[test]
    fn test_avatar_prefers_provider_picture() {
        let identity = Identity::Provider(ProviderClaims {
            picture: Some("https://cdn.example.com/me.png".into()),
            ..claims()
        });
        assert_eq!(identity.avatar_url(), "https://cdn.example.com/me.png");
    }

    #[test]
    fn test_generated_avatar_is_encoded() {
        let user = UserRecord {
            first_name: Some("Demo".into()),
            last_name: Some("User".into()),
            ..record()
        };
        let url = author_avatar(&user);
        assert!(url.starts_with("https://ui-avatars.com/api/?"));
        assert!(url.contains("name=Demo+User"));
        assert!(url.contains("background=b92b27"));
        assert!(url.contains("color=ffffff"));
    }

    #[test]
    fn test_resolve_precedence() {
        let provider = ProviderSession {
            access_token: "p".into(),
            claims: claims(),
        };
        let demo = DemoSession {
            token: "d".into(),
            user: record(),
        };
        assert!(matches!(
            Identity::resolve(Some(&provider), Some(&demo)),
            Identity::Provider(_)
        ));
        assert!(Identity::resolve(None, Some(&demo)).is_demo());
        assert_eq!(Identity::resolve(None, None), Identity::Anonymous);
    }

    #[test]
    fn test_provider_session_from_id_token() {
        let claims = serde_json::json!({
            "sub": "auth0|42",
            "name": "Grace Hopper",
            "email": "grace@example.com",
            "exp": 1,
        });
        let id_token = jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &claims,
            &jsonwebtoken::EncodingKey::from_secret(b"not-the-provider-key"),
        )
        .unwrap();
        let session = ProviderSession::from_tokens("access", &id_token).unwrap();
        assert_eq!(session.claims.sub, "auth0|42");
        assert_eq!(session.claims.name.as_deref(), Some("Grace Hopper"));
        assert_eq!(session.access_token, "access");
    }

    #[test]
    fn test_provider_session_rejects_garbage() {
        assert!(matches!(
            ProviderSession::from_tokens("access", "not-a-jwt"),
            Err(ClientError::Decode(_))
        ));
    }
}

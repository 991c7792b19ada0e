//! User domain entities

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::shared::merge::merge;

/// End user of the reservation app
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub display_name: String,
    /// Login name, unique among live users
    pub phone_number: String,
    pub email: String,
    pub image_url: String,
    pub social_id: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub display_name: String,
    pub phone_number: String,
    pub email: String,
    pub image_url: String,
    pub social_id: String,
    pub password: String,
}

#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub display_name: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub image_url: Option<String>,
    pub social_id: Option<String>,
}

impl User {
    /// `password_hash` must already be hashed.
    pub fn new(req: NewUser, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            display_name: req.display_name,
            phone_number: req.phone_number,
            email: req.email,
            image_url: req.image_url,
            social_id: req.social_id,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_patch(&mut self, patch: UserPatch) {
        merge(&mut self.display_name, patch.display_name);
        merge(&mut self.phone_number, patch.phone_number);
        merge(&mut self.email, patch.email);
        merge(&mut self.image_url, patch.image_url);
        merge(&mut self.social_id, patch.social_id);
        self.updated_at = Utc::now();
    }
}

/// Opaque refresh token record. Only the SHA-256 digest of the token
/// handed to the client is stored.
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshToken {
    pub id: Uuid,
    pub user_id: Uuid,
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl RefreshToken {
    pub fn new(user_id: Uuid, token_hash: String, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            token_hash,
            expires_at: now + ttl,
            created_at: now,
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new(
            NewUser {
                display_name: "Lan".into(),
                phone_number: "0900000001".into(),
                email: "lan@example.com".into(),
                image_url: String::new(),
                social_id: String::new(),
                password: "secret".into(),
            },
            "hash".into(),
        )
    }

    #[test]
    fn patch_merges_present_fields() {
        let mut u = sample_user();
        u.apply_patch(UserPatch {
            display_name: Some("Lan N.".into()),
            email: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(u.display_name, "Lan N.");
        assert_eq!(u.email, "");
        assert_eq!(u.phone_number, "0900000001");
        assert_eq!(u.password_hash, "hash");
    }

    #[test]
    fn refresh_token_expiry() {
        let live = RefreshToken::new(Uuid::new_v4(), "h".into(), Duration::hours(1));
        assert!(!live.is_expired());
        let dead = RefreshToken::new(Uuid::new_v4(), "h".into(), Duration::seconds(-1));
        assert!(dead.is_expired());
    }
}

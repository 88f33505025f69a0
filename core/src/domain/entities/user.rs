//! The `User` aggregate (spec §3).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ns_shared::types::ThemePreference;

/// An external account a user has proven control of.
///
/// `(provider, subject)` is unique across all users (spec §3 invariant,
/// spec §8 testable property).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityProvider {
    Phone,
    Google,
    /// Kept per spec §9 open question: the type is retained, no distinct
    /// code path is wired beyond the generic `loginWithOAuth` flow.
    Apple,
    Email,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub provider: IdentityProvider,
    pub subject: String,
    pub verified: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub theme_preference: ThemePreference,
}

/// A registered user. Invariants (spec §3):
/// - `(provider, subject)` unique across all users' `identities`.
/// - `username_normalized` unique across users when set.
/// - `email`, when set, is lowercased and matches a basic RFC-ish regex.
/// - a user always carries at least one identity after the write that
///   created it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: Option<String>,
    pub primary_phone: Option<String>,
    pub password_hash: Option<String>,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    /// Display form, as the user typed it (pre-normalization).
    pub username: Option<String>,
    /// Lookup form: trimmed, lowercased; unique across users.
    pub username_normalized: Option<String>,
    pub identities: Vec<Identity>,
    pub preferences: UserPreferences,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            id,
            email: None,
            primary_phone: None,
            password_hash: None,
            display_name: None,
            avatar_url: None,
            username: None,
            username_normalized: None,
            identities: Vec::new(),
            preferences: UserPreferences::default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn has_identity(&self, provider: IdentityProvider, subject: &str) -> bool {
        self.identities
            .iter()
            .any(|i| i.provider == provider && i.subject == subject)
    }

    pub fn upsert_identity(&mut self, provider: IdentityProvider, subject: &str, verified: bool) {
        if let Some(existing) = self
            .identities
            .iter_mut()
            .find(|i| i.provider == provider && i.subject == subject)
        {
            existing.verified = existing.verified || verified;
        } else {
            self.identities.push(Identity {
                provider,
                subject: subject.to_string(),
                verified,
            });
        }
    }
}

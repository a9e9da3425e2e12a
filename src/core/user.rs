//! User identity record
//!
//! The one record the front-end persists. Field names follow the JSON layout
//! stored under [`STORAGE_KEY_USER`](crate::core::STORAGE_KEY_USER).

use serde::{Deserialize, Serialize};

/// Account tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    #[default]
    Free,
    Paid,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Free => "free",
            AccountType::Paid => "paid",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AccountType::Free => "Free",
            AccountType::Paid => "Pro",
        }
    }

    pub fn is_paid(&self) -> bool {
        matches!(self, AccountType::Paid)
    }
}

/// Authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub account_type: AccountType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            account_type: AccountType::Free,
            avatar: None,
        }
    }

    pub fn with_account_type(mut self, account_type: AccountType) -> Self {
        self.account_type = account_type;
        self
    }

    /// Up to two uppercase initials for avatar placeholders
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();

        if initials.is_empty() {
            self.email
                .chars()
                .next()
                .map(|c| c.to_uppercase().collect())
                .unwrap_or_else(|| "?".to_string())
        } else {
            initials
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case_layout() {
        let user = User::new("42", "Ada Lovelace", "ada@example.com");
        let json = serde_json::to_string(&user).unwrap();

        assert!(json.contains("\"accountType\":\"free\""));
        assert!(json.contains("\"name\":\"Ada Lovelace\""));
        // Absent avatar is omitted entirely
        assert!(!json.contains("avatar"));
    }

    #[test]
    fn test_paid_tier_serializes_lowercase() {
        let user = User::new("42", "Ada", "ada@example.com").with_account_type(AccountType::Paid);
        let json = serde_json::to_string(&user).unwrap();

        assert!(json.contains("\"accountType\":\"paid\""));
    }

    #[test]
    fn test_deserializes_null_avatar() {
        let json = r#"{"id":"7","name":"Bob","email":"bob@example.com","accountType":"paid","avatar":null}"#;
        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user.account_type, AccountType::Paid);
        assert!(user.avatar.is_none());
    }

    #[test]
    fn test_rejects_unknown_tier() {
        let json = r#"{"id":"7","name":"Bob","email":"bob@example.com","accountType":"gold"}"#;
        assert!(serde_json::from_str::<User>(json).is_err());
    }

    #[test]
    fn test_initials() {
        assert_eq!(User::new("1", "ada lovelace", "a@x.io").initials(), "AL");
        assert_eq!(User::new("1", "Cher", "c@x.io").initials(), "C");
        assert_eq!(User::new("1", "  ", "zed@x.io").initials(), "Z");
        assert_eq!(User::new("1", "", "").initials(), "?");
    }

    #[test]
    fn test_account_type_helpers() {
        assert_eq!(AccountType::default(), AccountType::Free);
        assert!(!AccountType::Free.is_paid());
        assert!(AccountType::Paid.is_paid());
        assert_eq!(AccountType::Paid.as_str(), "paid");
    }
}

//! Session and user account models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::NamedLocation;

/// Discriminator between a customer account and a restaurant-manager account
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RoleFlag {
    Customer,
    Manager,
}

/// A user profile as returned by the login endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub role_flag: Option<RoleFlag>,
}

/// The in-process session for the signed-in user
///
/// Created on successful login, mutated by the location-set action, and
/// destroyed on logout. Never persisted by this core.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: Uuid,
    pub display_name: String,
    pub role_flag: Option<RoleFlag>,
    pub auth_token: Option<String>,
    pub home_location: Option<NamedLocation>,
}

impl Session {
    /// Build a session from a successful login response
    pub fn from_login(user: UserProfile, token: impl Into<String>) -> Self {
        Self {
            user_id: user.id,
            display_name: user.name,
            role_flag: user.role_flag,
            auth_token: Some(token.into()),
            home_location: None,
        }
    }

    /// Whether the session carries a usable auth token
    pub fn is_authenticated(&self) -> bool {
        self.auth_token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// The role to route by. An unresolved role is treated as a customer,
    /// matching what the backend does for accounts created before the
    /// manager flag existed.
    pub fn effective_role(&self) -> RoleFlag {
        self.role_flag.unwrap_or(RoleFlag::Customer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Coordinate, NamedLocation};

    fn profile() -> UserProfile {
        UserProfile {
            id: Uuid::new_v4(),
            name: "Jordan Birch".to_string(),
            phone: "416-555-0188".to_string(),
            email: "jordan@example.com".to_string(),
            role_flag: Some(RoleFlag::Customer),
        }
    }

    #[test]
    fn test_session_from_login_has_no_location() {
        let session = Session::from_login(profile(), "token-abc");
        assert!(session.is_authenticated());
        assert!(session.home_location.is_none());
    }

    #[test]
    fn test_empty_token_is_not_authenticated() {
        let mut session = Session::from_login(profile(), "");
        assert!(!session.is_authenticated());

        session.auth_token = None;
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_unresolved_role_defaults_to_customer() {
        let mut session = Session::from_login(profile(), "token-abc");
        session.role_flag = None;
        assert_eq!(session.effective_role(), RoleFlag::Customer);
    }

    #[test]
    fn test_location_can_be_set() {
        let mut session = Session::from_login(profile(), "token-abc");
        session.home_location = Some(NamedLocation::new(
            Coordinate::new(43.6532, -79.3832),
            "Downtown Toronto",
        ));
        assert!(session.home_location.is_some());
    }
}

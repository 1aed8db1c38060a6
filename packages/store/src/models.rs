//! # Identity models persisted across page loads
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Role`] | The three account roles the backend issues. Serialised lowercase (`"supervisor"`, `"teacher"`, `"student"`). |
//! | [`UserInfo`] | The user record returned by `POST /auth/login` and stored under `attendance.user`. |
//! | [`Session`] | Token plus user. Only ever exists as a complete pair. |
//!
//! These types live here rather than in `api` because the session store must
//! decode them without depending on the HTTP layer; `api` re-exports them.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Supervisor,
    Teacher,
    Student,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Supervisor => "supervisor",
            Role::Teacher => "teacher",
            Role::Student => "student",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User information as issued by the backend at login.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub role: Role,
}

/// An authenticated identity: bearer token and the user it belongs to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user: UserInfo,
    pub token: String,
}

impl Session {
    pub fn new(user: UserInfo, token: String) -> Self {
        Self { user, token }
    }

    pub fn role(&self) -> Role {
        self.user.role
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_names() {
        let role: Role = serde_json::from_str("\"teacher\"").unwrap();
        assert_eq!(role, Role::Teacher);
        assert_eq!(serde_json::to_string(&Role::Supervisor).unwrap(), "\"supervisor\"");
        assert!(serde_json::from_str::<Role>("\"admin\"").is_err());
    }

    #[test]
    fn test_user_without_email() {
        let user: UserInfo =
            serde_json::from_str(r#"{"id": 3, "name": "Ayşe", "role": "student"}"#).unwrap();
        assert_eq!(user.email, "");
        assert_eq!(user.role, Role::Student);
    }
}

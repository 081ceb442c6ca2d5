use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub role: UserRole,
}

/// Account role as reported by the backend. Only `Admin` may create, edit or
/// delete records; the other roles get read-only management screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Admin,
    Manager,
    Staff,
}

impl UserRole {
    pub fn can_manage(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::Manager => "Manager",
            UserRole::Staff => "Staff",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_admin_can_manage() {
        assert!(UserRole::Admin.can_manage());
        assert!(!UserRole::Manager.can_manage());
        assert!(!UserRole::Staff.can_manage());
    }

    #[test]
    fn role_round_trips_as_plain_string() {
        let user: User = serde_json::from_str(
            r#"{"id":"u-1","username":"tere","role":"Manager"}"#,
        )
        .unwrap();
        assert_eq!(user.role, UserRole::Manager);
        assert!(!user.role.can_manage());
    }
}

use serde::{Deserialize, Serialize};

use crate::common::RecordId;

/// Position of a person in the organisational hierarchy.
///
/// - `Md` — managing director, top of the chain.
/// - `Ceo`, `Coo` — executive officers reporting to the MD.
/// - `Manager` — team leads.
/// - `Employee` — individual contributors.
/// - `Other` — any value the backend sends that is not listed above. The raw
///   text is kept so it can still be displayed. A `null` or missing role
///   lands here with empty text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum UserRole {
    Md,
    Ceo,
    Coo,
    Manager,
    Employee,
    Other(String),
}

impl UserRole {
    /// Known roles from the top of the chain down.
    pub const HIERARCHY: [UserRole; 5] = [
        UserRole::Md,
        UserRole::Ceo,
        UserRole::Coo,
        UserRole::Manager,
        UserRole::Employee,
    ];

    /// Match one of the known wire values. Matching is exact: the backend
    /// sends upper-case codes.
    fn known(s: &str) -> Option<Self> {
        match s {
            "MD" => Some(UserRole::Md),
            "CEO" => Some(UserRole::Ceo),
            "COO" => Some(UserRole::Coo),
            "MANAGER" => Some(UserRole::Manager),
            "EMPLOYEE" => Some(UserRole::Employee),
            _ => None,
        }
    }

    /// Wire value, also used as the badge label.
    pub fn as_str(&self) -> &str {
        match self {
            UserRole::Md => "MD",
            UserRole::Ceo => "CEO",
            UserRole::Coo => "COO",
            UserRole::Manager => "MANAGER",
            UserRole::Employee => "EMPLOYEE",
            UserRole::Other(raw) => raw,
        }
    }

    /// Label for the role as a group, as shown in the hierarchy line.
    pub fn plural_label(&self) -> &str {
        match self {
            UserRole::Manager => "Managers",
            UserRole::Employee => "Employees",
            other => other.as_str(),
        }
    }
}

impl From<String> for UserRole {
    fn from(s: String) -> Self {
        UserRole::known(&s).unwrap_or(UserRole::Other(s))
    }
}

impl From<Option<String>> for UserRole {
    fn from(s: Option<String>) -> Self {
        s.map(UserRole::from).unwrap_or_default()
    }
}

impl Default for UserRole {
    fn default() -> Self {
        UserRole::Other(String::new())
    }
}

impl From<&str> for UserRole {
    fn from(s: &str) -> Self {
        UserRole::known(s).unwrap_or_else(|| UserRole::Other(s.to_string()))
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// Render the reporting chain, e.g. "MD → CEO → COO → Managers → Employees".
pub fn hierarchy_line() -> String {
    UserRole::HIERARCHY
        .iter()
        .map(|role| role.plural_label())
        .collect::<Vec<_>>()
        .join(" → ")
}

/// A person as served by `GET /users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
}

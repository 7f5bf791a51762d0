use serde::{Deserialize, Serialize};

/// Access role of a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Role {
    /// Regular household account.
    #[default]
    None,
    /// May view cross-client reports.
    Admin,
}

impl Role {
    pub fn is_admin(self) -> bool {
        self == Role::Admin
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Role::None => write!(f, "None"),
            Role::Admin => write!(f, "Admin"),
        }
    }
}

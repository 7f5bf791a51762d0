use serde::{Deserialize, Serialize};

use grocery_core::{ClientId, DomainError, DomainResult, Entity};

use crate::Role;

/// Entity: Client.
///
/// # Invariants
/// - The name is not blank.
/// - The email address contains `@`; it is the alternate lookup key.
/// - The password hash is opaque and never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub email_address: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    #[serde(default)]
    pub role: Role,
}

impl Client {
    /// Create a client with the default role (`Role::None`).
    pub fn new(
        id: ClientId,
        name: impl Into<String>,
        email_address: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> DomainResult<Self> {
        let name = name.into();
        let email_address = email_address.into();

        if !id.is_assigned() {
            return Err(DomainError::validation("client id must be positive"));
        }
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if !email_address.contains('@') {
            return Err(DomainError::validation(format!(
                "invalid email address: {email_address}"
            )));
        }

        Ok(Self {
            id,
            name,
            email_address,
            password_hash: password_hash.into(),
            role: Role::default(),
        })
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Whether a password hash is stored, without exposing it.
    pub fn has_password(&self) -> bool {
        !self.password_hash.is_empty()
    }
}

impl Entity for Client {
    type Id = ClientId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

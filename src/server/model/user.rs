//! User domain models and parameters.
//!
//! The domain `User` deliberately excludes the password hash; only the
//! repository and the authentication service ever see the raw entity row.

use chrono::{DateTime, Utc};
use entity::enums::UserRole;

use crate::model::user::{PaginatedUsersDto, RoleDto, UserDto};

impl From<UserRole> for RoleDto {
    fn from(value: UserRole) -> Self {
        match value {
            UserRole::Admin => Self::Admin,
            UserRole::Staff => Self::Staff,
            UserRole::Guest => Self::Guest,
        }
    }
}

impl From<RoleDto> for UserRole {
    fn from(value: RoleDto) -> Self {
        match value {
            RoleDto::Admin => Self::Admin,
            RoleDto::Staff => Self::Staff,
            RoleDto::Guest => Self::Guest,
        }
    }
}

/// Account identity with role and token revocation metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    /// Monotonic counter embedded into every issued token; bumping it
    /// invalidates all tokens issued before the bump.
    pub token_version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity row to the domain model at the repository
    /// boundary, dropping the password hash.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            role: entity.role,
            token_version: entity.token_version,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            role: self.role.into(),
            created_at: self.created_at,
        }
    }

    /// Role check used by the auth guard: admin covers staff, staff covers
    /// guest.
    pub fn has_role(&self, required: UserRole) -> bool {
        match required {
            UserRole::Admin => self.role == UserRole::Admin,
            UserRole::Staff => matches!(self.role, UserRole::Admin | UserRole::Staff),
            UserRole::Guest => true,
        }
    }
}

/// Parameters for creating a user account. The password arrives already
/// hashed; plaintext never crosses the service boundary inward.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub role: UserRole,
}

/// Partial account update (None keeps the current value).
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParam {
    pub email: Option<String>,
    pub name: Option<String>,
}

/// Paginated collection of users with navigation metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    pub users: Vec<User>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(|u| u.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

//! User account management (admin surface).

use sea_orm::DatabaseConnection;

use crate::{
    model::user::{PaginatedUsersDto, UpdateUserDto, UpdateUserRoleDto, UserDto},
    server::{
        data::{refresh_token::RefreshTokenRepository, user::UserRepository},
        error::AppError,
        model::user::{PaginatedUsers, UpdateUserParam},
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<UserDto, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(user.into_dto())
    }

    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedUsersDto, AppError> {
        let (users, total) = UserRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        let total_pages = if per_page > 0 {
            total.div_ceil(per_page)
        } else {
            0
        };

        Ok(PaginatedUsers {
            users,
            total,
            page,
            per_page,
            total_pages,
        }
        .into_dto())
    }

    pub async fn update(&self, id: i32, dto: UpdateUserDto) -> Result<UserDto, AppError> {
        let repo = UserRepository::new(self.db);

        let email = match dto.email {
            Some(raw) => {
                let email = raw.trim().to_lowercase();
                if !email.contains('@') {
                    return Err(AppError::BadRequest("Invalid email address".to_string()));
                }

                let current = repo
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

                if email != current.email && repo.email_taken(&email).await? {
                    return Err(AppError::Conflict(format!(
                        "An account with email '{}' already exists",
                        email
                    )));
                }

                Some(email)
            }
            None => None,
        };

        let updated = repo
            .update(
                id,
                UpdateUserParam {
                    email,
                    name: dto.name,
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(updated.into_dto())
    }

    /// Changes an account's role and invalidates its outstanding tokens so
    /// the new (possibly narrower) role takes effect immediately.
    pub async fn set_role(&self, id: i32, dto: UpdateUserRoleDto) -> Result<UserDto, AppError> {
        let repo = UserRepository::new(self.db);

        repo.set_role(id, dto.role.into())
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let bumped = repo
            .bump_token_version(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        RefreshTokenRepository::new(self.db)
            .revoke_all_for_user(id)
            .await?;

        Ok(bumped.into_dto())
    }

    /// Soft-deletes an account and kills every token that could still act
    /// on its behalf.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = UserRepository::new(self.db).soft_delete(id).await?;

        if !deleted {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        RefreshTokenRepository::new(self.db)
            .revoke_all_for_user(id)
            .await?;

        Ok(())
    }
}

//! User account repository.
//!
//! Lifts rows into the domain `User` (which carries no password hash) at
//! the boundary; only [`UserRepository::find_credentials_by_email`] exposes
//! the raw entity row, for the login path.

use chrono::Utc;
use entity::enums::UserRole;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::{CreateUserParam, UpdateUserParam, User};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new account. Email uniqueness is enforced by the schema;
    /// callers pre-check with [`Self::email_taken`] to surface a clean
    /// conflict.
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let now = Utc::now();

        let entity = entity::user::ActiveModel {
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            name: ActiveValue::Set(param.name),
            role: ActiveValue::Set(param.role),
            token_version: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Fetches a live account by id; soft-deleted accounts are absent.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id)
            .filter(entity::user::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Raw entity row (password hash included) for credential checks.
    pub async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .filter(entity::user::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    /// True when any row (live or soft-deleted) holds the email; the
    /// address stays reserved after deletion.
    pub async fn email_taken(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Pages through live accounts in id order.
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<User>, u64), DbErr> {
        let paginator = entity::prelude::User::find()
            .filter(entity::user::Column::DeletedAt.is_null())
            .order_by_asc(entity::user::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let users = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect();

        Ok((users, total))
    }

    /// Applies a partial update to a live account.
    pub async fn update(&self, id: i32, param: UpdateUserParam) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(id)
            .filter(entity::user::Column::DeletedAt.is_null())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = entity.into();

        if let Some(email) = param.email {
            active.email = ActiveValue::Set(email);
        }
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(User::from_entity(updated)))
    }

    /// Changes an account's role.
    pub async fn set_role(&self, id: i32, role: UserRole) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(id)
            .filter(entity::user::Column::DeletedAt.is_null())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = entity.into();
        active.role = ActiveValue::Set(role);
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(User::from_entity(updated)))
    }

    /// Increments the account's token version, invalidating every access
    /// and refresh token issued before the bump.
    pub async fn bump_token_version(&self, id: i32) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(id)
            .filter(entity::user::Column::DeletedAt.is_null())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let next_version = entity.token_version + 1;
        let mut active: entity::user::ActiveModel = entity.into();
        active.token_version = ActiveValue::Set(next_version);
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(User::from_entity(updated)))
    }

    /// Marks an account deleted and bumps its token version so outstanding
    /// tokens die with it.
    ///
    /// # Returns
    /// - `Ok(true)`: the account existed and is now marked deleted
    /// - `Ok(false)`: no live account with that id
    pub async fn soft_delete(&self, id: i32) -> Result<bool, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(id)
            .filter(entity::user::Column::DeletedAt.is_null())
            .one(self.db)
            .await?
        else {
            return Ok(false);
        };

        let now = Utc::now();
        let next_version = entity.token_version + 1;
        let mut active: entity::user::ActiveModel = entity.into();
        active.deleted_at = ActiveValue::Set(Some(now));
        active.token_version = ActiveValue::Set(next_version);
        active.updated_at = ActiveValue::Set(now);
        active.update(self.db).await?;

        Ok(true)
    }

    /// Checks whether any live admin account exists. Used during startup to
    /// decide whether to print the one-time setup code.
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(UserRole::Admin))
            .filter(entity::user::Column::DeletedAt.is_null())
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }
}

//! Refresh token store.
//!
//! Rows hold only the SHA-256 of the opaque token; a presented token is
//! hashed and looked up, never compared in plaintext.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

pub struct RefreshTokenRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RefreshTokenRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert(
        &self,
        user_id: i32,
        token_hash: String,
        expires_at: DateTime<Utc>,
    ) -> Result<entity::refresh_token::Model, DbErr> {
        entity::refresh_token::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            token_hash: ActiveValue::Set(token_hash),
            expires_at: ActiveValue::Set(expires_at),
            revoked_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<entity::refresh_token::Model>, DbErr> {
        entity::prelude::RefreshToken::find()
            .filter(entity::refresh_token::Column::TokenHash.eq(token_hash))
            .one(self.db)
            .await
    }

    /// Marks one token revoked.
    ///
    /// # Returns
    /// - `Ok(true)`: the token existed and was not already revoked
    /// - `Ok(false)`: unknown or already revoked token
    pub async fn revoke(&self, id: i32) -> Result<bool, DbErr> {
        let Some(token) = entity::prelude::RefreshToken::find_by_id(id)
            .filter(entity::refresh_token::Column::RevokedAt.is_null())
            .one(self.db)
            .await?
        else {
            return Ok(false);
        };

        let mut active: entity::refresh_token::ActiveModel = token.into();
        active.revoked_at = ActiveValue::Set(Some(Utc::now()));
        active.update(self.db).await?;

        Ok(true)
    }

    /// Revokes every live token of one user (logout-everywhere, account
    /// deletion).
    pub async fn revoke_all_for_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::RefreshToken::update_many()
            .col_expr(
                entity::refresh_token::Column::RevokedAt,
                sea_orm::sea_query::Expr::value(Some(Utc::now())),
            )
            .filter(entity::refresh_token::Column::UserId.eq(user_id))
            .filter(entity::refresh_token::Column::RevokedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Housekeeping: deletes tokens that can never be redeemed again
    /// (expired, or revoked before `now`). Returns the number removed.
    pub async fn purge_dead(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::RefreshToken::delete_many()
            .filter(
                Condition::any()
                    .add(entity::refresh_token::Column::ExpiresAt.lte(now))
                    .add(entity::refresh_token::Column::RevokedAt.is_not_null()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

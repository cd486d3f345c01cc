use crate::db::service::DbService;
use crate::types::error::AppError;
use crate::utils::token::{self, new_invite_token};
use chrono::{Duration, Utc};
use entity::invitation::{
    ActiveModel as InvitationActive, Column, Entity as Invitation, Model as InvitationModel,
};
use entity::role::Role;
use entity::user::{ActiveModel as UserActive, Model as UserModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect, Set,
    SqlErr, TransactionTrait,
};
use uuid::Uuid;

fn check_state(inv: &InvitationModel) -> Result<(), AppError> {
    // Expiry wins over consumption only when the token was never used:
    // a consumed token stays "used" even after its expiry passes.
    if inv.used_at.is_some() {
        return Err(AppError::TokenUsed);
    }
    if inv.expires_at <= Utc::now() {
        return Err(AppError::TokenExpired);
    }
    Ok(())
}

impl DbService {
    /// Insert a fresh invitation. Earlier unconsumed invitations for the same
    /// email stay valid; re-issuing never revokes.
    pub async fn create_invitation(
        &self,
        ward_id: Uuid,
        email: String,
        role: Role,
        created_by: Uuid,
        ttl_days: i64,
    ) -> Result<InvitationModel, AppError> {
        let now = Utc::now();
        Ok(InvitationActive {
            id: Set(token::new_id()),
            ward_id: Set(ward_id),
            email: Set(email),
            role: Set(role),
            token: Set(new_invite_token()),
            expires_at: Set(now + Duration::days(ttl_days)),
            used_at: Set(None),
            created_by: Set(created_by),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.conn)
        .await?)
    }

    /// Open (unconsumed, unexpired) invitations for a ward.
    pub async fn list_invitations_for_ward(
        &self,
        ward_id: Uuid,
    ) -> Result<Vec<InvitationModel>, AppError> {
        Ok(Invitation::find()
            .filter(Column::WardId.eq(ward_id))
            .filter(Column::UsedAt.is_null())
            .filter(Column::ExpiresAt.gt(Utc::now()))
            .all(&self.conn)
            .await?)
    }

    pub async fn get_invitation_by_token(
        &self,
        invite_token: &Uuid,
    ) -> Result<Option<InvitationModel>, AppError> {
        Ok(Invitation::find()
            .filter(Column::Token.eq(*invite_token))
            .one(&self.conn)
            .await?)
    }

    /// Read-only token check for pre-filling the registration form.
    pub async fn validate_invitation(
        &self,
        invite_token: &Uuid,
    ) -> Result<InvitationModel, AppError> {
        let inv = self
            .get_invitation_by_token(invite_token)
            .await?
            .ok_or(AppError::TokenInvalid)?;
        check_state(&inv)?;
        Ok(inv)
    }

    /// Redeem a token: re-validate, create the account, consume the token,
    /// all in one transaction. A retry after a partial failure can never
    /// mint a second account for the same email.
    pub async fn redeem_invitation(
        &self,
        invite_token: &Uuid,
        full_name: String,
        password_hash: String,
    ) -> Result<UserModel, AppError> {
        let txn = self.conn.begin().await?;

        // State must be re-checked at write time; the read the client did
        // through validate_invitation may be stale by now. The row lock makes
        // a concurrent redemption of the same token wait here and then see
        // used_at already set. SQLite ignores the lock clause; its writes
        // serialize anyway.
        let inv = Invitation::find()
            .filter(Column::Token.eq(*invite_token))
            .lock_exclusive()
            .one(&txn)
            .await?
            .ok_or(AppError::TokenInvalid)?;
        if let Err(e) = check_state(&inv) {
            txn.rollback().await?;
            return Err(e);
        }

        let existing = entity::user::Entity::find()
            .filter(entity::user::Column::Email.eq(inv.email.clone()))
            .count(&txn)
            .await?;
        if existing > 0 {
            txn.rollback().await?;
            return Err(AppError::EmailInUse);
        }

        let now = Utc::now();
        let user = match (UserActive {
            id: Set(token::new_id()),
            email: Set(inv.email.clone()),
            full_name: Set(full_name),
            role: Set(inv.role),
            ward_id: Set(inv.ward_id),
            password_hash: Set(password_hash),
            session_hash: Set(None),
            reset_token: Set(None),
            reset_requested_at: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .insert(&txn)
        .await
        {
            Ok(user) => user,
            Err(err) => {
                txn.rollback().await?;
                // Backstop for a writer that slipped past the count above:
                // the unique email index is the final arbiter.
                return Err(match err.sql_err() {
                    Some(SqlErr::UniqueConstraintViolation(_)) => AppError::EmailInUse,
                    _ => err.into(),
                });
            }
        };

        let mut am: InvitationActive = inv.into();
        am.used_at = Set(Some(now));
        am.updated_at = Set(now);
        am.update(&txn).await?;

        txn.commit().await?;
        Ok(user)
    }
}

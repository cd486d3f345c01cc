use crate::db::service::DbService;
use crate::types::{error::AppError, user::DBUserCreate};
use crate::utils::token::{self, construct_token, encrypt, new_secret};
use chrono::Utc;
use entity::role::Role;
use entity::user::{ActiveModel as UserActive, Column, Entity as User, Model as UserModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, Order, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

impl DbService {
    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(Column::Email.eq(email))
            .count(&self.conn)
            .await?
            > 0)
    }

    pub async fn get_user_by_id(&self, id: &Uuid) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(*id)
            .one(&self.conn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    /// Lookup that does not distinguish "missing" from "present" by error,
    /// for flows with anti-enumeration requirements.
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<UserModel>, AppError> {
        Ok(User::find()
            .filter(Column::Email.eq(email))
            .one(&self.conn)
            .await?)
    }

    pub async fn create_user(&self, payload: DBUserCreate) -> Result<UserModel, AppError> {
        if self.user_exists_by_email(&payload.email).await? {
            return Err(AppError::EmailInUse);
        }
        let now = Utc::now();
        Ok(UserActive {
            id: Set(token::new_id()),
            email: Set(payload.email),
            full_name: Set(payload.full_name),
            role: Set(payload.role),
            ward_id: Set(payload.ward_id),
            password_hash: Set(payload.password_hash),
            session_hash: Set(None),
            reset_token: Set(None),
            reset_requested_at: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.conn)
        .await?)
    }

    /// Ward-scoped server-side query, creation order. Never a full scan.
    pub async fn list_users_in_ward(&self, ward_id: Uuid) -> Result<Vec<UserModel>, AppError> {
        Ok(User::find()
            .filter(Column::WardId.eq(ward_id))
            .order_by(Column::CreatedAt, Order::Asc)
            .all(&self.conn)
            .await?)
    }

    pub async fn count_bishopric_in_ward(&self, ward_id: Uuid) -> Result<u64, AppError> {
        Ok(User::find()
            .filter(Column::WardId.eq(ward_id))
            .filter(Column::Role.eq(Role::Bishopric))
            .count(&self.conn)
            .await?)
    }

    /// Change a ward user's role. Demotions row-lock the ward's bishopric
    /// users before counting, so concurrent demotions serialize instead of
    /// both passing the check and leaving the ward without a bishopric
    /// account. SQLite ignores the lock clause; its writes serialize anyway.
    pub async fn change_user_role(
        &self,
        ward_id: Uuid,
        target_id: Uuid,
        new_role: Role,
    ) -> Result<(Role, Role), AppError> {
        let txn = self.conn.begin().await?;

        let target = User::find_by_id(target_id)
            .lock_exclusive()
            .one(&txn)
            .await?
            .ok_or(AppError::NotFound)?;
        // Cross-ward targets look identical to missing ones.
        if target.ward_id != ward_id {
            txn.rollback().await?;
            return Err(AppError::NotFound);
        }

        let previous = target.role;
        if previous == Role::Bishopric && new_role != Role::Bishopric {
            // A locking read re-evaluates against the latest committed rows,
            // so a demotion that lost the race sees its peer already demoted.
            let bishopric = User::find()
                .filter(Column::WardId.eq(ward_id))
                .filter(Column::Role.eq(Role::Bishopric))
                .lock_exclusive()
                .all(&txn)
                .await?;
            let remaining = bishopric.iter().filter(|u| u.id != target_id).count();
            if remaining == 0 {
                txn.rollback().await?;
                return Err(AppError::CannotDemoteLastBishopric);
            }
        }

        let mut am: UserActive = target.into();
        am.role = Set(new_role);
        am.updated_at = Set(Utc::now());
        am.update(&txn).await?;

        txn.commit().await?;
        Ok((previous, new_role))
    }

    /// Delete a ward user, push-token rows first so nothing dangles.
    pub async fn delete_user(&self, ward_id: Uuid, target_id: Uuid) -> Result<Uuid, AppError> {
        let txn = self.conn.begin().await?;

        let target = User::find_by_id(target_id)
            .one(&txn)
            .await?
            .ok_or(AppError::NotFound)?;
        if target.ward_id != ward_id {
            txn.rollback().await?;
            return Err(AppError::NotFound);
        }

        entity::push_token::Entity::delete_many()
            .filter(entity::push_token::Column::UserId.eq(target_id))
            .exec(&txn)
            .await?;
        User::delete_by_id(target_id).exec(&txn).await?;

        txn.commit().await?;
        Ok(target_id)
    }

    /// Mint a fresh session secret, persist its hash, hand back the bearer
    /// token. Replaces any previous session.
    pub async fn establish_session(&self, user_id: &Uuid) -> Result<String, AppError> {
        let user = self.get_user_by_id(user_id).await?;
        let secret = new_secret();
        let hash = encrypt(&secret)
            .map_err(|e| AppError::Internal(format!("session hash failed: {e}")))?;
        let mut am: UserActive = user.into();
        am.session_hash = Set(Some(hash));
        am.updated_at = Set(Utc::now());
        am.update(&self.conn).await?;
        Ok(construct_token(user_id, &secret))
    }

    pub async fn set_reset_token(&self, user_id: &Uuid, reset_token: String) -> Result<(), AppError> {
        let mut am: UserActive = self.get_user_by_id(user_id).await?.into();
        am.reset_token = Set(Some(reset_token));
        am.reset_requested_at = Set(Some(Utc::now()));
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.conn).await.map(|_| ())?)
    }
}

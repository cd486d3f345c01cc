use crate::db::service::DbService;
use crate::types::error::AppError;
use crate::utils::token;
use chrono::Utc;
use entity::member::{ActiveModel as MemberActive, Column, Entity as Member, Model as MemberModel};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

impl DbService {
    /// Create or refresh the agenda-actor profile for an invitee, keyed by
    /// (ward, email).
    pub async fn upsert_member(
        &self,
        ward_id: Uuid,
        email: &str,
        full_name: &str,
    ) -> Result<MemberModel, AppError> {
        let now = Utc::now();
        match Member::find()
            .filter(Column::WardId.eq(ward_id))
            .filter(Column::Email.eq(email))
            .one(&self.conn)
            .await?
        {
            Some(existing) => {
                let mut am: MemberActive = existing.into();
                am.full_name = Set(full_name.to_string());
                am.updated_at = Set(now);
                Ok(am.update(&self.conn).await?)
            }
            None => Ok(MemberActive {
                id: Set(token::new_id()),
                ward_id: Set(ward_id),
                email: Set(email.to_string()),
                full_name: Set(full_name.to_string()),
                created_at: Set(now),
                updated_at: Set(now),
            }
            .insert(&self.conn)
            .await?),
        }
    }

    pub async fn find_member(
        &self,
        ward_id: Uuid,
        email: &str,
    ) -> Result<Option<MemberModel>, AppError> {
        Ok(Member::find()
            .filter(Column::WardId.eq(ward_id))
            .filter(Column::Email.eq(email))
            .one(&self.conn)
            .await?)
    }
}

use crate::db::service::DbService;
use crate::types::error::AppError;
use crate::utils::token;
use chrono::Utc;
use entity::push_token::{
    ActiveModel as PushTokenActive, Column, Entity as PushToken, Model as PushTokenModel,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

impl DbService {
    pub async fn register_push_token(
        &self,
        user_id: Uuid,
        device_token: String,
        platform: String,
    ) -> Result<PushTokenModel, AppError> {
        Ok(PushTokenActive {
            id: Set(token::new_id()),
            user_id: Set(user_id),
            token: Set(device_token),
            platform: Set(platform),
            created_at: Set(Utc::now()),
        }
        .insert(&self.conn)
        .await?)
    }

    pub async fn list_push_tokens_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<PushTokenModel>, AppError> {
        Ok(PushToken::find()
            .filter(Column::UserId.eq(user_id))
            .all(&self.conn)
            .await?)
    }
}

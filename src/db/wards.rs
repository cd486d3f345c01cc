use crate::db::service::DbService;
use crate::types::error::AppError;
use crate::utils::token;
use chrono::Utc;
use entity::ward::{ActiveModel as WardActive, Entity as Ward, Model as WardModel};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, Set};
use uuid::Uuid;

impl DbService {
    pub async fn create_ward(
        &self,
        name: String,
        stake_name: String,
        language: String,
    ) -> Result<WardModel, AppError> {
        let now = Utc::now();
        Ok(WardActive {
            id: Set(token::new_id()),
            name: Set(name),
            stake_name: Set(stake_name),
            language: Set(language),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.conn)
        .await?)
    }

    pub async fn get_ward(&self, id: &Uuid) -> Result<WardModel, AppError> {
        Ok(Ward::find_by_id(*id)
            .one(&self.conn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Ward does not exist".into()))?)
    }
}

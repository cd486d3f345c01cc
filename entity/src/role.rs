use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account role inside a ward. Stored as a plain string column so the
/// same schema works on Postgres and SQLite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[sea_orm(string_value = "bishopric")]
    Bishopric,
    #[sea_orm(string_value = "secretary")]
    Secretary,
    #[sea_orm(string_value = "observer")]
    Observer,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Bishopric => write!(f, "bishopric"),
            Role::Secretary => write!(f, "secretary"),
            Role::Observer => write!(f, "observer"),
        }
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bishopric" => Ok(Role::Bishopric),
            "secretary" => Ok(Role::Secretary),
            "observer" => Ok(Role::Observer),
            _ => Err(()),
        }
    }
}

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    enums::{PlayerType, TeamRole},
    object_id::PlayerId,
    schema::*,
};

pub use crate::schema::players::*;

#[derive(Clone, Debug, Queryable, Identifiable, Selectable, Serialize)]
#[diesel(table_name = players)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub player_type: PlayerType,
    pub role: TeamRole,
    pub team: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize, Insertable, AsChangeset)]
#[diesel(table_name = players)]
pub struct NewPlayer {
    pub id: PlayerId,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub player_type: PlayerType,
    pub role: TeamRole,
    pub team: String,
}

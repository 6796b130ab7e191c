use chrono::NaiveDate;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{object_id::PracticeId, schema::*};

pub use crate::schema::practices::*;

#[derive(Clone, Debug, Queryable, Identifiable, Selectable, Serialize)]
#[diesel(table_name = practices)]
pub struct Practice {
    pub id: PracticeId,
    pub date: NaiveDate,
    pub time: String,
    pub venue: String,
    #[serde(rename = "type")]
    pub session_type: String,
    pub first_team: String,
    pub second_team: String,
    pub notes: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize, Insertable, AsChangeset)]
#[diesel(table_name = practices, treat_none_as_null = true)]
pub struct NewPractice {
    pub id: PracticeId,
    pub date: NaiveDate,
    pub time: String,
    pub venue: String,
    #[serde(rename = "type")]
    pub session_type: String,
    pub first_team: String,
    pub second_team: String,
    pub notes: Option<String>,
}

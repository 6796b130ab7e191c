use chrono::NaiveDate;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{enums::MatchResult, object_id::MatchId, schema::*};

pub use crate::schema::matches::*;

/// A scheduled or completed fixture. Public views treat this as read-only;
/// only administrators mutate it.
#[derive(Clone, Debug, Queryable, Identifiable, Selectable, Serialize)]
#[diesel(table_name = matches)]
pub struct Match {
    pub id: MatchId,
    pub team1: String,
    pub team2: String,
    pub date: NaiveDate,
    pub time: String,
    pub venue: String,
    #[serde(rename = "type")]
    pub match_type: String,
    pub result: MatchResult,
    pub division: String,
    pub url: Option<String>,
    pub image_url: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize, Insertable, AsChangeset)]
#[diesel(table_name = matches, treat_none_as_null = true)]
pub struct NewMatch {
    pub id: MatchId,
    pub team1: String,
    pub team2: String,
    pub date: NaiveDate,
    pub time: String,
    pub venue: String,
    #[serde(rename = "type")]
    pub match_type: String,
    pub result: MatchResult,
    pub division: String,
    pub url: Option<String>,
    pub image_url: Option<String>,
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use diesel::prelude::*;
use serde::Deserialize;

use pavilion_db::{
    object_id::PracticeId,
    practices::{self, NewPractice, Practice},
    PoolExt,
};

use crate::{auth::AdminUser, shared_state::AppState, Error};

const UPCOMING_LIMIT: i64 = 3;

async fn list_practices(State(state): State<AppState>) -> Result<Json<Vec<Practice>>, Error> {
    let all = state
        .db
        .interact(|conn| {
            practices::table
                .order(practices::date.asc())
                .load::<Practice>(conn)
                .map_err(Error::from)
        })
        .await?;

    Ok(Json(all))
}

async fn upcoming_practices(State(state): State<AppState>) -> Result<Json<Vec<Practice>>, Error> {
    let today = chrono::Utc::now().date_naive();
    let upcoming = state
        .db
        .interact(move |conn| {
            practices::table
                .filter(practices::date.ge(today))
                .order(practices::date.asc())
                .limit(UPCOMING_LIMIT)
                .load::<Practice>(conn)
                .map_err(Error::from)
        })
        .await?;

    Ok(Json(upcoming))
}

#[derive(Debug, Deserialize)]
pub struct PracticeInput {
    pub date: NaiveDate,
    pub time: String,
    pub venue: String,
    #[serde(rename = "type")]
    pub session_type: String,
    pub first_team: String,
    pub second_team: String,
    pub notes: Option<String>,
}

impl PracticeInput {
    fn validate(&self) -> Result<(), Error> {
        if self.venue.trim().is_empty() {
            return Err(Error::Validation("venue is required".into()));
        }

        Ok(())
    }

    fn into_new(self, id: PracticeId) -> NewPractice {
        NewPractice {
            id,
            date: self.date,
            time: self.time,
            venue: self.venue,
            session_type: self.session_type,
            first_team: self.first_team,
            second_team: self.second_team,
            notes: self.notes,
        }
    }
}

async fn create_practice(
    State(state): State<AppState>,
    _user: AdminUser,
    Json(payload): Json<PracticeInput>,
) -> Result<(StatusCode, Json<Practice>), Error> {
    payload.validate()?;

    let created = state
        .db
        .interact(move |conn| {
            diesel::insert_into(practices::table)
                .values(payload.into_new(PracticeId::new()))
                .get_result::<Practice>(conn)
                .map_err(Error::from)
        })
        .await?;

    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_practice(
    State(state): State<AppState>,
    _user: AdminUser,
    Path(practice_id): Path<PracticeId>,
    Json(payload): Json<PracticeInput>,
) -> Result<Json<Practice>, Error> {
    payload.validate()?;

    let updated = state
        .db
        .interact(move |conn| {
            diesel::update(practices::table.find(practice_id))
                .set(payload.into_new(practice_id))
                .get_result::<Practice>(conn)
                .map_err(Error::from)
        })
        .await?;

    Ok(Json(updated))
}

async fn delete_practice(
    State(state): State<AppState>,
    _user: AdminUser,
    Path(practice_id): Path<PracticeId>,
) -> Result<StatusCode, Error> {
    let deleted = state
        .db
        .interact(move |conn| {
            diesel::delete(practices::table.find(practice_id))
                .execute(conn)
                .map_err(Error::from)
        })
        .await?;

    if deleted == 0 {
        return Err(Error::NotFound);
    }

    Ok(StatusCode::OK)
}

async fn get_practice(
    State(state): State<AppState>,
    Path(practice_id): Path<PracticeId>,
) -> Result<Json<Practice>, Error> {
    let object = state
        .db
        .interact(move |conn| {
            practices::table
                .find(practice_id)
                .first::<Practice>(conn)
                .map_err(Error::from)
        })
        .await?;

    Ok(Json(object))
}

pub fn configure() -> Router<AppState> {
    Router::new()
        .route("/practices", get(list_practices).post(create_practice))
        .route("/practices/upcoming", get(upcoming_practices))
        .route(
            "/practices/:practice_id",
            get(get_practice)
                .put(update_practice)
                .delete(delete_practice),
        )
}

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use pavilion_db::{
    matches::{self, Match, NewMatch},
    object_id::MatchId,
    MatchResult, PoolExt,
};

use crate::{
    auth::AdminUser,
    fixtures::{Fixtures, ResultFilter, TeamFilter},
    shared_state::AppState,
    Error,
};

const UPCOMING_LIMIT: i64 = 6;

#[derive(Debug, Default, Deserialize)]
pub struct FixturesQuery {
    pub result: Option<ResultFilter>,
    pub team: Option<String>,
    pub page: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct FixturesResponse {
    pub matches: Vec<Match>,
    pub current_page: usize,
    pub total_pages: usize,
    pub teams: Vec<String>,
}

fn fetch_all_matches(conn: &mut PgConnection) -> Result<Vec<Match>, Error> {
    matches::table
        .order(matches::date.asc())
        .load::<Match>(conn)
        .map_err(Error::from)
}

/// The fixtures page: the full match list run through the result and
/// team filters, paged twelve at a time.
async fn list_matches(
    State(state): State<AppState>,
    Query(query): Query<FixturesQuery>,
) -> Result<Json<FixturesResponse>, Error> {
    let all = state.db.interact(fetch_all_matches).await?;

    let mut fixtures = Fixtures::new(all);
    if let Some(result) = query.result {
        fixtures.set_result_filter(result);
    }

    match query.team {
        Some(team) if !team.is_empty() && team != "all" => {
            fixtures.set_team_filter(TeamFilter::Team(team))
        }
        _ => {}
    };

    if let Some(page) = query.page {
        fixtures.paginate(page);
    }

    Ok(Json(FixturesResponse {
        matches: fixtures.visible_page().into_iter().cloned().collect(),
        current_page: fixtures.current_page(),
        total_pages: fixtures.total_pages(),
        teams: fixtures.teams().to_vec(),
    }))
}

/// The next few fixtures, for the home page.
async fn upcoming_matches(State(state): State<AppState>) -> Result<Json<Vec<Match>>, Error> {
    let today = chrono::Utc::now().date_naive();
    let upcoming = state
        .db
        .interact(move |conn| {
            matches::table
                .filter(matches::date.ge(today))
                .order(matches::date.asc())
                .limit(UPCOMING_LIMIT)
                .load::<Match>(conn)
                .map_err(Error::from)
        })
        .await?;

    Ok(Json(upcoming))
}

async fn get_match(
    State(state): State<AppState>,
    Path(match_id): Path<MatchId>,
) -> Result<Json<Match>, Error> {
    let object = state
        .db
        .interact(move |conn| {
            matches::table
                .find(match_id)
                .first::<Match>(conn)
                .map_err(Error::from)
        })
        .await?;

    Ok(Json(object))
}

#[derive(Debug, Deserialize)]
pub struct MatchInput {
    pub team1: String,
    pub team2: String,
    pub date: NaiveDate,
    pub time: String,
    pub venue: String,
    #[serde(rename = "type")]
    pub match_type: String,
    #[serde(default)]
    pub result: MatchResult,
    pub division: String,
    pub url: Option<String>,
    pub image_url: Option<String>,
}

impl MatchInput {
    fn validate(&self) -> Result<(), Error> {
        if self.team1.trim().is_empty() || self.team2.trim().is_empty() {
            return Err(Error::Validation("both team names are required".into()));
        }

        Ok(())
    }

    fn into_new(self, id: MatchId) -> NewMatch {
        NewMatch {
            id,
            team1: self.team1,
            team2: self.team2,
            date: self.date,
            time: self.time,
            venue: self.venue,
            match_type: self.match_type,
            result: self.result,
            division: self.division,
            url: self.url,
            image_url: self.image_url,
        }
    }
}

async fn create_match(
    State(state): State<AppState>,
    _user: AdminUser,
    Json(payload): Json<MatchInput>,
) -> Result<(StatusCode, Json<Match>), Error> {
    payload.validate()?;

    let created = state
        .db
        .interact(move |conn| {
            diesel::insert_into(matches::table)
                .values(payload.into_new(MatchId::new()))
                .get_result::<Match>(conn)
                .map_err(Error::from)
        })
        .await?;

    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_match(
    State(state): State<AppState>,
    _user: AdminUser,
    Path(match_id): Path<MatchId>,
    Json(payload): Json<MatchInput>,
) -> Result<Json<Match>, Error> {
    payload.validate()?;

    let updated = state
        .db
        .interact(move |conn| {
            diesel::update(matches::table.find(match_id))
                .set(payload.into_new(match_id))
                .get_result::<Match>(conn)
                .map_err(Error::from)
        })
        .await?;

    Ok(Json(updated))
}

async fn delete_match(
    State(state): State<AppState>,
    _user: AdminUser,
    Path(match_id): Path<MatchId>,
) -> Result<StatusCode, Error> {
    let deleted = state
        .db
        .interact(move |conn| {
            diesel::delete(matches::table.find(match_id))
                .execute(conn)
                .map_err(Error::from)
        })
        .await?;

    if deleted == 0 {
        return Err(Error::NotFound);
    }

    Ok(StatusCode::OK)
}

pub fn configure() -> Router<AppState> {
    Router::new()
        .route("/matches", get(list_matches).post(create_match))
        .route("/matches/upcoming", get(upcoming_matches))
        .route(
            "/matches/:match_id",
            get(get_match).put(update_match).delete(delete_match),
        )
}

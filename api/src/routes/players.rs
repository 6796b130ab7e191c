use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use pavilion_db::{
    object_id::PlayerId,
    players::{self, NewPlayer, Player},
    PlayerType, PoolExt, TeamRole,
};

use crate::{auth::AdminUser, shared_state::AppState, Error};

/// One team's roster. The captain and vice-captain slots are filled by the
/// first player holding that role, in name order; any further players with
/// those roles are not listed.
#[derive(Debug, Serialize)]
pub struct TeamRoster {
    pub team: String,
    pub captain: Option<Player>,
    pub vice_captain: Option<Player>,
    pub players: Vec<Player>,
}

fn group_roster(all: Vec<Player>) -> Vec<TeamRoster> {
    let mut teams: BTreeMap<String, TeamRoster> = BTreeMap::new();

    for player in all {
        let roster = teams
            .entry(player.team.clone())
            .or_insert_with_key(|team| TeamRoster {
                team: team.clone(),
                captain: None,
                vice_captain: None,
                players: Vec::new(),
            });

        match player.role {
            TeamRole::Captain => {
                if roster.captain.is_none() {
                    roster.captain = Some(player);
                }
            }
            TeamRole::ViceCaptain => {
                if roster.vice_captain.is_none() {
                    roster.vice_captain = Some(player);
                }
            }
            TeamRole::Player => roster.players.push(player),
        }
    }

    teams.into_values().collect()
}

async fn list_players(State(state): State<AppState>) -> Result<Json<Vec<TeamRoster>>, Error> {
    let all = state
        .db
        .interact(|conn| {
            players::table
                .order(players::name.asc())
                .load::<Player>(conn)
                .map_err(Error::from)
        })
        .await?;

    Ok(Json(group_roster(all)))
}

#[derive(Debug, Deserialize)]
pub struct PlayerInput {
    pub name: String,
    pub email: String,
    pub age: i32,
    pub player_type: PlayerType,
    pub role: TeamRole,
    pub team: String,
}

impl PlayerInput {
    fn validate(&self) -> Result<(), Error> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation("name is required".into()));
        }
        if self.team.trim().is_empty() {
            return Err(Error::Validation("team is required".into()));
        }
        if !(10..=80).contains(&self.age) {
            return Err(Error::Validation("age must be between 10 and 80".into()));
        }

        Ok(())
    }

    fn into_new(self, id: PlayerId) -> NewPlayer {
        NewPlayer {
            id,
            name: self.name,
            email: self.email,
            age: self.age,
            player_type: self.player_type,
            role: self.role,
            team: self.team,
        }
    }
}

async fn create_player(
    State(state): State<AppState>,
    _user: AdminUser,
    Json(payload): Json<PlayerInput>,
) -> Result<(StatusCode, Json<Player>), Error> {
    payload.validate()?;

    let created = state
        .db
        .interact(move |conn| {
            diesel::insert_into(players::table)
                .values(payload.into_new(PlayerId::new()))
                .get_result::<Player>(conn)
                .map_err(Error::from)
        })
        .await?;

    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_player(
    State(state): State<AppState>,
    _user: AdminUser,
    Path(player_id): Path<PlayerId>,
    Json(payload): Json<PlayerInput>,
) -> Result<Json<Player>, Error> {
    payload.validate()?;

    let updated = state
        .db
        .interact(move |conn| {
            diesel::update(players::table.find(player_id))
                .set(payload.into_new(player_id))
                .get_result::<Player>(conn)
                .map_err(Error::from)
        })
        .await?;

    Ok(Json(updated))
}

async fn delete_player(
    State(state): State<AppState>,
    _user: AdminUser,
    Path(player_id): Path<PlayerId>,
) -> Result<StatusCode, Error> {
    let deleted = state
        .db
        .interact(move |conn| {
            diesel::delete(players::table.find(player_id))
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
        .route("/players", get(list_players).post(create_player))
        .route(
            "/players/:player_id",
            axum::routing::put(update_player).delete(delete_player),
        )
}

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use diesel::prelude::*;
use serde::Deserialize;

use pavilion_db::{
    object_id::ApplicationId,
    team_applications::{self, NewTeamApplication, TeamApplication},
    ApplicationStatus, PoolExt,
};

use crate::{auth::AdminUser, shared_state::AppState, Error};

const MIN_AGE: i32 = 10;
const MAX_AGE: i32 = 80;

#[derive(Debug, Deserialize)]
pub struct ApplicationInput {
    pub name: String,
    pub email: String,
    pub age: i32,
    pub location: String,
    pub specification: String,
    pub experience: String,
}

impl ApplicationInput {
    fn validate(&self) -> Result<(), Error> {
        for (value, field) in [
            (&self.name, "name"),
            (&self.email, "email"),
            (&self.location, "location"),
            (&self.specification, "specification"),
            (&self.experience, "experience"),
        ] {
            if value.trim().is_empty() {
                return Err(Error::Validation(format!("{field} is required")));
            }
        }

        if !self.email.contains('@') {
            return Err(Error::Validation("a valid email address is required".into()));
        }

        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(Error::Validation(format!(
                "age must be between {MIN_AGE} and {MAX_AGE}"
            )));
        }

        Ok(())
    }
}

/// Public submission endpoint. The status is always `pending` regardless
/// of anything in the payload.
async fn submit_application(
    State(state): State<AppState>,
    Json(payload): Json<ApplicationInput>,
) -> Result<(StatusCode, Json<TeamApplication>), Error> {
    payload.validate()?;

    let created = state
        .db
        .interact(move |conn| {
            diesel::insert_into(team_applications::table)
                .values(NewTeamApplication {
                    id: ApplicationId::new(),
                    name: payload.name,
                    email: payload.email,
                    age: payload.age,
                    location: payload.location,
                    specification: payload.specification,
                    experience: payload.experience,
                    status: ApplicationStatus::Pending,
                })
                .get_result::<TeamApplication>(conn)
                .map_err(Error::from)
        })
        .await?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[derive(Debug, Default, Deserialize)]
pub struct ApplicationListQuery {
    pub status: Option<ApplicationStatus>,
}

async fn list_applications(
    State(state): State<AppState>,
    _user: AdminUser,
    Query(query): Query<ApplicationListQuery>,
) -> Result<Json<Vec<TeamApplication>>, Error> {
    let list = state
        .db
        .interact(move |conn| {
            let mut q = team_applications::table
                .order(team_applications::created_at.desc())
                .into_boxed();

            if let Some(status) = query.status {
                q = q.filter(team_applications::status.eq(status));
            }

            q.load::<TeamApplication>(conn).map_err(Error::from)
        })
        .await?;

    Ok(Json(list))
}

/// Applications move one way: only a pending application can be accepted
/// or rejected. The status guard in the UPDATE makes concurrent decisions
/// race-safe; the loser simply matches zero rows.
async fn transition_application(
    state: &AppState,
    application_id: ApplicationId,
    new_status: ApplicationStatus,
) -> Result<TeamApplication, Error> {
    let updated = state
        .db
        .interact(move |conn| {
            diesel::update(
                team_applications::table
                    .find(application_id)
                    .filter(team_applications::status.eq(ApplicationStatus::Pending)),
            )
            .set(team_applications::status.eq(new_status))
            .get_result::<TeamApplication>(conn)
            .optional()
            .map_err(Error::from)
        })
        .await?;

    updated.ok_or(Error::NotFound)
}

async fn accept_application(
    State(state): State<AppState>,
    _user: AdminUser,
    Path(application_id): Path<ApplicationId>,
) -> Result<Json<TeamApplication>, Error> {
    let updated =
        transition_application(&state, application_id, ApplicationStatus::Accepted).await?;
    Ok(Json(updated))
}

async fn reject_application(
    State(state): State<AppState>,
    _user: AdminUser,
    Path(application_id): Path<ApplicationId>,
) -> Result<Json<TeamApplication>, Error> {
    let updated =
        transition_application(&state, application_id, ApplicationStatus::Rejected).await?;
    Ok(Json(updated))
}

async fn delete_application(
    State(state): State<AppState>,
    _user: AdminUser,
    Path(application_id): Path<ApplicationId>,
) -> Result<StatusCode, Error> {
    let deleted = state
        .db
        .interact(move |conn| {
            diesel::delete(team_applications::table.find(application_id))
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
        .route(
            "/applications",
            get(list_applications).post(submit_application),
        )
        .route(
            "/applications/:application_id",
            axum::routing::delete(delete_application),
        )
        .route(
            "/applications/:application_id/accept",
            post(accept_application),
        )
        .route(
            "/applications/:application_id/reject",
            post(reject_application),
        )
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use diesel::prelude::*;
use serde::Deserialize;

use pavilion_db::{
    committee_members::{self, CommitteeMember, NewCommitteeMember},
    object_id::CommitteeMemberId,
    PoolExt,
};

use crate::{auth::AdminUser, shared_state::AppState, Error};

/// The five officer positions render first, in this order; everyone else
/// follows alphabetically.
fn position_rank(position: &str) -> usize {
    match position {
        "President" => 0,
        "Chairman" => 1,
        "Secretary" => 2,
        "Treasurer" => 3,
        "Manager" => 4,
        _ => 5,
    }
}

fn sort_members(members: &mut [CommitteeMember]) {
    members.sort_by(|a, b| {
        position_rank(&a.position)
            .cmp(&position_rank(&b.position))
            .then_with(|| a.name.cmp(&b.name))
    });
}

async fn list_committee(
    State(state): State<AppState>,
) -> Result<Json<Vec<CommitteeMember>>, Error> {
    let mut members = state
        .db
        .interact(|conn| {
            committee_members::table
                .load::<CommitteeMember>(conn)
                .map_err(Error::from)
        })
        .await?;

    sort_members(&mut members);

    Ok(Json(members))
}

#[derive(Debug, Deserialize)]
pub struct CommitteeMemberInput {
    pub name: String,
    pub position: String,
}

impl CommitteeMemberInput {
    fn validate(&self) -> Result<(), Error> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation("name is required".into()));
        }
        if self.position.trim().is_empty() {
            return Err(Error::Validation("position is required".into()));
        }

        Ok(())
    }

    fn into_new(self, id: CommitteeMemberId) -> NewCommitteeMember {
        NewCommitteeMember {
            id,
            name: self.name,
            position: self.position,
        }
    }
}

async fn create_member(
    State(state): State<AppState>,
    _user: AdminUser,
    Json(payload): Json<CommitteeMemberInput>,
) -> Result<(StatusCode, Json<CommitteeMember>), Error> {
    payload.validate()?;

    let created = state
        .db
        .interact(move |conn| {
            diesel::insert_into(committee_members::table)
                .values(payload.into_new(CommitteeMemberId::new()))
                .get_result::<CommitteeMember>(conn)
                .map_err(Error::from)
        })
        .await?;

    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_member(
    State(state): State<AppState>,
    _user: AdminUser,
    Path(member_id): Path<CommitteeMemberId>,
    Json(payload): Json<CommitteeMemberInput>,
) -> Result<Json<CommitteeMember>, Error> {
    payload.validate()?;

    let updated = state
        .db
        .interact(move |conn| {
            diesel::update(committee_members::table.find(member_id))
                .set(payload.into_new(member_id))
                .get_result::<CommitteeMember>(conn)
                .map_err(Error::from)
        })
        .await?;

    Ok(Json(updated))
}

async fn delete_member(
    State(state): State<AppState>,
    _user: AdminUser,
    Path(member_id): Path<CommitteeMemberId>,
) -> Result<StatusCode, Error> {
    let deleted = state
        .db
        .interact(move |conn| {
            diesel::delete(committee_members::table.find(member_id))
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
        .route("/committee", get(list_committee).post(create_member))
        .route(
            "/committee/:member_id",
            axum::routing::put(update_member).delete(delete_member),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn officers_sort_before_ordinary_members() {
        let mut members = vec![
            ("Zed", "Groundskeeper"),
            ("Amy", "Treasurer"),
            ("Bea", "President"),
            ("Cal", "Bar Steward"),
            ("Dot", "Chairman"),
        ]
        .into_iter()
        .map(|(name, position)| CommitteeMember {
            id: CommitteeMemberId::new(),
            name: name.to_string(),
            position: position.to_string(),
            created_at: chrono::Utc::now(),
        })
        .collect::<Vec<_>>();

        sort_members(&mut members);

        let order = members.iter().map(|m| m.name.as_str()).collect::<Vec<_>>();
        assert_eq!(order, ["Bea", "Dot", "Amy", "Cal", "Zed"]);
    }
}

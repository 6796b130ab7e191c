use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{object_id::CommitteeMemberId, schema::*};

pub use crate::schema::committee_members::*;

/// Position is free text; the five well-known positions get a fixed
/// rendering order in the API layer.
#[derive(Clone, Debug, Queryable, Identifiable, Selectable, Serialize)]
#[diesel(table_name = committee_members)]
pub struct CommitteeMember {
    pub id: CommitteeMemberId,
    pub name: String,
    pub position: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize, Insertable, AsChangeset)]
#[diesel(table_name = committee_members)]
pub struct NewCommitteeMember {
    pub id: CommitteeMemberId,
    pub name: String,
    pub position: String,
}

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{enums::ApplicationStatus, object_id::ApplicationId, schema::*};

pub use crate::schema::team_applications::*;

/// A membership request submitted through the public contact form.
/// Created unauthenticated; moderated only by administrators.
#[derive(Clone, Debug, Queryable, Identifiable, Selectable, Serialize)]
#[diesel(table_name = team_applications)]
pub struct TeamApplication {
    pub id: ApplicationId,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub location: String,
    pub specification: String,
    pub experience: String,
    pub status: ApplicationStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize, Insertable)]
#[diesel(table_name = team_applications)]
pub struct NewTeamApplication {
    pub id: ApplicationId,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub location: String,
    pub specification: String,
    pub experience: String,
    pub status: ApplicationStatus,
}

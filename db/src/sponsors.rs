use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{object_id::SponsorId, schema::*};

pub use crate::schema::sponsors::*;

/// The logo itself lives in object storage; `logo_url` is its public URL.
#[derive(Clone, Debug, Queryable, Identifiable, Selectable, Serialize)]
#[diesel(table_name = sponsors)]
pub struct Sponsor {
    pub id: SponsorId,
    pub name: String,
    pub website_url: String,
    pub logo_url: String,
    pub description: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize, Insertable, AsChangeset)]
#[diesel(table_name = sponsors)]
pub struct NewSponsor {
    pub id: SponsorId,
    pub name: String,
    pub website_url: String,
    pub logo_url: String,
    pub description: String,
}

use axum::{
    extract::{BodyStream, Path, State},
    headers::ContentLength,
    http::StatusCode,
    routing::{get, post},
    Json, Router, TypedHeader,
};
use bytes::BytesMut;
use diesel::prelude::*;
use futures::StreamExt;
use serde::{Deserialize, Serialize};
use tracing::{event, Level};

use pavilion_db::{
    object_id::SponsorId,
    sponsors::{self, NewSponsor, Sponsor},
    PoolExt,
};

use crate::{auth::AdminUser, shared_state::AppState, Error};

const MAX_LOGO_SIZE: u64 = 5 * 1024 * 1024;

async fn list_sponsors(State(state): State<AppState>) -> Result<Json<Vec<Sponsor>>, Error> {
    let all = state
        .db
        .interact(|conn| {
            sponsors::table
                .order(sponsors::name.asc())
                .load::<Sponsor>(conn)
                .map_err(Error::from)
        })
        .await?;

    Ok(Json(all))
}

#[derive(Debug, Deserialize)]
pub struct SponsorInput {
    pub name: String,
    #[serde(default)]
    pub website_url: String,
    pub logo_url: String,
    #[serde(default)]
    pub description: String,
}

impl SponsorInput {
    fn validate(&self) -> Result<(), Error> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation("name is required".into()));
        }
        if self.logo_url.trim().is_empty() {
            return Err(Error::Validation("logo_url is required".into()));
        }

        Ok(())
    }

    fn into_new(self, id: SponsorId) -> NewSponsor {
        NewSponsor {
            id,
            name: self.name,
            website_url: self.website_url,
            logo_url: self.logo_url,
            description: self.description,
        }
    }
}

async fn create_sponsor(
    State(state): State<AppState>,
    _user: AdminUser,
    Json(payload): Json<SponsorInput>,
) -> Result<(StatusCode, Json<Sponsor>), Error> {
    payload.validate()?;

    let created = state
        .db
        .interact(move |conn| {
            diesel::insert_into(sponsors::table)
                .values(payload.into_new(SponsorId::new()))
                .get_result::<Sponsor>(conn)
                .map_err(Error::from)
        })
        .await?;

    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_sponsor(
    State(state): State<AppState>,
    _user: AdminUser,
    Path(sponsor_id): Path<SponsorId>,
    Json(payload): Json<SponsorInput>,
) -> Result<Json<Sponsor>, Error> {
    payload.validate()?;

    let updated = state
        .db
        .interact(move |conn| {
            diesel::update(sponsors::table.find(sponsor_id))
                .set(payload.into_new(sponsor_id))
                .get_result::<Sponsor>(conn)
                .map_err(Error::from)
        })
        .await?;

    Ok(Json(updated))
}

async fn delete_sponsor(
    State(state): State<AppState>,
    _user: AdminUser,
    Path(sponsor_id): Path<SponsorId>,
) -> Result<StatusCode, Error> {
    let deleted = state
        .db
        .interact(move |conn| {
            diesel::delete(sponsors::table.find(sponsor_id))
                .get_result::<Sponsor>(conn)
                .optional()
                .map_err(Error::from)
        })
        .await?;

    let Some(sponsor) = deleted else {
        return Err(Error::NotFound);
    };

    // When the logo lives in our own store, remove the object too. The row
    // is already gone, so a failure here only leaves an orphaned object.
    if let Some(location) = state.logos.object_location(&sponsor.logo_url) {
        if let Err(e) = state.logos.delete(location).await {
            event!(Level::WARN, error = %e, location, "Failed to remove logo object");
        }
    }

    Ok(StatusCode::OK)
}

#[derive(Debug, Serialize)]
pub struct LogoUploadResponse {
    pub logo_url: String,
}

/// Accepts a raw JPEG or PNG body and stores it under a content-addressed
/// name, so re-uploading the same logo is idempotent.
async fn upload_logo(
    State(state): State<AppState>,
    _user: AdminUser,
    content_length: Option<TypedHeader<ContentLength>>,
    mut stream: BodyStream,
) -> Result<(StatusCode, Json<LogoUploadResponse>), Error> {
    let Some(TypedHeader(ContentLength(expected))) = content_length else {
        return Err(Error::ContentLengthRequired);
    };

    if expected > MAX_LOGO_SIZE {
        return Err(Error::RequestTooLarge);
    }

    let mut data = BytesMut::with_capacity(expected as usize);
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if (data.len() + chunk.len()) as u64 > MAX_LOGO_SIZE {
            return Err(Error::RequestTooLarge);
        }
        data.extend_from_slice(&chunk);
    }

    let ext = match image::guess_format(&data) {
        Ok(image::ImageFormat::Jpeg) => "jpg",
        Ok(image::ImageFormat::Png) => "png",
        _ => return Err(Error::UnsupportedImageType),
    };

    let hash = blake3::hash(&data);
    let location = format!("{}.{}", hash.to_hex(), ext);
    state.logos.put(&location, data.freeze()).await?;

    Ok((
        StatusCode::CREATED,
        Json(LogoUploadResponse {
            logo_url: state.logos.public_url(&location),
        }),
    ))
}

pub fn configure() -> Router<AppState> {
    Router::new()
        .route("/sponsors", get(list_sponsors))
        .route("/sponsors/logo", post(upload_logo))
        .route(
            "/sponsors/:sponsor_id",
            axum::routing::put(update_sponsor).delete(delete_sponsor),
        )
        .route("/admin/sponsors", post(create_sponsor))
}

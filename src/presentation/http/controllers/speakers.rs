// src/presentation/http/controllers/speakers.rs
use crate::application::{
    dto::{SpeakerListingDto, SpeakerProfileDto, StaticPathDto},
    error::ApplicationError,
    queries::speakers::{GetSpeakerBySlugQuery, ListSpeakersQuery},
};
use crate::domain::speaker::RoleTag;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct SpeakerListParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl SpeakerListParams {
    fn into_query(self) -> HttpResult<ListSpeakersQuery> {
        let category = match self.category.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(
                raw.parse::<RoleTag>()
                    .map_err(|err| HttpError::from_error(ApplicationError::from(err)))?,
            ),
        };

        Ok(ListSpeakersQuery {
            search: self.q.unwrap_or_default(),
            category,
        })
    }
}

pub async fn list_speakers(
    Extension(state): Extension<HttpState>,
    Query(params): Query<SpeakerListParams>,
) -> HttpResult<Json<SpeakerListingDto>> {
    let query = params.into_query()?;

    state
        .services
        .speaker_queries
        .list_speakers(query)
        .await
        .into_http()
        .map(Json)
}

pub async fn list_static_paths(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<StaticPathDto>>> {
    state
        .services
        .speaker_queries
        .list_static_paths()
        .await
        .into_http()
        .map(Json)
}

pub async fn get_speaker_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<SpeakerProfileDto>> {
    state
        .services
        .speaker_queries
        .get_speaker_by_slug(GetSpeakerBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

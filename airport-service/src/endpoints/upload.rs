use axum::{
    Json,
    extract::{
        Multipart, State,
        multipart::{Field, MultipartRejection},
    },
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    app_state::AppState,
    error::{
        api::ApiError, internal::InternalError,
        invalid_req::InvalidRequestError,
    },
};

const AIRPORT_NAME_FIELD: &str = "airport_name";
const AIRPORT_IMAGE_FIELD: &str = "airport_img";
const UPLOADED_MESSAGE: &str = "Image uploaded";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    /// Object name the image was stored under.
    pub filename: String,
    pub image_url: String,
}

#[derive(Debug)]
struct Image {
    file_name: String,
    content_type: Option<String>,
    bytes: Bytes,
}

/// The two fields we care about. Everything else in the form is skipped and
/// repeated fields keep their first value.
#[derive(Debug, Default)]
struct UploadForm {
    airport_name: Option<String>,
    image: Option<Image>,
}

impl UploadForm {
    async fn read(mut multipart: Multipart) -> Result<Self, InvalidRequestError> {
        let mut form = Self::default();
        while let Some(field) = multipart.next_field().await? {
            let name = field.name().map(str::to_string);
            match name.as_deref() {
                Some(AIRPORT_NAME_FIELD) if form.airport_name.is_none() => {
                    form.airport_name = Some(field.text().await?);
                }
                Some(AIRPORT_IMAGE_FIELD) if form.image.is_none() => {
                    form.image = Image::read(field).await?;
                }
                _ => {}
            }
        }
        Ok(form)
    }
}

impl Image {
    /// Parts without a filename are plain form values, not files. Browsers
    /// send `filename=""` for a file input left empty.
    async fn read(field: Field<'_>) -> Result<Option<Self>, InvalidRequestError> {
        let Some(file_name) = field
            .file_name()
            .filter(|name| !name.is_empty())
            .map(str::to_string)
        else {
            return Ok(None);
        };
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await?;
        Ok(Some(Self {
            file_name,
            content_type,
            bytes,
        }))
    }
}

/// POST /update_airport_image
///
/// Stores the uploaded image as `<iata>.<ext>` and points the airport at
/// it. The registry is only touched after the store acknowledged the write.
#[tracing::instrument(skip_all)]
pub async fn update_airport_image(
    State(app_state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, ApiError> {
    let form = UploadForm::read(multipart.map_err(InvalidRequestError::from)?)
        .await?;

    let airport_name = form
        .airport_name
        .filter(|name| !name.is_empty())
        .ok_or(InvalidRequestError::EmptyAirportName)?;
    debug!(airport_name = %airport_name, "received airport image upload");
    let image = form.image.ok_or(InvalidRequestError::MissingImage)?;

    let airport = app_state
        .registry()
        .find_by_name(&airport_name)
        .await
        .ok_or_else(|| InvalidRequestError::AirportNotFound(airport_name))?;

    let object_name = airport.object_name(&image.file_name);
    debug!(
        object = %object_name,
        size = image.bytes.len(),
        "uploading airport image"
    );
    app_state
        .object_store()
        .upload(&object_name, image.content_type.as_deref(), image.bytes)
        .await
        .map_err(InternalError::from)?;
    info!(object = %object_name, iata = %airport.iata, "airport image stored");

    let image_url = app_state.object_store().public_url(&object_name);
    if app_state
        .registry()
        .set_image_url(&airport.name, image_url.clone())
        .await
        .is_some()
    {
        info!(iata = %airport.iata, image_url = %image_url, "airport image url updated");
    }

    Ok(Json(UploadResponse {
        message: UPLOADED_MESSAGE.to_string(),
        filename: object_name,
        image_url,
    }))
}

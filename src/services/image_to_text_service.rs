use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, Set};
use serde_json::Value as Json;
use validator::Validate;

use crate::{
    dto::image_to_text::ImageToTextRequest,
    entity::image_to_texts::{ActiveModel as ImageToTextActive, Model as ImageToTextModel},
    error::{AppError, AppResult},
    models::ImageToText,
    state::AppState,
};

/// Stores the request, forwards it to the recognition service and records the
/// texts it returns. The stored input survives an upstream failure.
pub async fn process_input(state: &AppState, payload: ImageToTextRequest) -> AppResult<ImageToText> {
    payload.validate()?;
    let record = ImageToTextActive {
        id: NotSet,
        link: Set(payload.link.clone()),
        input_images: Set(Json::from(payload.images.clone())),
        output_texts: Set(None),
    }
    .insert(&state.orm)
    .await?;

    let texts = match state.image_to_text.process(&payload).await {
        Ok(texts) => texts,
        Err(err) => {
            tracing::warn!(
                id = record.id,
                endpoint = state.image_to_text.endpoint(),
                error = %err,
                "image-to-text call failed"
            );
            return Err(err);
        }
    };

    let mut active: ImageToTextActive = record.into();
    active.output_texts = Set(Some(Json::from(texts)));
    let record = active.update(&state.orm).await?;

    tracing::info!(id = record.id, "image-to-text processed");
    image_to_text_from_entity(record)
}

fn image_to_text_from_entity(model: ImageToTextModel) -> AppResult<ImageToText> {
    let images = strings_from_json(model.input_images)?;
    let texts = match model.output_texts {
        Some(json) => strings_from_json(json)?,
        None => Vec::new(),
    };
    Ok(ImageToText {
        id: model.id,
        link: model.link,
        images,
        texts,
    })
}

fn strings_from_json(json: Json) -> AppResult<Vec<String>> {
    serde_json::from_value(json).map_err(|err| AppError::Internal(err.into()))
}

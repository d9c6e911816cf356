use sea_orm::DatabaseConnection;

use crate::clients::image_to_text::ImageToTextClient;

#[derive(Clone)]
pub struct AppState {
    pub orm: DatabaseConnection,
    pub image_to_text: ImageToTextClient,
}

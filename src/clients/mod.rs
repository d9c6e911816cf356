pub mod image_to_text;

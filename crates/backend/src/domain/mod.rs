pub mod category_index;
pub mod form_session;
pub mod json_encoder;
pub mod rebinder;
pub mod serializer;
pub mod suggestions;
pub mod summary;

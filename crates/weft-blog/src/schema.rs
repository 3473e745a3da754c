use weft_core::error::DecodeError;
use weft_core::schema::ContentTypeSchema;
use weft_core::{Result, Schema};

/// Content type definitions the blog models are written against, in the
/// shape the content API returns them.
pub const SCHEMA_JSON: &str = include_str!("schema.json");

/// The blog schema.
pub fn schema() -> Result<Schema> {
    let types: Vec<ContentTypeSchema> =
        serde_json::from_str(SCHEMA_JSON).map_err(|e| DecodeError::new("blog schema", e))?;
    Ok(Schema::new(types))
}

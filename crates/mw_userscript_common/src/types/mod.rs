pub mod module_id;
pub mod output_asset;
pub mod output_bundle;
pub mod output_chunk;
pub mod output_format;
pub mod rendered_chunk;

pub mod config;
pub mod generate_bundle;
pub mod render_chunk;

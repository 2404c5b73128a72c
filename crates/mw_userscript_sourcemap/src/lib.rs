mod lines_count;
mod rewrite_buffer;
mod source;
mod source_joiner;

pub use crate::lines_count::lines_count;
pub use crate::rewrite_buffer::{RewriteBuffer, SourceMapOptions};
pub use crate::source::{Source, SourceMapSource};
pub use crate::source_joiner::SourceJoiner;
pub use oxc_sourcemap::SourceMap;

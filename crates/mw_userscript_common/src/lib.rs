mod build_config;
mod types;

pub use crate::{
  build_config::{
    external::{External, ExternalPredicate},
    lib_config::{LibConfig, LibOptions},
    optimize_deps::OptimizeDepsOptions,
    rollup_options::{RollupOptions, RollupOutputOptions},
    BuildOptions, UserConfig,
  },
  types::{
    module_id::ModuleId,
    output_asset::OutputAsset,
    output_bundle::{Output, OutputBundle},
    output_chunk::OutputChunk,
    output_format::OutputFormat,
    rendered_chunk::RenderedChunk,
  },
};

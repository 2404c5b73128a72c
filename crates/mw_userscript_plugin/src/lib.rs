mod plugin;
mod plugin_context;
mod types;

pub use crate::{
  plugin::{
    HookConfigReturn, HookGenerateBundleReturn, HookLoadReturn, HookRenderChunkReturn,
    HookRenderDynamicImportReturn, HookResolveIdReturn, HookTransformReturn, Plugin,
  },
  plugin_context::PluginContext,
  types::{
    hook_generate_bundle_args::HookGenerateBundleArgs,
    hook_load_args::HookLoadArgs,
    hook_load_output::HookLoadOutput,
    hook_render_chunk_args::HookRenderChunkArgs,
    hook_render_chunk_output::HookRenderChunkOutput,
    hook_render_dynamic_import::{HookRenderDynamicImportArgs, HookRenderDynamicImportOutput},
    hook_resolve_id_args::HookResolveIdArgs,
    hook_resolve_id_output::HookResolveIdOutput,
    hook_transform_args::HookTransformArgs,
    hook_transform_output::HookTransformOutput,
    plugin_order::PluginOrder,
  },
};

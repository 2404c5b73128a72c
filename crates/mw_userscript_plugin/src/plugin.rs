use std::{borrow::Cow, fmt::Debug};

use mw_userscript_common::{OutputBundle, UserConfig};

use crate::{
  HookGenerateBundleArgs, HookLoadArgs, HookLoadOutput, HookRenderChunkArgs,
  HookRenderChunkOutput, HookRenderDynamicImportArgs, HookRenderDynamicImportOutput,
  HookResolveIdArgs, HookResolveIdOutput, HookTransformArgs, HookTransformOutput, PluginContext,
  PluginOrder,
};

pub type HookConfigReturn = anyhow::Result<()>;
pub type HookResolveIdReturn = anyhow::Result<Option<HookResolveIdOutput>>;
pub type HookLoadReturn = anyhow::Result<Option<HookLoadOutput>>;
pub type HookTransformReturn = anyhow::Result<Option<HookTransformOutput>>;
pub type HookRenderDynamicImportReturn = Option<HookRenderDynamicImportOutput>;
pub type HookRenderChunkReturn = anyhow::Result<Option<HookRenderChunkOutput>>;
pub type HookGenerateBundleReturn = anyhow::Result<()>;

/// The hooks a bundler host calls into.
///
/// Every hook has a no-op default, so a plugin only overrides what it needs. The host may call
/// `resolve_id`, `load` and `transform` for different modules in parallel.
pub trait Plugin: Debug + Send + Sync + 'static {
  fn name(&self) -> Cow<'static, str>;

  /// Where the plugin sits relative to the host's own plugins.
  fn enforce(&self) -> Option<PluginOrder> {
    None
  }

  fn config(&self, _ctx: &PluginContext, _config: &mut UserConfig) -> HookConfigReturn {
    Ok(())
  }

  fn resolve_id(&self, _ctx: &PluginContext, _args: &HookResolveIdArgs<'_>) -> HookResolveIdReturn {
    Ok(None)
  }

  fn load(&self, _ctx: &PluginContext, _args: &HookLoadArgs<'_>) -> HookLoadReturn {
    Ok(None)
  }

  fn transform_order(&self) -> Option<PluginOrder> {
    None
  }

  fn transform(&self, _ctx: &PluginContext, _args: &HookTransformArgs<'_>) -> HookTransformReturn {
    Ok(None)
  }

  fn render_dynamic_import(
    &self,
    _ctx: &PluginContext,
    _args: &HookRenderDynamicImportArgs<'_>,
  ) -> HookRenderDynamicImportReturn {
    None
  }

  fn render_chunk(
    &self,
    _ctx: &PluginContext,
    _args: &mut HookRenderChunkArgs<'_>,
  ) -> HookRenderChunkReturn {
    Ok(None)
  }

  fn generate_bundle(
    &self,
    _ctx: &PluginContext,
    _args: &HookGenerateBundleArgs,
    _bundle: &mut OutputBundle,
  ) -> HookGenerateBundleReturn {
    Ok(())
  }
}

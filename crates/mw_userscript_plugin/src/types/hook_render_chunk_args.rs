use arcstr::ArcStr;
use mw_userscript_common::{OutputFormat, RenderedChunk};
use mw_userscript_utils::indexmap::FxIndexMap;

#[derive(Debug)]
pub struct HookRenderChunkArgs<'a> {
  pub code: &'a str,
  pub chunk: &'a mut RenderedChunk,
  pub format: OutputFormat,
  /// Every chunk of this output, keyed by filename.
  pub chunks: &'a FxIndexMap<ArcStr, RenderedChunk>,
}

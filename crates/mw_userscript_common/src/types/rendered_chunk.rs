use arcstr::ArcStr;
use rustc_hash::FxHashMap;

/// The chunk metadata `render_chunk` sees. Plugins may prune `imports` and `imported_bindings`.
#[derive(Debug, Clone, Default)]
pub struct RenderedChunk {
  pub name: ArcStr,
  pub filename: ArcStr,
  pub is_entry: bool,
  /// Filenames of chunks this chunk imports.
  pub imports: Vec<ArcStr>,
  /// Imported chunk filename => names this chunk binds from it.
  pub imported_bindings: FxHashMap<ArcStr, Vec<ArcStr>>,
}

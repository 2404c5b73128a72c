use arcstr::ArcStr;

/// A chunk as it appears in the final bundle handed to `generate_bundle`.
#[derive(Debug, Clone)]
pub struct OutputChunk {
  pub name: ArcStr,
  pub filename: ArcStr,
  pub is_entry: bool,
  pub code: String,
  pub imports: Vec<ArcStr>,
}

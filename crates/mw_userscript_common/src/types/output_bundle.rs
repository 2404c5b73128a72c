use arcstr::ArcStr;
use mw_userscript_utils::indexmap::FxIndexMap;

use crate::{OutputAsset, OutputChunk};

#[derive(Debug, Clone)]
pub enum Output {
  Chunk(Box<OutputChunk>),
  Asset(Box<OutputAsset>),
}

impl Output {
  pub fn filename(&self) -> &str {
    match self {
      Self::Chunk(chunk) => &chunk.filename,
      Self::Asset(asset) => &asset.filename,
    }
  }

  pub fn as_chunk(&self) -> Option<&OutputChunk> {
    match self {
      Self::Chunk(chunk) => Some(chunk),
      Self::Asset(_) => None,
    }
  }
}

/// Everything emitted by one output, keyed by filename in emit order.
pub type OutputBundle = FxIndexMap<ArcStr, Output>;

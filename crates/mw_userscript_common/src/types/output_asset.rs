use arcstr::ArcStr;

#[derive(Debug, Clone)]
pub struct OutputAsset {
  pub filename: ArcStr,
  pub source: String,
}

impl OutputAsset {
  pub fn filename(&self) -> &str {
    &self.filename
  }

  pub fn content_as_bytes(&self) -> &[u8] {
    self.source.as_bytes()
  }
}

use crate::lines_count::lines_count;

pub trait Source {
  fn content(&self) -> &str;
  fn lines_count(&self) -> u32 {
    lines_count(self.content())
  }
}

impl Source for &str {
  fn content(&self) -> &str {
    self
  }
}

impl Source for String {
  fn content(&self) -> &str {
    self
  }
}

/// Generated code that already carries a source map, e.g. the output of a [`crate::RewriteBuffer`].
#[derive(Debug)]
pub struct SourceMapSource {
  content: String,
  map: Option<oxc_sourcemap::SourceMap>,
}

impl SourceMapSource {
  pub fn new(content: String, map: Option<oxc_sourcemap::SourceMap>) -> Self {
    Self { content, map }
  }

  pub fn map(&self) -> Option<&oxc_sourcemap::SourceMap> {
    self.map.as_ref()
  }

  pub fn into_parts(self) -> (String, Option<oxc_sourcemap::SourceMap>) {
    (self.content, self.map)
  }
}

impl Source for SourceMapSource {
  fn content(&self) -> &str {
    &self.content
  }
}

use std::{collections::BTreeMap, ops::Range};

use mw_userscript_error::UserscriptError;
use oxc_sourcemap::SourceMap;
use string_wizard::MagicString;

use crate::source::SourceMapSource;

type EditResult<'a, 'text> = Result<&'a mut RewriteBuffer<'text>, UserscriptError>;

#[derive(Debug, Clone)]
pub struct SourceMapOptions {
  /// Name of the original source, e.g. the module id.
  pub source: String,
  pub include_content: bool,
}

impl SourceMapOptions {
  pub fn new(source: impl Into<String>) -> Self {
    Self { source: source.into(), include_content: true }
  }
}

/// A position-preserving overlay over some original text, backed by [`MagicString`].
///
/// Every offset passed in is a byte offset into the *original* text, no matter how many edits
/// have been applied already.
///
/// An original span can be replaced or removed only once, and nothing can be inserted inside a
/// replaced span. Moved spans must not overlap each other. Breaking any of these fails with
/// [`UserscriptError::OverlappingEdit`] and leaves the buffer untouched.
#[derive(Debug)]
pub struct RewriteBuffer<'text> {
  original: &'text str,
  magic: MagicString<'text>,
  /// Replaced or removed spans, `start -> end`. Never overlapping.
  edited: BTreeMap<usize, usize>,
  /// Relocated spans, `start -> end`. Never overlapping.
  relocated: BTreeMap<usize, usize>,
}

impl<'text> RewriteBuffer<'text> {
  pub fn new(original: &'text str) -> Self {
    Self {
      original,
      magic: MagicString::new(original),
      edited: BTreeMap::new(),
      relocated: BTreeMap::new(),
    }
  }

  pub fn original(&self) -> &'text str {
    self.original
  }

  pub fn append_left(&mut self, index: usize, content: &str) -> EditResult<'_, 'text> {
    self.check_insertion(index)?;
    self.magic.append_left(index, content.to_string());
    Ok(self)
  }

  pub fn prepend_left(&mut self, index: usize, content: &str) -> EditResult<'_, 'text> {
    self.check_insertion(index)?;
    self.magic.prepend_left(index, content.to_string());
    Ok(self)
  }

  pub fn append_right(&mut self, index: usize, content: &str) -> EditResult<'_, 'text> {
    self.check_insertion(index)?;
    self.magic.append_right(index, content.to_string());
    Ok(self)
  }

  pub fn prepend_right(&mut self, index: usize, content: &str) -> EditResult<'_, 'text> {
    self.check_insertion(index)?;
    self.magic.prepend_right(index, content.to_string());
    Ok(self)
  }

  /// Replaces `start..end` with `content`. Text attached to the span's edges survives.
  pub fn update(&mut self, start: usize, end: usize, content: &str) -> EditResult<'_, 'text> {
    self.check_range(start, end)?;
    if start == end {
      return Err(UserscriptError::InvalidRange { start, end, len: self.original.len() });
    }
    self.check_replacement(start, end)?;
    self.edited.insert(start, end);
    self.magic.update(start, end, content.to_string());
    Ok(self)
  }

  pub fn remove(&mut self, start: usize, end: usize) -> EditResult<'_, 'text> {
    self.check_range(start, end)?;
    if start == end {
      return Ok(self);
    }
    self.check_replacement(start, end)?;
    self.edited.insert(start, end);
    self.magic.remove(start, end);
    Ok(self)
  }

  /// Moves `start..end`, together with its attached text, so that it is emitted at `index`.
  pub fn relocate(&mut self, start: usize, end: usize, index: usize) -> EditResult<'_, 'text> {
    self.check_range(start, end)?;
    self.check_range(index, index)?;
    if start == end {
      return Ok(self);
    }
    if (start..=end).contains(&index) {
      return Err(UserscriptError::InvalidRelocation { start, end, index });
    }
    for at in [start, end, index] {
      if let Some(span) = intersecting(&self.edited, at, at) {
        return Err(overlapping(span));
      }
    }
    if let Some(span) = intersecting(&self.relocated, start, end) {
      return Err(overlapping(span));
    }
    if let Some(span) = intersecting(&self.relocated, index, index) {
      return Err(overlapping(span));
    }
    self.relocated.insert(start, end);
    self.magic.relocate(start, end, index);
    Ok(self)
  }

  pub fn source_map(&self, options: &SourceMapOptions) -> SourceMap {
    self.magic.source_map(string_wizard::SourceMapOptions {
      source: options.source.as_str().into(),
      include_content: options.include_content,
      ..Default::default()
    })
  }

  /// Resolves the overlay into code and, when asked for, a source map.
  pub fn finish(self, options: Option<&SourceMapOptions>) -> SourceMapSource {
    let map = options.map(|options| self.source_map(options));
    SourceMapSource::new(self.magic.to_string(), map)
  }

  fn check_range(&self, start: usize, end: usize) -> Result<(), UserscriptError> {
    let len = self.original.len();
    if start > end
      || end > len
      || !self.original.is_char_boundary(start)
      || !self.original.is_char_boundary(end)
    {
      return Err(UserscriptError::InvalidRange { start, end, len });
    }
    Ok(())
  }

  fn check_insertion(&self, index: usize) -> Result<(), UserscriptError> {
    self.check_range(index, index)?;
    match intersecting(&self.edited, index, index) {
      Some(span) => Err(overlapping(span)),
      None => Ok(()),
    }
  }

  fn check_replacement(&self, start: usize, end: usize) -> Result<(), UserscriptError> {
    if let Some(span) = intersecting(&self.edited, start, end) {
      return Err(overlapping(span));
    }
    // Either inside a single moved span or clear of all of them
    match intersecting(&self.relocated, start, end) {
      Some(span) if span.start > start || span.end < end => Err(overlapping(span)),
      _ => Ok(()),
    }
  }
}

impl std::fmt::Display for RewriteBuffer<'_> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.magic.to_string())
  }
}

/// The last span of `spans` that shares a byte with `start..end`, or, for an empty range,
/// that has `start` strictly inside it.
fn intersecting(spans: &BTreeMap<usize, usize>, start: usize, end: usize) -> Option<Range<usize>> {
  spans
    .range(..end)
    .next_back()
    .filter(|(_, &span_end)| span_end > start)
    .map(|(&span_start, &span_end)| span_start..span_end)
}

fn overlapping(span: Range<usize>) -> UserscriptError {
  UserscriptError::OverlappingEdit { start: span.start, end: span.end }
}

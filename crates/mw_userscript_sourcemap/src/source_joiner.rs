use crate::source::Source;

/// Joins sources with a `\n` between each pair.
#[derive(Default)]
pub struct SourceJoiner<'source> {
  sources: Vec<Box<dyn Source + Send + 'source>>,
}

impl<'source> SourceJoiner<'source> {
  pub fn append_source<T: Source + Send + 'source>(&mut self, source: T) {
    self.sources.push(Box::new(source));
  }

  /// Zero-based line the next appended source would start on.
  pub fn lines_count(&self) -> u32 {
    let separators = u32::try_from(self.sources.len().saturating_sub(1)).unwrap_or(u32::MAX);
    self.sources.iter().map(|source| source.lines_count()).sum::<u32>() + separators
  }

  pub fn join(&self) -> String {
    let separators = self.sources.len().saturating_sub(1);
    let len = self.sources.iter().map(|source| source.content().len()).sum::<usize>() + separators;

    let mut joined = String::with_capacity(len);
    for (nth, source) in self.sources.iter().enumerate() {
      if nth > 0 {
        joined.push('\n');
      }
      joined.push_str(source.content());
    }
    joined
  }
}

#[test]
fn test_join() {
  let mut joiner = SourceJoiner::default();
  assert_eq!(joiner.join(), "");

  joiner.append_source("// <nowiki>\n(function () {\n");
  assert_eq!(joiner.lines_count(), 2);
  joiner.append_source(String::from("a();\nb();"));
  joiner.append_source("\n})();");

  assert_eq!(joiner.join(), "// <nowiki>\n(function () {\n\na();\nb();\n\n})();");
  assert_eq!(joiner.lines_count(), 6);
}

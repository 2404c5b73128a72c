#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OptimizeDepsOptions {
  /// Files the dependency scanner starts crawling from.
  pub entries: Option<Vec<String>>,
  /// Dependencies the pre-bundler must not touch.
  pub exclude: Option<Vec<String>>,
}

#[derive(Debug)]
pub struct HookResolveIdArgs<'a> {
  pub source: &'a str,
  /// `None` for entry points.
  pub importer: Option<&'a str>,
  pub is_entry: bool,
}

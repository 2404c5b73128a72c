#[derive(Debug)]
pub struct HookRenderDynamicImportArgs<'a> {
  pub module_id: &'a str,
  pub target_module_id: Option<&'a str>,
}

/// Text printed around the argument of a dynamic `import()`, replacing `import(` and `)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookRenderDynamicImportOutput {
  pub left: String,
  pub right: String,
}

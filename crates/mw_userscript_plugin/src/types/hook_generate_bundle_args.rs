use mw_userscript_common::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct HookGenerateBundleArgs {
  pub format: OutputFormat,
  pub is_write: bool,
}

use mw_userscript_sourcemap::SourceMap;

#[derive(Debug)]
pub struct HookTransformOutput {
  pub code: String,
  pub map: Option<SourceMap>,
}

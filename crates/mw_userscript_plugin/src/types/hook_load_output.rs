#[derive(Debug, Default)]
pub struct HookLoadOutput {
  pub code: String,
}

use arcstr::ArcStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookResolveIdOutput {
  pub id: ArcStr,
  pub external: Option<bool>,
}

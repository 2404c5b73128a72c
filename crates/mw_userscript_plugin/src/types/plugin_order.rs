#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginOrder {
  Pre,
  Post,
}

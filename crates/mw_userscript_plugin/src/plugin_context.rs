use std::sync::Mutex;

/// Shared by every hook call of one build. Collects the warnings plugins report.
#[derive(Debug, Default)]
pub struct PluginContext {
  warnings: Mutex<Vec<anyhow::Error>>,
}

impl PluginContext {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn warn(&self, plugin_name: &str, warning: impl Into<anyhow::Error>) {
    let warning = warning.into().context(format!("[{plugin_name}]"));
    tracing::warn!("{warning:#}");
    self.warnings.lock().unwrap_or_else(std::sync::PoisonError::into_inner).push(warning);
  }

  pub fn take_warnings(&self) -> Vec<anyhow::Error> {
    std::mem::take(&mut *self.warnings.lock().unwrap_or_else(std::sync::PoisonError::into_inner))
  }
}

#[test]
fn test_warnings_are_collected_once() {
  let ctx = PluginContext::new();
  ctx.warn("mediawiki-userscript", anyhow::anyhow!("lib already set"));

  let warnings = ctx.take_warnings();
  assert_eq!(warnings.len(), 1);
  assert_eq!(format!("{:#}", warnings[0]), "[mediawiki-userscript]: lib already set");
  assert!(ctx.take_warnings().is_empty());
}

pub mod external;
pub mod lib_config;
pub mod optimize_deps;
pub mod rollup_options;

use crate::{LibConfig, OptimizeDepsOptions, RollupOptions};

/// The host's user-facing build configuration, as it stands when the `config` hook runs.
///
/// `None` means the user left the option unset, which is different from an explicit value.
#[derive(Debug, Default, Clone)]
pub struct UserConfig {
  pub build: Option<BuildOptions>,
  pub optimize_deps: Option<OptimizeDepsOptions>,
}

#[derive(Debug, Default, Clone)]
pub struct BuildOptions {
  pub rollup_options: Option<RollupOptions>,
  /// Transpile target, e.g. `es6`.
  pub target: Option<String>,
  pub css_code_split: Option<bool>,
  /// Library mode. Forces the build to emit a single file per format.
  pub lib: Option<LibConfig>,
}

impl UserConfig {
  pub fn build_mut(&mut self) -> &mut BuildOptions {
    self.build.get_or_insert_with(BuildOptions::default)
  }

  pub fn optimize_deps_mut(&mut self) -> &mut OptimizeDepsOptions {
    self.optimize_deps.get_or_insert_with(OptimizeDepsOptions::default)
  }
}

impl BuildOptions {
  pub fn rollup_options_mut(&mut self) -> &mut RollupOptions {
    self.rollup_options.get_or_insert_with(RollupOptions::default)
  }
}

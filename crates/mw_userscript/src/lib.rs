mod externals;
mod hooks;
mod import_rewriter;
mod options;
mod plugin;
mod utils;
mod virtual_module;
mod wrap;

pub use crate::{
  externals::{
    module_name_of, ExternalizedModule, Externals, SERVED_VIRTUAL_ID_PREFIX, VIRTUAL_ID_PREFIX,
  },
  import_rewriter::{
    rewrite_external_imports, runtime_require, scan_external_imports, AliasBinding, ImportMatch,
  },
  options::{normalized_plugin_options::NormalizedPluginOptions, PluginOptions},
  plugin::{MediawikiUserscript, PLUGIN_NAME},
  utils::normalize_options::normalize_options,
  virtual_module::render_virtual_module,
  wrap::{wrap, DEFAULT_TEMPLATE},
};
pub use mw_userscript_common::*;
pub use mw_userscript_plugin::*;

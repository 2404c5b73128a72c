use std::num::NonZeroU64;

use crate::{
  externals::Externals,
  options::{normalized_plugin_options::NormalizedPluginOptions, PluginOptions},
};

pub fn normalize_options(raw_options: PluginOptions) -> NormalizedPluginOptions {
  let using = raw_options.using.unwrap_or_default();
  let externals = Externals::from_using(&using);

  let base_url = match raw_options.base_url {
    Some(url) if !url.is_empty() && !url.ends_with('/') => url + "/",
    Some(url) => url,
    None => String::new(),
  };

  NormalizedPluginOptions {
    name: raw_options.name,
    entry: raw_options.entry,
    template: raw_options.template,
    banner: raw_options.banner,
    footer: raw_options.footer,
    using,
    externals,
    ignore_build_options: raw_options.ignore_build_options.unwrap_or(false),
    resource_loader_debug_cookie_age: raw_options
      .resource_loader_debug_cookie_age
      .and_then(NonZeroU64::new),
    esm_chunks: raw_options.esm_chunks.unwrap_or(false),
    esm_unhoist_chunks: raw_options.esm_unhoist_chunks,
    base_url,
  }
}

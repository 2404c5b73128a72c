pub mod normalized_plugin_options;

use serde::Deserialize;

/// Options as the user writes them, e.g. in `mw-userscript.json`.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PluginOptions {
  /// Name of the userscript. Used for the bundle name.
  pub name: String,

  /// Entrypoint of the userscript.
  pub entry: String,

  /// Template the bundle is wrapped in. These placeholders are substituted:
  ///
  /// - `'script'`: the userscript code. Must appear exactly once, on its own line, inside a
  ///   function that has `require` in scope.
  /// - `'modules'`: a JSON array of the ResourceLoader modules in `using`.
  /// - `'header'`: the banner, if any.
  /// - `'footer'`: the footer, if any.
  ///
  /// Falls back to a template that runs the script inside `mw.loader.using`.
  pub template: Option<String>,

  /// Banner text. Every line is turned into a `//` comment.
  pub banner: Option<String>,

  /// Footer text. Every line is turned into a `//` comment.
  pub footer: Option<String>,

  /// ResourceLoader modules the userscript requires at runtime.
  ///
  /// Modules listed here are not bundled; imports of them are rewritten to ResourceLoader's
  /// `require`. Anything not listed is bundled, which may duplicate code MediaWiki already
  /// ships. Listing `vue` also covers every `@vue/*` package.
  pub using: Option<Vec<String>>,

  /// Silences the warning emitted when `build.lib` is already configured.
  pub ignore_build_options: Option<bool>,

  /// max-age in seconds of the `resourceLoaderDebug` cookie. `0` or unset skips the cookie.
  ///
  /// Debug mode makes ResourceLoader serve the development build of Vue, which hot module
  /// reloading needs.
  pub resource_loader_debug_cookie_age: Option<u64>,

  /// Emit chunks as ESM instead of CommonJS. Dynamic imports in the main chunk are kept.
  pub esm_chunks: Option<bool>,

  /// Chunks whose hoisted top-level `require()` calls are stripped from the main chunk so they
  /// can be loaded through a dynamic `import()` instead.
  pub esm_unhoist_chunks: Option<Vec<String>>,

  /// Base URL prepended to dynamically imported chunks, e.g. `https://example.com/`.
  pub base_url: Option<String>,
}

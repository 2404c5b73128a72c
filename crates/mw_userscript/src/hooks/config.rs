use std::sync::Arc;

use mw_userscript_common::{
  External, LibConfig, LibOptions, OutputFormat, RollupOutputOptions, UserConfig,
};
use mw_userscript_error::UserscriptError;
use mw_userscript_plugin::PluginContext;

use crate::{options::normalized_plugin_options::NormalizedPluginOptions, plugin::PLUGIN_NAME};

const DEFAULT_TARGET: &str = "es6";
const CHUNK_FILE_NAMES: &str = "[name].js";

/// Merges what the userscript build needs into the user's config, keeping explicit user choices.
pub fn merge_config(
  ctx: &PluginContext,
  options: &NormalizedPluginOptions,
  config: &mut UserConfig,
) {
  let externals = options.externals.to_vec();

  let build = config.build_mut();
  let rollup_options = build.rollup_options_mut();
  rollup_options.external = Some(merge_external(rollup_options.external.take(), &externals));

  if options.esm_chunks {
    rollup_options.output = Some(RollupOutputOptions {
      chunk_file_names: Some(CHUNK_FILE_NAMES.to_string()),
      minify_internal_exports: Some(false),
      ..rollup_options.output.take().unwrap_or_default()
    });
  }

  build.target.get_or_insert_with(|| DEFAULT_TARGET.to_string());
  build.css_code_split.get_or_insert(true);

  if build.lib.is_some() && !options.ignore_build_options {
    ctx.warn(PLUGIN_NAME, UserscriptError::LibAlreadyConfigured);
    return;
  }
  if build.lib.as_ref().is_some_and(LibConfig::is_enabled) {
    return;
  }

  let optimize_deps = config.optimize_deps_mut();
  let first_entry = optimize_deps.entries.as_ref().and_then(|entries| entries.first()).cloned();
  if first_entry.is_none() {
    optimize_deps.entries = Some(vec![options.entry.clone()]);
  }
  optimize_deps.exclude.get_or_insert_with(Vec::new).extend(externals);

  let mut formats = vec![OutputFormat::Cjs];
  if options.esm_chunks {
    formats.push(OutputFormat::Esm);
  }
  config.build_mut().lib = Some(LibConfig::Enabled(LibOptions {
    entry: first_entry.unwrap_or_else(|| options.entry.clone()),
    name: options.name.clone(),
    file_name: options.name.clone(),
    formats,
  }));
}

fn merge_external(external: Option<External>, externals: &[String]) -> External {
  match external {
    Some(External::Names(mut names)) => {
      names.extend_from_slice(externals);
      External::Names(names)
    }
    Some(External::Predicate(predicate)) => {
      let externals = externals.to_vec();
      External::Predicate(Arc::new(move |source, importer, is_resolved| {
        predicate(source, importer, is_resolved) || externals.iter().any(|name| name == source)
      }))
    }
    Some(External::Name(name)) => {
      External::Names(std::iter::once(name).chain(externals.iter().cloned()).collect())
    }
    None => External::Names(externals.to_vec()),
  }
}

#[cfg(test)]
mod tests {
  use mw_userscript_common::{BuildOptions, OptimizeDepsOptions, RollupOptions};

  use super::*;
  use crate::{options::PluginOptions, utils::normalize_options::normalize_options};

  fn options(raw: PluginOptions) -> NormalizedPluginOptions {
    normalize_options(PluginOptions {
      name: "gadget".into(),
      entry: "src/main.ts".into(),
      using: Some(vec!["vue".into(), "mediawiki.api".into()]),
      ..raw
    })
  }

  fn with_external(external: Option<External>) -> UserConfig {
    UserConfig {
      build: Some(BuildOptions {
        rollup_options: Some(RollupOptions { external, output: None }),
        ..Default::default()
      }),
      optimize_deps: None,
    }
  }

  fn merged_external(config: &UserConfig) -> &External {
    config.build.as_ref().unwrap().rollup_options.as_ref().unwrap().external.as_ref().unwrap()
  }

  fn names(external: &External) -> Vec<&str> {
    match external {
      External::Names(names) => names.iter().map(String::as_str).collect(),
      other => panic!("expected a list of names, got {other:?}"),
    }
  }

  #[test]
  fn empty_config() {
    let ctx = PluginContext::new();
    let mut config = UserConfig::default();
    merge_config(&ctx, &options(PluginOptions::default()), &mut config);

    assert_eq!(names(merged_external(&config)), ["vue", "mediawiki.api", "@vue"]);
    let build = config.build.as_ref().unwrap();
    assert_eq!(build.target.as_deref(), Some("es6"));
    assert_eq!(build.css_code_split, Some(true));
    assert_eq!(build.rollup_options.as_ref().unwrap().output, None);
    assert_eq!(
      build.lib,
      Some(LibConfig::Enabled(LibOptions {
        entry: "src/main.ts".into(),
        name: "gadget".into(),
        file_name: "gadget".into(),
        formats: vec![OutputFormat::Cjs],
      }))
    );
    assert_eq!(
      config.optimize_deps,
      Some(OptimizeDepsOptions {
        entries: Some(vec!["src/main.ts".into()]),
        exclude: Some(vec!["vue".into(), "mediawiki.api".into(), "@vue".into()]),
      })
    );
    assert!(ctx.take_warnings().is_empty());
  }

  #[test]
  fn external_list_and_single_name_are_extended() {
    let ctx = PluginContext::new();
    let options = options(PluginOptions::default());

    let mut config = with_external(Some(External::Names(vec!["jquery".into()])));
    merge_config(&ctx, &options, &mut config);
    assert_eq!(names(merged_external(&config)), ["jquery", "vue", "mediawiki.api", "@vue"]);

    let mut config = with_external(Some(External::Name("jquery".into())));
    merge_config(&ctx, &options, &mut config);
    assert_eq!(names(merged_external(&config)), ["jquery", "vue", "mediawiki.api", "@vue"]);
  }

  #[test]
  fn external_predicate_is_or_ed() {
    let ctx = PluginContext::new();
    let mut config = with_external(Some(External::Predicate(Arc::new(|source, _, _| {
      source.starts_with("node:")
    }))));
    merge_config(&ctx, &options(PluginOptions::default()), &mut config);

    let external = merged_external(&config);
    assert!(matches!(external, External::Predicate(_)));
    assert!(external.is_external("node:fs", None, false));
    assert!(external.is_external("mediawiki.api", Some("src/main.ts"), false));
    assert!(!external.is_external("lodash", Some("src/main.ts"), false));
  }

  #[test]
  fn esm_chunks_adjust_output_and_formats() {
    let ctx = PluginContext::new();
    let mut config = UserConfig::default();
    config.build_mut().rollup_options_mut().output = Some(RollupOutputOptions {
      entry_file_names: Some("[name].cjs".into()),
      minify_internal_exports: Some(true),
      ..Default::default()
    });
    let options = options(PluginOptions { esm_chunks: Some(true), ..Default::default() });
    merge_config(&ctx, &options, &mut config);

    let build = config.build.as_ref().unwrap();
    assert_eq!(
      build.rollup_options.as_ref().unwrap().output,
      Some(RollupOutputOptions {
        chunk_file_names: Some("[name].js".into()),
        minify_internal_exports: Some(false),
        entry_file_names: Some("[name].cjs".into()),
      })
    );
    let lib = build.lib.as_ref().and_then(LibConfig::as_options).unwrap();
    assert_eq!(lib.formats, [OutputFormat::Cjs, OutputFormat::Esm]);
  }

  #[test]
  fn explicit_build_options_are_kept() {
    let ctx = PluginContext::new();
    let mut config = UserConfig::default();
    config.build_mut().target = Some("es2020".into());
    config.build_mut().css_code_split = Some(false);
    merge_config(&ctx, &options(PluginOptions::default()), &mut config);

    let build = config.build.as_ref().unwrap();
    assert_eq!(build.target.as_deref(), Some("es2020"));
    assert_eq!(build.css_code_split, Some(false));
  }

  #[test]
  fn optimize_deps_entry_wins() {
    let ctx = PluginContext::new();
    let mut config = UserConfig {
      build: None,
      optimize_deps: Some(OptimizeDepsOptions {
        entries: Some(vec!["src/index.ts".into(), "src/other.ts".into()]),
        exclude: Some(vec!["lodash".into()]),
      }),
    };
    merge_config(&ctx, &options(PluginOptions::default()), &mut config);

    let lib = config.build.as_ref().unwrap().lib.as_ref().and_then(LibConfig::as_options).unwrap();
    assert_eq!(lib.entry, "src/index.ts");
    let optimize_deps = config.optimize_deps.unwrap();
    assert_eq!(optimize_deps.entries, Some(vec!["src/index.ts".into(), "src/other.ts".into()]));
    assert_eq!(
      optimize_deps.exclude,
      Some(vec!["lodash".into(), "vue".into(), "mediawiki.api".into(), "@vue".into()])
    );
  }

  #[test]
  fn existing_lib_is_left_alone_with_a_warning() {
    let ctx = PluginContext::new();
    let existing = LibConfig::Enabled(LibOptions {
      entry: "lib.ts".into(),
      name: "Lib".into(),
      file_name: "lib".into(),
      formats: vec![OutputFormat::Esm],
    });
    let mut config = UserConfig::default();
    config.build_mut().lib = Some(existing.clone());
    merge_config(&ctx, &options(PluginOptions::default()), &mut config);

    assert_eq!(config.build.as_ref().unwrap().lib, Some(existing));
    assert_eq!(config.optimize_deps, None);
    let warnings = ctx.take_warnings();
    assert_eq!(warnings.len(), 1);
    assert_eq!(
      warnings[0].downcast_ref::<UserscriptError>(),
      Some(&UserscriptError::LibAlreadyConfigured)
    );
  }

  #[test]
  fn ignore_build_options_silences_the_warning() {
    let ctx = PluginContext::new();
    let options = options(PluginOptions { ignore_build_options: Some(true), ..Default::default() });

    let mut config = UserConfig::default();
    config.build_mut().lib = Some(LibConfig::Enabled(LibOptions {
      entry: "lib.ts".into(),
      name: "Lib".into(),
      file_name: "lib".into(),
      formats: vec![OutputFormat::Esm],
    }));
    merge_config(&ctx, &options, &mut config);
    let lib = config.build.as_ref().unwrap().lib.as_ref().and_then(LibConfig::as_options).unwrap();
    assert_eq!(lib.name, "Lib");

    // An explicitly disabled lib is replaced
    let mut config = UserConfig::default();
    config.build_mut().lib = Some(LibConfig::Disabled);
    merge_config(&ctx, &options, &mut config);
    let lib = config.build.as_ref().unwrap().lib.as_ref().and_then(LibConfig::as_options).unwrap();
    assert_eq!(lib.name, "gadget");

    assert!(ctx.take_warnings().is_empty());
  }
}

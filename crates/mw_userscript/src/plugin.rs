use std::borrow::Cow;

use dashmap::DashSet;
use mw_userscript_common::{ModuleId, OutputBundle, UserConfig};
use mw_userscript_plugin::{
  HookConfigReturn, HookGenerateBundleArgs, HookGenerateBundleReturn, HookLoadArgs,
  HookLoadOutput, HookLoadReturn, HookRenderChunkArgs, HookRenderChunkReturn,
  HookRenderDynamicImportArgs, HookRenderDynamicImportOutput, HookRenderDynamicImportReturn,
  HookResolveIdArgs, HookResolveIdOutput, HookResolveIdReturn, HookTransformArgs,
  HookTransformOutput, HookTransformReturn, Plugin, PluginContext, PluginOrder,
};
use mw_userscript_utils::{concat_string, ecmascript::to_js_string_literal};

use crate::{
  externals::ExternalizedModule,
  hooks::{
    config::merge_config, generate_bundle::finalize_bundle, render_chunk::render_main_chunk,
  },
  import_rewriter::rewrite_external_imports,
  options::{normalized_plugin_options::NormalizedPluginOptions, PluginOptions},
  utils::normalize_options::normalize_options,
  virtual_module::render_virtual_module,
};

pub const PLUGIN_NAME: &str = "mediawiki-userscript";

/// Builds a MediaWiki userscript: modules listed in `using` are loaded through ResourceLoader at
/// runtime, and the bundle is wrapped in the userscript template.
#[derive(Debug)]
pub struct MediawikiUserscript {
  options: NormalizedPluginOptions,
  /// Modules that import at least one externalized module.
  importers: DashSet<ModuleId>,
}

impl MediawikiUserscript {
  pub fn new(options: PluginOptions) -> Self {
    Self { options: normalize_options(options), importers: DashSet::default() }
  }

  pub fn options(&self) -> &NormalizedPluginOptions {
    &self.options
  }

  pub fn is_importer(&self, id: &str) -> bool {
    self.importers.contains(id)
  }
}

impl Plugin for MediawikiUserscript {
  fn name(&self) -> Cow<'static, str> {
    Cow::Borrowed(PLUGIN_NAME)
  }

  fn enforce(&self) -> Option<PluginOrder> {
    Some(PluginOrder::Pre)
  }

  fn config(&self, ctx: &PluginContext, config: &mut UserConfig) -> HookConfigReturn {
    merge_config(ctx, &self.options, config);
    Ok(())
  }

  fn resolve_id(&self, _ctx: &PluginContext, args: &HookResolveIdArgs<'_>) -> HookResolveIdReturn {
    let Some(module) = self.options.externals.resolve(args.source) else {
      return Ok(None);
    };
    if let Some(importer) = args.importer {
      self.importers.insert(importer.into());
    }
    tracing::debug!("Externalized {} imported by {:?}", args.source, args.importer);
    Ok(Some(HookResolveIdOutput { id: module.virtual_id, external: None }))
  }

  fn load(&self, _ctx: &PluginContext, args: &HookLoadArgs<'_>) -> HookLoadReturn {
    Ok(ExternalizedModule::from_virtual_id(args.id).map(|module| HookLoadOutput {
      code: render_virtual_module(&module.name, self.options.resource_loader_debug_cookie_age),
    }))
  }

  /// Runs after the host has turned the module into the fixed import syntax it rewrites.
  fn transform_order(&self) -> Option<PluginOrder> {
    Some(PluginOrder::Post)
  }

  fn transform(&self, _ctx: &PluginContext, args: &HookTransformArgs<'_>) -> HookTransformReturn {
    if !self.is_importer(args.id) {
      return Ok(None);
    }
    let Some(rewritten) = rewrite_external_imports(args.id, args.code)? else {
      return Ok(None);
    };
    let (code, map) = rewritten.into_parts();
    Ok(Some(HookTransformOutput { code, map }))
  }

  fn render_dynamic_import(
    &self,
    _ctx: &PluginContext,
    _args: &HookRenderDynamicImportArgs<'_>,
  ) -> HookRenderDynamicImportReturn {
    self.options.esm_chunks.then(|| HookRenderDynamicImportOutput {
      left: concat_string!("import(", to_js_string_literal(&self.options.base_url), " + "),
      right: ")".to_string(),
    })
  }

  fn render_chunk(
    &self,
    _ctx: &PluginContext,
    args: &mut HookRenderChunkArgs<'_>,
  ) -> HookRenderChunkReturn {
    Ok(render_main_chunk(&self.options, args)?)
  }

  fn generate_bundle(
    &self,
    _ctx: &PluginContext,
    args: &HookGenerateBundleArgs,
    bundle: &mut OutputBundle,
  ) -> HookGenerateBundleReturn {
    Ok(finalize_bundle(&self.options, args.format, bundle)?)
  }
}

#[cfg(test)]
mod tests {
  use mw_userscript_common::OutputFormat;

  use super::*;

  fn plugin(raw: PluginOptions) -> MediawikiUserscript {
    MediawikiUserscript::new(PluginOptions {
      name: "gadget".into(),
      entry: "src/main.ts".into(),
      using: Some(vec!["vue".into(), "@wikimedia/codex".into()]),
      ..raw
    })
  }

  fn resolve(
    plugin: &MediawikiUserscript,
    source: &str,
    importer: &str,
  ) -> Option<HookResolveIdOutput> {
    let args = HookResolveIdArgs { source, importer: Some(importer), is_entry: false };
    plugin.resolve_id(&PluginContext::new(), &args).unwrap()
  }

  fn transform(plugin: &MediawikiUserscript, id: &str, code: &str) -> Option<HookTransformOutput> {
    plugin.transform(&PluginContext::new(), &HookTransformArgs { id, code }).unwrap()
  }

  #[test]
  fn hook_ordering() {
    let plugin = plugin(PluginOptions::default());
    assert_eq!(plugin.name(), "mediawiki-userscript");
    assert_eq!(plugin.enforce(), Some(PluginOrder::Pre));
    assert_eq!(plugin.transform_order(), Some(PluginOrder::Post));
  }

  #[test]
  fn externals_resolve_to_virtual_ids() {
    let plugin = plugin(PluginOptions::default());

    let resolved = resolve(&plugin, "@vue/runtime-core", "node_modules/vue/index.mjs").unwrap();
    assert_eq!(resolved.id, "\0mw-userscript:@vue/runtime-core");
    assert_eq!(
      resolve(&plugin, "@wikimedia/codex", "src/App.vue").map(|resolved| resolved.id),
      Some("\0mw-userscript:@wikimedia/codex".into())
    );
    assert_eq!(resolve(&plugin, "lodash", "src/main.ts"), None);

    assert!(plugin.is_importer("src/App.vue"));
    assert!(plugin.is_importer("node_modules/vue/index.mjs"));
    assert!(!plugin.is_importer("src/main.ts"));
  }

  #[test]
  fn virtual_ids_load_through_resource_loader() {
    let plugin = plugin(PluginOptions::default());
    let load = |id| plugin.load(&PluginContext::new(), &HookLoadArgs { id }).unwrap();

    let loaded = load("\0mw-userscript:@wikimedia/codex").unwrap();
    assert!(loaded.code.starts_with("const __mw_module = (await mw.loader.using(\"@wikimedia/"));
    assert!(load("/@id/__x00__mw-userscript:vue").unwrap().code.contains("__VUE_HMR_RUNTIME__"));
    assert!(load("src/main.ts").is_none());
  }

  #[test]
  fn only_importers_are_transformed() {
    let plugin = plugin(PluginOptions::default());
    let code = "import { ref } from \"/@id/__x00__mw-userscript:vue\";\nref(0);\n";

    assert!(transform(&plugin, "src/App.vue", code).is_none());

    resolve(&plugin, "vue", "src/App.vue");
    let output = transform(&plugin, "src/App.vue", code).unwrap();
    assert_eq!(
      output.code,
      "const __mw_module0 = require(\"vue\");const { ref } = __mw_module0;\nref(0);\n"
    );
    assert!(output.map.is_some());

    assert!(transform(&plugin, "src/App.vue", "console.log(1);").is_none());
  }

  #[test]
  fn malformed_imports_fail_the_transform() {
    let plugin = plugin(PluginOptions::default());
    resolve(&plugin, "vue", "src/App.vue");
    let err = plugin
      .transform(&PluginContext::new(), &HookTransformArgs {
        id: "src/App.vue",
        code: "import { ref as } from \"\0mw-userscript:vue\";",
      })
      .unwrap_err();
    assert!(err.to_string().contains("`{ ref as }`"), "{err}");
  }

  #[test]
  fn dynamic_imports_are_prefixed_with_the_base_url() {
    let ctx = PluginContext::new();
    let args = HookRenderDynamicImportArgs { module_id: "src/main.ts", target_module_id: None };

    let plugin = plugin(PluginOptions {
      esm_chunks: Some(true),
      base_url: Some("https://example.com/gadget".into()),
      ..Default::default()
    });
    assert_eq!(
      plugin.render_dynamic_import(&ctx, &args),
      Some(HookRenderDynamicImportOutput {
        left: "import(\"https://example.com/gadget/\" + ".into(),
        right: ")".into(),
      })
    );

    let plugin = self::plugin(PluginOptions::default());
    assert_eq!(plugin.render_dynamic_import(&ctx, &args), None);
  }

  #[test]
  fn generate_bundle_wraps_the_entry() {
    let plugin = plugin(PluginOptions::default());
    let mut bundle = OutputBundle::default();
    bundle.insert(
      "gadget.cjs".into(),
      mw_userscript_common::Output::Chunk(Box::new(mw_userscript_common::OutputChunk {
        name: "gadget".into(),
        filename: "gadget.cjs".into(),
        is_entry: true,
        code: "main();".into(),
        imports: vec![],
      })),
    );
    let args = HookGenerateBundleArgs { format: OutputFormat::Cjs, is_write: true };
    plugin.generate_bundle(&PluginContext::new(), &args, &mut bundle).unwrap();

    let code = &bundle["gadget.cjs"].as_chunk().unwrap().code;
    assert!(code.contains("mw.loader.using( [\n\t\"vue\",\n\t\"@wikimedia/codex\"\n], function"));
    assert!(code.contains("\nmain();\n"));
  }
}

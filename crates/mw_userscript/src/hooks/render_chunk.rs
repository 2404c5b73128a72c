use std::sync::LazyLock;

use arcstr::ArcStr;
use mw_userscript_error::UserscriptError;
use mw_userscript_plugin::{HookRenderChunkArgs, HookRenderChunkOutput};
use mw_userscript_sourcemap::{RewriteBuffer, SourceMapOptions};
use mw_userscript_utils::concat_string;
use regex::Regex;

use crate::options::normalized_plugin_options::NormalizedPluginOptions;

/// Name of the chunk holding the userscript entry.
pub const MAIN_CHUNK: &str = "main";

/// A dynamic import of a `.cjs` chunk. Group 1 is the `c` to drop.
static DYNAMIC_IMPORT_CJS_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r#"import\(.+?\.(c)js["']\s?\)"#).unwrap());

/// Points the main CommonJS chunk at the ESM build of its dynamic chunks.
///
/// Only runs for the cjs output of an `esmChunks` build. Chunks listed in `esmUnhoistChunks` are
/// expected to be loaded through `import()` alone, so the hoisted `require('./<chunk>');` lines
/// the bundler adds for them are removed, along with the chunk's import metadata.
pub fn render_main_chunk(
  options: &NormalizedPluginOptions,
  args: &mut HookRenderChunkArgs<'_>,
) -> Result<Option<HookRenderChunkOutput>, UserscriptError> {
  if !args.format.is_cjs() || !options.esm_chunks || args.chunk.name.as_str() != MAIN_CHUNK {
    return Ok(None);
  }

  let code = args.code;
  let mut s = RewriteBuffer::new(code);
  let mut removed = Vec::new();

  if let Some(unhoist_chunks) = &options.esm_unhoist_chunks {
    let unhoisted = args
      .chunks
      .iter()
      .filter(|(_, chunk)| unhoist_chunks.iter().any(|name| name == chunk.name.as_str()))
      .map(|(filename, _)| filename.clone())
      .collect::<Vec<ArcStr>>();

    for filename in &unhoisted {
      if args.chunk.imported_bindings.get(filename).is_some_and(|bindings| !bindings.is_empty()) {
        return Err(UserscriptError::UnhoistedChunkInUse { chunk: filename.to_string() });
      }
      args.chunk.imported_bindings.remove(filename);
    }
    args.chunk.imports.retain(|import| !unhoisted.contains(import));

    for filename in &unhoisted {
      let statement = concat_string!("require('./", filename, "');\n");
      let before = removed.len();
      for (start, _) in code.match_indices(statement.as_str()) {
        s.remove(start, start + statement.len())?;
        removed.push(start..start + statement.len());
      }
      if removed.len() == before {
        return Err(UserscriptError::UnhoistedRequireNotFound { statement });
      }
      tracing::debug!("Unhoisted {filename} from {}", args.chunk.filename);
    }
  }

  for captures in DYNAMIC_IMPORT_CJS_RE.captures_iter(code) {
    let c = captures.get(1).expect("`c` group is not optional");
    // A lazy match can run into a hoisted require on the same line
    if removed.iter().any(|statement| statement.contains(&c.start())) {
      continue;
    }
    s.remove(c.start(), c.end())?;
  }

  let map_options = SourceMapOptions::new(args.chunk.filename.as_str());
  let (code, map) = s.finish(Some(&map_options)).into_parts();
  Ok(Some(HookRenderChunkOutput { code, map }))
}

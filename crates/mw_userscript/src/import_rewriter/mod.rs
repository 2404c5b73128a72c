mod import_match;

use mw_userscript_error::UserscriptError;
use mw_userscript_sourcemap::{RewriteBuffer, SourceMapOptions, SourceMapSource};
use mw_userscript_utils::{concat_string, ecmascript::to_js_string_literal};

pub use self::import_match::{scan_external_imports, AliasBinding, ImportMatch};

const BINDING_PREFIX: &str = "__mw_module";

/// `require("<name>")`, resolved by the `require` that ResourceLoader passes to the userscript.
pub fn runtime_require(name: &str) -> String {
  concat_string!("require(", to_js_string_literal(name), ")")
}

/// Rewrites every externalized import of one module into a runtime require.
///
/// ```js
/// import { ref, computed as c } from "\0mw-userscript:vue";
/// // becomes
/// const __mw_module0 = require("vue");const { ref, computed: c } = __mw_module0;
/// ```
///
/// The clause text is moved, not re-printed, so everything in it except ` as ` keeps its
/// original position in the source map. Returns `None` when there is nothing to rewrite.
pub fn rewrite_external_imports(
  id: &str,
  code: &str,
) -> Result<Option<SourceMapSource>, UserscriptError> {
  let matches = scan_external_imports(code)?;
  if matches.is_empty() {
    return Ok(None);
  }

  let mut s = RewriteBuffer::new(code);
  let mut counter = itoa::Buffer::new();
  for (nth, ImportMatch { statement, clause, module, bindings }) in matches.iter().enumerate() {
    let binding = concat_string!(BINDING_PREFIX, counter.format(nth));
    let require = runtime_require(&module.name);

    s.update(statement.start, clause.start, &concat_string!("const ", binding, " = "))?;
    s.update(clause.end, statement.end, &concat_string!(require, ";"))?;
    s.append_left(statement.end, "const ")?;
    s.append_left(clause.end, &concat_string!(" = ", binding, ";"))?;
    for separator in bindings.iter().filter_map(|binding| binding.separator.as_ref()) {
      s.update(separator.start, separator.end, ": ")?;
    }
    s.relocate(clause.start, clause.end, statement.end)?;
  }

  tracing::debug!("Rewrote {} externalized import(s) in {id}", matches.len());
  Ok(Some(s.finish(Some(&SourceMapOptions::new(id)))))
}

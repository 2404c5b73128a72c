use std::{ops::Range, sync::LazyLock};

use mw_userscript_error::UserscriptError;
use regex::Regex;

use crate::externals::{ExternalizedModule, SERVED_VIRTUAL_ID_PREFIX, VIRTUAL_ID_PREFIX};

/// The only import shape the bundler emits for an externalized module:
///
/// ```js
/// import { a, b as c } from "<virtual id>";
/// ```
///
/// The virtual id is spelled either raw or the way the dev server serves it.
static EXTERNAL_IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(&format!(
    r#"import (\{{[^}}]+\}}) from "(?:{}|{})([^"]+)";"#,
    regex::escape(VIRTUAL_ID_PREFIX),
    regex::escape(SERVED_VIRTUAL_ID_PREFIX),
  ))
  .unwrap()
});

/// Anything that starts like a named import of a virtual id. Every such statement must be one
/// [`EXTERNAL_IMPORT_RE`] recognizes. Default imports are served by the virtual module itself.
static LOOSE_EXTERNAL_IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(&format!(
    r#"import\s*\{{[^;"']*?\bfrom\s*["'](?:{}|{})([^"'\s]*)"#,
    regex::escape(VIRTUAL_ID_PREFIX),
    regex::escape(SERVED_VIRTUAL_ID_PREFIX),
  ))
  .unwrap()
});

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+").unwrap());

const AS: &str = "as";

/// One named import. `local` equals `exported` unless the entry was aliased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasBinding {
  pub exported: String,
  pub local: String,
  /// Span of ` as `, with the whitespace around it, in the scanned code.
  pub separator: Option<Range<usize>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportMatch {
  pub statement: Range<usize>,
  /// Span of the clause including its braces.
  pub clause: Range<usize>,
  pub module: ExternalizedModule,
  pub bindings: Vec<AliasBinding>,
}

/// Finds every externalized import in textual order.
///
/// A named import of a virtual id that is not in the expected shape is an error, so that it can
/// never reach the output untouched.
pub fn scan_external_imports(code: &str) -> Result<Vec<ImportMatch>, UserscriptError> {
  let matches = EXTERNAL_IMPORT_RE
    .captures_iter(code)
    .map(|captures| {
      let statement = captures.get(0).expect("group 0 always participates");
      let clause = captures.get(1).expect("clause group is not optional");
      let name = captures.get(2).expect("module name group is not optional");

      let module = ExternalizedModule::new(name.as_str());
      let bindings = parse_clause(code, clause.range(), &module)?;

      Ok(ImportMatch { statement: statement.range(), clause: clause.range(), module, bindings })
    })
    .collect::<Result<Vec<_>, UserscriptError>>()?;

  for captures in LOOSE_EXTERNAL_IMPORT_RE.captures_iter(code) {
    let start = captures.get(0).expect("group 0 always participates").start();
    if matches.iter().any(|m| m.statement.start == start) {
      continue;
    }
    let name = captures.get(1).expect("module name group is not optional");
    let statement = code[start..].lines().next().unwrap_or_default();
    return Err(UserscriptError::UnrecognizedExternalImport {
      module: name.as_str().to_string(),
      statement: statement.to_string(),
    });
  }

  Ok(matches)
}

fn parse_clause(
  code: &str,
  clause: Range<usize>,
  module: &ExternalizedModule,
) -> Result<Vec<AliasBinding>, UserscriptError> {
  let malformed = |reason| UserscriptError::MalformedImportClause {
    module: module.name.to_string(),
    clause: code[clause.clone()].to_string(),
    reason,
  };

  // Skip the braces
  let interior_start = clause.start + 1;
  let interior = &code[interior_start..clause.end - 1];

  let mut bindings = Vec::new();
  let mut entry_start = interior_start;
  let entries = interior.split(',').collect::<Vec<_>>();
  let last = entries.len() - 1;

  for (nth, entry) in entries.into_iter().enumerate() {
    let offset = entry_start;
    entry_start += entry.len() + 1;

    if entry.trim().is_empty() {
      // `{ a, b, }` is fine, `{ a,, b }` and `{ , }` are not.
      if nth == last && !bindings.is_empty() {
        continue;
      }
      return Err(malformed("empty import specifier"));
    }

    let words = WORD_RE.find_iter(entry).collect::<Vec<_>>();
    let binding = match words[..] {
      [name] => AliasBinding {
        exported: name.as_str().to_string(),
        local: name.as_str().to_string(),
        separator: None,
      },
      // `as` is a valid name on either side
      [exported, as_, local] if as_.as_str() == AS => AliasBinding {
        exported: exported.as_str().to_string(),
        local: local.as_str().to_string(),
        separator: Some(offset + exported.end()..offset + local.start()),
      },
      [first, _] if first.as_str() == AS => {
        return Err(malformed("missing imported name before `as`"));
      }
      [_, second] if second.as_str() == AS => {
        return Err(malformed("missing local name after `as`"));
      }
      _ if words.iter().filter(|word| word.as_str() == AS).count() > 1 => {
        return Err(malformed("more than one `as` in a specifier"));
      }
      _ => return Err(malformed("unexpected whitespace inside a specifier")),
    };

    bindings.push(binding);
  }

  Ok(bindings)
}

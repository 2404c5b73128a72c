use std::sync::LazyLock;

use itertools::Itertools;
use mw_userscript_error::UserscriptError;
use mw_userscript_sourcemap::SourceJoiner;
use mw_userscript_utils::{concat_string, ecmascript::to_tab_indented_json};
use regex::{NoExpand, Regex};

use crate::options::normalized_plugin_options::NormalizedPluginOptions;

pub const DEFAULT_TEMPLATE: &str = include_str!("../assets/userscript.js");

const SCRIPT_PLACEHOLDER: &str = "'script'";

/// `'footer';`, swallowing the newline when it ends the template.
static FOOTER_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"'footer';(?:\r?\n\z)?").unwrap());

static SCRIPT_LINE_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(?m)^\s+'script';").unwrap());

/// Wraps the bundled `code` in the userscript template.
pub fn wrap(options: &NormalizedPluginOptions, code: &str) -> Result<String, UserscriptError> {
  let template = options.template.as_deref().unwrap_or(DEFAULT_TEMPLATE);
  let modules =
    to_tab_indented_json(&options.using).expect("Serializing a list of strings should never fail");

  let header = options.banner.as_deref().map(comment_lines).unwrap_or_default();
  let header = header.trim_end();
  let header = if header.is_empty() { String::new() } else { concat_string!(header, "\n") };
  let footer = options.footer.as_deref().map(comment_lines).unwrap_or_default();

  let template = template.replace("'modules'", &modules).replace("'header';\n", &header);
  let template = FOOTER_RE.replace_all(&template, NoExpand(footer.trim_start()));

  let count = template.matches(SCRIPT_PLACEHOLDER).count();
  if count != 1 {
    return Err(UserscriptError::TemplatePlaceholderCount { count });
  }

  let Some(script) = SCRIPT_LINE_RE.find(&template) else {
    return Err(UserscriptError::TemplateScriptNotOnOwnLine);
  };

  let mut joiner = SourceJoiner::default();
  joiner.append_source(&template[..script.start()]);
  tracing::debug!("Placing the bundle at line {}", joiner.lines_count() + 1);
  joiner.append_source(code);
  joiner.append_source(&template[script.end()..]);
  Ok(joiner.join())
}

/// Turns every line of `text` into a `//` comment.
fn comment_lines(text: &str) -> String {
  text.split('\n').map(|line| concat_string!("// ", line).trim().to_string()).join("\n")
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{options::PluginOptions, utils::normalize_options::normalize_options};

  fn options(raw: PluginOptions) -> NormalizedPluginOptions {
    normalize_options(PluginOptions { name: "gadget".into(), entry: "src/main.ts".into(), ..raw })
  }

  #[test]
  fn default_template() {
    let options = options(PluginOptions {
      using: Some(vec!["vue".into(), "mediawiki.api".into()]),
      ..Default::default()
    });
    assert_eq!(
      wrap(&options, "main();").unwrap(),
      concat!(
        "// <nowiki>\n",
        "mw.loader.using( [\n\t\"vue\",\n\t\"mediawiki.api\"\n], function ( require ) {\n",
        "\nmain();\n\n",
        "} );\n",
        "// </nowiki>\n",
      )
    );
  }

  #[test]
  fn empty_using_expands_to_an_empty_list() {
    let wrapped = wrap(&options(PluginOptions::default()), "main();").unwrap();
    assert!(wrapped.contains("mw.loader.using( [], function ( require ) {"));
  }

  #[test]
  fn banner_and_footer_become_comments() {
    let options = options(PluginOptions {
      banner: Some("Gadget  \n\nby Example".into()),
      footer: Some("end of gadget".into()),
      ..Default::default()
    });
    let wrapped = wrap(&options, "main();").unwrap();
    assert!(wrapped.starts_with("// Gadget\n//\n// by Example\n// <nowiki>\n"));
    assert!(wrapped.ends_with("// </nowiki>\n// end of gadget"));
  }

  #[test]
  fn custom_template() {
    let options = options(PluginOptions {
      template: Some("'header';\n(function () {\n  'script';\n})();\n'footer';".into()),
      ..Default::default()
    });
    assert_eq!(wrap(&options, "a();\nb();").unwrap(), "(function () {\n\na();\nb();\n\n})();\n");
  }

  #[test]
  fn script_placeholder_must_appear_once() {
    let count = |template: &str| {
      let options = options(PluginOptions { template: Some(template.into()), ..Default::default() });
      match wrap(&options, "main();") {
        Err(UserscriptError::TemplatePlaceholderCount { count }) => count,
        other => panic!("expected a placeholder count error, got {other:?}"),
      }
    };
    assert_eq!(count("(function () {\n})();"), 0);
    assert_eq!(count("\t'script';\n\t'script';\n"), 2);
  }

  #[test]
  fn script_placeholder_must_start_an_indented_line() {
    let options =
      options(PluginOptions { template: Some("run('script');\n".into()), ..Default::default() });
    assert_eq!(wrap(&options, "main();"), Err(UserscriptError::TemplateScriptNotOnOwnLine));
  }
}

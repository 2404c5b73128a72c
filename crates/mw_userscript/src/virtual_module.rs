use std::num::NonZeroU64;

use mw_userscript_utils::{concat_string, ecmascript::to_js_string_literal};

use crate::externals::VUE;

const DEBUG_MODE_DOCS: &str = "https://www.mediawiki.org/wiki/ResourceLoader/Architecture#Debug_mode";

/// Source of the module a virtual id loads to.
///
/// The module waits for ResourceLoader to load `name` and default-exports whatever the module
/// `require` returns, e.g. for `vue`:
///
/// ```js
/// const __mw_module = (await mw.loader.using("vue"))("vue");
/// export default __mw_module;
/// ```
pub fn render_virtual_module(name: &str, debug_cookie_age: Option<NonZeroU64>) -> String {
  let literal = to_js_string_literal(name);
  let mut code = String::new();

  if let Some(age) = debug_cookie_age {
    code.push_str(&concat_string!(
      "document.cookie = \"resourceLoaderDebug=2;max-age=",
      itoa::Buffer::new().format(age.get()),
      "\"\n"
    ));
  }
  code.push_str(&concat_string!(
    "const __mw_module = (await mw.loader.using(",
    literal,
    "))(",
    literal,
    ");\n"
  ));
  code.push_str("export default __mw_module;\n");

  if name == VUE {
    code.push_str(&vue_debug_mode_check(debug_cookie_age));
  }
  code
}

/// Hot reloading needs the development build of Vue, which ResourceLoader only serves in debug
/// mode.
fn vue_debug_mode_check(debug_cookie_age: Option<NonZeroU64>) -> String {
  let hint = match debug_cookie_age {
    Some(age) => concat_string!(
      "`resourceLoaderDebugCookieAge` is set to `",
      itoa::Buffer::new().format(age.get()),
      "`, but Vue was loaded without it. Try reloading the page."
    ),
    None => concat_string!(
      "Add `?debug=2` to your URL or set a cookie `resourceLoaderDebug=2` to enable it. ",
      "More information: ",
      DEBUG_MODE_DOCS
    ),
  };

  concat_string!(
    "if (typeof __VUE_HMR_RUNTIME__ !== \"object\") {\n",
    "console.error(\"[vite-mw-userscript] ResourceLoader debug mode is not enabled. ",
    "Without it, RL will load the production version of Vue. ",
    "Debug mode Vue is required for HMR to work.\\n\\n",
    hint,
    "\");\n}\n"
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn loads_through_resource_loader() {
    assert_eq!(
      render_virtual_module("mediawiki.api", None),
      concat!(
        "const __mw_module = (await mw.loader.using(\"mediawiki.api\"))(\"mediawiki.api\");\n",
        "export default __mw_module;\n",
      )
    );
  }

  #[test]
  fn sets_the_debug_cookie_first() {
    let code = render_virtual_module("@wikimedia/codex", NonZeroU64::new(60));
    assert!(code.starts_with("document.cookie = \"resourceLoaderDebug=2;max-age=60\"\nconst __mw_module"));
    assert!(!code.contains("__VUE_HMR_RUNTIME__"));
  }

  #[test]
  fn vue_checks_for_debug_mode() {
    let code = render_virtual_module("vue", None);
    assert!(code.contains("if (typeof __VUE_HMR_RUNTIME__ !== \"object\") {\n"));
    assert!(code.contains("Add `?debug=2` to your URL"));
    assert!(code.ends_with("#Debug_mode\");\n}\n"));

    let code = render_virtual_module("vue", NonZeroU64::new(60));
    assert!(code.contains("`resourceLoaderDebugCookieAge` is set to `60`"));
    assert!(!code.contains("?debug=2"));
  }

  #[test]
  fn only_the_exact_vue_name_is_checked() {
    assert!(!render_virtual_module("@vue/runtime-core", None).contains("__VUE_HMR_RUNTIME__"));
  }
}

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Quotes `value` as a JS string literal, the same way `JSON.stringify` would.
pub fn to_js_string_literal(value: &str) -> String {
  serde_json::to_string(value).expect("Serializing a str to JSON should never fail")
}

/// Serializes `value` as JSON indented with tabs, matching `JSON.stringify(value, null, '\t')`.
pub fn to_tab_indented_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
  let mut out = Vec::new();
  let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"\t"));
  value.serialize(&mut ser)?;
  // serde_json only ever writes valid UTF-8
  Ok(String::from_utf8(out).unwrap_or_default())
}

#[test]
fn test_to_js_string_literal() {
  assert_eq!(to_js_string_literal("vue"), "\"vue\"");
  assert_eq!(to_js_string_literal("@wikimedia/codex"), "\"@wikimedia/codex\"");
  assert_eq!(to_js_string_literal("a\"b\\c\n"), "\"a\\\"b\\\\c\\n\"");
}

#[test]
fn test_to_tab_indented_json() {
  let modules = vec!["vue".to_string(), "mediawiki.api".to_string()];
  assert_eq!(to_tab_indented_json(&modules).unwrap(), "[\n\t\"vue\",\n\t\"mediawiki.api\"\n]");
  assert_eq!(to_tab_indented_json::<[String]>(&[]).unwrap(), "[]");
}

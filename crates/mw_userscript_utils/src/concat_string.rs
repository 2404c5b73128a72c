/// Concatenates string-like expressions into a `String` allocated once with the exact capacity.
///
/// ```ignore
/// let name = concat_string!("__mw_module", "0");
/// ```
#[macro_export]
macro_rules! concat_string {
  () => {
    String::new()
  };
  ($($s:expr),+ $(,)?) => {{
    let mut len = 0;
    $(len += AsRef::<str>::as_ref(&$s).len();)+
    let mut buf = String::with_capacity(len);
    $(buf.push_str(AsRef::<str>::as_ref(&$s));)+
    buf
  }};
}

#[test]
fn test_concat_string() {
  let counter = 3.to_string();
  let name = concat_string!("__mw_module", counter, ";");
  assert_eq!(name, "__mw_module3;");
  assert_eq!(name.capacity(), name.len());
  assert_eq!(concat_string!(), "");
}

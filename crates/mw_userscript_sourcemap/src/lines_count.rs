use memchr::memchr_iter;

/// Number of `\n` in `text`, i.e. the zero-based index of its last line.
#[inline]
pub fn lines_count(text: &str) -> u32 {
  u32::try_from(memchr_iter(b'\n', text.as_bytes()).count()).unwrap_or(u32::MAX)
}

#[test]
fn test_lines_count() {
  assert_eq!(lines_count(""), 0);
  assert_eq!(lines_count("main();"), 0);
  assert_eq!(lines_count("// <nowiki>\nmain();\n"), 2);
  assert_eq!(lines_count("\r\n\r\n"), 2);
}

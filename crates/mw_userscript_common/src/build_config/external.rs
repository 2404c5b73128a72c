use std::{fmt::Debug, sync::Arc};

/// `(source, importer, is_resolved) -> is_external`
pub type ExternalPredicate = Arc<dyn Fn(&str, Option<&str>, bool) -> bool + Send + Sync>;

/// Which imports the host leaves out of the bundle.
#[derive(Clone)]
pub enum External {
  Name(String),
  Names(Vec<String>),
  Predicate(ExternalPredicate),
}

impl External {
  pub fn is_external(&self, source: &str, importer: Option<&str>, is_resolved: bool) -> bool {
    match self {
      Self::Name(name) => name == source,
      Self::Names(names) => names.iter().any(|name| name == source),
      Self::Predicate(predicate) => predicate(source, importer, is_resolved),
    }
  }
}

impl Debug for External {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Name(name) => f.debug_tuple("Name").field(name).finish(),
      Self::Names(names) => f.debug_tuple("Names").field(names).finish(),
      Self::Predicate(_) => f.write_str("Predicate(Fn)"),
    }
  }
}

#[test]
fn test_is_external() {
  let names = External::Names(vec!["vue".to_string(), "jquery".to_string()]);
  assert!(names.is_external("jquery", None, false));
  assert!(!names.is_external("vue-router", None, false));

  let predicate = External::Predicate(Arc::new(|source, importer, _| {
    source.starts_with("node:") && importer.is_some()
  }));
  assert!(predicate.is_external("node:fs", Some("src/main.ts"), false));
  assert!(!predicate.is_external("node:fs", None, false));
  assert_eq!(format!("{predicate:?}"), "Predicate(Fn)");
}

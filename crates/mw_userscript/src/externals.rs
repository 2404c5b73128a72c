use arcstr::ArcStr;
use mw_userscript_utils::{concat_string, indexmap::FxIndexSet};

/// Prefix of the virtual id an externalized module resolves to.
pub const VIRTUAL_ID_PREFIX: &str = "\0mw-userscript:";

/// The same prefix as the dev server writes it into served code, with `\0` URL-escaped.
pub const SERVED_VIRTUAL_ID_PREFIX: &str = "/@id/__x00__mw-userscript:";

pub const VUE: &str = "vue";
const VUE_SCOPE: &str = "@vue";

/// A dependency that is loaded through ResourceLoader instead of being bundled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalizedModule {
  pub name: ArcStr,
  pub virtual_id: ArcStr,
}

impl ExternalizedModule {
  pub fn new(name: &str) -> Self {
    Self { name: name.into(), virtual_id: concat_string!(VIRTUAL_ID_PREFIX, name).into() }
  }

  /// Recovers the module a virtual id stands for, in either spelling.
  pub fn from_virtual_id(id: &str) -> Option<Self> {
    module_name_of(id).map(Self::new)
  }
}

pub fn module_name_of(id: &str) -> Option<&str> {
  id.strip_prefix(VIRTUAL_ID_PREFIX)
    .or_else(|| id.strip_prefix(SERVED_VIRTUAL_ID_PREFIX))
    .filter(|name| !name.is_empty())
}

/// The set of externalized module names for one build.
#[derive(Debug, Default, Clone)]
pub struct Externals {
  names: FxIndexSet<ArcStr>,
}

impl Externals {
  /// Listing `vue` pulls in the `@vue` scope, which Vue's own packages import each other through.
  pub fn from_using(using: &[String]) -> Self {
    let mut names = using.iter().map(|name| ArcStr::from(name.as_str())).collect::<FxIndexSet<_>>();
    if names.contains(VUE) {
      names.insert(VUE_SCOPE.into());
    }
    Self { names }
  }

  /// An exact name matches itself. A bare scope such as `@vue` matches every package in it.
  pub fn contains(&self, source: &str) -> bool {
    if self.names.contains(source) {
      return true;
    }
    source
      .strip_prefix('@')
      .and_then(|scoped| scoped.split_once('/'))
      .is_some_and(|(scope, _)| self.names.contains(&*concat_string!("@", scope)))
  }

  pub fn resolve(&self, source: &str) -> Option<ExternalizedModule> {
    self.contains(source).then(|| ExternalizedModule::new(source))
  }

  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.names.iter().map(ArcStr::as_str)
  }

  pub fn to_vec(&self) -> Vec<String> {
    self.names().map(ToString::to_string).collect()
  }

  pub fn is_empty(&self) -> bool {
    self.names.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn externals(using: &[&str]) -> Externals {
    Externals::from_using(&using.iter().map(ToString::to_string).collect::<Vec<_>>())
  }

  #[test]
  fn vue_externalizes_its_scope() {
    let externals = externals(&["vue"]);
    assert!(externals.contains("vue"));
    assert!(externals.contains("@vue"));
    assert!(externals.contains("@vue/runtime-core"));
    assert!(!externals.contains("vue-router"));
    assert!(!externals.contains("@vueuse/core"));
  }

  #[test]
  fn scope_is_only_implied_by_vue() {
    let externals = externals(&["@wikimedia/codex", "mediawiki.api"]);
    assert!(externals.contains("@wikimedia/codex"));
    assert!(externals.contains("mediawiki.api"));
    assert!(!externals.contains("@wikimedia/codex-icons"));
    assert!(!externals.contains("@vue/runtime-core"));
    assert_eq!(externals.names().count(), 2);
  }

  #[test]
  fn duplicates_collapse() {
    assert_eq!(externals(&["vue", "vue", "@vue"]).to_vec(), ["vue", "@vue"]);
  }

  #[test]
  fn virtual_ids_round_trip() {
    let module = ExternalizedModule::new("@wikimedia/codex");
    assert_eq!(module.virtual_id, "\0mw-userscript:@wikimedia/codex");
    assert_eq!(ExternalizedModule::from_virtual_id(&module.virtual_id), Some(module.clone()));
    assert_eq!(
      ExternalizedModule::from_virtual_id("/@id/__x00__mw-userscript:@wikimedia/codex"),
      Some(module)
    );
    assert_eq!(module_name_of("\0mw-userscript:"), None);
    assert_eq!(module_name_of("src/main.ts"), None);
  }
}

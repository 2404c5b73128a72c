use mw_userscript_common::{Output, OutputBundle, OutputFormat};
use mw_userscript_error::UserscriptError;

use crate::{options::normalized_plugin_options::NormalizedPluginOptions, wrap::wrap};

/// Wraps every entry chunk in the userscript template.
///
/// An `esmChunks` build emits both formats, but only the cjs entry and the es chunks are shipped:
/// the rest is dropped from the bundle.
pub fn finalize_bundle(
  options: &NormalizedPluginOptions,
  format: OutputFormat,
  bundle: &mut OutputBundle,
) -> Result<(), UserscriptError> {
  for output in bundle.values_mut() {
    if let Output::Chunk(chunk) = output {
      if chunk.is_entry {
        chunk.code = wrap(options, &chunk.code)?;
      }
    }
  }

  if options.esm_chunks {
    let before = bundle.len();
    bundle.retain(|_, output| match output {
      Output::Chunk(chunk) => !is_shipped_by_other_format(format, chunk.is_entry),
      Output::Asset(_) => true,
    });
    tracing::debug!("Dropped {} chunk(s) from the {format} output", before - bundle.len());
  }

  Ok(())
}

fn is_shipped_by_other_format(format: OutputFormat, is_entry: bool) -> bool {
  match format {
    OutputFormat::Cjs => !is_entry,
    OutputFormat::Esm => is_entry,
  }
}

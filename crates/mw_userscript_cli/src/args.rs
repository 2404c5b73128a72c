use std::path::PathBuf;

use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum Command {
  /// Rewrite the externalized imports of a transformed module into ResourceLoader requires.
  Rewrite(RewriteArgs),
  /// Wrap a built bundle in the userscript template.
  Wrap(WrapArgs),
}

#[derive(Args)]
pub struct RewriteArgs {
  /// Module code as the bundler emits it.
  pub file: PathBuf,

  /// ResourceLoader module the file imports. Repeat for more modules.
  #[clap(long, short = 'u', action = clap::ArgAction::Append)]
  pub using: Vec<String>,

  /// Where to write the source map.
  #[clap(long)]
  pub sourcemap: Option<PathBuf>,

  #[clap(long, short = 'o')]
  pub out: Option<PathBuf>,
}

#[derive(Args)]
pub struct WrapArgs {
  /// The bundled entry chunk.
  pub file: PathBuf,

  /// Plugin options as JSON, e.g. `{ "name": "gadget", "entry": "src/main.ts" }`.
  #[clap(long, short = 'c')]
  pub config: PathBuf,

  /// Template file, overriding `template` from the options.
  #[clap(long, short = 't')]
  pub template: Option<PathBuf>,

  #[clap(long, short = 'o')]
  pub out: Option<PathBuf>,
}

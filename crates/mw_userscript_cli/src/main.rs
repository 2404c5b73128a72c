mod args;

use std::{
  fs,
  path::{Path, PathBuf},
  process::ExitCode,
  time::Instant,
};

use ansi_term::Colour;
use anyhow::Context;
use args::{Command, RewriteArgs, WrapArgs};
use clap::Parser;
use mw_userscript::{
  HookGenerateBundleArgs, HookResolveIdArgs, HookTransformArgs, MediawikiUserscript, Output,
  OutputBundle, OutputChunk, OutputFormat, Plugin, PluginContext, PluginOptions,
};
use mw_userscript_error::BuildResult;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Commands {
  #[clap(subcommand)]
  command: Command,

  /// Do not print warnings.
  #[clap(long, short = 's', global = true)]
  silent: bool,
}

struct CommandOutput {
  code: String,
  out: Option<PathBuf>,
  warnings: Vec<anyhow::Error>,
}

fn read(path: &Path) -> anyhow::Result<String> {
  fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn write(path: &Path, content: &str) -> anyhow::Result<()> {
  fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

fn rewrite(args: RewriteArgs) -> BuildResult<CommandOutput> {
  let id = args.file.to_string_lossy().into_owned();
  let code = read(&args.file)?;
  let plugin = MediawikiUserscript::new(PluginOptions {
    name: String::new(),
    entry: id.clone(),
    using: Some(args.using),
    ..Default::default()
  });
  let ctx = PluginContext::new();

  // Resolve what the file imports so the plugin treats it as an importer.
  for name in &plugin.options().using {
    let resolve_args = HookResolveIdArgs { source: name, importer: Some(&id), is_entry: false };
    plugin.resolve_id(&ctx, &resolve_args)?;
  }

  let output = plugin.transform(&ctx, &HookTransformArgs { id: &id, code: &code })?;
  let code = match output {
    Some(output) => {
      if let (Some(path), Some(map)) = (&args.sourcemap, &output.map) {
        write(path, &map.to_json_string())?;
      }
      output.code
    }
    None => {
      tracing::info!("{id} has no externalized imports");
      code
    }
  };

  Ok(CommandOutput { code, out: args.out, warnings: ctx.take_warnings() })
}

fn wrap(args: WrapArgs) -> BuildResult<CommandOutput> {
  let mut options: PluginOptions = serde_json::from_str(&read(&args.config)?)
    .with_context(|| format!("Invalid options in {}", args.config.display()))?;
  if let Some(template) = &args.template {
    options.template = Some(read(template)?);
  }
  let plugin = MediawikiUserscript::new(options);
  let ctx = PluginContext::new();

  let filename = args.file.file_name().map_or_else(
    || plugin.options().name.clone(),
    |name| name.to_string_lossy().into_owned(),
  );
  let mut bundle = OutputBundle::default();
  bundle.insert(
    filename.as_str().into(),
    Output::Chunk(Box::new(OutputChunk {
      name: plugin.options().name.as_str().into(),
      filename: filename.as_str().into(),
      is_entry: true,
      code: read(&args.file)?,
      imports: vec![],
    })),
  );

  let generate_args =
    HookGenerateBundleArgs { format: OutputFormat::Cjs, is_write: args.out.is_some() };
  plugin.generate_bundle(&ctx, &generate_args, &mut bundle)?;

  let code = bundle
    .swap_remove(filename.as_str())
    .and_then(|output| match output {
      Output::Chunk(chunk) => Some(chunk.code),
      Output::Asset(_) => None,
    })
    .unwrap_or_default();

  Ok(CommandOutput { code, out: args.out, warnings: ctx.take_warnings() })
}

fn main() -> ExitCode {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(std::io::stderr)
    .init();

  let args = Commands::parse();

  let start = Instant::now();
  let result = match args.command {
    Command::Rewrite(rewrite_args) => rewrite(rewrite_args),
    Command::Wrap(wrap_args) => wrap(wrap_args),
  }
  .and_then(|output| {
    if let Some(path) = &output.out {
      write(path, &output.code)?;
    } else {
      print!("{}", output.code);
    }
    Ok(output)
  });

  match result {
    Ok(output) => {
      if !args.silent {
        // Print warnings
        for warning in output.warnings {
          eprintln!("{} {:#}", Colour::Yellow.paint("Warning:"), warning);
        }
      }

      if let Some(path) = &output.out {
        let elapsed = format!("{:.2} ms", start.elapsed().as_secs_f64() * 1000.0);
        eprintln!(
          "\n{} Wrote {} in {}",
          Colour::Green.paint("✔"),
          Colour::Cyan.paint(path.display().to_string()),
          Colour::White.bold().paint(elapsed)
        );
      }
      ExitCode::SUCCESS
    }
    Err(errors) => {
      for error in &*errors {
        eprintln!("{} {:#}", Colour::Red.paint("Error:"), error);
      }
      ExitCode::FAILURE
    }
  }
}

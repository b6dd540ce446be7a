use std::{
  fs,
  path::{Path, PathBuf}
};

use anyhow::{bail, Context};
use cis_script::{
  common::TextEncoding,
  formatters::{AssemblyFormatter, SymbolFormatter, TextFormatter},
  script::{parse_script_file, ParseOptions, Script, DEFAULT_MAX_BLOCK_DEPTH}
};
use clap::{Args, Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};

/// Disassembles CIS engine scripts and exports their dialogue for translation.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
  #[command(subcommand)]
  command: Command
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Write an `address | mnemonic` listing of the code region
  Disasm(CommonArgs),

  /// Write dialogue strings as original/translation line pairs
  ExportText(CommonArgs),

  /// Write the label and variable tables
  Tables(CommonArgs)
}

#[derive(Args, Debug)]
struct CommonArgs {
  /// Script file, or a glob pattern matching several
  #[arg(short, long)]
  input: String,

  /// Output file, or a directory when the input matches several files
  #[arg(short, long)]
  output: PathBuf,

  /// Text encoding of the script strings
  #[arg(short, long, default_value = "sjis")]
  encoding: TextEncoding,

  /// How deeply `push bin` blocks may nest
  #[arg(long, default_value_t = DEFAULT_MAX_BLOCK_DEPTH)]
  max_block_depth: usize
}

impl Command {
  fn args(&self) -> &CommonArgs {
    match self {
      Command::Disasm(args) | Command::ExportText(args) | Command::Tables(args) => args
    }
  }

  fn render(&self, script: &Script) -> String {
    let encoding = self.args().encoding;
    match self {
      Command::Disasm(_) => AssemblyFormatter::new(encoding).format(&script.instructions),
      Command::ExportText(_) => TextFormatter::new(encoding).format(&script.instructions),
      Command::Tables(_) => {
        SymbolFormatter::new(encoding).format(&script.labels, &script.variables)
      }
    }
  }
}

fn main() {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

  let cli = Cli::parse();

  if let Err(e) = run(&cli.command) {
    eprintln!("{} {e:#}", style("error:").red().bold());
    std::process::exit(1);
  }
}

fn run(command: &Command) -> anyhow::Result<()> {
  let args = command.args();
  let options = ParseOptions {
    max_block_depth: args.max_block_depth
  };

  let inputs = expand_inputs(&args.input)?;
  debug!("{} input file(s), encoding {}", inputs.len(), args.encoding);

  if let [input] = inputs.as_slice() {
    if !args.output.is_dir() {
      return process(command, input, &args.output, &options);
    }
  }

  fs::create_dir_all(&args.output)
    .with_context(|| format!("Failed to create output directory {:?}", args.output))?;

  let progress = ProgressBar::new(inputs.len() as u64);
  progress.set_style(
    ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {wide_msg}")?
      .progress_chars("##-")
  );

  for input in &inputs {
    progress.set_message(input.display().to_string());

    let file_name = input
      .file_stem()
      .map(|stem| format!("{}.txt", stem.to_string_lossy()))
      .with_context(|| format!("Input {input:?} has no file name"))?;

    progress.suspend(|| process(command, input, &args.output.join(file_name), &options))?;
    progress.inc(1);
  }

  progress.finish_with_message("done");

  Ok(())
}

fn process(
  command: &Command,
  input: &Path,
  output: &Path,
  options: &ParseOptions
) -> anyhow::Result<()> {
  let script = parse_script_file(input, options)?;

  fs::write(output, command.render(&script))
    .with_context(|| format!("Failed to write {output:?}"))?;

  info!("{} -> {}", input.display(), output.display());

  Ok(())
}

fn expand_inputs(pattern: &str) -> anyhow::Result<Vec<PathBuf>> {
  let literal = Path::new(pattern);
  if literal.is_file() {
    return Ok(vec![literal.to_path_buf()]);
  }

  let mut inputs = glob::glob(pattern)
    .with_context(|| format!("Invalid input pattern {pattern:?}"))?
    .collect::<Result<Vec<_>, _>>()?;
  inputs.retain(|path| path.is_file());
  inputs.sort();

  if inputs.is_empty() {
    bail!("No script files match {pattern:?}");
  }

  Ok(inputs)
}

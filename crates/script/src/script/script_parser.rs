use std::{fs, io, path::Path};

use binary_reader::{BinaryReader, Endian};
use log::info;
use thiserror::Error;

use crate::disassembler::{disassemble, DisassembleError, RegisteredOpcodes};

use super::{
  read_labels, read_variables, ParseOptions, ParseScriptHeaderError, ReadTableError, Script,
  ScriptHeader
};

pub fn parse_script(bytes: Vec<u8>, options: &ParseOptions) -> Result<Script, ParseScriptError> {
  let header = ScriptHeader::parse(&bytes)?;

  let mut registered = RegisteredOpcodes::new();
  let instructions = disassemble(&bytes, header.code_range(), &mut registered, options)?;

  let mut reader = BinaryReader::from_u8(&bytes);
  reader.set_endian(Endian::Little);

  let labels = read_labels(&mut reader, header.label_offset as usize)?;
  let variables = read_variables(
    &mut reader,
    header.variable_offset as usize,
    header.variable_base_id,
    header.variable_count
  )?;

  info!(
    "Decoded {} top-level instructions, {} labels, {} variables, {} registered opcodes",
    instructions.len(),
    labels.len(),
    variables.len(),
    registered.len()
  );

  Ok(Script {
    header,
    bytes,
    instructions,
    labels,
    variables,
    registered
  })
}

pub fn parse_script_file(
  path: impl AsRef<Path>,
  options: &ParseOptions
) -> Result<Script, ParseScriptFileError> {
  let path_ref = path.as_ref();

  let contents = fs::read(path_ref).map_err(|e| {
    ParseScriptFileError::ReadFileError {
      path:   path_ref.to_str().map(str::to_owned),
      source: e
    }
  })?;

  parse_script(contents, options).map_err(|e| {
    ParseScriptFileError::ParseError {
      path:   path_ref.to_str().map(str::to_owned),
      source: e
    }
  })
}

#[derive(Error, Debug)]
pub enum ParseScriptError {
  #[error("Failed to parse header: {source}")]
  Header {
    #[from]
    source: ParseScriptHeaderError
  },

  #[error("Failed to disassemble code: {source}")]
  Code {
    #[from]
    source: DisassembleError
  },

  #[error("Failed to read tables: {source}")]
  Tables {
    #[from]
    source: ReadTableError
  }
}

#[derive(Error, Debug)]
pub enum ParseScriptFileError {
  #[error("Failed to parse script file {path:?}: {source}")]
  ParseError {
    path:   Option<String>,
    source: ParseScriptError
  },

  #[error("Failed to open script file {path:?}: {source}")]
  ReadFileError {
    path:   Option<String>,
    source: io::Error
  }
}

use std::io;

use binary_reader::BinaryReader;
use thiserror::Error;

use super::ScriptString;

const LABEL_TERMINATOR: i32 = -1;

const VARIABLE_INTEGER: u8 = 1;
const VARIABLE_STRING: u8 = 2;
const VARIABLE_TERMINATOR: u8 = 0xFF;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Label {
  pub address: i32,
  pub name:    ScriptString
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variable {
  pub id:    i32,
  pub value: VariableValue
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VariableValue {
  Integer(i32),
  String(ScriptString)
}

/// Reads `address, name` pairs until an address of `-1`.
pub fn read_labels(reader: &mut BinaryReader, offset: usize) -> Result<Vec<Label>, ReadTableError> {
  let mut labels: Vec<Label> = Default::default();

  reader.jmp(offset);

  loop {
    let address = reader.read_i32()?;
    if address == LABEL_TERMINATOR {
      break;
    }

    labels.push(Label {
      address,
      name: ScriptString::read(reader)?
    });
  }

  Ok(labels)
}

/// Reads type-tagged values until a `0xFF` tag. Ids count up from `base_id`,
/// and the number of entries has to match `expected_count`.
pub fn read_variables(
  reader: &mut BinaryReader,
  offset: usize,
  base_id: i32,
  expected_count: i32
) -> Result<Vec<Variable>, ReadTableError> {
  let mut variables: Vec<Variable> = Default::default();

  reader.jmp(offset);

  loop {
    let position = reader.pos;
    let value = match reader.read_u8()? {
      VARIABLE_TERMINATOR => break,
      VARIABLE_INTEGER => VariableValue::Integer(reader.read_i32()?),
      VARIABLE_STRING => VariableValue::String(ScriptString::read(reader)?),
      tag => return Err(ReadTableError::UnexpectedVariableType { tag, position })
    };

    variables.push(Variable {
      id: base_id.wrapping_add(variables.len() as i32),
      value
    });
  }

  if variables.len() as i64 != expected_count as i64 {
    return Err(ReadTableError::VariableCountMismatch {
      expected: expected_count,
      actual:   variables.len()
    });
  }

  Ok(variables)
}

#[derive(Debug, Error)]
pub enum ReadTableError {
  #[error("Unexpected variable type {tag:#04X} at {position:08X}")]
  UnexpectedVariableType { tag: u8, position: usize },

  #[error("Header declares {expected} variables but the table holds {actual}")]
  VariableCountMismatch { expected: i32, actual: usize },

  #[error("Read error: {}", source)]
  ReadError {
    #[source]
    #[from]
    source: io::Error
  }
}

use std::{io, ops::Range};

use binary_reader::{BinaryReader, Endian};
use log::debug;
use thiserror::Error;

use crate::script::{ParseOptions, ScriptString};

use self::opcodes::OperandShape;

mod instruction;
pub mod opcodes;
mod registered_opcodes;

pub use instruction::*;
pub use registered_opcodes::*;

/// Decodes the instruction stream in `range` of `bytes`.
///
/// Addresses are offsets into `bytes`. The stream has to end exactly on
/// `range.end`. Opcodes registered while decoding are left in `registered`.
pub fn disassemble(
  bytes: &[u8],
  range: Range<usize>,
  registered: &mut RegisteredOpcodes,
  options: &ParseOptions
) -> Result<Vec<Instruction>, DisassembleError> {
  if range.start > range.end || range.end > bytes.len() {
    return Err(DisassembleError::RegionOutOfBounds {
      start:  range.start,
      end:    range.end,
      length: bytes.len()
    });
  }

  let mut reader = BinaryReader::from_u8(bytes);
  reader.set_endian(Endian::Little);

  let mut decoder = BlockDecoder {
    reader: &mut reader,
    registered,
    options
  };

  decoder.decode_block(range.start, range.end - range.start, 0)
}

struct BlockDecoder<'a> {
  reader:     &'a mut BinaryReader,
  registered: &'a mut RegisteredOpcodes,
  options:    &'a ParseOptions
}

impl<'a> BlockDecoder<'a> {
  fn decode_block(
    &mut self,
    start: usize,
    length: usize,
    depth: usize
  ) -> Result<Vec<Instruction>, DisassembleError> {
    let end = start + length;
    let mut result: Vec<Instruction> = Default::default();

    self.reader.jmp(start);

    while self.reader.pos < end {
      let address = self.reader.pos;
      let opcode = self.reader.read_u16()?;

      let operand = match opcodes::lookup(opcode) {
        Some(info) => {
          match info.shape {
            OperandShape::None => Operand::None,
            OperandShape::Dword => Operand::Dword(self.reader.read_i32()?),
            OperandShape::String => Operand::String(ScriptString::read(self.reader)?),
            OperandShape::Block => self.decode_nested_block(address, end, depth)?,
            OperandShape::Register => {
              let id = self.reader.read_u16()?;
              if self.registered.register(id) {
                debug!("{address:08X}: registered opcode 0x{id:04X}");
              }
              Operand::Register(id)
            }
          }
        }
        None if self.registered.contains(opcode) => Operand::DynamicCall,
        None => return Err(DisassembleError::UnknownOpcode { opcode, address })
      };

      if self.reader.pos > end {
        return Err(DisassembleError::FramingOverrun {
          address,
          position: self.reader.pos,
          end
        });
      }

      result.push(Instruction {
        address,
        opcode,
        size: self.reader.pos - address,
        operand
      });
    }

    Ok(result)
  }

  fn decode_nested_block(
    &mut self,
    address: usize,
    outer_end: usize,
    depth: usize
  ) -> Result<Operand, DisassembleError> {
    let count = self.reader.read_i32()?;
    let block_start = self.reader.pos;

    let block_end = usize::try_from(count)
      .ok()
      .and_then(|count| block_start.checked_add(count))
      .filter(|block_end| *block_end <= outer_end)
      .ok_or(DisassembleError::BlockOverrun {
        address,
        count,
        end: outer_end
      })?;

    if depth >= self.options.max_block_depth {
      return Err(DisassembleError::BlockTooDeep {
        address,
        depth: depth + 1
      });
    }

    let bytes = self.reader.read_bytes(block_end - block_start)?.to_vec();

    debug!(
      "{address:08X}: entering block {block_start:08X}..{block_end:08X} at depth {}",
      depth + 1
    );

    let instructions = self.decode_block(block_start, bytes.len(), depth + 1)?;

    self.reader.jmp(block_end);

    Ok(Operand::Block {
      bytes,
      instructions
    })
  }
}

#[derive(Debug, Error)]
pub enum DisassembleError {
  #[error("Unknown command ID {opcode:04X} at {address:08X}")]
  UnknownOpcode { opcode: u16, address: usize },

  #[error(
    "Instruction at {address:08X} ends at {position:08X}, past the end of its block at {end:08X}"
  )]
  FramingOverrun {
    address:  usize,
    position: usize,
    end:      usize
  },

  #[error("Block at {address:08X} claims {count} bytes, overrunning its parent ending at {end:08X}")]
  BlockOverrun {
    address: usize,
    count:   i32,
    end:     usize
  },

  #[error("Block at {address:08X} is nested {depth} levels deep")]
  BlockTooDeep { address: usize, depth: usize },

  #[error("Code region {start:08X}..{end:08X} lies outside of {length} bytes")]
  RegionOutOfBounds {
    start:  usize,
    end:    usize,
    length: usize
  },

  #[error("Read error: {}", source)]
  ReadError {
    #[source]
    #[from]
    source: io::Error
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn decode(bytes: &[u8]) -> Result<Vec<Instruction>, DisassembleError> {
    let mut registered = RegisteredOpcodes::new();
    disassemble(bytes, 0..bytes.len(), &mut registered, &Default::default())
  }

  fn push_bin(inner: &[u8]) -> Vec<u8> {
    let mut bytes = vec![0x05, 0x00];
    bytes.extend_from_slice(&(inner.len() as i32).to_le_bytes());
    bytes.extend_from_slice(inner);
    bytes
  }

  #[test]
  fn decodes_single_nop() {
    let instructions = decode(&[0x00, 0x00]).unwrap();

    assert_eq!(
      instructions,
      vec![Instruction {
        address: 0,
        opcode:  0x0000,
        size:    2,
        operand: Operand::None
      }]
    );
    assert_eq!(instructions[0].mnemonic(), "nop0");
  }

  #[test]
  fn decodes_push_dword() {
    let instructions = decode(&[0x02, 0x00, 0x10, 0x00, 0x00, 0x00]).unwrap();

    assert_eq!(instructions.len(), 1);
    assert_eq!(instructions[0].size, 6);
    assert_eq!(instructions[0].operand, Operand::Dword(0x10));
  }

  #[test]
  fn decodes_push_string() {
    let mut bytes = vec![0x04, 0x00];
    bytes.extend(ScriptString::new(*b"text").encode().unwrap());

    let instructions = decode(&bytes).unwrap();

    assert_eq!(instructions[0].size, bytes.len());
    assert_eq!(
      instructions[0].operand,
      Operand::String(ScriptString::new(*b"text"))
    );
  }

  #[test]
  fn registered_opcode_decodes_as_dynamic_call() {
    let bytes = [0x0E, 0x00, 0x34, 0x12, 0x34, 0x12];

    let mut registered = RegisteredOpcodes::new();
    let instructions =
      disassemble(&bytes, 0..bytes.len(), &mut registered, &Default::default()).unwrap();

    assert_eq!(instructions.len(), 2);
    assert_eq!(instructions[0].operand, Operand::Register(0x1234));
    assert_eq!(instructions[1].address, 4);
    assert_eq!(instructions[1].operand, Operand::DynamicCall);
    assert_eq!(instructions[1].mnemonic(), "exec_cmd");
    assert!(registered.contains(0x1234));
  }

  #[test]
  fn unregistered_opcode_is_fatal() {
    assert!(matches!(
      decode(&[0x34, 0x12]),
      Err(DisassembleError::UnknownOpcode {
        opcode:  0x1234,
        address: 0
      })
    ));
  }

  #[test]
  fn alias_registration_also_unlocks_opcodes() {
    let instructions = decode(&[0x0F, 0x00, 0x00, 0x70, 0x00, 0x70]).unwrap();
    assert_eq!(instructions[1].operand, Operand::DynamicCall);
  }

  #[test]
  fn block_resumes_exactly_after_its_bytes() {
    // push bin { nop0, push dword 1 }, nop1
    let mut bytes = push_bin(&[0x00, 0x00, 0x02, 0x00, 0x01, 0x00, 0x00, 0x00]);
    bytes.extend_from_slice(&[0x01, 0x00]);

    let instructions = decode(&bytes).unwrap();

    assert_eq!(instructions.len(), 2);
    assert_eq!(instructions[0].size, 6 + 8);
    assert_eq!(instructions[1].address, 14);
    assert_eq!(instructions[1].mnemonic(), "nop1");

    let children = instructions[0].children();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].address, 6);
    assert_eq!(children[1].address, 8);
    assert_eq!(children[1].operand, Operand::Dword(1));
  }

  #[test]
  fn top_level_sizes_cover_the_whole_region() {
    let mut bytes = vec![0x00, 0x00];
    bytes.extend(push_bin(&push_bin(&[0x0D, 0x00])));
    bytes.extend_from_slice(&[0x02, 0x00, 0xFF, 0xFF, 0xFF, 0xFF]);

    let instructions = decode(&bytes).unwrap();
    let total = instructions.iter().map(|i| i.size).sum::<usize>();

    assert_eq!(total, bytes.len());
  }

  #[test]
  fn registrations_inside_blocks_outlive_the_block() {
    let mut bytes = push_bin(&[0x0E, 0x00, 0x00, 0x90]);
    bytes.extend_from_slice(&[0x00, 0x90]);

    let instructions = decode(&bytes).unwrap();
    assert_eq!(instructions[1].operand, Operand::DynamicCall);
  }

  #[test]
  fn registrations_before_a_block_apply_inside_it() {
    let mut bytes = vec![0x0E, 0x00, 0x00, 0x90];
    bytes.extend(push_bin(&[0x00, 0x90]));

    let instructions = decode(&bytes).unwrap();
    assert_eq!(instructions[1].children()[0].operand, Operand::DynamicCall);
  }

  #[test]
  fn empty_block_is_allowed() {
    let instructions = decode(&push_bin(&[])).unwrap();
    assert_eq!(instructions[0].size, 6);
    assert!(instructions[0].children().is_empty());
  }

  #[test]
  fn block_larger_than_parent_is_fatal() {
    let mut bytes = vec![0x05, 0x00];
    bytes.extend_from_slice(&10i32.to_le_bytes());
    bytes.extend_from_slice(&[0x00, 0x00]);

    assert!(matches!(
      decode(&bytes),
      Err(DisassembleError::BlockOverrun {
        address: 0,
        count: 10,
        ..
      })
    ));
  }

  #[test]
  fn negative_block_count_is_fatal() {
    let mut bytes = vec![0x05, 0x00];
    bytes.extend_from_slice(&(-2i32).to_le_bytes());

    assert!(matches!(
      decode(&bytes),
      Err(DisassembleError::BlockOverrun { count: -2, .. })
    ));
  }

  #[test]
  fn operand_crossing_block_end_is_fatal() {
    // The block holds a push dword whose operand spills past the block.
    let mut bytes = vec![0x05, 0x00];
    bytes.extend_from_slice(&4i32.to_le_bytes());
    bytes.extend_from_slice(&[0x02, 0x00, 0x00, 0x00, 0x00, 0x00]);

    assert!(matches!(
      decode(&bytes),
      Err(DisassembleError::FramingOverrun {
        address: 6,
        position: 12,
        end: 10
      })
    ));
  }

  #[test]
  fn operand_crossing_region_end_is_fatal() {
    let bytes = [0x02, 0x00, 0x00, 0x00, 0x00, 0x00];
    let mut registered = RegisteredOpcodes::new();

    assert!(matches!(
      disassemble(&bytes, 0..4, &mut registered, &Default::default()),
      Err(DisassembleError::FramingOverrun { end: 4, .. })
    ));
  }

  #[test]
  fn truncated_input_is_a_read_error() {
    assert!(matches!(
      decode(&[0x02, 0x00, 0x01]),
      Err(DisassembleError::ReadError { .. })
    ));
  }

  #[test]
  fn nesting_is_bounded() {
    let mut bytes = vec![0x00, 0x00];
    for _ in 0..4 {
      bytes = push_bin(&bytes);
    }

    let options = ParseOptions { max_block_depth: 3 };
    let mut registered = RegisteredOpcodes::new();

    assert!(matches!(
      disassemble(&bytes, 0..bytes.len(), &mut registered, &options),
      Err(DisassembleError::BlockTooDeep { depth: 4, .. })
    ));

    let options = ParseOptions { max_block_depth: 4 };
    assert!(disassemble(&bytes, 0..bytes.len(), &mut registered, &options).is_ok());
  }

  #[test]
  fn addresses_are_relative_to_the_image() {
    let bytes = [0xAA, 0xBB, 0xCC, 0x00, 0x00, 0x0D, 0x00];
    let mut registered = RegisteredOpcodes::new();

    let instructions = disassemble(&bytes, 3..7, &mut registered, &Default::default()).unwrap();

    assert_eq!(instructions[0].address, 3);
    assert_eq!(instructions[1].address, 5);
    assert_eq!(instructions[1].mnemonic(), "ret");
  }

  #[test]
  fn region_outside_buffer_is_rejected() {
    let mut registered = RegisteredOpcodes::new();
    assert!(matches!(
      disassemble(&[0x00, 0x00], 0..4, &mut registered, &Default::default()),
      Err(DisassembleError::RegionOutOfBounds { .. })
    ));
  }
}

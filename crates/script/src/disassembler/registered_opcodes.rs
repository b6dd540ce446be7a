use std::collections::HashSet;

/// Opcodes made legal mid-stream by `add_cmd` / `add_cmd_alias`.
///
/// One set lives for one decode pass and is shared by every nested block
/// decoded during that pass.
#[derive(Clone, Debug, Default)]
pub struct RegisteredOpcodes {
  opcodes: HashSet<u16>
}

impl RegisteredOpcodes {
  pub fn new() -> Self {
    Default::default()
  }

  /// Returns `false` if the opcode was already registered.
  pub fn register(&mut self, opcode: u16) -> bool {
    self.opcodes.insert(opcode)
  }

  pub fn contains(&self, opcode: u16) -> bool {
    self.opcodes.contains(&opcode)
  }

  pub fn len(&self) -> usize {
    self.opcodes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.opcodes.is_empty()
  }

  pub fn sorted(&self) -> Vec<u16> {
    let mut opcodes = self.opcodes.iter().copied().collect::<Vec<_>>();
    opcodes.sort_unstable();
    opcodes
  }
}

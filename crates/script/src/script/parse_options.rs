pub const DEFAULT_MAX_BLOCK_DEPTH: usize = 64;

#[derive(Clone, Debug)]
pub struct ParseOptions {
  /// How many `push bin` blocks may nest inside each other before decoding
  /// gives up.
  pub max_block_depth: usize
}

impl Default for ParseOptions {
  fn default() -> Self {
    Self {
      max_block_depth: DEFAULT_MAX_BLOCK_DEPTH
    }
  }
}

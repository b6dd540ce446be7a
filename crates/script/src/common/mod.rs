pub mod cipher;
mod escape;
mod text_encoding;

pub use escape::*;
pub use text_encoding::*;

mod assembly_formatter;
mod symbol_formatter;
mod text_formatter;

pub use assembly_formatter::*;
pub use symbol_formatter::*;
pub use text_formatter::*;

pub mod common;
pub mod disassembler;
pub mod formatters;
pub mod script;

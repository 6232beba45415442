// ============================================================================
// Utilities Module
// Thin I/O helpers around the arithmetic core
// ============================================================================

mod input;

pub use input::{parse_operands, read_operands, InputError};

//! A bytecode compiler and stack-based virtual machine for the Lox language.
//!
//! Source text is compiled in a single pass straight to bytecode — there is
//! no AST — and executed on a stack VM with call frames, a global table, and
//! process-wide string interning.

/// Tokens on demand from source text.
pub mod lexer;

/// The instruction set and its operand metadata.
pub mod opcode;

/// Bytecode buffers: instructions, constants, line numbers.
pub mod chunk;

/// Runtime values, heap objects, and the string interner.
pub mod value;

/// Single-pass Pratt compiler from tokens to chunks.
pub mod compiler;

/// The virtual machine.
pub mod vm;

/// Human-readable bytecode listings.
pub mod dis;

/// Error statuses and exit-code mapping.
pub mod error;

pub use error::LoxError;
pub use vm::Vm;

/// Compile and run `source` on a fresh VM.
///
/// For a persistent session (globals surviving between inputs), construct a
/// [`Vm`] and call [`Vm::interpret`] repeatedly instead.
pub fn interpret(source: &str) -> Result<(), LoxError> {
    Vm::new().interpret(source)
}

use thiserror::Error;

/// Failure status of a compile or interpret call.
///
/// Diagnostics are reported on stderr at the point of failure; the variants
/// also carry what was reported so embedders and tests can inspect it
/// without scraping stderr.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoxError {
    /// One or more compile errors were reported. No bytecode was executed.
    #[error("compile error")]
    Compile {
        /// Every diagnostic line that was written, in order.
        diagnostics: Vec<String>,
    },

    /// Execution halted on a runtime error.
    #[error("{message}")]
    Runtime {
        /// The error message, without the stack trace.
        message: String,
    },
}

impl LoxError {
    /// Conventional sysexits code for this error class.
    pub fn exit_code(&self) -> i32 {
        match self {
            LoxError::Compile { .. } => 65,
            LoxError::Runtime { .. } => 70,
        }
    }
}

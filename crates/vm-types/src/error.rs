use std::fmt;

/// Faults raised inside the interpreter. A fault always discards the
/// run's state changes; the voluntary revert is reported separately in
/// `ExecutionStatus` and is not a fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Gas ran out before the program completed. Resource bounds are
    /// enforced by the interpreter and surface here.
    OutOfGas,
    /// Jump to a position the program does not declare as a destination.
    BadJumpDestination { destination: usize },
    /// Instruction byte outside the instruction set.
    BadInstruction { instruction: u8 },
    /// An instruction popped more values than the stack held.
    StackUnderflow {
        instruction: &'static str,
        wanted: usize,
        on_stack: usize,
    },
    /// An instruction would push past the stack limit.
    OutOfStack { wanted: usize, limit: usize },
    /// Any other internal interpreter fault, e.g. malformed bytecode.
    Internal(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::OutOfGas => write!(f, "Out of gas"),
            Error::BadJumpDestination { destination } => {
                write!(f, "Bad jump destination {:x}", destination)
            }
            Error::BadInstruction { instruction } => {
                write!(f, "Bad instruction {:x}", instruction)
            }
            Error::StackUnderflow {
                instruction,
                wanted,
                on_stack,
            } => write!(
                f,
                "Stack underflow {} {}/{}",
                instruction, wanted, on_stack
            ),
            Error::OutOfStack { wanted, limit } => {
                write!(f, "Out of stack {}/{}", wanted, limit)
            }
            Error::Internal(message) => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

use helios_types::Bytes;

/// Transform applied to deployment bytecode before it is stored as the
/// contract's code. Separating the constructor prelude from the runtime
/// code requires opcode knowledge and therefore belongs to the
/// interpreter; at this boundary the stored form is the bytecode as
/// submitted.
pub fn deployed_code(code: &[u8]) -> Bytes {
    code.to_vec()
}

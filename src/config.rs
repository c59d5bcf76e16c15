/// Default operand stack capacity: 1 MiB.
pub const STACK_SIZE: usize = 1 << 20;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VmConfig {
    /// Operand stack capacity in bytes.
    pub stack_size: usize,
}

impl Default for VmConfig {
    fn default() -> Self {
        Self {
            stack_size: STACK_SIZE,
        }
    }
}

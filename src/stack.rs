use super::*;

/// A fixed-capacity LIFO of raw native-endian values.
///
/// `sp` is the byte offset of the next free slot. Every push and pop is checked before any byte
/// moves, so a failed operation leaves the values beneath it untouched.
pub struct Stack {
    bytes: Box<[u8]>,
    sp: usize,
}

impl Stack {
    pub fn with_capacity(capacity: usize) -> Result<Self, RuntimeError> {
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(capacity)
            .map_err(|_| RuntimeError::StackAllocation { capacity })?;
        bytes.resize(capacity, 0);
        Ok(Self {
            bytes: bytes.into_boxed_slice(),
            sp: 0,
        })
    }

    pub fn push<W: Word>(&mut self, value: W) -> Result<(), RuntimeError> {
        let end = self
            .sp
            .checked_add(W::SIZE)
            .filter(|&end| end <= self.capacity())
            .ok_or(RuntimeError::StackOverflow {
                sp: self.sp,
                size: W::SIZE,
                capacity: self.capacity(),
            })?;
        value.store(&mut self.bytes[self.sp..end]);
        self.sp = end;
        Ok(())
    }

    pub fn pop<W: Word>(&mut self) -> Result<W, RuntimeError> {
        if self.sp < W::SIZE {
            return Err(RuntimeError::StackUnderflow {
                sp: self.sp,
                size: W::SIZE,
            });
        }
        let start = self.sp - W::SIZE;
        let value = W::load(&self.bytes[start..self.sp]);
        self.sp = start;
        Ok(value)
    }

    /// Bytes currently in use.
    pub(crate) fn len(&self) -> usize {
        self.sp
    }

    fn capacity(&self) -> usize {
        self.bytes.len()
    }
}

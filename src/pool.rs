use super::*;

/// Literal values laid out back to back as native-endian bytes, in emission order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConstantPool {
    bytes: Vec<u8>,
}

impl ConstantPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `value` and returns the byte offset it was written at.
    pub fn push<W: Word>(&mut self, value: W) -> usize {
        let offset = self.bytes.len();
        self.bytes.resize(offset + W::SIZE, 0);
        value.store(&mut self.bytes[offset..]);
        offset
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub(crate) fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn cursor(&self) -> Cursor<'_> {
        Cursor {
            bytes: &self.bytes,
            offset: 0,
        }
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        self.bytes.truncate(len);
    }
}

impl From<Vec<u8>> for ConstantPool {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

/// A forward-only reader over a [`ConstantPool`].
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    /// Reads the next `W` and advances past it.
    pub fn read<W: Word>(&mut self) -> Result<W, RuntimeError> {
        let end = self
            .offset
            .checked_add(W::SIZE)
            .filter(|&end| end <= self.bytes.len())
            .ok_or(RuntimeError::CorruptConstantPool {
                offset: self.offset,
                size: W::SIZE,
                len: self.bytes.len(),
            })?;
        let value = W::load(&self.bytes[self.offset..end]);
        self.offset = end;
        Ok(value)
    }

    pub fn offset(&self) -> usize {
        self.offset
    }
}

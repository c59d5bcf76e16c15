use std::fmt;

/// The static type of an expression. Only exists at compile time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Type {
    None,
    U64,
}

impl Type {
    /// The runtime representation of this type, if values of it ever reach the stack.
    pub fn scalar(self) -> Option<Scalar> {
        match self {
            Type::None => None,
            Type::U64 => Some(Scalar::U64),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::None => write!(f, "none"),
            Type::U64 => write!(f, "u64"),
        }
    }
}

/// A type that has a runtime representation; the tag carried by executable units.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Scalar {
    U64,
}

impl Scalar {
    pub fn ty(self) -> Type {
        match self {
            Scalar::U64 => Type::U64,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.ty().fmt(f)
    }
}

/// A Rust value type that backs a [`Scalar`]. Stored as native-endian bytes with no alignment.
pub trait Word: Copy + fmt::Display {
    const SCALAR: Scalar;
    const SIZE: usize;

    /// `dst` must be exactly `SIZE` bytes long.
    fn store(self, dst: &mut [u8]);
    /// `src` must be exactly `SIZE` bytes long.
    fn load(src: &[u8]) -> Self;

    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
    fn wrapping_mul(self, rhs: Self) -> Self;
    fn checked_div(self, rhs: Self) -> Option<Self>;
}

impl Word for u64 {
    const SCALAR: Scalar = Scalar::U64;
    const SIZE: usize = std::mem::size_of::<u64>();

    fn store(self, dst: &mut [u8]) {
        dst.copy_from_slice(&self.to_ne_bytes());
    }

    fn load(src: &[u8]) -> Self {
        let mut bytes = [0; std::mem::size_of::<u64>()];
        bytes.copy_from_slice(src);
        u64::from_ne_bytes(bytes)
    }

    fn wrapping_add(self, rhs: Self) -> Self {
        u64::wrapping_add(self, rhs)
    }

    fn wrapping_sub(self, rhs: Self) -> Self {
        u64::wrapping_sub(self, rhs)
    }

    fn wrapping_mul(self, rhs: Self) -> Self {
        u64::wrapping_mul(self, rhs)
    }

    fn checked_div(self, rhs: Self) -> Option<Self> {
        u64::checked_div(self, rhs)
    }
}

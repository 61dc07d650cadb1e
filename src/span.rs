//! Contains the [`Bytes`] and [`Span`] types, which describe source code positions.
use std::{
    fmt::{self, Debug, Display},
    ops::{AddAssign, Sub},
};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Default)]
pub struct Bytes(usize);
impl Bytes {
    pub fn new(pos: usize) -> Self {
        Self(pos)
    }
}
impl Display for Bytes {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl From<Bytes> for usize {
    fn from(bytes: Bytes) -> Self {
        bytes.0
    }
}
impl AddAssign<usize> for Bytes {
    fn add_assign(&mut self, rhs: usize) {
        *self = Self(self.0 + rhs)
    }
}
impl Sub<Bytes> for Bytes {
    type Output = Self;

    fn sub(self, rhs: Bytes) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// A half-open byte range into the source text.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    start: Bytes,
    end: Bytes,
}
impl Span {
    pub fn new(start: Bytes, end: Bytes) -> Self {
        Self { start, end }
    }

    /// The span of a token that did not come from any source text.
    pub fn zero() -> Self {
        Self::new(Bytes::new(0), Bytes::new(0))
    }

    /// The smallest span covering both `self` and `other`.
    pub fn to(self, other: Span) -> Span {
        Self::new(self.start.min(other.start), self.end.max(other.end))
    }

    pub fn length(&self) -> Bytes {
        self.end - self.start
    }

    pub fn start(&self) -> Bytes {
        self.start
    }

    #[cfg(test)]
    pub fn lookup<'t>(&self, target: &'t str) -> &'t str {
        &target[self.start.into()..self.end.into()]
    }
}

impl Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_returns_covered_text() {
        let span = Span::new(Bytes::new(4), Bytes::new(7));
        assert_eq!("abc", span.lookup("2 + abc * 4"));
        assert_eq!(Bytes::new(3), span.length());
    }

    #[test]
    fn to_covers_both_spans() {
        let lhs = Span::new(Bytes::new(1), Bytes::new(2));
        let rhs = Span::new(Bytes::new(6), Bytes::new(9));
        assert_eq!(Span::new(Bytes::new(1), Bytes::new(9)), lhs.to(rhs));
        assert_eq!(Span::new(Bytes::new(1), Bytes::new(9)), rhs.to(lhs));
    }
}

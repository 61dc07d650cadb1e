//! Useful character extensions.
pub trait CharExt {
    /// Whether this character is always a token of its own.
    fn is_symbol(&self) -> bool;

    /// Whether this character can be part of an operand.
    fn is_operand_char(&self) -> bool;
}
impl CharExt for char {
    fn is_symbol(&self) -> bool {
        matches!(self, '+' | '-' | '*' | '/' | '^' | '(' | ')')
    }

    fn is_operand_char(&self) -> bool {
        !self.is_whitespace() && !self.is_symbol()
    }
}

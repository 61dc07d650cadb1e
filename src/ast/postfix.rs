use super::Expr;

/// Lazy post-order traversal of an [`Expr`], yielding each element's text.
///
/// Uses an explicit stack, so deep trees do not grow the call stack.
pub struct Postfix<'e> {
    /// Pending nodes, flagged once their children have been scheduled.
    stack: Vec<(&'e Expr, bool)>,
}

impl<'e> Postfix<'e> {
    pub fn new(root: &'e Expr) -> Self {
        Self {
            stack: vec![(root, false)],
        }
    }
}

impl<'e> Iterator for Postfix<'e> {
    type Item = &'e str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((expr, expanded)) = self.stack.pop() {
            match expr {
                Expr::Operand(text) => return Some(text.as_str()),
                Expr::Binary(bin) if expanded => return Some(bin.op.symbol()),
                Expr::Binary(bin) => {
                    self.stack.push((expr, true));
                    self.stack.push((&bin.rhs, false));
                    self.stack.push((&bin.lhs, false));
                }
            }
        }
        None
    }
}

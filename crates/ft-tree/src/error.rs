use thiserror::Error;

/// Structural defect reported by [`crate::red_black::assert_rb_tree`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("root node {0} is red")]
    RedRoot(u32),
    #[error("node {node} links to vacant slot {target}")]
    DanglingLink { node: u32, target: u32 },
    #[error("node {node} has parent {found:?}, expected {expected:?}")]
    ParentMismatch {
        node: u32,
        expected: Option<u32>,
        found: Option<u32>,
    },
    #[error("node {0} is linked as its own child")]
    SelfLink(u32),
    #[error("node {0} has the same node as left and right child")]
    SharedChild(u32),
    #[error("red node {0} has a red child")]
    RedRed(u32),
    #[error("black height differs under node {node}: left {left}, right {right}")]
    BlackHeight { node: u32, left: usize, right: usize },
    #[error("keys out of order at node {0}")]
    Order(u32),
    #[error("tree reaches {found} nodes but holds {expected}")]
    Length { expected: usize, found: usize },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MapError {
    #[error("key not found")]
    KeyNotFound,
}

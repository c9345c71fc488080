use crate::arena::Arena;
use crate::types::{Node, Side};

fn child<N: Node>(node: &N, side: Side) -> Option<u32> {
    match side {
        Side::Left => node.l(),
        Side::Right => node.r(),
    }
}

/// In-order neighbour of `curr` towards `side`: the nearest node of the
/// subtree on that side, else the first ancestor `curr` hangs under from
/// the other side.
fn step<N: Node>(arena: &Arena<N>, mut curr: u32, side: Side) -> Option<u32> {
    if let Some(mut down) = child(&arena[curr], side) {
        while let Some(c) = child(&arena[down], side.opposite()) {
            down = c;
        }
        return Some(down);
    }
    loop {
        let p = arena[curr].p()?;
        if child(&arena[p], side) != Some(curr) {
            return Some(p);
        }
        curr = p;
    }
}

/// In-order successor.
pub fn next<N: Node>(arena: &Arena<N>, curr: u32) -> Option<u32> {
    step(arena, curr, Side::Right)
}

/// In-order predecessor.
pub fn prev<N: Node>(arena: &Arena<N>, curr: u32) -> Option<u32> {
    step(arena, curr, Side::Left)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RbNode;

    //     2
    //    / \
    //   0   4
    //      /
    //     3
    fn sample() -> Arena<RbNode<u8>> {
        let mut arena = Arena::new();
        for v in [2, 0, 4, 3] {
            arena.insert(RbNode::new(v));
        }
        arena[0].l = Some(1);
        arena[0].r = Some(2);
        arena[1].p = Some(0);
        arena[2].p = Some(0);
        arena[2].l = Some(3);
        arena[3].p = Some(2);
        arena
    }

    #[test]
    fn test_walks_both_directions() {
        let arena = sample();
        let mut forward = vec![1];
        while let Some(i) = next(&arena, *forward.last().unwrap()) {
            forward.push(i);
        }
        assert_eq!(forward, vec![1, 0, 3, 2]);

        let mut backward = vec![2];
        while let Some(i) = prev(&arena, *backward.last().unwrap()) {
            backward.push(i);
        }
        assert_eq!(backward, vec![2, 3, 0, 1]);
    }
}

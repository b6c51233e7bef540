use std::cell::Cell;
use std::rc::Rc;

/// Shared flag that a view clears when it unmounts.
///
/// Async handlers hold a clone and check it before applying the result of a
/// suspended call, so nothing is written into a view that is gone.
#[derive(Debug, Clone)]
pub struct MountToken(Rc<Cell<bool>>);

impl MountToken {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_mounted(&self) -> bool {
        self.0.get()
    }

    pub fn unmount(&self) {
        self.0.set(false);
    }
}

impl Default for MountToken {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let token = MountToken::new();
        let held_by_task = token.clone();
        assert!(held_by_task.is_mounted());

        token.unmount();
        assert!(!held_by_task.is_mounted());
    }
}

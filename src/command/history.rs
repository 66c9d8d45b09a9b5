use super::Command;

/// Committed drawing commands plus the commands undone since the last commit.
///
/// History is strictly linear: committing anything new throws away the redo
/// chain, and redo always re-appends at the end.
#[derive(Debug, Default, Clone)]
pub struct History {
    /// Commands in creation order, oldest first
    committed: Vec<Command>,
    /// Undone commands, most recently undone last
    redo_stack: Vec<Command>,
}

impl History {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a command and invalidates the redo chain.
    ///
    /// Returns the index the command was committed at.
    pub fn commit(&mut self, command: Command) -> usize {
        log::debug!("Committing {} (history length {})", command.name(), self.committed.len() + 1);
        self.committed.push(command);
        self.redo_stack.clear();
        self.committed.len() - 1
    }

    /// Moves the newest command onto the redo stack. Returns false when there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(command) = self.committed.pop() else {
            return false;
        };
        log::debug!("Undo {}", command.name());
        self.redo_stack.push(command);
        true
    }

    /// Re-appends the most recently undone command. Returns false when there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(command) = self.redo_stack.pop() else {
            return false;
        };
        log::debug!("Redo {}", command.name());
        self.committed.push(command);
        true
    }

    /// Empties both the committed commands and the redo stack.
    pub fn clear(&mut self) {
        self.committed.clear();
        self.redo_stack.clear();
    }

    /// Committed commands in drawing order.
    pub fn snapshot(&self) -> &[Command] {
        &self.committed
    }

    pub fn redo_stack(&self) -> &[Command] {
        &self.redo_stack
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Command> {
        self.committed.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.committed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{MarkerStroke, StickerPlacement};
    use egui::Pos2;

    fn stroke(x: f32) -> Command {
        MarkerStroke::new(Pos2::new(x, x), 2.0).into()
    }

    #[test]
    fn test_commit_returns_tail_index() {
        let mut history = History::new();
        assert_eq!(history.commit(stroke(1.0)), 0);
        assert_eq!(history.commit(stroke(2.0)), 1);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_undo_redo_move_one_command() {
        let mut history = History::new();
        history.commit(stroke(1.0));
        history.commit(StickerPlacement::new(Pos2::new(5.0, 5.0), "😀").into());

        assert!(history.undo());
        assert_eq!(history.len(), 1);
        assert_eq!(history.redo_stack().len(), 1);

        assert!(history.redo());
        assert_eq!(history.len(), 2);
        assert!(history.snapshot()[1].as_sticker().is_some());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_empty_undo_and_redo_are_noops() {
        let mut history = History::new();
        assert!(!history.undo());
        assert!(!history.redo());
        assert!(history.is_empty());
        assert!(history.redo_stack().is_empty());
    }

    #[test]
    fn test_commit_clears_redo_stack() {
        let mut history = History::new();
        history.commit(stroke(1.0));
        history.undo();
        assert!(history.can_redo());

        history.commit(stroke(2.0));
        assert!(!history.can_redo());
        assert!(!history.redo());
        assert_eq!(history.snapshot(), &[stroke(2.0)]);
    }
}

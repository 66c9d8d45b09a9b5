use super::InputEvent;
use crate::command::History;
use crate::preview::Preview;
use crate::tools::ToolController;

/// Whether the primary button is held on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouterState {
    #[default]
    Idle,
    Drawing {
        /// History index of the command this press is extending. None when
        /// the press started nothing or the command was detached.
        active: Option<usize>,
    },
}

/// Turns pointer events into history commits, drags and preview updates.
#[derive(Debug, Default)]
pub struct InputRouter {
    state: RouterState,
    preview: Option<Preview>,
}

impl InputRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RouterState {
        self.state
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, RouterState::Drawing { .. })
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    /// Applies one event. Returns true when the canvas needs to be redrawn.
    pub fn handle(
        &mut self,
        event: &InputEvent,
        history: &mut History,
        tools: &ToolController,
    ) -> bool {
        match (self.state, *event) {
            (_, InputEvent::PointerDown { pos }) => {
                // Committed right away so a click without a drag still leaves a mark.
                let active = tools.begin_command(pos).map(|cmd| history.commit(cmd));
                self.preview = None;
                self.state = RouterState::Drawing { active };
                log::debug!("Idle -> Drawing at {pos:?} (command {active:?})");
                true
            }
            (RouterState::Idle, InputEvent::PointerMove { pos }) => {
                self.preview = tools.preview_at(pos);
                true
            }
            (RouterState::Drawing { active }, InputEvent::PointerMove { pos }) => {
                if let Some(index) = active {
                    if let Some(command) = history.get_mut(index) {
                        command.drag(pos);
                    }
                }
                true
            }
            (RouterState::Drawing { .. }, InputEvent::PointerUp { .. }) => {
                log::debug!("Drawing -> Idle");
                self.state = RouterState::Idle;
                true
            }
            (RouterState::Idle, InputEvent::PointerUp { .. }) => false,
            (_, InputEvent::PointerLeave) => {
                if self.is_drawing() {
                    log::debug!("Pointer left canvas while drawing, Drawing -> Idle");
                }
                self.state = RouterState::Idle;
                self.preview = None;
                true
            }
        }
    }

    /// Stops extending the in-progress command without ending the press.
    ///
    /// Must be called whenever history changes outside of [`InputRouter::handle`],
    /// since the stored index may no longer refer to the same command.
    pub fn detach(&mut self) {
        if let RouterState::Drawing { active } = &mut self.state {
            *active = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Pos2;

    fn down(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerDown { pos: Pos2::new(x, y) }
    }

    fn mv(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerMove { pos: Pos2::new(x, y) }
    }

    #[test]
    fn test_idle_move_sets_preview() {
        let mut router = InputRouter::new();
        let mut history = History::new();
        let tools = ToolController::default();

        assert!(router.handle(&mv(4.0, 4.0), &mut history, &tools));
        assert_eq!(router.preview().unwrap().position(), Pos2::new(4.0, 4.0));
        assert!(history.is_empty());
    }

    #[test]
    fn test_press_clears_preview_and_commits() {
        let mut router = InputRouter::new();
        let mut history = History::new();
        let tools = ToolController::default();

        router.handle(&mv(4.0, 4.0), &mut history, &tools);
        router.handle(&down(5.0, 5.0), &mut history, &tools);

        assert!(router.preview().is_none());
        assert_eq!(router.state(), RouterState::Drawing { active: Some(0) });
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_release_while_idle_needs_no_redraw() {
        let mut router = InputRouter::new();
        let mut history = History::new();
        let tools = ToolController::default();

        let up = InputEvent::PointerUp { pos: Pos2::ZERO };
        assert!(!router.handle(&up, &mut history, &tools));
    }

    #[test]
    fn test_detached_command_is_not_dragged() {
        let mut router = InputRouter::new();
        let mut history = History::new();
        let tools = ToolController::default();

        router.handle(&down(1.0, 1.0), &mut history, &tools);
        history.undo();
        router.detach();
        router.handle(&mv(2.0, 2.0), &mut history, &tools);

        assert!(router.is_drawing());
        assert!(history.is_empty());
        assert_eq!(history.redo_stack()[0].as_stroke().unwrap().points().len(), 1);
    }
}

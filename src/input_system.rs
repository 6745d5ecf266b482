use crate::modal::Substate;
use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;

/// Actions the host loop performs in response to input
///
/// Modal hotkeys never show up here: they are offered to the engine first
/// and only keys it doesn't claim are translated into host actions.
#[derive(Debug, Clone, PartialEq)]
pub enum HostAction {
    // === Gameplay (only sent while the gate is open) ===
    Move(i32, i32),

    // === Screens ===
    NextRoute,
    Click(i32, i32),

    // === Simulated server messages ===
    Substate(Substate),
    StartCountdown,
    ConfirmStart,

    // === System ===
    Quit,
}

/// Input context determines which actions are available
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// On the gameplay route with nothing blocking
    Playing,
    /// A blocking modal is up, or we're on a non-gameplay screen
    Blocked,
}

/// Name the hotkey dispatcher understands for `key`, if any
///
/// Keypad digits map to the same names as the number row.
pub fn hotkey_name(key: Keycode) -> Option<&'static str> {
    match key {
        Keycode::Num1 | Keycode::Kp1 => Some("1"),
        Keycode::Num2 | Keycode::Kp2 => Some("2"),
        Keycode::Num3 | Keycode::Kp3 => Some("3"),
        Keycode::Num4 | Keycode::Kp4 => Some("4"),
        Keycode::Num5 | Keycode::Kp5 => Some("5"),
        Keycode::Num6 | Keycode::Kp6 => Some("6"),
        Keycode::Num7 | Keycode::Kp7 => Some("7"),
        Keycode::Num8 | Keycode::Kp8 => Some("8"),
        Keycode::Num9 | Keycode::Kp9 => Some("9"),
        Keycode::Y => Some("y"),
        Keycode::N => Some("n"),
        _ => None,
    }
}

/// InputSystem turns SDL2 events into hotkey presses and [`HostAction`]s
///
/// # Architecture
///
/// 1. Host sets the [`InputContext`] from the engine's gate
/// 2. Each key press is offered to the modal hotkeys
/// 3. Unclaimed keys are mapped according to the context
/// 4. Resulting actions go back to the host loop
pub struct InputSystem {
    pub context: InputContext,
}

impl InputSystem {
    pub fn new() -> Self {
        InputSystem {
            context: InputContext::Blocked,
        }
    }

    /// Update the context from the engine's published gate
    pub fn update_context(&mut self, input_allowed: bool) {
        self.context = if input_allowed {
            InputContext::Playing
        } else {
            InputContext::Blocked
        };
    }

    /// Drain pending SDL2 events
    ///
    /// `hotkeys` receives every key with a hotkey name and returns whether it
    /// consumed the press; consumed keys produce no host action.
    pub fn poll_events(
        &self,
        event_pump: &mut EventPump,
        mut hotkeys: impl FnMut(&str) -> bool,
    ) -> Vec<HostAction> {
        let mut actions = Vec::new();

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => actions.push(HostAction::Quit),
                Event::KeyDown {
                    keycode: Some(key),
                    repeat: false,
                    ..
                } => {
                    let consumed = hotkey_name(key).is_some_and(|name| hotkeys(name));
                    if !consumed {
                        self.handle_keydown(key, &mut actions);
                    }
                }
                Event::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    x,
                    y,
                    ..
                } => actions.push(HostAction::Click(x, y)),
                _ => {}
            }
        }

        actions
    }

    /// Map an unclaimed key press to host actions
    pub fn handle_keydown(&self, key: Keycode, actions: &mut Vec<HostAction>) {
        if self.context == InputContext::Playing {
            let step = match key {
                Keycode::W | Keycode::Up => Some((0, -1)),
                Keycode::S | Keycode::Down => Some((0, 1)),
                Keycode::A | Keycode::Left => Some((-1, 0)),
                Keycode::D | Keycode::Right => Some((1, 0)),
                _ => None,
            };
            if let Some((dx, dy)) = step {
                actions.push(HostAction::Move(dx, dy));
                return;
            }
        }

        match key {
            Keycode::Escape => actions.push(HostAction::Quit),
            Keycode::Tab => actions.push(HostAction::NextRoute),
            Keycode::F1 => actions.push(HostAction::Substate(Substate::ServerShutdown)),
            Keycode::F2 => actions.push(HostAction::Substate(Substate::Kicked)),
            Keycode::F3 => actions.push(HostAction::Substate(Substate::Dead)),
            Keycode::F4 => actions.push(HostAction::Substate(Substate::Disconnected)),
            Keycode::F5 => actions.push(HostAction::Substate(Substate::WaitingOnStart)),
            Keycode::F6 => actions.push(HostAction::Substate(Substate::QuestWindow)),
            Keycode::F7 => actions.push(HostAction::StartCountdown),
            Keycode::F8 => actions.push(HostAction::ConfirmStart),
            _ => {}
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actions_for(system: &InputSystem, key: Keycode) -> Vec<HostAction> {
        let mut actions = Vec::new();
        system.handle_keydown(key, &mut actions);
        actions
    }

    #[test]
    fn test_starts_blocked() {
        let input = InputSystem::new();
        assert_eq!(input.context, InputContext::Blocked);
    }

    #[test]
    fn test_context_follows_gate() {
        let mut input = InputSystem::new();
        input.update_context(true);
        assert_eq!(input.context, InputContext::Playing);
        input.update_context(false);
        assert_eq!(input.context, InputContext::Blocked);
    }

    #[test]
    fn test_movement_only_while_playing() {
        let mut input = InputSystem::new();
        assert!(actions_for(&input, Keycode::W).is_empty());

        input.update_context(true);
        assert_eq!(actions_for(&input, Keycode::W), vec![HostAction::Move(0, -1)]);
        assert_eq!(actions_for(&input, Keycode::Right), vec![HostAction::Move(1, 0)]);
    }

    #[test]
    fn test_producer_keys_work_in_any_context() {
        let input = InputSystem::new();
        assert_eq!(
            actions_for(&input, Keycode::F1),
            vec![HostAction::Substate(Substate::ServerShutdown)]
        );
        assert_eq!(actions_for(&input, Keycode::Tab), vec![HostAction::NextRoute]);
    }

    #[test]
    fn test_hotkey_names() {
        assert_eq!(hotkey_name(Keycode::Num1), Some("1"));
        assert_eq!(hotkey_name(Keycode::Kp9), Some("9"));
        assert_eq!(hotkey_name(Keycode::Y), Some("y"));
        assert_eq!(hotkey_name(Keycode::N), Some("n"));
        assert_eq!(hotkey_name(Keycode::W), None);
    }
}

use std::collections::HashMap;

use winit::keyboard::KeyCode;

#[derive(Debug, Default)]
pub struct Keyboard {
    state: HashMap<KeyCode, bool>,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, key: KeyCode, pressed: bool) {
        self.state.insert(key, pressed);
    }

    pub fn is_down(&self, key: KeyCode) -> bool {
        self.state.get(&key).copied().unwrap_or(false)
    }

    // An unfocused window receives no key releases.
    pub fn release_all(&mut self) {
        self.state.clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bindings {
    pub quit: KeyCode,
    pub wireframe: KeyCode,
    pub raise: KeyCode,
    pub lower: KeyCode,
    pub alpha_up: KeyCode,
    pub alpha_down: KeyCode,
    pub randomize_colors: KeyCode,
}

impl Default for Bindings {
    fn default() -> Self {
        Bindings {
            quit: KeyCode::Escape,
            wireframe: KeyCode::Space,
            raise: KeyCode::KeyW,
            lower: KeyCode::KeyS,
            alpha_up: KeyCode::KeyT,
            alpha_down: KeyCode::KeyG,
            randomize_colors: KeyCode::KeyC,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameInput {
    pub quit: bool,
    pub wireframe: bool,
    pub raise: bool,
    pub lower: bool,
    pub alpha_up: bool,
    pub alpha_down: bool,
    pub randomize_colors: bool,
}

impl FrameInput {
    pub fn sample(keyboard: &Keyboard, bindings: &Bindings) -> Self {
        FrameInput {
            quit: keyboard.is_down(bindings.quit),
            wireframe: keyboard.is_down(bindings.wireframe),
            raise: keyboard.is_down(bindings.raise),
            lower: keyboard.is_down(bindings.lower),
            alpha_up: keyboard.is_down(bindings.alpha_up),
            alpha_down: keyboard.is_down(bindings.alpha_down),
            randomize_colors: keyboard.is_down(bindings.randomize_colors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unseen_keys_are_released() {
        let keyboard = Keyboard::new();
        assert!(!keyboard.is_down(KeyCode::KeyW));
        assert_eq!(
            FrameInput::sample(&keyboard, &Bindings::default()),
            FrameInput::default()
        );
    }

    #[test]
    fn sample_follows_key_levels() {
        let bindings = Bindings::default();
        let mut keyboard = Keyboard::new();
        keyboard.update(KeyCode::Space, true);
        keyboard.update(KeyCode::KeyT, true);

        let input = FrameInput::sample(&keyboard, &bindings);
        assert!(input.wireframe);
        assert!(input.alpha_up);
        assert!(!input.raise);

        keyboard.update(KeyCode::Space, false);
        let input = FrameInput::sample(&keyboard, &bindings);
        assert!(!input.wireframe);
        assert!(input.alpha_up);
    }

    #[test]
    fn focus_loss_releases_everything() {
        let mut keyboard = Keyboard::new();
        keyboard.update(KeyCode::KeyC, true);
        keyboard.update(KeyCode::KeyW, true);
        keyboard.release_all();
        assert!(!keyboard.is_down(KeyCode::KeyC));
        assert!(!keyboard.is_down(KeyCode::KeyW));
    }

    #[test]
    fn default_bindings() {
        let bindings = Bindings::default();
        assert_eq!(bindings.quit, KeyCode::Escape);
        assert_eq!(bindings.wireframe, KeyCode::Space);
        assert_eq!(bindings.randomize_colors, KeyCode::KeyC);
    }
}

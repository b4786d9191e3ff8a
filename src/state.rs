use crate::input::FrameInput;

pub const OFFSET_STEP: f32 = 0.01;
pub const ALPHA_STEP: f32 = 0.01;

/// Edge detector for actions that fire once per key press.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Latch {
    #[default]
    Idle,
    Pressed,
}

impl Latch {
    pub fn update(&mut self, held: bool) -> bool {
        match (*self, held) {
            (Latch::Idle, true) => {
                *self = Latch::Pressed;
                true
            }
            (Latch::Pressed, false) => {
                *self = Latch::Idle;
                false
            }
            _ => false,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameActions {
    pub quit: bool,
    pub randomize_colors: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderState {
    pub offset_y: f32,
    pub alpha: f32,
    pub wireframe: bool,
    pub color_latch: Latch,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            offset_y: 0.0,
            alpha: 1.0,
            wireframe: false,
            color_latch: Latch::Idle,
        }
    }
}

impl RenderState {
    pub fn update(&mut self, input: &FrameInput) -> FrameActions {
        self.wireframe = input.wireframe;

        if input.raise {
            self.offset_y += OFFSET_STEP;
        }
        if input.lower {
            self.offset_y -= OFFSET_STEP;
        }

        if input.alpha_up {
            self.alpha = (self.alpha + ALPHA_STEP).min(1.0);
        }
        if input.alpha_down {
            self.alpha = (self.alpha - ALPHA_STEP).max(0.0);
        }

        FrameActions {
            quit: input.quit,
            randomize_colors: self.color_latch.update(input.randomize_colors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(f: impl FnOnce(&mut FrameInput)) -> FrameInput {
        let mut input = FrameInput::default();
        f(&mut input);
        input
    }

    #[test]
    fn alpha_saturates_at_both_ends() {
        let mut state = RenderState::default();
        let up = held(|i| i.alpha_up = true);
        let down = held(|i| i.alpha_down = true);

        for _ in 0..500 {
            state.update(&up);
            assert!((0.0..=1.0).contains(&state.alpha));
        }
        assert_eq!(state.alpha, 1.0);

        for _ in 0..500 {
            state.update(&down);
            assert!((0.0..=1.0).contains(&state.alpha));
        }
        assert_eq!(state.alpha, 0.0);

        state.update(&up);
        assert!(state.alpha > 0.0);
    }

    #[test]
    fn offset_moves_with_held_key_and_is_unbounded() {
        let mut state = RenderState::default();
        let raise = held(|i| i.raise = true);
        let lower = held(|i| i.lower = true);

        let mut previous = state.offset_y;
        for _ in 0..1000 {
            state.update(&raise);
            assert!(state.offset_y > previous);
            previous = state.offset_y;
        }
        assert!(state.offset_y > 9.0);

        for _ in 0..3000 {
            state.update(&lower);
            assert!(state.offset_y < previous);
            previous = state.offset_y;
        }
        assert!(state.offset_y < -19.0);
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut state = RenderState::default();
        state.update(&held(|i| {
            i.raise = true;
            i.lower = true;
        }));
        assert_eq!(state.offset_y, 0.0);
    }

    #[test]
    fn wireframe_follows_key_every_frame() {
        let mut state = RenderState::default();
        state.update(&held(|i| i.wireframe = true));
        assert!(state.wireframe);
        state.update(&held(|i| i.wireframe = true));
        assert!(state.wireframe);
        state.update(&FrameInput::default());
        assert!(!state.wireframe);
    }

    #[test]
    fn holding_randomize_fires_once() {
        let mut state = RenderState::default();
        let press = held(|i| i.randomize_colors = true);

        let fired = (0..10)
            .filter(|_| state.update(&press).randomize_colors)
            .count();
        assert_eq!(fired, 1);
        assert_eq!(state.color_latch, Latch::Pressed);
    }

    #[test]
    fn each_discrete_press_fires() {
        let mut state = RenderState::default();
        let press = held(|i| i.randomize_colors = true);
        let release = FrameInput::default();

        let frames = [&press, &press, &release, &press, &release, &release];
        let fired = frames
            .iter()
            .filter(|input| state.update(input).randomize_colors)
            .count();
        assert_eq!(fired, 2);
        assert_eq!(state.color_latch, Latch::Idle);
    }

    #[test]
    fn quit_is_reported_while_held() {
        let mut state = RenderState::default();
        let quit = held(|i| i.quit = true);
        assert!(state.update(&quit).quit);
        assert!(state.update(&quit).quit);
        assert!(!state.update(&FrameInput::default()).quit);
    }

    #[test]
    fn latch_transitions() {
        let mut latch = Latch::default();
        assert!(!latch.update(false));
        assert_eq!(latch, Latch::Idle);
        assert!(latch.update(true));
        assert!(!latch.update(true));
        assert!(!latch.update(false));
        assert!(latch.update(true));
    }
}

//! Edge-triggered key combination.

/// State of a [`ComboLatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LatchState {
    #[default]
    Idle,
    Armed,
}

/// Fires once when a modifier+key combination goes down and stays quiet until
/// both keys have been released again.
///
/// Holding the combination across many frames triggers exactly one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComboLatch {
    state: LatchState,
}

impl ComboLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LatchState {
        self.state
    }

    /// Feed this frame's held state. Returns true on the frame the command fires.
    pub fn update(&mut self, modifier_held: bool, key_held: bool) -> bool {
        match self.state {
            LatchState::Idle if modifier_held && key_held => {
                self.state = LatchState::Armed;
                true
            }
            LatchState::Armed if !modifier_held && !key_held => {
                self.state = LatchState::Idle;
                false
            }
            _ => false,
        }
    }
}

use super::interrupts::{Interrupt, InterruptController};

/// The eight DMG buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Button {
    Right,
    Left,
    Up,
    Down,
    A,
    B,
    Select,
    Start,
}

impl Button {
    pub const ALL: [Button; 8] = [
        Button::Right,
        Button::Left,
        Button::Up,
        Button::Down,
        Button::A,
        Button::B,
        Button::Select,
        Button::Start,
    ];

    /// Bit in the state mask: directions in the low nibble, action
    /// buttons in the high nibble, each in P1 line order.
    #[inline]
    fn mask(self) -> u8 {
        match self {
            Button::Right => 0x01,
            Button::Left => 0x02,
            Button::Up => 0x04,
            Button::Down => 0x08,
            Button::A => 0x10,
            Button::B => 0x20,
            Button::Select => 0x40,
            Button::Start => 0x80,
        }
    }

    #[inline]
    fn is_direction(self) -> bool {
        self.mask() & 0x0F != 0
    }
}

/// Select line for the d-pad (P14, active low).
const SELECT_DIRECTIONS: u8 = 0x10;
/// Select line for the action buttons (P15, active low).
const SELECT_ACTIONS: u8 = 0x20;

/// Button latch and P1/JOYP matrix.
#[derive(Clone, Debug)]
pub struct Joypad {
    /// One bit per button, 0 = pressed.
    state: u8,
    /// P1 bits 4-5 as last written.
    select: u8,
}

impl Default for Joypad {
    fn default() -> Self {
        Self {
            state: 0xFF,
            select: SELECT_DIRECTIONS | SELECT_ACTIONS,
        }
    }
}

impl Joypad {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_pressed(&self, button: Button) -> bool {
        self.state & button.mask() == 0
    }

    fn group_selected(&self, button: Button) -> bool {
        let line = if button.is_direction() {
            SELECT_DIRECTIONS
        } else {
            SELECT_ACTIONS
        };
        self.select & line == 0
    }

    /// Record a press or release. A new press requests the joypad
    /// interrupt when the button's group is currently selected.
    pub fn update(&mut self, button: Button, pressed: bool, interrupts: &mut InterruptController) {
        let was_pressed = self.is_pressed(button);
        if pressed {
            self.state &= !button.mask();
            if !was_pressed && self.group_selected(button) {
                log::debug!("joypad: {:?} pressed", button);
                interrupts.request(Interrupt::Joypad);
            }
        } else {
            self.state |= button.mask();
        }
    }

    /// P1 as seen by the CPU: unused bits read 1, the select bits echo the
    /// last write and the low nibble is the AND of every selected group.
    pub fn read(&self) -> u8 {
        let mut lines = 0x0F;
        if self.select & SELECT_DIRECTIONS == 0 {
            lines &= self.state & 0x0F;
        }
        if self.select & SELECT_ACTIONS == 0 {
            lines &= self.state >> 4;
        }
        0xC0 | self.select | lines
    }

    /// Only the select bits are writable.
    pub fn write(&mut self, value: u8) {
        self.select = value & (SELECT_DIRECTIONS | SELECT_ACTIONS);
    }
}

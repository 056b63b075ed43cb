//! Keyboard and pointer input as delivered by the host

use bitflags::bitflags;

bitflags! {
    /// Modifier keys held while an event was generated
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0000_0001;
        /// Option on macOS
        const ALTERNATE = 0b0000_0010;
        const CONTROL = 0b0000_0100;
        const COMMAND = 0b0000_1000;
    }
}

impl Modifiers {
    pub fn shift(self) -> bool {
        self.contains(Modifiers::SHIFT)
    }

    pub fn alternate(self) -> bool {
        self.contains(Modifiers::ALTERNATE)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    /// Forward/backward delete
    Delete,
    Return,
    Character(char),
    Unknown(u32),
}

impl Key {
    const UP_ARROW_CODE: u32 = 0xF700;
    const DOWN_ARROW_CODE: u32 = 0xF701;
    const DELETE_CODE: u32 = 0x7F;
    const RETURN_CODE: u32 = 0x0D;

    /// Decode the first character code of a native key event.
    pub fn from_char_code(code: u32) -> Key {
        match code {
            Self::UP_ARROW_CODE => Key::ArrowUp,
            Self::DOWN_ARROW_CODE => Key::ArrowDown,
            Self::DELETE_CODE | 0x08 => Key::Delete,
            Self::RETURN_CODE | 0x03 => Key::Return,
            _ => match char::from_u32(code) {
                Some(ch) if !ch.is_control() => Key::Character(ch),
                _ => Key::Unknown(code),
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    pub fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::empty())
    }
}

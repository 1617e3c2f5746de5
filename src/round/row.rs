//! The in-progress guess row

use crate::core::{CODE_LENGTH, Code, Color};

/// Scratch state for the row currently being assembled
///
/// Four optional slots plus a cursor identifying the slot the next color
/// lands in. The cursor always stays in `[0, CODE_LENGTH)`: placing a color
/// auto-advances it, saturating at the last slot (which overwrites in place).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentRow {
    slots: [Option<Color>; CODE_LENGTH],
    cursor: usize,
}

impl CurrentRow {
    /// Fresh row: all slots empty, cursor on slot 0
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [None; CODE_LENGTH],
            cursor: 0,
        }
    }

    /// Place a color at the cursor and advance it (saturating)
    pub fn place(&mut self, color: Color) {
        self.slots[self.cursor] = Some(color);
        if self.cursor < CODE_LENGTH - 1 {
            self.cursor += 1;
        }
    }

    /// Move the cursor to `slot`; out-of-range indices are ignored
    pub fn select(&mut self, slot: usize) {
        if slot < CODE_LENGTH {
            self.cursor = slot;
        }
    }

    /// Empty every slot and return the cursor to slot 0
    pub fn clear(&mut self) {
        self.slots = [None; CODE_LENGTH];
        self.cursor = 0;
    }

    /// True when every slot holds a color
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Slot the next placed color lands in
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// The slots as currently filled
    #[must_use]
    pub const fn slots(&self) -> &[Option<Color>; CODE_LENGTH] {
        &self.slots
    }

    /// The committed code, if every slot is filled
    #[must_use]
    pub fn as_code(&self) -> Option<Code> {
        let mut colors = [Color::Purple; CODE_LENGTH];
        for (slot, color) in self.slots.iter().enumerate() {
            colors[slot] = (*color)?;
        }
        Some(Code::new(colors))
    }
}

impl Default for CurrentRow {
    fn default() -> Self {
        Self::new()
    }
}

//! Dialogue domain: the active conversation resource.

use bevy::prelude::*;

/// The conversation currently on screen, if any. Lines are copied out of
/// the content registry when the dialogue starts.
#[derive(Resource, Debug, Default)]
pub struct ActiveDialogue {
    pub npc_name: String,
    pub lines: Vec<String>,
    pub index: usize,
    pub active: bool,
}

impl ActiveDialogue {
    pub fn start(&mut self, npc_name: impl Into<String>, lines: Vec<String>) {
        self.npc_name = npc_name.into();
        self.lines = lines;
        self.index = 0;
        self.active = !self.lines.is_empty();
    }

    pub fn current_line(&self) -> Option<&str> {
        if !self.active {
            return None;
        }
        self.lines.get(self.index).map(String::as_str)
    }

    /// Step to the next line; past the last line the dialogue ends.
    pub fn advance(&mut self) {
        if !self.active {
            return;
        }
        self.index += 1;
        if self.index >= self.lines.len() {
            self.end();
        }
    }

    pub fn end(&mut self) {
        self.npc_name.clear();
        self.lines.clear();
        self.index = 0;
        self.active = false;
    }
}

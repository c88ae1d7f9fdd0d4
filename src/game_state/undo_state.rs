use crate::game_state::chess_types::*;

/// Single undo record pushed by `commit` and popped by `undo`.
///
/// `piece` is the value that stood on `from` before the move, so restoring
/// it also reverses promotion and the moved flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
}

/// Captured pieces, indexed by the color that captured them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedLedger {
    by_color: [Vec<Piece>; 2],
}

impl CapturedLedger {
    #[inline]
    pub fn captured_by(&self, color: Color) -> &[Piece] {
        &self.by_color[color.index()]
    }

    pub(crate) fn push(&mut self, capturer: Color, piece: Piece) {
        self.by_color[capturer.index()].push(piece);
    }

    /// Removes the first entry matching `piece` by kind and color.
    pub(crate) fn remove_first(&mut self, capturer: Color, piece: &Piece) -> bool {
        let entries = &mut self.by_color[capturer.index()];
        match entries.iter().position(|p| p.same_identity(piece)) {
            Some(index) => {
                entries.remove(index);
                true
            }
            None => false,
        }
    }
}

//! Optimistic reordering for Kanban boards.
//!
//! Card moves are staged against a pending copy of the board while the
//! remote write is in flight. `commit` promotes the pending copy once the
//! write is acknowledged; `rollback` restores the last confirmed state.

use uuid::Uuid;

use crate::domain::Board;
use crate::errors::CoreError;

/// A requested card relocation. `position` is clamped to the target column's
/// length, so appending past the end is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardMove {
    pub card_id: Uuid,
    pub to_column: Uuid,
    pub position: usize,
}

#[derive(Debug, Clone)]
pub struct BoardEditor {
    confirmed: Board,
    pending: Option<Board>,
}

impl BoardEditor {
    pub fn new(board: Board) -> Self {
        Self {
            confirmed: board,
            pending: None,
        }
    }

    /// The board to render: the staged copy while a write is in flight,
    /// otherwise the last confirmed state.
    pub fn board(&self) -> &Board {
        self.pending.as_ref().unwrap_or(&self.confirmed)
    }

    pub fn confirmed(&self) -> &Board {
        &self.confirmed
    }

    pub fn is_dirty(&self) -> bool {
        self.pending.is_some()
    }

    /// Stages a move on top of the current view. On error the pending state
    /// is left exactly as it was.
    pub fn stage_move(&mut self, card_move: CardMove) -> Result<(), CoreError> {
        let mut draft = self.board().clone();
        apply_move(&mut draft, &card_move)?;
        self.pending = Some(draft);
        Ok(())
    }

    /// Promotes the staged board after the remote write succeeded.
    pub fn commit(&mut self) {
        if let Some(board) = self.pending.take() {
            self.confirmed = board;
        }
    }

    /// Discards staged moves after a failed write, returning whether there
    /// was anything to discard.
    pub fn rollback(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Consumes the editor, yielding the confirmed board for persistence.
    pub fn into_confirmed(self) -> Board {
        self.confirmed
    }
}

fn apply_move(board: &mut Board, card_move: &CardMove) -> Result<(), CoreError> {
    let (source_column, card_index) = board
        .locate_card(card_move.card_id)
        .ok_or(CoreError::CardNotFound(card_move.card_id))?;
    let target_column = board
        .columns
        .iter()
        .position(|column| column.id == card_move.to_column)
        .ok_or(CoreError::ColumnNotFound(card_move.to_column))?;

    let card = board.columns[source_column].cards.remove(card_index);
    let cards = &mut board.columns[target_column].cards;
    let position = card_move.position.min(cards.len());
    cards.insert(position, card);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with_two_columns() -> (Board, Uuid, Uuid, Uuid) {
        let mut board = Board::new("Sprint");
        let todo = board.add_column("To do");
        let doing = board.add_column("Doing");
        let card = board.column_mut(todo).unwrap().add_card("Invoice client");
        board.column_mut(todo).unwrap().add_card("File taxes");
        (board, todo, doing, card)
    }

    #[test]
    fn staged_move_is_visible_but_not_confirmed() {
        let (board, _todo, doing, card) = board_with_two_columns();
        let mut editor = BoardEditor::new(board);

        editor
            .stage_move(CardMove {
                card_id: card,
                to_column: doing,
                position: 0,
            })
            .unwrap();

        assert!(editor.is_dirty());
        assert_eq!(editor.board().column(doing).unwrap().cards.len(), 1);
        assert!(editor.confirmed().column(doing).unwrap().cards.is_empty());
    }

    #[test]
    fn rollback_restores_last_confirmed_state() {
        let (board, todo, doing, card) = board_with_two_columns();
        let mut editor = BoardEditor::new(board);

        editor
            .stage_move(CardMove {
                card_id: card,
                to_column: doing,
                position: 0,
            })
            .unwrap();
        assert!(editor.rollback());

        assert!(!editor.is_dirty());
        assert_eq!(editor.board().column(todo).unwrap().cards.len(), 2);
        assert!(!editor.rollback(), "second rollback has nothing to discard");
    }

    #[test]
    fn commit_promotes_pending_state() {
        let (board, todo, doing, card) = board_with_two_columns();
        let mut editor = BoardEditor::new(board);

        editor
            .stage_move(CardMove {
                card_id: card,
                to_column: doing,
                position: 5,
            })
            .unwrap();
        editor.commit();

        assert!(!editor.is_dirty());
        let confirmed = editor.into_confirmed();
        assert_eq!(confirmed.column(todo).unwrap().cards.len(), 1);
        assert_eq!(confirmed.column(doing).unwrap().cards.len(), 1);
    }

    #[test]
    fn unknown_card_leaves_pending_untouched() {
        let (board, _todo, doing, card) = board_with_two_columns();
        let mut editor = BoardEditor::new(board);
        editor
            .stage_move(CardMove {
                card_id: card,
                to_column: doing,
                position: 0,
            })
            .unwrap();

        let err = editor
            .stage_move(CardMove {
                card_id: Uuid::new_v4(),
                to_column: doing,
                position: 0,
            })
            .unwrap_err();
        assert!(matches!(err, CoreError::CardNotFound(_)));
        assert_eq!(editor.board().column(doing).unwrap().cards.len(), 1);
    }
}

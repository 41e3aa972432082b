use cashflow_core::core::{BoardEditor, CardMove};
use cashflow_core::domain::Board;
use cashflow_core::errors::CoreError;
use uuid::Uuid;

fn sprint_board() -> (Board, Uuid, Uuid, Uuid, Uuid) {
    let mut board = Board::new("Client work");
    let todo = board.add_column("To do");
    let done = board.add_column("Done");
    let first = board.column_mut(todo).unwrap().add_card("Send proposal");
    let second = board.column_mut(todo).unwrap().add_card("Invoice March");
    (board, todo, done, first, second)
}

#[test]
fn reorder_within_a_column() {
    let (board, todo, _done, first, second) = sprint_board();
    let mut editor = BoardEditor::new(board);

    editor
        .stage_move(CardMove {
            card_id: second,
            to_column: todo,
            position: 0,
        })
        .unwrap();
    editor.commit();

    let cards = &editor.confirmed().column(todo).unwrap().cards;
    assert_eq!(cards[0].id, second);
    assert_eq!(cards[1].id, first);
}

#[test]
fn failed_write_rolls_back_to_confirmed_order() {
    let (board, todo, done, first, _second) = sprint_board();
    let mut editor = BoardEditor::new(board);

    editor
        .stage_move(CardMove {
            card_id: first,
            to_column: done,
            position: 0,
        })
        .unwrap();

    // The optimistic view shows the move; the confirmed state does not.
    assert_eq!(editor.board().column(done).unwrap().cards.len(), 1);
    assert!(editor.confirmed().column(done).unwrap().cards.is_empty());

    assert!(editor.rollback());
    assert_eq!(editor.board().column(todo).unwrap().cards.len(), 2);
    assert!(editor.board().column(done).unwrap().cards.is_empty());
}

#[test]
fn successive_moves_stack_on_the_pending_state() {
    let (board, _todo, done, first, second) = sprint_board();
    let mut editor = BoardEditor::new(board);

    for card in [first, second] {
        editor
            .stage_move(CardMove {
                card_id: card,
                to_column: done,
                position: usize::MAX,
            })
            .unwrap();
    }
    editor.commit();

    let cards = &editor.confirmed().column(done).unwrap().cards;
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].id, first);
    assert_eq!(cards[1].id, second);
}

#[test]
fn moving_to_an_unknown_column_is_rejected() {
    let (board, todo, _done, first, _second) = sprint_board();
    let mut editor = BoardEditor::new(board);

    let err = editor
        .stage_move(CardMove {
            card_id: first,
            to_column: Uuid::new_v4(),
            position: 0,
        })
        .unwrap_err();
    assert!(matches!(err, CoreError::ColumnNotFound(_)));
    assert!(!editor.is_dirty());
    assert_eq!(editor.board().column(todo).unwrap().cards.len(), 2);
}

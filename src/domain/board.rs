use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A Kanban board: ordered columns of ordered cards. Card order within a
/// column is the `Vec` order; there is no separate position field to drift.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub columns: Vec<BoardColumn>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardColumn {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: Uuid,
    pub title: String,
}

impl Board {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            columns: Vec::new(),
        }
    }

    pub fn add_column(&mut self, name: impl Into<String>) -> Uuid {
        let column = BoardColumn {
            id: Uuid::new_v4(),
            name: name.into(),
            cards: Vec::new(),
        };
        let id = column.id;
        self.columns.push(column);
        id
    }

    pub fn column(&self, id: Uuid) -> Option<&BoardColumn> {
        self.columns.iter().find(|column| column.id == id)
    }

    pub fn column_mut(&mut self, id: Uuid) -> Option<&mut BoardColumn> {
        self.columns.iter_mut().find(|column| column.id == id)
    }

    /// Locates a card as `(column index, card index)`.
    pub fn locate_card(&self, card_id: Uuid) -> Option<(usize, usize)> {
        for (column_index, column) in self.columns.iter().enumerate() {
            if let Some(card_index) = column.cards.iter().position(|card| card.id == card_id) {
                return Some((column_index, card_index));
            }
        }
        None
    }
}

impl BoardColumn {
    pub fn add_card(&mut self, title: impl Into<String>) -> Uuid {
        let card = Card {
            id: Uuid::new_v4(),
            title: title.into(),
        };
        let id = card.id;
        self.cards.push(card);
        id
    }
}

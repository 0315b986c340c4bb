use std::fmt;

use serde::{Deserialize, Serialize};

/// A payment card belonging to one user.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub long_num: String,
    pub expires: String,
    pub ccv: String,
    /// Owning user; not part of the encoded form.
    #[serde(skip)]
    pub user_id: String,
}

impl Card {
    /// Replaces every character of the card number except the last four with `*`.
    ///
    /// Numbers of four characters or fewer are left as they are.
    pub fn mask(&mut self) {
        let len = self.long_num.chars().count();
        if len <= 4 {
            return;
        }
        let tail: String = self.long_num.chars().skip(len - 4).collect();
        self.long_num = format!("{}{}", "*".repeat(len - 4), tail);
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Card")
            .field("id", &self.id)
            .field("expires", &self.expires)
            .field("user_id", &self.user_id)
            .finish_non_exhaustive()
    }
}

/// Payload for storing a new card under `user_id`.
#[derive(Clone)]
pub struct NewCard {
    pub card: Card,
    pub user_id: String,
}

impl fmt::Debug for NewCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewCard")
            .field("user_id", &self.user_id)
            .field("expires", &self.card.expires)
            .finish_non_exhaustive()
    }
}

// Inputs of the mutating store operations.
//
// Both commands decode straight from the JSON body. Every field is optional and an
// explicit `null` decodes to `None`. Clients may send `id` and `url`; those are not
// part of either command and are dropped during decoding.

use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub order: Option<i64>,
    #[serde(default)]
    pub completed: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateTodo {
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub order: Option<i64>,
    #[serde(default)]
    pub completed: Option<bool>,
}

impl UpdateTodo {
    pub fn is_empty(&self) -> bool {
        self.user.is_none() && self.title.is_none() && self.order.is_none() && self.completed.is_none()
    }
}

use serde::{Deserialize, Serialize};

use crate::modules::todos::core::commands::{CreateTodo, UpdateTodo};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    pub completed: bool,
    pub url: String,
}

/// Self-link of the todo with the given id, rooted at `base_url`.
pub fn todo_url(base_url: &str, id: i64) -> String {
    format!("{}/{id}", base_url.trim_end_matches('/'))
}

impl Todo {
    pub fn create(id: i64, base_url: &str, command: CreateTodo) -> Self {
        Self {
            id,
            user: command.user,
            title: command.title,
            order: command.order,
            completed: command.completed.unwrap_or(false),
            url: todo_url(base_url, id),
        }
    }

    /// Overwrites every field the patch supplies. `id` and `url` stay as they are.
    pub fn apply(&mut self, patch: UpdateTodo) {
        if let Some(user) = patch.user {
            self.user = Some(user);
        }
        if let Some(order) = patch.order {
            self.order = Some(order);
        }
        if let Some(title) = patch.title {
            self.title = Some(title);
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
    }
}

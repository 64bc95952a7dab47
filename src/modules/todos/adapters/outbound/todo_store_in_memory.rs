// In memory implementation of the TodoStore port.
//
// Purpose
// - Hold the authoritative list of todos for the lifetime of the process.
//
// Responsibilities
// - Assign ids from a counter that only ever grows, also across delete_all.
// - Keep todos in insertion order.
// - Run every operation, reads included, under one fair mutex so operations apply
//   one at a time in the order they were submitted.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::modules::todos::core::commands::{CreateTodo, UpdateTodo};
use crate::modules::todos::core::ports::{StoreError, TodoStore};
use crate::modules::todos::core::todo::Todo;

#[derive(Default)]
struct TodoState {
    todos: Vec<Todo>,
    next_id: i64,
}

impl TodoState {
    fn position(&self, id: i64) -> Result<usize, StoreError> {
        self.todos
            .iter()
            .position(|todo| todo.id == id)
            .ok_or(StoreError::NotFound(id))
    }
}

pub struct InMemoryTodoStore {
    base_url: String,
    state: Mutex<TodoState>,
}

impl InMemoryTodoStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            state: Mutex::new(TodoState::default()),
        }
    }
}

#[async_trait]
impl TodoStore for InMemoryTodoStore {
    async fn create(&self, command: CreateTodo) -> Todo {
        let mut state = self.state.lock().await;
        let id = state.next_id;
        let todo = Todo::create(id, &self.base_url, command);
        state.todos.push(todo.clone());
        state.next_id += 1;
        tracing::debug!(id, "todo created");
        todo
    }

    async fn delete_all(&self) {
        let mut state = self.state.lock().await;
        let removed = state.todos.len();
        state.todos.clear();
        tracing::debug!(removed, "todos cleared");
    }

    async fn list_all(&self) -> Vec<Todo> {
        self.state.lock().await.todos.clone()
    }

    async fn get_by_id(&self, id: i64) -> Result<Todo, StoreError> {
        let state = self.state.lock().await;
        let index = state.position(id)?;
        Ok(state.todos[index].clone())
    }

    async fn update_by_id(&self, id: i64, patch: UpdateTodo) -> Result<Todo, StoreError> {
        let mut state = self.state.lock().await;
        let index = state.position(id)?;
        let todo = &mut state.todos[index];
        if patch.is_empty() {
            tracing::debug!(id, "empty patch, todo left unchanged");
        } else {
            todo.apply(patch);
            tracing::debug!(id, "todo updated");
        }
        Ok(todo.clone())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;
        let index = state.position(id)?;
        state.todos.remove(index);
        tracing::debug!(id, "todo deleted");
        Ok(())
    }
}

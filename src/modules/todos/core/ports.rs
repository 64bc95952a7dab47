// Ports define what the todo handlers need from the store, without implementing it.
//
// Responsibilities
// - Describe the six store operations as an async trait.
// - Name the single failure mode: the requested id is not in the store.
//
// Boundaries
// - No concrete storage here. Adapters implement the trait in the adapters layer.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::todos::core::commands::{CreateTodo, UpdateTodo};
use crate::modules::todos::core::todo::Todo;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("todo {0} not found")]
    NotFound(i64),
}

#[async_trait]
pub trait TodoStore: Send + Sync {
    async fn create(&self, command: CreateTodo) -> Todo;
    async fn delete_all(&self);
    async fn list_all(&self) -> Vec<Todo>;
    async fn get_by_id(&self, id: i64) -> Result<Todo, StoreError>;
    async fn update_by_id(&self, id: i64, patch: UpdateTodo) -> Result<Todo, StoreError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError>;
}

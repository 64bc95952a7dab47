// Builder for CreateTodo commands used across the unit tests.

use crate::modules::todos::core::commands::CreateTodo;

#[derive(Default)]
pub struct CreateTodoBuilder {
    inner: CreateTodo,
}

impl CreateTodoBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(mut self, v: impl Into<String>) -> Self {
        self.inner.user = Some(v.into());
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = Some(v.into());
        self
    }

    pub fn order(mut self, v: i64) -> Self {
        self.inner.order = Some(v);
        self
    }

    pub fn completed(mut self, v: bool) -> Self {
        self.inner.completed = Some(v);
        self
    }

    pub fn build(self) -> CreateTodo {
        self.inner
    }
}

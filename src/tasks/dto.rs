use serde::{Deserialize, Serialize};

use crate::tasks::repo::Task;

/// Request body for creating or replacing a task.
#[derive(Debug, Deserialize)]
pub struct TaskPayload {
    pub name: String,
    pub comment: Option<String>,
    #[serde(default)]
    pub done: bool,
}

/// Task as returned to the client.
#[derive(Debug, Serialize, Deserialize)]
pub struct TaskOut {
    pub id: i64,
    pub name: String,
    pub comment: Option<String>,
    pub done: bool,
    pub owner_id: i64,
}

impl From<Task> for TaskOut {
    fn from(t: Task) -> Self {
        Self {
            id: t.id,
            name: t.name,
            comment: t.comment,
            done: t.done,
            owner_id: t.owner_id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    100
}

//! Local task spawning on the Leptos executor.

use futures::future::LocalBoxFuture;

use crate::session::ports::Spawner;

#[derive(Clone, Copy, Debug, Default)]
pub struct TaskSpawner;

impl Spawner for TaskSpawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        leptos::task::spawn_local(task);
    }
}

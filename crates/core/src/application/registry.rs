//! Active-set registry: which job ids currently own an execution loop
//!
//! One shared registry object wired into the service, the runner, and the
//! reporter. Loops observe deregistration only when they wake
//! (bounded-latency cancellation).

use crate::domain::JobId;
use std::collections::HashMap;
use std::sync::Mutex;
use tokio::task::JoinHandle;

#[derive(Default)]
pub struct ActiveJobs {
    // JoinHandle is attached after spawn; registration happens first so a
    // freshly spawned loop always sees its own id as active.
    inner: Mutex<HashMap<JobId, Option<JoinHandle<()>>>>,
}

impl ActiveJobs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `id` for a new loop. Returns false if a loop already owns it.
    pub fn register(&self, id: &str) -> bool {
        let mut inner = self.inner.lock().unwrap();
        if inner.contains_key(id) {
            return false;
        }
        inner.insert(id.to_string(), None);
        true
    }

    /// Attach the spawned loop's handle to an already registered id
    pub fn attach(&self, id: &str, handle: JoinHandle<()>) {
        let mut inner = self.inner.lock().unwrap();
        if let Some(slot) = inner.get_mut(id) {
            *slot = Some(handle);
        } else {
            // Deregistered between register and attach: the loop will exit
            // at its next wake, nothing to track.
            handle.abort();
        }
    }

    /// Remove `id` from the active set. The loop exits at its next
    /// wake-and-recheck; the detached handle is returned for callers that
    /// want to abort outright (daemon shutdown).
    pub fn deregister(&self, id: &str) -> Option<JoinHandle<()>> {
        self.inner.lock().unwrap().remove(id).flatten()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.inner.lock().unwrap().contains_key(id)
    }

    /// Live count of active loops
    pub fn count(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    /// Abort every loop immediately (process shutdown only)
    pub fn abort_all(&self) {
        let mut inner = self.inner.lock().unwrap();
        for (_, handle) in inner.drain() {
            if let Some(handle) = handle {
                handle.abort();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_is_exclusive_per_id() {
        let active = ActiveJobs::new();
        assert!(active.register("posting-1"));
        assert!(!active.register("posting-1"));
        assert!(active.register("posting-2"));
        assert_eq!(active.count(), 2);
    }

    #[test]
    fn deregister_frees_the_id() {
        let active = ActiveJobs::new();
        active.register("posting-1");
        assert!(active.contains("posting-1"));

        active.deregister("posting-1");
        assert!(!active.contains("posting-1"));
        assert_eq!(active.count(), 0);
        assert!(active.register("posting-1"));
    }

    #[tokio::test]
    async fn attach_after_deregister_aborts_the_handle() {
        let active = ActiveJobs::new();
        active.register("posting-1");
        active.deregister("posting-1");

        let handle = tokio::spawn(async {
            tokio::time::sleep(std::time::Duration::from_secs(3600)).await;
        });
        active.attach("posting-1", handle);
        assert_eq!(active.count(), 0);
    }
}

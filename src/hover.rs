//! Shared hover state linking the map and the result list.
//!
//! Exactly one hovered trail id lives at the page root; the map and the
//! list both observe it through watch receivers and restyle themselves
//! when it changes. Neither surface talks to the other directly.

use tokio::sync::watch;

/// Owner side of the shared hovered-trail id.
#[derive(Debug)]
pub struct HoverLink {
    sender: watch::Sender<Option<String>>,
}

/// Observer side handed to the map and the list.
pub type HoverWatch = watch::Receiver<Option<String>>;

impl HoverLink {
    /// Create the link with no trail hovered.
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = watch::channel(None);
        Self { sender }
    }

    /// Subscribe a new observer.
    #[must_use]
    pub fn watch(&self) -> HoverWatch {
        self.sender.subscribe()
    }

    /// Current hovered id.
    #[must_use]
    pub fn get(&self) -> Option<String> {
        self.sender.borrow().clone()
    }

    /// Publish a new hovered id. Returns `true` when the value actually
    /// changed; re-hovering the same trail is a no-op.
    pub fn set(&self, id: Option<String>) -> bool {
        self.sender.send_if_modified(|current| {
            if *current == id {
                false
            } else {
                *current = id;
                true
            }
        })
    }

    /// Clear the hovered id, e.g. when the pointer leaves both surfaces.
    pub fn clear(&self) -> bool {
        self.set(None)
    }
}

impl Default for HoverLink {
    fn default() -> Self {
        Self::new()
    }
}

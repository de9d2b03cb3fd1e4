use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use crate::models::{Contact, ContactSnapshot, UpdateContact};

/// Exclusive-access wrapper around the process-wide contact
///
/// Every operation holds the same lock for its whole duration, so an update
/// is never observed half-applied. The lock guard is dropped on every return
/// path and is never held across I/O.
#[derive(Clone, Default)]
pub struct ContactGuard {
    inner: Arc<Mutex<Contact>>,
}

impl ContactGuard {
    pub fn new(contact: Contact) -> Self {
        Self {
            inner: Arc::new(Mutex::new(contact)),
        }
    }

    pub async fn current(&self) -> ContactSnapshot {
        let contact = self.inner.lock().await;
        ContactSnapshot {
            contact: contact.clone(),
            editing: false,
        }
    }

    pub async fn current_for_edit(&self) -> ContactSnapshot {
        let contact = self.inner.lock().await;
        ContactSnapshot {
            contact: contact.clone(),
            editing: true,
        }
    }

    pub async fn update(&self, update: UpdateContact) -> ContactSnapshot {
        let mut contact = self.inner.lock().await;
        update.apply_to(&mut contact);
        debug!("Contact updated: name={:?}", contact.name);
        ContactSnapshot {
            contact: contact.clone(),
            editing: false,
        }
    }
}

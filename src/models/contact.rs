use serde::{Deserialize, Serialize};

/// The single contact record shown by the click-to-edit example
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
}

impl Default for Contact {
    fn default() -> Self {
        Self {
            name: "Joe Smith".to_string(),
            email: "joe@smith.org".to_string(),
        }
    }
}

/// Point-in-time copy of the contact handed out by the guard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSnapshot {
    pub contact: Contact,
    /// Whether the caller asked for the edit form
    pub editing: bool,
}

/// Body of `PUT /contacts/1`
///
/// Both fields are required; any string, including an empty one, is accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateContact {
    pub name: String,
    pub email: String,
}

impl UpdateContact {
    pub fn apply_to(self, contact: &mut Contact) {
        contact.name = self.name;
        contact.email = self.email;
    }
}

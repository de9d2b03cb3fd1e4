use super::{escape_html, Fragment};
use crate::models::{Contact, ContactSnapshot};

/// Read-only contact card with a "Click To Edit" button
#[derive(Debug, Clone)]
pub struct ContactDisplay {
    pub contact: Contact,
}

/// Inline edit form that PUTs back to `/contacts/1`
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub contact: Contact,
}

impl Fragment for ContactDisplay {
    fn render(&self) -> String {
        format!(
            r#"<div hx-target="this" hx-swap="outerHTML" class="space-y-2">
    <div><label class="font-semibold">Name</label>: {name}</div>
    <div><label class="font-semibold">Email</label>: {email}</div>
    <button hx-get="/contacts/1/edit" class="btn">Click To Edit</button>
</div>"#,
            name = escape_html(&self.contact.name),
            email = escape_html(&self.contact.email),
        )
    }
}

impl Fragment for ContactForm {
    fn render(&self) -> String {
        format!(
            r#"<form hx-put="/contacts/1" hx-target="this" hx-swap="outerHTML" class="space-y-2">
    <div><label class="font-semibold">Name</label> <input type="text" name="name" value="{name}"></div>
    <div><label class="font-semibold">Email</label> <input type="email" name="email" value="{email}"></div>
    <button type="submit" class="btn">Submit</button>
    <button type="button" hx-get="/contacts/1" class="btn">Cancel</button>
</form>"#,
            name = escape_html(&self.contact.name),
            email = escape_html(&self.contact.email),
        )
    }
}

impl Fragment for ContactSnapshot {
    fn render(&self) -> String {
        if self.editing {
            ContactForm {
                contact: self.contact.clone(),
            }
            .render()
        } else {
            ContactDisplay {
                contact: self.contact.clone(),
            }
            .render()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_picks_view() {
        let contact = Contact::default();
        let display = ContactSnapshot {
            contact: contact.clone(),
            editing: false,
        }
        .render();
        assert!(display.contains("Click To Edit"));
        assert!(display.contains("Joe Smith"));

        let form = ContactSnapshot {
            contact,
            editing: true,
        }
        .render();
        assert!(form.contains(r#"hx-put="/contacts/1""#));
        assert!(form.contains(r#"value="joe@smith.org""#));
    }

    #[test]
    fn test_values_escaped() {
        let form = ContactForm {
            contact: Contact {
                name: r#""><script>"#.to_string(),
                email: "a&b".to_string(),
            },
        }
        .render();
        assert!(form.contains(r#"value="&quot;&gt;&lt;script&gt;""#));
        assert!(form.contains("a&amp;b"));
    }
}

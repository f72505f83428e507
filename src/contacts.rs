//! Contact collection state: grouping, selection, and edit transitions.

use thiserror::Error;

use crate::api::models::Contact;

/// Contacts sharing a first letter, shown as one list section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactGroup {
    /// First character of the members' names, untouched. Empty for a
    /// contact whose name is empty, so degenerate records still show up.
    pub letter: String,
    pub members: Vec<Contact>,
}

/// Partitions contacts by first letter of name. Group order is the order in
/// which each letter was first seen, not alphabetical; member order is the
/// source order.
pub fn group_by_first_letter(contacts: &[Contact]) -> Vec<ContactGroup> {
    let mut groups: Vec<ContactGroup> = Vec::new();
    for contact in contacts {
        let letter: String = contact.name.chars().take(1).collect();
        match groups.iter_mut().find(|g| g.letter == letter) {
            Some(group) => group.members.push(contact.clone()),
            None => groups.push(ContactGroup {
                letter,
                members: vec![contact.clone()],
            }),
        }
    }
    groups
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailState {
    #[default]
    NoSelection,
    Viewing(String),
    Editing(String),
}

/// Field values held in a form until committed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl ContactDraft {
    fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::EmptyField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(ContactError::EmptyField("email"));
        }
        if self.phone.trim().is_empty() {
            return Err(ContactError::EmptyField("phone"));
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    #[error("no contact with id {0}")]
    UnknownId(String),
}

/// Owns the contact array and the selection/edit state. Every mutation goes
/// through here; the caller persists the whole array afterwards and reloads.
#[derive(Debug, Default)]
pub struct ContactBook {
    contacts: Vec<Contact>,
    state: DetailState,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole collection. Any selection is dropped.
    pub fn reload(&mut self, contacts: Vec<Contact>) {
        self.contacts = contacts;
        self.state = DetailState::NoSelection;
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn groups(&self) -> Vec<ContactGroup> {
        group_by_first_letter(&self.contacts)
    }

    pub fn get(&self, id: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    pub fn select(&mut self, id: &str) -> Option<&Contact> {
        if self.contacts.iter().any(|c| c.id == id) {
            self.state = DetailState::Viewing(id.to_string());
        }
        self.get(id)
    }

    pub fn begin_edit(&mut self, id: &str) -> Option<&Contact> {
        if self.contacts.iter().any(|c| c.id == id) {
            self.state = DetailState::Editing(id.to_string());
        }
        self.get(id)
    }

    /// Closing the edit form without saving drops the draft and the selection.
    pub fn cancel_edit(&mut self) {
        self.state = DetailState::NoSelection;
    }

    /// Applies the draft onto the one contact with this id. The array itself
    /// is untouched when validation fails or the id is unknown.
    pub fn commit_edit(&mut self, id: &str, draft: &ContactDraft) -> Result<&Contact, ContactError> {
        draft.validate()?;
        let contact = self
            .contacts
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| ContactError::UnknownId(id.to_string()))?;
        contact.name = draft.name.clone();
        contact.email = draft.email.clone();
        contact.phone = draft.phone.clone();
        self.state = DetailState::NoSelection;
        Ok(contact)
    }

    /// Removes exactly the contact with this id and returns it.
    pub fn remove(&mut self, id: &str) -> Result<Contact, ContactError> {
        let index = self
            .contacts
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| ContactError::UnknownId(id.to_string()))?;
        self.state = DetailState::NoSelection;
        Ok(self.contacts.remove(index))
    }

    /// Appends a new contact built from the draft; independent of whatever is
    /// currently selected.
    pub fn add(&mut self, draft: &ContactDraft) -> Result<Contact, ContactError> {
        draft.validate()?;
        let contact = Contact::new(&draft.name, &draft.email, &draft.phone);
        self.contacts.push(contact.clone());
        Ok(contact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str) -> Contact {
        Contact::new(name, &format!("{}@example.com", name.to_lowercase()), "0123456")
    }

    fn names(groups: &[ContactGroup]) -> Vec<String> {
        groups
            .iter()
            .flat_map(|g| g.members.iter().map(|c| c.name.clone()))
            .collect()
    }

    #[test]
    fn groups_keep_first_seen_letter_order() {
        let contacts = vec![contact("Mia"), contact("Anna"), contact("Max"), contact("Ben")];
        let groups = group_by_first_letter(&contacts);
        let letters: Vec<&str> = groups.iter().map(|g| g.letter.as_str()).collect();
        assert_eq!(letters, ["M", "A", "B"]);
        assert_eq!(names(&groups), ["Mia", "Max", "Anna", "Ben"]);
    }

    #[test]
    fn grouping_is_case_sensitive_and_total() {
        let mut contacts = vec![contact("anna"), contact("Anna")];
        contacts[0].name = "anna".to_string();
        let groups = group_by_first_letter(&contacts);
        assert_eq!(groups.len(), 2);
        let member_count: usize = groups.iter().map(|g| g.members.len()).sum();
        assert_eq!(member_count, contacts.len());
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(group_by_first_letter(&[]).is_empty());
    }

    #[test]
    fn empty_name_groups_under_empty_key() {
        let mut degenerate = contact("x");
        degenerate.name = String::new();
        let groups = group_by_first_letter(&[degenerate]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].letter, "");
        assert_eq!(groups[0].members.len(), 1);
    }

    #[test]
    fn select_and_edit_walk_the_states() {
        let mut book = ContactBook::new();
        book.reload(vec![contact("Anna")]);
        assert_eq!(*book.state(), DetailState::NoSelection);

        let id = book.contacts()[0].id.clone();
        assert!(book.select(&id).is_some());
        assert_eq!(*book.state(), DetailState::Viewing(id.clone()));

        assert!(book.begin_edit(&id).is_some());
        assert_eq!(*book.state(), DetailState::Editing(id.clone()));

        book.cancel_edit();
        assert_eq!(*book.state(), DetailState::NoSelection);
    }

    #[test]
    fn selecting_an_unknown_id_changes_nothing() {
        let mut book = ContactBook::new();
        book.reload(vec![contact("Anna")]);
        assert!(book.select("missing").is_none());
        assert_eq!(*book.state(), DetailState::NoSelection);
    }

    #[test]
    fn reload_drops_the_selection() {
        let mut book = ContactBook::new();
        book.reload(vec![contact("Anna")]);
        let id = book.contacts()[0].id.clone();
        book.select(&id);
        book.reload(vec![contact("Anna"), contact("Ben")]);
        assert_eq!(*book.state(), DetailState::NoSelection);
    }

    #[test]
    fn edit_updates_single_record() {
        let mut book = ContactBook::new();
        book.reload(vec![contact("Anna"), contact("Ben")]);
        let id = book.contacts()[0].id.clone();
        let count = book.contacts().len();

        book.begin_edit(&id);
        let draft = ContactDraft {
            name: "Anna".to_string(),
            email: "new@example.com".to_string(),
            phone: "999".to_string(),
        };
        book.commit_edit(&id, &draft).unwrap();

        assert_eq!(book.contacts().len(), count);
        let edited = book.get(&id).unwrap();
        assert_eq!(edited.email, "new@example.com");
        assert_eq!(edited.phone, "999");
        assert_eq!(book.contacts()[1].email, "ben@example.com");
        assert_eq!(*book.state(), DetailState::NoSelection);
    }

    #[test]
    fn commit_with_empty_field_leaves_the_array_alone() {
        let mut book = ContactBook::new();
        book.reload(vec![contact("Anna")]);
        let id = book.contacts()[0].id.clone();
        let before = book.get(&id).unwrap().clone();

        let draft = ContactDraft {
            name: "Anna".to_string(),
            email: String::new(),
            phone: "999".to_string(),
        };
        assert_eq!(book.commit_edit(&id, &draft), Err(ContactError::EmptyField("email")));
        assert_eq!(*book.get(&id).unwrap(), before);
    }

    #[test]
    fn remove_deletes_exactly_one_entry() {
        let mut book = ContactBook::new();
        book.reload(vec![contact("Anna"), contact("Ben"), contact("Cleo")]);
        let id = book.contacts()[1].id.clone();

        let removed = book.remove(&id).unwrap();
        assert_eq!(removed.name, "Ben");
        assert_eq!(book.contacts().len(), 2);
        assert!(book.get(&id).is_none());
        assert!(book.groups().iter().all(|g| g.members.iter().all(|c| c.id != id)));
        assert_eq!(book.remove(&id), Err(ContactError::UnknownId(id)));
    }

    #[test]
    fn add_capitalizes_and_appends() {
        let mut book = ContactBook::new();
        book.reload(vec![contact("Anna")]);

        let draft = ContactDraft {
            name: "bob".to_string(),
            email: "bob@example.com".to_string(),
            phone: "42".to_string(),
        };
        let added = book.add(&draft).unwrap();
        assert_eq!(added.name, "Bob");
        assert_eq!(book.contacts().len(), 2);
        assert_eq!(book.contacts()[1].id, added.id);

        let empty = ContactDraft::default();
        assert!(book.add(&empty).is_err());
        assert_eq!(book.contacts().len(), 2);
    }
}

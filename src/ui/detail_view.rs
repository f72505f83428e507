use gtk4::prelude::*;
use gtk4 as gtk;

use std::rc::Rc;

use crate::api::models::Contact;

/// Right-hand pane. Shows a placeholder until a contact is selected, then a
/// read-only card with an edit entry point. Content is rebuilt wholesale on
/// every change.
pub struct DetailView {
    root: gtk::Box,
    content: gtk::Box,
}

impl DetailView {
    pub fn new() -> Self {
        let root = gtk::Box::new(gtk::Orientation::Vertical, 6);
        root.set_margin_top(8);
        root.set_margin_bottom(8);
        root.set_margin_start(8);
        root.set_margin_end(8);

        let scroller = gtk::ScrolledWindow::builder()
            .vexpand(true)
            .hexpand(true)
            .build();
        let content = gtk::Box::new(gtk::Orientation::Vertical, 12);
        scroller.set_child(Some(&content));
        root.append(&scroller);

        let view = Self { root, content };
        view.clear();
        view
    }

    pub fn widget(&self) -> gtk::Widget {
        self.root.clone().upcast()
    }

    fn empty(&self) {
        while let Some(child) = self.content.first_child() {
            self.content.remove(&child);
        }
    }

    pub fn clear(&self) {
        self.empty();
        let placeholder = gtk::Label::new(Some("Select a contact to see its details."));
        placeholder.add_css_class("dim-label");
        placeholder.set_halign(gtk::Align::Start);
        self.content.append(&placeholder);
    }

    pub fn show_contact(&self, contact: &Contact, on_edit: Rc<dyn Fn(String)>) {
        self.empty();

        let head = gtk::Box::new(gtk::Orientation::Horizontal, 16);
        head.append(&crate::ui::contact_list::initials_badge(
            &contact.name,
            &contact.color,
            72,
        ));
        let name = gtk::Label::new(Some(&contact.name));
        name.add_css_class("title-2");
        name.set_halign(gtk::Align::Start);
        head.append(&name);
        self.content.append(&head);

        let info_row = gtk::Box::new(gtk::Orientation::Horizontal, 12);
        let info = gtk::Label::new(Some("Contact Information"));
        info.set_halign(gtk::Align::Start);
        info_row.append(&info);
        let edit_btn = gtk::Button::with_label("Edit Contact");
        edit_btn.add_css_class("flat");
        info_row.append(&edit_btn);
        self.content.append(&info_row);

        let email_heading = gtk::Label::new(Some("Email"));
        email_heading.add_css_class("heading");
        email_heading.set_halign(gtk::Align::Start);
        self.content.append(&email_heading);
        let email = gtk::Label::new(Some(&contact.email));
        email.set_halign(gtk::Align::Start);
        email.set_selectable(true);
        self.content.append(&email);

        let phone_heading = gtk::Label::new(Some("Phone"));
        phone_heading.add_css_class("heading");
        phone_heading.set_halign(gtk::Align::Start);
        self.content.append(&phone_heading);
        let phone = gtk::Label::new(Some(&contact.phone));
        phone.set_halign(gtk::Align::Start);
        phone.set_selectable(true);
        self.content.append(&phone);

        let id = contact.id.clone();
        edit_btn.connect_clicked(move |_| (on_edit)(id.clone()));
    }
}

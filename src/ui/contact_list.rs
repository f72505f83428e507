use gtk4::prelude::*;
use gtk4 as gtk;
use gtk4::pango;

use std::cell::RefCell;
use std::rc::Rc;

use crate::contacts::ContactGroup;

/// Sidebar list: one non-activatable header row per letter group, then a row
/// per contact. Row activation reports the contact's id.
pub struct ContactList {
    root: gtk::Box,
    list: gtk::ListBox,
    // row index -> contact id; None for the header rows
    row_ids: Rc<RefCell<Vec<Option<String>>>>,
}

impl ContactList {
    pub fn new() -> Self {
        let root = gtk::Box::new(gtk::Orientation::Vertical, 6);
        root.set_margin_top(8);
        root.set_margin_bottom(8);
        root.set_margin_start(8);
        root.set_margin_end(8);

        let title = gtk::Label::new(Some("Contacts"));
        title.add_css_class("heading");
        title.set_halign(gtk::Align::Start);
        root.append(&title);

        let scroller = gtk::ScrolledWindow::builder()
            .vexpand(true)
            .hscrollbar_policy(gtk::PolicyType::Never)
            .build();
        let list = gtk::ListBox::new();
        list.add_css_class("navigation-sidebar");
        scroller.set_child(Some(&list));
        root.append(&scroller);

        Self {
            root,
            list,
            row_ids: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn widget(&self) -> gtk::Widget {
        self.root.clone().upcast()
    }

    pub fn connect_contact_activated<F: Fn(String) + 'static>(&self, f: F) {
        let ids = self.row_ids.clone();
        self.list.connect_row_activated(move |_, row| {
            let index = row.index();
            if index < 0 {
                return;
            }
            if let Some(Some(id)) = ids.borrow().get(index as usize) {
                f(id.clone());
            }
        });
    }

    /// Replaces the rendered rows wholesale.
    pub fn set_groups(&self, groups: &[ContactGroup]) {
        while let Some(child) = self.list.first_child() {
            self.list.remove(&child);
        }
        let mut ids = self.row_ids.borrow_mut();
        ids.clear();

        for group in groups {
            let header = gtk::ListBoxRow::new();
            header.set_selectable(false);
            header.set_activatable(false);
            let label = gtk::Label::new(Some(&group.letter));
            label.add_css_class("heading");
            label.set_halign(gtk::Align::Start);
            label.set_margin_top(8);
            label.set_margin_start(8);
            header.set_child(Some(&label));
            self.list.append(&header);
            ids.push(None);

            for contact in &group.members {
                let row = gtk::ListBoxRow::new();
                let hbox = gtk::Box::new(gtk::Orientation::Horizontal, 10);
                hbox.set_margin_top(6);
                hbox.set_margin_bottom(6);
                hbox.set_margin_start(8);
                hbox.set_margin_end(8);

                hbox.append(&initials_badge(&contact.name, &contact.color, 38));

                let text_box = gtk::Box::new(gtk::Orientation::Vertical, 2);
                let name = gtk::Label::new(Some(&contact.name));
                name.set_halign(gtk::Align::Start);
                let email = gtk::Label::new(Some(&contact.email));
                email.add_css_class("dim-label");
                email.set_halign(gtk::Align::Start);
                text_box.append(&name);
                text_box.append(&email);
                hbox.append(&text_box);

                row.set_child(Some(&hbox));
                self.list.append(&row);
                ids.push(Some(contact.id.clone()));
            }
        }
    }
}

/// Round-ish label showing the contact's initials on its accent color.
pub fn initials_badge(name: &str, color: &str, size: i32) -> gtk::Label {
    let badge = gtk::Label::new(Some(&crate::utils::initials(name)));
    badge.set_width_request(size);
    badge.set_height_request(size);
    badge.set_halign(gtk::Align::Center);
    badge.set_valign(gtk::Align::Center);

    let attrs = pango::AttrList::new();
    if let Ok(rgba) = gtk::gdk::RGBA::parse(color) {
        attrs.insert(pango::AttrColor::new_background(
            (rgba.red() * 65535.0) as u16,
            (rgba.green() * 65535.0) as u16,
            (rgba.blue() * 65535.0) as u16,
        ));
        attrs.insert(pango::AttrColor::new_foreground(65535, 65535, 65535));
    }
    attrs.insert(pango::AttrInt::new_weight(pango::Weight::Bold));
    badge.set_attributes(Some(&attrs));
    badge
}

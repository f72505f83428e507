use gtk4::prelude::*;
use gtk4 as gtk;

use crate::api::models::Contact;
use crate::contacts::ContactDraft;

fn form_fields(content: &gtk::Box) -> (gtk::Entry, gtk::Entry, gtk::Entry) {
    let name_entry = gtk::Entry::new();
    name_entry.set_placeholder_text(Some("Name"));
    name_entry.set_hexpand(true);
    content.append(&name_entry);

    let email_entry = gtk::Entry::new();
    email_entry.set_placeholder_text(Some("Email"));
    email_entry.set_hexpand(true);
    content.append(&email_entry);

    let phone_entry = gtk::Entry::new();
    phone_entry.set_placeholder_text(Some("Phone"));
    phone_entry.set_hexpand(true);
    content.append(&phone_entry);

    (name_entry, email_entry, phone_entry)
}

fn dialog_content() -> gtk::Box {
    let content = gtk::Box::new(gtk::Orientation::Vertical, 12);
    content.set_margin_top(12);
    content.set_margin_bottom(12);
    content.set_margin_start(12);
    content.set_margin_end(12);
    content
}

fn draft_from(name: &gtk::Entry, email: &gtk::Entry, phone: &gtk::Entry) -> ContactDraft {
    ContactDraft {
        name: name.text().to_string(),
        email: email.text().to_string(),
        phone: phone.text().to_string(),
    }
}

/// Modal edit form pre-filled with the contact. The draft lives in the
/// entries only; `on_save` may refuse (validation) and the dialog stays open
/// with the reason shown.
pub fn show_edit_dialog(
    parent: &impl IsA<gtk::Window>,
    contact: &Contact,
    on_save: impl Fn(ContactDraft) -> Result<(), String> + 'static,
    on_delete: impl Fn() + 'static,
    on_cancel: impl Fn() + 'static,
) {
    let dialog = gtk::Dialog::builder()
        .title("Edit Contact")
        .transient_for(parent)
        .modal(true)
        .build();
    let content = dialog_content();

    content.append(&crate::ui::contact_list::initials_badge(
        &contact.name,
        &contact.color,
        56,
    ));

    let (name_entry, email_entry, phone_entry) = form_fields(&content);
    name_entry.set_text(&contact.name);
    email_entry.set_text(&contact.email);
    phone_entry.set_text(&contact.phone);

    let status = gtk::Label::new(None);
    status.add_css_class("dim-label");
    status.set_halign(gtk::Align::Start);
    content.append(&status);

    dialog.set_child(Some(&content));
    let delete_btn = dialog.add_button("Delete", gtk::ResponseType::Reject);
    delete_btn.add_css_class("destructive-action");
    let _ = dialog.add_button("Cancel", gtk::ResponseType::Cancel);
    let save_btn = dialog.add_button("Save", gtk::ResponseType::Ok);
    save_btn.add_css_class("suggested-action");
    dialog.set_default_response(gtk::ResponseType::Ok);

    dialog.connect_response(move |dlg, resp| match resp {
        gtk::ResponseType::Ok => {
            let draft = draft_from(&name_entry, &email_entry, &phone_entry);
            match on_save(draft) {
                Ok(()) => dlg.close(),
                Err(reason) => status.set_label(&reason),
            }
        }
        gtk::ResponseType::Reject => {
            on_delete();
            dlg.close();
        }
        _ => {
            on_cancel();
            dlg.close();
        }
    });

    dialog.present();
}

/// Modal creation form with empty fields; independent of the current
/// selection.
pub fn show_add_dialog(
    parent: &impl IsA<gtk::Window>,
    on_create: impl Fn(ContactDraft) -> Result<(), String> + 'static,
) {
    let dialog = gtk::Dialog::builder()
        .title("Add Contact")
        .transient_for(parent)
        .modal(true)
        .build();
    let content = dialog_content();

    let info = gtk::Label::new(Some("Tasks are better with a team."));
    info.set_halign(gtk::Align::Start);
    content.append(&info);

    let (name_entry, email_entry, phone_entry) = form_fields(&content);

    let status = gtk::Label::new(None);
    status.add_css_class("dim-label");
    status.set_halign(gtk::Align::Start);
    content.append(&status);

    dialog.set_child(Some(&content));
    let _ = dialog.add_button("Cancel", gtk::ResponseType::Cancel);
    let create_btn = dialog.add_button("Create Contact", gtk::ResponseType::Ok);
    create_btn.add_css_class("suggested-action");
    dialog.set_default_response(gtk::ResponseType::Ok);

    dialog.connect_response(move |dlg, resp| {
        if resp == gtk::ResponseType::Ok {
            let draft = draft_from(&name_entry, &email_entry, &phone_entry);
            match on_create(draft) {
                Ok(()) => dlg.close(),
                Err(reason) => status.set_label(&reason),
            }
        } else {
            dlg.close();
        }
    });

    dialog.present();
}

use adw::prelude::*;
use adw::Application;

use std::cell::RefCell;
use std::rc::Rc;

use crate::api::client::StoreClient;
use crate::contacts::{ContactBook, ContactDraft};
use crate::summary::TaskSummary;

pub fn show_main_window(app: &Application) {
    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title("Taskdesk")
        .default_width(960)
        .default_height(640)
        .build();

    let overlay = adw::ToastOverlay::new();

    let split = adw::Flap::builder()
        .reveal_flap(true)
        .locked(true)
        .modal(false)
        .build();

    let list = Rc::new(crate::ui::contact_list::ContactList::new());
    split.set_flap(Some(&list.widget()));

    let detail = Rc::new(crate::ui::detail_view::DetailView::new());
    split.set_content(Some(&detail.widget()));

    let summary_view = Rc::new(crate::ui::summary_view::SummaryView::new());

    let stack = gtk4::Stack::new();
    stack.add_titled(&split, Some("contacts"), "Contacts");
    stack.add_titled(&summary_view.widget(), Some("summary"), "Summary");
    overlay.set_child(Some(&stack));

    let container = gtk4::Box::new(gtk4::Orientation::Vertical, 0);
    let header = adw::HeaderBar::new();
    let switcher = gtk4::StackSwitcher::new();
    switcher.set_stack(Some(&stack));
    header.set_title_widget(Some(&switcher));

    let new_contact_btn = gtk4::Button::with_label("New Contact");
    new_contact_btn.add_css_class("suggested-action");
    header.pack_end(&new_contact_btn);
    container.append(&header);
    container.append(&overlay);
    window.set_content(Some(&container));
    window.present();

    let book = Rc::new(RefCell::new(ContactBook::new()));

    // Full rebuild from the book; any prior rows and detail content go away.
    let render: Rc<dyn Fn()> = {
        let book = book.clone();
        let list = list.clone();
        let detail = detail.clone();
        Rc::new(move || {
            let groups = book.borrow().groups();
            list.set_groups(&groups);
            detail.clear();
        })
    };

    let reload_remote: Rc<dyn Fn()> = {
        let book = book.clone();
        let render = render.clone();
        let overlay = overlay.clone();
        Rc::new(move || {
            let state = crate::app::AppState::load();
            if !state.is_connected() {
                return;
            }
            let client = StoreClient::new();
            let rx = crate::utils::run_async_to_main(async move {
                client
                    .contacts(&state.base_url, &state.token)
                    .await
                    .map_err(|e| e.to_string())
            });
            let book = book.clone();
            let render = render.clone();
            let overlay = overlay.clone();
            rx.attach(None, move |res| {
                match res {
                    Ok(contacts) => {
                        if let Err(e) = crate::storage::replace_contacts(&contacts) {
                            log::warn!("Cache write failed: {}", e);
                        }
                        book.borrow_mut().reload(contacts);
                        render();
                    }
                    Err(err) => {
                        log::error!("Failed to load contacts: {}", err);
                        overlay.add_toast(adw::Toast::new(&format!("Failed to load contacts: {}", err)));
                    }
                }
                glib::ControlFlow::Continue
            });
        })
    };

    // Writes the whole array back, last write wins, then reloads from remote.
    let persist: Rc<dyn Fn(Option<&'static str>)> = {
        let book = book.clone();
        let reload_remote = reload_remote.clone();
        let overlay = overlay.clone();
        Rc::new(move |success_msg| {
            let state = crate::app::AppState::load();
            if !state.is_connected() {
                return;
            }
            let contacts = book.borrow().contacts().to_vec();
            let client = StoreClient::new();
            let rx = crate::utils::run_async_to_main(async move {
                client
                    .save_contacts(&state.base_url, &state.token, &contacts)
                    .await
                    .map_err(|e| e.to_string())
            });
            let reload_remote = reload_remote.clone();
            let overlay = overlay.clone();
            rx.attach(None, move |res| {
                match res {
                    Ok(()) => {
                        if let Some(msg) = success_msg {
                            overlay.add_toast(adw::Toast::new(msg));
                        }
                        reload_remote();
                    }
                    Err(err) => {
                        log::error!("Failed to save contacts: {}", err);
                        overlay.add_toast(adw::Toast::new(&format!("Failed to save contacts: {}", err)));
                    }
                }
                glib::ControlFlow::Continue
            });
        })
    };

    let on_edit: Rc<dyn Fn(String)> = {
        let book = book.clone();
        let persist = persist.clone();
        let detail = detail.clone();
        let window = window.clone();
        Rc::new(move |id: String| {
            let contact = book.borrow_mut().begin_edit(&id).cloned();
            let Some(contact) = contact else { return };

            let on_save = {
                let book = book.clone();
                let persist = persist.clone();
                let id = id.clone();
                move |draft: ContactDraft| -> Result<(), String> {
                    book.borrow_mut()
                        .commit_edit(&id, &draft)
                        .map(|_| ())
                        .map_err(|e| e.to_string())?;
                    persist(Some("Contact successfully edited"));
                    Ok(())
                }
            };
            let on_delete = {
                let book = book.clone();
                let persist = persist.clone();
                let id = id.clone();
                move || {
                    if book.borrow_mut().remove(&id).is_ok() {
                        persist(None);
                    }
                }
            };
            let on_cancel = {
                let book = book.clone();
                let detail = detail.clone();
                move || {
                    book.borrow_mut().cancel_edit();
                    detail.clear();
                }
            };
            crate::ui::edit_dialog::show_edit_dialog(&window, &contact, on_save, on_delete, on_cancel);
        })
    };

    {
        let book = book.clone();
        let detail = detail.clone();
        let on_edit = on_edit.clone();
        list.connect_contact_activated(move |id| {
            let contact = book.borrow_mut().select(&id).cloned();
            if let Some(contact) = contact {
                detail.show_contact(&contact, on_edit.clone());
            }
        });
    }

    {
        let book = book.clone();
        let persist = persist.clone();
        let window = window.clone();
        new_contact_btn.connect_clicked(move |_| {
            let book = book.clone();
            let persist = persist.clone();
            crate::ui::edit_dialog::show_add_dialog(&window, move |draft| {
                book.borrow_mut().add(&draft).map(|_| ()).map_err(|e| e.to_string())?;
                persist(Some("Contact successfully created"));
                Ok(())
            });
        });
    }

    let state = crate::app::AppState::load();
    if state.is_connected() {
        // Cached copy first so the list is not blank while the fetch runs.
        match crate::storage::get_contacts() {
            Ok(cached) if !cached.is_empty() => {
                book.borrow_mut().reload(cached);
                render();
            }
            Ok(_) => {}
            Err(e) => log::warn!("Cache read failed: {}", e),
        }
        reload_remote();

        {
            let summary_view = summary_view.clone();
            let overlay = overlay.clone();
            let base_url = state.base_url.clone();
            let token = state.token.clone();
            let rx = crate::utils::run_async_to_main(async move {
                let client = StoreClient::new();
                client.tasks(&base_url, &token).await.map_err(|e| e.to_string())
            });
            rx.attach(None, move |res| {
                match res {
                    Ok(tasks) => summary_view.set_summary(&TaskSummary::from_tasks(&tasks)),
                    Err(err) => {
                        log::error!("Failed to load tasks: {}", err);
                        overlay.add_toast(adw::Toast::new(&format!("Failed to load tasks: {}", err)));
                    }
                }
                glib::ControlFlow::Continue
            });
        }
        {
            let summary_view = summary_view.clone();
            let base_url = state.base_url.clone();
            let token = state.token.clone();
            let rx = crate::utils::run_async_to_main(async move {
                let client = StoreClient::new();
                client.current_user(&base_url, &token).await.map_err(|e| e.to_string())
            });
            rx.attach(None, move |res| {
                match res {
                    Ok(user) => summary_view.set_user(&user.name),
                    // A missing user record only costs the greeting.
                    Err(err) => log::debug!("No current user: {}", err),
                }
                glib::ControlFlow::Continue
            });
        }
    }
}

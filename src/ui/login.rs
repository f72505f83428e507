use adw::prelude::*;
use adw::Application;
use gtk4 as gtk;
use url::Url;

pub fn show_login_window(app: &Application) {
    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title("Taskdesk Setup")
        .default_width(420)
        .default_height(260)
        .resizable(false)
        .build();

    let toast_overlay = adw::ToastOverlay::new();

    // Root container
    let root = gtk::Box::new(gtk::Orientation::Vertical, 12);
    root.set_margin_top(24);
    root.set_margin_bottom(24);
    root.set_margin_start(24);
    root.set_margin_end(24);

    // Title
    let title = gtk::Label::new(Some("Connect to your remote store"));
    title.add_css_class("title-2");
    title.set_halign(gtk::Align::Start);
    root.append(&title);

    // Store URL
    let store_entry = gtk::Entry::new();
    store_entry.set_placeholder_text(Some("Store URL (e.g. https://store.example.org)"));
    store_entry.set_hexpand(true);

    // Access token
    let token_entry = gtk::PasswordEntry::new();
    token_entry.set_placeholder_text(Some("Access token"));
    token_entry.set_hexpand(true);

    // Arrange fields
    let form = gtk::Box::new(gtk::Orientation::Vertical, 8);
    form.append(&store_entry);
    form.append(&token_entry);
    root.append(&form);

    // Status label (small, muted)
    let status = gtk::Label::new(None);
    status.add_css_class("dim-label");
    status.set_halign(gtk::Align::Start);
    root.append(&status);

    // Connect button
    let connect_btn = gtk::Button::with_label("Connect");
    connect_btn.add_css_class("suggested-action");
    connect_btn.set_halign(gtk::Align::End);
    root.append(&connect_btn);

    toast_overlay.set_child(Some(&root));
    // Add a header bar inside content to show window decorations
    let container = gtk::Box::new(gtk::Orientation::Vertical, 0);
    let header = adw::HeaderBar::new();
    let title = gtk::Label::new(Some("Taskdesk"));
    header.set_title_widget(Some(&title));
    container.append(&header);
    container.append(&toast_overlay);
    window.set_content(Some(&container));

    // Trigger connect action
    let on_connect = {
        let app = app.clone();
        let window = window.clone();
        let overlay = toast_overlay.clone();
        let store_entry = store_entry.clone();
        let token_entry = token_entry.clone();
        move || {
            let overlay = overlay.clone();
            let url = crate::utils::normalize_url(&store_entry.text());
            let token = token_entry.text().to_string();
            if url.is_empty() || token.is_empty() {
                overlay.add_toast(adw::Toast::new("Please enter store URL and access token."));
                return;
            }
            if Url::parse(&url).is_err() {
                overlay.add_toast(adw::Toast::new("That store URL does not look valid."));
                return;
            }

            status.set_label("Connecting…");
            status.add_css_class("dim-label");

            // Reachability probe; the credentials are kept either way so an
            // offline setup still completes.
            let token_for_async = token.clone();
            let url_for_async = url.clone();
            let rx: glib::Receiver<Result<(String, String), String>> = crate::utils::run_async_to_main(async move {
                let client = crate::api::client::StoreClient {
                    http: reqwest::Client::builder()
                        .timeout(std::time::Duration::from_secs(5))
                        .build()
                        .map_err(|e| e.to_string())?,
                };
                match client.ping(&url_for_async, &token_for_async).await {
                    Ok(code) if (200..300).contains(&code) => {
                        Ok((url_for_async, "Connected".to_string()))
                    }
                    Ok(code) => Ok((url_for_async, format!("Saved (store answered HTTP {})", code))),
                    Err(_) => Ok((url_for_async, "Saved (store unreachable)".to_string())),
                }
            });

            let status_label = status.clone();
            let app2 = app.clone();
            let window2 = window.clone();
            let overlay2 = overlay.clone();
            let token_for_save = token.clone();
            rx.attach(None, move |res| {
                match res {
                    Ok((base_url, message)) => {
                        log::info!("Store check: {} - {}", base_url, message);
                        status_label.set_label(&message);
                        // Always persist the connection settings
                        let mut st = crate::app::AppState::load();
                        st.base_url = base_url;
                        st.token = token_for_save.clone();
                        if let Err(e) = st.save() {
                            overlay2.add_toast(adw::Toast::new(&format!("Failed to save settings: {}", e)));
                        }
                        crate::ui::main_window::show_main_window(&app2);
                        window2.close();
                    }
                    Err(err) => {
                        log::error!("Store check failed: {}", err);
                        status_label.set_label("Connection failed");
                        overlay2.add_toast(adw::Toast::new("Could not reach the store. Check URL and token."));
                    }
                }
                glib::ControlFlow::Continue
            });
        }
    };

    use std::rc::Rc;
    let on_connect: Rc<dyn Fn()> = Rc::new(on_connect);
    // Button click
    {
        let on_connect = on_connect.clone();
        connect_btn.connect_clicked(move |_| (on_connect)());
    }
    // Enter key in either field triggers connect
    {
        let on_connect = on_connect.clone();
        store_entry.connect_activate(move |_| (on_connect)());
    }
    {
        let on_connect = on_connect.clone();
        token_entry.connect_activate(move |_| (on_connect)());
    }

    window.present();
}

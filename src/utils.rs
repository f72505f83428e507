use glib::MainContext;
use once_cell::sync::Lazy;

pub static RUNTIME: Lazy<tokio::runtime::Runtime> = Lazy::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to build Tokio runtime")
});

pub fn spawn_async<F>(fut: F)
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    RUNTIME.spawn(fut);
}

pub fn glib_channel<T: Send + 'static>() -> (glib::Sender<T>, glib::Receiver<T>) {
    MainContext::channel(glib::Priority::default())
}

pub fn run_async_to_main<T, E, Fut>(fut: Fut) -> glib::Receiver<Result<T, E>>
where
    T: Send + 'static,
    E: Send + 'static,
    Fut: std::future::Future<Output = Result<T, E>> + Send + 'static,
{
    let (tx, rx) = glib_channel::<Result<T, E>>();
    spawn_async(async move {
        let res = fut.await;
        let _ = tx.send(res);
    });
    rx
}

pub fn normalize_url(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

/// First letters of up to two whitespace-separated name tokens, uppercased.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|token| token.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

/// Uppercases the first letter only; the rest of the name stays untouched.
pub fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_at_most_two_tokens() {
        assert_eq!(initials("Max Mustermann"), "MM");
        assert_eq!(initials("Anna"), "A");
        assert_eq!(initials("ada lovelace byron"), "AL");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn capitalize_only_touches_the_first_letter() {
        assert_eq!(capitalize_first("bob"), "Bob");
        assert_eq!(capitalize_first("bob marley"), "Bob marley");
        assert_eq!(capitalize_first("Bob"), "Bob");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn normalize_url_adds_a_scheme_when_missing() {
        assert_eq!(normalize_url("store.example.org"), "https://store.example.org");
        assert_eq!(normalize_url("http://localhost:8080 "), "http://localhost:8080");
    }
}

use reqwest::Client as HttpClient;
use serde_json::Value;

use crate::api::error::StoreError;
use crate::api::models::{Contact, CurrentUser, Task};

pub const CONTACTS_KEY: &str = "contactsRemote";
pub const TASKS_KEY: &str = "tasksRemote";
pub const USER_KEY: &str = "currentUserName";

/// Client for the remote key-value store. Values come back as strings of
/// single-quoted JSON and are normalized before decoding; writes send the
/// value verbatim.
pub struct StoreClient {
    pub http: HttpClient,
}

impl StoreClient {
    pub fn new() -> Self {
        Self {
            http: HttpClient::new(),
        }
    }

    fn item_endpoint(base_url: &str) -> String {
        format!("{}/item", base_url.trim_end_matches('/'))
    }

    /// Probe the store. Any HTTP answer counts as reachable; the status code
    /// is handed back so the caller can tell a bad token from a bad URL.
    pub async fn ping(&self, base_url: &str, token: &str) -> Result<u16, StoreError> {
        let endpoint = format!("{}?key={}&token={}", Self::item_endpoint(base_url), USER_KEY, token);
        let resp = self.http.get(&endpoint).send().await?;
        Ok(resp.status().as_u16())
    }

    pub async fn get_item(&self, base_url: &str, token: &str, key: &str) -> Result<String, StoreError> {
        let endpoint = format!("{}?key={}&token={}", Self::item_endpoint(base_url), key, token);
        let resp = self.http.get(&endpoint).send().await?;
        if !resp.status().is_success() {
            return Err(StoreError::Status(resp.status().as_u16()));
        }
        let json: Value = resp.json().await?;
        json.get("data")
            .and_then(|d| d.get("value"))
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| StoreError::Missing(key.to_string()))
    }

    pub async fn set_item(&self, base_url: &str, token: &str, key: &str, value: &Value) -> Result<(), StoreError> {
        let body = serde_json::json!({
            "key": key,
            "value": value,
            "token": token,
        });
        let resp = self.http.post(&Self::item_endpoint(base_url)).json(&body).send().await?;
        if !resp.status().is_success() {
            return Err(StoreError::Status(resp.status().as_u16()));
        }
        Ok(())
    }

    pub async fn contacts(&self, base_url: &str, token: &str) -> Result<Vec<Contact>, StoreError> {
        let raw = self.get_item(base_url, token, CONTACTS_KEY).await?;
        decode_contacts(&raw)
    }

    /// Persists the whole contact array, last write wins.
    pub async fn save_contacts(&self, base_url: &str, token: &str, contacts: &[Contact]) -> Result<(), StoreError> {
        let value = serde_json::to_value(contacts)?;
        self.set_item(base_url, token, CONTACTS_KEY, &value).await
    }

    pub async fn tasks(&self, base_url: &str, token: &str) -> Result<Vec<Task>, StoreError> {
        let raw = self.get_item(base_url, token, TASKS_KEY).await?;
        Ok(serde_json::from_str(&normalize_quotes(&raw))?)
    }

    pub async fn current_user(&self, base_url: &str, token: &str) -> Result<CurrentUser, StoreError> {
        let raw = self.get_item(base_url, token, USER_KEY).await?;
        Ok(serde_json::from_str(&normalize_quotes(&raw))?)
    }
}

// The store escapes double quotes by storing the payload single-quoted.
fn normalize_quotes(raw: &str) -> String {
    raw.replace('\'', "\"")
}

fn decode_contacts(raw: &str) -> Result<Vec<Contact>, StoreError> {
    let mut contacts: Vec<Contact> = serde_json::from_str(&normalize_quotes(raw))?;
    for contact in &mut contacts {
        contact.ensure_id();
    }
    Ok(contacts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_single_quoted_payload() {
        let raw = "[{'name':'Max Mustermann','email':'max@example.com','phone':'123','color':'#FF7A00'}]";
        let contacts = decode_contacts(raw).unwrap();
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].name, "Max Mustermann");
        assert!(!contacts[0].id.is_empty());
    }

    #[test]
    fn assigned_ids_are_distinct() {
        let raw = "[{'name':'A','email':'a','phone':'1','color':'#FF7A00'},\
                    {'name':'B','email':'b','phone':'2','color':'#FF5EB3'}]";
        let contacts = decode_contacts(raw).unwrap();
        assert_ne!(contacts[0].id, contacts[1].id);
    }

    #[test]
    fn still_malformed_payload_is_an_error() {
        let err = decode_contacts("[{'name':}]").unwrap_err();
        assert!(matches!(err, StoreError::Payload(_)));
    }

    #[test]
    fn saved_contacts_round_trip_through_the_wire_shape() {
        let contact = Contact::new("bob", "bob@example.com", "0123");
        let value = serde_json::to_value([&contact]).unwrap();
        let back: Vec<Contact> = serde_json::from_value(value).unwrap();
        assert_eq!(back[0], contact);
    }
}

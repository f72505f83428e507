use crate::api::models::Contact;
use directories::ProjectDirs;
use rusqlite::{params, Connection};
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

fn db_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("com", "example", "TaskdeskGTK")?;
    let dir = proj.data_dir().to_path_buf();
    Some(dir.join("cache.sqlite"))
}

fn ensure_dir(path: &PathBuf) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

fn open_conn() -> rusqlite::Result<Connection> {
    let path = db_path().ok_or_else(|| rusqlite::Error::InvalidPath("no data dir".into()))?;
    let _ = ensure_dir(&path);
    Connection::open(path)
}

// Caching the contact array so the list renders before the remote fetch lands
pub fn init() -> Result<(), String> {
    let conn = open_conn().map_err(|e| e.to_string())?;
    conn.execute_batch(
        r#"
        PRAGMA journal_mode = WAL;
        CREATE TABLE IF NOT EXISTS contacts (
            id TEXT PRIMARY KEY,
            position INTEGER NOT NULL,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            phone TEXT NOT NULL,
            color TEXT NOT NULL,
            updated_at INTEGER NOT NULL
        );
        "#,
    )
    .map_err(|e| e.to_string())?;
    Ok(())
}

/// Mirrors the remote array wholesale; position keeps the remote order so the
/// grouping comes out the same from a cold start.
pub fn replace_contacts(contacts: &[Contact]) -> Result<(), String> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| e.to_string())?
        .as_secs() as i64;
    let mut conn = open_conn().map_err(|e| e.to_string())?;
    let tx = conn.transaction().map_err(|e| e.to_string())?;
    tx.execute("DELETE FROM contacts", []).map_err(|e| e.to_string())?;
    for (idx, c) in contacts.iter().enumerate() {
        tx.execute(
            r#"
            INSERT INTO contacts (id, position, name, email, phone, color, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![c.id, idx as i64, c.name, c.email, c.phone, c.color, now],
        )
        .map_err(|e| e.to_string())?;
    }
    tx.commit().map_err(|e| e.to_string())?;
    Ok(())
}

pub fn get_contacts() -> Result<Vec<Contact>, String> {
    let conn = open_conn().map_err(|e| e.to_string())?;
    let mut stmt = conn
        .prepare("SELECT id, name, email, phone, color FROM contacts ORDER BY position ASC")
        .map_err(|e| e.to_string())?;
    let rows = stmt
        .query_map([], |row| {
            Ok(Contact {
                id: row.get(0)?,
                name: row.get(1)?,
                email: row.get(2)?,
                phone: row.get(3)?,
                color: row.get(4)?,
            })
        })
        .map_err(|e| e.to_string())?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| e.to_string())?);
    }
    Ok(out)
}

use crate::error::Result;
use crate::types::User;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::Path;

/// Reads the whole backing file and parses it as a JSON array of users.
/// The file is the sole source of truth; nothing is cached between requests.
pub fn load(path: &Path) -> Result<Vec<User>> {
    let bytes = fs::read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Sorts the set ascending by id and rewrites the whole file: UTF-8,
/// 4-space indent, non-ASCII left unescaped. There is no locking and no
/// atomic rename, so two concurrent writers race (last writer wins).
pub fn persist(path: &Path, users: &mut Vec<User>) -> Result<()> {
    users.sort_by_key(|u| u.id);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    users.serialize(&mut ser)?;
    fs::write(path, buf)?;
    Ok(())
}

/// Smallest positive integer not currently in use as an id. Probes from 1
/// upward so freed ids get reused. Quadratic, fine at this scale.
pub fn next_available_id(users: &[User]) -> u64 {
    let mut id = 1;
    while users.iter().any(|u| u.id == id) {
        id += 1;
    }
    id
}

//! Table definitions, applied in order at start-up.
//!
//! Ids are stored as 16-byte UUID blobs. Foreign keys have no `ON DELETE`
//! action, so removing a referenced region or difficulty is refused.

pub const STATEMENTS: &[&str] = &[
    r#"
CREATE TABLE IF NOT EXISTS regions (
    id          BLOB PRIMARY KEY NOT NULL,
    code        TEXT NOT NULL,
    name        TEXT NOT NULL,
    area        REAL NOT NULL,
    lat         REAL NOT NULL,
    long        REAL NOT NULL,
    population  INTEGER NOT NULL
)"#,
    r#"
CREATE TABLE IF NOT EXISTS walk_difficulties (
    id    BLOB PRIMARY KEY NOT NULL,
    name  TEXT NOT NULL
)"#,
    r#"
CREATE TABLE IF NOT EXISTS walks (
    id                  BLOB PRIMARY KEY NOT NULL,
    name                TEXT NOT NULL,
    length              REAL NOT NULL,
    region_id           BLOB NOT NULL REFERENCES regions (id),
    walk_difficulty_id  BLOB NOT NULL REFERENCES walk_difficulties (id)
)"#,
];

// ABOUTME: Utility functions for the deckgen application
// ABOUTME: Path validation helpers and deck JSON persistence

use crate::deck::Deck;
use crate::errors::{DeckError, Result};
use log::info;
use std::fs;
use std::path::Path;

/// Validate that a file exists
pub fn validate_file_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(DeckError::PathNotFoundError(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(DeckError::ValidationError(format!(
            "Path is not a file: {:?}",
            path
        )));
    }
    Ok(())
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(DeckError::FileReadError)?;
    } else if !path.is_dir() {
        return Err(DeckError::ValidationError(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    }
    Ok(())
}

/// Ensure a file's parent directory exists
pub fn ensure_parent_directory_exists(file_path: &Path) -> Result<()> {
    match file_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_directory_exists(parent),
        _ => Ok(()),
    }
}

/// Save a deck snapshot as pretty-printed JSON
pub fn save_deck(deck: &Deck, path: &Path) -> Result<()> {
    ensure_parent_directory_exists(path)?;
    let json = serde_json::to_string_pretty(deck)?;
    fs::write(path, json).map_err(DeckError::FileReadError)?;
    info!("Deck with {} slides saved to {:?}", deck.len(), path);
    Ok(())
}

/// Load a deck snapshot previously written by `save_deck`
pub fn load_deck(path: &Path) -> Result<Deck> {
    validate_file_exists(path)?;
    let json = fs::read_to_string(path).map_err(DeckError::FileReadError)?;
    let deck: Deck = serde_json::from_str(&json)?;
    info!("Loaded deck with {} slides from {:?}", deck.len(), path);
    Ok(deck)
}

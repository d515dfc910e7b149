use winit::keyboard::{Key, NamedKey};

/// Maps a logical key to the ASCII-style character keyboard callbacks receive.
pub fn key_char(key: &Key) -> Option<char> {
    match key {
        Key::Character(text) => text.chars().next(),
        Key::Named(NamedKey::Space) => Some(' '),
        Key::Named(NamedKey::Enter) => Some('\r'),
        Key::Named(NamedKey::Tab) => Some('\t'),
        Key::Named(NamedKey::Backspace) => Some('\u{8}'),
        Key::Named(NamedKey::Escape) => Some('\u{1b}'),
        Key::Named(NamedKey::Delete) => Some('\u{7f}'),
        _ => None,
    }
}

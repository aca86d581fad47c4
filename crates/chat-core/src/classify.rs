//! Decides whether a chat message should carry chess game context.

/// Keywords that mark a message as chess-related. Matching is
/// case-insensitive and position-independent.
const CHESS_KEYWORDS: [&str; 10] = [
    "move",
    "suggest",
    "next",
    "recommend",
    "good",
    "opening",
    "play",
    "checkmate",
    "strategy",
    "chess",
];

/// Returns true when `text` contains any chess keyword. A single match is
/// enough; there is no scoring. Callers reject blank input before
/// classification.
pub fn is_chess_query(text: &str) -> bool {
    let lowered = text.to_lowercase();
    CHESS_KEYWORDS.iter().any(|keyword| lowered.contains(keyword))
}

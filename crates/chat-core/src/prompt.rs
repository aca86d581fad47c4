//! Builds the outbound prompt for a suggestion request.

/// Render SAN moves as numbered move-pair movetext:
/// `["e4", "e5", "Nf3"]` becomes `"1. e4 e5 2. Nf3"`.
/// A trailing half-move renders the White move alone, with no dangling
/// separator.
pub fn moves_to_pgn(moves: &[String]) -> String {
    let mut movetext = String::new();
    for (index, pair) in moves.chunks(2).enumerate() {
        if index > 0 {
            movetext.push(' ');
        }
        movetext.push_str(&format!("{}. {}", index + 1, pair[0]));
        if let Some(black_move) = pair.get(1) {
            movetext.push(' ');
            movetext.push_str(black_move);
        }
    }
    movetext
}

/// Assemble the prompt for one user turn.
///
/// When `chess_relevant` is true the prompt embeds the position and move
/// history so the model can give position-aware advice. When false only
/// the raw user text goes out — no game-state leakage into plain chat.
pub fn build_prompt(user_text: &str, moves: &[String], fen: &str, chess_relevant: bool) -> String {
    if chess_relevant {
        format!(
            "You are a chess grandmaster helping a player during a live game.\n\
             Current position (FEN): {fen}\n\
             Moves so far (algebraic notation): {movetext}\n\n\
             Player's message: {user_text}\n\n\
             If the player is asking for move advice, suggest at most one move \
             in algebraic notation with a brief rationale. If they are asking \
             about chess strategy, give a helpful answer. If the message is not \
             actually about chess, politely decline.",
            movetext = moves_to_pgn(moves),
        )
    } else {
        format!(
            "Player's message: {user_text}\n\n\
             If this is about chess, answer helpfully. Otherwise, politely \
             decline."
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moves(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_moves_to_pgn_pairs() {
        let m = moves(&["e4", "e5", "Nf3", "Nc6"]);
        assert_eq!(moves_to_pgn(&m), "1. e4 e5 2. Nf3 Nc6");
    }

    #[test]
    fn test_moves_to_pgn_trailing_half_move() {
        let m = moves(&["e4", "e5", "Nf3"]);
        assert_eq!(moves_to_pgn(&m), "1. e4 e5 2. Nf3");
    }

    #[test]
    fn test_moves_to_pgn_empty() {
        assert_eq!(moves_to_pgn(&[]), "");
    }

    #[test]
    fn test_chess_prompt_embeds_game_state() {
        let m = moves(&["e4", "e5"]);
        let fen = "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2";
        let prompt = build_prompt("what should I play?", &m, fen, true);
        assert!(prompt.contains(fen));
        assert!(prompt.contains("1. e4 e5"));
        assert!(prompt.contains("what should I play?"));
    }

    #[test]
    fn test_plain_prompt_has_no_game_state() {
        let m = moves(&["e4", "e5"]);
        let fen = "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2";
        let prompt = build_prompt("how was your day?", &m, fen, false);
        assert!(!prompt.contains(fen));
        assert!(!prompt.contains("1. e4"));
        assert!(prompt.contains("how was your day?"));
    }
}

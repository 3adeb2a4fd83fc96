//! Static screen text layout
//!
//! Pure line builders for the informational screens shown while no round is
//! active. The presentation adapter centers these on the playfield; keeping
//! them here keeps the terminal code free of copy and makes the copy
//! testable.

use crate::config::Config;
use crate::sim::Snapshot;

/// Lines for the start screen (NotStarted phase)
pub fn start_screen_lines(config: &Config) -> Vec<String> {
    vec![
        "RALLY PONG".to_string(),
        String::new(),
        "Press SPACE to start".to_string(),
        "Controls: W and S to move".to_string(),
        format!("Objective: first to {} points wins", config.winning_score),
        "You are on the left".to_string(),
    ]
}

/// Lines for the game-over screen
///
/// The banner depends on whether the human (left side) took the match.
pub fn game_over_lines(snapshot: &Snapshot, config: &Config) -> Vec<String> {
    let banner = if snapshot.left_score >= config.winning_score {
        "You Win!"
    } else {
        "Game Over"
    };
    vec![
        banner.to_string(),
        format!("{}  -  {}", snapshot.left_score, snapshot.right_score),
        String::new(),
        "Press SPACE to restart or ESC to exit".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameState;

    #[test]
    fn test_start_screen_mentions_objective() {
        let config = Config::default();
        let lines = start_screen_lines(&config);
        assert!(lines.iter().any(|l| l.contains("first to 6 points")));
        assert!(lines.iter().any(|l| l.contains("SPACE")));
    }

    #[test]
    fn test_game_over_banner_tracks_winner() {
        let config = Config::default();
        let mut state = GameState::new(1, &config);

        state.left_score = config.winning_score;
        let lines = game_over_lines(&state.snapshot(), &config);
        assert_eq!(lines[0], "You Win!");

        state.left_score = 2;
        state.right_score = config.winning_score;
        let lines = game_over_lines(&state.snapshot(), &config);
        assert_eq!(lines[0], "Game Over");
        assert!(lines.iter().any(|l| l.contains("2")));
    }
}

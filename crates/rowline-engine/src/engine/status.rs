use crate::core::Player;

use super::{GameKind, GameResult, GameSession, TurnState};

/// Status line shown to the player for `session`.
#[must_use]
pub fn status_text(kind: GameKind, session: &GameSession) -> &'static str {
    match kind {
        GameKind::Gomoku => gomoku_status(session),
        GameKind::TicTacToe => tic_tac_toe_status(session),
    }
}

/// Name of the stones or marks `player` plays with.
#[must_use]
pub fn piece_label(kind: GameKind, player: Player) -> &'static str {
    match (kind, player) {
        (GameKind::Gomoku, Player::Human) => "黑棋",
        (GameKind::Gomoku, Player::Ai) => "白棋",
        (GameKind::TicTacToe, Player::Human) => "X",
        (GameKind::TicTacToe, Player::Ai) => "O",
    }
}

fn gomoku_status(session: &GameSession) -> &'static str {
    match session.turn_state() {
        TurnState::GameOver => match session.result() {
            Some(GameResult::Won(Player::Human)) => "你赢了!",
            Some(GameResult::Won(Player::Ai)) => "AI 赢了!",
            Some(GameResult::Draw) | None => "棋盘已满，平局!",
        },
        TurnState::WaitingForHuman if session.total_moves() == 0 => "新游戏开始，请落子 (黑棋)",
        TurnState::WaitingForHuman => "轮到你 (黑棋)",
        TurnState::AiThinking | TurnState::Removing => "轮到 AI (白棋)",
    }
}

fn tic_tac_toe_status(session: &GameSession) -> &'static str {
    match session.turn_state() {
        TurnState::GameOver => match session.result() {
            Some(GameResult::Won(Player::Human)) => "玩家 X 胜利！",
            Some(GameResult::Won(Player::Ai)) => "玩家 O 胜利！",
            Some(GameResult::Draw) | None => "平局！",
        },
        TurnState::Removing => "移除旧棋子…",
        TurnState::WaitingForHuman if session.total_moves() == 0 => "新游戏开始，玩家 X 先手",
        TurnState::WaitingForHuman => "轮到玩家 X",
        TurnState::AiThinking => "轮到 AI (O)",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Difficulty, Generation, Rules};
    use crate::core::Pos;

    #[test]
    fn test_gomoku_lines() {
        let mut session = GameSession::new(&Rules::GOMOKU, Difficulty::Medium, Generation::default());
        assert_eq!(status_text(GameKind::Gomoku, &session), "新游戏开始，请落子 (黑棋)");

        session.record_placement(Pos::new(7, 7));
        session.set_turn(Player::Ai, TurnState::AiThinking);
        assert_eq!(status_text(GameKind::Gomoku, &session), "轮到 AI (白棋)");

        session.set_turn(Player::Human, TurnState::WaitingForHuman);
        assert_eq!(status_text(GameKind::Gomoku, &session), "轮到你 (黑棋)");

        session.finish(GameResult::Won(Player::Ai));
        assert_eq!(status_text(GameKind::Gomoku, &session), "AI 赢了!");
    }

    #[test]
    fn test_tic_tac_toe_lines() {
        let mut session = GameSession::new(&Rules::TIC_TAC_TOE, Difficulty::Medium, Generation::default());
        assert_eq!(status_text(GameKind::TicTacToe, &session), "新游戏开始，玩家 X 先手");

        session.record_placement(Pos::new(1, 1));
        session.enter_removing();
        assert_eq!(status_text(GameKind::TicTacToe, &session), "移除旧棋子…");

        session.set_turn(Player::Ai, TurnState::AiThinking);
        assert_eq!(status_text(GameKind::TicTacToe, &session), "轮到 AI (O)");

        session.finish(GameResult::Draw);
        assert_eq!(status_text(GameKind::TicTacToe, &session), "平局！");
    }

    #[test]
    fn test_piece_labels() {
        assert_eq!(piece_label(GameKind::Gomoku, Player::Human), "黑棋");
        assert_eq!(piece_label(GameKind::TicTacToe, Player::Ai), "O");
    }
}

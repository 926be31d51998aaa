// Tic-tac-toe rules.
//
// A 3x3 board indexed 0..9 row by row. X always opens, turns alternate, and
// the game ends on the first completed line or a full board. The Discord
// layer only renders this state as buttons.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn other(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress { next: Mark },
    Won { winner: Mark, line: [usize; 3] },
    Draw,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("Cell {0} is not on the board")]
    OutOfBounds(usize),

    #[error("That cell is already taken")]
    Occupied(usize),

    #[error("The game is already over")]
    GameOver,
}

pub const BOARD_SIZE: usize = 9;

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone)]
pub struct TicTacToe {
    cells: [Option<Mark>; BOARD_SIZE],
    status: GameStatus,
}

impl TicTacToe {
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
            status: GameStatus::InProgress { next: Mark::X },
        }
    }

    pub fn cell(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        !matches!(self.status, GameStatus::InProgress { .. })
    }

    /// Place the current player's mark and return the new status.
    pub fn play(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        let GameStatus::InProgress { next } = self.status else {
            return Err(MoveError::GameOver);
        };
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(MoveError::OutOfBounds(index))?;
        if cell.is_some() {
            return Err(MoveError::Occupied(index));
        }
        *cell = Some(next);

        self.status = if let Some(line) = self.completed_line(next) {
            GameStatus::Won { winner: next, line }
        } else if self.cells.iter().all(Option::is_some) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress { next: next.other() }
        };

        Ok(self.status)
    }

    fn completed_line(&self, mark: Mark) -> Option<[usize; 3]> {
        LINES
            .iter()
            .copied()
            .find(|line| line.iter().all(|&i| self.cells[i] == Some(mark)))
    }

    pub fn is_winning_cell(&self, index: usize) -> bool {
        match self.status {
            GameStatus::Won { line, .. } => line.contains(&index),
            _ => false,
        }
    }

    /// One-line summary shown above the board.
    pub fn headline(&self) -> String {
        match self.status {
            GameStatus::InProgress { next } => format!("It is now {}'s turn", next.symbol()),
            GameStatus::Won { winner, .. } => format!("{} won!", winner.symbol()),
            GameStatus::Draw => "It's a tie!".to_string(),
        }
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_all(game: &mut TicTacToe, moves: &[usize]) -> GameStatus {
        let mut status = game.status();
        for &index in moves {
            status = game.play(index).unwrap();
        }
        status
    }

    #[test]
    fn x_opens_and_turns_alternate() {
        let mut game = TicTacToe::new();
        assert_eq!(game.status(), GameStatus::InProgress { next: Mark::X });

        assert_eq!(game.play(4), Ok(GameStatus::InProgress { next: Mark::O }));
        assert_eq!(game.play(0), Ok(GameStatus::InProgress { next: Mark::X }));
        assert_eq!(game.cell(4), Some(Mark::X));
        assert_eq!(game.cell(0), Some(Mark::O));
        assert_eq!(game.headline(), "It is now X's turn");
    }

    #[test]
    fn diagonal_win_is_detected() {
        let mut game = TicTacToe::new();

        let status = play_all(&mut game, &[0, 1, 4, 2, 8]);

        assert_eq!(
            status,
            GameStatus::Won {
                winner: Mark::X,
                line: [0, 4, 8]
            }
        );
        assert!(game.is_over());
        assert!(game.is_winning_cell(4));
        assert!(!game.is_winning_cell(1));
        assert_eq!(game.headline(), "X won!");
    }

    #[test]
    fn full_board_without_a_line_is_a_draw() {
        let mut game = TicTacToe::new();

        // X O X / X O O / O X X
        let status = play_all(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

        assert_eq!(status, GameStatus::Draw);
        assert_eq!(game.headline(), "It's a tie!");
    }

    #[test]
    fn win_on_the_last_cell_beats_draw() {
        let mut game = TicTacToe::new();

        // Ninth move fills the board and completes the left column.
        let status = play_all(&mut game, &[0, 1, 3, 4, 2, 5, 7, 8, 6]);

        assert_eq!(
            status,
            GameStatus::Won {
                winner: Mark::X,
                line: [0, 3, 6]
            }
        );
    }

    #[test]
    fn illegal_moves_are_rejected_without_changing_turn() {
        let mut game = TicTacToe::new();
        game.play(0).unwrap();

        assert_eq!(game.play(0), Err(MoveError::Occupied(0)));
        assert_eq!(game.play(9), Err(MoveError::OutOfBounds(9)));
        assert_eq!(game.status(), GameStatus::InProgress { next: Mark::O });
    }

    #[test]
    fn no_moves_after_the_game_ends() {
        let mut game = TicTacToe::new();
        play_all(&mut game, &[0, 3, 1, 4, 2]);

        assert_eq!(game.play(8), Err(MoveError::GameOver));
        assert_eq!(game.cell(8), None);
    }
}

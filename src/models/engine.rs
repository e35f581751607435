//! Rules engine contract and the shakmaty-backed implementation.
//!
//! The board view never decides legality, check or draws itself. Everything
//! it needs from the rules side goes through [`RulesEngine`]:
//! - legality of a (from, to) pair and applying a resolved move
//! - picking and playing the computer's move
//! - the current position as 64 piece codes in a8..h1 order
//! - side to move, which sides are computer-controlled, terminal state

use shakmaty::fen::Fen;
use shakmaty::{
    Bitboard, Board, CastlingMode, Chess, Color as SColor, EnPassantMode, File, Move, Position,
    Rank, Role,
};
use thiserror::Error;

use crate::domain::{MoveRequest, Piece, PromotionChoice, Square, shakmaty_to_piece};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("could not parse FEN {fen:?}: {reason}")]
    InvalidFen { fen: String, reason: String },
    #[error("FEN {fen:?} is not a legal position: {reason}")]
    IllegalPosition { fen: String, reason: String },
}

/// What the board view requires from a chess rules engine.
pub trait RulesEngine {
    /// Return to the standard starting position.
    fn reset(&mut self);
    fn configure_players(&mut self, white_is_computer: bool, black_is_computer: bool);
    /// Adopt a full FEN string as the current position.
    fn load_position(&mut self, fen: &str) -> Result<(), EngineError>;
    fn is_legal_move(&self, from: Square, to: Square) -> bool;
    /// Apply a move. Returns false (and leaves the position alone) if it is not legal.
    fn apply_move(&mut self, request: MoveRequest) -> bool;
    /// Choose and play a move for the side to move. Returns the move played.
    fn apply_computer_move(&mut self) -> Option<MoveRequest>;
    fn current_position(&self) -> [u8; 64];
    fn is_white_to_move(&self) -> bool;
    fn is_computer_to_move(&self) -> bool;
    fn is_checkmate(&self) -> bool;
    fn is_draw(&self) -> bool;
}

/// Everything that identifies a position for repetition purposes.
#[derive(Clone, Debug, PartialEq, Eq)]
struct RepetitionKey {
    board: Board,
    turn: SColor,
    castling: Bitboard,
    ep_square: Option<shakmaty::Square>,
}

impl RepetitionKey {
    fn of(position: &Chess) -> Self {
        Self {
            board: position.board().clone(),
            turn: position.turn(),
            castling: position.castles().castling_rights(),
            ep_square: position.ep_square(EnPassantMode::Legal),
        }
    }
}

/// [`RulesEngine`] on top of shakmaty, with a greedy one-ply computer player.
pub struct ShakmatyEngine {
    position: Chess,
    /// Positions reached since the last reset or load, current one last
    history: Vec<RepetitionKey>,
    white_is_computer: bool,
    black_is_computer: bool,
}

impl ShakmatyEngine {
    pub fn new() -> Self {
        let position = Chess::default();
        Self {
            history: vec![RepetitionKey::of(&position)],
            position,
            white_is_computer: false,
            black_is_computer: false,
        }
    }

    fn set_position(&mut self, position: Chess) {
        self.history.clear();
        self.history.push(RepetitionKey::of(&position));
        self.position = position;
    }

    fn play(&mut self, m: Move) -> bool {
        match self.position.clone().play(m) {
            Ok(next) => {
                self.history.push(RepetitionKey::of(&next));
                self.position = next;
                true
            }
            Err(err) => {
                tracing::error!("[ENGINE] Rejected move: {}", err);
                false
            }
        }
    }

    /// Legal moves whose drag gesture goes from `from` to `to`.
    fn moves_between(&self, from: Square, to: Square) -> Vec<Move> {
        let from_sq = to_shakmaty_square(from);
        let to_sq = to_shakmaty_square(to);
        self.position
            .legal_moves()
            .into_iter()
            .filter(|m| drag_endpoints(m) == Some((from_sq, to_sq)))
            .collect()
    }

    fn has_threefold_repetition(&self) -> bool {
        let Some(current) = self.history.last() else {
            return false;
        };
        self.history.iter().filter(|key| *key == current).count() >= 3
    }

    /// Mate first, then the largest material swing, first legal move on ties.
    fn choose_move(&self) -> Option<Move> {
        let mut best: Option<(i32, Move)> = None;
        for m in self.position.legal_moves() {
            let mut score = m.capture().map_or(0, role_value) * 10;
            if let Some(promoted) = m.promotion() {
                score += (role_value(promoted) - 1) * 10;
            }
            if let Ok(next) = self.position.clone().play(m.clone()) {
                if next.is_checkmate() {
                    score += 10_000;
                }
            }
            if best.as_ref().is_none_or(|(best_score, _)| score > *best_score) {
                best = Some((score, m));
            }
        }
        best.map(|(_, m)| m)
    }
}

impl Default for ShakmatyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RulesEngine for ShakmatyEngine {
    fn reset(&mut self) {
        self.set_position(Chess::default());
    }

    fn configure_players(&mut self, white_is_computer: bool, black_is_computer: bool) {
        self.white_is_computer = white_is_computer;
        self.black_is_computer = black_is_computer;
    }

    fn load_position(&mut self, fen: &str) -> Result<(), EngineError> {
        let parsed: Fen = fen.trim().parse().map_err(|err: shakmaty::fen::ParseFenError| {
            EngineError::InvalidFen {
                fen: fen.to_string(),
                reason: err.to_string(),
            }
        })?;
        let position: Chess = parsed
            .into_position(CastlingMode::Standard)
            .map_err(|err| EngineError::IllegalPosition {
                fen: fen.to_string(),
                reason: err.to_string(),
            })?;
        self.set_position(position);
        Ok(())
    }

    fn is_legal_move(&self, from: Square, to: Square) -> bool {
        !self.moves_between(from, to).is_empty()
    }

    fn apply_move(&mut self, request: MoveRequest) -> bool {
        let wanted = request.promotion.map_or(Role::Queen, choice_role);
        let candidates = self.moves_between(request.from, request.to);
        let chosen = candidates
            .iter()
            .find(|m| m.promotion().is_none_or(|role| role == wanted))
            .cloned();
        match chosen {
            Some(m) => self.play(m),
            None => false,
        }
    }

    fn apply_computer_move(&mut self) -> Option<MoveRequest> {
        let m = self.choose_move()?;
        let (from, to) = drag_endpoints(&m)?;
        let mut request = MoveRequest::new(from_shakmaty_square(from)?, from_shakmaty_square(to)?);
        request.promotion = m.promotion().and_then(role_choice);
        self.play(m).then_some(request)
    }

    fn current_position(&self) -> [u8; 64] {
        let board = self.position.board();
        let mut codes = [0u8; 64];
        for square in Square::all() {
            codes[square.index()] = board
                .piece_at(to_shakmaty_square(square))
                .map(shakmaty_to_piece)
                .map_or(0, Piece::code);
        }
        codes
    }

    fn is_white_to_move(&self) -> bool {
        self.position.turn() == SColor::White
    }

    fn is_computer_to_move(&self) -> bool {
        match self.position.turn() {
            SColor::White => self.white_is_computer,
            SColor::Black => self.black_is_computer,
        }
    }

    fn is_checkmate(&self) -> bool {
        self.position.is_checkmate()
    }

    fn is_draw(&self) -> bool {
        self.position.is_stalemate()
            || self.position.is_insufficient_material()
            || self.has_threefold_repetition()
    }
}

/// The squares a player drags between to make `m`. Castling is dragged
/// king-to-destination (g1/c1), not king-onto-rook.
fn drag_endpoints(m: &Move) -> Option<(shakmaty::Square, shakmaty::Square)> {
    match m {
        Move::Normal { from, to, .. } | Move::EnPassant { from, to } => Some((*from, *to)),
        Move::Castle { king, rook } => {
            let king_dest = if rook.file() == File::H {
                shakmaty::Square::from_coords(File::G, rook.rank())
            } else {
                shakmaty::Square::from_coords(File::C, rook.rank())
            };
            Some((*king, king_dest))
        }
        Move::Put { .. } => None,
    }
}

fn to_shakmaty_square(square: Square) -> shakmaty::Square {
    shakmaty::Square::from_coords(
        File::new(u32::from(square.file() - 1)),
        Rank::new(u32::from(square.rank() - 1)),
    )
}

fn from_shakmaty_square(square: shakmaty::Square) -> Option<Square> {
    Square::new(square.rank() as u8 + 1, square.file() as u8 + 1).ok()
}

fn role_value(role: Role) -> i32 {
    match role {
        Role::Pawn => 1,
        Role::Knight | Role::Bishop => 3,
        Role::Rook => 5,
        Role::Queen => 9,
        Role::King => 0,
    }
}

fn choice_role(choice: PromotionChoice) -> Role {
    match choice {
        PromotionChoice::Queen => Role::Queen,
        PromotionChoice::Rook => Role::Rook,
        PromotionChoice::Bishop => Role::Bishop,
        PromotionChoice::Knight => Role::Knight,
    }
}

fn role_choice(role: Role) -> Option<PromotionChoice> {
    match role {
        Role::Queen => Some(PromotionChoice::Queen),
        Role::Rook => Some(PromotionChoice::Rook),
        Role::Bishop => Some(PromotionChoice::Bishop),
        Role::Knight => Some(PromotionChoice::Knight),
        Role::Pawn | Role::King => None,
    }
}

//! Board state for the N-queens problem.
//!
//! A [`Board`] maps every row of an N×N board to the ascending set of columns
//! occupied by queens in that row. Boards produced by [`Board::random`] hold
//! exactly one queen per row. Relocating a queen vertically or diagonally can
//! leave a row with several queens and another with none; the objective
//! counts such rows as conflicts.

use std::fmt;

use rand::Rng;
use smallvec::{smallvec, SmallVec};

use crate::error::{QueensError, Result};

/// Columns occupied in a single row, kept in ascending order.
///
/// Rows almost always hold exactly one queen, so the container stores up to
/// two columns inline.
pub type RowColumns = SmallVec<[usize; 2]>;

/// A configuration of queens on an N×N board.
///
/// # Examples
///
/// ```
/// use queenclimb_core::Board;
///
/// let board = Board::from_columns(&[1, 3, 0, 2]).unwrap();
/// assert_eq!(board.size(), 4);
/// assert_eq!(board.row(1), &[3]);
/// assert!(board.is_occupied(2, 0));
/// assert!(!board.is_occupied(2, 1));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    rows: Vec<RowColumns>,
}

impl Board {
    /// Creates a random board of size `n` with exactly one queen per row.
    ///
    /// Each row receives one column drawn uniformly from `0..n`; distinct rows
    /// may share a column.
    ///
    /// # Errors
    ///
    /// Returns [`QueensError::InvalidBoardSize`] when `n` is zero.
    pub fn random<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Self> {
        if n == 0 {
            return Err(QueensError::InvalidBoardSize(n));
        }
        let rows = (0..n).map(|_| smallvec![rng.random_range(0..n)]).collect();
        Ok(Self { rows })
    }

    /// Creates a board with one queen per row, `columns[row]` giving its column.
    pub fn from_columns(columns: &[usize]) -> Result<Self> {
        let size = columns.len();
        if size == 0 {
            return Err(QueensError::InvalidBoardSize(size));
        }
        let rows = columns
            .iter()
            .enumerate()
            .map(|(row, &column)| {
                if column < size {
                    Ok(smallvec![column])
                } else {
                    Err(QueensError::InvalidPosition { row, column, size })
                }
            })
            .collect::<Result<Vec<RowColumns>>>()?;
        Ok(Self { rows })
    }

    /// Creates a board from an explicit row layout.
    ///
    /// Rows may hold any number of queens, including none. Columns are sorted
    /// and duplicates within a row collapse into one queen.
    pub fn from_rows(rows: Vec<Vec<usize>>) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(QueensError::InvalidBoardSize(size));
        }
        let mut built = Vec::with_capacity(size);
        for (row, mut columns) in rows.into_iter().enumerate() {
            if let Some(&column) = columns.iter().find(|&&c| c >= size) {
                return Err(QueensError::InvalidPosition { row, column, size });
            }
            columns.sort_unstable();
            columns.dedup();
            built.push(RowColumns::from_vec(columns));
        }
        Ok(Self { rows: built })
    }

    /// Returns N, the side length of the board.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Returns the total number of queens on the board.
    pub fn queen_count(&self) -> usize {
        self.rows.iter().map(|r| r.len()).sum()
    }

    /// Returns the ascending columns occupied in `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is not on the board.
    pub fn row(&self, row: usize) -> &[usize] {
        &self.rows[row]
    }

    /// Returns true if a queen stands on `(row, column)`.
    pub fn is_occupied(&self, row: usize, column: usize) -> bool {
        self.rows
            .get(row)
            .is_some_and(|cols| cols.binary_search(&column).is_ok())
    }

    /// Iterates over all queens as `(row, column)` in row-major order.
    pub fn queens(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(row, cols)| cols.iter().map(move |&col| (row, col)))
    }

    /// Returns the column of each row when every row holds exactly one queen.
    pub fn columns(&self) -> Option<Vec<usize>> {
        self.rows
            .iter()
            .map(|cols| match cols.as_slice() {
                [col] => Some(*col),
                _ => None,
            })
            .collect()
    }

    /// Returns a copy of this board with the queen at `from` relocated to `to`.
    ///
    /// The destination row stays sorted. `self` is left untouched.
    ///
    /// # Errors
    ///
    /// [`QueensError::InvalidPosition`] when `to` lies outside the board, and
    /// [`QueensError::IllegalMove`] when `from` holds no queen or `to` is
    /// already occupied.
    pub fn with_queen_moved(&self, from: (usize, usize), to: (usize, usize)) -> Result<Board> {
        let (from_row, from_col) = from;
        let (to_row, to_col) = to;
        let size = self.size();

        if to_row >= size || to_col >= size {
            return Err(QueensError::InvalidPosition {
                row: to_row,
                column: to_col,
                size,
            });
        }
        if !self.is_occupied(from_row, from_col) || self.is_occupied(to_row, to_col) {
            return Err(QueensError::IllegalMove {
                from_row,
                from_col,
                to_row,
                to_col,
            });
        }

        let mut next = self.clone();
        let origin = &mut next.rows[from_row];
        if let Ok(idx) = origin.binary_search(&from_col) {
            origin.remove(idx);
        }
        let dest = &mut next.rows[to_row];
        if let Err(idx) = dest.binary_search(&to_col) {
            dest.insert(idx, to_col);
        }
        Ok(next)
    }

    /// Renders the board as an N×N matrix of 0/1 presence flags, row-major.
    pub fn to_array(&self) -> Vec<Vec<u8>> {
        let n = self.size();
        self.rows
            .iter()
            .map(|cols| {
                let mut row = vec![0u8; n];
                for &col in cols {
                    row[col] = 1;
                }
                row
            })
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for flags in self.to_array() {
            let line: Vec<&str> = flags
                .iter()
                .map(|&flag| if flag == 1 { "Q" } else { "." })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Draws a random start state of size `n` with one queen per row.
///
/// # Examples
///
/// ```
/// use queenclimb_core::generate_start_state;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let board = generate_start_state(8, &mut rng).unwrap();
/// assert_eq!(board.queen_count(), 8);
/// assert!(board.columns().is_some());
/// ```
pub fn generate_start_state<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Board> {
    Board::random(n, rng)
}

/// Renders `board` as an N×N matrix of 0/1 presence flags.
pub fn to_array(board: &Board) -> Vec<Vec<u8>> {
    board.to_array()
}

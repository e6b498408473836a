use std::collections::HashSet;

use log::debug;
use rand::Rng;

use crate::board::{Board, Cell};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Food {
    pub position: Cell,
}

impl Food {
    /// Picks a uniformly random free cell by rejection sampling.
    ///
    /// Panics if `occupied` covers every cell of the board, since no free cell
    /// exists and the retry loop would never end.
    pub fn place_avoiding(board: Board, occupied: &HashSet<Cell>, rng: &mut impl Rng) -> Food {
        Food::try_place_avoiding(board, occupied, rng).unwrap_or_else(|| {
            panic!(
                "No free cell left on a {}x{} board to place food",
                board.width_cells, board.height_cells
            )
        })
    }

    /// Like [`Food::place_avoiding`], but returns `None` when the board is full.
    pub fn try_place_avoiding(
        board: Board,
        occupied: &HashSet<Cell>,
        rng: &mut impl Rng,
    ) -> Option<Food> {
        let blocked = occupied.iter().filter(|cell| board.contains(**cell)).count();
        if blocked >= board.cell_count() {
            return None;
        }

        loop {
            let position = Cell {
                col: rng.gen_range(0..board.width_cells),
                row: rng.gen_range(0..board.height_cells),
            };

            if !occupied.contains(&position) {
                debug!("Placed food at {:?}", position);
                return Some(Food { position });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_placement_stays_on_board() {
        let board = Board::new(32, 24, 2);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let food = Food::place_avoiding(board, &HashSet::new(), &mut rng);
            assert!(board.contains(food.position));
        }
    }

    #[test]
    fn test_placement_avoids_occupied_cells() {
        let board = Board::new(6, 4, 2);
        let occupied: HashSet<Cell> = board.cells().filter(|cell| cell.row < 3).collect();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let food = Food::place_avoiding(board, &occupied, &mut rng);
            assert!(!occupied.contains(&food.position));
            assert_eq!(food.position.row, 3);
        }
    }

    #[test]
    fn test_single_free_cell_is_found() {
        let board = Board::new(5, 5, 2);
        let free = Cell::new(3, 1);
        let occupied: HashSet<Cell> = board.cells().filter(|cell| *cell != free).collect();
        let mut rng = StdRng::seed_from_u64(1);

        let food = Food::place_avoiding(board, &occupied, &mut rng);
        assert_eq!(food.position, free);
    }

    #[test]
    fn test_every_cell_reachable() {
        let board = Board::new(3, 2, 2);
        let mut rng = StdRng::seed_from_u64(99);
        let seen: HashSet<Cell> = (0..1000)
            .map(|_| Food::place_avoiding(board, &HashSet::new(), &mut rng).position)
            .collect();
        assert_eq!(seen.len(), board.cell_count());
    }

    #[test]
    #[should_panic(expected = "No free cell left")]
    fn test_full_board_panics() {
        let board = Board::new(3, 3, 2);
        let occupied: HashSet<Cell> = board.cells().collect();
        let mut rng = StdRng::seed_from_u64(0);

        Food::place_avoiding(board, &occupied, &mut rng);
    }

    #[test]
    fn test_full_board_yields_none() {
        let board = Board::new(3, 3, 2);
        let occupied: HashSet<Cell> = board.cells().collect();
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(Food::try_place_avoiding(board, &occupied, &mut rng), None);
    }

    #[test]
    fn test_off_board_cells_do_not_count_as_blocking() {
        let board = Board::new(1, 2, 2);
        let occupied = HashSet::from([Cell::new(0, 0), Cell::new(7, 7)]);
        let mut rng = StdRng::seed_from_u64(3);

        let food = Food::place_avoiding(board, &occupied, &mut rng);
        assert_eq!(food.position, Cell::new(0, 1));
    }
}

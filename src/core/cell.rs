//=========================================================================
// Cell
//=========================================================================
//
// Smallest unit of simulation state: an alive flag plus the live-neighbor
// tally written by the counting pass.
//
// Per-generation lifecycle:
//   set_neighbor_count()  (counting pass, reads old alive flags)
//        ↓
//   next_generation()     (transition pass, B3/S23)
//
//=========================================================================

//=== Cell ================================================================

/// A single grid cell.
///
/// `live_neighbors` is scratch state: it is overwritten by every counting
/// pass before the transition pass reads it, so it carries no meaning from
/// one generation into the next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    alive: bool,
    live_neighbors: u8,
}

impl Cell {
    //--- Construction -----------------------------------------------------

    /// Creates a cell with the given state and a zero neighbor tally.
    pub fn new(alive: bool) -> Self {
        Self {
            alive,
            live_neighbors: 0,
        }
    }

    //--- Accessors --------------------------------------------------------

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Live neighbors recorded by the most recent counting pass.
    pub fn live_neighbors(&self) -> u8 {
        self.live_neighbors
    }

    //--- Mutation ---------------------------------------------------------

    pub fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }

    /// Stores the tally for the current generation.
    ///
    /// A Moore neighborhood has 8 cells, so `count` never exceeds 8.
    pub fn set_neighbor_count(&mut self, count: u8) {
        debug_assert!(count <= 8, "neighbor count out of range: {}", count);
        self.live_neighbors = count;
    }

    //--- Transition -------------------------------------------------------

    /// Applies the B3/S23 rule using the stored neighbor tally.
    ///
    /// | current | neighbors | next  |
    /// |---------|-----------|-------|
    /// | dead    | 3         | alive |
    /// | alive   | 2 or 3    | alive |
    /// | any     | other     | dead  |
    pub fn next_generation(&mut self) {
        self.alive = matches!(
            (self.alive, self.live_neighbors),
            (false, 3) | (true, 2) | (true, 3)
        );
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn evolve(alive: bool, neighbors: u8) -> bool {
        let mut cell = Cell::new(alive);
        cell.set_neighbor_count(neighbors);
        cell.next_generation();
        cell.is_alive()
    }

    //=====================================================================
    // Transition Table
    //=====================================================================

    #[test]
    fn dead_cell_with_three_neighbors_is_born() {
        assert!(evolve(false, 3));
    }

    #[test]
    fn dead_cell_without_exactly_three_stays_dead() {
        for n in (0..=8).filter(|&n| n != 3) {
            assert!(!evolve(false, n), "dead cell with {} neighbors came alive", n);
        }
    }

    #[test]
    fn live_cell_with_two_or_three_survives() {
        assert!(evolve(true, 2));
        assert!(evolve(true, 3));
    }

    #[test]
    fn live_cell_with_other_counts_dies() {
        for n in [0, 1, 4, 5, 6, 7, 8] {
            assert!(!evolve(true, n), "live cell with {} neighbors survived", n);
        }
    }

    //=====================================================================
    // State Handling
    //=====================================================================

    #[test]
    fn new_cell_starts_with_zero_tally() {
        let cell = Cell::new(true);
        assert!(cell.is_alive());
        assert_eq!(cell.live_neighbors(), 0);
    }

    #[test]
    fn default_cell_is_dead() {
        assert!(!Cell::default().is_alive());
    }

    #[test]
    fn tally_is_overwritten_not_accumulated() {
        let mut cell = Cell::new(false);
        cell.set_neighbor_count(5);
        cell.set_neighbor_count(2);
        assert_eq!(cell.live_neighbors(), 2);
    }

    #[test]
    fn transition_does_not_touch_tally() {
        let mut cell = Cell::new(false);
        cell.set_neighbor_count(3);
        cell.next_generation();
        assert_eq!(cell.live_neighbors(), 3);
    }
}

//! Agent body model: an ordered chain of segments with per-segment headings.

use autosnake_core::{CellCoord, Direction};

/// One body unit of the agent, carrying position and heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    cell: CellCoord,
    heading: Direction,
}

impl Segment {
    /// Creates a new segment at the provided cell and heading.
    #[must_use]
    pub const fn new(cell: CellCoord, heading: Direction) -> Self {
        Self { cell, heading }
    }

    /// Grid cell currently occupied by the segment.
    #[must_use]
    pub const fn cell(&self) -> CellCoord {
        self.cell
    }

    /// Direction the segment will move along on the next step.
    #[must_use]
    pub const fn heading(&self) -> Direction {
        self.heading
    }
}

/// Ordered, head-first chain of segments.
///
/// Invariants: the body always holds at least the head, and after any
/// [`Agent::advance`] every consecutive pair of segments is grid-adjacent.
#[derive(Clone, Debug)]
pub struct Agent {
    segments: Vec<Segment>,
}

impl Agent {
    /// Creates a single-segment agent at the provided cell and heading.
    #[must_use]
    pub(crate) fn new(cell: CellCoord, heading: Direction) -> Self {
        Self {
            segments: vec![Segment::new(cell, heading)],
        }
    }

    /// Builds an agent from an explicit head-first segment chain.
    ///
    /// # Panics
    ///
    /// Panics when the chain is empty.
    #[cfg(feature = "scenario_scaffolding")]
    #[must_use]
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        assert!(!segments.is_empty(), "agent body requires a head segment");
        Self { segments }
    }

    /// Snapshot of the head segment.
    #[must_use]
    pub(crate) fn head(&self) -> Segment {
        self.segments[0]
    }

    /// Head-first view of the segment chain.
    #[must_use]
    pub(crate) fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Advances every segment one cell, steering the head as provided.
    ///
    /// Headings propagate one place tail-ward first, using the pre-move
    /// snapshot, so that corners are traced cell by cell instead of the whole
    /// body snapping to the head's new heading.
    pub(crate) fn advance(&mut self, heading: Direction) {
        // Tail-ward iteration reads each predecessor before it is rewritten.
        for index in (1..self.segments.len()).rev() {
            self.segments[index].heading = self.segments[index - 1].heading;
        }
        self.segments[0].heading = heading;

        for segment in &mut self.segments {
            segment.cell = segment.cell.step(segment.heading);
        }
    }

    /// Appends a new tail segment one cell behind the current tail.
    ///
    /// The new segment extends the body backward along the tail's direction
    /// of travel and inherits its heading. Existing segments do not move.
    /// Returns the cell occupied by the appended segment.
    pub(crate) fn grow(&mut self) -> CellCoord {
        let tail = self.segments[self.segments.len() - 1];
        let cell = tail.cell().step(tail.heading().opposite());
        self.segments.push(Segment::new(cell, tail.heading()));
        cell
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grow_appends_adjacent_tail() {
        let mut agent = Agent::new(CellCoord::new(5, 5), Direction::East);
        let tail = agent.grow();

        assert_eq!(agent.segments().len(), 2);
        assert_eq!(tail, CellCoord::new(4, 5));
        assert_eq!(tail.manhattan_distance(agent.head().cell()), 1);
        assert_eq!(agent.segments()[1].heading(), Direction::East);
    }

    #[test]
    fn advance_moves_head_by_unit_offset() {
        let mut agent = Agent::new(CellCoord::new(2, 2), Direction::East);
        agent.advance(Direction::South);
        assert_eq!(agent.head().cell(), CellCoord::new(2, 3));
        assert_eq!(agent.head().heading(), Direction::South);
    }

    #[test]
    fn followers_occupy_predecessor_cells_after_advance() {
        let mut agent = Agent::new(CellCoord::new(5, 5), Direction::East);
        let _ = agent.grow();
        let _ = agent.grow();
        let before: Vec<CellCoord> = agent
            .segments()
            .iter()
            .map(|segment| segment.cell())
            .collect();

        agent.advance(Direction::East);

        let after: Vec<CellCoord> = agent
            .segments()
            .iter()
            .map(|segment| segment.cell())
            .collect();
        for (follower, predecessor_before) in after.iter().skip(1).zip(before.iter()) {
            assert_eq!(follower, predecessor_before);
        }
    }

    #[test]
    fn corners_are_traced_segment_by_segment() {
        let mut agent = Agent::new(CellCoord::new(5, 5), Direction::East);
        let _ = agent.grow();
        let _ = agent.grow();

        // Head turns south; followers keep travelling east for one more step
        // each before adopting the turn.
        agent.advance(Direction::South);
        assert_eq!(agent.head().cell(), CellCoord::new(5, 6));
        assert_eq!(agent.segments()[1].cell(), CellCoord::new(5, 5));
        assert_eq!(agent.segments()[1].heading(), Direction::East);

        agent.advance(Direction::South);
        assert_eq!(agent.head().cell(), CellCoord::new(5, 7));
        assert_eq!(agent.segments()[1].cell(), CellCoord::new(5, 6));
        assert_eq!(agent.segments()[1].heading(), Direction::South);
        assert_eq!(agent.segments()[2].cell(), CellCoord::new(5, 5));

        for pair in agent.segments().windows(2) {
            assert_eq!(pair[0].cell().manhattan_distance(pair[1].cell()), 1);
        }
    }
}

use super::{Cell, Grid};

/// Compare two same-sized generations and list the cells whose state
/// differs, as (row, column, new state) triples in row-major order.
///
/// The transition engine knows nothing about this; any two generations can
/// be diffed, whether adjacent in time or not. Renderers use the result to
/// repaint only what changed between frames.
pub fn changed_cells(before: &Grid, after: &Grid) -> Vec<(usize, usize, Cell)> {
    debug_assert_eq!(before.dimensions(), after.dimensions());

    before
        .iter_cells()
        .zip(after.iter_cells())
        .filter(|((_, _, old), (_, _, new))| old != new)
        .map(|(_, (row, column, cell))| (row, column, cell))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Grid {
        text.parse().expect("test literal should parse")
    }

    #[test]
    fn test_still_life_yields_no_changes() {
        let block = parse(
            "
            ....
            .##.
            .##.
            ....
            ",
        );

        assert!(changed_cells(&block, &block.next_generation()).is_empty());
    }

    #[test]
    fn test_blinker_step_yields_flipped_cells() {
        let horizontal = parse(
            "
            .....
            .....
            .###.
            .....
            .....
            ",
        );
        let vertical = horizontal.next_generation();

        let changes = changed_cells(&horizontal, &vertical);
        assert_eq!(
            changes,
            vec![
                (1, 2, Cell::Alive),
                (2, 1, Cell::Dead),
                (2, 3, Cell::Dead),
                (3, 2, Cell::Alive),
            ]
        );
    }

    #[test]
    fn test_changes_carry_the_new_state() {
        let mut before = Grid::new(2, 2).unwrap();
        let mut after = Grid::new(2, 2).unwrap();
        before.set(0, 0, Cell::Alive);
        after.set(1, 1, Cell::Alive);

        let changes = changed_cells(&before, &after);
        assert_eq!(changes, vec![(0, 0, Cell::Dead), (1, 1, Cell::Alive)]);
    }
}

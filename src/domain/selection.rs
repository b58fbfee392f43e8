use crate::error::{Result, SplitError};

/// Which attendees share each item.
///
/// Cell `(item, attendee)` is `true` when that attendee pays a share of that
/// item. The matrix is sized once and never grows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionMatrix {
    attendee_count: usize,
    cells: Vec<Vec<bool>>,
}

impl SelectionMatrix {
    /// Creates a matrix with nothing selected.
    pub fn new(item_count: usize, attendee_count: usize) -> Self {
        Self {
            attendee_count,
            cells: vec![vec![false; attendee_count]; item_count],
        }
    }

    pub fn item_count(&self) -> usize {
        self.cells.len()
    }

    pub fn attendee_count(&self) -> usize {
        self.attendee_count
    }

    /// Marks whether `attendee` shares `item`.
    pub fn set(&mut self, item: usize, attendee: usize, selected: bool) -> Result<()> {
        self.check_bounds(item, attendee)?;
        self.cells[item][attendee] = selected;
        Ok(())
    }

    /// Returns `false` for out of range cells.
    pub fn is_selected(&self, item: usize, attendee: usize) -> bool {
        self.cells
            .get(item)
            .and_then(|row| row.get(attendee))
            .copied()
            .unwrap_or(false)
    }

    /// Indices of the attendees sharing `item`, in attendee order.
    pub fn selectors(&self, item: usize) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .get(item)
            .into_iter()
            .flat_map(|row| row.iter().enumerate())
            .filter_map(|(attendee, &selected)| selected.then_some(attendee))
    }

    pub fn selector_count(&self, item: usize) -> usize {
        self.selectors(item).count()
    }

    fn check_bounds(&self, item: usize, attendee: usize) -> Result<()> {
        if item >= self.item_count() {
            return Err(SplitError::Validation(format!(
                "item index {} out of range (bill has {} items)",
                item,
                self.item_count()
            )));
        }
        if attendee >= self.attendee_count {
            return Err(SplitError::Validation(format!(
                "attendee index {} out of range ({} attendees)",
                attendee, self.attendee_count
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_matrix_is_empty() {
        let matrix = SelectionMatrix::new(3, 2);
        assert_eq!(matrix.item_count(), 3);
        assert_eq!(matrix.attendee_count(), 2);
        for item in 0..3 {
            assert_eq!(matrix.selector_count(item), 0);
        }
    }

    #[test]
    fn test_set_and_clear() {
        let mut matrix = SelectionMatrix::new(2, 3);
        matrix.set(0, 2, true).unwrap();
        matrix.set(0, 0, true).unwrap();
        assert_eq!(matrix.selectors(0).collect::<Vec<_>>(), vec![0, 2]);

        matrix.set(0, 2, false).unwrap();
        assert_eq!(matrix.selectors(0).collect::<Vec<_>>(), vec![0]);
        assert!(!matrix.is_selected(1, 0));
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let mut matrix = SelectionMatrix::new(2, 2);
        assert!(matches!(matrix.set(2, 0, true), Err(SplitError::Validation(_))));
        assert!(matches!(matrix.set(0, 5, true), Err(SplitError::Validation(_))));
        assert_eq!(matrix, SelectionMatrix::new(2, 2));
        assert!(!matrix.is_selected(9, 9));
        assert_eq!(matrix.selector_count(9), 0);
    }
}

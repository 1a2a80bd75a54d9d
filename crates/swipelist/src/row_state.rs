use crate::config::Side;

/// Durable per-row swipe state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RowState {
    pub opened: bool,
    /// Only meaningful while `opened`.
    pub opened_right: bool,
    pub checked: bool,
    pub(crate) dismissing: bool,
    pub(crate) reveals_in_flight: u32,
}

impl RowState {
    /// Side the row is open to, if open.
    pub fn open_side(&self) -> Option<Side> {
        self.opened.then(|| Side::from_right(self.opened_right))
    }

    pub fn is_dismissing(&self) -> bool {
        self.dismissing
    }

    pub fn is_revealing(&self) -> bool {
        self.reveals_in_flight > 0
    }
}

/// Row states indexed by adapter position. Grows to cover the adapter and
/// only shrinks when dismissed rows are removed.
#[derive(Clone, Debug, Default)]
pub struct RowStateTable {
    rows: Vec<RowState>,
}

impl RowStateTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn grow_to(&mut self, count: usize) {
        if self.rows.len() < count {
            self.rows.resize(count, RowState::default());
        }
    }

    /// Rows never seen read as closed.
    pub fn get(&self, row: usize) -> RowState {
        self.rows.get(row).copied().unwrap_or_default()
    }

    pub(crate) fn get_mut(&mut self, row: usize) -> &mut RowState {
        self.grow_to(row + 1);
        &mut self.rows[row]
    }

    pub fn is_open(&self, row: usize) -> bool {
        self.get(row).opened
    }

    pub(crate) fn remove(&mut self, row: usize) {
        if row < self.rows.len() {
            self.rows.remove(row);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &RowState> {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_start_closed() {
        let mut table = RowStateTable::new();
        table.grow_to(4);
        assert_eq!(table.len(), 4);
        assert!(table.iter().all(|row| !row.opened && row.open_side().is_none()));
        assert!(!table.is_open(10));
    }

    #[test]
    fn grow_never_shrinks() {
        let mut table = RowStateTable::new();
        table.grow_to(5);
        table.get_mut(3).opened = true;
        table.grow_to(2);
        assert_eq!(table.len(), 5);
        assert!(table.is_open(3));
    }

    #[test]
    fn remove_shifts_later_rows_down() {
        let mut table = RowStateTable::new();
        table.grow_to(4);
        table.get_mut(3).opened = true;
        table.get_mut(3).opened_right = true;
        table.remove(1);
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(2).open_side(), Some(Side::Right));
        table.remove(9);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn get_mut_grows_on_demand() {
        let mut table = RowStateTable::new();
        table.get_mut(2).checked = true;
        assert_eq!(table.len(), 3);
        assert!(table.get(2).checked);
    }
}

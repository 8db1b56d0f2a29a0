//! 列表与网格的选中位置

/// 目录网格的列数
pub const CARD_COLUMNS: usize = 2;

/// 一维列表的选中位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListSelection {
    pub selected: usize,
    len: usize,
}

impl ListSelection {
    pub fn new(len: usize) -> Self {
        Self { selected: 0, len }
    }

    /// 当前选中项，空列表返回 `None`
    pub fn current(&self) -> Option<usize> {
        (self.selected < self.len).then_some(self.selected)
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected < self.len.saturating_sub(1) {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.len.saturating_sub(1);
    }
}

/// 按行填充、每行 `CARD_COLUMNS` 个卡片的网格
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSelection {
    list: ListSelection,
}

impl GridSelection {
    pub fn new(len: usize) -> Self {
        Self {
            list: ListSelection::new(len),
        }
    }

    pub fn current(&self) -> Option<usize> {
        self.list.current()
    }

    /// 选中项所在的 (行, 列)
    pub fn position(&self) -> (usize, usize) {
        (
            self.list.selected / CARD_COLUMNS,
            self.list.selected % CARD_COLUMNS,
        )
    }

    pub fn move_left(&mut self) {
        if self.position().1 > 0 {
            self.list.select_previous();
        }
    }

    pub fn move_right(&mut self) {
        if self.position().1 + 1 < CARD_COLUMNS {
            self.list.select_next();
        }
    }

    pub fn move_up(&mut self) {
        if self.list.selected >= CARD_COLUMNS {
            self.list.selected -= CARD_COLUMNS;
        }
    }

    /// 下一行没有正下方的卡片时，落到最后一张
    pub fn move_down(&mut self) {
        let target = self.list.selected + CARD_COLUMNS;
        if target < self.list.len {
            self.list.selected = target;
        } else if self.position().0 < self.list.len.saturating_sub(1) / CARD_COLUMNS {
            self.list.select_last();
        }
    }

    pub fn select_first(&mut self) {
        self.list.select_first();
    }

    pub fn select_last(&mut self) {
        self.list.select_last();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_stays_in_bounds() {
        let mut list = ListSelection::new(3);
        list.select_previous();
        assert_eq!(list.current(), Some(0));

        list.select_last();
        list.select_next();
        assert_eq!(list.current(), Some(2));
    }

    #[test]
    fn empty_list_has_no_selection() {
        let mut list = ListSelection::new(0);
        list.select_next();
        list.select_last();
        assert_eq!(list.selected, 0);
        assert_eq!(list.current(), None);
    }

    #[test]
    fn grid_moves_by_rows_and_columns() {
        // 0 1
        // 2 3
        let mut grid = GridSelection::new(4);

        grid.move_right();
        assert_eq!(grid.current(), Some(1));
        grid.move_right();
        assert_eq!(grid.current(), Some(1));

        grid.move_down();
        assert_eq!(grid.current(), Some(3));
        grid.move_down();
        assert_eq!(grid.current(), Some(3));

        grid.move_left();
        grid.move_up();
        assert_eq!(grid.current(), Some(0));
    }

    #[test]
    fn moving_down_into_short_row_lands_on_last_card() {
        // 0 1
        // 2
        let mut grid = GridSelection::new(3);
        grid.move_right();
        grid.move_down();
        assert_eq!(grid.current(), Some(2));
    }
}

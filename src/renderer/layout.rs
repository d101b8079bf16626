/// Margin kept clear on every side of the board.
pub const PADDING: u16 = 2;
pub const NAME_COLUMN_WIDTH: u16 = 28;
pub const COLUMN_GAP: u16 = 1;
/// Criterion columns never shrink below this, even if they overflow.
pub const MIN_COLUMN_WIDTH: u16 = 10;
/// Rows above the first competitor (title banner and column headings).
pub const HEADER_HEIGHT: u16 = 9;
pub const ROW_HEIGHT: u16 = 4;
pub const ENTRY_BOX_HEIGHT: u16 = 4;

/// Board geometry for a given canvas size and criterion count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub width: u16,
    pub height: u16,
    pub column_width: u16,
}

impl Layout {
    pub fn compute(width: u16, height: u16, criteria: usize) -> Self {
        let remaining = width.saturating_sub(NAME_COLUMN_WIDTH + 3 * PADDING);
        let per_column = remaining / criteria.max(1) as u16;
        Layout {
            width,
            height,
            column_width: per_column.max(MIN_COLUMN_WIDTH),
        }
    }

    pub fn name_x(&self) -> i32 {
        PADDING as i32
    }

    /// Left edge of criterion column `criterion` (0-based).
    pub fn column_x(&self, criterion: usize) -> i32 {
        let first = PADDING + NAME_COLUMN_WIDTH + COLUMN_GAP;
        first as i32 + criterion as i32 * (self.column_width + COLUMN_GAP) as i32
    }

    pub fn heading_y(&self) -> i32 {
        HEADER_HEIGHT as i32 - 2
    }

    /// Top row of competitor row `row` (0-based).
    pub fn row_top(&self, row: usize) -> i32 {
        HEADER_HEIGHT as i32 + row as i32 * ROW_HEIGHT as i32
    }

    /// Competitor rows that fit between the header and the entry box.
    pub fn row_capacity(&self) -> usize {
        let (_, entry_y, _, _) = self.entry_box();
        let room = entry_y - HEADER_HEIGHT as i32;
        (room.max(0) / ROW_HEIGHT as i32) as usize
    }

    /// Row the competitor's text sits on.
    pub fn row_text_y(&self, row: usize) -> i32 {
        self.row_top(row) + (ROW_HEIGHT as i32 - 1) / 2
    }

    /// Offset that centres `len` cells in a criterion column.
    pub fn centered_in_column(&self, criterion: usize, len: usize) -> i32 {
        self.column_x(criterion) + (self.column_width as i32 - len as i32) / 2
    }

    /// Where a pop celebration for `row` grows from.
    pub fn pop_anchor(&self, row: usize) -> (f64, f64) {
        (
            (self.width / 3) as f64,
            self.row_text_y(row) as f64,
        )
    }

    /// Row slide celebrations travel along.
    pub fn slide_lane(&self) -> f64 {
        (self.height / 4) as f64
    }

    /// Inclusive column range falling logos may start in.
    pub fn shower_span(&self) -> (u16, u16) {
        let margin = self.width / 16;
        let hi = self.width.saturating_sub(margin + 1);
        if margin < hi {
            (margin, hi)
        } else {
            (0, self.width.saturating_sub(1))
        }
    }

    /// `(x, y, w, h)` of the text-entry box along the bottom.
    pub fn entry_box(&self) -> (i32, i32, i32, i32) {
        let h = ENTRY_BOX_HEIGHT as i32;
        (
            PADDING as i32,
            self.height as i32 - h - PADDING as i32,
            self.width as i32 - 2 * PADDING as i32,
            h,
        )
    }

    pub fn footer_y(&self) -> i32 {
        self.height as i32 - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_split_remaining_width() {
        let layout = Layout::compute(120, 36, 3);
        assert_eq!(layout.column_width, 28);
        assert_eq!(layout.column_x(0), 31);
        assert_eq!(layout.column_x(2), 31 + 2 * 29);
    }

    #[test]
    fn narrow_canvas_hits_column_floor() {
        let layout = Layout::compute(40, 20, 3);
        assert_eq!(layout.column_width, MIN_COLUMN_WIDTH);
    }

    #[test]
    fn rows_stack_below_header() {
        let layout = Layout::compute(120, 36, 3);
        assert_eq!(layout.row_top(0), 9);
        assert_eq!(layout.row_top(2), 17);
        assert_eq!(layout.row_text_y(2), 18);
        assert_eq!(layout.pop_anchor(2), (40.0, 18.0));
        assert_eq!(layout.slide_lane(), 9.0);
    }

    #[test]
    fn row_capacity_stops_above_entry_box() {
        let layout = Layout::compute(120, 36, 3);
        assert_eq!(layout.row_capacity(), 5);
        let (_, entry_y, _, _) = layout.entry_box();
        assert!(layout.row_top(4) + ROW_HEIGHT as i32 <= entry_y);
        assert!(layout.row_top(5) + ROW_HEIGHT as i32 > entry_y);
        assert_eq!(Layout::compute(120, 10, 3).row_capacity(), 0);
    }

    #[test]
    fn shower_span_stays_inside_canvas() {
        assert_eq!(Layout::compute(120, 36, 3).shower_span(), (7, 112));
        assert_eq!(Layout::compute(8, 36, 3).shower_span(), (0, 7));
    }
}

//! Page-number bar model.
//!
//! Shows a window of pages around the current one plus a margin at both
//! ends, with breaks in between: `1 … 4 5 [6] 7 8 … 20`.

pub const PAGE_RANGE_DISPLAYED: u32 = 5;
pub const MARGIN_PAGES_DISPLAYED: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// 0-based page index.
    Page(u32),
    Break,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page_count: u32,
    /// 0-based.
    pub current: u32,
}

impl Pagination {
    /// `None` when there is nothing to paginate (zero or one page).
    pub fn new(page_count: u32, current: u32) -> Option<Self> {
        if page_count <= 1 {
            return None;
        }
        Some(Self {
            page_count,
            current: current.min(page_count - 1),
        })
    }

    pub fn previous(&self) -> Option<u32> {
        self.current.checked_sub(1)
    }

    pub fn next(&self) -> Option<u32> {
        let next = self.current + 1;
        (next < self.page_count).then_some(next)
    }

    pub fn items(&self) -> Vec<PageItem> {
        self.items_with(PAGE_RANGE_DISPLAYED, MARGIN_PAGES_DISPLAYED)
    }

    pub fn items_with(&self, range: u32, margin: u32) -> Vec<PageItem> {
        let count = self.page_count;
        let range = range.max(1);
        if count <= range {
            return (0..count).map(PageItem::Page).collect();
        }

        let left_side = range / 2;
        let right_side = range - left_side - 1;
        let (left_side, right_side) = if self.current > count - right_side - 1 {
            let right = count - self.current - 1;
            (range - right - 1, right)
        } else if self.current < left_side {
            (self.current, range - self.current - 1)
        } else {
            (left_side, right_side)
        };

        let mut items = Vec::new();
        for index in 0..count {
            let in_margin = index < margin || index >= count.saturating_sub(margin);
            let in_window = index + left_side >= self.current && index <= self.current + right_side;
            if in_margin || in_window {
                items.push(PageItem::Page(index));
            } else if items.last() != Some(&PageItem::Break) {
                items.push(PageItem::Break);
            }
        }
        items
    }
}

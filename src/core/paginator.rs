//! Fixed-size windows over the filtered rows, revealed on demand.

pub struct Paginator<'a, T> {
    rows: &'a [T],
    page_size: usize,
    offset: usize,
}

impl<'a, T> Paginator<'a, T> {
    pub fn new(rows: &'a [T], page_size: usize) -> Self {
        Self {
            rows,
            page_size,
            offset: 0,
        }
    }

    /// The next window of up to `page_size` rows. The final window may
    /// be shorter; after the last row, None.
    pub fn next_window(&mut self) -> Option<&'a [T]> {
        if self.page_size == 0 || self.offset >= self.rows.len() {
            return None;
        }
        let end = (self.offset + self.page_size).min(self.rows.len());
        let window = &self.rows[self.offset..end];
        self.offset = end;
        Some(window)
    }

    pub fn has_more(&self) -> bool {
        self.page_size > 0 && self.offset < self.rows.len()
    }
}

use serde::Deserialize;

/// Rows delivered per click-to-load request
pub const ROWS_PER_PAGE: u64 = 2;

/// Query of `GET /click_to_load`
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: u64,
}

/// A page of row identifiers and the page that follows it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowPage {
    pub rows: Vec<u64>,
    pub next_page: u64,
}

impl RowPage {
    /// Page 0: rows 1 and 2
    pub fn first() -> Self {
        Self {
            rows: (1..=ROWS_PER_PAGE).collect(),
            next_page: 1,
        }
    }
}

impl PageQuery {
    /// Rows `2p+1`, `2p+2` and next page `p+1`.
    ///
    /// `None` when any of them does not fit in a `u64`.
    pub fn resolve(&self) -> Option<RowPage> {
        let first = self.page.checked_mul(ROWS_PER_PAGE)?.checked_add(1)?;
        let rows = (0..ROWS_PER_PAGE)
            .map(|i| first.checked_add(i))
            .collect::<Option<Vec<u64>>>()?;
        let next_page = self.page.checked_add(1)?;
        Some(RowPage { rows, next_page })
    }
}

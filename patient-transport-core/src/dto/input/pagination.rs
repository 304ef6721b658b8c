use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct Pagination {
    ///
    /// indexing starts at 0
    ///
    pub page_idx: Option<u32>,
    ///
    /// whole list is returned when missing
    ///
    pub page_size: Option<u32>,
}

/// An offset/limit window over a listing.
///
/// `skip` rows are passed over before the first returned row and at most
/// `limit` rows are returned. Values are passed through to the storage
/// backend without validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub skip: i64,
    pub limit: i64,
}

impl Page {
    pub fn new(skip: i64, limit: i64) -> Self {
        Self { skip, limit }
    }
}

impl Default for Page {
    /// The window used when a caller supplies no bounds: first 10 rows.
    fn default() -> Self {
        Self { skip: 0, limit: 10 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window() {
        let page = Page::default();

        assert_eq!(page.skip, 0);
        assert_eq!(page.limit, 10);
    }

    #[test]
    fn test_explicit_window() {
        let page = Page::new(5, 2);

        assert_eq!(page.skip, 5);
        assert_eq!(page.limit, 2);
    }
}

/// Page-number pagination request.
///
/// `page` is 1-based. `limit` falls back to [`PageRequest::DEFAULT_LIMIT`]
/// and is clamped to `1..=MAX_LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    pub const DEFAULT_LIMIT: u32 = 6;
    pub const MAX_LIMIT: u32 = 100;

    pub fn new(page: Option<u32>, limit: Option<u32>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            limit: limit
                .unwrap_or(Self::DEFAULT_LIMIT)
                .clamp(1, Self::MAX_LIMIT),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Number of rows to skip before this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// One page of results plus the total number of matching rows.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub count: u64,
    pub request: PageRequest,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, count: u64, request: PageRequest) -> Self {
        Self {
            items,
            count,
            request,
        }
    }

    /// Slices an already loaded collection.
    pub fn from_vec(all: Vec<T>, request: PageRequest) -> Self {
        let count = all.len() as u64;
        let items = all
            .into_iter()
            .skip(request.offset() as usize)
            .take(request.limit() as usize)
            .collect();
        Self::new(items, count, request)
    }

    pub fn has_next(&self) -> bool {
        self.request.offset() + (self.items.len() as u64) < self.count
    }

    pub fn has_previous(&self) -> bool {
        self.request.page() > 1
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            count: self.count,
            request: self.request,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_first_page_with_default_limit() {
        let request = PageRequest::new(None, None);

        assert_eq!(request.page(), 1);
        assert_eq!(request.limit(), PageRequest::DEFAULT_LIMIT);
        assert_eq!(request.offset(), 0);
    }

    #[test]
    fn should_clamp_page_and_limit() {
        let request = PageRequest::new(Some(0), Some(1_000));

        assert_eq!(request.page(), 1);
        assert_eq!(request.limit(), PageRequest::MAX_LIMIT);

        let request = PageRequest::new(Some(3), Some(0));
        assert_eq!(request.limit(), 1);
        assert_eq!(request.offset(), 2);
    }

    #[test]
    fn should_slice_loaded_collection() {
        let page = Page::from_vec((1..=10).collect::<Vec<u32>>(), PageRequest::new(Some(2), Some(4)));

        assert_eq!(page.items, vec![5, 6, 7, 8]);
        assert_eq!(page.count, 10);
        assert!(page.has_next());
        assert!(page.has_previous());
    }

    #[test]
    fn should_report_no_next_on_last_page() {
        let page = Page::from_vec((1..=10).collect::<Vec<u32>>(), PageRequest::new(Some(3), Some(4)));

        assert_eq!(page.items, vec![9, 10]);
        assert!(!page.has_next());
    }

    #[test]
    fn should_return_empty_page_past_the_end() {
        let page = Page::from_vec(vec!["a"], PageRequest::new(Some(5), Some(6)));

        assert!(page.items.is_empty());
        assert_eq!(page.count, 1);
        assert!(!page.has_next());
    }
}

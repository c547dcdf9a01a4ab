/// Offset-based page request used by admin listings
///
/// # Example
/// ```
/// use nursery_core_db::repository::pagination::PageRequest;
///
/// let first = PageRequest::for_page(25, 1);
/// assert_eq!(first.offset, 0);
/// assert_eq!(first.next().offset, 25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Maximum number of items to return
    pub limit: usize,
    /// Number of items to skip
    pub offset: usize,
}

impl PageRequest {
    pub fn new(limit: usize, offset: usize) -> Self {
        Self { limit, offset }
    }

    /// Request for a 1-based page number; page 0 is treated as page 1.
    pub fn for_page(page_size: usize, page_number: usize) -> Self {
        Self {
            limit: page_size,
            offset: (page_number.max(1) - 1).saturating_mul(page_size),
        }
    }

    /// The request for the page following this one.
    pub fn next(&self) -> Self {
        Self {
            limit: self.limit,
            offset: self.offset.saturating_add(self.limit),
        }
    }

    pub fn page_number(&self) -> usize {
        page_number(self.limit, self.offset)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { limit: 100, offset: 0 }
    }
}

/// One page of results plus the total number of matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Total number of matching items across all pages
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: usize, request: PageRequest) -> Self {
        Self {
            items,
            total,
            limit: request.limit,
            offset: request.offset,
        }
    }

    pub fn has_more(&self) -> bool {
        self.offset.saturating_add(self.items.len()) < self.total
    }

    pub fn page_number(&self) -> usize {
        page_number(self.limit, self.offset)
    }

    pub fn total_pages(&self) -> usize {
        if self.limit == 0 {
            1
        } else {
            self.total.div_ceil(self.limit)
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            limit: self.limit,
            offset: self.offset,
        }
    }
}

fn page_number(limit: usize, offset: usize) -> usize {
    if limit == 0 {
        1
    } else {
        offset / limit + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_numbers() {
        assert_eq!(PageRequest::for_page(20, 0), PageRequest::new(20, 0));
        assert_eq!(PageRequest::for_page(20, 3).offset, 40);
        assert_eq!(PageRequest::for_page(20, 3).page_number(), 3);
        assert_eq!(PageRequest::new(0, 10).page_number(), 1);
    }

    #[test]
    fn test_huge_page_numbers_saturate() {
        let request = PageRequest::for_page(usize::MAX, usize::MAX);
        assert_eq!(request.offset, usize::MAX);
        assert_eq!(request.next().offset, usize::MAX);

        let page = Page::new(vec![1], 1, PageRequest::new(10, usize::MAX));
        assert!(!page.has_more());
    }

    #[test]
    fn test_page_metadata() {
        let page = Page::new(vec![1, 2, 3], 7, PageRequest::new(3, 3));

        assert!(page.has_more());
        assert_eq!(page.page_number(), 2);
        assert_eq!(page.total_pages(), 3);

        let last = Page::new(vec![7], 7, PageRequest::new(3, 6));
        assert!(!last.has_more());
    }

    #[test]
    fn test_page_map_keeps_metadata() {
        let page = Page::new(vec![1, 2], 2, PageRequest::default()).map(|n| n * 10);

        assert_eq!(page.items, vec![10, 20]);
        assert_eq!(page.total, 2);
        assert_eq!(page.limit, 100);
    }
}

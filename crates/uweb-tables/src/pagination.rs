//! Pagination math
//!
//! The visible page numbers form a window of at most five pages starting at
//! the previous page. Near the end of the range the window shifts two pages
//! to the left so it stays populated.

use crate::error::{Result, TableError};
use crate::request::RequestData;
use std::ops::Range;

/// Number of pages needed to show `total_items` rows, `page_size` per page
///
/// # Examples
///
/// ```rust
/// use uweb_tables::pagination::total_pages;
///
/// assert_eq!(total_pages(0, 10).unwrap(), 0);
/// assert_eq!(total_pages(21, 10).unwrap(), 3);
/// assert!(total_pages(21, 0).is_err());
/// ```
pub fn total_pages(total_items: u64, page_size: u32) -> Result<u32> {
	if page_size == 0 {
		return Err(TableError::InvalidPageSize(page_size));
	}
	let pages = total_items.div_ceil(u64::from(page_size));
	Ok(u32::try_from(pages).unwrap_or(u32::MAX))
}

/// Reads the requested page from the `page` parameter
///
/// Missing, unparsable and zero values all map to the first page.
pub fn current_page(request: &dyn RequestData) -> u32 {
	request
		.get_first("page")
		.and_then(|page| page.trim().parse::<u32>().ok())
		.filter(|page| *page > 0)
		.unwrap_or(1)
}

/// Pagination state derived from the current page and the page count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
	current_page: u32,
	previous_page: u32,
	next_page: u32,
	total_pages: u32,
}

impl Pagination {
	/// Creates the pagination state; page `0` is treated as page `1`
	pub fn new(current_page: u32, total_pages: u32) -> Self {
		let current_page = current_page.max(1);
		Self {
			current_page,
			previous_page: current_page.saturating_sub(1).max(1),
			next_page: current_page.saturating_add(1),
			total_pages,
		}
	}

	/// The page being shown
	pub fn current_page(&self) -> u32 {
		self.current_page
	}

	/// `max(1, current - 1)`
	pub fn previous_page(&self) -> u32 {
		self.previous_page
	}

	/// `current + 1`
	pub fn next_page(&self) -> u32 {
		self.next_page
	}

	/// Total number of pages
	pub fn total_pages(&self) -> u32 {
		self.total_pages
	}

	/// Whether a link to the previous page is shown
	pub fn has_previous(&self) -> bool {
		self.current_page > 1
	}

	/// Whether a link to the next page is shown
	pub fn has_next(&self) -> bool {
		self.current_page < self.total_pages
	}

	/// The page numbers shown in the navigation bar
	pub fn sliding_range(&self) -> Range<u32> {
		let nav_end = self
			.previous_page
			.saturating_add(4)
			.min(self.total_pages.saturating_add(1));
		let start = if self.total_pages.saturating_sub(self.current_page) < 2 {
			self.previous_page.saturating_sub(2).max(1)
		} else {
			self.previous_page
		};
		start..nav_end
	}
}

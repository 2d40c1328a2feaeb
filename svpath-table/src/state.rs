use log::debug;
use serde::Serialize;

use svpath_core::DashboardConfig;

use crate::columns::ColumnId;
use crate::errors::{Result, TableError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortState {
    pub column: ColumnId,
    pub descending: bool,
}

///
/// Sort and pagination state of one match table.
///
/// The page index is stored as requested; [`crate::view`] clamps it to the pages
/// that actually exist for the filtered rows. Every change of sort or page size,
/// and every filter change (see [`TableViewState::reset_page`]), returns to the
/// first page.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableViewState {
    sort: Option<SortState>,
    page_index: usize,
    page_size: usize,
    page_size_options: Vec<usize>,
}

impl TableViewState {
    ///
    /// Page sizes are positive; `page_size` must be one of `page_size_options`.
    ///
    pub fn new(page_size_options: Vec<usize>, page_size: usize) -> Result<Self> {
        if page_size_options.contains(&0) {
            return Err(TableError::InvalidPageSize {
                size: 0,
                options: page_size_options,
            });
        }
        if !page_size_options.contains(&page_size) {
            return Err(TableError::InvalidPageSize {
                size: page_size,
                options: page_size_options,
            });
        }
        Ok(TableViewState {
            sort: None,
            page_index: 0,
            page_size,
            page_size_options,
        })
    }

    pub fn sort(&self) -> Option<SortState> {
        self.sort
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_size_options(&self) -> &[usize] {
        &self.page_size_options
    }

    ///
    /// Cycle the sort on `column`: ascending, then descending, then unsorted.
    /// Picking a different column starts it at ascending.
    ///
    pub fn toggle_sort(&mut self, column: ColumnId) -> Result<()> {
        if !column.is_sortable() {
            return Err(TableError::UnsortableColumn(column));
        }

        self.sort = match self.sort {
            Some(SortState {
                column: current,
                descending: false,
            }) if current == column => Some(SortState {
                column,
                descending: true,
            }),
            Some(SortState {
                column: current,
                descending: true,
            }) if current == column => None,
            _ => Some(SortState {
                column,
                descending: false,
            }),
        };
        self.page_index = 0;

        debug!("Table sort is now {:?}", self.sort);
        Ok(())
    }

    /// Sort on `column` in the given direction, or clear the sort with `None`.
    pub fn set_sort(&mut self, sort: Option<SortState>) -> Result<()> {
        if let Some(s) = sort {
            if !s.column.is_sortable() {
                return Err(TableError::UnsortableColumn(s.column));
            }
        }
        self.sort = sort;
        self.page_index = 0;
        Ok(())
    }

    pub fn set_page_size(&mut self, size: usize) -> Result<()> {
        if !self.page_size_options.contains(&size) {
            return Err(TableError::InvalidPageSize {
                size,
                options: self.page_size_options.clone(),
            });
        }
        self.page_size = size;
        self.page_index = 0;
        Ok(())
    }

    pub fn reset_page(&mut self) {
        self.page_index = 0;
    }

    pub fn total_pages(&self, total_rows: usize) -> usize {
        total_rows.div_ceil(self.page_size)
    }

    pub fn can_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next(&self, total_pages: usize) -> bool {
        self.page_index + 1 < total_pages
    }

    pub fn first_page(&mut self) {
        self.page_index = 0;
    }

    pub fn previous_page(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    pub fn next_page(&mut self, total_pages: usize) {
        if self.can_next(total_pages) {
            self.page_index += 1;
        }
    }

    pub fn last_page(&mut self, total_pages: usize) {
        self.page_index = total_pages.saturating_sub(1);
    }

    ///
    /// Jump to a page numbered from 1, as shown to the user. Page 0 means the first
    /// page. A page past the end is ignored and `false` returned.
    ///
    pub fn go_to_page(&mut self, one_based: usize, total_pages: usize) -> bool {
        let index = one_based.saturating_sub(1);
        if index >= total_pages.max(1) {
            return false;
        }
        self.page_index = index;
        true
    }
}

impl TryFrom<&DashboardConfig> for TableViewState {
    type Error = TableError;

    fn try_from(config: &DashboardConfig) -> Result<Self> {
        TableViewState::new(config.page_size_options.clone(), config.default_page_size)
    }
}

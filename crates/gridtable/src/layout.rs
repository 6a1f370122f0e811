//! Grid dimensions derived from configuration and row count.

use serde::Serialize;

use crate::config::TableConfig;

/// Props for the virtualization grid and the container around it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GridProps {
    pub width: f64,
    /// Height of the table container, pagination footer included.
    pub container_height: f64,
    /// Height available to the grid itself.
    pub grid_height: f64,
    pub row_height: f64,
    pub row_count: usize,
    pub column_count: usize,
    pub fixed_row_count: usize,
    pub fixed_column_count: usize,
    pub enable_fixed_row_scroll: bool,
    pub enable_fixed_column_scroll: bool,
    pub show_pagination: bool,
}

impl GridProps {
    /// Compute grid props for `data_len` rows and `column_count` columns.
    ///
    /// Height is taken from `config.height` when set. Otherwise a paginated
    /// table reserves room for a full page (unless `fit_height_to_rows`), and
    /// an unpaginated one sizes to its rows. Header or frozen rows are added
    /// on top, the pagination footer is added to the container, and
    /// `max_height` caps the container.
    pub fn compute(config: &TableConfig, data_len: usize, column_count: usize) -> Self {
        let header_rows = config.header_rows();
        let rows_per_page = config
            .pagination
            .as_ref()
            .map(|p| p.rows_per_page)
            .filter(|rows| *rows > 0);

        let calculated_height = match (config.height, rows_per_page) {
            (Some(height), _) => height,
            (None, Some(rows)) if !config.fit_height_to_rows => {
                (rows + header_rows) as f64 * config.row_height
            }
            (None, _) => (data_len + header_rows) as f64 * config.row_height,
        };

        let pagination_height = config.pagination_height();
        let with_footer = calculated_height + pagination_height;
        let container_height = match config.max_height {
            Some(max) => with_footer.min(max),
            None => with_footer,
        };

        GridProps {
            width: config.width,
            container_height,
            grid_height: container_height - pagination_height,
            row_height: config.row_height,
            row_count: data_len + usize::from(config.include_headers),
            column_count,
            fixed_row_count: config.fixed_row_count,
            fixed_column_count: config.fixed_column_count,
            enable_fixed_row_scroll: config.fixed_row_count > 0,
            enable_fixed_column_scroll: config.fixed_column_count > 0,
            show_pagination: config.pagination.is_some(),
        }
    }
}

//! Paginación de listados
//!
//! Parámetros `page`/`per_page` y respuesta paginada común a todos
//! los listados de la API.

use serde::Serialize;

pub const DEFAULT_PER_PAGE: i64 = 20;
pub const MAX_PER_PAGE: i64 = 100;

/// Parámetros de paginación normalizados
#[derive(Debug, Clone, Copy)]
pub struct PageParams {
    pub page: i64,
    pub per_page: i64,
}

impl PageParams {
    pub fn new(page: Option<i64>, per_page: Option<i64>) -> Self {
        let page = page.unwrap_or(1).max(1);
        let per_page = per_page
            .unwrap_or(DEFAULT_PER_PAGE)
            .clamp(1, MAX_PER_PAGE);
        Self { page, per_page }
    }

    pub fn limit(&self) -> i64 {
        self.per_page
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.per_page
    }
}

/// Respuesta paginada para listados
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total: i64, params: PageParams) -> Self {
        let total_pages = if total == 0 {
            0
        } else {
            (total + params.per_page - 1) / params.per_page
        };
        Self {
            items,
            total,
            page: params.page,
            per_page: params.per_page,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_and_clamping() {
        let params = PageParams::new(None, None);
        assert_eq!(params.page, 1);
        assert_eq!(params.per_page, DEFAULT_PER_PAGE);

        let params = PageParams::new(Some(0), Some(10_000));
        assert_eq!(params.page, 1);
        assert_eq!(params.per_page, MAX_PER_PAGE);
    }

    #[test]
    fn test_offset() {
        let params = PageParams::new(Some(3), Some(25));
        assert_eq!(params.limit(), 25);
        assert_eq!(params.offset(), 50);
    }

    #[test]
    fn test_total_pages() {
        let params = PageParams::new(Some(1), Some(20));
        let page: Paginated<i32> = Paginated::new(vec![], 41, params);
        assert_eq!(page.total_pages, 3);

        let empty: Paginated<i32> = Paginated::new(vec![], 0, params);
        assert_eq!(empty.total_pages, 0);
    }
}

//! Page-based `LIMIT`/`OFFSET`.

use crate::error::{ExprError, ExprResult};
use crate::sql::Sql;
use serde::Deserialize;

/// Page size used when none is given.
pub const PAGE_SIZE_DEFAULT: i64 = 20;

/// Append `LIMIT size OFFSET page * size` to `query`.
///
/// `page` is zero-based. `size` defaults to [`PAGE_SIZE_DEFAULT`]. Both values
/// are bound as parameters.
///
/// ```ignore
/// use pgexpr::{paginate, sql};
///
/// let q = paginate(sql("SELECT * FROM users ORDER BY id"), 2, Some(10))?;
/// assert_eq!(q.to_sql(), "SELECT * FROM users ORDER BY id LIMIT $1 OFFSET $2");
/// # Ok::<(), pgexpr::ExprError>(())
/// ```
pub fn paginate(mut query: Sql, page: i64, size: Option<i64>) -> ExprResult<Sql> {
    let size = size.unwrap_or(PAGE_SIZE_DEFAULT);
    if page < 0 {
        return Err(ExprError::validation(format!(
            "page must be zero or positive, got {page}"
        )));
    }
    if size <= 0 {
        return Err(ExprError::validation(format!(
            "page size must be positive, got {size}"
        )));
    }
    let offset = page
        .checked_mul(size)
        .ok_or_else(|| ExprError::validation("page offset overflows i64"))?;

    query.limit_offset(size, offset);
    Ok(query)
}

/// Pagination request, typically deserialized from query-string or config input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Pagination {
    /// Zero-based page index.
    pub page: i64,
    pub size: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 0,
            size: PAGE_SIZE_DEFAULT,
        }
    }
}

impl Pagination {
    pub fn new(page: i64) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    pub fn with_size(mut self, size: i64) -> Self {
        self.size = size;
        self
    }

    /// Row offset of the first item on this page, if it fits in an `i64`.
    pub fn offset(&self) -> Option<i64> {
        self.page.checked_mul(self.size)
    }

    /// Apply to `query`. See [`paginate`].
    pub fn apply(&self, query: Sql) -> ExprResult<Sql> {
        paginate(query, self.page, Some(self.size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::sql;

    #[test]
    fn default_size() {
        let q = paginate(sql("SELECT 1"), 0, None).unwrap();
        assert_eq!(q.to_sql(), "SELECT 1 LIMIT $1 OFFSET $2");
        assert_eq!(format!("{:?}", q.params_ref()), "[20, 0]");
    }

    #[test]
    fn rejects_invalid_input() {
        assert!(paginate(sql("SELECT 1"), -1, None).unwrap_err().is_validation());
        assert!(paginate(sql("SELECT 1"), 0, Some(0)).unwrap_err().is_validation());
        assert!(
            paginate(sql("SELECT 1"), i64::MAX, Some(2))
                .unwrap_err()
                .is_validation()
        );
    }

    #[test]
    fn pagination_struct() {
        let p = Pagination::new(3).with_size(15);
        assert_eq!(p.offset(), Some(45));
        let q = p.apply(sql("SELECT * FROM t")).unwrap();
        assert_eq!(format!("{:?}", q.params_ref()), "[15, 45]");

        let p: Pagination = serde_json::from_str(r#"{"page": 2}"#).unwrap();
        assert_eq!(p, Pagination::new(2));
    }
}

//! Static field-complexity weights. Each nested field caps the complexity it
//! will accept from its children; past the cap it returns a sentinel score
//! that necessarily blows the schema-wide limit, so the query is denied
//! before any resolver runs.

use crate::pagination::DEFAULT_FIRST;

/// Schema-wide limit passed to `Schema::limit_complexity`.
pub const COMPLEXITY_LIMIT: usize = 100;

/// Sentinel score: always above `COMPLEXITY_LIMIT`.
pub const COMPLEXITY_POINT: usize = 999_999_999;

/// Message async-graphql attaches when `limit_complexity` trips.
pub const TOO_COMPLEX_MESSAGE: &str = "Query is too complex.";

/// Prefix used to recognize that error without depending on its exact
/// punctuation.
pub const TOO_COMPLEX_PREFIX: &str = "Query is too complex";

/// Error code surfaced to clients when a query is denied.
pub const COMPLEXITY_LIMIT_EXCEEDED: &str = "COMPLEXITY_LIMIT_EXCEEDED";

/// `Product.user`.
pub fn nested_user(child_complexity: usize) -> usize {
    if child_complexity > 4 {
        return COMPLEXITY_POINT;
    }
    child_complexity + 1
}

/// `ProductEdge.node`.
pub fn edge_node(child_complexity: usize) -> usize {
    if child_complexity > 5 {
        return COMPLEXITY_POINT;
    }
    child_complexity + 1
}

/// `User.products(first)`: children are repeated per requested row, so the
/// page-size hint multiplies before the constant is added. Saturating math:
/// `first` is caller-supplied, and a wrapped score would slip under the limit.
pub fn products_page(child_complexity: usize, first: Option<i64>) -> usize {
    if child_complexity > 12 {
        return COMPLEXITY_POINT;
    }
    let first = match first {
        Some(f) if f > 0 => f as usize,
        _ => DEFAULT_FIRST as usize,
    };
    child_complexity.saturating_mul(first).saturating_add(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_user_adds_one_below_cap() {
        assert_eq!(nested_user(0), 1);
        assert_eq!(nested_user(4), 5);
    }

    #[test]
    fn nested_user_rejects_past_cap() {
        assert_eq!(nested_user(5), COMPLEXITY_POINT);
    }

    #[test]
    fn edge_node_cap_is_five() {
        assert_eq!(edge_node(5), 6);
        assert_eq!(edge_node(6), COMPLEXITY_POINT);
    }

    #[test]
    fn products_page_multiplies_by_first() {
        assert_eq!(products_page(3, Some(10)), 31);
        assert_eq!(products_page(3, None), 16); // default first = 5
    }

    #[test]
    fn products_page_rejects_past_cap() {
        assert_eq!(products_page(13, Some(1)), COMPLEXITY_POINT);
    }

    #[test]
    fn products_page_saturates_on_huge_first() {
        // Must never wrap back under the limit, in any build profile.
        assert!(products_page(3, Some(i64::MAX)) > COMPLEXITY_LIMIT);
        assert!(products_page(3, Some(6_148_914_691_236_517_206)) > COMPLEXITY_LIMIT);
        assert!(products_page(1, Some(i64::MAX - 1)) > COMPLEXITY_LIMIT);
    }

    #[test]
    fn sentinel_exceeds_limit() {
        assert!(COMPLEXITY_POINT > COMPLEXITY_LIMIT);
    }

    #[test]
    fn prefix_matches_the_pinned_message() {
        assert!(TOO_COMPLEX_MESSAGE.starts_with(TOO_COMPLEX_PREFIX));
    }
}

use crate::error::{Error, Result};
use crate::types::{PageResponse, User};

pub const DEFAULT_PER_PAGE: usize = 6;

/// Slices one page out of the full set. Pages are 1-based; the window is
/// `[(page-1)*per_page, (page-1)*per_page + per_page)` clamped to the set.
pub fn paginate(users: &[User], page: i64, per_page: usize) -> Result<PageResponse> {
    if per_page == 0 {
        return Err(Error::Validation("perpage must be positive".to_string()));
    }
    if page <= 0 {
        return Err(Error::PageNotFound(page));
    }
    let begin = (page as usize - 1).saturating_mul(per_page);
    if begin >= users.len() {
        return Err(Error::PageNotFound(page));
    }
    let end = (begin + per_page).min(users.len());
    Ok(PageResponse {
        total_pages: users.len().div_ceil(per_page),
        data: users[begin..end].to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users(n: u64) -> Vec<User> {
        (1..=n)
            .map(|id| User {
                id,
                email: format!("user{}@example.com", id),
                first_name: format!("First{}", id),
                last_name: format!("Last{}", id),
                avatar: format!("https://example.com/img/{}.jpg", id),
            })
            .collect()
    }

    #[test]
    fn ten_users_split_into_six_and_four() {
        let all = users(10);

        let first = paginate(&all, 1, 6).unwrap();
        assert_eq!(first.total_pages, 2);
        assert_eq!(first.data.len(), 6);
        assert_eq!(first.data[0].id, 1);

        let second = paginate(&all, 2, 6).unwrap();
        assert_eq!(second.total_pages, 2);
        assert_eq!(second.data.len(), 4);
        assert_eq!(second.data[0].id, 7);
    }

    #[test]
    fn page_past_the_end_is_not_found() {
        let err = paginate(&users(10), 3, 6).unwrap_err();
        assert!(matches!(err, Error::PageNotFound(3)));
    }

    #[test]
    fn zero_and_negative_pages_are_not_found() {
        let all = users(3);
        assert!(matches!(
            paginate(&all, 0, 6).unwrap_err(),
            Error::PageNotFound(0)
        ));
        assert!(matches!(
            paginate(&all, -2, 6).unwrap_err(),
            Error::PageNotFound(-2)
        ));
    }

    #[test]
    fn exact_multiple_has_no_partial_page() {
        let all = users(12);
        let last = paginate(&all, 2, 6).unwrap();
        assert_eq!(last.total_pages, 2);
        assert_eq!(last.data.len(), 6);
        assert!(paginate(&all, 3, 6).is_err());
    }

    #[test]
    fn empty_set_has_no_first_page() {
        assert!(matches!(
            paginate(&[], 1, 6).unwrap_err(),
            Error::PageNotFound(1)
        ));
    }

    #[test]
    fn zero_per_page_is_rejected() {
        assert!(matches!(
            paginate(&users(3), 1, 0).unwrap_err(),
            Error::Validation(_)
        ));
    }

    #[test]
    fn huge_page_numbers_do_not_overflow() {
        assert!(paginate(&users(3), i64::MAX, 6).is_err());
    }
}

//! Pagination engine — drains cursor-paginated collections.
//!
//! Collection endpoints return one page of items plus an optional
//! continuation cursor. [`fetch_all`] drives repeated fetches until the
//! cursor is absent, concatenating items in server order. A server that
//! echoes back an unchanged cursor would otherwise loop forever; the engine
//! detects that and fails with [`CloudError::Pagination`].

use crate::error::{CloudError, Result};
use std::future::Future;

/// One page of a paginated collection.
pub trait Page {
    type Item;

    /// Split the page into its items and the continuation cursor.
    /// `None` means the server signalled the last page.
    fn into_parts(self) -> (Vec<Self::Item>, Option<String>);
}

/// Fetch every page of a collection and return the assembled items.
///
/// `fetch` is invoked with `None` for the first page, then with each
/// server-provided cursor. Any page error aborts the traversal; no partial
/// result is returned. Each page fetch is one suspend point, so
/// cancellation takes effect at page granularity.
pub(crate) async fn fetch_all<P, F, Fut>(mut fetch: F) -> Result<Vec<P::Item>>
where
    P: Page,
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<P>>,
{
    let mut items = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        let page = fetch(cursor.clone()).await?;
        let (mut batch, next) = page.into_parts();
        items.append(&mut batch);

        match next {
            None => return Ok(items),
            Some(next) => {
                if cursor.as_deref() == Some(next.as_str()) {
                    return Err(CloudError::Pagination(format!(
                        "server repeated cursor '{}' without advancing",
                        next
                    )));
                }
                cursor = Some(next);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    struct TestPage {
        items: Vec<i32>,
        next: Option<String>,
    }

    impl Page for TestPage {
        type Item = i32;

        fn into_parts(self) -> (Vec<i32>, Option<String>) {
            (self.items, self.next)
        }
    }

    fn page(items: &[i32], next: Option<&str>) -> TestPage {
        TestPage {
            items: items.to_vec(),
            next: next.map(str::to_string),
        }
    }

    async fn drain(pages: Vec<TestPage>) -> (Result<Vec<i32>>, usize) {
        let queue = RefCell::new(pages.into_iter().collect::<VecDeque<_>>());
        let calls = RefCell::new(0usize);
        let result = fetch_all(|_cursor| {
            *calls.borrow_mut() += 1;
            let next = queue.borrow_mut().pop_front();
            async move {
                Ok(next.expect("fetch called past the final page"))
            }
        })
        .await;
        let count = *calls.borrow();
        (result, count)
    }

    #[tokio::test]
    async fn concatenates_pages_in_order() {
        let (result, calls) = drain(vec![
            page(&[1, 2], Some("c1")),
            page(&[3, 4], Some("c2")),
            page(&[5], None),
        ])
        .await;
        assert_eq!(result.unwrap(), vec![1, 2, 3, 4, 5]);
        assert_eq!(calls, 3);
    }

    #[tokio::test]
    async fn empty_first_page_is_empty_result() {
        let (result, calls) = drain(vec![page(&[], None)]).await;
        assert_eq!(result.unwrap(), Vec::<i32>::new());
        assert_eq!(calls, 1);
    }

    #[tokio::test]
    async fn repeated_cursor_fails_instead_of_looping() {
        let (result, calls) = drain(vec![
            page(&[1], Some("stuck")),
            page(&[2], Some("stuck")),
        ])
        .await;
        let err = result.unwrap_err();
        assert!(matches!(err, CloudError::Pagination(_)));
        assert_eq!(calls, 2);
    }

    #[tokio::test]
    async fn page_error_aborts_without_partial_result() {
        let pages: Vec<Result<TestPage>> = vec![
            Ok(page(&[1, 2], Some("c1"))),
            Err(CloudError::Api {
                status: 503,
                body: "unavailable".into(),
            }),
        ];
        let queue = RefCell::new(pages.into_iter().collect::<VecDeque<_>>());
        let result = fetch_all(|_cursor| {
            let next = queue.borrow_mut().pop_front();
            async move { next.expect("fetch called past the final page") }
        })
        .await;
        assert_eq!(result.unwrap_err().status(), Some(503));
    }
}

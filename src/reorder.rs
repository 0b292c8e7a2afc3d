//! Page reordering for right-to-left two-page view
//!
//! A manga PDF shown in two-page view puts each leaf on the wrong side of
//! its spread: even indices (display-right) are paired with the odd page
//! that belongs to the *previous* spread. The fix moves each odd-indexed
//! page behind the following even-indexed page.

/// Reorder a page sequence for right-to-left spread viewing.
///
/// Even indices are emitted immediately. Odd indices pass through a
/// one-slot holding area: the held page is emitted just before the next
/// odd page replaces it, which re-anchors it after the following even
/// page. A page still held when the input runs out is dropped, so any
/// input of two or more pages comes back one page shorter.
///
/// ```
/// use pdf_spreads::reorder::reorder;
///
/// assert_eq!(reorder(vec!['a', 'b', 'c', 'd']), vec!['a', 'c', 'b']);
/// ```
pub fn reorder<T>(pages: Vec<T>) -> Vec<T> {
    let mut output = Vec::with_capacity(pages.len());
    let mut pending: Option<T> = None;

    for (i, page) in pages.into_iter().enumerate() {
        if i % 2 == 0 {
            output.push(page);
        } else if let Some(held) = pending.take() {
            output.push(held);
            pending = Some(page);
        } else {
            // Only index 1 lands here; later odd indices always find a held page.
            pending = Some(page);
        }
    }

    output
}

/// Number of pages `reorder` will return for an `n`-page input.
pub fn reordered_len(n: usize) -> usize {
    if n < 2 {
        n
    } else {
        n - 1
    }
}

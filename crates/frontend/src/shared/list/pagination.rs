/// Pages shown on each side of the current one
pub const WINDOW: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Previous { target: u32, enabled: bool },
    Page { number: u32, current: bool },
    Gap,
    Next { target: u32, enabled: bool },
}

/// Windowed page links: first, last, and `page ± WINDOW`, with one gap on
/// each side that skips pages. Empty when there are no pages.
pub fn page_links(page: u32, total_pages: u32) -> Vec<PageLink> {
    if total_pages == 0 {
        return Vec::new();
    }
    let page = page.clamp(1, total_pages);

    let low = page.saturating_sub(WINDOW).max(1);
    let high = (page + WINDOW).min(total_pages);
    let mut numbers: Vec<u32> = std::iter::once(1)
        .chain(low..=high)
        .chain(std::iter::once(total_pages))
        .collect();
    numbers.sort_unstable();
    numbers.dedup();

    let mut links = Vec::with_capacity(numbers.len() + 4);
    links.push(PageLink::Previous {
        target: page.saturating_sub(1).max(1),
        enabled: page > 1,
    });

    let mut previous: Option<u32> = None;
    for number in numbers {
        if previous.is_some_and(|p| number - p > 1) {
            links.push(PageLink::Gap);
        }
        links.push(PageLink::Page {
            number,
            current: number == page,
        });
        previous = Some(number);
    }

    links.push(PageLink::Next {
        target: (page + 1).min(total_pages),
        enabled: page < total_pages,
    });
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(links: &[PageLink]) -> Vec<Option<u32>> {
        links
            .iter()
            .filter_map(|link| match link {
                PageLink::Page { number, .. } => Some(Some(*number)),
                PageLink::Gap => Some(None),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_no_pages_no_links() {
        assert!(page_links(1, 0).is_empty());
    }

    #[test]
    fn test_single_page_disables_both_ends() {
        let links = page_links(1, 1);
        assert_eq!(
            links,
            vec![
                PageLink::Previous { target: 1, enabled: false },
                PageLink::Page { number: 1, current: true },
                PageLink::Next { target: 1, enabled: false },
            ]
        );
    }

    #[test]
    fn test_middle_page_has_gap_on_both_sides() {
        let links = page_links(10, 20);
        assert_eq!(
            numbers(&links),
            vec![
                Some(1),
                None,
                Some(8),
                Some(9),
                Some(10),
                Some(11),
                Some(12),
                None,
                Some(20)
            ]
        );
        assert_eq!(links[0], PageLink::Previous { target: 9, enabled: true });
        assert_eq!(
            links[links.len() - 1],
            PageLink::Next { target: 11, enabled: true }
        );
    }

    #[test]
    fn test_gap_only_where_pages_are_skipped() {
        assert_eq!(
            numbers(&page_links(3, 10)),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5), None, Some(10)]
        );
        assert_eq!(
            numbers(&page_links(4, 7)),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5), Some(6), Some(7)]
        );
    }

    #[test]
    fn test_window_holds_for_every_inner_page() {
        for total in 6..30u32 {
            for page in 2..total {
                let links = page_links(page, total);
                let shown = numbers(&links);
                let pages: Vec<u32> = shown.iter().flatten().copied().collect();

                assert_eq!(pages.first(), Some(&1));
                assert_eq!(pages.last(), Some(&total));
                for p in page.saturating_sub(WINDOW).max(1)..=(page + WINDOW).min(total) {
                    assert!(pages.contains(&p), "page {} missing for {}/{}", p, page, total);
                }
                assert!(shown.iter().filter(|n| n.is_none()).count() <= 2);
                assert_eq!(
                    links
                        .iter()
                        .filter(|l| matches!(l, PageLink::Page { current: true, .. }))
                        .count(),
                    1
                );
            }
        }
    }

    #[test]
    fn test_ends_are_disabled_at_boundaries() {
        let first = page_links(1, 5);
        assert_eq!(first[0], PageLink::Previous { target: 1, enabled: false });
        let last = page_links(5, 5);
        assert_eq!(
            last[last.len() - 1],
            PageLink::Next { target: 5, enabled: false }
        );
    }
}

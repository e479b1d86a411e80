use taskboard_client::pages::{ItemsPerPage, PageMarker, Pagination, page_markers};

#[test]
fn twenty_items_in_pages_of_six() {
    let items: Vec<u32> = (0..20).collect();
    let mut pagination = Pagination::new(ItemsPerPage::Six);

    assert_eq!(pagination.total_pages(items.len()), 4);
    assert_eq!(pagination.page_items(&items), &[0, 1, 2, 3, 4, 5]);

    pagination.go_to(4, items.len());
    assert_eq!(pagination.page_items(&items), &[18, 19]);

    pagination.set_items_per_page(ItemsPerPage::TwentyFour);
    assert_eq!(pagination.current_page(), 1);
    assert!(!pagination.shows_controls(items.len()));
}

#[test]
fn ten_pages_around_page_five() {
    use PageMarker::{Ellipsis, Page};
    assert_eq!(
        page_markers(5, 10),
        vec![
            Page(1),
            Ellipsis,
            Page(4),
            Page(5),
            Page(6),
            Ellipsis,
            Page(10)
        ]
    );
}

#[test]
fn every_gap_gets_one_marker() {
    for total in 1..=12 {
        for current in 1..=total {
            let markers = page_markers(current, total);
            let pages: Vec<usize> = markers
                .iter()
                .filter_map(|m| match m {
                    PageMarker::Page(n) => Some(*n),
                    PageMarker::Ellipsis => None,
                })
                .collect();

            assert_eq!(pages.first(), Some(&1));
            assert_eq!(pages.last(), Some(&total));
            assert!(pages.contains(&current));
            assert!(pages.windows(2).all(|w| w[0] < w[1]));
            assert!(
                markers
                    .windows(2)
                    .all(|w| !(w[0] == PageMarker::Ellipsis && w[1] == PageMarker::Ellipsis)),
                "adjacent ellipses for {current}/{total}"
            );
        }
    }
}

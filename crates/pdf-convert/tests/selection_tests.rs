use pdf_convert::{PagePreview, PageSelection};

fn previews(count: usize) -> Vec<PagePreview> {
    (0..count)
        .map(|i| PagePreview::new(i, 10, 10, vec![0; 10 * 10 * 4]))
        .collect()
}

#[test]
fn test_pages_start_selected() {
    let selection = PageSelection::new(previews(4));
    assert_eq!(selection.selected_indices(), vec![0, 1, 2, 3]);
}

#[test]
fn test_toggle_flips_exactly_one_page() {
    let mut selection = PageSelection::new(previews(4));
    selection.toggle(2);
    assert_eq!(selection.selected_indices(), vec![0, 1, 3]);
}

#[test]
fn test_toggle_is_self_inverse() {
    let mut selection = PageSelection::new(previews(5));
    let before = selection.clone();
    for i in 0..5 {
        selection.toggle(i);
        selection.toggle(i);
    }
    assert_eq!(selection, before);
}

#[test]
fn test_toggle_absent_index_is_a_noop() {
    let mut selection = PageSelection::new(previews(3));
    let before = selection.clone();
    selection.toggle(99);
    assert_eq!(selection, before);
}

#[test]
fn test_select_all_and_deselect_all() {
    let mut selection = PageSelection::new(previews(3));
    selection.deselect_all();
    assert!(selection.selected_indices().is_empty());
    selection.select_all();
    assert_eq!(selection.selected_indices(), vec![0, 1, 2]);
}

#[test]
fn test_selected_indices_are_document_order_not_click_order() {
    let mut selection = PageSelection::new(previews(10));
    selection.deselect_all();
    // Click order 9, 0, 4 - output must still be ascending.
    selection.toggle(9);
    selection.toggle(0);
    selection.toggle(4);
    assert_eq!(selection.selected_indices(), vec![0, 4, 9]);
}

#[test]
fn test_empty_selection_model() {
    let mut selection = PageSelection::default();
    assert!(selection.is_empty());
    selection.toggle(0);
    selection.select_all();
    assert!(selection.selected_indices().is_empty());
}

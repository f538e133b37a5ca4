use super::*;

#[test]
fn current_page_button_is_highlighted() {
    assert_eq!(page_button_class(2, 2), "page-btn page-btn--current");
    assert_eq!(page_button_class(1, 2), "page-btn");
}

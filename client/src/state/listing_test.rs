use super::*;

// =============================================================
// Helpers
// =============================================================

fn user(id: u32) -> User {
    User {
        id,
        email: format!("user{id}@reqres.in"),
        first_name: format!("First{id}"),
        last_name: format!("Last{id}"),
        avatar: format!("https://reqres.in/img/faces/{id}-image.jpg"),
    }
}

fn page_of(ids: std::ops::RangeInclusive<u32>, total_pages: u32) -> UserPage {
    let data: Vec<User> = ids.map(user).collect();
    UserPage { page: 0, per_page: 0, total: 0, total_pages, data }
}

fn size(value: u32) -> PageSize {
    PageSize::new(value).unwrap()
}

/// State after a successful first load of page 1 at 6 per page, 2 pages total.
fn loaded_first_page() -> ListingState {
    let mut state = ListingState::default();
    let request = state.reload();
    assert_eq!(state.complete_load(request, Ok(page_of(1..=6, 2))), LoadOutcome::Applied);
    state
}

fn not_found() -> ApiError {
    ApiError::Status { status: 404, message: None }
}

// =============================================================
// PageSize
// =============================================================

#[test]
fn page_size_defaults_to_six() {
    assert_eq!(PageSize::default().get(), 6);
}

#[test]
fn page_size_accepts_only_offered_values() {
    for value in PAGE_SIZE_OPTIONS {
        assert_eq!(PageSize::new(value).map(PageSize::get), Some(value));
    }
    assert_eq!(PageSize::new(0), None);
    assert_eq!(PageSize::new(5), None);
    assert_eq!(PageSize::new(100), None);
}

#[test]
fn page_size_parses_select_values() {
    assert_eq!(PageSize::parse(" 10 "), Some(size(10)));
    assert_eq!(PageSize::parse("ten"), None);
    assert_eq!(PageSize::parse("7"), None);
}

#[test]
fn page_size_options_match_selector() {
    let values: Vec<u32> = PageSize::options().map(PageSize::get).collect();
    assert_eq!(values, vec![2, 4, 6, 8, 10, 12]);
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn default_state_is_idle_page_one() {
    let state = ListingState::default();
    assert_eq!(state.phase(), &ListingPhase::Idle);
    assert_eq!(state.pagination(), Pagination { current_page: 1, page_size: size(6), total_pages: 0 });
    assert!(state.users().is_empty());
    assert!(state.is_initial_load());
}

#[test]
fn reload_requests_current_page_and_size() {
    let mut state = ListingState::default();
    let request = state.reload();
    assert_eq!(request.page, 1);
    assert_eq!(request.page_size, size(6));
    assert!(state.is_loading());
}

// =============================================================
// load_page
// =============================================================

#[test]
fn successful_load_replaces_list_and_totals() {
    let state = loaded_first_page();
    assert_eq!(state.users().len(), 6);
    assert_eq!(state.pagination().total_pages, 2);
    assert_eq!(state.phase(), &ListingPhase::Loaded);
    assert!(!state.is_initial_load());
}

#[test]
fn failed_load_keeps_previous_list_and_shows_banner() {
    let mut state = loaded_first_page();
    let before = state.users().to_vec();
    let request = state.go_to_page(2).unwrap();
    let outcome = state.complete_load(request, Err(ApiError::Network("offline".to_owned())));
    assert_eq!(outcome, LoadOutcome::Failed(LOAD_FAILED_MESSAGE.to_owned()));
    assert_eq!(state.users(), before.as_slice());
    assert_eq!(state.pagination().current_page, 1);
    assert_eq!(state.banner_error(), Some(LOAD_FAILED_MESSAGE));
    assert_eq!(state.initial_failure(), None);
}

#[test]
fn failed_initial_load_is_full_page_error() {
    let mut state = ListingState::default();
    let request = state.reload();
    state.complete_load(request, Err(not_found()));
    assert_eq!(state.initial_failure(), Some(LOAD_FAILED_MESSAGE));
    assert_eq!(state.banner_error(), None);
}

#[test]
fn retry_after_initial_failure_recovers() {
    let mut state = ListingState::default();
    let first = state.reload();
    state.complete_load(first, Err(not_found()));
    let retry = state.reload();
    assert_eq!(state.complete_load(retry, Ok(page_of(1..=6, 2))), LoadOutcome::Applied);
    assert_eq!(state.initial_failure(), None);
    assert_eq!(state.users().len(), 6);
}

#[test]
fn identical_loads_yield_identical_state() {
    let mut state = loaded_first_page();
    let snapshot = (state.users().to_vec(), state.pagination());
    let request = state.reload();
    state.complete_load(request, Ok(page_of(1..=6, 2)));
    assert_eq!((state.users().to_vec(), state.pagination()), snapshot);
}

#[test]
fn load_page_clamps_page_zero_to_one() {
    let mut state = ListingState::default();
    assert_eq!(state.load_page(0, size(4)).page, 1);
}

// =============================================================
// Sequencing
// =============================================================

#[test]
fn each_load_gets_a_higher_sequence_number() {
    let mut state = ListingState::default();
    let a = state.reload();
    let b = state.reload();
    assert!(b.seq > a.seq);
    assert_eq!(state.phase(), &ListingPhase::Loading { seq: b.seq });
}

#[test]
fn stale_response_is_discarded_when_it_arrives_last() {
    let mut state = loaded_first_page();
    let to_two = state.go_to_page(2).unwrap();
    let to_one = state.go_to_page(1).unwrap();

    assert_eq!(state.complete_load(to_one, Ok(page_of(1..=6, 2))), LoadOutcome::Applied);
    assert_eq!(state.complete_load(to_two, Ok(page_of(7..=12, 2))), LoadOutcome::Stale);

    assert_eq!(state.pagination().current_page, 1);
    assert_eq!(state.users().first().map(|u| u.id), Some(1));
}

#[test]
fn stale_response_is_discarded_when_it_arrives_first() {
    let mut state = loaded_first_page();
    let small = state.change_page_size(size(2));
    let large = state.change_page_size(size(12));

    assert_eq!(state.complete_load(small, Ok(page_of(1..=2, 6))), LoadOutcome::Stale);
    assert!(state.is_loading());
    assert_eq!(state.complete_load(large, Ok(page_of(1..=12, 1))), LoadOutcome::Applied);

    assert_eq!(state.pagination(), Pagination { current_page: 1, page_size: size(12), total_pages: 1 });
}

#[test]
fn stale_failure_does_not_clobber_newer_success() {
    let mut state = loaded_first_page();
    let old = state.go_to_page(2).unwrap();
    let new = state.go_to_page(1).unwrap();
    state.complete_load(new, Ok(page_of(1..=6, 2)));
    assert_eq!(state.complete_load(old, Err(not_found())), LoadOutcome::Stale);
    assert_eq!(state.phase(), &ListingPhase::Loaded);
}

// =============================================================
// go_to_page
// =============================================================

#[test]
fn go_to_page_out_of_range_is_noop() {
    let mut state = loaded_first_page();
    let before = state.clone();
    assert_eq!(state.go_to_page(0), None);
    assert_eq!(state.go_to_page(3), None);
    assert_eq!(state, before);
}

#[test]
fn go_to_page_before_any_load_is_noop() {
    let mut state = ListingState::default();
    assert_eq!(state.go_to_page(1), None);
    assert_eq!(state.phase(), &ListingPhase::Idle);
}

#[test]
fn current_page_changes_only_on_success() {
    let mut state = loaded_first_page();
    let request = state.go_to_page(2).unwrap();
    assert_eq!(state.pagination().current_page, 1);
    state.complete_load(request, Ok(page_of(7..=12, 2)));
    assert_eq!(state.pagination().current_page, 2);
}

#[test]
fn next_and_previous_scenario() {
    let mut state = loaded_first_page();
    assert!(state.pagination().has_next());
    assert!(!state.pagination().has_previous());
    assert_eq!(state.previous_page(), None);

    let request = state.next_page().unwrap();
    assert_eq!((request.page, request.page_size.get()), (2, 6));
    state.complete_load(request, Ok(page_of(7..=12, 2)));

    assert_eq!(state.pagination().current_page, 2);
    assert!(!state.pagination().has_next());
    assert!(state.pagination().has_previous());
    assert_eq!(state.next_page(), None);
}

#[test]
fn page_numbers_cover_all_pages() {
    let state = loaded_first_page();
    assert_eq!(state.pagination().page_numbers().collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(Pagination::default().page_numbers().count(), 0);
}

// =============================================================
// change_page_size
// =============================================================

#[test]
fn change_page_size_from_page_two_resets_to_first_page() {
    let mut state = loaded_first_page();
    let to_two = state.go_to_page(2).unwrap();
    state.complete_load(to_two, Ok(page_of(7..=12, 2)));

    let request = state.change_page_size(size(10));
    assert_eq!((request.page, request.page_size.get()), (1, 10));
    assert_eq!(state.pagination().current_page, 2);
    assert_eq!(state.pagination().page_size, size(6));

    state.complete_load(request, Ok(page_of(1..=10, 2)));
    assert_eq!(state.pagination(), Pagination { current_page: 1, page_size: size(10), total_pages: 2 });
}

#[test]
fn failed_page_size_change_keeps_old_size_and_page() {
    let mut state = loaded_first_page();
    let request = state.change_page_size(size(12));
    state.complete_load(request, Err(not_found()));
    assert_eq!(state.pagination().page_size, size(6));
    assert_eq!(state.pagination().current_page, 1);
}

// =============================================================
// Delete
// =============================================================

#[test]
fn delete_success_removes_exactly_one_record() {
    let mut state = loaded_first_page();
    let before = state.users().to_vec();
    let request = state.begin_delete(4).unwrap();
    assert_eq!(state.deleting(), Some(4));

    assert_eq!(state.complete_delete(request, Ok(())), DeleteOutcome::Removed { user_id: 4 });

    assert_eq!(state.users().len(), before.len() - 1);
    assert!(state.users().iter().all(|u| u.id != 4));
    let expected: Vec<User> = before.into_iter().filter(|u| u.id != 4).collect();
    assert_eq!(state.users(), expected.as_slice());
    assert_eq!(state.deleting(), None);
}

#[test]
fn delete_success_does_not_refetch_or_touch_pagination() {
    let mut state = loaded_first_page();
    let pagination = state.pagination();
    let request = state.begin_delete(2).unwrap();
    state.complete_delete(request, Ok(()));
    assert_eq!(state.pagination(), pagination);
    assert_eq!(state.phase(), &ListingPhase::Loaded);
}

#[test]
fn delete_failure_leaves_list_untouched() {
    let mut state = loaded_first_page();
    let before = state.users().to_vec();
    let request = state.begin_delete(3).unwrap();
    let outcome = state.complete_delete(request, Err(not_found()));
    assert_eq!(outcome, DeleteOutcome::Failed(DELETE_FAILED_MESSAGE.to_owned()));
    assert_eq!(state.users(), before.as_slice());
    assert_eq!(state.deleting(), None);
}

#[test]
fn deletes_are_serialized() {
    let mut state = loaded_first_page();
    let first = state.begin_delete(1).unwrap();
    assert_eq!(state.begin_delete(2), None);
    state.complete_delete(first, Ok(()));
    assert!(state.begin_delete(2).is_some());
}

#[test]
fn delete_scenario_204_then_404() {
    let mut state = ListingState::default();
    let request = state.reload();
    state.complete_load(request, Ok(page_of(7..=12, 2)));

    let ok = state.begin_delete(7).unwrap();
    assert_eq!(
        state.complete_delete(ok, crate::net::api::delete_outcome_for_status(204)),
        DeleteOutcome::Removed { user_id: 7 }
    );
    assert!(state.users().iter().all(|u| u.id != 7));

    let len = state.users().len();
    let missing = state.begin_delete(8).unwrap();
    assert!(matches!(
        state.complete_delete(missing, crate::net::api::delete_outcome_for_status(404)),
        DeleteOutcome::Failed(_)
    ));
    assert_eq!(state.users().len(), len);
}

// =============================================================
// Page-size selector
// =============================================================

#[test]
fn selector_shows_requested_size_while_change_is_in_flight() {
    let mut state = loaded_first_page();
    state.change_page_size(size(12));
    assert_eq!(state.selected_page_size(), size(12));
    assert_eq!(state.pagination().page_size, size(6));
}

#[test]
fn selector_reverts_to_committed_size_when_change_fails() {
    let mut state = loaded_first_page();
    let request = state.change_page_size(size(12));
    state.complete_load(request, Err(not_found()));

    assert_eq!(state.selected_page_size(), size(6));
    let next = state.next_page().unwrap();
    assert_eq!(next.page_size, state.selected_page_size());
}

#[test]
fn selector_reverts_when_size_change_is_superseded() {
    let mut state = loaded_first_page();
    let resize = state.change_page_size(size(12));
    let jump = state.go_to_page(2).unwrap();
    assert_eq!(state.selected_page_size(), size(6));

    assert_eq!(state.complete_load(resize, Ok(page_of(1..=12, 1))), LoadOutcome::Stale);
    assert_eq!(state.selected_page_size(), size(6));
    state.complete_load(jump, Ok(page_of(7..=12, 2)));
    assert_eq!(state.selected_page_size(), size(6));
    assert_eq!(state.pagination().current_page, 2);
}

#[test]
fn selector_commits_size_on_success() {
    let mut state = loaded_first_page();
    let request = state.change_page_size(size(12));
    state.complete_load(request, Ok(page_of(1..=12, 1)));
    assert_eq!(state.selected_page_size(), size(12));
    assert_eq!(state.pagination().page_size, size(12));
}

use tabmaster_core::{run, Config, Interpreter, TabId};

#[test]
fn test_back_on_switched_tab() {
    let output = run(&["create-tab A", "open B", "create-tab C", "switch 1", "back 1"]);
    assert_eq!(output, vec!["A"]);
}

#[test]
fn test_recents_most_recent_first() {
    let output = run(&["create-tab A", "create-tab B", "recents 5"]);
    assert_eq!(output, vec!["2 1"]);
}

#[test]
fn test_describe_active_counts_queue() {
    let output = run(&[
        "create-tab A",
        "queue-download f1",
        "queue-download f2",
        "advance-downloads 1",
        "describe-active",
    ]);
    assert_eq!(output, vec!["1 A 0 0 1"]);
}

#[test]
fn test_close_only_tab() {
    let output = run(&["create-tab A", "close 1", "describe-active"]);
    assert!(output.is_empty());
}

#[test]
fn test_ids_not_reused_after_close() {
    let output = run(&[
        "create-tab A",
        "create-tab B",
        "close 2",
        "close 1",
        "create-tab C",
        "describe-active",
        "recents 5",
    ]);
    assert_eq!(output, vec!["3 C 0 0 0", "3"]);
}

#[test]
fn test_open_clears_forward_history() {
    let output = run(&[
        "create-tab A",
        "open B",
        "open C",
        "back 2",
        "open D",
        "describe-active",
        "forward 1",
    ]);
    assert_eq!(output, vec!["A", "1 D 1 0 0", "D"]);
}

#[test]
fn test_back_then_forward_round_trip() {
    for k in 0..=3 {
        let back = format!("back {}", k);
        let forward = format!("forward {}", k);
        let output = run(&[
            "create-tab A",
            "open B",
            "open C",
            "open D",
            back.as_str(),
            forward.as_str(),
        ]);
        assert_eq!(output.last().map(String::as_str), Some("D"), "k = {}", k);
    }
}

#[test]
fn test_recents_tracks_every_tab_command() {
    let output = run(&[
        "create-tab A",
        "create-tab B",
        "create-tab C",
        "switch 1",
        "recents 3",
        "switch 2",
        "open X",
        "recents 2",
        "close 2",
        "recents 5",
    ]);
    assert_eq!(output, vec!["1 3 2", "2 1", "1 3"]);
}

#[test]
fn test_close_active_tab_activates_lowest_id() {
    let (output, session) = Interpreter::new(Config::default()).run_with_session(&[
        "create-tab A",
        "create-tab B",
        "create-tab C",
        "switch 2",
        "close 2",
        "describe-active",
    ]);
    assert_eq!(output, vec!["1 A 0 0 0"]);
    assert_eq!(session.active_tab_id(), Some(TabId(1)));
}

#[test]
fn test_recents_subset_of_live_tabs() {
    let (_, session) = Interpreter::default().run_with_session(&[
        "create-tab A",
        "create-tab B",
        "create-tab C",
        "create-tab D",
        "close 3",
        "switch 1",
        "close 4",
    ]);

    let recents = session.recents(10);
    assert_eq!(recents, vec![TabId(1), TabId(2)]);
    assert!(session.recents(1).len() <= 1);
    assert_eq!(session.tab_count(), recents.len());
}

#[test]
fn test_advance_zero_keeps_queue() {
    let output = run(&[
        "create-tab A",
        "queue-download f1",
        "advance-downloads 0",
        "advance-downloads -2",
        "describe-active",
        "advance-downloads 10",
        "describe-active",
    ]);
    assert_eq!(output, vec!["1 A 0 0 1", "1 A 0 0 0"]);
}

#[test]
fn test_downloads_independent_of_tabs() {
    let output = run(&["queue-download f1", "create-tab A", "describe-active"]);
    assert_eq!(output, vec!["1 A 0 0 1"]);
}

#[test]
fn test_overflowing_counts_saturate() {
    let output = run(&[
        "create-tab A",
        "create-tab B",
        "recents 99999999999999999999",
        "open C",
        "back 99999999999999999999",
        "forward 99999999999999999999",
        "queue-download f1",
        "advance-downloads 99999999999999999999",
        "describe-active",
    ]);
    assert_eq!(output, vec!["2 1", "B", "C", "2 C 1 0 0"]);
}

#[test]
fn test_bare_create_tab_allocates_blank_tab() {
    let output = run(&[
        "create-tab A",
        "create-tab",
        "describe-active",
        "back 1",
        "create-tab C",
        "recents 5",
        "switch 2",
        "open B",
        "describe-active",
    ]);
    assert_eq!(
        output,
        vec!["2 about:blank 0 0 0", "about:blank", "3 2 1", "2 B 0 0 0"]
    );
}

mod common;

use wellness::config::TasksConfig;
use wellness::model::Task;
use wellness::sample::placeholder_tasks;
use wellness::tasks::{ListError, ObservableTaskList};

use common::{three_task_list, three_tasks};

#[test]
fn snapshot_after_create_equals_input_order() {
    let initial = placeholder_tasks(&TasksConfig::default());
    let list = ObservableTaskList::new(initial.clone()).unwrap();
    assert_eq!(list.snapshot(), initial);
}

#[test]
fn create_with_duplicate_ids_fails() {
    let batch = vec![Task::new(1, "a"), Task::new(2, "b"), Task::new(1, "c")];
    assert!(matches!(
        ObservableTaskList::new(batch),
        Err(ListError::DuplicateId(1))
    ));
}

#[test]
fn remove_present_id_shrinks_by_one_and_drops_it() {
    let mut list = three_task_list();
    assert!(list.remove(2));
    assert_eq!(list.len(), 2);
    assert!(list.get(2).is_none());
}

#[test]
fn second_remove_of_same_id_is_a_noop() {
    let mut list = three_task_list();
    assert!(list.remove(2));
    let before = list.snapshot();
    assert!(!list.remove(2));
    assert_eq!(list.snapshot(), before);
}

#[test]
fn set_checked_round_trip_restores_original_state() {
    let mut list = three_task_list();
    let before = list.snapshot();
    assert!(list.set_checked(2, true));
    assert!(list.set_checked(2, false));
    assert_eq!(list.snapshot(), before);
}

#[test]
fn set_checked_touches_only_the_target_task() {
    let mut list = three_task_list();
    assert!(list.set_checked(2, true));
    let snapshot = list.snapshot();
    assert!(snapshot[1].checked);
    assert!(!snapshot[0].checked);
    assert!(!snapshot[2].checked);
    assert_eq!(snapshot[1].label, "Task #1");
}

#[test]
fn mutations_with_unknown_id_leave_snapshot_identical() {
    let mut list = three_task_list();
    let before = list.snapshot();
    assert!(!list.remove(99));
    assert!(!list.set_checked(99, true));
    assert_eq!(list.snapshot(), before);
}

#[test]
fn middle_removal_preserves_relative_order() {
    let batch: Vec<Task> = (0..5).map(|i| Task::new(i, format!("Task #{i}"))).collect();
    let mut list = ObservableTaskList::new(batch).unwrap();
    assert!(list.remove(2));
    let ids: Vec<_> = list.tasks().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![0, 1, 3, 4]);
}

// -- Concrete scenarios -------------------------------------------------------

#[test]
fn removing_the_middle_task_by_id() {
    let mut list = three_task_list();
    assert!(list.remove(2));
    assert_eq!(
        list.snapshot(),
        vec![Task::new(1, "Task #0"), Task::new(3, "Task #2")]
    );
}

#[test]
fn checking_the_last_task_by_id() {
    let mut list = three_task_list();
    assert!(list.set_checked(3, true));

    let mut expected = three_tasks();
    expected[2].checked = true;
    assert_eq!(list.snapshot(), expected);
}

#[test]
fn checking_an_absent_id_changes_nothing() {
    let mut list = three_task_list();
    assert!(!list.set_checked(99, true));
    assert_eq!(list.snapshot(), three_tasks());
}

// -- Growth after initial population ------------------------------------------

#[test]
fn insert_appends_at_the_end() {
    let mut list = three_task_list();
    list.insert(Task::new(4, "Task #3")).unwrap();
    assert_eq!(list.len(), 4);
    assert_eq!(list.tasks()[3].id, 4);
}

#[test]
fn insert_rejects_live_and_retired_ids() {
    let mut list = three_task_list();
    assert!(matches!(
        list.insert(Task::new(2, "again")),
        Err(ListError::DuplicateId(2))
    ));

    assert!(list.remove(2));
    assert!(matches!(
        list.insert(Task::new(2, "again")),
        Err(ListError::DuplicateId(2))
    ));
}

#[test]
fn next_id_is_above_every_id_ever_owned() {
    let mut list = three_task_list();
    assert_eq!(list.next_id(), 4);
    assert!(list.remove(3));
    assert_eq!(list.next_id(), 4);
    list.insert(Task::new(list.next_id(), "Task #3")).unwrap();
    assert_eq!(list.next_id(), 5);
}

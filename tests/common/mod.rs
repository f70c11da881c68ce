//! Shared fixtures for state-holder tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use wellness::model::Task;
use wellness::tasks::{ListEvent, ObservableTaskList};

/// The three-task batch the concrete scenarios run against.
pub fn three_tasks() -> Vec<Task> {
    vec![
        Task::new(1, "Task #0"),
        Task::new(2, "Task #1"),
        Task::new(3, "Task #2"),
    ]
}

pub fn three_task_list() -> ObservableTaskList {
    ObservableTaskList::new(three_tasks()).expect("batch ids are unique")
}

/// Subscribes a recorder to the list and returns the shared event log.
pub fn record_events(list: &mut ObservableTaskList) -> Rc<RefCell<Vec<ListEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    list.subscribe(move |event| sink.borrow_mut().push(*event));
    events
}

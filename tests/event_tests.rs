mod common;

use cellgrid::{CellChanged, Grid};
use common::{numbered_grid, record_events};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn set_value_raises_exactly_one_event() {
    let mut grid = numbered_grid(3, 3, 1.0);
    let events = record_events(&mut grid);

    grid.set_value(1, 2, 5).unwrap();

    assert_eq!(*events.borrow(), vec![CellChanged { x: 1, y: 2 }]);
}

#[test]
fn set_value_at_reports_grid_coordinates() {
    let mut grid = numbered_grid(4, 4, 2.0);
    let events = record_events(&mut grid);

    grid.set_value_at(macroquad::math::vec2(5.0, 7.5), 0).unwrap();

    assert_eq!(*events.borrow(), vec![CellChanged { x: 2, y: 3 }]);
}

#[test]
fn listeners_see_the_new_value() {
    let mut grid = numbered_grid(2, 2, 1.0);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    grid.subscribe(move |grid, event| {
        sink.borrow_mut().push(*grid.value(event.x, event.y).unwrap());
    });

    grid.set_value(0, 1, 42).unwrap();
    grid.set_value(1, 0, 43).unwrap();

    assert_eq!(*seen.borrow(), vec![42, 43]);
}

#[test]
fn trigger_changed_notifies_without_mutation() {
    let mut grid = numbered_grid(3, 3, 1.0);
    let events = record_events(&mut grid);

    grid.trigger_changed(2, 1).unwrap();

    assert_eq!(*events.borrow(), vec![CellChanged { x: 2, y: 1 }]);
    assert_eq!(grid.value(2, 1), Ok(&21));
}

#[test]
fn value_mut_is_silent_until_triggered() {
    let mut grid = numbered_grid(2, 2, 1.0);
    let events = record_events(&mut grid);

    *grid.value_mut(1, 1).unwrap() += 100;
    assert!(events.borrow().is_empty());

    grid.trigger_changed(1, 1).unwrap();
    assert_eq!(events.borrow().len(), 1);
    assert_eq!(grid.value(1, 1), Ok(&111));
}

#[test]
fn failed_writes_raise_nothing() {
    let mut grid = numbered_grid(2, 2, 1.0);
    let events = record_events(&mut grid);

    assert!(grid.set_value(2, 0, 1).is_err());
    assert!(grid.trigger_changed(0, -1).is_err());

    assert!(events.borrow().is_empty());
}

#[test]
fn listeners_run_in_registration_order() {
    let mut grid: Grid<u8> = Grid::new(1, 1, 1.0, |_, _, _| 0).unwrap();
    let order = Rc::new(RefCell::new(Vec::new()));

    for name in ["first", "second", "third"] {
        let sink = Rc::clone(&order);
        grid.subscribe(move |_, _| sink.borrow_mut().push(name));
    }

    grid.set_value(0, 0, 1).unwrap();

    assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
}

#[test]
fn unsubscribe_stops_delivery() {
    let mut grid = numbered_grid(2, 2, 1.0);
    let count = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&count);
    let id = grid.subscribe(move |_, _| *sink.borrow_mut() += 1);
    let kept = record_events(&mut grid);
    assert_eq!(grid.listener_count(), 2);

    grid.set_value(0, 0, 1).unwrap();
    assert!(grid.unsubscribe(id));
    assert!(!grid.unsubscribe(id));
    grid.set_value(0, 0, 2).unwrap();

    assert_eq!(*count.borrow(), 1);
    assert_eq!(kept.borrow().len(), 2);
    assert_eq!(grid.listener_count(), 1);
}

#[test]
fn subscriber_ids_are_not_reused() {
    let mut grid = numbered_grid(1, 1, 1.0);
    let a = grid.subscribe(|_, _| {});
    assert!(grid.unsubscribe(a));
    let b = grid.subscribe(|_, _| {});
    assert_ne!(a, b);
    assert!(!grid.unsubscribe(a));
}

#[test]
fn listeners_survive_repeated_notifications() {
    let mut grid = numbered_grid(3, 1, 1.0);
    let events = record_events(&mut grid);

    for x in 0..3 {
        grid.set_value(x, 0, x).unwrap();
        grid.trigger_changed(x, 0).unwrap();
    }

    assert_eq!(events.borrow().len(), 6);
    assert_eq!(grid.listener_count(), 1);
}

use std::cell::RefCell;
use std::rc::Rc;

use super::*;

fn session(uid: &str) -> Session {
    Session { uid: uid.to_owned(), email: format!("{uid}@example.com") }
}

fn recorder() -> (Rc<RefCell<Vec<Option<String>>>>, impl Fn(Option<&Session>) + 'static) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    (seen, move |s: Option<&Session>| sink.borrow_mut().push(s.map(|s| s.uid.clone())))
}

#[test]
fn notify_reaches_every_listener() {
    let listeners = Listeners::new();
    let (first, f1) = recorder();
    let (second, f2) = recorder();
    let _a = listeners.add(f1);
    let _b = listeners.add(f2);

    listeners.notify(Some(&session("u1")));
    listeners.notify(None);

    assert_eq!(*first.borrow(), vec![Some("u1".to_owned()), None]);
    assert_eq!(*second.borrow(), vec![Some("u1".to_owned()), None]);
}

#[test]
fn cancel_unregisters_listener() {
    let listeners = Listeners::new();
    let (seen, f) = recorder();
    let subscription = listeners.add(f);
    assert_eq!(listeners.len(), 1);

    subscription.cancel();
    listeners.notify(None);

    assert!(listeners.is_empty());
    assert!(seen.borrow().is_empty());
}

#[test]
fn drop_unregisters_listener() {
    let listeners = Listeners::new();
    let (seen, f) = recorder();
    drop(listeners.add(f));
    listeners.notify(None);
    assert!(seen.borrow().is_empty());
}

#[test]
fn cancelling_one_keeps_the_others() {
    let listeners = Listeners::new();
    let (kept, f1) = recorder();
    let (_, f2) = recorder();
    let _keep = listeners.add(f1);
    listeners.add(f2).cancel();

    listeners.notify(Some(&session("u2")));

    assert_eq!(listeners.len(), 1);
    assert_eq!(*kept.borrow(), vec![Some("u2".to_owned())]);
}

#[test]
fn subscription_outliving_registry_is_harmless() {
    let (_, f) = recorder();
    let subscription = {
        let listeners = Listeners::new();
        listeners.add(f)
    };
    subscription.cancel();
}

#[test]
fn listener_may_subscribe_during_notify() {
    let listeners = Listeners::new();
    let held = Rc::new(RefCell::new(Vec::new()));
    let registry = listeners.clone();
    let sink = Rc::clone(&held);
    let _outer = listeners.add(move |_| {
        sink.borrow_mut().push(registry.add(|_| {}));
    });

    listeners.notify(None);

    assert_eq!(listeners.len(), 2);
    assert_eq!(held.borrow().len(), 1);
}

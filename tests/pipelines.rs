use std::cell::Cell;

use log::trace;
use maybe::{maybe, never_absent, to_maybe, Maybe};

mod common;

fn concat_pipeline(start: Option<&str>, calls: &Cell<u32>) -> Maybe<String> {
    to_maybe(start)
        .filter(|x| {
            calls.set(calls.get() + 1);
            x.len() == 1
        })
        .bind_combine(
            |_| {
                calls.set(calls.get() + 1);
                to_maybe("b")
            },
            |a, b| {
                calls.set(calls.get() + 1);
                format!("{a}{b}")
            },
        )
}

#[test]
fn end_to_end_present() {
    common::init();

    let calls = Cell::new(0);
    let res = concat_pipeline(Some("a"), &calls);
    trace!("result {res:?}");

    assert_eq!(res.value_or_default(), "ab");
    assert_eq!(calls.get(), 3);
}

#[test]
fn end_to_end_absent() {
    common::init();

    let calls = Cell::new(0);
    let res = concat_pipeline(None, &calls);
    trace!("result {res:?}");

    assert!(res.is_absent());
    assert_eq!(res.value_or("default".into()), "default");
    assert_eq!(calls.get(), 0);
}

#[test]
fn end_to_end_filtered() {
    common::init();

    let calls = Cell::new(0);
    let res = concat_pipeline(Some("aa"), &calls);

    assert!(res.is_absent());
    assert_eq!(calls.get(), 1);
}

#[test]
fn short_circuit_on_absent_source() {
    common::init();

    let called = Cell::new(0);
    let fun = |x: &str| {
        called.set(called.get() + 1);
        x.to_string()
    };

    let s: Option<&str> = None;
    let res = maybe! {
        val <- s;
        yield fun(val)
    };
    assert!(res.is_absent());
    assert_eq!(called.get(), 0);

    let s = Some("");
    let res = to_maybe(s).map(fun);
    assert_eq!(res, to_maybe(String::new()));
    assert_eq!(called.get(), 1);
}

#[test]
fn multi_step_pipeline_calls_once() {
    common::init();

    let called = Cell::new(0);
    let fun = |x: String| {
        called.set(called.get() + 1);
        x
    };

    let res = to_maybe("a")
        .map(|x| x.to_uppercase())
        .filter(|x| !x.is_empty())
        .map(fun)
        .filter_not(|x| x == "B")
        .bind_combine(|_| to_maybe("c"), |a, b| a + b);

    assert_eq!(res.value_or_default(), "Ac");
    assert_eq!(called.get(), 1);
}

#[test]
fn match_from_outside() {
    let describe = |m: Maybe<&str>| match m {
        Maybe::Present { 0: x, .. } => format!("present {x}"),
        Maybe::Absent => "absent".to_string(),
    };

    assert_eq!(describe(to_maybe("a")), "present a");
    assert_eq!(describe(to_maybe(None::<&str>)), "absent");
}

#[test]
fn question_mark() {
    fn first_char(s: Option<&str>) -> Result<char, Box<dyn std::error::Error>> {
        let c = to_maybe(s).map(|s| s.chars().next()).value()?;
        Ok(c)
    }

    assert_eq!(first_char(Some("xyz")).unwrap(), 'x');
    assert_eq!(first_char(Some("")).unwrap_err().to_string(), "value is absent");
    assert!(first_char(None).is_err());
}

#[derive(Debug)]
struct User {
    name: String,
    nick: Option<String>,
    manager: Option<Box<User>>,
}

never_absent!(User);

fn display_name(user: Option<&User>) -> String {
    to_maybe(user)
        .bind_combine(|&u| &u.nick, |u, nick| format!("{} ({nick})", u.name))
        .value_or_else(|| "unknown".into())
}

#[test]
fn optional_fields_collapse() {
    common::init();

    let ann = User {
        name: "ann".into(),
        nick: None,
        manager: None,
    };
    let bob = User {
        name: "bob".into(),
        nick: Some("b".into()),
        manager: Some(Box::new(ann)),
    };

    assert_eq!(display_name(Some(&bob)), "bob (b)");
    assert_eq!(display_name(None), "unknown");

    let manager = to_maybe(&bob).map(|u| &u.manager);
    assert_eq!(manager.map(|m| m.name.as_str()).value_or_default(), "ann");

    let managers_nick = to_maybe(&bob)
        .map(|u| &u.manager)
        .map(|m| &m.nick);
    assert!(managers_nick.is_absent());

    let managers_manager = to_maybe(&bob)
        .map(|u| &u.manager)
        .map(|m| &m.manager);
    trace!("manager of manager {managers_manager:?}");
    assert!(managers_manager.is_absent());
}

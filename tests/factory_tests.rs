//! Integration tests for `item_getter`, `attr_getter` and `method_caller`.

use pipe_operator::compose::Callable;
use pipe_operator::operator::{AttrGetter, ItemGetter, MethodCaller};
use pipe_operator::optics::FunctionGetter;
use pipe_operator::prelude::*;
use std::collections::HashMap;

#[derive(Debug, PartialEq)]
struct Greeter {
    settings: HashMap<&'static str, i32>,
    name: String,
}

impl Greeter {
    fn new() -> Self {
        Self {
            settings: HashMap::from([("k", 10)]),
            name: String::from("bot"),
        }
    }

    fn greet(&self, name: &str) -> String {
        format!("hi {name}")
    }

    fn rename(&mut self, name: &str) {
        self.name = name.to_string();
    }
}

#[test]
fn test_itemgetter_attrgetter_methodcaller() {
    let mapping = HashMap::from([("k", 10)]);
    assert_eq!(*mapping.pipe_ref(item_getter("k")), 10);

    let greeter = Greeter::new();
    let settings = greeter.pipe_ref(attr_getter(FunctionGetter::new(
        |greeter: &Greeter| &greeter.settings,
    )));
    assert_eq!(settings, &HashMap::from([("k", 10)]));

    assert_eq!("abc".pipe(method_caller(str::to_uppercase, ())), "ABC");
    assert_eq!(greeter.pipe_ref(method_caller(Greeter::greet, ("sam",))), "hi sam");
}

#[test]
fn test_item_getter_on_slices_and_ranges() {
    let values = [10, 20, 30, 40];
    assert_eq!(*values.pipe_ref(item_getter(2_usize)), 30);
    assert_eq!(values.pipe_ref(item_getter(1..3)), [20, 30]);
}

#[test]
fn test_nested_attr_getter() {
    let name = FunctionGetter::new(|greeter: &Greeter| &greeter.name);
    let first = FunctionGetter::new(|name: &String| name.as_str());
    let greeter = Greeter::new();
    assert_eq!(greeter.pipe_ref(attr_getter(name.compose(first))), "bot");
}

#[test]
fn test_method_caller_with_several_arguments() {
    assert_eq!("a-b-c".pipe(method_caller(str::replacen::<&str>, ("-", "+", 1))), "a+b-c");
}

#[test]
fn test_method_caller_mutating_receiver() {
    let mut greeter = Greeter::new();
    greeter.pipe_mut(method_caller(Greeter::rename, ("ada",)));
    assert_eq!(greeter.name, "ada");
}

#[test]
fn test_factories_match_manual_construction() {
    let greeter = Greeter::new();
    let getter = FunctionGetter::new(|greeter: &Greeter| &greeter.name);

    assert_eq!(
        greeter.pipe_ref(attr_getter(getter)),
        AttrGetter::new(getter).call((&greeter,))
    );
    assert_eq!(
        greeter.settings.pipe_ref(item_getter("k")),
        ItemGetter::new("k").call((&greeter.settings,))
    );
    assert_eq!(
        greeter.pipe_ref(method_caller(Greeter::greet, ("ada",))),
        MethodCaller::new(Greeter::greet, ("ada",)).call((&greeter,))
    );
}

#[test]
#[should_panic]
fn test_item_getter_missing_key_panics() {
    let mapping = HashMap::from([("k", 10)]);
    let _ = mapping.pipe_ref(item_getter("absent"));
}

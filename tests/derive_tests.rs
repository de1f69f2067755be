//! Tests for `#[derive(Getters)]`.

use pipe_operator::optics::{Getter, Getters};
use pipe_operator::prelude::*;
use rstest::rstest;

// =============================================================================
// Test Structures
// =============================================================================

#[derive(Clone, Debug, PartialEq, Getters)]
struct Point {
    x: i32,
    y: i32,
}

#[derive(Clone, Debug, PartialEq, Getters)]
struct Address {
    street: String,
    city: String,
}

#[derive(Clone, Debug, PartialEq, Getters)]
struct Person {
    name: String,
    address: Address,
}

#[derive(Clone, Debug, PartialEq, Getters)]
struct Container<T> {
    value: T,
    label: &'static str,
}

// =============================================================================
// Generated getters
// =============================================================================

#[rstest]
#[case(Point { x: 1, y: 2 }, 1, 2)]
#[case(Point { x: -5, y: 0 }, -5, 0)]
fn test_point_getters(#[case] point: Point, #[case] x: i32, #[case] y: i32) {
    assert_eq!(*Point::x_getter().get(&point), x);
    assert_eq!(*Point::y_getter().get(&point), y);
}

#[test]
fn test_getter_with_attr_getter() {
    let person = Person {
        name: String::from("Alice"),
        address: Address {
            street: String::from("Main St"),
            city: String::from("Tokyo"),
        },
    };
    assert_eq!(person.pipe_ref(attr_getter(Person::name_getter())), "Alice");
}

#[test]
fn test_composed_generated_getters() {
    let person = Person {
        name: String::from("Bob"),
        address: Address {
            street: String::from("Elm St"),
            city: String::from("Osaka"),
        },
    };
    let city = Person::address_getter().compose(Address::city_getter());
    assert_eq!(person.pipe_ref(attr_getter(city)), "Osaka");
    assert_eq!(
        Person::address_getter()
            .compose(Address::street_getter())
            .get(&person),
        "Elm St"
    );
}

#[test]
fn test_generic_struct_getters() {
    let container = Container {
        value: 42_u64,
        label: "answer",
    };
    assert_eq!(*Container::<u64>::value_getter().get(&container), 42);
    assert_eq!(*container.pipe_ref(attr_getter(Container::<u64>::label_getter())), "answer");
}

#[test]
fn test_generated_getters_are_copy() {
    let getter = Point::x_getter();
    let copy = getter;
    let point = Point { x: 9, y: 0 };
    assert_eq!(getter.get(&point), copy.get(&point));
}

use super::*;

use crate::test_utils::{generic, nullable, ty};

#[test]
fn top_level_nullability_is_normalized_away() {
    assert_eq!(TypeId::of(&ty("std.Int")), TypeId::of(&nullable("std.Int")));
    assert_eq!(TypeId::of(&ty("std.Int")).as_str(), "std.Int");
}

#[test]
fn argument_nullability_is_preserved() {
    let list_of_int = generic("std.List", vec![ty("std.Int")]);
    let list_of_nullable_int = generic("std.List", vec![nullable("std.Int")]);
    assert_eq!(TypeId::of(&list_of_int).as_str(), "std.List<std.Int>");
    assert_eq!(
        TypeId::of(&list_of_nullable_int).as_str(),
        "std.List<std.Int?>"
    );
    assert_ne!(TypeId::of(&list_of_int), TypeId::of(&list_of_nullable_int));
}

#[test]
fn generic_instantiations_are_distinct() {
    let of_int = generic("std.List", vec![ty("std.Int")]);
    let of_string = generic("std.List", vec![ty("std.String")]);
    assert_ne!(TypeId::of(&of_int), TypeId::of(&of_string));
}

#[test]
fn nested_arguments_render_with_separators() {
    let map = generic(
        "std.Map",
        vec![ty("std.Int"), generic("std.List", vec![ty("std.String")])],
    );
    assert_eq!(
        TypeId::of(&map).as_str(),
        "std.Map<std.Int, std.List<std.String>>"
    );
}

#[test]
fn aliases_are_not_expanded() {
    // An alias keeps its own path; providing both the alias and its target
    // is the supported way to provide one underlying type twice.
    assert_ne!(TypeId::from_path("app.Alias"), TypeId::from_path("std.Int"));
}

#[test]
fn short_name_drops_package_and_arguments() {
    let map = generic("std.Map", vec![ty("std.Int"), ty("std.String")]);
    assert_eq!(TypeId::of(&map).short_name(), "Map");
    assert_eq!(TypeId::from_path("std.Int").short_name(), "Int");
    assert_eq!(TypeId::from_path("Int").short_name(), "Int");
}

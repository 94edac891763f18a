use super::*;

use crate::identity::TypeId;

fn ids(paths: &[&str]) -> Vec<TypeId> {
    paths.iter().map(|p| TypeId::from_path(p)).collect()
}

fn names(paths: &[&str]) -> Vec<String> {
    assign_names(&ids(paths)).into_values().collect()
}

#[test]
fn simple_names_use_the_last_segment() {
    assert_eq!(names(&["std.String"]), ["string"]);
    assert_eq!(names(&["std.String", "std.Int"]), ["string", "int"]);
}

#[test]
fn generic_arguments_become_of_and_suffixes() {
    assert_eq!(names(&["std.List<std.Int>"]), ["list_ofInt"]);
    assert_eq!(
        names(&["std.Map<std.Int, std.String>"]),
        ["map_ofInt_andString"]
    );
}

#[test]
fn collisions_grow_by_package_segment() {
    assert_eq!(names(&["a.Int", "b.Int"]), ["aInt", "bInt"]);
    assert_eq!(names(&["a.Int", "b.Int", "std.String"]), ["aInt", "bInt", "string"]);
}

#[test]
fn underscores_are_doubled_to_avoid_manufactured_collisions() {
    assert_eq!(names(&["my_app.Int", "other.Int"]), ["my__appInt", "otherInt"]);
}

#[test]
fn output_follows_input_order() {
    let assigned = assign_names(&ids(&["b.Int", "std.String", "a.Int"]));
    let keys: Vec<_> = assigned.keys().map(TypeId::as_str).collect();
    assert_eq!(keys, ["b.Int", "std.String", "a.Int"]);
    let values: Vec<_> = assigned.into_values().collect();
    assert_eq!(values, ["bInt", "string", "aInt"]);
}

#[test]
fn collisions_inside_generic_arguments_grow_too() {
    // Heads match at every grade; only the argument package tells the
    // ids apart, so the argument name must grow along with the head.
    assert_eq!(
        names(&["p.Box<a.Int>", "p.Box<b.Int>"]),
        ["pBox_ofaInt", "pBox_ofbInt"]
    );
}

#[test]
fn generic_instantiations_of_one_type_stay_distinct() {
    assert_eq!(
        names(&["std.List<std.Int>", "std.List<std.String>"]),
        ["list_ofInt", "list_ofString"]
    );
}

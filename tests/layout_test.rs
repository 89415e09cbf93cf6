#![recursion_limit = "256"]

use tola_traits::*;

#[derive(Meta, Clone, Copy, Default)]
#[repr(C)]
#[allow(dead_code)]
struct Vec2 {
    x: f32,
    y: f32,
}

// Has a default constructor but no bitwise copy.
#[derive(Meta, Clone, Default)]
#[repr(C)]
#[allow(dead_code)]
struct Counter {
    hits: u64,
}

// Copyable but without a declared layout.
#[derive(Meta, Clone, Copy, Default)]
#[allow(dead_code)]
struct Loose {
    a: u8,
    b: u32,
}

#[derive(Meta, Clone, Copy)]
#[repr(C)]
#[allow(dead_code)]
struct Outer {
    inner: Vec2,
    tag: u8,
}

#[derive(Meta, Clone, Copy)]
#[repr(C)]
#[allow(dead_code)]
struct HoldsLoose {
    loose: Loose,
}

#[derive(Meta, Clone, Copy, Default)]
#[repr(u8)]
#[allow(dead_code)]
enum Level {
    #[default]
    Low,
    High,
}

#[derive(Meta, Clone, Copy, Default)]
#[repr(C)]
#[meta(copy, default)]
#[allow(dead_code)]
struct Pair<T> {
    a: T,
    b: T,
}

#[derive(Meta, Clone, Copy)]
#[repr(transparent)]
#[meta(copy)]
#[allow(dead_code)]
struct Wrap<T>(T);

#[derive(Meta, Clone, Copy)]
#[repr(C)]
#[allow(dead_code)]
struct ListNode {
    next: *mut Self,
    prev: *mut ListNode,
    value: i32,
}

#[cfg(feature = "alloc")]
#[derive(Meta)]
#[repr(C)]
#[allow(dead_code)]
struct Tree {
    children: Option<Box<Tree>>,
}

#[test]
fn test_plain_data() {
    assert!(is_trivially_copyable::<Vec2>());
    assert!(is_trivial::<Vec2>());
    assert!(is_standard_layout::<Vec2>());
    assert!(is_pod::<Vec2>());
    assert!(is_pod::<u32>() && is_pod::<*mut u8>() && is_pod::<[f64; 8]>());
}

#[test]
fn test_suppressed_copy_is_not_trivial() {
    assert!(!is_trivially_copyable::<Counter>());
    assert!(!is_trivial::<Counter>());
    assert!(!is_pod::<Counter>());
    assert!(is_standard_layout::<Counter>());
}

#[test]
fn test_undeclared_layout_is_not_standard() {
    assert!(is_trivial::<Loose>());
    assert!(!is_standard_layout::<Loose>());
    assert!(!is_pod::<Loose>());
    assert!(!is_standard_layout::<HoldsLoose>());
}

#[test]
fn test_standard_layout_is_structural() {
    assert!(is_standard_layout::<Outer>());
    assert!(is_trivially_copyable::<Outer>());
    // No `Default`.
    assert!(!is_trivial::<Outer>());
}

#[test]
fn test_enum_with_integer_repr() {
    assert!(is_standard_layout::<Level>());
    assert!(is_pod::<Level>());
}

#[test]
fn test_generic_declared_facts() {
    assert!(is_pod::<Pair<u16>>());
    assert!(!is_standard_layout::<Pair<Loose>>());
    assert!(!is_trivially_copyable::<Pair<Counter>>());

    assert!(is_trivially_copyable::<Wrap<u8>>());
    assert!(!is_trivial::<Wrap<u8>>());
    assert!(is_standard_layout::<Wrap<u8>>());
}

#[test]
fn test_qualifiers_keep_layout() {
    assert!(is_pod::<Const<Vec2>>());
    assert!(!is_trivial::<Volatile<Counter>>());
}

#[test]
fn test_incomplete_and_reference_types() {
    assert!(!is_trivial::<()>());
    assert!(!is_standard_layout::<[u8]>());
    assert!(!is_trivially_copyable::<&'static u8>());
    assert!(!is_pod::<fn()>());
}

#[test]
fn test_self_referential_layout() {
    assert!(is_class::<ListNode>());
    assert!(is_standard_layout::<ListNode>());
    assert!(is_trivially_copyable::<ListNode>());
    assert!(!is_trivial::<ListNode>());
    assert!(is_pointer::<RemoveReference<&'static *mut ListNode>>());
}

#[cfg(feature = "alloc")]
#[test]
fn test_self_referential_through_box() {
    assert!(is_class::<Tree>());
    assert!(!is_standard_layout::<Tree>());
}

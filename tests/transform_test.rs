#![recursion_limit = "256"]

use tola_traits::*;

#[derive(Meta)]
#[allow(dead_code)]
struct Node {
    next: u32,
}

#[test]
fn test_remove_const() {
    assert!(is_same::<RemoveConst<Const<i32>>, i32>());
    assert!(is_same::<RemoveConst<i32>, i32>());
    assert!(is_same::<RemoveConst<Const<Volatile<i32>>>, Volatile<i32>>());
    // Only the top level is touched.
    assert!(is_same::<RemoveConst<*const i32>, *const i32>());
    assert!(is_same::<RemoveConst<&'static Const<i32>>, &'static Const<i32>>());
}

#[test]
fn test_remove_volatile_and_cv() {
    assert!(is_same::<RemoveVolatile<Volatile<Node>>, Node>());
    assert!(is_same::<RemoveVolatile<Volatile<Const<Node>>>, Const<Node>>());
    assert!(is_same::<RemoveCv<Const<Volatile<Node>>>, Node>());
    assert!(is_same::<RemoveCv<Volatile<Const<Node>>>, Node>());
}

#[test]
fn test_qualifier_transforms_are_idempotent() {
    assert!(is_same::<RemoveConst<RemoveConst<Const<u8>>>, RemoveConst<Const<u8>>>());
    assert!(is_same::<AddConst<AddConst<u8>>, AddConst<u8>>());
    assert!(is_same::<AddVolatile<AddVolatile<u8>>, AddVolatile<u8>>());
    assert!(is_same::<AddCv<AddCv<u8>>, AddCv<u8>>());
}

#[test]
fn test_add_qualifiers() {
    assert!(is_same::<AddConst<i32>, Const<i32>>());
    assert!(is_same::<AddCv<i32>, Const<Volatile<i32>>>());
    assert!(is_same::<AddConst<Volatile<i32>>, Volatile<Const<i32>>>());
    assert!(is_const::<AddConst<*mut u8>>() && is_pointer::<AddConst<*mut u8>>());
    // References and functions cannot be qualified.
    assert!(is_same::<AddConst<&'static i32>, &'static i32>());
    assert!(is_same::<AddVolatile<fn()>, fn()>());
}

#[test]
fn test_remove_reference() {
    assert!(is_same::<RemoveReference<&'static i32>, i32>());
    assert!(is_same::<RemoveReference<&'static mut Node>, Node>());
    assert!(is_same::<RemoveReference<RRef<Const<i32>>>, Const<i32>>());
    assert!(is_same::<RemoveReference<i32>, i32>());
    assert!(is_same::<RemoveCvRef<&'static Const<Volatile<Node>>>, Node>());
}

#[test]
fn test_reference_collapsing() {
    assert!(is_same::<AddLvalueReference<i32>, LRef<i32>>());
    assert!(is_same::<AddRvalueReference<i32>, RRef<i32>>());
    assert!(is_same::<AddLvalueReference<RRef<i32>>, LRef<i32>>());
    assert!(is_same::<AddRvalueReference<LRef<i32>>, LRef<i32>>());
    assert!(is_same::<AddRvalueReference<RRef<i32>>, RRef<i32>>());
    assert!(is_same::<AddLvalueReference<&'static i32>, &'static i32>());
}

#[test]
fn test_pointer_round_trip() {
    assert!(is_same::<RemovePointer<AddPointer<i32>>, i32>());
    assert!(is_same::<RemovePointer<AddPointer<Node>>, Node>());
    assert!(is_same::<RemovePointer<AddPointer<[u8; 3]>>, [u8; 3]>());
    assert!(is_same::<RemovePointer<AddPointer<Const<i32>>>, Const<i32>>());
}

#[test]
fn test_add_pointer() {
    assert!(is_same::<AddPointer<i32>, *mut i32>());
    assert!(is_same::<AddPointer<Const<i32>>, *const i32>());
    assert!(is_same::<AddPointer<&'static i32>, *mut i32>());
    assert!(is_same::<AddPointer<*mut i32>, *mut *mut i32>());
}

#[test]
fn test_remove_pointer() {
    assert!(is_same::<RemovePointer<*mut i32>, i32>());
    assert!(is_same::<RemovePointer<*const i32>, Const<i32>>());
    // A const pointer loses its own qualifier with the pointer.
    assert!(is_same::<RemovePointer<Const<*mut i32>>, i32>());
    assert!(is_same::<RemovePointer<i32>, i32>());
    assert!(is_same::<RemovePointer<&'static *mut i32>, &'static *mut i32>());
}

#[test]
fn test_remove_extent() {
    assert!(is_same::<RemoveExtent<[u8; 4]>, u8>());
    assert!(is_same::<RemoveExtent<[[u8; 2]; 4]>, [u8; 2]>());
    assert!(is_same::<RemoveExtent<[Node]>, Node>());
    assert!(is_same::<RemoveExtent<str>, u8>());
    assert!(is_same::<RemoveExtent<Const<[u8; 4]>>, Const<u8>>());
    assert!(is_same::<RemoveExtent<u8>, u8>());
}

#[test]
fn test_transforms_in_signatures() {
    fn strip(v: &RemoveCvRef<&'static Const<u32>>) -> u32 {
        *v + 1
    }
    let pointer: AddPointer<u8> = core::ptr::null_mut();
    assert_eq!(strip(&41), 42);
    assert!(pointer.is_null());
}

#[test]
fn test_qualified_reference_collapses() {
    assert!(is_same::<Const<&'static i32>, &'static i32>());
    assert!(is_same::<Volatile<&'static mut Node>, &'static mut Node>());
    assert!(is_same::<RemoveReference<Const<&'static i32>>, i32>());
    assert!(is_same::<RemoveConst<Const<&'static i32>>, &'static i32>());
    assert!(is_same::<RemoveVolatile<Const<Volatile<&'static i32>>>, &'static i32>());
    assert!(is_same::<AddPointer<Const<&'static i32>>, *mut i32>());
    assert!(is_same::<AddVolatile<Const<LRef<Node>>>, LRef<Node>>());
    assert!(is_same::<AddLvalueReference<Const<RRef<i32>>>, LRef<i32>>());
}

#[test]
fn test_qualified_function_collapses() {
    assert!(is_same::<Const<fn()>, fn()>());
    assert!(is_same::<Volatile<Const<fn(u8) -> u8>>, fn(u8) -> u8>());
    assert!(is_same::<RemovePointer<Const<fn()>>, fn()>());
    assert!(is_same::<RemoveExtent<Volatile<fn()>>, fn()>());
    // Arrays still carry their qualifier down to the element.
    assert!(is_same::<RemoveExtent<Const<[i32; 4]>>, Const<i32>>());
}

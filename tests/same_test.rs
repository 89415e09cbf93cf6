#![recursion_limit = "256"]

use tola_traits::*;

mod a {
    use super::*;

    #[derive(Meta)]
    pub struct S;
}

mod b {
    use super::*;

    #[derive(Meta)]
    pub struct S;
}

#[derive(Meta)]
#[allow(dead_code)]
struct Wrapper<T>(T);

#[test]
fn test_same_is_reflexive() {
    assert!(is_same::<i32, i32>());
    assert!(is_same::<Const<f64>, Const<f64>>());
    assert!(is_same::<&'static [u8], &'static [u8]>());
    assert!(is_same::<fn(u8) -> u16, fn(u8) -> u16>());
    assert!(is_same::<a::S, a::S>());
    assert!(is_same::<Wrapper<a::S>, Wrapper<a::S>>());
}

#[test]
fn test_different_names_differ() {
    assert!(!is_same::<i32, f64>());
    assert!(!is_same::<i32, u32>());
    assert!(!is_same::<i64, isize>());
    assert!(!is_same::<Wrapper<u8>, Wrapper<i8>>());
}

#[test]
fn test_same_name_in_different_modules_differ() {
    assert!(!is_same::<a::S, b::S>());
    assert!(!is_same::<Wrapper<a::S>, Wrapper<b::S>>());
}

#[test]
fn test_qualifiers_matter() {
    assert!(!is_same::<Const<i32>, i32>());
    assert!(!is_same::<Volatile<i32>, i32>());
    assert!(!is_same::<Const<i32>, Volatile<i32>>());
    assert!(!is_same::<*const i32, *mut i32>());
}

#[test]
fn test_qualifier_order_does_not_matter() {
    assert!(is_same::<Const<Volatile<u8>>, Volatile<Const<u8>>>());
    assert!(is_same::<Const<Const<u8>>, Const<u8>>());
}

#[test]
fn test_references_matter() {
    assert!(!is_same::<&'static i32, i32>());
    assert!(!is_same::<&'static i32, &'static mut i32>());
    assert!(!is_same::<LRef<i32>, RRef<i32>>());
    assert!(is_same::<LRef<i32>, &'static i32>());
}

#[test]
fn test_const_pointer_is_pointer_to_const() {
    assert!(is_same::<*const i32, *mut Const<i32>>());
    assert!(!is_same::<*const i32, Const<*mut i32>>());
}

#[test]
fn test_array_lengths_matter() {
    assert!(is_same::<[u8; 4], [u8; 4]>());
    assert!(!is_same::<[u8; 4], [u8; 5]>());
    assert!(!is_same::<[u8; 4], [i8; 4]>());
    assert!(!is_same::<[u8; 4], [u8]>());
    assert!(is_same::<[[u16; 2]; 1024], [[u16; 2]; 1024]>());
}

#[test]
fn test_function_signatures() {
    assert!(!is_same::<fn(u8), fn(u8) -> u8>());
    assert!(!is_same::<fn(u8, u16), fn(u16, u8)>());
    assert!(!is_same::<fn(), unsafe fn()>());
    assert!(!is_same::<fn(), extern "C" fn()>());
}

#[test]
fn test_same_as_fact() {
    fn same<T: Meta, U: Meta>() -> bool
    where
        FullId<T>: identity::IdEq<FullId<U>>,
    {
        is_same::<T, U>()
    }
    assert!(same::<u8, u8>());
    assert!(!same::<u8, char>());
    const _: () = assert!(value::<IsSame<RemoveConst<Const<i32>>, i32>>());
}

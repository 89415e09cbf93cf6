#![recursion_limit = "256"]

use tola_traits::*;

#[derive(Meta)]
#[allow(dead_code)]
struct Account {
    balance: i64,
}

#[derive(Meta, Clone, Copy)]
#[allow(dead_code)]
enum Mode {
    Read,
    Write,
}

#[test]
fn test_arithmetic_is_integral_or_floating() {
    const fn agrees<T: ?Sized + Meta>() -> bool {
        is_arithmetic::<T>() == (is_integral::<T>() || is_floating_point::<T>())
            && !(is_integral::<T>() && is_floating_point::<T>())
    }
    assert!(agrees::<i8>() && agrees::<u64>() && agrees::<bool>() && agrees::<char>());
    assert!(agrees::<f32>() && agrees::<Const<f64>>());
    assert!(agrees::<()>() && agrees::<*mut u8>() && agrees::<Account>());
    assert!(is_arithmetic::<usize>() && is_arithmetic::<f64>());
    assert!(!is_arithmetic::<Mode>() && !is_arithmetic::<NullPtr>());
}

#[test]
fn test_fundamental() {
    assert!(is_fundamental::<()>());
    assert!(is_fundamental::<NullPtr>());
    assert!(is_fundamental::<Volatile<u16>>());
    assert!(!is_fundamental::<*mut u16>());
    assert!(!is_fundamental::<[u8; 2]>());
    assert!(!is_fundamental::<Account>());
}

#[test]
fn test_compound_is_not_fundamental() {
    assert!(is_compound::<*mut u8>());
    assert!(is_compound::<&'static u8>());
    assert!(is_compound::<[u8; 2]>());
    assert!(is_compound::<fn()>());
    assert!(is_compound::<Mode>());
    assert!(is_compound::<MemberPtr<u8, Account>>());
    assert!(!is_compound::<u8>() && !is_compound::<()>());
}

#[test]
fn test_scalar() {
    assert!(is_scalar::<i32>() && is_scalar::<f32>());
    assert!(is_scalar::<Mode>());
    assert!(is_scalar::<*const Account>());
    assert!(is_scalar::<MemberPtr<i64, Account>>());
    assert!(is_scalar::<NullPtr>());
    assert!(!is_scalar::<Account>());
    assert!(!is_scalar::<[i32; 1]>());
    assert!(!is_scalar::<&'static i32>());
    assert!(!is_scalar::<()>());
}

#[test]
fn test_object() {
    assert!(is_object::<i32>());
    assert!(is_object::<[Account; 3]>());
    assert!(is_object::<[u8]>());
    assert!(is_object::<Account>());
    assert!(is_object::<*mut fn()>());
    assert!(!is_object::<fn()>());
    assert!(!is_object::<&'static Account>());
    assert!(!is_object::<RRef<Account>>());
    assert!(!is_object::<()>());
}

#[test]
fn test_member_function_pointer() {
    assert!(is_member_function_pointer::<MemberPtr<fn(i64) -> bool, Account>>());
    assert!(is_member_function_pointer::<MemberPtr<Const<fn()>, Account>>());
    assert!(is_member_function_pointer::<Const<MemberPtr<fn(), Account>>>());
    assert!(!is_member_function_pointer::<MemberPtr<i64, Account>>());
    assert!(!is_member_function_pointer::<fn()>());
}

// A member object pointer is a member pointer that is not a member function
// pointer. The two are exclusive and together make up all member pointers.
#[test]
fn test_member_object_pointer_excludes_function_pointers() {
    type Field = MemberPtr<i64, Account>;
    type Method = MemberPtr<fn() -> i64, Account>;

    assert!(is_member_object_pointer::<Field>());
    assert!(!is_member_function_pointer::<Field>());

    assert!(!is_member_object_pointer::<Method>());
    assert!(is_member_function_pointer::<Method>());

    const fn partitions<T: ?Sized + Meta>() -> bool {
        is_member_pointer::<T>()
            == (is_member_object_pointer::<T>() ^ is_member_function_pointer::<T>())
    }
    assert!(partitions::<Field>() && partitions::<Method>() && partitions::<i64>());
}

//! Library containers and wrappers, described as classes.
//!
//! The tables live in the macro crate; see `describe_library!`.

macros::describe_library!(core);

#[cfg(feature = "alloc")]
macros::describe_library!(alloc);

#[cfg(feature = "std")]
macros::describe_library!(std);

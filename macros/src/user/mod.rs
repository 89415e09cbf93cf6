//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Meta)]` | on struct/enum/union | Describe a user type |
//! | `fact!` | type position | Boolean expression over facts, as a fact |
//! | `holds!` | expression position | Boolean expression over facts, as a `bool` |
//! | `require!` | item position | Compile-time assertion over facts |

pub mod fact;
pub mod meta;

pub use fact::{expand_fact, expand_holds, expand_require, FactInput, FactList};
pub use meta::expand_derive_meta;

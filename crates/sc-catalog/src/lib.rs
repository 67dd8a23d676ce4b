//! sc-catalog: the fixed checklist of station inspection parameters.
//!
//! The catalog is compiled in and never changes at runtime; amending the
//! checklist means shipping a new build. Consumers get read access and
//! category filtering, nothing else.

mod catalog;

pub use catalog::{
    Category, Parameter, by_category, find, max_possible_score, parameters,
};

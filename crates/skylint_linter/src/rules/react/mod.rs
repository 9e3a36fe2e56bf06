//! JSX component rules (forbid-component-props).

pub mod common;
mod forbid_component_props;
pub mod policy;

pub use forbid_component_props::{ForbiddenPropViolation, ForbidComponentProps};

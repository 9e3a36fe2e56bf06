//! ForbidComponentProps rule implementation.
//!
//! Reports props that the configured policy forbids on user-defined
//! components. Intrinsic elements such as `<div>` are never checked.

use skylint_config::{ConfigError, ForbidComponentPropsOptions, RuleSetting};
use skylint_diagnostics::{Diagnostic, FixAvailability, Violation, interpolate};
use skylint_js_cst::CstNode;

use super::common::{attribute_name, element_name_shape};
use super::policy::{PolicyTable, Verdict};
use crate::{CheckContext, FromConfig, Rule};

const RELEVANT_KINDS: &[&str] = &["jsx_attribute"];

const MESSAGE_ID: &str = "propIsForbidden";
const MESSAGE_TEMPLATE: &str = r#"Prop "{{prop}}" is forbidden on Components"#;

/// Forbids props on components according to a [`PolicyTable`].
#[derive(Debug, Clone)]
pub struct ForbidComponentProps {
    policy: PolicyTable,
}

impl ForbidComponentProps {
    pub fn new(policy: PolicyTable) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &PolicyTable {
        &self.policy
    }
}

impl Default for ForbidComponentProps {
    fn default() -> Self {
        Self::new(PolicyTable::defaults())
    }
}

impl FromConfig for ForbidComponentProps {
    const NAME: &'static str = "forbid-component-props";

    fn from_options(setting: &RuleSetting) -> Result<Self, ConfigError> {
        let options: ForbidComponentPropsOptions = setting.options(Self::NAME)?;
        let entries = options.entries()?;
        Ok(Self::new(PolicyTable::compile(entries.as_deref())?))
    }
}

/// Violation for a forbidden prop.
#[derive(Debug, Clone)]
pub struct ForbiddenPropViolation {
    pub prop: String,
    /// Replaces the default message when the policy entry carries one.
    pub custom_message: Option<String>,
}

impl Violation for ForbiddenPropViolation {
    const FIX_AVAILABILITY: FixAvailability = FixAvailability::None;

    fn message(&self) -> String {
        match &self.custom_message {
            Some(message) => message.clone(),
            None => interpolate(MESSAGE_TEMPLATE, &[("prop", self.prop.as_str())]),
        }
    }

    fn message_id(&self) -> Option<&'static str> {
        self.custom_message.is_none().then_some(MESSAGE_ID)
    }

    fn data(&self) -> Vec<(&'static str, String)> {
        vec![("prop", self.prop.clone())]
    }
}

impl Rule for ForbidComponentProps {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn relevant_kinds(&self) -> &'static [&'static str] {
        RELEVANT_KINDS
    }

    fn check(&self, ctx: &CheckContext, node: &CstNode) -> Vec<Diagnostic> {
        let Some(prop) = attribute_name(node) else {
            return vec![];
        };
        if self.policy.get(prop).is_none() {
            return vec![];
        }
        let Some(shape) = element_name_shape(node) else {
            return vec![];
        };

        let identity = shape.identity();
        if identity.is_primitive {
            tracing::trace!(
                prop,
                element = %identity.display_name,
                at = %ctx.line_column(node.range().start()),
                "skipping primitive element"
            );
            return vec![];
        }

        match self.policy.check(prop, &identity) {
            Verdict::Allowed => vec![],
            Verdict::Forbidden(entry) => vec![Diagnostic::new(
                ForbiddenPropViolation {
                    prop: prop.to_string(),
                    custom_message: entry.custom_message().map(str::to_string),
                },
                node.range(),
            )],
        }
    }
}

#![forbid(unsafe_code)]

//! Missing docstring rules (D100-D105)

use crate::rules::{ExecutionContext, Rule, Violation};
use crate::types::{Code, OwnerKind};

/// Reports public definitions that have no docstring
///
/// This is the only rule that fires on undocumented nodes; every other rule
/// returns nothing when the docstring is absent.
#[derive(Debug, Default)]
pub struct MissingDocstring;

impl MissingDocstring {
    pub const CODES: &'static [Code] = &[
        Code::D100,
        Code::D101,
        Code::D102,
        Code::D103,
        Code::D104,
        Code::D105,
    ];
}

impl Rule for MissingDocstring {
    fn name(&self) -> &'static str {
        "missing-docstring"
    }

    fn codes(&self) -> &'static [Code] {
        Self::CODES
    }

    fn execute(&self, ctx: &ExecutionContext<'_>) -> Vec<Violation> {
        let node = ctx.node;
        if node.docstring.is_some() || !node.is_public {
            return vec![];
        }

        let code = match node.owner_kind {
            OwnerKind::Module if node.is_package => Code::D104,
            OwnerKind::Module => Code::D100,
            OwnerKind::Class => Code::D101,
            OwnerKind::Method if node.is_magic() && node.name != "__init__" => Code::D105,
            OwnerKind::Method => Code::D102,
            OwnerKind::Function => Code::D103,
        };

        vec![ctx.violation(code, code.description())]
    }
}

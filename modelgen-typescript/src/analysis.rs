//! Pre-render analysis of a class.
//!
//! Clone and export lists are computed here, before any text is
//! emitted, so the constructor and the injected fields read the same
//! data regardless of the order the class body is assembled in.

use modelgen_codegen::is_blank;

use crate::ast::{Class, Shaped};

/// Property names a class feeds into its synthesized machinery.
///
/// Each list holds every named property (static or instance) whose
/// eligibility flag is set, in declaration order, and is empty when the
/// class lacks the matching capability.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassAnalysis<'a> {
    pub clones: Vec<&'a str>,
    pub exports: Vec<&'a str>,
}

impl<'a> ClassAnalysis<'a> {
    pub fn of(class: &'a Class) -> Self {
        let mut analysis = Self::default();
        let named = class
            .shape()
            .properties
            .iter()
            .filter(|p| !is_blank(p.name()));

        for property in named {
            if class.is_cloneable() && property.is_cloneable() {
                analysis.clones.push(property.name());
            }
            if class.is_exportable() && property.is_exportable() {
                analysis.exports.push(property.name());
            }
        }
        analysis
    }
}

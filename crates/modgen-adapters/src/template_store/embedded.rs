//! Templates compiled into the binary.

use modgen_core::{
    application::ports::TemplateStore,
    domain::{ModuleTemplate, TemplateKind},
    error::ScaffoldResult,
};

const MODULE_XML: &str = include_str!("../../templates/module.xml.template");
const REGISTRATION_PHP: &str = include_str!("../../templates/registration.php.template");

/// Built-in template set.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplates;

impl EmbeddedTemplates {
    pub fn new() -> Self {
        Self
    }

    /// Raw source for `kind`.
    pub const fn source(kind: TemplateKind) -> &'static str {
        match kind {
            TemplateKind::Manifest => MODULE_XML,
            TemplateKind::Registration => REGISTRATION_PHP,
        }
    }
}

impl TemplateStore for EmbeddedTemplates {
    fn load(&self, kind: TemplateKind) -> ScaffoldResult<ModuleTemplate> {
        Ok(ModuleTemplate::new(kind, Self::source(kind)))
    }
}

#[cfg(test)]
mod tests {
    use modgen_core::domain::{ModuleIdentifier, PLACEHOLDER};

    use super::*;

    #[test]
    fn every_builtin_has_a_placeholder() {
        for kind in TemplateKind::ALL {
            let tpl = EmbeddedTemplates::new().load(kind).unwrap();
            assert!(tpl.placeholder_count() >= 1, "{kind} has no placeholder");
        }
    }

    #[test]
    fn manifest_declares_module_name() {
        let id = ModuleIdentifier::parse("Foo_Bar").unwrap();
        let out = EmbeddedTemplates::new()
            .load(TemplateKind::Manifest)
            .unwrap()
            .render(&id);
        assert!(out.contains(r#"<module name="Foo_Bar""#));
        assert!(!out.contains(PLACEHOLDER));
    }

    #[test]
    fn registration_registers_module() {
        let id = ModuleIdentifier::parse("Foo_Bar").unwrap();
        let out = EmbeddedTemplates::new()
            .load(TemplateKind::Registration)
            .unwrap()
            .render(&id);
        assert!(out.starts_with("<?php"));
        assert!(out.contains("'Foo_Bar'"));
        assert!(out.contains("ComponentRegistrar::MODULE"));
    }
}

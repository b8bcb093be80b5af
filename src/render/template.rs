//! Token substitution for collateral templates

use crate::core::{joined_models, SelectionSet};
use crate::records::{MroRecord, PartRecord};

/// Tokens recognized in template paragraphs, in the order they are checked.
pub const TOKENS: [&str; 3] = ["{{aircraft_models}}", "{{parts_list}}", "{{mro_list}}"];

/// Replacement text for each token, computed once per generation run.
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Selected models joined with ", "
    pub aircraft_models: String,
    /// One bullet line per part, newline separated
    pub parts_list: String,
    /// One bullet line per MRO capability, newline separated
    pub mro_list: String,
}

impl RenderContext {
    pub fn new(selection: &SelectionSet, parts: &[PartRecord], mro: &[MroRecord]) -> Self {
        let parts_list = parts
            .iter()
            .map(|p| format!("- {}: {}", p.part_number, p.description))
            .collect::<Vec<_>>()
            .join("\n");
        let mro_list = mro
            .iter()
            .map(|m| format!("- {} (Location: {})", m.capability, m.facility))
            .collect::<Vec<_>>()
            .join("\n");
        Self {
            aircraft_models: joined_models(selection),
            parts_list,
            mro_list,
        }
    }

    fn replacement(&self, token: &str) -> &str {
        match token {
            "{{aircraft_models}}" => &self.aircraft_models,
            "{{parts_list}}" => &self.parts_list,
            _ => &self.mro_list,
        }
    }
}

/// Substitute tokens in a single paragraph of template text.
///
/// Tokens are checked in a fixed order and only the first one present is
/// replaced; every occurrence of that token in the paragraph is expanded.
/// A paragraph without any token passes through unchanged.
pub fn substitute(text: &str, ctx: &RenderContext) -> String {
    for token in TOKENS {
        if text.contains(token) {
            return text.replace(token, ctx.replacement(token));
        }
    }
    text.to_string()
}

/// Substitute tokens across all template paragraphs, splitting any
/// expansion that contains newlines into separate output paragraphs.
pub fn render_paragraphs(paragraphs: &[String], ctx: &RenderContext) -> Vec<String> {
    let mut out = Vec::with_capacity(paragraphs.len());
    for para in paragraphs {
        let rendered = substitute(para, ctx);
        if rendered.contains('\n') {
            out.extend(rendered.lines().map(str::to_string));
        } else {
            out.push(rendered);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn ctx() -> RenderContext {
        let selection: SelectionSet = BTreeSet::from(["747".to_string(), "737".to_string()]);
        let parts = vec![
            PartRecord::new("737", "PN1", "Bracket"),
            PartRecord::new("747", "PN2", "Actuator"),
        ];
        let mro = vec![MroRecord::new("737", "Engine Overhaul", "Dallas")];
        RenderContext::new(&selection, &parts, &mro)
    }

    #[test]
    fn models_token_expands_to_joined_list() {
        let ctx = ctx();
        assert_eq!(
            substitute("Models: {{aircraft_models}}", &ctx),
            "Models: 737, 747"
        );
    }

    #[test]
    fn parts_token_expands_to_bullet_lines() {
        let ctx = ctx();
        assert_eq!(
            substitute("{{parts_list}}", &ctx),
            "- PN1: Bracket\n- PN2: Actuator"
        );
    }

    #[test]
    fn mro_bullet_includes_location() {
        let ctx = ctx();
        assert_eq!(
            substitute("{{mro_list}}", &ctx),
            "- Engine Overhaul (Location: Dallas)"
        );
    }

    #[test]
    fn only_first_token_in_check_order_is_replaced() {
        let ctx = ctx();
        let rendered = substitute("{{aircraft_models}} {{parts_list}}", &ctx);
        assert_eq!(rendered, "737, 747 {{parts_list}}");
    }

    #[test]
    fn repeated_token_replaced_at_every_occurrence() {
        let ctx = ctx();
        let rendered = substitute("{{aircraft_models}} / {{aircraft_models}}", &ctx);
        assert_eq!(rendered, "737, 747 / 737, 747");
    }

    #[test]
    fn token_free_paragraph_passes_through() {
        let ctx = ctx();
        assert_eq!(substitute("About Us", &ctx), "About Us");
    }

    #[test]
    fn multiline_expansion_splits_into_paragraphs() {
        let ctx = ctx();
        let paragraphs = vec!["Parts".to_string(), "{{parts_list}}".to_string()];
        let rendered = render_paragraphs(&paragraphs, &ctx);
        assert_eq!(
            rendered,
            vec!["Parts", "- PN1: Bracket", "- PN2: Actuator"]
        );
    }

    #[test]
    fn rendered_document_snapshot() {
        let ctx = ctx();
        let paragraphs = vec![
            "Sales Collateral".to_string(),
            "Aircraft Models: {{aircraft_models}}".to_string(),
            "{{parts_list}}".to_string(),
            "{{mro_list}}".to_string(),
        ];
        let rendered = render_paragraphs(&paragraphs, &ctx).join("\n");
        insta::assert_snapshot!(rendered, @r"
        Sales Collateral
        Aircraft Models: 737, 747
        - PN1: Bracket
        - PN2: Actuator
        - Engine Overhaul (Location: Dallas)
        ");
    }

    #[test]
    fn empty_tables_render_empty_text() {
        let selection: SelectionSet = BTreeSet::from(["MD-11".to_string()]);
        let ctx = RenderContext::new(&selection, &[], &[]);
        assert_eq!(substitute("{{parts_list}}", &ctx), "");
        assert_eq!(substitute("{{mro_list}}", &ctx), "");
    }
}

//! Declaration text rendering.

use rowan::TextRange;

use crate::parser::{AstNode, ComputedName, Declaration, QualifiedName, SyntaxKind};

/// Render a declaration back to source text for its own unit.
///
/// The text comes straight from the lossless tree, so comments and layout
/// inside the declaration are kept. Every qualified name that starts with
/// `namespace` loses that first segment and its dot (`Prisma.User` becomes
/// `User`), and so does a dotted access at the head of a computed member key
/// (`[Prisma.sym]` becomes `[sym]`). Other identifiers and string literals
/// are never touched. A declaration that is not exported gets an `export`
/// modifier so the manifest re-export can see it.
pub fn render_declaration(declaration: &Declaration, namespace: Option<&str>) -> String {
    let stripped = namespace
        .map(|ns| qualifier_ranges(declaration, ns))
        .unwrap_or_default();

    let mut text = String::new();
    if !declaration.is_exported() {
        text.push_str("export ");
    }

    // Ranges are sorted and disjoint, so one cursor follows the token walk
    let mut pending = stripped.iter().peekable();
    for token in declaration
        .syntax()
        .descendants_with_tokens()
        .filter_map(|element| element.into_token())
    {
        let range = token.text_range();
        while pending.next_if(|skip| skip.end() <= range.start()).is_some() {}
        if pending.peek().is_some_and(|skip| skip.contains_range(range)) {
            continue;
        }
        text.push_str(token.text());
    }

    text
}

/// Ranges covering `<namespace> .` wherever the namespace qualifies a name, in source order
fn qualifier_ranges(declaration: &Declaration, namespace: &str) -> Vec<TextRange> {
    let mut ranges: Vec<TextRange> = declaration
        .descendants::<QualifiedName>()
        .filter(|name| name.is_qualified())
        .filter_map(|name| qualified_name_range(&name, namespace))
        .collect();
    for key in declaration.descendants::<ComputedName>() {
        ranges.extend(computed_key_ranges(&key, namespace));
    }

    ranges.sort_unstable_by_key(|range| range.start());
    ranges
}

fn qualified_name_range(name: &QualifiedName, namespace: &str) -> Option<TextRange> {
    if name.first_segment()? != namespace {
        return None;
    }
    let first = name.segment_tokens().next()?;
    let dot = name
        .syntax()
        .children_with_tokens()
        .filter_map(|element| element.into_token())
        .find(|t| t.kind() == SyntaxKind::DOT)?;
    Some(TextRange::new(
        first.text_range().start(),
        dot.text_range().end(),
    ))
}

/// `<namespace> .` at the head of each dotted access inside a computed key.
/// A namespace-named identifier after a dot (`x.Prisma.y`) is a property, not a qualifier.
fn computed_key_ranges(key: &ComputedName, namespace: &str) -> Vec<TextRange> {
    let tokens: Vec<_> = key.key_tokens().collect();
    tokens
        .iter()
        .enumerate()
        .filter_map(|(i, token)| {
            if !token.kind().is_name_token() || token.text() != namespace {
                return None;
            }
            let after_dot = i > 0 && tokens[i - 1].kind() == SyntaxKind::DOT;
            let dot = tokens.get(i + 1).filter(|t| t.kind() == SyntaxKind::DOT)?;
            (!after_dot).then(|| TextRange::new(token.text_range().start(), dot.text_range().end()))
        })
        .collect()
}

//! Textual representation body synthesis.

use rill_ir::StringInterner;

use crate::body::{Body, Expr, Stmt};
use crate::shape::{ContainingType, RecordShape};

/// Body of the textual representation:
///
/// ```text
/// return format_invariant("<TypeName> {{ a = {0}, b = \"{1}\" }}",
///                         this.<backing_0> as any,
///                         this.<backing_1> as any)
/// ```
///
/// Template and argument list are built in one pass over the shape. A
/// member whose declared type is exactly `str` gets its placeholder wrapped
/// in literal double quotes; every other type renders bare. This is the one
/// synthesizer whose output depends on a member's static type.
///
/// With no positional members the template renders `<TypeName> { }`, the
/// same bracket style as the populated case.
pub(super) fn synthesize(
    containing: &ContainingType,
    shape: &RecordShape,
    interner: &StringInterner,
) -> Body {
    // Literal braces are escaped for the formatting service.
    let mut template = String::new();
    template.push_str(interner.lookup(containing.name));
    template.push_str(" {{");

    let mut args = Vec::with_capacity(shape.len());
    for entry in shape.entries() {
        if entry.index == 0 {
            template.push(' ');
        } else {
            template.push_str(", ");
        }
        template.push_str(interner.lookup(entry.name));
        template.push_str(" = ");
        if entry.ty.is_str() {
            template.push_str(&format!("\"{{{}}}\"", entry.index));
        } else {
            template.push_str(&format!("{{{}}}", entry.index));
        }

        args.push(Expr::WidenToAny(Box::new(Expr::this_field(entry.index))));
    }

    template.push_str(" }}");

    Body::new([Stmt::Return(Some(Expr::FormatInvariant { template, args }))])
}

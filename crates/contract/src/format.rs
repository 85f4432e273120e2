use std::fmt;
use std::fmt::Write as _;

/// Substitute `%s` placeholders in `template` with `args`, in order.
///
/// Surplus arguments are appended in square brackets; surplus placeholders
/// are left in the output verbatim. The function never fails, which is the
/// point: it runs while building an error message, and a malformed template
/// must not mask the underlying violation.
#[must_use]
pub fn lenient_format(template: &str, args: &[&dyn fmt::Display]) -> String {
    let mut builder = String::with_capacity(template.len() + 16 * args.len());
    let mut rest = template;
    let mut consumed = 0;

    while consumed < args.len() {
        let Some(placeholder) = rest.find("%s") else {
            break;
        };
        builder.push_str(&rest[..placeholder]);
        let _ = write!(builder, "{}", args[consumed]);
        consumed += 1;
        rest = &rest[placeholder + 2..];
    }
    builder.push_str(rest);

    if consumed < args.len() {
        builder.push_str(" [");
        let _ = write!(builder, "{}", args[consumed]);
        consumed += 1;
        while consumed < args.len() {
            builder.push_str(", ");
            let _ = write!(builder, "{}", args[consumed]);
            consumed += 1;
        }
        builder.push(']');
    }

    builder
}

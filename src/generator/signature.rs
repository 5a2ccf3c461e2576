use crate::model::ActionMethodMeta;
use anyhow::bail;

/// A rendered call-site example for one action method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationExample {
    /// Action method name
    pub action: String,
    /// The complete invocation line, without a trailing line terminator
    pub line: String,
}

/// Render the canonical invocation example for one action method.
///
/// The line has a fixed shape:
///
/// ```text
/// [<PayloadType> result = ]await new <controller>().<Action>(myA, myB);
/// ```
///
/// - The result prefix appears only when the action has a payload type; a
///   fire-and-forget action renders no result variable at all.
/// - Each parameter becomes a call-site placeholder: its declared name
///   prefixed with `my`, in declaration order, joined by `", "`. Zero
///   parameters render an empty argument list.
///
/// Rendering is pure and deterministic; the same descriptor always yields the
/// same line.
///
/// # Errors
///
/// Returns an error if the action or controller name is empty. That is an
/// upstream metadata defect: without a callable name there is no usable
/// example, and substituting a default would silently corrupt documentation
/// that developers copy-paste into client code.
pub fn render_invocation(
    action: &ActionMethodMeta,
    controller: &str,
) -> anyhow::Result<InvocationExample> {
    if controller.is_empty() {
        bail!("cannot render an invocation example for an unnamed controller");
    }
    if action.name.is_empty() {
        bail!("action method on `{controller}` has an empty name");
    }

    let mut line = String::new();
    if let Some(return_type) = &action.return_type {
        line.push_str(return_type);
        line.push_str(" result = ");
    }
    line.push_str("await new ");
    line.push_str(controller);
    line.push_str("().");
    line.push_str(&action.name);
    line.push('(');
    let args: Vec<String> = action
        .parameters
        .iter()
        .map(|p| format!("my{}", p.name))
        .collect();
    line.push_str(&args.join(", "));
    line.push_str(");");

    Ok(InvocationExample {
        action: action.name.clone(),
        line,
    })
}

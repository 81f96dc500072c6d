//! Rule sets applied by `reduce_node`
//!
//! Each rule inspects one freshly built node and returns `Some(replacement)`
//! when it applies, `None` otherwise. `None` from every rule leaves the
//! node as built.

/// Constant folding of numeric operands
pub(crate) mod numeric;

/// Sum and subtraction identities
pub(crate) mod additive;

/// Exponent merging across nested products and quotients
pub(crate) mod multiply_division;

/// Power identities
pub(crate) mod power;

/// Special angles of sine and cosine
pub(crate) mod trigonometric;

//! Base-type to zod validator mapping for generated input schemas

use mcpgen_core::ParameterType;

/// Coarse category of a declared base type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeCategory {
    /// `uint*` / `int*`
    Integer,
    /// `fixed*` / `ufixed*`
    Decimal,
    /// `bool`
    Boolean,
    /// `address`, `string`, `bytes`, `bytesN`, `function`
    Text,
    /// Structured type with components
    Tuple,
    /// Anything unrecognised; validated as a string
    Unknown,
}

impl TypeCategory {
    /// Classify a full parameter type, taking components into account
    pub fn of(ty: &ParameterType) -> Self {
        if ty.is_tuple() {
            TypeCategory::Tuple
        } else {
            Self::classify(&ty.base_type)
        }
    }

    /// Classify a bare base type string
    pub fn classify(base_type: &str) -> Self {
        let base = base_type.trim();

        if base == "bool" {
            return TypeCategory::Boolean;
        }
        if matches!(base, "address" | "string" | "function") {
            return TypeCategory::Text;
        }
        if let Some(width) = base.strip_prefix("bytes") {
            if is_digits(width) {
                return TypeCategory::Text;
            }
        }
        if let Some(width) = base.strip_prefix("uint").or_else(|| base.strip_prefix("int")) {
            if is_digits(width) {
                return TypeCategory::Integer;
            }
        }
        if let Some(suffix) = base.strip_prefix("ufixed").or_else(|| base.strip_prefix("fixed")) {
            if suffix.is_empty() || is_fixed_suffix(suffix) {
                return TypeCategory::Decimal;
            }
        }

        TypeCategory::Unknown
    }

    /// Zod expression for a scalar of this category
    ///
    /// Tuples have no scalar form and are expanded by [`zod_type`].
    pub fn zod_scalar(self) -> &'static str {
        match self {
            TypeCategory::Integer | TypeCategory::Decimal => "z.number()",
            TypeCategory::Boolean => "z.boolean()",
            TypeCategory::Text | TypeCategory::Tuple | TypeCategory::Unknown => "z.string()",
        }
    }
}

/// Digits only, including the empty string (`uint` == `uint256`)
fn is_digits(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_digit())
}

/// `MxN` suffix of `fixedMxN`
fn is_fixed_suffix(s: &str) -> bool {
    match s.split_once('x') {
        Some((m, n)) => !m.is_empty() && !n.is_empty() && is_digits(m) && is_digits(n),
        None => false,
    }
}

/// Full zod expression for a parameter type
///
/// Tuples become `z.object`, maps `z.record`, and every array dimension wraps
/// the element innermost first; fixed dimensions add `.length(N)`.
pub fn zod_type(ty: &ParameterType) -> String {
    let mut expr = match TypeCategory::of(ty) {
        TypeCategory::Tuple => {
            let fields: Vec<String> = ty
                .components
                .iter()
                .enumerate()
                .map(|(i, c)| format!("{}: {}", field_name(&c.name, i), zod_type(&c.ty)))
                .collect();
            format!("z.object({{ {} }})", fields.join(", "))
        }
        category => category.zod_scalar().to_string(),
    };

    if ty.is_map {
        expr = format!("z.record(z.string(), {})", expr);
    }

    for size in &ty.chain_data.inner_dimensions {
        expr = wrap_array(expr, *size);
    }
    if ty.is_array {
        expr = wrap_array(expr, ty.array_size);
    }

    expr
}

fn wrap_array(element: String, size: i64) -> String {
    if size > 0 {
        format!("z.array({}).length({})", element, size)
    } else {
        format!("z.array({})", element)
    }
}

/// Identifier used for a parameter in schemas and call arguments
///
/// Unnamed parameters become `arg<i>` by position.
pub fn field_name(name: &str, index: usize) -> String {
    let name = name.trim();
    if name.is_empty() {
        format!("arg{}", index)
    } else {
        name.to_string()
    }
}

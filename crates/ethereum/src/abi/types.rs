//! Resolution of declared ABI type strings into IR type descriptors

use mcpgen_core::{Error, Parameter, ParameterType, Result, TypeChainData};

use super::parser::AbiParameter;

/// Resolve a list of declared parameters
pub fn resolve_parameters(params: &[AbiParameter]) -> Result<Vec<Parameter>> {
    params
        .iter()
        .map(|param| {
            Ok(Parameter::new(
                param.name(),
                resolve_type(&param.param_type, param.components.as_deref())?,
            ))
        })
        .collect()
}

/// Resolve one declared type string plus its optional tuple components
pub fn resolve_type(type_str: &str, components: Option<&[AbiParameter]>) -> Result<ParameterType> {
    let (base, dimensions) = split_dimensions(type_str)?;

    let mut ty = ParameterType::scalar(base);

    if let Some((&outer, inner)) = dimensions.split_last() {
        ty.is_array = true;
        ty.array_size = outer;
        ty.chain_data.inner_dimensions = inner.to_vec();
    }

    if ty.base_type == "tuple" {
        if let Some(components) = components {
            ty.components = resolve_parameters(components)?;
            ty.chain_data.is_tuple = true;
            ty.chain_data.type_description = Some(describe_tuple(&ty.components));
        }
    }

    if let Some((key, value)) = split_mapping(&ty.base_type) {
        ty.is_map = true;
        ty.map_key_type = key;
        ty.base_type = value;
    }

    record_array_metadata(&mut ty);
    Ok(ty)
}

/// Split trailing `[N]` / `[]` suffixes off a type string.
///
/// Returns the base type and the dimensions innermost first, with 0 for
/// dynamic dimensions. Any malformed bracket is an error naming the full type.
fn split_dimensions(type_str: &str) -> Result<(&str, Vec<i64>)> {
    let mut rest = type_str;
    let mut dimensions = Vec::new();

    while let Some(head) = rest.strip_suffix(']') {
        let open = head
            .rfind('[')
            .ok_or_else(|| Error::type_resolution(type_str, "unbalanced array brackets"))?;
        let token = &head[open + 1..];

        let size = if token.is_empty() {
            0
        } else {
            let size: i64 = token.trim().parse().map_err(|_| {
                Error::type_resolution(type_str, format!("invalid array size: {}", token))
            })?;
            if size < 0 {
                return Err(Error::type_resolution(
                    type_str,
                    format!("array size must be non-negative: {}", token),
                ));
            }
            size
        };

        dimensions.push(size);
        rest = &head[..open];
    }

    // Brackets left over outside a mapping value mean a malformed suffix
    if !is_mapping(rest) && (rest.contains('[') || rest.contains(']')) {
        return Err(Error::type_resolution(type_str, "unbalanced array brackets"));
    }

    dimensions.reverse();
    Ok((rest, dimensions))
}

fn is_mapping(base: &str) -> bool {
    base.starts_with("mapping(") && base.ends_with(')')
}

/// Split `mapping(K => V)` into its key and value types.
///
/// EVM ABIs never emit this form; the split is kept as a hook for artifact
/// formats that do. The split happens at the first `=>`, so nested mapping
/// values stay intact in the value type.
fn split_mapping(base: &str) -> Option<(String, String)> {
    let inner = base.strip_prefix("mapping(")?.strip_suffix(')')?;
    let (key, value) = inner.split_once("=>")?;
    Some((key.trim().to_string(), value.trim().to_string()))
}

/// Shape of a tuple for consumers that do not walk components,
/// e.g. `{name: string, scores: uint256[3]}`
fn describe_tuple(components: &[Parameter]) -> String {
    let fields: Vec<String> = components
        .iter()
        .map(|c| {
            let ty = if c.ty.is_array {
                c.ty.display_type()
            } else {
                c.ty.base_type.clone()
            };
            format!("{}: {}", c.name, ty)
        })
        .collect();
    format!("{{{}}}", fields.join(", "))
}

fn record_array_metadata(ty: &mut ParameterType) {
    if !ty.is_array {
        return;
    }

    let chain_data: &mut TypeChainData = &mut ty.chain_data;
    chain_data.is_array = true;
    if ty.array_size > 0 {
        chain_data.is_fixed_array = true;
        chain_data.array_size = Some(ty.array_size);
    } else {
        chain_data.is_dynamic_array = true;
    }
}

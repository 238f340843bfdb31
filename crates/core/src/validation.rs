/// Structural validation of the contract IR
///
/// Validation never fails fast: every rule is checked depth-first and all
/// findings are returned together, each tagged with the path of the offending
/// field (e.g. `Functions[2].Inputs[0].Type.BaseType`).
use std::collections::HashMap;
use std::fmt;

use crate::ir::{
    ContractError, ContractIR, ContractMetadata, CustomType, Event, EventParameter, Function,
    Parameter, ParameterType, SourceInfo, StateMutability, Visibility,
};

/// A structural defect found in the IR
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Path of the offending field
    pub field: String,
    /// Human-readable message
    pub message: String,
}

impl ValidationError {
    fn new<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn prefixed(mut self, prefix: &str) -> Self {
        self.field = format!("{}.{}", prefix, self.field);
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// All findings of one validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Findings in depth-first declaration order
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    /// No findings
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of findings
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether there are no findings
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  - {}", error)?;
        }
        Ok(())
    }
}

impl From<Vec<ValidationError>> for ValidationReport {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }
}

/// Anything in the IR that can check itself
pub trait Validate {
    /// Return every finding for this node and its children
    fn validate(&self) -> Vec<ValidationError>;
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Validate each item of a list, prefixing findings with `Label[i]`
fn validate_each<T: Validate>(label: &str, items: &[T], errors: &mut Vec<ValidationError>) {
    for (i, item) in items.iter().enumerate() {
        let prefix = format!("{}[{}]", label, i);
        errors.extend(item.validate().into_iter().map(|e| e.prefixed(&prefix)));
    }
}

/// Report every name that repeats an earlier one in the same list
fn check_unique_names<'a, I>(label: &str, kind: &str, names: I, errors: &mut Vec<ValidationError>)
where
    I: IntoIterator<Item = &'a str>,
{
    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    for (i, name) in names.into_iter().enumerate() {
        if is_blank(name) {
            continue;
        }
        if let Some(first) = first_seen.get(name) {
            errors.push(ValidationError::new(
                format!("{}[{}].Name", label, i),
                format!("duplicate {} name '{}' (first at {}[{}])", kind, name, label, first),
            ));
        } else {
            first_seen.insert(name, i);
        }
    }
}

impl ContractIR {
    /// Validate the whole contract and collect findings into a report
    pub fn validation_report(&self) -> ValidationReport {
        ValidationReport::from(Validate::validate(self))
    }
}

impl Validate for ContractIR {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = self.metadata.validate();
        validate_each("Functions", &self.functions, &mut errors);
        check_unique_names(
            "Functions",
            "function",
            self.functions.iter().map(|f| f.name.as_str()),
            &mut errors,
        );
        validate_each("Events", &self.events, &mut errors);
        check_unique_names(
            "Events",
            "event",
            self.events.iter().map(|e| e.name.as_str()),
            &mut errors,
        );
        validate_each("Errors", &self.errors, &mut errors);
        validate_each("Types", &self.types, &mut errors);
        errors
    }
}

impl Validate for ContractMetadata {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if is_blank(&self.name) {
            errors.push(ValidationError::new("Name", "contract name is required"));
        }
        if is_blank(&self.chain) {
            errors.push(ValidationError::new("Chain", "chain identifier is required"));
        }
        if let Some(source) = &self.source {
            errors.extend(source.validate().into_iter().map(|e| e.prefixed("Source")));
        }

        errors
    }
}

impl Validate for SourceInfo {
    fn validate(&self) -> Vec<ValidationError> {
        if is_blank(&self.language) {
            vec![ValidationError::new(
                "Language",
                "programming language is required",
            )]
        } else {
            Vec::new()
        }
    }
}

impl Validate for Function {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if is_blank(&self.name) {
            errors.push(ValidationError::new("Name", "function name is required"));
        }

        validate_each("Inputs", &self.inputs, &mut errors);
        validate_each("Outputs", &self.outputs, &mut errors);

        match &self.state_mutability {
            StateMutability::Other(value) if value.is_empty() => {
                errors.push(ValidationError::new(
                    "StateMutability",
                    "state mutability is required",
                ));
            }
            StateMutability::Other(value) => {
                errors.push(ValidationError::new(
                    "StateMutability",
                    format!("invalid state mutability: {}", value),
                ));
            }
            _ => {}
        }

        // An empty visibility string means "not set"
        if let Some(Visibility::Other(value)) = &self.visibility {
            if !value.is_empty() {
                errors.push(ValidationError::new(
                    "Visibility",
                    format!("invalid visibility: {}", value),
                ));
            }
        }

        errors
    }
}

impl Validate for Event {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if is_blank(&self.name) {
            errors.push(ValidationError::new("Name", "event name is required"));
        }
        validate_each("Parameters", &self.parameters, &mut errors);

        errors
    }
}

impl Validate for EventParameter {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if is_blank(&self.name) {
            errors.push(ValidationError::new("Name", "parameter name is required"));
        }
        errors.extend(self.ty.validate().into_iter().map(|e| e.prefixed("Type")));

        errors
    }
}

impl Validate for Parameter {
    fn validate(&self) -> Vec<ValidationError> {
        self.ty
            .validate()
            .into_iter()
            .map(|e| e.prefixed("Type"))
            .collect()
    }
}

impl Validate for ParameterType {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if is_blank(&self.base_type) {
            errors.push(ValidationError::new("BaseType", "base type is required"));
        }
        if self.is_array && self.array_size < 0 {
            errors.push(ValidationError::new(
                "ArraySize",
                "array size must be non-negative (0 for dynamic arrays)",
            ));
        }
        if self.is_map && is_blank(&self.map_key_type) {
            errors.push(ValidationError::new(
                "MapKeyType",
                "map key type is required for maps",
            ));
        }
        validate_each("Components", &self.components, &mut errors);

        errors
    }
}

impl Validate for ContractError {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if is_blank(&self.name) {
            errors.push(ValidationError::new("Name", "error name is required"));
        }
        validate_each("Parameters", &self.parameters, &mut errors);

        errors
    }
}

impl Validate for CustomType {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if is_blank(&self.name) {
            errors.push(ValidationError::new("Name", "type name is required"));
        }
        validate_each("Fields", &self.fields, &mut errors);

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::SourceInfo;

    fn valid_contract() -> ContractIR {
        let mut transfer = Function::new("transfer", StateMutability::Nonpayable);
        transfer.visibility = Some(Visibility::Public);
        transfer.inputs = vec![
            Parameter::new("to", ParameterType::scalar("address")),
            Parameter::new("amount", ParameterType::scalar("uint256")),
        ];

        ContractIR {
            metadata: ContractMetadata::new("Token", "ethereum"),
            functions: vec![transfer],
            events: vec![Event {
                name: "Transfer".to_string(),
                parameters: vec![EventParameter {
                    name: "from".to_string(),
                    ty: ParameterType::scalar("address"),
                    indexed: true,
                }],
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    fn fields(errors: &[ValidationError]) -> Vec<&str> {
        errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn test_valid_contract_has_no_findings() {
        let contract = valid_contract();
        assert!(contract.validation_report().is_valid());
    }

    #[test]
    fn test_four_independent_defects_yield_four_findings() {
        let mut contract = valid_contract();
        contract.metadata.name = String::new();
        contract.metadata.chain = String::new();
        contract.functions[0].name = String::new();
        contract.functions[0].state_mutability = StateMutability::from("mutable");

        let errors = Validate::validate(&contract);
        assert_eq!(
            fields(&errors),
            vec![
                "Name",
                "Chain",
                "Functions[0].Name",
                "Functions[0].StateMutability"
            ]
        );
        assert_eq!(errors[3].message, "invalid state mutability: mutable");
    }

    #[test]
    fn test_empty_state_mutability_is_required() {
        let mut contract = valid_contract();
        contract.functions[0].state_mutability = StateMutability::from("");

        let errors = Validate::validate(&contract);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(), "Functions[0].StateMutability: state mutability is required");
    }

    #[test]
    fn test_visibility_rules() {
        let mut contract = valid_contract();
        contract.functions[0].visibility = Some(Visibility::from("protected"));
        assert_eq!(fields(&Validate::validate(&contract)), vec!["Functions[0].Visibility"]);

        contract.functions[0].visibility = Some(Visibility::from(""));
        assert!(Validate::validate(&contract).is_empty());

        contract.functions[0].visibility = None;
        assert!(Validate::validate(&contract).is_empty());
    }

    #[test]
    fn test_nested_type_paths() {
        let mut contract = valid_contract();
        contract.functions[0].inputs[1].ty.base_type = " ".to_string();

        let mut inner = ParameterType::fixed_array("uint8", -1);
        inner.is_map = true;
        let mut tuple = ParameterType::scalar("tuple");
        tuple.components = vec![Parameter::new("bad", inner)];
        contract.functions[0].outputs = vec![Parameter::new("", tuple)];

        let errors = Validate::validate(&contract);
        assert_eq!(
            fields(&errors),
            vec![
                "Functions[0].Inputs[1].Type.BaseType",
                "Functions[0].Outputs[0].Type.Components[0].Type.ArraySize",
                "Functions[0].Outputs[0].Type.Components[0].Type.MapKeyType",
            ]
        );
    }

    #[test]
    fn test_duplicate_names_are_reported() {
        let mut contract = valid_contract();
        contract
            .functions
            .push(Function::new("approve", StateMutability::Nonpayable));
        contract
            .functions
            .push(Function::new("transfer", StateMutability::Nonpayable));
        contract.events.push(contract.events[0].clone());

        let errors = Validate::validate(&contract);
        assert_eq!(fields(&errors), vec!["Functions[2].Name", "Events[1].Name"]);
        assert_eq!(
            errors[0].message,
            "duplicate function name 'transfer' (first at Functions[0])"
        );
    }

    #[test]
    fn test_array_size_ignored_when_not_array() {
        let mut contract = valid_contract();
        contract.functions[0].inputs[0].ty.array_size = -5;
        assert!(Validate::validate(&contract).is_empty());
    }

    #[test]
    fn test_events_errors_and_types() {
        let mut contract = valid_contract();
        contract.events[0].name = String::new();
        contract.events[0].parameters[0].name = String::new();
        contract.events[0].parameters[0].ty.base_type = String::new();
        contract.errors = vec![ContractError {
            name: String::new(),
            parameters: vec![Parameter::new("code", ParameterType::scalar(""))],
            ..Default::default()
        }];
        contract.types = vec![CustomType {
            name: "Point".to_string(),
            fields: vec![Parameter::new("x", ParameterType::scalar(""))],
            ..Default::default()
        }];
        contract.metadata.source = Some(SourceInfo::default());

        let errors = Validate::validate(&contract);
        assert_eq!(
            fields(&errors),
            vec![
                "Source.Language",
                "Events[0].Name",
                "Events[0].Parameters[0].Name",
                "Events[0].Parameters[0].Type.BaseType",
                "Errors[0].Name",
                "Errors[0].Parameters[0].Type.BaseType",
                "Types[0].Fields[0].Type.BaseType",
            ]
        );
    }

    #[test]
    fn test_report_display() {
        let mut contract = valid_contract();
        contract.metadata.name = String::new();
        contract.metadata.chain = String::new();

        let report = contract.validation_report();
        assert_eq!(report.len(), 2);
        assert_eq!(
            report.to_string(),
            "  - Name: contract name is required\n  - Chain: chain identifier is required"
        );
    }
}

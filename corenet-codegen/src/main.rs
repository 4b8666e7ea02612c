//! Model definition to Rust code generator
//!
//! This tool generates the Rust modules under corenet-models/src/generated
//! from the JSON model definitions in schemas/.
//!
//! Usage:
//!   # Generate from file
//!   corenet-codegen --file schemas/vnic_shape.json \
//!     -o corenet-models/src/generated/vnic_shape.rs
//!
//!   # Generate from stdin
//!   cat schemas/private_endpoint.json | corenet-codegen

use anyhow::{Context, Result, bail};
use clap::Parser;
use heck::{ToLowerCamelCase, ToPascalCase, ToSnakeCase};
use log::{debug, info};
use regex::Regex;
use serde::Deserialize;
use std::collections::{BTreeSet, HashMap};
use std::io::{self, Read};

/// Generated lines never exceed this width
const MAX_WIDTH: usize = 100;

const HEADER_NOTICE: &str = "//! DO NOT EDIT MANUALLY - regenerate with corenet-codegen";

/// Mandatory fields read JSON `null` as their default; `EnumValue` does this itself
const NULL_AS_DEFAULT: &str =
    "    #[serde(deserialize_with = \"corenet_core::de::null_as_default\")]\n";

/// Identifiers that need the raw `r#` prefix as field names
const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "box", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "static", "struct", "trait", "true", "type", "unsafe", "use",
    "where", "while", "yield",
];

#[derive(Parser, Debug)]
#[command(name = "corenet-codegen")]
#[command(about = "Generate Core Services API models from JSON definitions")]
struct Args {
    /// Input file (reads from stdin if not specified)
    #[arg(long)]
    file: Option<String>,

    /// Output file (writes to stdout if not specified)
    #[arg(long, short)]
    output: Option<String>,
}

/// A single definition file
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum Definition {
    Model(ModelDef),
    Enum(EnumDef),
}

#[derive(Debug, Deserialize)]
struct ModelDef {
    name: String,
    #[serde(default)]
    description: Option<String>,
    properties: Vec<PropertyDef>,
    /// Enumerations declared alongside the model
    #[serde(default)]
    enums: Vec<EnumDef>,
}

#[derive(Debug, Deserialize)]
struct EnumDef {
    name: String,
    #[serde(default)]
    description: Option<String>,
    /// Wire literals in declaration order
    values: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct PropertyDef {
    /// JSON name (e.g., "vnicShape")
    name: String,
    #[serde(default)]
    required: bool,
    #[serde(default)]
    description: Option<String>,
    #[serde(flatten)]
    prop_type: PropertyType,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
enum PropertyType {
    String,
    Boolean,
    Integer,
    Datetime,
    FreeformTags,
    DefinedTags,
    Enum {
        #[serde(rename = "ref")]
        ref_name: String,
    },
    Model {
        #[serde(rename = "ref")]
        ref_name: String,
    },
    Array {
        items: Box<PropertyType>,
    },
}

/// Imports a model module needs, collected while mapping property types
#[derive(Debug, Default)]
struct Imports {
    datetime: bool,
    enum_value: bool,
    freeform_tags: bool,
    defined_tags: bool,
    /// Enum and model types referenced by name
    refs: BTreeSet<String>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    run(&args)
}

fn run(args: &Args) -> Result<()> {
    // Read definition JSON
    let definition_json = if let Some(file_path) = &args.file {
        std::fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read file: {}", file_path))?
    } else {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        buffer
    };

    let definition: Definition =
        serde_json::from_str(&definition_json).context("Failed to parse model definition")?;

    let code = generate(&definition)?;

    if let Some(output_path) = &args.output {
        std::fs::write(output_path, &code)
            .with_context(|| format!("Failed to write to: {}", output_path))?;
        info!("Generated: {}", output_path);
    } else {
        print!("{}", code);
    }

    Ok(())
}

/// Generate the module for one definition and check that it parses
fn generate(definition: &Definition) -> Result<String> {
    let code = match definition {
        Definition::Model(model) => generate_model_code(model)?,
        Definition::Enum(enum_def) => generate_enum_module(enum_def)?,
    };
    syn::parse_file(&code).context("Generated code is not valid Rust")?;
    Ok(code)
}

fn generate_enum_module(enum_def: &EnumDef) -> Result<String> {
    info!("Generating enum {}", enum_def.name);
    let mut code = String::new();
    code.push_str(&format!(
        "//! {} enumeration for the Core Services API\n//!\n{}\n\n",
        enum_def.name, HEADER_NOTICE
    ));
    code.push_str("use corenet_core::string_enum;\n\n");
    code.push_str(&generate_enum_block(enum_def)?);
    Ok(code)
}

fn generate_model_code(model: &ModelDef) -> Result<String> {
    info!("Generating model {}", model.name);
    if model.properties.is_empty() {
        bail!("Model {} has no properties", model.name);
    }

    let mut imports = Imports::default();
    let mut fields = Vec::new();
    let mut checks = Vec::new();
    let mut seen = HashMap::new();

    for prop in &model.properties {
        let field_name = field_ident(&prop.name);
        if let Some(previous) = seen.insert(field_name.clone(), prop.name.as_str()) {
            bail!(
                "Properties {} and {} of {} map to the same field {}",
                previous,
                prop.name,
                model.name,
                field_name
            );
        }

        let rust_type = rust_type(&prop.prop_type, &mut imports);
        debug!("{}.{}: {}", model.name, prop.name, rust_type);

        let mut field = String::new();
        if let Some(description) = &prop.description {
            field.push_str(&doc_comment(description, 4));
        }
        if field_name.trim_start_matches("r#").to_lower_camel_case() != prop.name {
            field.push_str(&format!("    #[serde(rename = \"{}\")]\n", prop.name));
        }
        if prop.required {
            if !matches!(prop.prop_type, PropertyType::Enum { .. }) {
                field.push_str(NULL_AS_DEFAULT);
            }
            field.push_str(&format!("    pub {}: {},\n", field_name, rust_type));
        } else {
            field.push_str("    #[serde(skip_serializing_if = \"Option::is_none\")]\n");
            field.push_str(&format!("    pub {}: Option<{}>,\n", field_name, rust_type));
        }
        fields.push(field);

        if let Some(check) = enum_check(prop, &field_name) {
            checks.push(check);
        }
    }

    let local_enums: BTreeSet<&str> = model.enums.iter().map(|e| e.name.as_str()).collect();
    let external: Vec<&str> = imports
        .refs
        .iter()
        .map(String::as_str)
        .filter(|name| !local_enums.contains(name))
        .collect();

    let mut code = String::new();

    // Header and imports
    code.push_str(&format!(
        "//! {} model for the Core Services API\n//!\n{}\n\n",
        model.name, HEADER_NOTICE
    ));
    code.push_str("use std::fmt;\n\n");
    if imports.datetime {
        code.push_str("use chrono::{DateTime, Utc};\n");
    }
    if imports.enum_value {
        code.push_str("use corenet_core::enums::EnumValue;\n");
    }
    code.push_str("use corenet_core::render;\n");
    if !model.enums.is_empty() {
        code.push_str("use corenet_core::string_enum;\n");
    }
    match (imports.defined_tags, imports.freeform_tags) {
        (true, true) => code.push_str("use corenet_core::tags::{DefinedTags, FreeformTags};\n"),
        (true, false) => code.push_str("use corenet_core::tags::DefinedTags;\n"),
        (false, true) => code.push_str("use corenet_core::tags::FreeformTags;\n"),
        (false, false) => {}
    }
    if checks.is_empty() {
        code.push_str("use corenet_core::validation::{EnumValidationError, ValidateEnumValue};\n");
    } else {
        code.push_str(
            "use corenet_core::validation::{EnumValidationError, EnumValidator, ValidateEnumValue};\n",
        );
    }
    code.push_str("use serde::{Deserialize, Serialize};\n");
    if !external.is_empty() {
        code.push('\n');
        code.push_str(&use_super(&external));
    }
    code.push('\n');

    // Struct
    if let Some(description) = &model.description {
        code.push_str(&doc_comment(description, 0));
    }
    code.push_str("#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]\n");
    code.push_str("#[serde(rename_all = \"camelCase\", default)]\n");
    code.push_str(&format!("pub struct {} {{\n", model.name));
    code.push_str(&fields.join("\n"));
    code.push_str("}\n\n");

    // Display
    code.push_str(&format!(
        r#"impl fmt::Display for {name} {{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {{
        render::fmt_record(f, "{name}", self)
    }}
}}

"#,
        name = model.name
    ));

    // Validation
    code.push_str(&format!("impl ValidateEnumValue for {} {{\n", model.name));
    code.push_str("    fn validate_enum_value(&self) -> Result<(), EnumValidationError> {\n");
    if checks.is_empty() {
        code.push_str("        Ok(())\n");
    } else {
        code.push_str("        EnumValidator::new()\n");
        for check in &checks {
            code.push_str(&format!("            {}\n", check));
        }
        code.push_str("            .finish()\n");
    }
    code.push_str("    }\n}\n");

    for enum_def in &model.enums {
        code.push('\n');
        code.push_str(&generate_enum_block(enum_def)?);
    }

    Ok(code)
}

/// Generate a `string_enum!` block, rejecting literals that cannot be declared
fn generate_enum_block(enum_def: &EnumDef) -> Result<String> {
    if enum_def.values.is_empty() {
        bail!("Enum {} has no values", enum_def.name);
    }

    let literal_re = Regex::new(r"^[A-Z][A-Z0-9_]*$")?;
    let mut variants: HashMap<String, &str> = HashMap::new();
    let mut arms = String::new();

    for literal in &enum_def.values {
        if !literal_re.is_match(literal) {
            bail!("Invalid literal {:?} in enum {}", literal, enum_def.name);
        }
        let variant = variant_name(literal);
        if let Some(previous) = variants.insert(variant.clone(), literal) {
            bail!(
                "Literals {} and {} of enum {} both map to variant {}",
                previous,
                literal,
                enum_def.name,
                variant
            );
        }
        arms.push_str(&format!("        {} => \"{}\",\n", variant, literal));
    }
    debug!("{}: {} values", enum_def.name, enum_def.values.len());

    let mut code = String::from("string_enum! {\n");
    if let Some(description) = &enum_def.description {
        code.push_str(&doc_comment(description, 4));
    }
    code.push_str(&format!("    pub enum {} {{\n", enum_def.name));
    code.push_str(&arms);
    code.push_str("    }\n}\n");
    Ok(code)
}

/// Map a property type to its Rust type, recording the imports it needs
fn rust_type(prop_type: &PropertyType, imports: &mut Imports) -> String {
    match prop_type {
        PropertyType::String => "String".to_string(),
        PropertyType::Boolean => "bool".to_string(),
        PropertyType::Integer => "i64".to_string(),
        PropertyType::Datetime => {
            imports.datetime = true;
            "DateTime<Utc>".to_string()
        }
        PropertyType::FreeformTags => {
            imports.freeform_tags = true;
            "FreeformTags".to_string()
        }
        PropertyType::DefinedTags => {
            imports.defined_tags = true;
            "DefinedTags".to_string()
        }
        PropertyType::Enum { ref_name } => {
            imports.enum_value = true;
            imports.refs.insert(ref_name.clone());
            format!("EnumValue<{}>", ref_name)
        }
        PropertyType::Model { ref_name } => {
            imports.refs.insert(ref_name.clone());
            ref_name.clone()
        }
        PropertyType::Array { items } => format!("Vec<{}>", rust_type(items, imports)),
    }
}

/// Validator call for an enum-typed property, if it is one
///
/// Diagnostics name the field by its PascalCase JSON name.
fn enum_check(prop: &PropertyDef, field_name: &str) -> Option<String> {
    let label = prop.name.to_pascal_case();
    match &prop.prop_type {
        PropertyType::Enum { .. } if prop.required => Some(format!(
            ".check(\"{}\", Some(&self.{}))",
            label, field_name
        )),
        PropertyType::Enum { .. } => Some(format!(
            ".check(\"{}\", self.{}.as_ref())",
            label, field_name
        )),
        PropertyType::Array { items } if matches!(**items, PropertyType::Enum { .. }) => {
            if prop.required {
                Some(format!(".check_each(\"{}\", &self.{})", label, field_name))
            } else {
                Some(format!(
                    ".check_each(\"{}\", self.{}.as_deref().unwrap_or_default())",
                    label, field_name
                ))
            }
        }
        _ => None,
    }
}

/// "FIXED0120_2X" -> "Fixed01202x"
fn variant_name(literal: &str) -> String {
    literal.to_pascal_case()
}

/// "isBmVnic" -> "is_bm_vnic", escaping keywords
fn field_ident(json_name: &str) -> String {
    let snake = json_name.to_snake_case();
    if RUST_KEYWORDS.contains(&snake.as_str()) {
        format!("r#{}", snake)
    } else {
        snake
    }
}

/// `use super::...;` for referenced types, wrapped the way rustfmt does
fn use_super(names: &[&str]) -> String {
    if let [name] = names {
        return format!("use super::{};\n", name);
    }
    let line = format!("use super::{{{}}};\n", names.join(", "));
    if line.len() - 1 <= MAX_WIDTH {
        return line;
    }

    let mut code = String::from("use super::{\n");
    let mut current = String::new();
    for name in names {
        let piece = format!("{},", name);
        if current.is_empty() {
            current = piece;
        } else if 4 + current.len() + 1 + piece.len() <= MAX_WIDTH {
            current.push(' ');
            current.push_str(&piece);
        } else {
            code.push_str(&format!("    {}\n", current));
            current = piece;
        }
    }
    code.push_str(&format!("    {}\n}};\n", current));
    code
}

/// Word-wrap `text` into `///` lines at the given indentation
fn doc_comment(text: &str, indent: usize) -> String {
    let width = MAX_WIDTH - indent - 4;
    let prefix = format!("{}/// ", " ".repeat(indent));
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines
        .iter()
        .map(|line| format!("{}{}\n", prefix, line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Definition {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_variant_name() {
        assert_eq!(variant_name("DYNAMIC"), "Dynamic");
        assert_eq!(variant_name("FIXED0060_PSM"), "Fixed0060Psm");
        assert_eq!(variant_name("FIXED0120_2X"), "Fixed01202x");
        assert_eq!(variant_name("DYNAMIC_E4_50G"), "DynamicE450g");
        assert_eq!(variant_name("ENTIREHOST_X9_50G"), "EntirehostX950g");
        assert_eq!(variant_name("SOCI_EGRESS"), "SociEgress");
    }

    #[test]
    fn test_field_ident() {
        assert_eq!(field_ident("isBmVnic"), "is_bm_vnic");
        assert_eq!(
            field_ident("reverseConnectionNatIpCidrs"),
            "reverse_connection_nat_ip_cidrs"
        );
        assert_eq!(field_ident("id"), "id");
        assert_eq!(field_ident("type"), "r#type");
    }

    #[test]
    fn test_doc_comment_wraps_at_width() {
        let text = "word ".repeat(40);
        let doc = doc_comment(&text, 4);
        assert!(doc.lines().count() > 1);
        for line in doc.lines() {
            assert!(line.starts_with("    /// "));
            assert!(line.len() <= MAX_WIDTH);
        }
        assert_eq!(doc_comment("Short.", 0), "/// Short.\n");
    }

    #[test]
    fn test_use_super_wraps_long_lists() {
        assert_eq!(use_super(&["VnicShape"]), "use super::VnicShape;\n");
        assert_eq!(use_super(&["A", "B"]), "use super::{A, B};\n");
        let wrapped = use_super(&[
            "DefaultDnsContextTransport",
            "DefaultDnsResolutionContext",
            "ProxyType",
            "ReverseConnectionsSourceIpDetails",
        ]);
        assert_eq!(
            wrapped,
            "use super::{\n    DefaultDnsContextTransport, DefaultDnsResolutionContext, ProxyType,\n    \
             ReverseConnectionsSourceIpDetails,\n};\n"
        );
    }

    #[test]
    fn test_generate_enum_module() {
        let definition = parse(
            r#"{"kind": "enum", "name": "Transport", "description": "Transport.",
                "values": ["TCP", "UDP"]}"#,
        );
        let code = generate(&definition).unwrap();
        assert!(code.starts_with("//! Transport enumeration for the Core Services API\n"));
        assert!(code.contains(HEADER_NOTICE));
        assert!(code.contains(
            "string_enum! {\n    /// Transport.\n    pub enum Transport {\n        \
             Tcp => \"TCP\",\n        Udp => \"UDP\",\n    }\n}\n"
        ));
    }

    #[test]
    fn test_generate_model() {
        let definition = parse(
            r#"{
                "kind": "model",
                "name": "UpdateWidgetDetails",
                "description": "Request body for updating a widget.",
                "properties": [
                    {"name": "widgetId", "type": "string", "required": true},
                    {"name": "shape", "type": "enum", "ref": "WidgetShape", "required": true},
                    {"name": "modes", "type": "array", "items": {"type": "enum", "ref": "Mode"}},
                    {"name": "owner", "type": "model", "ref": "Owner"},
                    {"name": "freeformTags", "type": "freeformTags"},
                    {"name": "timeCreated", "type": "datetime"}
                ],
                "enums": [{"name": "Mode", "values": ["FAST", "SLOW"]}]
            }"#,
        );
        let code = generate(&definition).unwrap();

        assert!(code.contains("use chrono::{DateTime, Utc};\n"));
        assert!(code.contains("use corenet_core::tags::FreeformTags;\n"));
        assert!(code.contains("use super::{Owner, WidgetShape};\n"));
        assert!(!code.contains("use super::{Mode"));
        assert!(code.contains("/// Request body for updating a widget.\n"));
        assert!(code.contains("    pub widget_id: String,\n"));
        assert!(code.contains("    pub shape: EnumValue<WidgetShape>,\n"));
        assert!(code.contains(
            "    #[serde(skip_serializing_if = \"Option::is_none\")]\n    \
             pub modes: Option<Vec<EnumValue<Mode>>>,\n"
        ));
        assert!(code.contains("    pub owner: Option<Owner>,\n"));
        assert!(code.contains("    pub time_created: Option<DateTime<Utc>>,\n"));
        assert!(code.contains(
            "        EnumValidator::new()\n            \
             .check(\"Shape\", Some(&self.shape))\n            \
             .check_each(\"Modes\", self.modes.as_deref().unwrap_or_default())\n            \
             .finish()\n"
        ));
        assert!(code.contains("        Fast => \"FAST\",\n"));
    }

    #[test]
    fn test_model_without_enums_validates_trivially() {
        let definition = parse(
            r#"{"kind": "model", "name": "SourceIp",
                "properties": [{"name": "sourceIp", "type": "string"}]}"#,
        );
        let code = generate(&definition).unwrap();
        assert!(
            code.contains("use corenet_core::validation::{EnumValidationError, ValidateEnumValue};")
        );
        assert!(!code.contains("EnumValidator::new()"));
        assert!(code.contains("        Ok(())\n"));
        assert!(!code.contains("use corenet_core::enums::EnumValue;"));
    }

    #[test]
    fn test_rejects_invalid_literal() {
        let definition = parse(r#"{"kind": "enum", "name": "Mode", "values": ["FAST", "slow"]}"#);
        let err = generate(&definition).unwrap_err();
        assert!(err.to_string().contains("Invalid literal \"slow\""));
    }

    #[test]
    fn test_rejects_variant_collision() {
        let definition =
            parse(r#"{"kind": "enum", "name": "Mode", "values": ["FAST", "SLOW", "FAST"]}"#);
        let err = generate(&definition).unwrap_err();
        assert!(err.to_string().contains("both map to variant Fast"));
    }

    #[test]
    fn test_rejects_empty_enum() {
        let definition = parse(r#"{"kind": "enum", "name": "Mode", "values": []}"#);
        let err = generate(&definition).unwrap_err();
        assert_eq!(err.to_string(), "Enum Mode has no values");
    }

    #[test]
    fn test_checked_in_models_are_up_to_date() {
        let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("..");
        let schemas = std::fs::read_dir(root.join("schemas")).unwrap();
        let mut count = 0;
        for entry in schemas {
            let path = entry.unwrap().path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let stem = path.file_stem().unwrap().to_str().unwrap().to_string();
            let definition = parse(&std::fs::read_to_string(&path).unwrap());
            let generated = generate(&definition).unwrap();
            let module = root.join(format!("corenet-models/src/generated/{}.rs", stem));
            let checked_in = std::fs::read_to_string(module).unwrap();
            assert_eq!(generated, checked_in, "{} is stale", stem);
            count += 1;
        }
        assert_eq!(count, 9);
    }

    #[test]
    fn test_run_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("mode.json");
        let output = dir.path().join("mode.rs");
        std::fs::write(&input, r#"{"kind": "enum", "name": "Mode", "values": ["FAST"]}"#).unwrap();

        let args = Args {
            file: Some(input.to_string_lossy().into_owned()),
            output: Some(output.to_string_lossy().into_owned()),
        };
        run(&args).unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert!(syn::parse_file(&written).is_ok());
        assert!(written.contains("Fast => \"FAST\","));
    }

    #[test]
    fn test_run_reports_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("never.rs");
        let args = Args {
            file: Some(dir.path().join("missing.json").to_string_lossy().into_owned()),
            output: Some(output.to_string_lossy().into_owned()),
        };
        let err = run(&args).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read file: "));
        assert!(!output.exists());
    }

    #[test]
    fn test_required_fields_tolerate_null() {
        let definition = parse(
            r#"{"kind": "model", "name": "Widget", "properties": [
                {"name": "id", "type": "string", "required": true},
                {"name": "state", "type": "enum", "ref": "WidgetState", "required": true},
                {"name": "label", "type": "string"}
            ]}"#,
        );
        let code = generate(&definition).unwrap();
        assert!(code.contains(&format!("{}    pub id: String,\n", NULL_AS_DEFAULT)));
        assert!(code.contains("    pub state: EnumValue<WidgetState>,\n"));
        assert_eq!(code.matches("null_as_default").count(), 1);
    }
}

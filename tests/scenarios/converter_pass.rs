//! Scenario: Converters collected into the converter registry
//!
//! Journey: A bundle ships a JSON converter, an application adds its own
//! converters by tagging services, and a misconfigured service must stop
//! the build with a message naming it.
//!
//! Success Criteria:
//! - Every tagged converter lands under its `type`
//! - Missing `type` and missing contract are reported per service
//! - No registry service means nothing happens

use serde_json::json;
use wireup::{
    CompilerPass, ContainerBuilder, ConverterPass, Definition, RoleTag, ValidationError,
    WireupError,
};

use crate::common::*;

/// SCENARIO: Bundle and application converters are collected together.
#[test]
fn scenario_tagged_converters_registered() {
    init_tracing();
    let mut container = converter_container();
    container.set_definition("app.converter.csv", converter_definition("CsvConverter", "csv"));
    container.set_definition(
        "app.converter.json_lines",
        converter_definition("JsonLinesConverter", "json"),
    );

    ConverterPass::new().process(&mut container).unwrap();

    assert_eq!(
        container.definition("converter_registry").unwrap().argument(0),
        Some(&json!({
            "json": ["@converter.json", "@app.converter.json_lines"],
            "csv": ["@app.converter.csv"],
        }))
    );
}

/// SCENARIO: A converter tag without `type`.
#[test]
fn scenario_missing_type_names_the_service() {
    let mut container = converter_container();
    container.set_definition(
        "foo",
        Definition::new("FooConverter")
            .implements::<dyn wireup::Converter>()
            .with_tag(RoleTag::new("converter")),
    );
    let before = container.clone();

    let err = ConverterPass::new().process(&mut container).unwrap_err();

    insta::assert_snapshot!(
        err,
        @r###"the service id "foo" must have the "type" attribute in the "converter" tag"###
    );
    assert_eq!(container, before);
}

/// SCENARIO: A tagged service whose class is not a converter.
#[test]
fn scenario_class_without_contract() {
    let mut container = converter_container();
    container.set_definition(
        "test_invalid_converter_type",
        Definition::new("stdClass").with_tag(RoleTag::new("converter").with_attribute("type", "std")),
    );

    let err = ConverterPass::new().process(&mut container).unwrap_err();

    match &err {
        WireupError::Validation(ValidationError::ContractViolation { service_id, class, .. }) => {
            assert_eq!(service_id.as_str(), "test_invalid_converter_type");
            assert_eq!(class, "stdClass");
        }
        other => panic!("unexpected error: {other}"),
    }
    insta::assert_snapshot!(
        err,
        @r###"the service id "test_invalid_converter_type" must be a class implementing the "wireup::Converter" contract, "stdClass" does not"###
    );
}

/// SCENARIO: Missing `type` is reported even when the contract is also missing.
#[test]
fn scenario_missing_type_checked_before_contract() {
    let mut container = converter_container();
    container.set_definition(
        "test_invalid_converter_type",
        Definition::new("stdClass").with_tag(RoleTag::new("converter")),
    );

    let err = ConverterPass::new().process(&mut container).unwrap_err();

    assert!(matches!(
        err,
        WireupError::Validation(ValidationError::MissingAttribute { .. })
    ));
}

/// SCENARIO: No registry service; even invalid converters are ignored.
#[test]
fn scenario_missing_registry_is_a_no_op() {
    let mut container = ContainerBuilder::new();
    container.set_definition("converter.json", converter_definition("JsonConverter", "json"));
    container.set_definition(
        "broken",
        Definition::new("stdClass").with_tag(RoleTag::new("converter")),
    );
    let before = container.clone();

    ConverterPass::new().process(&mut container).unwrap();

    assert_eq!(container, before);
}

/// SCENARIO: A service carries the converter tag twice.
#[test]
fn scenario_repeated_tag_registers_each_type() {
    let mut container = ContainerBuilder::new();
    container.set_definition("converter_registry", converter_registry_definition());
    container.set_definition(
        "converter.multi",
        Definition::new("MultiConverter")
            .implements::<dyn wireup::Converter>()
            .with_tag(RoleTag::new("converter").with_attribute("type", "yaml"))
            .with_tag(RoleTag::new("converter").with_attribute("type", "yml")),
    );

    ConverterPass::new().process(&mut container).unwrap();

    assert_eq!(
        container.definition("converter_registry").unwrap().argument(0),
        Some(&json!({
            "yaml": ["@converter.multi"],
            "yml": ["@converter.multi"],
        }))
    );
}

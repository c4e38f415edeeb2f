//! Property tests for fail-fast converter validation.

use proptest::prelude::*;
use serde_json::json;

use wireup::{
    CompilerPass, ContainerBuilder, ConverterPass, Definition, RoleTag, ValidationError,
    WireupError,
};

use crate::common::{converter_definition, converter_registry_definition};

/// Per service: whether its tag carries a `type` attribute.
fn services() -> impl Strategy<Value = Vec<bool>> {
    proptest::collection::vec(prop::bool::weighted(0.8), 1..12)
}

fn container(services: &[bool]) -> ContainerBuilder {
    let mut container = ContainerBuilder::new();
    container.set_definition("converter_registry", converter_registry_definition());
    for (i, has_type) in services.iter().enumerate() {
        let id = format!("converter.{i}");
        let definition = if *has_type {
            converter_definition("Converter", &format!("type{i}"))
        } else {
            Definition::new("Converter")
                .implements::<dyn wireup::Converter>()
                .with_tag(RoleTag::new("converter"))
        };
        container.set_definition(id, definition);
    }
    container
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Validation stops at the first service missing its type and
    /// names exactly that service; the registry is left untouched.
    #[test]
    fn property_first_missing_type_is_reported(services in services()) {
        let mut container = container(&services);
        let before = container.clone();

        let result = ConverterPass::new().process(&mut container);

        match services.iter().position(|has_type| !has_type) {
            Some(first) => {
                let err = result.unwrap_err();
                match err {
                    WireupError::Validation(ValidationError::MissingAttribute { service_id, .. }) => {
                        prop_assert_eq!(service_id.as_str(), format!("converter.{first}"));
                    }
                    other => prop_assert!(false, "unexpected error: {other}"),
                }
                prop_assert_eq!(container, before);
            }
            None => {
                prop_assert!(result.is_ok());
                let registry = container.definition("converter_registry").unwrap();
                let expected: serde_json::Map<String, serde_json::Value> = (0..services.len())
                    .map(|i| (format!("type{i}"), json!([format!("@converter.{i}")])))
                    .collect();
                prop_assert_eq!(registry.argument(0), Some(&serde_json::Value::Object(expected)));
            }
        }
    }
}

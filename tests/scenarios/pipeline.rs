//! Scenario: Full container build
//!
//! Journey: A project configures Wireup with `wireup.toml`, registers a
//! translator and a converter registry, compiles the container and then
//! resolves converters at runtime.
//!
//! Success Criteria:
//! - Both passes run, translator first
//! - The compiled container exposes the collected registries
//! - Freshness follows changes to translation files only

use std::fs;
use std::sync::Arc;

use serde_json::json;
use wireup::{
    Compiler, Converter, ConverterRegistry, PassState, Reference, WireupConfig, WireupError,
};

use crate::common::*;

fn resolve(reference: &Reference) -> Option<Arc<dyn Converter>> {
    (reference.id().as_str() == "converter.json")
        .then(|| Arc::new(wireup::JsonConverter) as Arc<dyn Converter>)
}

/// SCENARIO: Configure, compile and resolve.
#[test]
fn scenario_configured_build_end_to_end() {
    init_tracing();
    let env = TestEnv::with_translations(MESSAGE_FILES);
    env.write_config("[translator]\ndir = \"translations\"\n");
    let config = WireupConfig::load_or_default(Some(env.project_root.path()));
    assert_eq!(config.translator.dir, env.translations_dir());

    let mut builder = converter_container();
    builder.set_definition("translator.default", translator_definition());

    let compiler = Compiler::with_defaults(&config);
    let container = builder.compile(&compiler).unwrap();

    assert!(container.report().all_processed());
    assert_eq!(
        container.report().passes(),
        &[
            ("translator".to_string(), PassState::Processed),
            ("converter".to_string(), PassState::Processed),
        ]
    );

    let options = container
        .definition("translator.default")
        .unwrap()
        .argument(2)
        .unwrap();
    assert_eq!(
        options["resource_files"]["en"],
        json!([env.canonical("messages.en.yml"), env.canonical("messages.en.yaml")])
    );

    let registry = container.registry("converter_registry", 0).unwrap().unwrap();
    assert_eq!(
        registry.references("json").collect::<Vec<_>>(),
        vec![Reference::new("converter.json")]
    );

    let converters =
        ConverterRegistry::from_container(&container, "converter_registry", resolve).unwrap();
    assert_eq!(
        converters.convert("json", r#"{"name": "wireup"}"#).unwrap(),
        json!({"name": "wireup"})
    );
    assert!(converters.get("xml").is_err());
}

/// SCENARIO: An invalid converter aborts the whole build.
#[test]
fn scenario_invalid_converter_aborts_build() {
    let env = TestEnv::with_translations(MESSAGE_FILES);
    let mut builder = converter_container();
    builder.set_definition("translator.default", translator_definition());
    builder.set_definition(
        "broken",
        wireup::Definition::new("stdClass")
            .with_tag(wireup::RoleTag::new("converter").with_attribute("type", "x")),
    );

    let mut config = WireupConfig::default();
    config.translator.dir = env.translations_dir();
    let err = builder.compile(&Compiler::with_defaults(&config)).unwrap_err();

    assert!(err.is_validation());
    assert!(matches!(err, WireupError::Validation(_)));
}

/// SCENARIO: Editing translations invalidates the compiled container.
#[test]
fn scenario_freshness_tracks_translation_files() {
    let env = TestEnv::with_translations(MESSAGE_FILES);
    let mut builder = wireup::ContainerBuilder::new();
    builder.set_definition("translator.default", translator_definition());

    let mut config = WireupConfig::default();
    config.translator.dir = env.translations_dir();
    let container = builder.compile(&Compiler::with_defaults(&config)).unwrap();
    assert!(container.is_fresh());

    fs::write(env.translations_dir().join("NOTES.txt"), "unrelated").unwrap();
    assert!(container.is_fresh(), "non-translation files are not tracked");

    env.write_translation("messages.de.yaml", "hello: Hallo\n");
    assert!(!container.is_fresh());
}

/// SCENARIO: A vendor directory linked into the translations is tracked too.
#[cfg(unix)]
#[test]
fn scenario_freshness_follows_symlinked_vendor_directory() {
    let env = TestEnv::with_translations(&["messages.en.yaml"]);
    let shared = env.project_path("shared");
    fs::create_dir_all(&shared).unwrap();
    fs::write(shared.join("vendor.en.yaml"), "hello: Hello\n").unwrap();
    std::os::unix::fs::symlink(&shared, env.translations_dir().join("vendor")).unwrap();

    let mut builder = wireup::ContainerBuilder::new();
    builder.set_definition("translator.default", translator_definition());
    let mut config = WireupConfig::default();
    config.translator.dir = env.translations_dir();
    let container = builder.compile(&Compiler::with_defaults(&config)).unwrap();

    let options = container
        .definition("translator.default")
        .unwrap()
        .argument(2)
        .unwrap();
    assert_eq!(
        options["resource_files"]["en"],
        json!([env.canonical("vendor/vendor.en.yaml"), env.canonical("messages.en.yaml")])
    );
    assert!(container.is_fresh());

    fs::write(shared.join("vendor.en.yaml"), "hello: Hello there\n").unwrap();
    assert!(!container.is_fresh(), "edits behind the link invalidate");

    let mut builder = wireup::ContainerBuilder::new();
    builder.set_definition("translator.default", translator_definition());
    let container = builder.compile(&Compiler::with_defaults(&config)).unwrap();
    assert!(container.is_fresh());

    fs::write(shared.join("vendor.fr.yaml"), "hello: Bonjour\n").unwrap();
    assert!(!container.is_fresh(), "new files behind the link invalidate");
}

/// SCENARIO: Neither target service exists.
#[test]
fn scenario_container_without_targets() {
    let mut builder = wireup::ContainerBuilder::new();
    builder.set_definition(
        "converter.json",
        converter_definition("JsonConverter", "json"),
    );
    builder.set_parameter("kernel.debug", json!(true));

    let mut config = WireupConfig::default();
    config.translator.dir = "/nonexistent/translations".into();
    let container = builder.compile(&Compiler::with_defaults(&config)).unwrap();

    assert_eq!(container.resources().count(), 0);
    assert_eq!(container.parameter("kernel.debug"), Some(&json!(true)));
    assert!(ConverterRegistry::from_container(&container, "converter_registry", resolve)
        .unwrap()
        .is_empty());
}

//! Tests for show-config CLI command

use crate::common::{create_test_services, TestLibrary};
use pmlens::cli::commands::config::{execute, ConfigArgs};
use pmlens::cli::OutputFormat;

#[tokio::test]
async fn test_show_config_human() {
    let library = TestLibrary::empty();
    let (services, _output) = create_test_services(library.path());

    let result = execute(ConfigArgs { all: false }, &services, OutputFormat::Human).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_show_config_json_all() {
    let library = TestLibrary::empty();
    let (services, _output) = create_test_services(library.path());

    let result = execute(ConfigArgs { all: true }, &services, OutputFormat::Json).await;
    assert!(result.is_ok());
}

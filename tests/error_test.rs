use std::io;

use codegen::error::Error;

#[test]
fn test_error_source() {
    use std::error::Error as _;

    let err = Error::WriteError {
        path: "include/foo.h".to_string(),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
    };

    let source = err.source().unwrap().downcast_ref::<io::Error>().unwrap();
    assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
    assert_eq!(err.to_string(), "Failed to write 'include/foo.h': permission denied.");
}

#[test]
fn test_error_display() {
    let err = Error::ArgumentError { argument: "-lang".to_string() };
    assert_eq!(err.to_string(), "Invalid argument '-lang', expected -key=value.");

    let err = Error::TemplateNotFoundError {
        path: "/usr/local/codegen/templates/languages/c/fancy.h".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Template '/usr/local/codegen/templates/languages/c/fancy.h' does not exist."
    );

    let err = Error::ConfigSyntaxError {
        path: "~/.codegen".to_string(),
        line: 3,
        content: "oops".to_string(),
    };
    assert_eq!(err.to_string(), "Malformed property in '~/.codegen' at line 3: 'oops'.");
}

#[test]
fn test_resource_error_names_path() {
    let err = Error::ResourceNotFoundError {
        path: "/usr/local/codegen/templates/languages/go/definitions".to_string(),
        source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
    };
    assert!(err.to_string().contains("/usr/local/codegen/templates/languages/go/definitions"));
}

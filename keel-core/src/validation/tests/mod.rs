use crate::canonical::canonicalize;
use crate::error::RenderError;
use crate::model::*;
use crate::validation::is_valid;
use pretty_assertions::assert_eq;

fn backend(name: &str, generated: bool) -> Backend {
    Backend {
        name: name.to_string(),
        name_generated: generated,
        ..Default::default()
    }
}

fn http(frontend: &str, port: u16, routes: &[(&str, Backend)]) -> HttpService {
    HttpService {
        frontend_name: frontend.to_string(),
        port,
        hosts: vec![HttpHost {
            host: "example.com".to_string(),
            paths: routes
                .iter()
                .map(|(path, backend)| HttpPath {
                    path: path.to_string(),
                    backend: Some(backend.clone()),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }],
        ..Default::default()
    }
}

fn tcp(frontend: &str, port: u16, backend: Backend) -> TcpService {
    TcpService {
        frontend_name: frontend.to_string(),
        port,
        hosts: vec![TcpHost {
            host: String::new(),
            backend: Some(backend),
        }],
        ..Default::default()
    }
}

#[test]
fn valid_model_passes() {
    // Arrange
    let data = TemplateData {
        default_backend: Some(backend("default", false)),
        http_services: vec![http("http-80", 80, &[("/", backend("web", false))])],
        tcp_services: vec![tcp("tcp-5432", 5432, backend("db", false))],
        ..Default::default()
    };

    // Act
    let result = is_valid(&data);

    // Assert
    assert!(result.is_ok());
}

#[test]
fn frontend_names_are_unique_across_http_and_tcp() {
    // Arrange
    let data = TemplateData {
        http_services: vec![http("shared", 80, &[("/", backend("web", false))])],
        tcp_services: vec![tcp("shared", 5432, backend("db", false))],
        ..Default::default()
    };

    // Act
    let err = is_valid(&data).unwrap_err();

    // Assert
    assert!(matches!(
        err,
        RenderError::DuplicateFrontendName { ref name } if name == "shared"
    ));
    assert_eq!(err.to_string(), "haproxy frontend name shared is reused");
}

#[test]
fn default_backend_name_counts_toward_uniqueness() {
    // Arrange
    let data = TemplateData {
        default_backend: Some(backend("web", false)),
        http_services: vec![http("http-80", 80, &[("/", backend("web", false))])],
        ..Default::default()
    };

    // Act
    let err = is_valid(&data).unwrap_err();

    // Assert
    assert!(matches!(
        err,
        RenderError::DuplicateBackendName { ref name } if name == "web"
    ));
}

#[test]
fn tcp_backends_are_checked() {
    // Arrange
    let data = TemplateData {
        tcp_services: vec![
            tcp("tcp-5432", 5432, backend("db", false)),
            tcp("tcp-5433", 5433, backend("db", false)),
        ],
        ..Default::default()
    };

    // Act
    let err = is_valid(&data).unwrap_err();

    // Assert
    assert!(matches!(err, RenderError::DuplicateBackendName { .. }));
}

#[test]
fn canonicalization_resolves_generated_collisions() {
    // Arrange
    let mut data = TemplateData {
        http_services: vec![http(
            "http-80",
            80,
            &[("/a", backend("svc", true)), ("/b", backend("svc", true))],
        )],
        ..Default::default()
    };
    assert!(is_valid(&data).is_err());

    // Act
    canonicalize(&mut data);

    // Assert
    assert!(is_valid(&data).is_ok());
}

#[test]
fn identical_routes_still_collide_after_canonicalization() {
    // Arrange
    let mut data = TemplateData {
        http_services: vec![http(
            "http-80",
            80,
            &[("/a", backend("svc", true)), ("/a", backend("svc", true))],
        )],
        ..Default::default()
    };

    // Act
    canonicalize(&mut data);
    let err = is_valid(&data).unwrap_err();

    // Assert
    assert!(matches!(
        err,
        RenderError::DuplicateBackendName { ref name } if name.starts_with("svc-")
    ));
}

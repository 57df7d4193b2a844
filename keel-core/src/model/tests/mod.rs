use crate::model::*;
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;

fn backend(name: &str) -> Backend {
    Backend {
        name: name.to_string(),
        basic_auth: Some(BasicAuth {
            realm: "secret".to_string(),
            user_lists: vec!["admins".to_string()],
        }),
        ..Default::default()
    }
}

fn service_with_paths(paths: Vec<HttpPath>) -> HttpService {
    HttpService {
        frontend_name: "web".to_string(),
        port: 80,
        hosts: vec![HttpHost {
            host: "example.com".to_string(),
            paths,
            ..Default::default()
        }],
        ..Default::default()
    }
}

#[test]
fn redirect_ssl_is_true_when_any_path_requests_it() {
    // Arrange
    let svc = service_with_paths(vec![
        HttpPath {
            path: "/a".to_string(),
            ..Default::default()
        },
        HttpPath {
            path: "/b".to_string(),
            ssl_redirect: true,
            ..Default::default()
        },
    ]);

    // Act
    let redirect = svc.redirect_ssl();

    // Assert
    assert!(redirect);
}

#[test]
fn redirect_ssl_is_false_without_redirecting_paths() {
    // Arrange
    let svc = service_with_paths(vec![HttpPath {
        path: "/".to_string(),
        ..Default::default()
    }]);

    // Act / Assert
    assert!(!svc.redirect_ssl());
}

#[test]
fn remove_backend_auth_clears_every_path_backend() {
    // Arrange
    let mut svc = service_with_paths(vec![
        HttpPath {
            path: "/a".to_string(),
            backend: Some(backend("a")),
            ..Default::default()
        },
        HttpPath {
            path: "/b".to_string(),
            backend: Some(backend("b")),
            ..Default::default()
        },
    ]);

    // Act
    svc.remove_backend_auth();

    // Assert
    assert!(svc.backends().all(|b| b.basic_auth.is_none()));
    assert_eq!(svc.backends().count(), 2);
}

#[test]
fn http_sort_key_reflects_ssl_offload() {
    // Arrange
    let plain = HttpService {
        port: 8080,
        ..Default::default()
    };
    let offload = HttpService {
        port: 443,
        offload_ssl: true,
        ..Default::default()
    };

    // Act / Assert
    assert_eq!(plain.sort_key(), "http://8080");
    assert_eq!(offload.sort_key(), "https://443");
}

#[test]
fn tcp_sort_key_joins_address_and_port() {
    let svc = TcpService {
        address: "10.0.0.1".to_string(),
        port: 5432,
        ..Default::default()
    };

    assert_eq!(svc.sort_key(), "10.0.0.1:5432");
}

#[test]
fn uses_tls_auth_checks_http_and_tcp_services() {
    // Arrange
    let mut data = TemplateData::default();
    assert!(!data.uses_tls_auth());

    // Act
    data.tcp_services.push(TcpService {
        frontend_name: "db".to_string(),
        tls_auth: Some(TlsAuth::default()),
        ..Default::default()
    });

    // Assert
    assert!(data.uses_tls_auth());
}

#[test]
fn uses_external_auth_looks_at_every_host() {
    // Arrange
    let mut svc = service_with_paths(vec![]);
    svc.hosts.push(HttpHost {
        host: "login.example.com".to_string(),
        external_auth: Some(ExternalAuth {
            auth_backend: "oauth2".to_string(),
            ..Default::default()
        }),
        ..Default::default()
    });

    // Act
    let data = TemplateData {
        http_services: vec![svc],
        ..Default::default()
    };

    // Assert
    assert!(data.uses_external_auth());
    assert!(!TemplateData::default().uses_external_auth());
}

#[test]
fn annotation_maps_convert_in_key_order() {
    // Arrange
    let timeouts = BTreeMap::from([
        ("server".to_string(), "50s".to_string()),
        ("client".to_string(), "50s".to_string()),
    ]);
    let options = BTreeMap::from([
        ("http-server-close".to_string(), false),
        ("dontlognull".to_string(), true),
    ]);
    let headers = BTreeMap::from([("X-SSL".to_string(), "%[ssl_fc]".to_string())]);

    // Act
    let timeouts = timeout_configs(&timeouts);
    let options = option_configs(&options);
    let headers = tls_headers(&headers);

    // Assert
    assert_eq!(
        timeouts,
        vec![
            TimeoutConfig {
                phase: "client".to_string(),
                duration: "50s".to_string(),
            },
            TimeoutConfig {
                phase: "server".to_string(),
                duration: "50s".to_string(),
            },
        ]
    );
    assert_eq!(options[0].option, "dontlognull");
    assert!(options[0].enabled);
    assert_eq!(headers[0].header, "X-SSL");
}

#[test]
fn template_data_displays_as_json() {
    // Arrange
    let data = TemplateData {
        http_services: vec![HttpService {
            frontend_name: "web".to_string(),
            port: 80,
            ..Default::default()
        }],
        ..Default::default()
    };

    // Act
    let rendered = data.to_string();
    let parsed: TemplateData = serde_json::from_str(&rendered).unwrap();

    // Assert
    assert!(rendered.contains("\"frontend_name\": \"web\""));
    assert_eq!(parsed, data);
}

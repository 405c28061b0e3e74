use serde_json::{Value, json};
use template_validator::manifest::parse_manifest;
use template_validator::validation::{ErrorKind, Path, normalize};

fn vm_cirros() -> Value {
    parse_manifest(include_str!("fixtures/vm-cirros.yaml")).unwrap()
}

#[test]
fn test_detects_non_jsonpaths() {
    for s in ["string-literal", "$.spec.domain.resources.requests.memory"] {
        assert_eq!(normalize(s).unwrap_err().kind(), ErrorKind::InvalidDirective);
        assert_eq!(Path::new(s).unwrap_err().kind(), ErrorKind::InvalidDirective);
    }
}

#[test]
fn test_mangles_valid_jsonpaths() {
    let expected = "{.spec.domain.resources.requests.memory}";
    for s in [
        "jsonpath::$.spec.domain.resources.requests.memory",
        "jsonpath::.spec.domain.resources.requests.memory",
    ] {
        assert_eq!(normalize(s).unwrap(), expected);
        assert_eq!(Path::new(s).unwrap().query(), expected);
    }
}

#[test]
fn test_invalid_path_fails_on_find() {
    let mut path = Path::new("jsonpath::.spec.this.path.does.not.exist").unwrap();
    let err = path.find(&vm_cirros()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidDirective);
}

#[test]
fn test_detects_malformed_path() {
    let err = Path::new("jsonpath::random56junk%(*$%&*()").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedExpression);
}

#[test]
fn test_integer_results() {
    let mut path = Path::new("jsonpath::.spec.domain.resources.requests.memory").unwrap();
    path.find(&vm_cirros()).unwrap();
    assert!(path.len() >= 1);

    let vals = path.as_i64().unwrap();
    assert_eq!(vals.len(), 1);
    assert!(vals[0] > 1024);
}

#[test]
fn test_string_results() {
    let mut path = Path::new("jsonpath::.spec.domain.machine.type").unwrap();
    path.find(&vm_cirros()).unwrap();
    assert!(path.len() >= 1);

    let vals = path.as_string().unwrap();
    assert_eq!(vals, vec!["q35".to_string()]);
}

#[test]
fn test_repeated_find_is_stable() {
    let vm = vm_cirros();
    let mut path = Path::new("jsonpath::.spec.volumes[*].name").unwrap();

    path.find(&vm).unwrap();
    let first_len = path.len();
    let first = path.as_string().unwrap();

    path.find(&vm).unwrap();
    assert_eq!(path.len(), first_len);
    assert_eq!(path.as_string().unwrap(), first);
    assert_eq!(first, vec!["containerdisk".to_string(), "cloudinitdisk".to_string()]);
}

#[test]
fn test_typed_accessors_before_find() {
    let path = Path::new("jsonpath::.spec.domain.machine.type").unwrap();
    assert_eq!(path.len(), 0);
    assert!(path.as_i64().unwrap().is_empty());
    assert!(path.as_string().unwrap().is_empty());
}

#[test]
fn test_annotation_keys_with_slashes() {
    let mut path = Path::new("jsonpath::.metadata.labels.kubevirt\\.io/vm").unwrap();
    path.find(&vm_cirros()).unwrap();
    assert_eq!(path.as_string().unwrap(), vec!["vm-cirros".to_string()]);
}

#[test]
fn test_string_requested_as_integer() {
    let mut path = Path::new("jsonpath::.spec.domain.machine.type").unwrap();
    path.find(&vm_cirros()).unwrap();
    assert_eq!(path.as_i64().unwrap_err().kind(), ErrorKind::TypeCoercion);
}

#[test]
fn test_wildcard_over_empty_volumes() {
    let mut vm = vm_cirros();
    vm["spec"]["volumes"] = json!([]);

    let mut path = Path::new("jsonpath::.spec.volumes[*]").unwrap();
    path.find(&vm).unwrap();
    assert_eq!(path.len(), 0);
    assert!(path.as_string().unwrap().is_empty());

    let mut names = Path::new("jsonpath::.spec.volumes[*].name").unwrap();
    assert_eq!(names.find(&vm).unwrap_err().kind(), ErrorKind::InvalidDirective);
}

#[test]
fn test_wildcard_over_absent_list() {
    let mut path = Path::new("jsonpath::.spec.networks[*]").unwrap();
    assert_eq!(path.find(&vm_cirros()).unwrap_err().kind(), ErrorKind::InvalidDirective);
}

use filetransform::resolver::Resolver;
use filetransform::variables::{VariableStore, VariableValue};

fn store() -> VariableStore {
    let mut variables = VariableStore::new();
    variables.insert("HOST", VariableValue::new("prod.example.com", false));
    variables.insert("TOKEN", VariableValue::new("s3cr3t", true));
    variables
}

#[test]
fn test_no_tokens_passthrough() {
    let resolver = Resolver::new();
    let resolved = resolver.resolve("plain text, no placeholders", &store());

    assert_eq!(resolved.value, "plain text, no placeholders");
    assert!(!resolved.sensitive);
    assert!(resolved.missing.is_empty());
}

#[test]
fn test_known_token_replaced_everywhere() {
    let resolver = Resolver::new();
    let resolved = resolver.resolve("${{ HOST }} and again ${{ HOST }}", &store());

    assert_eq!(resolved.value, "prod.example.com and again prod.example.com");
    assert!(!resolved.sensitive);
}

#[test]
fn test_sensitive_variable_flags_result() {
    let resolver = Resolver::new();
    let resolved = resolver.resolve("token=${{ TOKEN }}", &store());

    assert_eq!(resolved.value, "token=s3cr3t");
    assert!(resolved.sensitive);
}

#[test]
fn test_sensitivity_is_monotonic_across_tokens() {
    let resolver = Resolver::new();
    let resolved = resolver.resolve("${{TOKEN}}-${{HOST}}", &store());

    assert_eq!(resolved.value, "s3cr3t-prod.example.com");
    assert!(resolved.sensitive);
}

#[test]
fn test_missing_variable_resolves_to_empty_string() {
    let resolver = Resolver::new();
    let resolved = resolver.resolve("host=${{ MISSING }}!", &store());

    assert_eq!(resolved.value, "host=!");
    assert!(!resolved.sensitive);
    assert_eq!(resolved.missing, vec!["MISSING".to_string()]);
}

#[test]
fn test_name_is_trimmed_for_lookup() {
    let resolver = Resolver::new();
    let resolved = resolver.resolve("${{   HOST   }}", &store());

    assert_eq!(resolved.value, "prod.example.com");
}

#[test]
fn test_distinct_spellings_are_distinct_targets() {
    // `${{ HOST }}` and `${{HOST}}` name the same variable but are
    // replaced as separate literal substrings.
    let resolver = Resolver::new();
    let resolved = resolver.resolve("${{ HOST }}/${{HOST}}", &store());

    assert_eq!(resolved.value, "prod.example.com/prod.example.com");
}

#[test]
fn test_idempotence_on_fully_resolved_string() {
    let resolver = Resolver::new();
    let first = resolver.resolve("${{ HOST }}:8080", &store());
    let second = resolver.resolve(&first.value, &store());

    assert_eq!(second.value, first.value);
    assert!(!second.sensitive);
    assert!(second.missing.is_empty());
}

#[test]
fn test_resolve_opt_propagates_absence() {
    let resolver = Resolver::new();

    assert!(resolver.resolve_opt(None, &store()).is_none());
    let resolved = resolver.resolve_opt(Some("${{ HOST }}"), &store()).unwrap();
    assert_eq!(resolved.value, "prod.example.com");
}

#[test]
fn test_mixed_known_and_missing_tokens() {
    let resolver = Resolver::new();
    let resolved = resolver.resolve("${{ HOST }}:${{ PORT }}", &store());

    assert_eq!(resolved.value, "prod.example.com:");
    assert_eq!(resolved.missing, vec!["PORT".to_string()]);
}

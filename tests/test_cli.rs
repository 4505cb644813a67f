//! CLI integration tests

mod common;

use common::{c2r, c2r_with_env, create_source_file, MockEnvironment};

// =============================================================================
// Validation
// =============================================================================

#[test]
fn test_check_valid_command() {
    let r = c2r(&["--check", "curl -X POST 'http://example.com' -d 'a=1'"]);
    assert!(r.success(), "stderr: {}", r.stderr);
    assert_eq!(r.stdout.trim(), "Valid");
}

#[test]
fn test_invalid_command_prints_diagnostic() {
    let r = c2r(&["curl --request PAST 'http://example.com'"]);
    assert_eq!(r.exit_code, 1);
    assert_eq!(r.stderr.trim(), "Error: Unsupported HTTP method 'PAST' specified.");
    assert!(r.stdout.is_empty());
}

#[test]
fn test_empty_stdin_is_rejected() {
    let r = c2r(&[]);
    assert_eq!(r.exit_code, 1);
    assert_eq!(r.stderr.trim(), "Error: Command must start with 'curl'.");
}

// =============================================================================
// Code generation
// =============================================================================

#[test]
fn test_default_output_is_kotlin_function() {
    let r = c2r(&["curl --request GET 'http://example.com/users?x=1&y=2'"]);
    assert!(r.success(), "stderr: {}", r.stderr);
    assert_eq!(
        r.stdout,
        "@GET(\"http://example.com/users?x=1&y=2\")\nfun performRequest(): Call<Void>\n"
    );
}

#[test]
fn test_java_full_output_with_names() {
    let r = c2r(&[
        "-l", "java", "--full", "-c", "UserApi", "-m", "createUser",
        r#"curl -X POST 'http://example.com/users' -H 'Content-Type: application/json' -d '{"name":"Ann"}'"#,
    ]);
    assert!(r.success(), "stderr: {}", r.stderr);
    assert_eq!(
        r.stdout,
        "import retrofit2.Call;\n\
         import retrofit2.http.POST;\n\
         import retrofit2.http.Body;\n\
         import okhttp3.RequestBody;\n\
         \n\
         public interface UserApi {\n    \
         @POST(\"http://example.com/users\")\n    \
         Call<Void> createUser(@Body RequestBody body);\n\
         }\n"
    );
}

#[test]
fn test_command_from_stdin() {
    let env = MockEnvironment::new().with_stdin("curl -X DELETE \\\n  'http://example.com/items/3'\n");
    let r = c2r_with_env(&["-"], &env);
    assert!(r.success(), "stderr: {}", r.stderr);
    assert!(r.stdout.starts_with("@DELETE(\"http://example.com/items/3\")"));
}

#[test]
fn test_json_output() {
    let r = c2r(&["--json", "curl --location 'http://example.com/a?q=John%20Doe' -H 'Accept: text/xml'"]);
    assert!(r.success(), "stderr: {}", r.stderr);
    let json: serde_json::Value = serde_json::from_str(&r.stdout).unwrap();
    assert_eq!(json["method"], "GET");
    assert_eq!(json["url"], "http://example.com/a");
    assert_eq!(json["query_params"]["q"], "John Doe");
    assert_eq!(json["headers"]["Accept"], "text/xml");
    assert_eq!(json["body"], serde_json::Value::Null);
    assert_eq!(json["options"], serde_json::json!(["--location"]));
    assert_eq!(json["raw_query"], "q=John%20Doe");
}

#[test]
fn test_annotation_keeps_encoded_query() {
    let r = c2r(&["curl 'http://example.com/s?q=John%20Doe&t=a%26b'"]);
    assert!(r.success(), "stderr: {}", r.stderr);
    assert!(r.stdout.starts_with("@GET(\"http://example.com/s?q=John%20Doe&t=a%26b\")"), "{}", r.stdout);
}

#[test]
fn test_malformed_xml_body_is_rejected() {
    let r = c2r(&["--check", "curl -X POST 'http://example.com' -d '<a b></a>'"]);
    assert!(!r.success());
    assert_eq!(r.stderr.trim(), "Error: Unsupported data format.");
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_config_defaults_apply() {
    let env = MockEnvironment::new().with_config(
        "[defaults]\nlanguage = \"java\"\nmethod_name = \"ping\"\n",
    );
    let r = c2r_with_env(&["curl 'http://example.com'"], &env);
    assert!(r.success(), "stderr: {}", r.stderr);
    assert_eq!(r.stdout, "@GET(\"http://example.com\")\nCall<Void> ping();\n");
}

#[test]
fn test_cli_overrides_config() {
    let env = MockEnvironment::new().with_config("[defaults]\nlanguage = \"java\"\n");
    let r = c2r_with_env(&["-l", "kotlin", "curl 'http://example.com'"], &env);
    assert!(r.success(), "stderr: {}", r.stderr);
    assert!(r.stdout.contains("fun performRequest(): Call<Void>"));
}

#[test]
fn test_config_default_options() {
    let env = MockEnvironment::new().with_config("[defaults]\noptions = [\"--check\"]\n");
    let r = c2r_with_env(&["curl 'http://example.com'"], &env);
    assert!(r.success(), "stderr: {}", r.stderr);
    assert_eq!(r.stdout.trim(), "Valid");
}

#[test]
fn test_broken_config_falls_back_to_defaults() {
    let env = MockEnvironment::new().with_config("[defaults\n");
    let r = c2r_with_env(&["curl 'http://example.com'"], &env);
    assert!(r.success());
    assert!(r.stderr.contains("Warning: Failed to load config"));
    assert!(r.stdout.contains("fun performRequest()"));
}

// =============================================================================
// Interface files
// =============================================================================

#[test]
fn test_output_dir_creates_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let out = dir.path().to_str().unwrap();
    let r = c2r(&["-o", out, "-c", "PingApi", "curl 'http://example.com/ping'"]);
    assert!(r.success(), "stderr: {}", r.stderr);

    let path = dir.path().join("PingApi.kt");
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("interface PingApi {"));
    assert!(content.contains("@GET(\"http://example.com/ping\")"));
}

#[test]
fn test_append_to_interface() {
    let (dir, path) = create_source_file("Api.kt", "interface Api {\n}\n");
    let r = c2r(&[
        "-a", path.to_str().unwrap(),
        "--project-dir", dir.path().to_str().unwrap(),
        "-m", "ping",
        "curl 'http://example.com/ping'",
    ]);
    assert!(r.success(), "stderr: {}", r.stderr);
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "interface Api {\n    @GET(\"http://example.com/ping\")\n    fun ping(): Call<Void>\n}\n"
    );
}

#[test]
fn test_append_follows_java_extension() {
    let (_dir, path) = create_source_file("Api.java", "public interface Api {\n}\n");
    let r = c2r(&["-a", path.to_str().unwrap(), "curl -X HEAD 'http://example.com'"]);
    assert!(r.success(), "stderr: {}", r.stderr);
    assert!(std::fs::read_to_string(&path).unwrap().contains("    Call<Void> performRequest();\n"));
}

#[test]
fn test_append_rejects_class() {
    let (_dir, path) = create_source_file("Model.kt", "class Model {\n}\n");
    let r = c2r(&["-a", path.to_str().unwrap(), "curl 'http://example.com'"]);
    assert_eq!(r.exit_code, 1);
    assert!(r.stderr.contains("Selected file isn't an interface class"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "class Model {\n}\n");
}

#[test]
fn test_append_rejects_file_outside_project() {
    let project = tempfile::TempDir::new().unwrap();
    let (_dir, path) = create_source_file("Api.kt", "interface Api {\n}\n");
    let r = c2r(&[
        "-a", path.to_str().unwrap(),
        "--project-dir", project.path().to_str().unwrap(),
        "curl 'http://example.com'",
    ]);
    assert_eq!(r.exit_code, 1);
    assert!(r.stderr.contains("Selected file isn't within project folder"));
}

//! Test fixtures - reusable manifest and config content.

/// The manifest from the end-to-end example: one entry, one JS and one CSS file.
pub const SIMPLE_MANIFEST: &str = r#"{
  "entrypoints": {
    "app": {
      "js": ["/build/app.js"],
      "css": ["/build/app.css"]
    }
  }
}"#;

/// Two entries sharing the runtime and a vendor chunk, with SRI hashes.
pub const SHARED_CHUNKS_MANIFEST: &str = r#"{
  "entrypoints": {
    "app": {
      "js": ["/build/runtime.js", "/build/vendors.js", "/build/app.js"],
      "css": ["/build/app.css"]
    },
    "admin": {
      "js": ["/build/runtime.js", "/build/vendors.js", "/build/admin.js"],
      "css": ["/build/admin.css"]
    },
    "styles": {
      "css": ["/build/styles.css"]
    }
  },
  "integrity": {
    "/build/runtime.js": "sha384-runtime",
    "/build/app.js": "sha384-app"
  }
}"#;

/// A second build with its own manifest.
pub const ADMIN_BUILD_MANIFEST: &str = r#"{
  "entrypoints": {
    "dashboard": {
      "js": ["/admin/dashboard.js"]
    }
  }
}"#;

/// Minimal config: the default build only.
pub const DEFAULT_BUILD_CONFIG: &str = r#"output_path = "public/build"
"#;

/// Default build plus a named `admin` build.
pub const MULTI_BUILD_CONFIG: &str = r#"output_path = "public/build"

[builds]
admin = "public/admin"
"#;

//! The resolved bundler configuration.
//!
//! Field and key names follow the bundler host's own schema (camelCase on the
//! wire) so the emitted document reads the same as the configuration the host
//! consumes. The whole record is immutable: it is fully determined by the
//! environment snapshot and the config directory, built once per invocation.

use std::path::PathBuf;

use serde::{Serialize, Serializer};

/// Dev server port, enforced strictly (the host refuses to fall back).
pub const DEV_SERVER_PORT: u16 = 1420;

/// Prefixes of environment variables exposed to client code.
pub const ENV_PREFIXES: [&str; 2] = ["VITE_", "TAURI_"];

/// Modules excluded from the bundle and supplied by the runtime host.
pub const EXTERNAL_MODULES: [&str; 1] = ["pinia"];

/// Glob restricting automatic test discovery to the unit-test subtree.
pub const UNIT_TEST_GLOB: &str = "tests/unit/**/*.{test,spec}.{js,mjs,cjs,ts,mts,cts,jsx,tsx}";

/// Complete configuration handed to the bundler host.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfiguration {
    /// Plugins, in registration order.
    pub plugins: Vec<PluginDescriptor>,
    /// Whether the host may clear the terminal on rebuild.
    pub clear_screen: bool,
    /// Env variable prefixes exposed to client code.
    pub env_prefix: Vec<String>,
    /// Dev server options.
    pub server: DevServer,
    /// Production build options.
    pub build: BuildOptions,
    /// Test runner options.
    pub test: TestOptions,
}

/// A plugin registration, tagged by plugin name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "name")]
pub enum PluginDescriptor {
    /// Single-file-component compiler plugin, no options.
    #[serde(rename = "vue")]
    Vue,
    /// Auto-import plugin.
    #[serde(rename = "auto-import")]
    AutoImport(AutoImportOptions),
}

/// Options for the auto-import plugin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AutoImportOptions {
    /// Import presets to make ambient.
    pub imports: Vec<String>,
    /// Where the generated type declarations are written.
    pub dts: PathBuf,
    /// Generated lint-config output.
    pub eslintrc: EslintrcOutput,
}

/// Lint-config generation settings for the auto-import plugin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EslintrcOutput {
    /// Whether the lint config is generated at all.
    pub enabled: bool,
    /// Absolute path of the generated file.
    pub filepath: PathBuf,
}

/// Dev server options.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServer {
    /// Local port the server binds to.
    pub port: u16,
    /// Fail to start instead of falling back to another port.
    pub strict_port: bool,
    /// Filesystem access restrictions.
    pub fs: FsOptions,
}

/// Filesystem paths the dev server is allowed to serve from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FsOptions {
    /// Allowed roots, all absolute.
    pub allow: Vec<PathBuf>,
}

/// Production build options.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildOptions {
    /// Output directory, relative to the config directory.
    pub out_dir: PathBuf,
    /// Compile target for the host webview.
    pub target: BuildTarget,
    /// Minifier selection, `"esbuild"` or disabled.
    pub minify: Minify,
    /// Whether to emit source maps.
    pub sourcemap: bool,
    /// Whether the output directory is emptied before each build.
    pub empty_out_dir: bool,
    /// Externalized modules, resolved by the runtime host.
    pub external: Vec<String>,
}

/// Webview compile target, keyed on the packaging platform.
///
/// See the native shell's webview-version matrix: Windows ships a Chromium
/// webview, everything else gets WebKit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BuildTarget {
    #[serde(rename = "chrome105")]
    Chrome105,
    #[serde(rename = "safari15")]
    Safari15,
}

impl BuildTarget {
    /// The platform identifier string the host expects.
    pub fn as_str(self) -> &'static str {
        match self {
            BuildTarget::Chrome105 => "chrome105",
            BuildTarget::Safari15 => "safari15",
        }
    }
}

/// Minifier selection. On the wire this is a string-or-false union, so it
/// carries a hand-written `Serialize` rather than a derived one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Minify {
    /// Minify with esbuild.
    Esbuild,
    /// Minification off (debug builds).
    Disabled,
}

impl Minify {
    /// Whether any minification happens.
    pub fn is_enabled(self) -> bool {
        matches!(self, Minify::Esbuild)
    }
}

impl Serialize for Minify {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Minify::Esbuild => serializer.serialize_str("esbuild"),
            Minify::Disabled => serializer.serialize_bool(false),
        }
    }
}

/// Test runner options.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestOptions {
    /// Glob patterns for automatic test-file discovery.
    pub include: Vec<String>,
}

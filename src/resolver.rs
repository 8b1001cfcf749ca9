//! Configuration resolution.
//!
//! `resolve` is the whole component: given an environment snapshot and the
//! config directory, it builds the [`BuildConfiguration`] in one pass. The
//! only fallible step is absolutizing a relative config directory against the
//! current working directory; malformed environment values never fail, they
//! are string-compared and yield a valid (if unintended) configuration.

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::config::{
    AutoImportOptions, BuildConfiguration, BuildOptions, BuildTarget, DevServer, EslintrcOutput,
    FsOptions, Minify, PluginDescriptor, TestOptions, DEV_SERVER_PORT, ENV_PREFIXES,
    EXTERNAL_MODULES, UNIT_TEST_GLOB,
};
use crate::env::EnvSnapshot;
use crate::error::AppError;

/// Packaging platform, set by the native-shell build driver.
const TAURI_PLATFORM: &str = "TAURI_PLATFORM";

/// Debug-build marker, set by the native-shell build driver.
const TAURI_DEBUG: &str = "TAURI_DEBUG";

/// Shared component library, sibling of the app directory.
const SHARED_LIB_DIR: &str = "../common/vue_lib";

/// Resolve the bundler configuration for the app rooted at `config_dir`.
pub fn resolve(env: &EnvSnapshot, config_dir: &Path) -> Result<BuildConfiguration, AppError> {
    let config_dir = absolutize(config_dir)?;

    let target = if env.get(TAURI_PLATFORM) == Some("windows") {
        BuildTarget::Chrome105
    } else {
        BuildTarget::Safari15
    };
    let debug = env.is_truthy(TAURI_DEBUG);

    Ok(BuildConfiguration {
        plugins: vec![
            PluginDescriptor::Vue,
            PluginDescriptor::AutoImport(AutoImportOptions {
                imports: vec!["vue".to_string()],
                dts: PathBuf::from("./src/auto-imports.d.ts"),
                eslintrc: EslintrcOutput {
                    enabled: true,
                    filepath: resolve_lexical(&config_dir, ".eslintrc-auto-import.json"),
                },
            }),
        ],
        clear_screen: false,
        env_prefix: ENV_PREFIXES.iter().map(ToString::to_string).collect(),
        server: DevServer {
            port: DEV_SERVER_PORT,
            strict_port: true,
            fs: FsOptions {
                allow: vec![resolve_lexical(&config_dir, SHARED_LIB_DIR), config_dir],
            },
        },
        build: BuildOptions {
            out_dir: PathBuf::from("./dist"),
            target,
            minify: if debug { Minify::Disabled } else { Minify::Esbuild },
            sourcemap: debug,
            empty_out_dir: true,
            external: EXTERNAL_MODULES.iter().map(ToString::to_string).collect(),
        },
        test: TestOptions { include: vec![UNIT_TEST_GLOB.to_string()] },
    })
}

/// Turn `dir` into a normalized absolute path without touching the filesystem
/// beyond a current-directory lookup.
fn absolutize(dir: &Path) -> Result<PathBuf, AppError> {
    if dir.is_absolute() {
        Ok(normalize(dir))
    } else {
        Ok(normalize(&env::current_dir()?.join(dir)))
    }
}

/// Resolve `rel` against `base` lexically, collapsing `.` and `..` components
/// without consulting the filesystem.
fn resolve_lexical(base: &Path, rel: &str) -> PathBuf {
    let rel = Path::new(rel);
    if rel.is_absolute() {
        normalize(rel)
    } else {
        normalize(&base.join(rel))
    }
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // Excess `..` above an absolute root is dropped.
                if !out.pop() && !path.has_root() {
                    out.push(Component::ParentDir);
                }
            }
            other => out.push(other),
        }
    }
    out
}

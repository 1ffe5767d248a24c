//! Contents of every generated file.
//!
//! Everything here is a pure function from the context (and
//! [`GeneratorSettings`]) to a `String`; writing is the pipeline's job.
//! Static sources live as string constants; the few variable parts use
//! `{{NAME}}` placeholders filled by [`render`].

mod example;
mod scripts;

pub use example::{example_app, example_contract};
pub use scripts::{hardhat_accounts, hardhat_config, launcher_script, postinstall_script};

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::{
    entities::CreateContext, error::DomainError, manifest::pretty, value_objects::EnvVariable,
};

/// Shim value assigned to `process.version` in the generated entry point.
pub const DEFAULT_SHIM_PROCESS_VERSION: &str = "v9.40";

/// RPC endpoint of a local development chain.
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8545";

/// Knobs injected into the emitters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSettings {
    pub shim_process_version: String,
    pub rpc_url: String,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            shim_process_version: DEFAULT_SHIM_PROCESS_VERSION.into(),
            rpc_url: DEFAULT_RPC_URL.into(),
        }
    }
}

impl GeneratorSettings {
    /// Host and port the local chain must listen on so that `rpc_url`
    /// reaches it.
    pub fn chain_endpoint(&self) -> Result<ChainEndpoint, DomainError> {
        let invalid = |reason: &str| DomainError::InvalidRpcUrl {
            value: self.rpc_url.clone(),
            reason: reason.into(),
        };

        let url = url::Url::parse(&self.rpc_url).map_err(|e| invalid(&e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid("scheme must be http or https"));
        }
        let host = url.host_str().ok_or_else(|| invalid("missing host"))?;
        let port = url
            .port_or_known_default()
            .ok_or_else(|| invalid("missing port"))?;

        Ok(ChainEndpoint {
            host: host.trim_start_matches('[').trim_end_matches(']').to_string(),
            port,
        })
    }
}

/// Where the generated launcher binds the local chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainEndpoint {
    pub host: String,
    pub port: u16,
}

/// Substitute `{{KEY}}` placeholders.
pub(crate) fn render(template: &str, vars: &[(&str, &str)]) -> String {
    vars.iter().fold(template.to_string(), |acc, (key, value)| {
        acc.replace(&format!("{{{{{key}}}}}"), value)
    })
}

// ── Entry point ───────────────────────────────────────────────────────────────

pub const DAPP_BEGIN: &str = "/* dapp-begin */";
pub const DAPP_END: &str = "/* dapp-end */";

const ENTRY_POINT: &str = r#"// This file has been auto-generated by rndapp.
// Feel free to modify it, but please take care to maintain the exact
// procedure listed between /* dapp-begin */ and /* dapp-end */, as
// this will help persist a known template for future migrations.

/* dapp-begin */
const {Platform} = require('react-native');

if (Platform.OS !== 'web') {
  require('react-native-get-random-values');
}

if (typeof Buffer === 'undefined') {
  global.Buffer = require('buffer').Buffer;
}

global.btoa = global.btoa || require('base-64').encode;
global.atob = global.atob || require('base-64').decode;

process.version = '{{SHIM_PROCESS_VERSION}}';

import { registerRootComponent } from 'expo';
const { default: App } = require('./App');
/* dapp-end */

// registerRootComponent calls AppRegistry.registerComponent('main', () => App);
// It also ensures that whether you load the app in the Expo client or in a native build,
// the environment is set up appropriately
registerRootComponent(App);"#;

/// `index.js`: polyfills first, then the Expo root registration.
pub fn entry_point(settings: &GeneratorSettings) -> String {
    render(
        ENTRY_POINT,
        &[("SHIM_PROCESS_VERSION", &settings.shim_process_version)],
    )
}

// ── Bundler / transpiler ──────────────────────────────────────────────────────

/// `metro.config.js`
pub const METRO_CONFIG: &str = r#"const extraNodeModules = require('node-libs-browser');

module.exports = {
  resolver: {
    extraNodeModules,
  },
  transformer: {
    assetPlugins: ['expo-asset/tools/hashAssetFiles'],
  },
};"#;

/// `babel.config.js`
pub const BABEL_CONFIG: &str = r#"module.exports = function(api) {
  api.cache(true);
  return {
    presets: ['babel-preset-expo'],
    plugins: [
      ['module:react-native-dotenv'],
    ],
  };
};"#;

// ── TypeScript ────────────────────────────────────────────────────────────────

/// `index.d.ts`: one exported constant per environment variable.
pub fn type_roots(vars: &[EnvVariable]) -> String {
    let exports: String = vars
        .iter()
        .map(|v| format!("  export const {}: {};\n", v.name, v.ty))
        .collect();
    format!("declare module '@env' {{\n{exports}}}")
}

/// `tsconfig.json`
pub fn tsconfig() -> Result<String, serde_json::Error> {
    pretty(&json!({
        "compilerOptions": {
            "allowSyntheticDefaultImports": true,
            "jsx": "react-native",
            "lib": ["dom", "esnext"],
            "moduleResolution": "node",
            "noEmit": true,
            "skipLibCheck": true,
            "resolveJsonModule": true,
            "typeRoots": ["index.d.ts"]
        },
        "exclude": [
            "node_modules",
            "babel.config.js",
            "metro.config.js",
            "jest.config.js"
        ]
    }))
}

// ── Environment ───────────────────────────────────────────────────────────────

/// `.env` / `.env.example`: `NAME=value` lines, no trailing newline.
pub fn env_file(vars: &[EnvVariable]) -> String {
    vars.iter()
        .map(|v| format!("{}={}", v.name, v.value))
        .collect::<Vec<_>>()
        .join("\n")
}

// ── Ignore file ───────────────────────────────────────────────────────────────

/// Append the generated secrets to `.gitignore`.
///
/// `existing` is always a prefix of the result.
pub fn patch_gitignore(existing: &str, ctx: &CreateContext) -> String {
    let mut out = existing.to_string();
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    out.push_str("\n# environment config\n.env\n");

    let tools = ctx.options().tools();
    if let Some(key_file) = tools.key_file() {
        out.push_str(&format!("\n# {tools}\n{key_file}\n"));
    }
    out
}

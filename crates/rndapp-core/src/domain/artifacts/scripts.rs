//! Helper scripts and chain configuration.

use serde_json::json;

use super::{ChainEndpoint, render};
use crate::domain::{
    entities::HardhatAccount, manifest::pretty, value_objects::BlockchainTools,
};

const POSTINSTALL: &str = r#"require('dotenv/config');
const {execSync} = require('child_process');

execSync('npx pod-install', {stdio: 'inherit'});"#;

const GANACHE_LAUNCHER: &str = r#"require('dotenv/config');
const {execSync} = require('child_process');

execSync('node node_modules/.bin/ganache-cli --host {{HOST}} --port {{PORT}} --account_keys_path ./ganache.json', {stdio: 'inherit'});"#;

const HARDHAT_LAUNCHER: &str = r#"require('dotenv/config');
const {execSync} = require('child_process');

execSync('npx hardhat node --hostname {{HOST}} --port {{PORT}}', {stdio: 'inherit'});"#;

const HARDHAT_CONFIG: &str = r#"require('dotenv/config');
const {accounts} = require('./hardhat.accounts.json');

module.exports = {
  solidity: '0.7.3',
  paths: {
    sources: './contracts',
  },
  networks: {
    hardhat: {
      accounts,
    },
  },
};"#;

/// `scripts/postinstall.js`: installs native pods after every install.
pub fn postinstall_script() -> &'static str {
    POSTINSTALL
}

/// Script that starts the local chain on `endpoint`, `None` when no tooling
/// is selected.
pub fn launcher_script(tools: BlockchainTools, endpoint: &ChainEndpoint) -> Option<String> {
    let source = match tools {
        BlockchainTools::Truffle => GANACHE_LAUNCHER,
        BlockchainTools::Hardhat => HARDHAT_LAUNCHER,
        BlockchainTools::None => return None,
    };
    let port = endpoint.port.to_string();
    Some(render(
        source,
        &[("HOST", endpoint.host.as_str()), ("PORT", port.as_str())],
    ))
}

/// `hardhat.config.js`; accounts are read from the git-ignored accounts file.
pub fn hardhat_config() -> &'static str {
    HARDHAT_CONFIG
}

/// `hardhat.accounts.json`
pub fn hardhat_accounts(accounts: &[HardhatAccount]) -> Result<String, serde_json::Error> {
    pretty(&json!({ "accounts": accounts }))
}

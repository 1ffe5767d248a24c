//! The example contract and the screen that deploys it.

use crate::domain::{artifacts::render, value_objects::BlockchainTools};

const HELLO_CONTRACT: &str = r#"// SPDX-License-Identifier: MIT
pragma solidity >=0.4.22 <0.9.0;

contract Hello {
  string defaultSuffix;
  constructor() public {
    defaultSuffix = '!';
  }
  function sayHello(string memory name) public view returns(string memory) {
    return string(abi.encodePacked("Welcome to ", name, defaultSuffix));
  }
}
"#;

const APP: &str = r#"import {{{RPC_ENV}}} from '@env';
import React from 'react';
import { StyleSheet, Text, View } from 'react-native';
import Web3 from 'web3';

import Hello from '{{ARTIFACT}}';
{{KEYS_IMPORT}}

const styles = StyleSheet.create({
  center: {alignItems: 'center', justifyContent: 'center'},
});

export default function App(): JSX.Element {
  const [message, setMessage] = React.useState<string>('');
  const web3 = React.useMemo(
    () => new Web3(new Web3.providers.HttpProvider({{RPC_ENV}})),
    []
  );
  const shouldDeployContract = React.useCallback(async (abi, data, from: string) => {
    const deployment = new web3.eth.Contract(abi).deploy({data});
    const gas = await deployment.estimateGas();
    const {
      options: { address: contractAddress },
    } = await deployment.send({from, gas});
    return new web3.eth.Contract(abi, contractAddress);
  }, [web3]);
  React.useEffect(() => {
    (async () => {
{{ACCOUNT}}
      const contract = await shouldDeployContract(Hello.abi, Hello.bytecode, address);
      setMessage(await contract.methods.sayHello("React Native").call());
    })();
  }, [shouldDeployContract, setMessage]);
  return (
    <View style={[StyleSheet.absoluteFill, styles.center]}>
      <Text>{message}</Text>
    </View>
  );
}"#;

const TRUFFLE_KEYS: &str = "import {private_keys as privateKeys} from './ganache.json';";
const TRUFFLE_ACCOUNT: &str = "      const [address, privateKey] = Object.entries(privateKeys)[0];
      await web3.eth.accounts.privateKeyToAccount(privateKey);";

const HARDHAT_KEYS: &str = "import {accounts} from './hardhat.accounts.json';";
const HARDHAT_ACCOUNT: &str = "      const [{privateKey}] = accounts;
      const {address} = web3.eth.accounts.privateKeyToAccount(privateKey);";

/// `contracts/Hello.sol`
pub fn example_contract() -> &'static str {
    HELLO_CONTRACT
}

/// `App.tsx` for the selected tooling; `None` when there is no chain to
/// deploy to.
pub fn example_app(tools: BlockchainTools) -> Option<String> {
    let (artifact, keys, account) = match tools {
        BlockchainTools::Truffle => (
            "./build/contracts/Hello.json",
            TRUFFLE_KEYS,
            TRUFFLE_ACCOUNT,
        ),
        BlockchainTools::Hardhat => (
            "./artifacts/contracts/Hello.sol/Hello.json",
            HARDHAT_KEYS,
            HARDHAT_ACCOUNT,
        ),
        BlockchainTools::None => return None,
    };

    Some(render(
        APP,
        &[
            ("RPC_ENV", tools.rpc_env_name()),
            ("ARTIFACT", artifact),
            ("KEYS_IMPORT", keys),
            ("ACCOUNT", account),
        ],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truffle_app_reads_ganache_keys_and_build_output() {
        let app = example_app(BlockchainTools::Truffle).unwrap();
        assert!(app.starts_with("import {GANACHE_URL} from '@env';"));
        assert!(app.contains("from './build/contracts/Hello.json'"));
        assert!(app.contains("from './ganache.json'"));
        assert!(app.contains("new Web3.providers.HttpProvider(GANACHE_URL)"));
        assert!(!app.contains("{{"));
    }

    #[test]
    fn hardhat_app_reads_artifacts() {
        let app = example_app(BlockchainTools::Hardhat).unwrap();
        assert!(app.starts_with("import {HARDHAT_URL} from '@env';"));
        assert!(app.contains("./artifacts/contracts/Hello.sol/Hello.json"));
        assert!(app.contains("privateKeyToAccount(privateKey)"));
    }

    #[test]
    fn no_app_without_tooling() {
        assert!(example_app(BlockchainTools::None).is_none());
    }

    #[test]
    fn contract_greets() {
        assert!(example_contract().contains("function sayHello"));
    }
}

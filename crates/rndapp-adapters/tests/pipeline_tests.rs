//! End-to-end pipeline runs over the in-memory adapters.

use std::path::Path;

use rndapp_adapters::{MemoryFilesystem, RecordingCommandRunner};
use rndapp_core::{
    application::{
        ApplicationError, CreateService,
        ports::{CommandRunner, Filesystem},
    },
    domain::{
        BlockchainTools, CreateParams, CreateResult, CreationStatus, GeneratorSettings,
        artifacts::{DAPP_BEGIN, DAPP_END},
        entities::result::MISSING_PROJECT_DIR,
    },
};
use serde_json::Value;

const CWD: &str = "/work";

/// Stands in for `create-react-native-app`: creates the project with a
/// minimal manifest, app manifest and ignore file.
fn scaffolding_runner(fs: MemoryFilesystem, with_yarn_lock: bool) -> RecordingCommandRunner {
    RecordingCommandRunner::with_hook(move |cmd| {
        if cmd.args.first().map(String::as_str) != Some("create-react-native-app") {
            return Ok(());
        }
        let dir = cmd.cwd.join(&cmd.args[1]);
        fs.create_dir_all(&dir)?;
        fs.write_file(
            &dir.join("package.json"),
            r#"{"name":"demo","dependencies":{"x":"1.0.0"},"scripts":{"start":"expo start"}}"#,
        )?;
        fs.write_file(&dir.join("app.json"), r#"{"expo":{"name":"demo"}}"#)?;
        fs.write_file(&dir.join(".gitignore"), "node_modules/\n.expo/\n")?;
        if with_yarn_lock {
            fs.write_file(&dir.join("yarn.lock"), "")?;
        }
        Ok(())
    })
}

fn params(tools: BlockchainTools) -> CreateParams {
    CreateParams::builder("demo")
        .blockchain_tools(tools)
        .build()
        .unwrap()
}

fn run(
    tools: BlockchainTools,
    yarn: bool,
) -> (CreateResult, MemoryFilesystem, RecordingCommandRunner) {
    let fs = MemoryFilesystem::new();
    let runner = scaffolding_runner(fs.clone(), yarn);
    let service = CreateService::new(
        Box::new(fs.clone()),
        Box::new(runner.clone()),
        GeneratorSettings::default(),
        CWD,
    );
    (service.create(params(tools)), fs, runner)
}

fn read(fs: &MemoryFilesystem, rel: &str) -> String {
    fs.read_file(&Path::new(CWD).join("demo").join(rel))
        .unwrap_or_else(|| panic!("{rel} was not written"))
}

fn json(fs: &MemoryFilesystem, rel: &str) -> Value {
    serde_json::from_str(&read(fs, rel)).unwrap()
}

#[test]
fn truffle_with_yarn_succeeds_with_follow_up_command() {
    let (result, _, _) = run(BlockchainTools::Truffle, true);
    assert_eq!(result.status(), CreationStatus::Success);
    assert_eq!(result.message(), "cd demo; yarn ganache& yarn web;");
}

#[test]
fn env_file_is_exact() {
    let (_, fs, _) = run(BlockchainTools::Truffle, true);
    assert_eq!(read(&fs, ".env"), "GANACHE_URL=http://127.0.0.1:8545");
    assert_eq!(read(&fs, ".env.example"), read(&fs, ".env"));
    assert_eq!(
        read(&fs, "index.d.ts"),
        "declare module '@env' {\n  export const GANACHE_URL: string;\n}"
    );
}

#[test]
fn package_manifest_keeps_existing_keys() {
    let (_, fs, _) = run(BlockchainTools::Truffle, true);
    let pkg = json(&fs, "package.json");
    assert_eq!(pkg["name"], "demo");
    assert_eq!(pkg["dependencies"]["x"], "1.0.0");
    assert_eq!(pkg["dependencies"]["web3"], "1.3.1");
    assert_eq!(pkg["scripts"]["start"], "expo start");
    assert_eq!(pkg["scripts"]["ganache"], "node scripts/ganache");
    assert_eq!(pkg["devDependencies"]["ganache-cli"], "6.12.1");
}

#[test]
fn app_manifest_gets_native_identifiers() {
    let (_, fs, _) = run(BlockchainTools::Truffle, true);
    let app = json(&fs, "app.json");
    assert_eq!(app["expo"]["name"], "demo");
    assert_eq!(app["expo"]["ios"]["bundleIdentifier"], "com.demo");
    assert_eq!(app["expo"]["android"]["package"], "com.demo");
}

#[test]
fn commands_run_in_order() {
    let (_, _, runner) = run(BlockchainTools::Truffle, true);
    assert_eq!(
        runner.command_lines(),
        [
            "npx create-react-native-app demo -t with-typescript",
            "expo eject",
            "npx truffle init",
            "yarn",
            "npx truffle compile",
        ]
    );
    let cwds: Vec<_> = runner.commands().into_iter().map(|c| c.cwd).collect();
    assert_eq!(cwds[0], Path::new(CWD));
    assert!(cwds[1..].iter().all(|cwd| cwd == Path::new("/work/demo")));
}

#[test]
fn generated_files_are_written() {
    let (_, fs, _) = run(BlockchainTools::Truffle, true);

    let index = read(&fs, "index.js");
    assert!(index.contains(DAPP_BEGIN) && index.contains(DAPP_END));
    assert!(index.contains("process.version = 'v9.40';"));

    assert!(read(&fs, "scripts/postinstall.js").contains("npx pod-install"));
    assert!(read(&fs, "scripts/ganache.js").contains("ganache-cli"));
    assert!(read(&fs, "metro.config.js").contains("node-libs-browser"));
    assert!(read(&fs, "babel.config.js").contains("module:react-native-dotenv"));
    assert_eq!(json(&fs, "tsconfig.json")["compilerOptions"]["jsx"], "react-native");
    assert!(read(&fs, "contracts/Hello.sol").contains("contract Hello"));
    assert!(read(&fs, "App.tsx").contains("./build/contracts/Hello.json"));

    let gitignore = read(&fs, ".gitignore");
    assert!(gitignore.starts_with("node_modules/\n.expo/\n"));
    assert!(gitignore.ends_with("\n# environment config\n.env\n\n# truffle\nganache.json\n"));
}

#[test]
fn npm_project_uses_npm_everywhere() {
    let (result, _, runner) = run(BlockchainTools::Truffle, false);
    assert_eq!(
        result.message(),
        "cd demo; npm run-script ganache& npm run-script web;"
    );
    assert!(runner.command_lines().contains(&"npm i".to_string()));
}

#[test]
fn hardhat_writes_its_own_config() {
    let (result, fs, runner) = run(BlockchainTools::Hardhat, true);
    assert!(result.is_success());
    assert_eq!(result.message(), "cd demo; yarn hardhat& yarn web;");

    assert_eq!(read(&fs, ".env"), "HARDHAT_URL=http://127.0.0.1:8545");
    assert!(read(&fs, "hardhat.config.js").contains("require('./hardhat.accounts.json')"));
    let accounts = json(&fs, "hardhat.accounts.json");
    assert_eq!(accounts["accounts"].as_array().map(Vec::len), Some(3));
    assert!(read(&fs, "scripts/hardhat.js").contains("npx hardhat node"));
    assert!(read(&fs, ".gitignore").ends_with("hardhat.accounts.json\n"));

    let lines = runner.command_lines();
    assert!(!lines.iter().any(|l| l.contains("truffle")));
    assert_eq!(lines.last().map(String::as_str), Some("npx hardhat compile"));
}

#[test]
fn no_tooling_skips_chain_and_example() {
    let (result, fs, runner) = run(BlockchainTools::None, true);
    assert_eq!(result.message(), "cd demo; yarn web;");
    assert_eq!(
        runner.command_lines(),
        [
            "npx create-react-native-app demo -t with-typescript",
            "expo eject",
            "yarn",
        ]
    );
    assert!(fs.read_file(Path::new("/work/demo/App.tsx")).is_none());
    assert!(fs.read_file(Path::new("/work/demo/scripts/ganache.js")).is_none());
    assert!(read(&fs, ".gitignore").ends_with("\n# environment config\n.env\n"));
}

#[test]
fn missing_project_dir_fails_without_writes() {
    let fs = MemoryFilesystem::new();
    let runner = RecordingCommandRunner::new();
    let service = CreateService::new(
        Box::new(fs.clone()),
        Box::new(runner.clone()),
        GeneratorSettings::default(),
        CWD,
    );

    let result = service.create(params(BlockchainTools::Truffle));

    assert_eq!(result.status(), CreationStatus::Failure);
    assert_eq!(result.message(), MISSING_PROJECT_DIR);
    assert!(!fs.exists(Path::new("/work/demo/scripts")));
    assert!(fs.list_files().is_empty());
    assert_eq!(runner.commands().len(), 1);
}

#[test]
fn failing_install_stops_before_example() {
    let fs = MemoryFilesystem::new();
    let scaffold = scaffolding_runner(fs.clone(), true);
    let runner = RecordingCommandRunner::with_hook(move |cmd| {
        if cmd.program == "yarn" {
            return Err(ApplicationError::CommandFailed {
                command: cmd.to_string(),
                code: Some(1),
            }
            .into());
        }
        scaffold.run(cmd)
    });
    let service = CreateService::new(
        Box::new(fs.clone()),
        Box::new(runner.clone()),
        GeneratorSettings::default(),
        CWD,
    );

    let result = service.create(params(BlockchainTools::Truffle));

    assert_eq!(result.status(), CreationStatus::Failure);
    assert_eq!(
        result.message(),
        "Step 'install-dependencies' failed: `yarn` failed with exit code 1"
    );
    assert!(fs.read_file(Path::new("/work/demo/.env")).is_some());
    assert!(fs.read_file(Path::new("/work/demo/contracts/Hello.sol")).is_none());
    assert_eq!(runner.command_lines().last().map(String::as_str), Some("yarn"));
}

#[test]
fn shim_version_is_configurable() {
    let fs = MemoryFilesystem::new();
    let runner = scaffolding_runner(fs.clone(), true);
    let settings = GeneratorSettings {
        shim_process_version: "v16.0".into(),
        rpc_url: "http://localhost:7545".into(),
    };
    let service = CreateService::new(Box::new(fs.clone()), Box::new(runner), settings, CWD);

    assert!(service.create(params(BlockchainTools::Truffle)).is_success());
    assert!(read(&fs, "index.js").contains("process.version = 'v16.0';"));
    assert_eq!(read(&fs, ".env"), "GANACHE_URL=http://localhost:7545");
}

fn run_with_settings(
    tools: BlockchainTools,
    settings: GeneratorSettings,
) -> (CreateResult, MemoryFilesystem) {
    let fs = MemoryFilesystem::new();
    let runner = scaffolding_runner(fs.clone(), true);
    let service = CreateService::new(Box::new(fs.clone()), Box::new(runner), settings, CWD);
    (service.create(params(tools)), fs)
}

#[test]
fn launcher_listens_where_env_points() {
    let settings = GeneratorSettings {
        rpc_url: "http://127.0.0.1:7545".into(),
        ..GeneratorSettings::default()
    };

    let (result, fs) = run_with_settings(BlockchainTools::Hardhat, settings.clone());
    assert!(result.is_success());
    assert_eq!(read(&fs, ".env"), "HARDHAT_URL=http://127.0.0.1:7545");
    assert!(
        read(&fs, "scripts/hardhat.js")
            .contains("npx hardhat node --hostname 127.0.0.1 --port 7545")
    );

    let (result, fs) = run_with_settings(BlockchainTools::Truffle, settings);
    assert!(result.is_success());
    assert_eq!(read(&fs, ".env"), "GANACHE_URL=http://127.0.0.1:7545");
    assert!(read(&fs, "scripts/ganache.js").contains("--host 127.0.0.1 --port 7545"));
}

#[test]
fn unusable_rpc_url_fails_at_script_step() {
    let settings = GeneratorSettings {
        rpc_url: "ws://127.0.0.1:8545".into(),
        ..GeneratorSettings::default()
    };

    let (result, fs) = run_with_settings(BlockchainTools::Hardhat, settings);
    assert_eq!(result.status(), CreationStatus::Failure);
    assert!(
        result.message().starts_with("Step 'write-scripts' failed: Invalid RPC URL"),
        "{}",
        result.message()
    );
    assert!(fs.read_file(Path::new("/work/demo/scripts/hardhat.js")).is_none());
}

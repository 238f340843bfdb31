//! End-to-end rendering tests from ABI JSON to TypeScript project files

use std::fs;

use mcpgen_codegen::{ContractRenderer, RenderOptions, RenderedFiles, TypeScriptRenderer};
use mcpgen_core::{ContractIR, ContractMetadata, Error, Result};
use mcpgen_ethereum::normalize_abi;

const TOKEN_ABI: &str = r#"[
  {
    "type": "constructor",
    "inputs": [{"name": "supply", "type": "uint256"}],
    "stateMutability": "nonpayable"
  },
  {
    "type": "function",
    "name": "balanceOf",
    "inputs": [{"name": "account", "type": "address"}],
    "outputs": [{"name": "", "type": "uint256"}],
    "stateMutability": "view"
  },
  {
    "type": "function",
    "name": "transfer",
    "inputs": [
      {"name": "to", "type": "address"},
      {"name": "amount", "type": "uint256"}
    ],
    "outputs": [{"name": "", "type": "bool"}],
    "stateMutability": "nonpayable"
  },
  {
    "type": "function",
    "name": "getHolders",
    "inputs": [{"name": "ids", "type": "uint256[3]"}],
    "outputs": [{"name": "", "type": "address[]"}],
    "stateMutability": "view"
  },
  {
    "type": "event",
    "name": "Transfer",
    "inputs": [
      {"name": "from", "type": "address", "indexed": true},
      {"name": "to", "type": "address", "indexed": true},
      {"name": "value", "type": "uint256", "indexed": false}
    ],
    "anonymous": false
  },
  {"type": "receive", "stateMutability": "payable"}
]"#;

fn token() -> ContractIR {
    let metadata = ContractMetadata::new("My Token", "ethereum")
        .with_address("0x6B175474E89094C44Da98b954EedeAC495271d0F");
    normalize_abi(TOKEN_ABI, metadata).unwrap()
}

fn text<'a>(files: &'a RenderedFiles, path: &str) -> &'a str {
    std::str::from_utf8(&files[path]).unwrap()
}

#[test]
fn test_renders_fixed_file_set() -> Result<()> {
    let files = TypeScriptRenderer::new().render(&token())?;

    let paths: Vec<&str> = files.keys().map(String::as_str).collect();
    assert_eq!(
        paths,
        vec!["README.md", "package.json", "src/server.ts", "tsconfig.json"]
    );
    Ok(())
}

#[test]
fn test_render_is_deterministic() -> Result<()> {
    let contract = token();
    let renderer = TypeScriptRenderer::new().with_options(RenderOptions {
        include_tests: true,
        ..Default::default()
    });

    let first = renderer.render(&contract)?;
    let second = renderer.render(&contract)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_only_read_only_functions_become_tools() -> Result<()> {
    let files = TypeScriptRenderer::new().render(&token())?;
    let server = text(&files, "src/server.ts");

    assert!(server.contains("case ToolName.BALANCE_OF:"));
    assert!(server.contains("case ToolName.GET_HOLDERS:"));
    assert!(!server.contains("case ToolName.TRANSFER:"));
    assert!(!server.contains("TransferSchema"));
    assert!(server.contains("Unknown tool: ${name}"));

    // State-changing functions still appear in the embedded ABI
    assert!(server.contains("\"name\": \"transfer\""));
    assert!(server.contains("\"type\": \"receive\""));
    assert!(server.contains("\"type\": \"event\""));
    Ok(())
}

#[test]
fn test_tool_order_follows_declaration_order() -> Result<()> {
    let files = TypeScriptRenderer::new().render(&token())?;
    let server = text(&files, "src/server.ts");

    let balance = server.find("BALANCE_OF = \"balanceOf\"").unwrap();
    let holders = server.find("GET_HOLDERS = \"getHolders\"").unwrap();
    assert!(balance < holders);
    Ok(())
}

#[test]
fn test_input_schemas() -> Result<()> {
    let files = TypeScriptRenderer::new().render(&token())?;
    let server = text(&files, "src/server.ts");

    assert!(server.contains("export const BalanceOfSchema = z.object({"));
    assert!(server.contains("account: z.string().describe(\"address\"),"));
    assert!(server.contains("ids: z.array(z.number()).length(3).describe(\"uint256[3]\"),"));
    assert!(server.contains("contract.getFunction(\"balanceOf\")(parsed.account)"));
    Ok(())
}

#[test]
fn test_package_and_readme_metadata() -> Result<()> {
    let files = TypeScriptRenderer::new().render(&token())?;

    let package: serde_json::Value = serde_json::from_slice(&files["package.json"])?;
    assert_eq!(package["name"], "my-token-mcp-server");
    assert_eq!(package["version"], "1.0.0");
    assert_eq!(package["dependencies"]["ethers"], "^6.7.1");
    assert!(package["scripts"].get("test").is_none());

    let tsconfig: serde_json::Value = serde_json::from_slice(&files["tsconfig.json"])?;
    assert_eq!(tsconfig["compilerOptions"]["module"], "NodeNext");

    let readme = text(&files, "README.md");
    assert!(readme.starts_with("# My Token MCP Server"));
    assert!(readme.contains("- **Address**: 0x6B175474E89094C44Da98b954EedeAC495271d0F"));
    assert!(readme.contains("| `transfer` | function | nonpayable | no |"));
    assert!(readme.contains("| `balanceOf` | function | view | yes |"));
    Ok(())
}

#[test]
fn test_test_harness_is_optional() -> Result<()> {
    let renderer = TypeScriptRenderer::new().with_options(RenderOptions {
        include_tests: true,
        server_version: "2.1.0".to_string(),
        default_rpc_url: "http://localhost:8545".to_string(),
    });
    let files = renderer.render(&token())?;

    assert_eq!(files.len(), 6);
    assert!(text(&files, "tests/server.test.ts").contains("server.ToolName.BALANCE_OF"));
    assert!(text(&files, "vitest.config.ts").contains("defineConfig"));

    let package: serde_json::Value = serde_json::from_slice(&files["package.json"])?;
    assert_eq!(package["version"], "2.1.0");
    assert_eq!(package["scripts"]["test"], "vitest run");
    assert!(text(&files, "src/server.ts").contains("\"http://localhost:8545\""));
    Ok(())
}

#[test]
fn test_overloaded_functions_call_by_signature() -> Result<()> {
    let abi = r#"[
        {"type": "function", "name": "getPrice", "inputs": [], "outputs": [{"name": "", "type": "uint256"}], "stateMutability": "view"},
        {"type": "function", "name": "getPrice", "inputs": [{"name": "asset", "type": "address"}], "outputs": [{"name": "", "type": "uint256"}], "stateMutability": "view"}
    ]"#;
    let contract = normalize_abi(abi, ContractMetadata::new("Oracle", "ethereum"))?;
    let files = TypeScriptRenderer::new().render(&contract)?;
    let server = text(&files, "src/server.ts");

    assert!(server.contains("GET_PRICE = \"getPrice\""));
    assert!(server.contains("GET_PRICE_1 = \"getPrice_1\""));
    assert!(server.contains("contract.getFunction(\"getPrice()\")()"));
    assert!(server.contains("contract.getFunction(\"getPrice(address)\")(parsed.asset)"));
    Ok(())
}

#[test]
fn test_tool_identifiers_stay_unique() -> Result<()> {
    let abi = r#"[
        {"type": "function", "name": "getValue", "inputs": [], "outputs": [], "stateMutability": "view"},
        {"type": "function", "name": "get_value", "inputs": [], "outputs": [], "stateMutability": "view"},
        {"type": "function", "name": "foo", "inputs": [], "outputs": [], "stateMutability": "view"},
        {"type": "function", "name": "foo", "inputs": [{"name": "x", "type": "uint256"}], "outputs": [], "stateMutability": "view"},
        {"type": "function", "name": "foo1", "inputs": [], "outputs": [], "stateMutability": "view"}
    ]"#;
    let contract = normalize_abi(abi, ContractMetadata::new("Values", "ethereum"))?;
    let files = TypeScriptRenderer::new().render(&contract)?;
    let server = text(&files, "src/server.ts");

    assert!(server.contains("GET_VALUE = \"getValue\""));
    assert!(server.contains("GET_VALUE_2 = \"get_value\""));
    assert!(server.contains("FOO_1 = \"foo_1\""));
    assert!(server.contains("FOO_1_2 = \"foo1\""));

    assert_eq!(server.matches("case ToolName.GET_VALUE:").count(), 1);
    assert_eq!(server.matches("case ToolName.FOO_1:").count(), 1);
    assert_eq!(server.matches("export const GetValueSchema ").count(), 1);
    assert_eq!(server.matches("export const Foo1Schema ").count(), 1);
    assert!(server.contains("export const Foo12Schema "));
    Ok(())
}

#[test]
fn test_custom_template_directory() -> Result<()> {
    let dir = tempfile::tempdir()?;
    fs::write(
        dir.path().join("package.json.hbs"),
        "Test template for {{contract.name}}",
    )?;

    let files = TypeScriptRenderer::new()
        .with_template_dir(dir.path())
        .render(&token())?;

    assert_eq!(text(&files, "package.json"), "Test template for My Token");
    // Files without an override fall back to the built-ins
    assert!(text(&files, "src/server.ts").contains("StdioServerTransport"));
    Ok(())
}

#[test]
fn test_broken_template_fails_whole_render() -> Result<()> {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("README.md.hbs"), "{{contract.owner}}")?;

    let result = TypeScriptRenderer::new()
        .with_template_dir(dir.path())
        .render(&token());

    match result {
        Err(Error::Render { template, .. }) => assert_eq!(template, "README.md"),
        other => panic!("expected render error, got {:?}", other.map(|f| f.len())),
    }
    Ok(())
}

#[test]
fn test_renderer_trait_object() -> Result<()> {
    let renderer: Box<dyn ContractRenderer> = Box::new(TypeScriptRenderer::new());
    assert_eq!(renderer.language().to_string(), "typescript");
    assert_eq!(renderer.render(&token())?.len(), 4);
    Ok(())
}

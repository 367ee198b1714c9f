//! Library integration tests.

use tsc_lint::TscLintError;

#[test]
fn error_types_are_public() {
    let err = TscLintError::InvalidRuleOptions {
        rule: "all".into(),
        message: "unknown field `bogus`".into(),
    };
    assert!(err.to_string().contains("all"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> tsc_lint::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use tsc_lint::cli::{Cli, Commands};

    let cli = Cli::parse_from(["tsc-lint", "lint", "program.json", "--strict"]);

    if let Commands::Lint(args) = cli.command {
        assert!(args.strict);
    } else {
        panic!("Expected Lint command");
    }
}

#[test]
fn snapshot_drives_linter() {
    use tsc_lint::compiler::ProgramSnapshot;
    use tsc_lint::config::{parse_config, LintConfig};
    use tsc_lint::lint::{Linter, Severity};

    let snapshot = ProgramSnapshot::from_json_str(
        r#"{ "units": [ {
            "fileName": "a.ts",
            "text": "let n: number = 'x';",
            "diagnostics": [
              { "file": "a.ts", "category": "error", "code": 2322,
                "messageText": "Type 'string' is not assignable to type 'number'.",
                "start": 4, "length": 1 }
            ]
        } ] }"#,
    )
    .unwrap();
    let config: LintConfig =
        parse_config("rules:\n  all: 2\n", std::path::Path::new(".tsc-lint.yml")).unwrap();
    let linter = Linter::with_builtins(&config).unwrap();

    let unit = snapshot.unit("a.ts").unwrap();
    let diagnostics = linter.lint_unit(unit, &snapshot).unwrap();

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, Severity::Error);
    let span = diagnostics[0].span.as_ref().unwrap();
    assert_eq!(span.start_line(), 1);
    assert_eq!(span.start_column(), 4);
}

#[test]
fn mock_ui_is_public() {
    use tsc_lint::ui::{MockUI, UserInterface};

    let mut ui = MockUI::new();
    ui.warning("No file named 'x.ts' in snapshot");
    assert!(ui.has_warning("x.ts"));
}

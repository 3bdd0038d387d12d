//! Library integration tests.

use cinderbuild::CinderError;

#[test]
fn error_types_are_public() {
    let err = CinderError::ToolNotFound {
        name: "ctest".into(),
        hint: Some("CTest is required".into()),
    };
    assert!(err.to_string().contains("ctest"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> cinderbuild::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use cinderbuild::cli::{Cli, Commands};
    use clap::Parser;

    let cli = Cli::parse_from(["cinderbuild", "build", "out", "-j", "4"]);

    if let Some(Commands::Build(args)) = cli.command {
        assert_eq!(args.build_dir.to_str(), Some("out"));
        assert_eq!(args.jobs, Some(4));
    } else {
        panic!("Expected Build command");
    }
}

#[test]
fn dispatcher_runs_against_a_recording_context() {
    use cinderbuild::cli::{Cli, CommandDispatcher, CommandResult};
    use cinderbuild::context::Context;
    use cinderbuild::hooks::CopyLinker;
    use cinderbuild::process::{RecordingRunner, ToolResolver};
    use cinderbuild::project::Project;
    use cinderbuild::ui::MockUI;
    use clap::Parser;

    let temp = tempfile::TempDir::new().unwrap();
    let ctx = Context::new(
        Project::new(temp.path(), "demo"),
        ToolResolver::new(Vec::new()),
        Box::new(RecordingRunner::new()),
        Box::new(CopyLinker),
    );
    let dispatcher = CommandDispatcher::new(ctx);
    let mut ui = MockUI::new();

    let cli = Cli::parse_from(["cinderbuild", "package", "source", "--release-version", "1.0"]);
    let err = dispatcher.dispatch(&cli, &mut ui).unwrap_err();
    assert!(matches!(err, CinderError::ToolNotFound { .. }));

    let cli = Cli::parse_from(["cinderbuild", "build", "--skip-build"]);
    let result = dispatcher.dispatch(&cli, &mut ui).unwrap();
    assert_eq!(result, CommandResult::Success);
}

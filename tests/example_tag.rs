mod common;

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use byexample::errors::ByExampleError;
use byexample::example::PageContext;
use byexample::fs::mock::MockFileSystem;
use byexample_test_utils::builders::{ConfigFileBuilder, HandlerBuilder};
use byexample_test_utils::fake_runner::FakeRunner;

use crate::common::{init_tracing, values_fs, with_timeout};

type TestResult = Result<(), Box<dyn Error>>;

#[tokio::test]
async fn renders_source_table_then_transcript_table() -> TestResult {
    with_timeout(async {
        init_tracing();

        let runner = FakeRunner::new("ruby-lang.org\nfalse\n");
        let handler = HandlerBuilder::new(values_fs())
            .runner(Arc::new(runner.clone()))
            .build();

        let html = handler.render(&PageContext::default(), "values").await?;

        let source_path: PathBuf = ["examples", "values", "values.rb"].iter().collect();
        assert_eq!(runner.executed(), vec![source_path.clone()]);

        let tables: Vec<&str> = html.split("</table>").collect();
        // source table, transcript table, trailing newline
        assert_eq!(tables.len(), 3);

        let source = tables[0];
        assert_eq!(source.matches("<tr>").count(), 3);
        assert!(source.contains(
            "<td class=\"docs\"><p>Ruby has various value types including strings,\nintegers, floats, booleans, etc.</p></td><td class=\"code empty leading\"></td>"
        ));
        assert!(source.contains("<pre lang=\"ruby\">puts true && false</pre>"));
        assert_eq!(source.matches("<a href=\"https://try.ruby-lang.org/playground/#code=").count(), 1);

        let transcript = tables[1];
        assert_eq!(transcript.matches("<tr>").count(), 1);
        assert!(transcript.contains(&format!(
            "<pre lang=\"console\">$ ruby {}\nruby-lang.org\nfalse</pre>",
            source_path.display()
        )));
        assert!(!transcript.contains("<a href="));

        Ok(())
    })
    .await
}

#[tokio::test]
async fn page_title_selects_the_example() -> TestResult {
    with_timeout(async {
        init_tracing();

        let fs = MockFileSystem::new();
        fs.add_file("examples/my_example/my_example.rb", "puts 1\n");
        let runner = FakeRunner::new("1\n");
        let handler = HandlerBuilder::new(fs)
            .runner(Arc::new(runner.clone()))
            .build();

        let page = PageContext::with_title("My  Example");
        handler.render(&page, "something_else").await?;

        assert_eq!(
            runner.executed(),
            vec![["examples", "my_example", "my_example.rb"].iter().collect::<PathBuf>()]
        );
        Ok(())
    })
    .await
}

#[tokio::test]
async fn missing_example_fails_without_running_anything() -> TestResult {
    with_timeout(async {
        init_tracing();

        let fs = MockFileSystem::new();
        fs.add_dir("examples");
        let runner = FakeRunner::new("");
        let handler = HandlerBuilder::new(fs)
            .runner(Arc::new(runner.clone()))
            .build();

        let err = handler
            .render(&PageContext::with_title("my example"), "")
            .await
            .unwrap_err();

        match &err {
            ByExampleError::NotFound { name, roots } => {
                assert_eq!(name, "my_example");
                assert_eq!(roots, &vec!["examples".to_string()]);
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
        assert!(err.to_string().contains("[\"examples\"]"));
        assert!(runner.executed().is_empty());
        Ok(())
    })
    .await
}

#[tokio::test]
async fn blank_name_is_rejected() -> TestResult {
    with_timeout(async {
        init_tracing();

        let handler = HandlerBuilder::new(values_fs()).build();
        let err = handler
            .render(&PageContext::default(), "  ")
            .await
            .unwrap_err();
        assert!(matches!(err, ByExampleError::InvalidName));
        Ok(())
    })
    .await
}

#[tokio::test]
async fn later_search_roots_are_consulted() -> TestResult {
    with_timeout(async {
        init_tracing();

        let fs = MockFileSystem::new();
        fs.add_dir("drafts");
        fs.add_file("published/arrays/arrays.rb", "p [1, 2]\n");
        let runner = FakeRunner::new("[1, 2]\n");
        let handler = HandlerBuilder::new(fs)
            .config(ConfigFileBuilder::new().with_roots(&["drafts", "published"]).build())
            .runner(Arc::new(runner.clone()))
            .build();

        handler.render(&PageContext::default(), "arrays").await?;
        assert_eq!(
            runner.executed(),
            vec![["published", "arrays", "arrays.rb"].iter().collect::<PathBuf>()]
        );
        Ok(())
    })
    .await
}

#[tokio::test]
async fn transcript_comment_lines_become_docs() -> TestResult {
    with_timeout(async {
        init_tracing();

        let fs = MockFileSystem::new();
        fs.add_file("examples/errors/errors.rb", "raise 'boom'\n");
        let runner = FakeRunner::new("\n# the error is printed to stderr\nerrors.rb:1: boom\n");
        let handler = HandlerBuilder::new(fs)
            .config(ConfigFileBuilder::new().without_playground().build())
            .runner(Arc::new(runner))
            .build();

        let html = handler.render(&PageContext::default(), "errors").await?;
        assert!(!html.contains("<a href="));
        assert!(html.contains(
            "<td class=\"docs\"><p>the error is printed to stderr</p></td><td class=\"code\"><pre lang=\"console\">errors.rb:1: boom</pre></td>"
        ));
        Ok(())
    })
    .await
}

use pretty_assertions::assert_eq;
use repo_stats::error::RepoStatsError;
use repo_stats::prompt::Console;
use std::io::Cursor;

fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8(console.into_inner().1).unwrap()
}

#[test]
fn test_username_is_trimmed() {
    let mut console = console("  octocat  \n");

    assert_eq!(console.read_username().unwrap(), "octocat");
    assert_eq!(output(console), "Enter Github username: \n");
}

#[test]
fn test_blank_username_is_asked_again() {
    let mut console = console("\n   \noctocat\n");

    assert_eq!(console.read_username().unwrap(), "octocat");
    assert_eq!(
        output(console),
        "Enter Github username: \n\
         Username can't be empty. Try again\n\
         Enter Github username: \n\
         Username can't be empty. Try again\n\
         Enter Github username: \n"
    );
}

#[test]
fn test_end_of_input_without_username() {
    let mut console = console("\n");

    assert!(matches!(console.read_username(), Err(RepoStatsError::EmptyUsername)));
}

#[test]
fn test_confirm_answers() {
    let mut console = console(" y \nY\nn\nyes\n");

    assert!(console.confirm("Save data to csv? (y/n):").unwrap());
    assert!(!console.confirm("again?").unwrap());
    assert!(!console.confirm("again?").unwrap());
    assert!(!console.confirm("again?").unwrap());
    // End of input
    assert!(!console.confirm("again?").unwrap());
}

#[test]
fn test_confirm_ignore_case_answers() {
    let mut console = console("Y\ny\n N \n");

    assert!(console.confirm_ignore_case("Would you like to see the chart statistics? (y/n)").unwrap());
    assert!(console.confirm_ignore_case("again?").unwrap());
    assert!(!console.confirm_ignore_case("again?").unwrap());
    assert!(!console.confirm_ignore_case("again?").unwrap());
}
